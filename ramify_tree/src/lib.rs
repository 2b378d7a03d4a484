// Copyright 2026 the Ramify Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ramify Tree: the canonical note tree behind a branching diagram.
//!
//! This crate owns the data a mind-map style editor mutates:
//!
//! - [`NodeStore`]: a flat map from [`NodeId`] to [`Node`] (text plus parent reference),
//!   with an auxiliary parent → ordered child set index kept in sync on every mutation.
//! - [`DimensionTable`]: the last rendered size reported for each node by whatever
//!   measures nodes on screen.
//!
//! The store maintains a single rooted tree at all times. New nodes always attach to an
//! existing node and deletion removes whole subtrees, so cycles and orphans cannot be
//! constructed through the API. Bulk import via [`NodeStore::from_records`] validates the
//! same invariant.
//!
//! ## Ordering
//!
//! Children and siblings are always reported in [`NodeId`] order (lexicographic on the id
//! string), never in insertion order. Layout and focus navigation both depend on this, so
//! identical sets of ids produce identical diagrams no matter how they were inserted.
//!
//! ```rust
//! use ramify_tree::NodeStore;
//!
//! let mut store = NodeStore::new("Central Topic");
//! let root = store.root().clone();
//! let a = store.insert_child(&root).unwrap();
//! let b = store.insert_sibling(&a).unwrap();
//!
//! let children: Vec<_> = store.children_of(&root).cloned().collect();
//! assert_eq!(children, vec![a.clone(), b]);
//!
//! let removed = store.delete_subtree(&a).unwrap();
//! assert_eq!(removed.parent, Some(root));
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for `kurbo`.
//! - `libm`: `no_std` builds relying on `libm` for floating-point math.
//! - `serde`: `Serialize`/`Deserialize` for [`NodeId`] and [`NodeRecord`].
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod dimensions;
mod error;
mod store;
mod types;

pub use dimensions::DimensionTable;
pub use error::{Malformed, TreeError};
pub use store::{Ancestors, DEFAULT_ROOT_TEXT, NodeStore, Removed};
pub use types::{Node, NodeId, NodeRecord};
