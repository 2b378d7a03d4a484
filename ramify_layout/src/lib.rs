// Copyright 2026 the Ramify Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ramify Layout: turns a note tree plus rendered node sizes into a branching diagram.
//!
//! The root sits at the origin and the tree grows to the right. Each node owns a vertical
//! *band* tall enough for itself and everything below it; children stack inside their
//! parent's band, centered on the parent.
//!
//! [`compute_layout`] runs two passes over a [`Hierarchy`]:
//!
//! - **Measure** (bottom-up): each node's size comes from the [`DimensionTable`], or
//!   [`LayoutConfig::default_size`] when the node has not been measured yet. A leaf's
//!   subtree height is its own height; an inner node's is the larger of its own height and
//!   the stacked subtree heights of its children plus [`LayoutConfig::vertical_gap`]
//!   between them.
//! - **Position** (top-down): a node is vertically centered in its band, its children are
//!   placed [`LayoutConfig::horizontal_gap`] to its right in id order, and a [`Connector`]
//!   runs from the parent's right-center to the center of each child's band.
//!
//! Both passes walk the tree with explicit stacks, so depth is bounded only by memory.
//! The function is pure: identical inputs give identical (`==`) output, which matters
//! because renderers feed measured sizes back and trigger another pass.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use ramify_layout::{LayoutConfig, compute_layout};
//! use ramify_tree::{DimensionTable, NodeStore};
//!
//! let mut store = NodeStore::new("Central Topic");
//! let root = store.root().clone();
//! let child = store.insert_child(&root).unwrap();
//!
//! let mut dims = DimensionTable::new();
//! dims.set(child.clone(), Size::new(150.0, 40.0));
//!
//! let layout = compute_layout(&store, &dims, &LayoutConfig::default()).unwrap();
//! let placed = layout.node(&child).unwrap();
//! assert_eq!(placed.origin, Point::new(300.0, 5.0));
//! assert_eq!(layout.connectors[0].source, Point::new(200.0, 25.0));
//! assert_eq!(layout.connectors[0].target, Point::new(300.0, 25.0));
//! ```
//!
//! [`DimensionTable`]: ramify_tree::DimensionTable
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod engine;
mod error;
mod hierarchy;
mod result;

pub use config::LayoutConfig;
pub use engine::compute_layout;
pub use error::{LayoutError, Violation};
pub use hierarchy::Hierarchy;
pub use result::{Connector, LayoutResult, PlacedNode};
