// Copyright 2026 the Ramify Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the note tree: node identifiers and node records.

use alloc::{format, string::String, sync::Arc};
use core::borrow::Borrow;
use core::fmt;

/// Identifier of a node in a [`NodeStore`](crate::NodeStore).
///
/// Ids are immutable strings, cheap to clone, and totally ordered by their string value.
/// That order is the one children and siblings are reported in.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct NodeId(Arc<str>);

impl NodeId {
    /// Id given to the root of a freshly created store.
    pub const ROOT: &'static str = "root";

    /// Wrap an arbitrary string as an id.
    pub fn new(id: impl Into<Arc<str>>) -> Self {
        Self(id.into())
    }

    /// The id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Id minted by a store for its `serial`-th node.
    ///
    /// Fixed-width hex keeps lexicographic order equal to serial order.
    pub(crate) fn minted(serial: u32) -> Self {
        Self(format!("n{serial:08x}").into())
    }

    /// Inverse of [`NodeId::minted`], for resuming the counter after an import.
    pub(crate) fn serial(&self) -> Option<u32> {
        let hex = self.0.strip_prefix('n')?;
        if hex.len() != 8 {
            return None;
        }
        u32::from_str_radix(hex, 16).ok()
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for NodeId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for NodeId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for NodeId {
    fn from(id: String) -> Self {
        Self::new(id)
    }
}

/// A node as stored in the tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node {
    pub(crate) parent: Option<NodeId>,
    pub(crate) text: String,
}

impl Node {
    pub(crate) fn new(parent: Option<NodeId>, text: String) -> Self {
        Self { parent, text }
    }

    /// Parent of this node, or `None` for the root.
    pub fn parent(&self) -> Option<&NodeId> {
        self.parent.as_ref()
    }

    /// Text payload.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns true for the root node.
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

/// Flat export form of a node: its parent reference and text.
///
/// A map of id → record is the whole persistent state of a store; see
/// [`NodeStore::to_records`](crate::NodeStore::to_records) and
/// [`NodeStore::from_records`](crate::NodeStore::from_records).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeRecord {
    /// Parent id, `None` for the root.
    pub parent: Option<NodeId>,
    /// Text payload.
    pub text: String,
}

impl From<&Node> for NodeRecord {
    fn from(node: &Node) -> Self {
        Self {
            parent: node.parent.clone(),
            text: node.text.clone(),
        }
    }
}
