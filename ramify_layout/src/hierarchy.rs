// Copyright 2026 the Ramify Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use ramify_tree::{NodeId, NodeStore};

/// Read-only view of a tree, as consumed by [`compute_layout`](crate::compute_layout).
///
/// Implementations must report children in a stable order; the layout places them
/// top to bottom in exactly that order.
pub trait Hierarchy {
    /// The node placed at the origin.
    fn root(&self) -> Option<&NodeId>;

    /// Children of `id`, in placement order.
    fn children_of(&self, id: &NodeId) -> impl Iterator<Item = &NodeId>;

    /// Total number of nodes, used to detect nodes the root cannot reach.
    fn node_count(&self) -> usize;
}

impl Hierarchy for NodeStore {
    fn root(&self) -> Option<&NodeId> {
        Some(Self::root(self))
    }

    fn children_of(&self, id: &NodeId) -> impl Iterator<Item = &NodeId> {
        Self::children_of(self, id)
    }

    fn node_count(&self) -> usize {
        self.len()
    }
}
