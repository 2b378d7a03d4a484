// Copyright 2026 the Ramify Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use ramify_tree::NodeId;

/// Why a layout pass was aborted.
///
/// A [`NodeStore`](ramify_tree::NodeStore) cannot produce these; seeing one means the
/// hierarchy handed to the engine is out of sync with itself.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    /// The hierarchy is not a single tree reachable from its root.
    #[error("layout precondition violated: {0}")]
    PreconditionViolation(#[from] Violation),
}

/// The structural defect found in the hierarchy.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Violation {
    /// [`Hierarchy::root`](crate::Hierarchy::root) returned nothing.
    #[error("hierarchy has no root")]
    MissingRoot,
    /// A node was reached twice: a cycle, or a child listed under two parents.
    #[error("node `{0}` reached more than once")]
    Revisited(NodeId),
    /// Some nodes cannot be reached from the root.
    #[error("only {reached} of {total} nodes are reachable from the root")]
    Unreachable {
        /// Nodes visited from the root.
        reached: usize,
        /// Nodes the hierarchy claims to hold.
        total: usize,
    },
}
