// Copyright 2026 the Ramify Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::NodeId;

/// Errors returned by [`NodeStore`](crate::NodeStore) operations.
///
/// `NotFound` and `InvalidOperation` are expected at runtime (stale ids from the UI,
/// attempts to delete the root); callers usually treat them as no-ops.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TreeError {
    /// The operation referenced an id that is not in the store.
    #[error("node `{0}` does not exist")]
    NotFound(NodeId),
    /// The operation is structurally disallowed.
    #[error("invalid operation: {0}")]
    InvalidOperation(&'static str),
    /// Imported records do not form a single rooted tree.
    #[error("malformed tree: {0}")]
    Malformed(#[from] Malformed),
}

/// Ways a set of imported records can fail to be a single rooted tree.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Malformed {
    /// No record has an empty parent.
    #[error("no root node")]
    NoRoot,
    /// More than one record has an empty parent.
    #[error("more than one root (`{0}` and `{1}`)")]
    MultipleRoots(NodeId, NodeId),
    /// The same id appears twice.
    #[error("duplicate node id `{0}`")]
    DuplicateId(NodeId),
    /// A record names a parent that does not exist.
    #[error("node `{node}` refers to missing parent `{parent}`")]
    DanglingParent {
        /// The offending node.
        node: NodeId,
        /// Its missing parent.
        parent: NodeId,
    },
    /// A record cannot reach the root through its parents.
    #[error("node `{0}` is part of a parent cycle")]
    Cycle(NodeId),
}
