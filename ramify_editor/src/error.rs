// Copyright 2026 the Ramify Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use ramify_layout::LayoutError;
use ramify_tree::TreeError;

/// Errors returned by [`Editor`](crate::Editor).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EditError {
    /// The tree rejected the command.
    #[error(transparent)]
    Tree(#[from] TreeError),
    /// The layout pass aborted; the previous layout is kept.
    #[error(transparent)]
    Layout(#[from] LayoutError),
}

impl EditError {
    /// Returns true for errors a front end should treat as a no-op: stale ids and
    /// disallowed actions such as deleting the root.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::Tree(TreeError::NotFound(_) | TreeError::InvalidOperation(_))
        )
    }
}
