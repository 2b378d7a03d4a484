// Copyright 2026 the Ramify Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use ramify_focus::Direction;
use ramify_tree::NodeId;

/// An editing command, as produced by input handling.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Add an empty node next to the given one (a child, if it is the root) and focus it.
    InsertSibling(NodeId),
    /// Add an empty child under the given node and focus it.
    InsertChild(NodeId),
    /// Delete the node and its subtree; focus moves to its parent.
    Delete(NodeId),
    /// Replace a node's text.
    UpdateText(NodeId, String),
    /// Focus a node.
    SetFocus(NodeId),
    /// Move focus from the given node in a direction.
    Navigate(NodeId, Direction),
}

bitflags::bitflags! {
    /// What an applied command changed.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Changes: u8 {
        /// Nodes were added or removed.
        const STRUCTURE = 0b0000_0001;
        /// A node's text changed.
        const TEXT      = 0b0000_0010;
        /// The focused node changed.
        const FOCUS     = 0b0000_0100;
        /// The layout differs from the previous one.
        const LAYOUT    = 0b0000_1000;
    }
}

impl Default for Changes {
    fn default() -> Self {
        Self::empty()
    }
}
