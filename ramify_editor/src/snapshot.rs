// Copyright 2026 the Ramify Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::collections::BTreeMap;
use ramify_tree::{NodeId, NodeRecord};

/// Persistent state of an editing session: the flat node map and the focus.
///
/// Rendered sizes and the layout are not part of a snapshot; they are rebuilt once the
/// restored nodes are drawn and measured again.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Snapshot {
    /// Every node keyed by id.
    pub nodes: BTreeMap<NodeId, NodeRecord>,
    /// Focused node, if any.
    #[cfg_attr(feature = "serde", serde(default))]
    pub focus: Option<NodeId>,
}
