// Copyright 2026 the Ramify Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Last reported rendered size per node.

use hashbrown::HashMap;
use kurbo::Size;

use crate::NodeId;

/// Rendered `(width, height)` of nodes, as last reported by the measuring collaborator.
///
/// Entries are optional; layout falls back to a configured default for ids without
/// one. The table does not know which ids are alive: entries for deleted nodes are
/// harmless to layout but should be dropped with [`DimensionTable::remove`] or
/// [`DimensionTable::retain`] to keep the table from growing.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DimensionTable {
    entries: HashMap<NodeId, Size>,
}

impl DimensionTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Size last reported for `id`.
    pub fn get(&self, id: &NodeId) -> Option<Size> {
        self.entries.get(id).copied()
    }

    /// Record a size for `id`, returning the previous entry.
    pub fn set(&mut self, id: NodeId, size: Size) -> Option<Size> {
        debug_assert!(
            size.is_finite(),
            "DimensionTable sizes must be finite; got {size:?}"
        );
        // Clamp finite negative extents to `0.0`.
        let size = Size::new(size.width.max(0.0), size.height.max(0.0));
        self.entries.insert(id, size)
    }

    /// Drop the entry for `id`.
    pub fn remove(&mut self, id: &NodeId) -> Option<Size> {
        self.entries.remove(id)
    }

    /// Keep only the entries for which `keep` returns true.
    pub fn retain(&mut self, mut keep: impl FnMut(&NodeId, Size) -> bool) {
        self.entries.retain(|id, size| keep(id, *size));
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no sizes have been reported.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&NodeId, Size)> + '_ {
        self.entries.iter().map(|(id, size)| (id, *size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_replaces_and_clamps() {
        let mut table = DimensionTable::new();
        let id = NodeId::from("a");
        assert_eq!(table.set(id.clone(), Size::new(10.0, 20.0)), None);
        assert_eq!(
            table.set(id.clone(), Size::new(-5.0, 30.0)),
            Some(Size::new(10.0, 20.0))
        );
        assert_eq!(table.get(&id), Some(Size::new(0.0, 30.0)));
    }

    #[test]
    fn retain_drops_entries() {
        let mut table = DimensionTable::new();
        table.set("a".into(), Size::new(1.0, 1.0));
        table.set("b".into(), Size::new(2.0, 2.0));
        table.retain(|id, _| id.as_str() == "b");
        assert_eq!(table.len(), 1);
        assert!(table.get(&"a".into()).is_none());
    }
}
