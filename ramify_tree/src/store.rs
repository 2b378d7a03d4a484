// Copyright 2026 the Ramify Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core store implementation: structure, mutations, queries.

use alloc::{collections::BTreeMap, collections::BTreeSet, string::String, vec::Vec};
use hashbrown::HashMap;
use smallvec::SmallVec;

use crate::error::{Malformed, TreeError};
use crate::types::{Node, NodeId, NodeRecord};

/// Text given to the root by [`NodeStore::default`].
pub const DEFAULT_ROOT_TEXT: &str = "Central Topic";

/// The canonical note tree.
///
/// Nodes live in a single flat map keyed by [`NodeId`]; a node only knows its parent.
/// Child lists are derived from an index kept in sync by every mutation, so
/// [`NodeStore::children_of`] is cheap and always yields ids in sorted order.
///
/// The store always holds exactly one root, created by [`NodeStore::new`], which can be
/// edited but never deleted.
///
/// ## Example
///
/// ```rust
/// use ramify_tree::{NodeStore, TreeError};
///
/// let mut store = NodeStore::new("Central Topic");
/// let root = store.root().clone();
/// let child = store.insert_child(&root).unwrap();
/// store.update_text(&child, "first idea").unwrap();
///
/// assert_eq!(store.text(&child), Some("first idea"));
/// assert!(matches!(
///     store.delete_subtree(&root),
///     Err(TreeError::InvalidOperation(_))
/// ));
/// ```
#[derive(Clone)]
pub struct NodeStore {
    nodes: HashMap<NodeId, Node>,
    /// parent -> children; parents without children have no entry
    children: HashMap<NodeId, BTreeSet<NodeId>>,
    root: NodeId,
    /// next serial handed to [`NodeId::minted`]
    next_serial: u32,
}

impl core::fmt::Debug for NodeStore {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("NodeStore")
            .field("root", &self.root)
            .field("nodes", &self.nodes.len())
            .field("parents", &self.children.len())
            .field("next_serial", &self.next_serial)
            .finish_non_exhaustive()
    }
}

impl Default for NodeStore {
    fn default() -> Self {
        Self::new(DEFAULT_ROOT_TEXT)
    }
}

/// What [`NodeStore::delete_subtree`] removed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Removed {
    /// Parent of the deleted subtree, if it still exists. This is where focus should go.
    pub parent: Option<NodeId>,
    /// Every removed id, subtree root first, in pre-order.
    pub nodes: Vec<NodeId>,
}

impl NodeStore {
    /// Create a store holding only a root node with the given text.
    pub fn new(root_text: impl Into<String>) -> Self {
        let root = NodeId::from(NodeId::ROOT);
        let mut nodes = HashMap::new();
        nodes.insert(root.clone(), Node::new(None, root_text.into()));
        Self {
            nodes,
            children: HashMap::new(),
            root,
            next_serial: 0,
        }
    }

    /// Rebuild a store from flat id → record pairs.
    ///
    /// The records must describe a single rooted tree: exactly one record without a
    /// parent, every other parent present, and no cycles. Freshly minted ids continue
    /// after the highest minted id found in the input.
    pub fn from_records<I>(records: I) -> Result<Self, TreeError>
    where
        I: IntoIterator<Item = (NodeId, NodeRecord)>,
    {
        let mut nodes: HashMap<NodeId, Node> = HashMap::new();
        let mut root: Option<NodeId> = None;
        let mut next_serial = 0_u32;

        for (id, record) in records {
            if record.parent.is_none() {
                if let Some(existing) = &root {
                    // Report the pair in id order so the error is stable.
                    let (a, b) = if *existing < id {
                        (existing.clone(), id)
                    } else {
                        (id, existing.clone())
                    };
                    return Err(Malformed::MultipleRoots(a, b).into());
                }
                root = Some(id.clone());
            }
            if let Some(serial) = id.serial() {
                next_serial = next_serial.max(serial.saturating_add(1));
            }
            if nodes.contains_key(&id) {
                return Err(Malformed::DuplicateId(id).into());
            }
            nodes.insert(id, Node::new(record.parent, record.text));
        }

        let root = root.ok_or(Malformed::NoRoot)?;

        let mut children: HashMap<NodeId, BTreeSet<NodeId>> = HashMap::new();
        for (id, node) in &nodes {
            let Some(parent) = &node.parent else {
                continue;
            };
            if !nodes.contains_key(parent) {
                return Err(Malformed::DanglingParent {
                    node: id.clone(),
                    parent: parent.clone(),
                }
                .into());
            }
            children
                .entry(parent.clone())
                .or_default()
                .insert(id.clone());
        }

        let store = Self {
            nodes,
            children,
            root,
            next_serial,
        };

        // Every parent resolves, so anything the root cannot reach sits on a cycle.
        let stray = {
            let reachable: BTreeSet<&NodeId> =
                store.subtree_refs(&store.root).into_iter().collect();
            store
                .nodes
                .keys()
                .filter(|id| !reachable.contains(id))
                .min()
                .cloned()
        };
        if let Some(stray) = stray {
            return Err(Malformed::Cycle(stray).into());
        }

        Ok(store)
    }

    /// Export the store as a flat id → record map, ordered by id.
    pub fn to_records(&self) -> BTreeMap<NodeId, NodeRecord> {
        self.nodes
            .iter()
            .map(|(id, node)| (id.clone(), NodeRecord::from(node)))
            .collect()
    }

    /// Id of the root node.
    pub fn root(&self) -> &NodeId {
        &self.root
    }

    /// Number of nodes, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: a store holds at least its root.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns true if `id` names a node in the store.
    pub fn contains(&self, id: &NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    /// Look up a node.
    pub fn get(&self, id: &NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// Text of a node.
    pub fn text(&self, id: &NodeId) -> Option<&str> {
        self.nodes.get(id).map(Node::text)
    }

    /// Parent of a node, or `None` for the root and unknown ids.
    pub fn parent_of(&self, id: &NodeId) -> Option<&NodeId> {
        self.nodes.get(id).and_then(Node::parent)
    }

    /// All ids in sorted order.
    pub fn ids(&self) -> Vec<&NodeId> {
        let mut ids: Vec<&NodeId> = self.nodes.keys().collect();
        ids.sort_unstable();
        ids
    }

    /// Create an empty child of `parent` and return its id.
    pub fn insert_child(&mut self, parent: &NodeId) -> Result<NodeId, TreeError> {
        if !self.nodes.contains_key(parent) {
            return Err(TreeError::NotFound(parent.clone()));
        }
        let id = self.mint_id();
        self.nodes
            .insert(id.clone(), Node::new(Some(parent.clone()), String::new()));
        self.children
            .entry(parent.clone())
            .or_default()
            .insert(id.clone());
        Ok(id)
    }

    /// Create an empty node next to `reference` and return its id.
    ///
    /// The root has no siblings, so on the root this inserts a child instead.
    pub fn insert_sibling(&mut self, reference: &NodeId) -> Result<NodeId, TreeError> {
        let node = self
            .nodes
            .get(reference)
            .ok_or_else(|| TreeError::NotFound(reference.clone()))?;
        match node.parent.clone() {
            Some(parent) => self.insert_child(&parent),
            None => self.insert_child(reference),
        }
    }

    /// Replace the text of a node.
    pub fn update_text(&mut self, id: &NodeId, text: impl Into<String>) -> Result<(), TreeError> {
        let node = self
            .nodes
            .get_mut(id)
            .ok_or_else(|| TreeError::NotFound(id.clone()))?;
        node.text = text.into();
        Ok(())
    }

    /// Remove `id` and all of its descendants.
    ///
    /// The root cannot be deleted.
    pub fn delete_subtree(&mut self, id: &NodeId) -> Result<Removed, TreeError> {
        let node = self
            .nodes
            .get(id)
            .ok_or_else(|| TreeError::NotFound(id.clone()))?;
        let Some(parent) = node.parent.clone() else {
            return Err(TreeError::InvalidOperation("the root node cannot be deleted"));
        };

        let removed = self.subtree(id);
        for gone in &removed {
            self.nodes.remove(gone);
            self.children.remove(gone);
        }
        if let Some(siblings) = self.children.get_mut(&parent) {
            siblings.remove(id);
            if siblings.is_empty() {
                self.children.remove(&parent);
            }
        }

        Ok(Removed {
            parent: self.nodes.contains_key(&parent).then_some(parent),
            nodes: removed,
        })
    }

    /// Children of `id` in id order. Empty for leaves and unknown ids.
    pub fn children_of(&self, id: &NodeId) -> impl Iterator<Item = &NodeId> + '_ {
        self.children.get(id).into_iter().flatten()
    }

    /// Number of children of `id`.
    pub fn child_count(&self, id: &NodeId) -> usize {
        self.children.get(id).map_or(0, BTreeSet::len)
    }

    /// Nodes sharing `id`'s parent, `id` included, in id order.
    ///
    /// The root is its own only sibling. Unknown ids have no siblings.
    pub fn siblings_of(&self, id: &NodeId) -> Vec<&NodeId> {
        match self.nodes.get_key_value(id) {
            None => Vec::new(),
            Some((key, node)) => match &node.parent {
                None => alloc::vec![key],
                Some(parent) => self.children_of(parent).collect(),
            },
        }
    }

    /// Parent chain of `id`, nearest first, ending at the root.
    pub fn ancestors_of(&self, id: &NodeId) -> Ancestors<'_> {
        Ancestors {
            store: self,
            next: self.parent_of(id),
        }
    }

    /// Depth of `id` below the root (the root has depth 0).
    pub fn depth_of(&self, id: &NodeId) -> Option<usize> {
        self.contains(id).then(|| self.ancestors_of(id).count())
    }

    /// `id` and all of its descendants in pre-order (children in id order).
    ///
    /// Empty for unknown ids.
    pub fn subtree(&self, id: &NodeId) -> Vec<NodeId> {
        self.subtree_refs(id).into_iter().cloned().collect()
    }

    fn subtree_refs<'a>(&'a self, id: &NodeId) -> Vec<&'a NodeId> {
        let mut out = Vec::new();
        let Some((start, _)) = self.nodes.get_key_value(id) else {
            return out;
        };
        let mut stack: SmallVec<[&NodeId; 16]> = SmallVec::new();
        stack.push(start);
        while let Some(current) = stack.pop() {
            out.push(current);
            // Reversed so children pop in id order.
            if let Some(kids) = self.children.get(current) {
                stack.extend(kids.iter().rev());
            }
        }
        out
    }

    fn mint_id(&mut self) -> NodeId {
        loop {
            let id = NodeId::minted(self.next_serial);
            self.next_serial = self.next_serial.wrapping_add(1);
            if !self.nodes.contains_key(&id) {
                return id;
            }
        }
    }
}

/// Iterator over the ancestors of a node, see [`NodeStore::ancestors_of`].
#[derive(Clone, Debug)]
pub struct Ancestors<'a> {
    store: &'a NodeStore,
    next: Option<&'a NodeId>,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = &'a NodeId;

    fn next(&mut self) -> Option<&'a NodeId> {
        let current = self.next?;
        self.next = self.store.parent_of(current);
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn ids(items: &[&NodeId]) -> Vec<NodeId> {
        items.iter().map(|id| (*id).clone()).collect()
    }

    #[test]
    fn new_store_has_only_root() {
        let store = NodeStore::default();
        assert_eq!(store.len(), 1);
        assert_eq!(store.root().as_str(), NodeId::ROOT);
        assert_eq!(store.text(store.root()), Some(DEFAULT_ROOT_TEXT));
        assert!(store.get(store.root()).unwrap().is_root());
    }

    #[test]
    fn insert_child_on_missing_parent_fails() {
        let mut store = NodeStore::default();
        let missing = NodeId::from("nope");
        assert_eq!(
            store.insert_child(&missing),
            Err(TreeError::NotFound(missing.clone()))
        );
        assert_eq!(
            store.insert_sibling(&missing),
            Err(TreeError::NotFound(missing))
        );
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn sibling_of_root_is_a_child() {
        let mut store = NodeStore::default();
        let root = store.root().clone();
        let id = store.insert_sibling(&root).unwrap();
        assert_eq!(store.parent_of(&id), Some(&root));
        assert_eq!(store.text(&id), Some(""));
    }

    #[test]
    fn sibling_shares_parent() {
        let mut store = NodeStore::default();
        let root = store.root().clone();
        let a = store.insert_child(&root).unwrap();
        let a1 = store.insert_child(&a).unwrap();
        let a2 = store.insert_sibling(&a1).unwrap();
        assert_eq!(store.parent_of(&a2), Some(&a));
        assert_eq!(ids(&store.siblings_of(&a1)), vec![a1.clone(), a2.clone()]);
        assert_eq!(ids(&store.siblings_of(&root)), vec![root]);
    }

    #[test]
    fn children_are_ordered_by_id_not_insertion() {
        let records = [
            (NodeId::from("root"), NodeRecord::default()),
            (
                NodeId::from("b"),
                NodeRecord {
                    parent: Some("root".into()),
                    text: "second".into(),
                },
            ),
            (
                NodeId::from("a"),
                NodeRecord {
                    parent: Some("root".into()),
                    text: "first".into(),
                },
            ),
        ];
        let store = NodeStore::from_records(records).unwrap();
        let kids: Vec<_> = store.children_of(store.root()).cloned().collect();
        assert_eq!(kids, vec![NodeId::from("a"), NodeId::from("b")]);
    }

    #[test]
    fn update_text_replaces() {
        let mut store = NodeStore::default();
        let root = store.root().clone();
        store.update_text(&root, "Plans").unwrap();
        assert_eq!(store.text(&root), Some("Plans"));
        assert!(matches!(
            store.update_text(&"x".into(), "y"),
            Err(TreeError::NotFound(_))
        ));
    }

    #[test]
    fn delete_removes_descendants() {
        let mut store = NodeStore::default();
        let root = store.root().clone();
        let a = store.insert_child(&root).unwrap();
        let b = store.insert_child(&a).unwrap();
        let keep = store.insert_child(&root).unwrap();

        let removed = store.delete_subtree(&a).unwrap();
        assert_eq!(removed.parent, Some(root.clone()));
        assert_eq!(removed.nodes, vec![a.clone(), b.clone()]);
        assert!(!store.contains(&a));
        assert!(!store.contains(&b));
        assert_eq!(store.children_of(&root).cloned().collect::<Vec<_>>(), vec![keep]);
        assert_eq!(store.child_count(&a), 0);
    }

    #[test]
    fn root_cannot_be_deleted() {
        let mut store = NodeStore::default();
        let root = store.root().clone();
        store.insert_child(&root).unwrap();
        assert!(matches!(
            store.delete_subtree(&root),
            Err(TreeError::InvalidOperation(_))
        ));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn ancestors_walk_to_root() {
        let mut store = NodeStore::default();
        let root = store.root().clone();
        let a = store.insert_child(&root).unwrap();
        let b = store.insert_child(&a).unwrap();
        let c = store.insert_child(&b).unwrap();
        let chain: Vec<_> = store.ancestors_of(&c).cloned().collect();
        assert_eq!(chain, vec![b, a, root.clone()]);
        assert_eq!(store.ancestors_of(&root).count(), 0);
        assert_eq!(store.depth_of(&c), Some(3));
    }

    #[test]
    fn subtree_is_preorder() {
        let mut store = NodeStore::default();
        let root = store.root().clone();
        let a = store.insert_child(&root).unwrap();
        let b = store.insert_child(&root).unwrap();
        let a1 = store.insert_child(&a).unwrap();
        assert_eq!(store.subtree(&root), vec![root, a, a1, b]);
    }

    #[test]
    fn records_round_trip_and_resume_minting() {
        let mut store = NodeStore::default();
        let root = store.root().clone();
        let a = store.insert_child(&root).unwrap();
        store.update_text(&a, "alpha").unwrap();

        let mut restored = NodeStore::from_records(store.to_records()).unwrap();
        assert_eq!(restored.to_records(), store.to_records());
        let fresh = restored.insert_child(&root).unwrap();
        assert!(fresh > a, "minting resumes after imported ids");
    }

    #[test]
    fn malformed_records_are_rejected() {
        fn entry(id: &str, parent: Option<&str>) -> (NodeId, NodeRecord) {
            let record = NodeRecord {
                parent: parent.map(NodeId::from),
                text: String::new(),
            };
            (NodeId::from(id), record)
        }

        assert_eq!(
            NodeStore::from_records([entry("a", Some("b"))]).unwrap_err(),
            TreeError::Malformed(Malformed::NoRoot)
        );
        assert_eq!(
            NodeStore::from_records([entry("b", None), entry("a", None)]).unwrap_err(),
            TreeError::Malformed(Malformed::MultipleRoots("a".into(), "b".into()))
        );
        assert_eq!(
            NodeStore::from_records([entry("r", None), entry("a", Some("zz"))]).unwrap_err(),
            TreeError::Malformed(Malformed::DanglingParent {
                node: "a".into(),
                parent: "zz".into()
            })
        );
        assert_eq!(
            NodeStore::from_records([entry("r", None), entry("a", None), entry("a", Some("r"))])
                .unwrap_err(),
            TreeError::Malformed(Malformed::MultipleRoots("a".into(), "r".into()))
        );
        assert_eq!(
            NodeStore::from_records([entry("r", None), entry("a", Some("r")), entry("a", Some("r"))])
                .unwrap_err(),
            TreeError::Malformed(Malformed::DuplicateId("a".into()))
        );
        assert_eq!(
            NodeStore::from_records([
                entry("r", None),
                entry("x", Some("y")),
                entry("y", Some("x")),
            ])
            .unwrap_err(),
            TreeError::Malformed(Malformed::Cycle("x".into()))
        );
    }
}
