// Copyright 2026 the Ramify Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ramify Focus: arrow-key navigation over a note tree.
//!
//! In a left-to-right diagram the arrow keys map directly onto tree structure:
//!
//! - [`Direction::Left`] moves to the parent.
//! - [`Direction::Right`] moves to the first child.
//! - [`Direction::Up`] / [`Direction::Down`] move to the previous / next sibling.
//!
//! Only structure is consulted, never geometry, so navigation works before the first
//! layout pass and is unaffected by node sizes. Children and siblings are taken in
//! [`NodeId`] order, the same order the layout stacks them top to bottom.
//!
//! ## Minimal example
//!
//! ```rust
//! use ramify_focus::{Direction, navigate};
//! use ramify_tree::NodeStore;
//!
//! let mut store = NodeStore::default();
//! let root = store.root().clone();
//! let x = store.insert_child(&root).unwrap();
//! let y = store.insert_child(&root).unwrap();
//!
//! assert_eq!(navigate(&store, &root, Direction::Right), x);
//! assert_eq!(navigate(&store, &x, Direction::Down), y);
//! // No wraparound: moving up from the first sibling stays put.
//! assert_eq!(navigate(&store, &x, Direction::Up), x);
//! ```
//!
//! Hosts that want different rules (for example wrapping between siblings) can select
//! [`WrapMode::Siblings`] or implement [`FocusPolicy`] themselves.
//!
//! This crate is `no_std`.

#![no_std]

use ramify_tree::{NodeId, NodeStore};

/// Direction of a navigation command.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Previous sibling.
    Up,
    /// Next sibling.
    Down,
    /// Parent.
    Left,
    /// First child.
    Right,
}

/// Whether sibling movement wraps at the ends of the sibling list.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum WrapMode {
    /// Stop at the first and last sibling.
    #[default]
    Never,
    /// Wrap from the last sibling to the first and back.
    Siblings,
}

/// Trait for focus navigation policies.
///
/// A policy receives the current focus and a direction and returns the node to focus
/// next, or `None` when focus should not move.
pub trait FocusPolicy {
    /// Compute the next focus target.
    fn next(&self, store: &NodeStore, origin: &NodeId, direction: Direction) -> Option<NodeId>;
}

/// Structural navigation: parent, first child, and neighbouring siblings in id order.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct TreeOrderPolicy {
    /// Sibling wrap behavior.
    pub wrap: WrapMode,
}

impl FocusPolicy for TreeOrderPolicy {
    fn next(&self, store: &NodeStore, origin: &NodeId, direction: Direction) -> Option<NodeId> {
        if !store.contains(origin) {
            return None;
        }
        match direction {
            Direction::Left => store.parent_of(origin).cloned(),
            Direction::Right => store.children_of(origin).next().cloned(),
            Direction::Up | Direction::Down => {
                let siblings = store.siblings_of(origin);
                let pos = siblings.iter().position(|id| *id == origin)?;
                let last = siblings.len() - 1;
                let target = match (direction, self.wrap) {
                    (Direction::Up, _) if pos > 0 => pos - 1,
                    (Direction::Up, WrapMode::Siblings) => last,
                    (Direction::Down, _) if pos < last => pos + 1,
                    (Direction::Down, WrapMode::Siblings) => 0,
                    _ => return None,
                };
                (target != pos).then(|| siblings[target].clone())
            }
        }
    }
}

/// Focus after moving from `current` in `direction` under [`TreeOrderPolicy::default`].
///
/// Returns `current` unchanged when there is nowhere to go, including when `current` is
/// not in the store.
pub fn navigate(store: &NodeStore, current: &NodeId, direction: Direction) -> NodeId {
    navigate_with(&TreeOrderPolicy::default(), store, current, direction)
}

/// Like [`navigate`], with an explicit policy.
pub fn navigate_with<P>(
    policy: &P,
    store: &NodeStore,
    current: &NodeId,
    direction: Direction,
) -> NodeId
where
    P: FocusPolicy + ?Sized,
{
    policy
        .next(store, current, direction)
        .unwrap_or_else(|| current.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// root ─┬─ x ── x1
    ///       ├─ y
    ///       └─ z
    fn fixture() -> (NodeStore, [NodeId; 5]) {
        let mut store = NodeStore::default();
        let root = store.root().clone();
        let x = store.insert_child(&root).unwrap();
        let y = store.insert_child(&root).unwrap();
        let z = store.insert_child(&root).unwrap();
        let x1 = store.insert_child(&x).unwrap();
        (store, [root, x, y, z, x1])
    }

    #[test]
    fn left_moves_to_parent() {
        let (store, [root, x, _, _, x1]) = fixture();
        assert_eq!(navigate(&store, &x1, Direction::Left), x);
        assert_eq!(navigate(&store, &x, Direction::Left), root);
        assert_eq!(navigate(&store, &root, Direction::Left), root, "root has no parent");
    }

    #[test]
    fn right_moves_to_first_child() {
        let (store, [root, x, y, _, x1]) = fixture();
        assert_eq!(navigate(&store, &root, Direction::Right), x);
        assert_eq!(navigate(&store, &x, Direction::Right), x1);
        assert_eq!(navigate(&store, &y, Direction::Right), y, "leaf stays put");
    }

    #[test]
    fn up_down_walk_siblings_without_wrap() {
        let (store, [root, x, y, z, x1]) = fixture();
        assert_eq!(navigate(&store, &z, Direction::Up), y);
        assert_eq!(navigate(&store, &y, Direction::Up), x);
        assert_eq!(navigate(&store, &x, Direction::Up), x);
        assert_eq!(navigate(&store, &x, Direction::Down), y);
        assert_eq!(navigate(&store, &z, Direction::Down), z);
        assert_eq!(navigate(&store, &x1, Direction::Down), x1, "only child");
        assert_eq!(navigate(&store, &root, Direction::Up), root);
    }

    #[test]
    fn sibling_wrap_is_opt_in() {
        let (store, [root, x, _, z, x1]) = fixture();
        let policy = TreeOrderPolicy {
            wrap: WrapMode::Siblings,
        };
        assert_eq!(navigate_with(&policy, &store, &x, Direction::Up), z);
        assert_eq!(navigate_with(&policy, &store, &z, Direction::Down), x);
        // A lone sibling has nowhere to wrap to.
        assert_eq!(policy.next(&store, &x1, Direction::Down), None);
        assert_eq!(policy.next(&store, &root, Direction::Up), None);
    }

    #[test]
    fn unknown_origin_does_not_move() {
        let (store, _) = fixture();
        let ghost = NodeId::from("ghost");
        assert_eq!(navigate(&store, &ghost, Direction::Right), ghost);
        assert_eq!(
            TreeOrderPolicy::default().next(&store, &ghost, Direction::Left),
            None
        );
    }
}
