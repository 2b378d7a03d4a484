// Copyright 2026 the Ramify Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The editing session: command application, focus, and the dimension feedback loop.

use alloc::string::String;
use kurbo::Size;
use ramify_focus::navigate_with;
use ramify_layout::{LayoutError, LayoutResult, compute_layout};
use ramify_tree::{DimensionTable, NodeId, NodeStore, TreeError};

use crate::command::{Changes, Command};
use crate::config::EditorConfig;
use crate::error::EditError;
use crate::snapshot::Snapshot;

/// One mind-map document being edited.
///
/// The editor always holds a layout for its current tree: every successful call to
/// [`Editor::apply`] or accepted [`Editor::report_dimensions`] recomputes it before
/// returning. If a layout pass aborts, the previous layout is kept and the error is
/// returned.
#[derive(Clone, Debug)]
pub struct Editor {
    store: NodeStore,
    dimensions: DimensionTable,
    focus: Option<NodeId>,
    config: EditorConfig,
    layout: LayoutResult,
}

impl Editor {
    /// Start a document containing only a root with `root_text`, focused.
    pub fn new(root_text: impl Into<String>, config: EditorConfig) -> Self {
        let store = NodeStore::new(root_text);
        let focus = Some(store.root().clone());
        // A lone root always lays out.
        let layout =
            compute_layout(&store, &DimensionTable::new(), &config.layout).unwrap_or_default();
        Self {
            store,
            dimensions: DimensionTable::new(),
            focus,
            config,
            layout,
        }
    }

    /// Resume a document from a [`Snapshot`].
    ///
    /// A focus naming a node that is not in the snapshot falls back to the root.
    pub fn restore(snapshot: Snapshot, config: EditorConfig) -> Result<Self, EditError> {
        let store = NodeStore::from_records(snapshot.nodes)?;
        let focus = snapshot
            .focus
            .map(|id| if store.contains(&id) { id } else { store.root().clone() });
        let mut editor = Self {
            store,
            dimensions: DimensionTable::new(),
            focus,
            config,
            layout: LayoutResult::default(),
        };
        editor.relayout()?;
        tracing::debug!(nodes = editor.store.len(), "restored document");
        Ok(editor)
    }

    /// Capture the nodes and focus for persistence.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            nodes: self.store.to_records(),
            focus: self.focus.clone(),
        }
    }

    /// The tree.
    pub fn store(&self) -> &NodeStore {
        &self.store
    }

    /// Sizes reported so far.
    pub fn dimensions(&self) -> &DimensionTable {
        &self.dimensions
    }

    /// The focused node.
    pub fn focus(&self) -> Option<&NodeId> {
        self.focus.as_ref()
    }

    /// Layout of the current tree and sizes.
    pub fn layout(&self) -> &LayoutResult {
        &self.layout
    }

    /// Active configuration.
    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Apply a command and recompute the layout if the tree changed.
    ///
    /// Stale ids yield [`TreeError::NotFound`] and deleting the root yields
    /// [`TreeError::InvalidOperation`]; in both cases nothing changes (see
    /// [`EditError::is_recoverable`]).
    pub fn apply(&mut self, command: Command) -> Result<Changes, EditError> {
        tracing::debug!(?command, "applying command");
        let mut changes = Changes::empty();
        match command {
            Command::InsertChild(parent) => {
                let id = self.store.insert_child(&parent)?;
                changes |= Changes::STRUCTURE | self.set_focus(Some(id));
            }
            Command::InsertSibling(reference) => {
                let id = self.store.insert_sibling(&reference)?;
                changes |= Changes::STRUCTURE | self.set_focus(Some(id));
            }
            Command::Delete(id) => {
                let removed = self.store.delete_subtree(&id)?;
                for gone in &removed.nodes {
                    self.dimensions.remove(gone);
                }
                let focus = match removed.parent {
                    Some(parent) => Some(parent),
                    None => self.focus.clone().filter(|f| self.store.contains(f)),
                };
                changes |= Changes::STRUCTURE | self.set_focus(focus);
            }
            Command::UpdateText(id, text) => {
                self.store.update_text(&id, text)?;
                changes |= Changes::TEXT;
            }
            Command::SetFocus(id) => {
                self.require(&id)?;
                changes |= self.set_focus(Some(id));
            }
            Command::Navigate(from, direction) => {
                self.require(&from)?;
                let to = navigate_with(&self.config.navigation, &self.store, &from, direction);
                changes |= self.set_focus(Some(to));
            }
        }

        if changes.intersects(Changes::STRUCTURE | Changes::TEXT) && self.relayout()? {
            changes |= Changes::LAYOUT;
        }
        tracing::debug!(?changes, focus = ?self.focus, "command applied");
        Ok(changes)
    }

    /// Record the rendered size of a node and lay out again if it moved.
    ///
    /// Returns `Ok(true)` when the size was stored and the layout recomputed. Reports for
    /// nodes that no longer exist and reports with a non-finite axis are dropped without
    /// error, as are reports within [`EditorConfig::dimension_tolerance`] of the stored
    /// size on both axes.
    pub fn report_dimensions(&mut self, id: &NodeId, size: Size) -> Result<bool, EditError> {
        if !self.store.contains(id) {
            tracing::trace!(%id, "dropping size report for missing node");
            return Ok(false);
        }
        if !size.is_finite() {
            tracing::trace!(%id, ?size, "dropping non-finite size report");
            return Ok(false);
        }
        let tolerance = self.config.dimension_tolerance;
        if let Some(stored) = self.dimensions.get(id)
            && (stored.width - size.width).abs() < tolerance
            && (stored.height - size.height).abs() < tolerance
        {
            tracing::trace!(%id, ?stored, ?size, "size report within tolerance");
            return Ok(false);
        }
        tracing::debug!(%id, width = size.width, height = size.height, "size reported");
        self.dimensions.set(id.clone(), size);
        self.relayout()?;
        Ok(true)
    }

    /// Recompute the layout. Returns whether it changed.
    fn relayout(&mut self) -> Result<bool, LayoutError> {
        let layout = compute_layout(&self.store, &self.dimensions, &self.config.layout)?;
        if layout == self.layout {
            return Ok(false);
        }
        self.layout = layout;
        Ok(true)
    }

    fn set_focus(&mut self, focus: Option<NodeId>) -> Changes {
        debug_assert!(
            focus.as_ref().is_none_or(|f| self.store.contains(f)),
            "focus must name a live node"
        );
        if self.focus == focus {
            return Changes::empty();
        }
        self.focus = focus;
        Changes::FOCUS
    }

    fn require(&self, id: &NodeId) -> Result<(), TreeError> {
        if self.store.contains(id) {
            Ok(())
        } else {
            Err(TreeError::NotFound(id.clone()))
        }
    }
}
