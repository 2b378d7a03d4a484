// Copyright 2026 the Ramify Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Output types of a layout pass.

use alloc::vec::Vec;
use kurbo::{Line, Point, Rect, Size};
use ramify_tree::NodeId;

/// A node with its absolute position.
#[derive(Clone, Debug, PartialEq)]
pub struct PlacedNode {
    /// The placed node.
    pub id: NodeId,
    /// Top-left corner.
    pub origin: Point,
    /// Size used for placement (measured, or the configured default).
    pub size: Size,
    /// Distance from the root; the root has depth 0.
    pub depth: usize,
}

impl PlacedNode {
    /// The node's rectangle.
    pub fn rect(&self) -> Rect {
        Rect::from_origin_size(self.origin, self.size)
    }

    /// Left edge.
    pub fn x(&self) -> f64 {
        self.origin.x
    }

    /// Top edge.
    pub fn y(&self) -> f64 {
        self.origin.y
    }

    /// Width.
    pub fn width(&self) -> f64 {
        self.size.width
    }

    /// Height.
    pub fn height(&self) -> f64 {
        self.size.height
    }
}

/// Edge between a parent and one of its children.
#[derive(Clone, Debug, PartialEq)]
pub struct Connector {
    /// Parent end.
    pub from: NodeId,
    /// Child end.
    pub to: NodeId,
    /// Right-center of the parent.
    pub source: Point,
    /// Left edge of the child, at the center of the band the child was allocated.
    pub target: Point,
}

impl Connector {
    /// The connector as a straight segment.
    pub fn line(&self) -> Line {
        Line::new(self.source, self.target)
    }
}

/// Everything a renderer needs to draw one frame of the diagram.
///
/// Produced wholesale by [`compute_layout`](crate::compute_layout); never patched.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LayoutResult {
    /// Placed nodes in pre-order: root first, children in id order.
    pub nodes: Vec<PlacedNode>,
    /// One connector per parent → child edge, grouped by parent in pre-order.
    pub connectors: Vec<Connector>,
    /// Largest right and bottom edge over all nodes. The top-left corner is the origin.
    pub bounds: Size,
}

impl LayoutResult {
    /// Placement of `id`, if it was laid out.
    pub fn node(&self, id: &NodeId) -> Option<&PlacedNode> {
        self.nodes.iter().find(|n| n.id == *id)
    }

    /// The node whose rectangle contains `point`.
    ///
    /// Rectangle edges count as inside. Sibling bands never overlap, but if rectangles
    /// do touch, the node later in pre-order wins.
    pub fn node_at(&self, point: Point) -> Option<&PlacedNode> {
        self.nodes.iter().rev().find(|n| {
            let r = n.rect();
            point.x >= r.x0 && point.x <= r.x1 && point.y >= r.y0 && point.y <= r.y1
        })
    }

    /// Rectangle spanning the origin and [`LayoutResult::bounds`].
    pub fn bounding_rect(&self) -> Rect {
        Rect::from_origin_size(Point::ZERO, self.bounds)
    }

    /// Number of placed nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if nothing was placed.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
