// Copyright 2026 the Ramify Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The measure and position passes.

use alloc::vec::Vec;
use hashbrown::HashSet;
use kurbo::{Point, Size};
use ramify_tree::{DimensionTable, NodeId};
use smallvec::{SmallVec, smallvec};

use crate::config::LayoutConfig;
use crate::error::{LayoutError, Violation};
use crate::hierarchy::Hierarchy;
use crate::result::{Connector, LayoutResult, PlacedNode};

/// A node reached from the root, with its children as indices into the visit order.
#[derive(Debug)]
struct Visit<'a> {
    id: &'a NodeId,
    children: SmallVec<[usize; 4]>,
}

#[derive(Clone, Copy, Debug, Default)]
struct Measured {
    size: Size,
    subtree_height: f64,
    /// Stacked height of the children bands including gaps; zero for leaves.
    children_height: f64,
}

/// A node waiting to be positioned: visit index, left edge, band center, depth.
type Pending = (usize, f64, f64, usize);

/// Lay out `tree` using the sizes in `dimensions`.
///
/// The root is placed with its band starting at the origin. Nodes missing from
/// `dimensions` use [`LayoutConfig::default_size`]; entries for ids not in the tree are
/// ignored.
///
/// Fails with [`LayoutError::PreconditionViolation`] if `tree` has no root, reaches a
/// node twice, or holds nodes the root cannot reach. No partial result is produced.
pub fn compute_layout<H>(
    tree: &H,
    dimensions: &DimensionTable,
    config: &LayoutConfig,
) -> Result<LayoutResult, LayoutError>
where
    H: Hierarchy + ?Sized,
{
    let order = visit_order(tree).inspect_err(|err| {
        tracing::error!(%err, "aborting layout pass");
    })?;
    let measured = measure(&order, dimensions, config);
    let result = position(&order, &measured, config);
    tracing::trace!(
        nodes = result.nodes.len(),
        connectors = result.connectors.len(),
        width = result.bounds.width,
        height = result.bounds.height,
        "layout pass complete"
    );
    Ok(result)
}

/// Pre-order walk from the root, children in hierarchy order.
fn visit_order<H>(tree: &H) -> Result<Vec<Visit<'_>>, Violation>
where
    H: Hierarchy + ?Sized,
{
    let root = tree.root().ok_or(Violation::MissingRoot)?;
    let total = tree.node_count();

    let mut order: Vec<Visit<'_>> = Vec::with_capacity(total);
    let mut seen: HashSet<&NodeId> = HashSet::with_capacity(total);
    let mut stack: SmallVec<[(&NodeId, Option<usize>); 16]> = smallvec![(root, None)];

    while let Some((id, parent)) = stack.pop() {
        if !seen.insert(id) {
            return Err(Violation::Revisited(id.clone()));
        }
        let index = order.len();
        if let Some(parent) = parent {
            order[parent].children.push(index);
        }
        order.push(Visit {
            id,
            children: SmallVec::new(),
        });

        let children: SmallVec<[&NodeId; 8]> = tree.children_of(id).collect();
        // Reversed so the first child is visited next.
        stack.extend(children.into_iter().rev().map(|c| (c, Some(index))));
    }

    if order.len() != total {
        return Err(Violation::Unreachable {
            reached: order.len(),
            total,
        });
    }
    Ok(order)
}

/// Bottom-up subtree heights. Children always come after their parent in `order`, so a
/// reverse sweep sees every child before its parent.
fn measure(
    order: &[Visit<'_>],
    dimensions: &DimensionTable,
    config: &LayoutConfig,
) -> Vec<Measured> {
    let mut measured = alloc::vec![Measured::default(); order.len()];
    for (index, visit) in order.iter().enumerate().rev() {
        let size = dimensions.get(visit.id).unwrap_or(config.default_size);
        let children_height = if visit.children.is_empty() {
            0.0
        } else {
            let stacked: f64 = visit
                .children
                .iter()
                .map(|&c| measured[c].subtree_height)
                .sum();
            let gaps = config.vertical_gap * (visit.children.len() - 1) as f64;
            stacked + gaps
        };
        measured[index] = Measured {
            size,
            subtree_height: size.height.max(children_height),
            children_height,
        };
    }
    measured
}

/// Top-down placement. Each pending node carries the center of the band its parent
/// allocated, and both the node and the connector pointing at it use that one value.
fn position(order: &[Visit<'_>], measured: &[Measured], config: &LayoutConfig) -> LayoutResult {
    let mut result = LayoutResult {
        nodes: Vec::with_capacity(order.len()),
        connectors: Vec::with_capacity(order.len().saturating_sub(1)),
        bounds: Size::ZERO,
    };
    let Some(root) = measured.first() else {
        return result;
    };

    let root_center = root.subtree_height / 2.0;
    let mut stack: SmallVec<[Pending; 16]> = smallvec![(0, 0.0, root_center, 0)];
    while let Some((index, x, center, depth)) = stack.pop() {
        let visit = &order[index];
        let m = measured[index];
        let origin = Point::new(x, center - m.size.height / 2.0);

        let source = Point::new(x + m.size.width, origin.y + m.size.height / 2.0);
        let child_x = x + m.size.width + config.horizontal_gap;
        let mut cursor = center - m.children_height / 2.0;
        let mut pending: SmallVec<[Pending; 8]> = SmallVec::new();
        for &child in &visit.children {
            let band = measured[child].subtree_height;
            let child_center = cursor + band / 2.0;
            result.connectors.push(Connector {
                from: visit.id.clone(),
                to: order[child].id.clone(),
                source,
                target: Point::new(child_x, child_center),
            });
            pending.push((child, child_x, child_center, depth + 1));
            cursor += band + config.vertical_gap;
        }
        // Reversed so the first child is placed next, keeping `nodes` in pre-order.
        stack.extend(pending.into_iter().rev());

        result.bounds.width = result.bounds.width.max(origin.x + m.size.width);
        result.bounds.height = result.bounds.height.max(origin.y + m.size.height);
        result.nodes.push(PlacedNode {
            id: visit.id.clone(),
            origin,
            size: m.size,
            depth,
        });
    }
    result
}
