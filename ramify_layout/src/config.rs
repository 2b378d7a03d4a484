// Copyright 2026 the Ramify Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Size;

/// Spacing and fallback sizes used by [`compute_layout`](crate::compute_layout).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutConfig {
    /// Size assumed for nodes without a dimension entry.
    pub default_size: Size,
    /// Vertical space between sibling subtrees.
    pub vertical_gap: f64,
    /// Horizontal space between a parent's right edge and its children.
    pub horizontal_gap: f64,
}

impl LayoutConfig {
    /// Size of a node that has not been measured yet.
    pub const DEFAULT_NODE_SIZE: Size = Size::new(200.0, 50.0);
    /// Default vertical gap between siblings.
    pub const DEFAULT_VERTICAL_GAP: f64 = 20.0;
    /// Default horizontal gap between depth levels.
    pub const DEFAULT_HORIZONTAL_GAP: f64 = 100.0;
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            default_size: Self::DEFAULT_NODE_SIZE,
            vertical_gap: Self::DEFAULT_VERTICAL_GAP,
            horizontal_gap: Self::DEFAULT_HORIZONTAL_GAP,
        }
    }
}
