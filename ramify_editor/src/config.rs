// Copyright 2026 the Ramify Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use ramify_focus::TreeOrderPolicy;
use ramify_layout::LayoutConfig;

/// Settings for an [`Editor`](crate::Editor).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EditorConfig {
    /// Spacing and default node size.
    pub layout: LayoutConfig,
    /// Reported sizes closer than this to the stored size, on both axes, are ignored.
    pub dimension_tolerance: f64,
    /// How directional navigation moves focus.
    pub navigation: TreeOrderPolicy,
}

impl EditorConfig {
    /// Default [`EditorConfig::dimension_tolerance`], in layout units.
    pub const DEFAULT_DIMENSION_TOLERANCE: f64 = 2.0;
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            layout: LayoutConfig::default(),
            dimension_tolerance: Self::DEFAULT_DIMENSION_TOLERANCE,
            navigation: TreeOrderPolicy::default(),
        }
    }
}
