//! Magnetic alignment guides.
//!
//! Guides are advisory: they never change where a drop commits and they may
//! show up for a drop that is otherwise rejected. Edges are compared in
//! screen pixels (`cell_px` per cell) so the threshold means the same thing
//! at any canvas size; the guide coordinates themselves are reported in cells.

#[cfg(test)]
#[path = "snap_test.rs"]
mod snap_test;

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::consts::{CELL_PX, SNAP_THRESHOLD_PX};
use crate::doc::{ItemId, Layout};
use crate::grid::Rect;
use crate::input::DragState;

/// Tuning for guide detection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SnapConfig {
    /// Rendered size of one cell in pixels.
    pub cell_px: f64,
    /// Edges closer than this many pixels produce a guide.
    pub threshold_px: f64,
}

impl Default for SnapConfig {
    fn default() -> Self {
        Self { cell_px: CELL_PX, threshold_px: SNAP_THRESHOLD_PX }
    }
}

/// Alignment guides to draw, in cell coordinates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapLines {
    /// X coordinates of vertical guides.
    pub vertical: BTreeSet<i32>,
    /// Y coordinates of horizontal guides.
    pub horizontal: BTreeSet<i32>,
}

impl SnapLines {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertical.is_empty() && self.horizontal.is_empty()
    }
}

/// Guides for the rectangle a drag currently proposes.
///
/// Uses the snap position when the drop is valid and the hint otherwise.
#[must_use]
pub fn compute_snap_lines(layout: &Layout, drag: &DragState, config: &SnapConfig) -> SnapLines {
    let origin = drag.snap_position.unwrap_or(drag.hint_position);
    snap_lines_for(layout, drag.footprint.at(origin), drag.source.item_id(), config)
}

/// Guides for an arbitrary candidate rectangle against every item but `exclude`.
#[must_use]
pub fn snap_lines_for(layout: &Layout, candidate: Rect, exclude: Option<&ItemId>, config: &SnapConfig) -> SnapLines {
    let mut lines = SnapLines::default();
    let moving_v = [candidate.x, candidate.right()];
    let moving_h = [candidate.y, candidate.bottom()];

    for item in layout.items().iter().filter(|item| exclude != Some(&item.id)) {
        let rect = item.rect();
        for edge in [rect.x, rect.right()] {
            if moving_v.iter().any(|&m| near(m, edge, config)) {
                lines.vertical.insert(edge);
            }
        }
        for edge in [rect.y, rect.bottom()] {
            if moving_h.iter().any(|&m| near(m, edge, config)) {
                lines.horizontal.insert(edge);
            }
        }
    }
    lines
}

fn near(a: i32, b: i32, config: &SnapConfig) -> bool {
    (f64::from(a - b) * config.cell_px).abs() < config.threshold_px
}
