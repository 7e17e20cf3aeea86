//! Best-drop-position search.
//!
//! The common case is a direct hit: the clamped target is free and is
//! returned after a single collision check. Otherwise candidates are scanned
//! in Chebyshev rings of growing radius around the clamped target. The first
//! ring containing any free, in-bounds origin decides the result; within it
//! the origin closest (squared Euclidean) to the *unclamped* target wins, and
//! equal distances keep row-major scan order. The search is deterministic.

#[cfg(test)]
#[path = "finder_test.rs"]
mod finder_test;

use serde::Serialize;

use crate::collision::collides_with;
use crate::doc::{ItemId, Layout};
use crate::error::PlacementError;
use crate::grid::{Cell, Footprint, GridSpec};

/// Outcome of a drop-position search.
///
/// When `is_valid` is false, `position` is only a hint for visual feedback
/// and must never be committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DropPosition {
    pub position: Cell,
    pub is_valid: bool,
    /// False when the footprint cannot fit the grid at all.
    pub fits: bool,
}

impl DropPosition {
    fn valid(position: Cell) -> Self {
        Self { position, is_valid: true, fits: true }
    }

    fn blocked(hint: Cell) -> Self {
        Self { position: hint, is_valid: false, fits: true }
    }

    fn oversized(hint: Cell) -> Self {
        Self { position: hint, is_valid: false, fits: false }
    }

    /// The committed position, if the search succeeded.
    #[must_use]
    pub fn snap(&self) -> Option<Cell> {
        self.is_valid.then_some(self.position)
    }

    /// The rejection to report when the search failed.
    #[must_use]
    pub fn rejection(&self, footprint: Footprint, grid: &GridSpec) -> Option<PlacementError> {
        if self.is_valid {
            None
        } else if self.fits {
            Some(PlacementError::InvalidDrop { footprint })
        } else {
            Some(PlacementError::OutOfBounds { footprint, cols: grid.cols, rows: grid.rows })
        }
    }
}

/// Find the nearest free origin for `footprint` around `target`.
///
/// `exclude` is the item being moved, if any; its current rectangle does not block.
#[must_use]
pub fn find_best_drop_position(
    layout: &Layout,
    grid: &GridSpec,
    target: Cell,
    footprint: Footprint,
    exclude: Option<&ItemId>,
) -> DropPosition {
    let clamped = grid.clamp_origin(target.x, target.y, footprint);
    if !grid.fits(footprint) {
        return DropPosition::oversized(clamped);
    }
    if is_free(layout, grid, clamped, footprint, exclude) {
        return DropPosition::valid(clamped);
    }

    let max_radius = grid.cols.max(grid.rows);
    for radius in 1..=max_radius {
        if let Some(found) = best_in_ring(layout, grid, clamped, target, footprint, exclude, radius) {
            return DropPosition::valid(found);
        }
    }
    DropPosition::blocked(clamped)
}

fn best_in_ring(
    layout: &Layout,
    grid: &GridSpec,
    center: Cell,
    target: Cell,
    footprint: Footprint,
    exclude: Option<&ItemId>,
    radius: i32,
) -> Option<Cell> {
    let mut best: Option<(i64, Cell)> = None;
    let side_step = usize::try_from(radius.saturating_mul(2)).unwrap_or(1);
    for dy in -radius..=radius {
        // Top and bottom rows of the ring are full; rows between only have two ends.
        let step = if dy.abs() == radius { 1 } else { side_step };
        for dx in (-radius..=radius).step_by(step) {
            let cell = Cell::new(center.x.saturating_add(dx), center.y.saturating_add(dy));
            if !is_free(layout, grid, cell, footprint, exclude) {
                continue;
            }
            let dist = distance_sq(cell, target);
            if best.is_none_or(|(d, _)| dist < d) {
                best = Some((dist, cell));
            }
        }
    }
    best.map(|(_, cell)| cell)
}

fn is_free(layout: &Layout, grid: &GridSpec, origin: Cell, footprint: Footprint, exclude: Option<&ItemId>) -> bool {
    let rect = footprint.at(origin);
    grid.is_in_bounds(rect) && !collides_with(layout, rect, exclude)
}

fn distance_sq(a: Cell, b: Cell) -> i64 {
    let dx = i64::from(a.x) - i64::from(b.x);
    let dy = i64::from(a.y) - i64::from(b.y);
    dx.saturating_mul(dx).saturating_add(dy.saturating_mul(dy))
}
