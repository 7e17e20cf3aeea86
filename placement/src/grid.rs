//! Grid geometry: cell-space points, rectangles, and the canvas dimensions.
//!
//! Everything here is pure arithmetic over integer grid cells. The canvas
//! size is always passed in as a [`GridSpec`]; nothing in the crate looks up
//! "the" canvas from ambient state.

#[cfg(test)]
#[path = "grid_test.rs"]
mod grid_test;

use serde::{Deserialize, Serialize};

use crate::consts::{GRID_COLS, GRID_ROWS};

/// A pointer position in cell space, already divided by the cell size by the host.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An integer grid cell (also used for a rectangle's top-left origin).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    #[must_use]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A widget's size in grid cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Footprint {
    pub w: i32,
    pub h: i32,
}

impl Footprint {
    #[must_use]
    pub fn new(w: i32, h: i32) -> Self {
        Self { w, h }
    }

    /// Place this footprint with its top-left corner at `origin`.
    #[must_use]
    pub fn at(self, origin: Cell) -> Rect {
        Rect::new(origin.x, origin.y, self.w, self.h)
    }
}

/// An axis-aligned rectangle of grid cells, half-open on the right and bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    #[must_use]
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Exclusive right edge.
    #[must_use]
    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    /// Exclusive bottom edge.
    #[must_use]
    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    #[must_use]
    pub fn origin(&self) -> Cell {
        Cell::new(self.x, self.y)
    }

    #[must_use]
    pub fn footprint(&self) -> Footprint {
        Footprint::new(self.w, self.h)
    }

    /// Standard interval test: rectangles that merely share an edge do not overlap.
    #[must_use]
    pub fn overlaps(&self, other: &Rect) -> bool {
        !(self.right() <= other.x || other.right() <= self.x || self.bottom() <= other.y || other.bottom() <= self.y)
    }
}

/// Normalized rectangle (0.0–1.0 of the canvas) handed to widget renderers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Fraction {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Canvas dimensions in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSpec {
    pub cols: i32,
    pub rows: i32,
}

impl Default for GridSpec {
    fn default() -> Self {
        Self { cols: GRID_COLS, rows: GRID_ROWS }
    }
}

impl GridSpec {
    #[must_use]
    pub fn new(cols: i32, rows: i32) -> Self {
        Self { cols, rows }
    }

    /// Convert a cell rectangle to fractions of the canvas for rendering.
    #[must_use]
    pub fn cell_to_fraction(&self, rect: Rect) -> Fraction {
        let cols = f64::from(self.cols.max(1));
        let rows = f64::from(self.rows.max(1));
        Fraction {
            left: f64::from(rect.x) / cols,
            top: f64::from(rect.y) / rows,
            width: f64::from(rect.w) / cols,
            height: f64::from(rect.h) / rows,
        }
    }

    /// Whether `rect` lies entirely on the canvas.
    #[must_use]
    pub fn is_in_bounds(&self, rect: Rect) -> bool {
        rect.x >= 0 && rect.y >= 0 && rect.right() <= self.cols && rect.bottom() <= self.rows
    }

    /// Whether a footprint can be placed anywhere at all.
    #[must_use]
    pub fn fits(&self, footprint: Footprint) -> bool {
        footprint.w >= 1 && footprint.h >= 1 && footprint.w <= self.cols && footprint.h <= self.rows
    }

    /// Clamp an origin so that `footprint` stays within `[0, cols-w] × [0, rows-h]`.
    ///
    /// When the footprint is larger than the grid the result is pinned to 0
    /// on that axis; callers check [`GridSpec::fits`] first.
    #[must_use]
    pub fn clamp_origin(&self, x: i32, y: i32, footprint: Footprint) -> Cell {
        let max_x = self.cols.saturating_sub(footprint.w).max(0);
        let max_y = self.rows.saturating_sub(footprint.h).max(0);
        Cell::new(x.clamp(0, max_x), y.clamp(0, max_y))
    }

    /// The cell under a cell-space pointer position.
    ///
    /// Pointers far off the canvas are pulled into a band one canvas wide on
    /// each side, `[-cols, 2*cols] × [-rows, 2*rows]`, so later cell
    /// arithmetic stays in range.
    #[must_use]
    pub fn cell_at(&self, point: Point) -> Cell {
        Cell::new(
            floor_to_i32(point.x).max(self.cols.saturating_neg()).min(self.cols.saturating_mul(2)),
            floor_to_i32(point.y).max(self.rows.saturating_neg()).min(self.rows.saturating_mul(2)),
        )
    }

    /// Whether a cell-space pointer position is over the canvas.
    #[must_use]
    pub fn contains_point(&self, point: Point) -> bool {
        point.x >= 0.0 && point.y >= 0.0 && point.x < f64::from(self.cols) && point.y < f64::from(self.rows)
    }

    /// Number of cells on the canvas.
    #[must_use]
    pub fn area(&self) -> i32 {
        self.cols * self.rows
    }
}

#[allow(clippy::cast_possible_truncation)]
fn floor_to_i32(v: f64) -> i32 {
    if v.is_nan() {
        return 0;
    }
    v.floor().clamp(f64::from(i32::MIN), f64::from(i32::MAX)) as i32
}
