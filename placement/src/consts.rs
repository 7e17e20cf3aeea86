//! Shared numeric constants for the placement crate.

// ── Grid ────────────────────────────────────────────────────────

/// Default number of columns on a signage canvas.
pub const GRID_COLS: i32 = 32;

/// Default number of rows on a signage canvas.
pub const GRID_ROWS: i32 = 18;

// ── Snap guides ─────────────────────────────────────────────────

/// Edge distance, in screen pixels, below which an alignment guide is shown.
pub const SNAP_THRESHOLD_PX: f64 = 5.0;

/// Pixel size of one cell on the reference 1920px-wide canvas.
pub const CELL_PX: f64 = 60.0;

// ── Palette ─────────────────────────────────────────────────────

/// Footprint used for palette drags of a component the registry does not know.
pub const FALLBACK_FOOTPRINT_W: i32 = 4;

/// See [`FALLBACK_FOOTPRINT_W`].
pub const FALLBACK_FOOTPRINT_H: i32 = 4;

/// Prefix for ids minted by [`crate::ids::SequentialIds`].
pub const DEFAULT_ID_PREFIX: &str = "item";
