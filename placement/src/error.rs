//! Error types for placement operations and layout validation.
//!
//! None of these are fatal. The engine turns every [`PlacementError`] into an
//! [`crate::engine::Action::Rejected`] so the host can show transient feedback
//! while the layout stays exactly as it was.

use serde::Serialize;

use crate::doc::ItemId;
use crate::grid::Footprint;

/// A layout that breaks one of the placement invariants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[serde(tag = "type", content = "detail", rename_all = "snake_case")]
pub enum LayoutError {
    /// Width or height is zero or negative.
    #[error("item {id} has an empty footprint {w}x{h}")]
    EmptyFootprint { id: ItemId, w: i32, h: i32 },
    /// Item extends past the canvas edge.
    #[error("item {id} at ({x},{y}) {w}x{h} is outside the {cols}x{rows} grid")]
    OutOfBounds { id: ItemId, x: i32, y: i32, w: i32, h: i32, cols: i32, rows: i32 },
    /// Two items occupy the same cell.
    #[error("items {a} and {b} overlap")]
    Overlap { a: ItemId, b: ItemId },
    /// Two items share an id.
    #[error("duplicate item id {0}")]
    DuplicateId(ItemId),
}

/// Why a placement operation was not applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[serde(tag = "type", content = "detail", rename_all = "snake_case")]
pub enum PlacementError {
    /// No collision-free position was found for the footprint.
    #[error("no free position for a {}x{} widget", .footprint.w, .footprint.h)]
    InvalidDrop { footprint: Footprint },
    /// The footprint cannot fit the grid at all.
    #[error("a {}x{} widget does not fit a {cols}x{rows} grid", .footprint.w, .footprint.h)]
    OutOfBounds { footprint: Footprint, cols: i32, rows: i32 },
    /// The referenced item is not in the layout.
    #[error("item {0} not found")]
    UnknownItem(ItemId),
    /// A keyboard move or duplicate would land on another item.
    #[error("item {id} is blocked by {by}")]
    Blocked { id: ItemId, by: ItemId },
    /// A drag start arrived while another drag is active.
    #[error("a drag is already in progress")]
    DragInProgress,
    /// A drag event arrived with no drag active.
    #[error("no drag in progress")]
    NotDragging,
    /// Nothing is selected for a selection-scoped command.
    #[error("no item selected")]
    NoSelection,
    /// The mutated layout failed validation and was rolled back.
    #[error("layout invariant violated: {0}")]
    Invariant(#[from] LayoutError),
}

/// Failure to load or store a persisted layout.
#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    /// The document is not valid layout JSON.
    #[error("invalid layout JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// The document parsed but breaks a layout invariant.
    #[error("invalid layout: {0}")]
    Invalid(#[from] LayoutError),
}
