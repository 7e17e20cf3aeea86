//! One-cell keyboard moves for the selected item.

#[cfg(test)]
#[path = "keyboard_test.rs"]
mod keyboard_test;

use crate::collision::first_collision;
use crate::doc::{ItemId, Layout};
use crate::edit;
use crate::error::PlacementError;
use crate::grid::{Cell, GridSpec};
use crate::input::Direction;

/// Result of a keyboard move that was not rejected.
#[derive(Debug, Clone, PartialEq)]
pub enum KeyMove {
    /// The item moved; carries the updated layout.
    Moved { layout: Layout, to: Cell },
    /// The step was clamped away at the grid edge. Nothing changes.
    Unchanged,
}

/// Step `id` one cell in `direction`.
///
/// # Errors
///
/// [`PlacementError::UnknownItem`] if the id is absent, [`PlacementError::Blocked`]
/// if the neighbouring cells are occupied.
pub fn move_item(layout: &Layout, grid: &GridSpec, id: &ItemId, direction: Direction) -> Result<KeyMove, PlacementError> {
    let item = layout.get(id).ok_or_else(|| PlacementError::UnknownItem(id.clone()))?;
    let (dx, dy) = direction.delta();
    let footprint = item.footprint();
    let to = grid.clamp_origin(item.x + dx, item.y + dy, footprint);
    if to == item.origin() {
        return Ok(KeyMove::Unchanged);
    }
    if let Some(blocker) = first_collision(layout, footprint.at(to), Some(id)) {
        return Err(PlacementError::Blocked { id: id.clone(), by: blocker.id.clone() });
    }
    let layout = edit::move_item(layout, grid, id, to)?;
    Ok(KeyMove::Moved { layout, to })
}
