//! Checked layout mutations.
//!
//! Every mutation runs against a copy of the layout. The copy is validated
//! and only returned when every invariant still holds; otherwise the caller
//! keeps the original and reports the rollback. No partial mutation is ever
//! observable.

#[cfg(test)]
#[path = "edit_test.rs"]
mod edit_test;

use crate::collision::first_collision;
use crate::doc::{ItemId, Layout, LayoutItem};
use crate::error::PlacementError;
use crate::grid::{Cell, GridSpec};

/// Apply `mutate` to a copy of `layout` and keep it only if it still validates.
///
/// # Errors
///
/// Propagates the error from `mutate`, or returns [`PlacementError::Invariant`]
/// when the mutated copy breaks a layout invariant.
pub fn apply_checked<F>(layout: &Layout, grid: &GridSpec, mutate: F) -> Result<Layout, PlacementError>
where
    F: FnOnce(&mut Layout) -> Result<(), PlacementError>,
{
    let mut next = layout.clone();
    mutate(&mut next)?;
    if let Err(err) = next.validate(grid) {
        tracing::warn!(error = %err, "mutation rolled back");
        return Err(err.into());
    }
    Ok(next)
}

/// Move an existing item to `origin`, keeping its footprint.
///
/// # Errors
///
/// [`PlacementError::UnknownItem`] if the id is absent, [`PlacementError::Invariant`]
/// if the new position overlaps or leaves the grid.
pub fn move_item(layout: &Layout, grid: &GridSpec, id: &ItemId, origin: Cell) -> Result<Layout, PlacementError> {
    apply_checked(layout, grid, |next| {
        if next.set_origin(id, origin) {
            Ok(())
        } else {
            Err(PlacementError::UnknownItem(id.clone()))
        }
    })
}

/// Append a new item on top of the z-order.
///
/// # Errors
///
/// [`PlacementError::Invariant`] if the item overlaps, leaves the grid, or reuses an id.
pub fn insert_item(layout: &Layout, grid: &GridSpec, item: LayoutItem) -> Result<Layout, PlacementError> {
    apply_checked(layout, grid, |next| {
        next.push(item);
        Ok(())
    })
}

/// Remove an item by id.
///
/// # Errors
///
/// [`PlacementError::UnknownItem`] if the id is absent.
pub fn delete_item(layout: &Layout, grid: &GridSpec, id: &ItemId) -> Result<Layout, PlacementError> {
    apply_checked(layout, grid, |next| match next.remove(id) {
        Some(_) => Ok(()),
        None => Err(PlacementError::UnknownItem(id.clone())),
    })
}

/// Clone an item one cell down and to the right under `new_id`.
///
/// The offset origin is clamped into bounds first. If the clamped rectangle
/// overlaps anything, including the original, the duplicate is refused
/// rather than shuffled elsewhere.
///
/// # Errors
///
/// [`PlacementError::UnknownItem`] if the id is absent, [`PlacementError::Blocked`]
/// if the clamped position is occupied.
pub fn duplicate_item(layout: &Layout, grid: &GridSpec, id: &ItemId, new_id: ItemId) -> Result<Layout, PlacementError> {
    let source = layout.get(id).ok_or_else(|| PlacementError::UnknownItem(id.clone()))?;
    let footprint = source.footprint();
    let origin = grid.clamp_origin(source.x + 1, source.y + 1, footprint);
    let rect = footprint.at(origin);
    if let Some(blocker) = first_collision(layout, rect, None) {
        return Err(PlacementError::Blocked { id: id.clone(), by: blocker.id.clone() });
    }
    let mut copy = source.clone();
    copy.id = new_id;
    copy.x = origin.x;
    copy.y = origin.y;
    insert_item(layout, grid, copy)
}
