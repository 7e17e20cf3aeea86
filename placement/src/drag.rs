//! Drag lifecycle state machine.
//!
//! `Idle → Dragging → Idle`. A drag ends either committed (drop on a valid
//! position) or cancelled (drop on an invalid position, pointer leaving the
//! canvas, explicit cancel). Only a committed drop produces a new layout, and
//! only after it passes validation; the controller never touches the layout
//! it is given.
//!
//! Every pointer update rebuilds the drag state from the values captured at
//! drag start plus the current pointer, so repeated updates with the same
//! pointer produce the same state.

#[cfg(test)]
#[path = "drag_test.rs"]
mod drag_test;

use crate::collision::find_collisions;
use crate::doc::{ItemId, Layout, LayoutItem};
use crate::edit;
use crate::error::PlacementError;
use crate::finder::find_best_drop_position;
use crate::grid::{Cell, Footprint, GridSpec, Point};
use crate::ids::IdGenerator;
use crate::input::{DragPhase, DragSource, DragState};
use crate::registry::ComponentRegistry;
use crate::snap::{SnapConfig, compute_snap_lines};

/// Read-only context every drag transition needs.
#[derive(Debug, Clone, Copy)]
pub struct DragContext<'a> {
    pub layout: &'a Layout,
    pub grid: &'a GridSpec,
    pub snap: &'a SnapConfig,
}

/// A committed drop.
#[derive(Debug, Clone, PartialEq)]
pub struct Commit {
    /// The layout after the drop.
    pub layout: Layout,
    /// The moved or inserted item.
    pub id: ItemId,
    /// Where it landed.
    pub origin: Cell,
    /// True for palette inserts.
    pub inserted: bool,
}

/// Owner of the single in-progress drag, if any.
#[derive(Debug, Clone, Default)]
pub struct DragController {
    phase: DragPhase,
}

impl DragController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn phase(&self) -> &DragPhase {
        &self.phase
    }

    #[must_use]
    pub fn state(&self) -> Option<&DragState> {
        match &self.phase {
            DragPhase::Dragging(state) => Some(state),
            DragPhase::Idle => None,
        }
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.phase.is_dragging()
    }

    /// Begin dragging an item already on the canvas.
    ///
    /// The grab offset keeps the item anchored to where it was picked up.
    ///
    /// # Errors
    ///
    /// [`PlacementError::DragInProgress`] if a drag is active,
    /// [`PlacementError::UnknownItem`] if the id is not in the layout.
    pub fn start_existing(&mut self, ctx: DragContext<'_>, id: &ItemId, pointer: Point) -> Result<&DragState, PlacementError> {
        self.ensure_idle()?;
        let item = ctx.layout.get(id).ok_or_else(|| PlacementError::UnknownItem(id.clone()))?;
        let cursor = ctx.grid.cell_at(pointer);
        let grab_offset = Cell::new(cursor.x.saturating_sub(item.x), cursor.y.saturating_sub(item.y));
        let state = DragState::new(DragSource::Existing { id: id.clone() }, item.footprint(), grab_offset);
        self.enter(ctx, state, pointer)
    }

    /// Begin dragging a new widget in from the palette with the given footprint.
    ///
    /// # Errors
    ///
    /// [`PlacementError::DragInProgress`] if a drag is active.
    pub fn start_palette(
        &mut self,
        ctx: DragContext<'_>,
        component_type: &str,
        footprint: Footprint,
        pointer: Point,
    ) -> Result<&DragState, PlacementError> {
        self.ensure_idle()?;
        let source = DragSource::Palette { component_type: component_type.to_owned() };
        let state = DragState::new(source, footprint, Cell::default());
        self.enter(ctx, state, pointer)
    }

    /// Recompute the drag state for a new pointer position.
    ///
    /// # Errors
    ///
    /// [`PlacementError::NotDragging`] when idle.
    pub fn update(&mut self, ctx: DragContext<'_>, pointer: Point) -> Result<&DragState, PlacementError> {
        match &mut self.phase {
            DragPhase::Dragging(state) => {
                recompute(state, ctx, pointer);
                Ok(&*state)
            }
            DragPhase::Idle => Err(PlacementError::NotDragging),
        }
    }

    /// Finish the drag. The controller is idle afterwards whatever the outcome.
    ///
    /// # Errors
    ///
    /// [`PlacementError::NotDragging`] when idle; [`PlacementError::InvalidDrop`] or
    /// [`PlacementError::OutOfBounds`] when no valid position exists;
    /// [`PlacementError::Invariant`] / [`PlacementError::UnknownItem`] when the
    /// commit fails validation and is rolled back.
    pub fn commit_drop(
        &mut self,
        layout: &Layout,
        grid: &GridSpec,
        registry: &ComponentRegistry,
        ids: &mut dyn IdGenerator,
    ) -> Result<Commit, PlacementError> {
        let DragPhase::Dragging(state) = std::mem::take(&mut self.phase) else {
            return Err(PlacementError::NotDragging);
        };
        let Some(origin) = state.snap_position else {
            tracing::debug!(target_x = state.target.x, target_y = state.target.y, "drop rejected");
            return Err(if grid.fits(state.footprint) {
                PlacementError::InvalidDrop { footprint: state.footprint }
            } else {
                PlacementError::OutOfBounds { footprint: state.footprint, cols: grid.cols, rows: grid.rows }
            });
        };

        match state.source {
            DragSource::Existing { id } => {
                let layout = edit::move_item(layout, grid, &id, origin)?;
                tracing::debug!(%id, x = origin.x, y = origin.y, "drag committed move");
                Ok(Commit { layout, id, origin, inserted: false })
            }
            DragSource::Palette { component_type } => {
                let defaults = registry.defaults_for(&component_type);
                let id = ids.next_id(layout);
                let item = LayoutItem::new(id.clone(), state.footprint.at(origin), component_type).with_props(defaults.props);
                let layout = edit::insert_item(layout, grid, item)?;
                tracing::debug!(%id, x = origin.x, y = origin.y, "drag committed insert");
                Ok(Commit { layout, id, origin, inserted: true })
            }
        }
    }

    /// Abandon the drag, returning its last state if one was active.
    pub fn cancel(&mut self) -> Option<DragState> {
        match std::mem::take(&mut self.phase) {
            DragPhase::Dragging(state) => Some(state),
            DragPhase::Idle => None,
        }
    }

    fn ensure_idle(&self) -> Result<(), PlacementError> {
        if self.is_dragging() {
            return Err(PlacementError::DragInProgress);
        }
        Ok(())
    }

    fn enter(&mut self, ctx: DragContext<'_>, mut state: DragState, pointer: Point) -> Result<&DragState, PlacementError> {
        recompute(&mut state, ctx, pointer);
        self.phase = DragPhase::Dragging(state);
        self.state().ok_or(PlacementError::NotDragging)
    }
}

/// Rebuild everything derived from the pointer.
fn recompute(state: &mut DragState, ctx: DragContext<'_>, pointer: Point) {
    let cursor = ctx.grid.cell_at(pointer);
    let target = Cell::new(cursor.x.saturating_sub(state.grab_offset.x), cursor.y.saturating_sub(state.grab_offset.y));
    let exclude = state.source.item_id().cloned();
    let found = find_best_drop_position(ctx.layout, ctx.grid, target, state.footprint, exclude.as_ref());
    let requested = state.footprint.at(ctx.grid.clamp_origin(target.x, target.y, state.footprint));

    state.cursor_cell = cursor;
    state.target = target;
    state.snap_position = found.snap();
    state.hint_position = found.position;
    state.is_valid_drop = found.is_valid;
    state.collisions = find_collisions(ctx.layout, requested, exclude.as_ref());
    state.snap_lines = compute_snap_lines(ctx.layout, state, ctx.snap);

    tracing::trace!(
        cursor_x = cursor.x,
        cursor_y = cursor.y,
        valid = state.is_valid_drop,
        "drag recomputed"
    );
}
