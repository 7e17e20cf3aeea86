//! Host-facing engine core.
//!
//! `EngineCore` owns the layout, the selection, and the single drag
//! controller. Every input is handled synchronously and answered with a list
//! of [`Action`]s for the host: the full layout after each committed mutation,
//! selection changes, drag feedback, and rejections. Nothing in here depends
//! on a UI framework or on the DOM.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use serde::{Deserialize, Serialize};

use crate::doc::{ItemId, Layout};
use crate::drag::{DragContext, DragController};
use crate::edit;
use crate::error::{LayoutError, PersistError, PlacementError};
use crate::grid::{GridSpec, Point};
use crate::ids::{IdGenerator, SequentialIds};
use crate::input::{Direction, DragState, InputEvent, Key, Modifiers};
use crate::keyboard::{self, KeyMove};
use crate::registry::ComponentRegistry;
use crate::snap::SnapConfig;

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum Action {
    /// A mutation was committed; this is the complete new layout.
    LayoutChanged(Layout),
    /// The selected item changed.
    SelectionChanged(Option<ItemId>),
    /// A drag started or the pointer moved; draw the ghost and guides from this.
    DragUpdated(DragState),
    /// The drag is over (committed, rejected, or cancelled).
    DragEnded,
    /// An operation was refused; show transient feedback.
    Rejected(PlacementError),
    RenderNeeded,
}

/// Grid and guide configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub grid: GridSpec,
    #[serde(default)]
    pub snap: SnapConfig,
}

/// Core engine state.
pub struct EngineCore {
    pub config: EngineConfig,
    pub registry: ComponentRegistry,
    layout: Layout,
    selected: Option<ItemId>,
    drag: DragController,
    ids: Box<dyn IdGenerator>,
}

impl Default for EngineCore {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl EngineCore {
    /// Engine with the builtin registry and sequential ids.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self::with_parts(config, ComponentRegistry::builtin(), Box::new(SequentialIds::default()))
    }

    #[must_use]
    pub fn with_parts(config: EngineConfig, registry: ComponentRegistry, ids: Box<dyn IdGenerator>) -> Self {
        Self { config, registry, layout: Layout::new(), selected: None, drag: DragController::new(), ids }
    }

    // --- Data inputs ---

    /// Replace the layout (screen open, template applied). Any drag is cancelled.
    ///
    /// # Errors
    ///
    /// Returns the [`LayoutError`] if the layout breaks an invariant; the
    /// current layout is kept in that case.
    pub fn load_layout(&mut self, layout: Layout) -> Result<Vec<Action>, LayoutError> {
        layout.validate(&self.config.grid)?;
        for component_type in layout.component_types() {
            if !self.registry.contains(component_type) {
                tracing::warn!(component_type, "layout references unknown component type");
            }
        }
        tracing::debug!(items = layout.len(), "layout loaded");
        self.layout = layout;

        let mut actions = Vec::new();
        if self.drag.cancel().is_some() {
            actions.push(Action::DragEnded);
        }
        if let Some(id) = &self.selected {
            if !self.layout.contains(id) {
                self.selected = None;
                actions.push(Action::SelectionChanged(None));
            }
        }
        actions.push(Action::RenderNeeded);
        Ok(actions)
    }

    /// Parse, validate and load a persisted layout.
    ///
    /// # Errors
    ///
    /// Returns [`PersistError`] for malformed JSON or an invalid layout.
    pub fn load_json(&mut self, json: &str) -> Result<Vec<Action>, PersistError> {
        let layout = Layout::from_json(json, &self.config.grid)?;
        Ok(self.load_layout(layout)?)
    }

    // --- Queries ---

    #[must_use]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// The currently selected item, if any.
    #[must_use]
    pub fn selection(&self) -> Option<&ItemId> {
        self.selected.as_ref()
    }

    /// The in-progress drag, if any.
    #[must_use]
    pub fn drag_state(&self) -> Option<&DragState> {
        self.drag.state()
    }

    #[must_use]
    pub fn grid(&self) -> GridSpec {
        self.config.grid
    }

    // --- Event dispatch ---

    /// Handle one neutral host event.
    pub fn handle(&mut self, event: InputEvent) -> Vec<Action> {
        match event {
            InputEvent::DragStart { item_id, cell_x, cell_y } => self.on_drag_start(&item_id, Point::new(cell_x, cell_y)),
            InputEvent::PaletteDragStart { component, cell_x, cell_y } => {
                self.on_palette_drag_start(&component, Point::new(cell_x, cell_y))
            }
            InputEvent::PointerMove { cell_x, cell_y } => self.on_pointer_move(Point::new(cell_x, cell_y)),
            InputEvent::Drop { cell_x, cell_y } => self.on_drop(Point::new(cell_x, cell_y)),
            InputEvent::Leave => self.on_leave(),
            InputEvent::Cancel => self.on_cancel(),
            InputEvent::Select { item_id } => self.on_select(item_id),
            InputEvent::KeyDown { key, modifiers } => self.on_key_down(&key, modifiers),
            InputEvent::Delete { item_id } => self.delete(item_id),
            InputEvent::Duplicate { item_id } => self.duplicate(item_id),
        }
    }

    // --- Drag ---

    /// Pointer pressed on an existing item: select it and start dragging.
    pub fn on_drag_start(&mut self, id: &ItemId, pointer: Point) -> Vec<Action> {
        let ctx = DragContext { layout: &self.layout, grid: &self.config.grid, snap: &self.config.snap };
        let state = match self.drag.start_existing(ctx, id, pointer) {
            Ok(state) => state.clone(),
            Err(err) => return vec![Action::Rejected(err)],
        };
        let mut actions = self.set_selection(Some(id.clone()));
        actions.push(Action::DragUpdated(state));
        actions.push(Action::RenderNeeded);
        actions
    }

    /// A palette entry was dragged onto the canvas.
    pub fn on_palette_drag_start(&mut self, component_type: &str, pointer: Point) -> Vec<Action> {
        let footprint = self.registry.defaults_for(component_type).footprint;
        let ctx = DragContext { layout: &self.layout, grid: &self.config.grid, snap: &self.config.snap };
        match self.drag.start_palette(ctx, component_type, footprint, pointer) {
            Ok(state) => vec![Action::DragUpdated(state.clone()), Action::RenderNeeded],
            Err(err) => vec![Action::Rejected(err)],
        }
    }

    /// Pointer moved. Ignored unless a drag is active.
    pub fn on_pointer_move(&mut self, pointer: Point) -> Vec<Action> {
        if !self.drag.is_dragging() {
            return Vec::new();
        }
        let ctx = DragContext { layout: &self.layout, grid: &self.config.grid, snap: &self.config.snap };
        match self.drag.update(ctx, pointer) {
            Ok(state) => vec![Action::DragUpdated(state.clone()), Action::RenderNeeded],
            Err(err) => vec![Action::Rejected(err)],
        }
    }

    /// Pointer released. Commits when the final position is valid; a release
    /// outside the canvas counts as leaving it.
    pub fn on_drop(&mut self, pointer: Point) -> Vec<Action> {
        if !self.drag.is_dragging() {
            return vec![Action::Rejected(PlacementError::NotDragging)];
        }
        if !self.config.grid.contains_point(pointer) {
            return self.on_leave();
        }
        let ctx = DragContext { layout: &self.layout, grid: &self.config.grid, snap: &self.config.snap };
        if let Err(err) = self.drag.update(ctx, pointer) {
            return vec![Action::Rejected(err)];
        }

        match self.drag.commit_drop(&self.layout, &self.config.grid, &self.registry, self.ids.as_mut()) {
            Ok(commit) => {
                let mut actions = vec![self.replace_layout(commit.layout)];
                actions.extend(self.set_selection(Some(commit.id)));
                actions.push(Action::DragEnded);
                actions.push(Action::RenderNeeded);
                actions
            }
            Err(err) => vec![Action::Rejected(err), Action::DragEnded, Action::RenderNeeded],
        }
    }

    /// The pointer left the canvas: cancel without mutation.
    pub fn on_leave(&mut self) -> Vec<Action> {
        self.end_drag()
    }

    /// Explicit cancel from the host.
    pub fn on_cancel(&mut self) -> Vec<Action> {
        self.end_drag()
    }

    // --- Selection ---

    /// Click on an item (or on empty canvas with `None`).
    pub fn on_select(&mut self, id: Option<ItemId>) -> Vec<Action> {
        if let Some(id) = &id {
            if !self.layout.contains(id) {
                return vec![Action::Rejected(PlacementError::UnknownItem(id.clone()))];
            }
        }
        let mut actions = self.set_selection(id);
        if !actions.is_empty() {
            actions.push(Action::RenderNeeded);
        }
        actions
    }

    // --- Keyboard ---

    /// Arrow keys move, Delete/Backspace delete, Ctrl/Cmd+D duplicates,
    /// Escape cancels a drag or clears the selection.
    pub fn on_key_down(&mut self, key: &Key, modifiers: Modifiers) -> Vec<Action> {
        if key.is_escape() {
            if self.drag.is_dragging() {
                return self.end_drag();
            }
            return self.on_select(None);
        }
        if self.drag.is_dragging() {
            return Vec::new();
        }
        if let Some(direction) = key.direction() {
            return self.move_selected(direction);
        }
        if key.is_delete() {
            return self.delete(None);
        }
        if key.is_duplicate_letter() && modifiers.command() {
            return self.duplicate(None);
        }
        Vec::new()
    }

    /// Move the selected item one cell.
    pub fn move_selected(&mut self, direction: Direction) -> Vec<Action> {
        let Some(id) = self.selected.clone() else {
            return Vec::new();
        };
        match keyboard::move_item(&self.layout, &self.config.grid, &id, direction) {
            Ok(KeyMove::Moved { layout, to }) => {
                tracing::debug!(%id, x = to.x, y = to.y, "keyboard move");
                vec![self.replace_layout(layout), Action::RenderNeeded]
            }
            Ok(KeyMove::Unchanged) => Vec::new(),
            Err(err) => {
                tracing::debug!(%id, ?direction, error = %err, "keyboard move blocked");
                vec![Action::Rejected(err)]
            }
        }
    }

    // --- Delete / duplicate ---

    /// Delete `id`, or the selection when `None`.
    pub fn delete(&mut self, id: Option<ItemId>) -> Vec<Action> {
        let Some(id) = id.or_else(|| self.selected.clone()) else {
            return vec![Action::Rejected(PlacementError::NoSelection)];
        };
        let next = match edit::delete_item(&self.layout, &self.config.grid, &id) {
            Ok(next) => next,
            Err(err) => return vec![Action::Rejected(err)],
        };
        tracing::debug!(%id, "item deleted");

        let mut actions = Vec::new();
        if self.drag.state().is_some_and(|s| s.source.item_id() == Some(&id)) {
            self.drag.cancel();
            actions.push(Action::DragEnded);
        }
        actions.push(self.replace_layout(next));
        if self.selected.as_ref() == Some(&id) {
            actions.extend(self.set_selection(None));
        }
        actions.push(Action::RenderNeeded);
        actions
    }

    /// Duplicate `id`, or the selection when `None`. The copy becomes the selection.
    pub fn duplicate(&mut self, id: Option<ItemId>) -> Vec<Action> {
        let Some(id) = id.or_else(|| self.selected.clone()) else {
            return vec![Action::Rejected(PlacementError::NoSelection)];
        };
        let new_id = self.ids.next_id(&self.layout);
        match edit::duplicate_item(&self.layout, &self.config.grid, &id, new_id.clone()) {
            Ok(next) => {
                tracing::debug!(%id, copy = %new_id, "item duplicated");
                let mut actions = vec![self.replace_layout(next)];
                actions.extend(self.set_selection(Some(new_id)));
                actions.push(Action::RenderNeeded);
                actions
            }
            Err(err) => {
                tracing::debug!(%id, error = %err, "duplicate refused");
                vec![Action::Rejected(err)]
            }
        }
    }

    // --- Internals ---

    fn replace_layout(&mut self, layout: Layout) -> Action {
        self.layout = layout;
        Action::LayoutChanged(self.layout.clone())
    }

    fn set_selection(&mut self, id: Option<ItemId>) -> Vec<Action> {
        if self.selected == id {
            return Vec::new();
        }
        self.selected = id;
        vec![Action::SelectionChanged(self.selected.clone())]
    }

    fn end_drag(&mut self) -> Vec<Action> {
        match self.drag.cancel() {
            Some(_) => vec![Action::DragEnded, Action::RenderNeeded],
            None => Vec::new(),
        }
    }
}
