//! Input model: neutral host events, keys, modifiers, and the drag state.
//!
//! Hosts translate raw pointer and keyboard events into [`InputEvent`]s in
//! cell space (canvas bounding box divided by cell size) before handing them
//! to the engine. `DragState` is the transient context carried between
//! drag-start and drop; it is rebuilt from scratch on every pointer move.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use serde::{Deserialize, Serialize};

use crate::doc::ItemId;
use crate::grid::{Cell, Footprint};
use crate::snap::SnapLines;

/// A host event, already expressed in grid-cell coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InputEvent {
    /// Pointer pressed on an existing item.
    DragStart { item_id: ItemId, cell_x: f64, cell_y: f64 },
    /// A palette entry started being dragged onto the canvas.
    PaletteDragStart { component: String, cell_x: f64, cell_y: f64 },
    /// Pointer moved during a drag.
    PointerMove { cell_x: f64, cell_y: f64 },
    /// Pointer released over the canvas.
    Drop { cell_x: f64, cell_y: f64 },
    /// Pointer left the canvas during a drag.
    Leave,
    /// Explicit cancel from the host.
    Cancel,
    /// Click / selection change. `None` clears the selection.
    Select {
        #[serde(default)]
        item_id: Option<ItemId>,
    },
    /// Key pressed while the canvas has focus.
    KeyDown {
        key: Key,
        #[serde(default)]
        modifiers: Modifiers,
    },
    /// Toolbar delete. Falls back to the selection when `item_id` is absent.
    Delete {
        #[serde(default)]
        item_id: Option<ItemId>,
    },
    /// Toolbar duplicate. Falls back to the selection when `item_id` is absent.
    Duplicate {
        #[serde(default)]
        item_id: Option<ItemId>,
    },
}

/// Keyboard/mouse modifier keys held during an event.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modifiers {
    /// Shift key is held.
    #[serde(default)]
    pub shift: bool,
    /// Ctrl key is held.
    #[serde(default)]
    pub ctrl: bool,
    /// Alt / Option key is held.
    #[serde(default)]
    pub alt: bool,
    /// Meta / Command key is held.
    #[serde(default)]
    pub meta: bool,
}

impl Modifiers {
    /// Ctrl on most platforms, Command on macOS.
    #[must_use]
    pub fn command(self) -> bool {
        self.ctrl || self.meta
    }
}

/// A keyboard key.
///
/// The inner string holds the key name as reported by the browser (e.g. `"ArrowLeft"`, `"Delete"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Key(pub String);

impl Key {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The arrow direction this key maps to, if any.
    #[must_use]
    pub fn direction(&self) -> Option<Direction> {
        match self.0.as_str() {
            "ArrowUp" => Some(Direction::Up),
            "ArrowDown" => Some(Direction::Down),
            "ArrowLeft" => Some(Direction::Left),
            "ArrowRight" => Some(Direction::Right),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_delete(&self) -> bool {
        matches!(self.0.as_str(), "Delete" | "Backspace")
    }

    #[must_use]
    pub fn is_escape(&self) -> bool {
        self.0 == "Escape"
    }

    /// `d` / `D`, used with the command modifier for duplicate.
    #[must_use]
    pub fn is_duplicate_letter(&self) -> bool {
        self.0.eq_ignore_ascii_case("d")
    }
}

/// Cardinal direction for one-cell keyboard moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// `(dx, dy)` for one step in this direction.
    #[must_use]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }
}

/// What is being dragged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DragSource {
    /// An item already on the canvas.
    Existing { id: ItemId },
    /// A new widget from the palette, not yet in the layout.
    Palette { component_type: String },
}

impl DragSource {
    /// The id of the dragged item, for existing items.
    #[must_use]
    pub fn item_id(&self) -> Option<&ItemId> {
        match self {
            Self::Existing { id } => Some(id),
            Self::Palette { .. } => None,
        }
    }
}

/// Context for an in-progress drag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DragState {
    /// Existing item or pending palette insert.
    pub source: DragSource,
    /// Size of the dragged widget; fixed for the whole drag.
    pub footprint: Footprint,
    /// Pointer cell minus item origin at drag start, so the item does not jump under the pointer.
    pub grab_offset: Cell,
    /// Cell currently under the pointer.
    pub cursor_cell: Cell,
    /// Origin the pointer asks for (`cursor_cell - grab_offset`), before search.
    pub target: Cell,
    /// Where a drop would commit, or `None` when no free position exists.
    pub snap_position: Option<Cell>,
    /// Best-effort position for feedback; equals `snap_position` when valid.
    pub hint_position: Cell,
    /// Mirrors `snap_position.is_some()`.
    pub is_valid_drop: bool,
    /// Alignment guides for the proposed rectangle.
    pub snap_lines: SnapLines,
    /// Items overlapping the rectangle at `target`, for highlighting.
    pub collisions: Vec<ItemId>,
}

impl DragState {
    #[must_use]
    pub fn new(source: DragSource, footprint: Footprint, grab_offset: Cell) -> Self {
        Self {
            source,
            footprint,
            grab_offset,
            cursor_cell: Cell::default(),
            target: Cell::default(),
            snap_position: None,
            hint_position: Cell::default(),
            is_valid_drop: false,
            snap_lines: SnapLines::default(),
            collisions: Vec::new(),
        }
    }
}

/// Drag lifecycle phase.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum DragPhase {
    /// No drag in progress.
    #[default]
    Idle,
    /// A drag is active.
    Dragging(DragState),
}

impl DragPhase {
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging(_))
    }
}
