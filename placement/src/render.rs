//! Scene description for the host renderer.
//!
//! The engine does not draw. Widget renderers live outside this crate and only
//! need to know where each widget sits as a fraction of the canvas, which one
//! is selected, and what drag feedback to show. [`build_scene`] flattens the
//! engine state into exactly that, in z-order.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use serde::Serialize;

use crate::doc::ItemId;
use crate::engine::EngineCore;
use crate::grid::{Cell, Fraction};
use crate::snap::SnapLines;

/// One placed widget, positioned for rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneItem {
    pub id: ItemId,
    pub component_type: String,
    pub frame: Fraction,
    pub props: serde_json::Value,
    pub selected: bool,
    /// Overlapped by the ghost of the current drag.
    pub colliding: bool,
}

/// Drop preview for the in-progress drag.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ghost {
    /// Snapped position when valid, best-effort hint otherwise.
    pub origin: Cell,
    pub frame: Fraction,
    pub is_valid: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scene {
    pub cols: i32,
    pub rows: i32,
    pub items: Vec<SceneItem>,
    pub ghost: Option<Ghost>,
    pub snap_lines: SnapLines,
}

/// Flatten the engine state into a renderable scene.
#[must_use]
pub fn build_scene(core: &EngineCore) -> Scene {
    let grid = core.grid();
    let drag = core.drag_state();
    let selected = core.selection();

    let items = core
        .layout()
        .items()
        .iter()
        .map(|item| SceneItem {
            id: item.id.clone(),
            component_type: item.component_type.clone(),
            frame: grid.cell_to_fraction(item.rect()),
            props: item.props.clone(),
            selected: selected == Some(&item.id),
            colliding: drag.is_some_and(|d| d.collisions.contains(&item.id)),
        })
        .collect();

    let ghost = drag.map(|d| {
        let origin = d.snap_position.unwrap_or(d.hint_position);
        Ghost { origin, frame: grid.cell_to_fraction(d.footprint.at(origin)), is_valid: d.is_valid_drop }
    });

    Scene {
        cols: grid.cols,
        rows: grid.rows,
        items,
        ghost,
        snap_lines: drag.map(|d| d.snap_lines.clone()).unwrap_or_default(),
    }
}
