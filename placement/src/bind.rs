//! `wasm-bindgen` exports for the browser editor.
//!
//! Everything crosses the boundary as JSON strings: layouts in the persisted
//! `{i, x, y, w, h, component, props}` form, input events in the
//! [`InputEvent`] form, and [`Action`] lists back out. The exported methods
//! are thin shells over `try_*` methods that return [`BindError`], which keeps
//! the logic testable without a JavaScript host.

#[cfg(test)]
#[path = "bind_test.rs"]
mod bind_test;

use wasm_bindgen::prelude::*;

use crate::engine::{Action, EngineConfig, EngineCore};
use crate::error::PersistError;
use crate::grid::GridSpec;
use crate::ids::{IdGenerator, RandomIds};
use crate::input::InputEvent;
use crate::registry::ComponentRegistry;
use crate::render::build_scene;

/// Failure at the JavaScript boundary.
#[derive(Debug, thiserror::Error)]
pub enum BindError {
    #[error("grid must be at least 1x1, got {cols}x{rows}")]
    InvalidGrid { cols: i32, rows: i32 },
    #[error("cell size must be positive, got {0}")]
    InvalidCellSize(f64),
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Persist(#[from] PersistError),
}

/// Browser-facing placement engine.
#[wasm_bindgen]
pub struct Engine {
    core: EngineCore,
}

impl Engine {
    /// Engine over a `cols`×`rows` grid using the given id source.
    ///
    /// # Errors
    ///
    /// [`BindError::InvalidGrid`] for a grid with no cells.
    pub fn try_new(cols: i32, rows: i32, ids: Box<dyn IdGenerator>) -> Result<Self, BindError> {
        if cols < 1 || rows < 1 {
            return Err(BindError::InvalidGrid { cols, rows });
        }
        let config = EngineConfig { grid: GridSpec::new(cols, rows), ..EngineConfig::default() };
        Ok(Self { core: EngineCore::with_parts(config, ComponentRegistry::builtin(), ids) })
    }

    #[must_use]
    pub fn core(&self) -> &EngineCore {
        &self.core
    }

    /// # Errors
    ///
    /// [`BindError::Persist`] when the JSON is malformed or breaks a layout invariant.
    pub fn try_load_layout(&mut self, json: &str) -> Result<String, BindError> {
        let actions = self.core.load_json(json)?;
        encode_actions(&actions)
    }

    /// # Errors
    ///
    /// Only if serialization fails.
    pub fn try_layout(&self) -> Result<String, BindError> {
        Ok(self.core.layout().to_json()?)
    }

    /// Decode one event, run it, and return the resulting actions.
    ///
    /// # Errors
    ///
    /// [`BindError::Json`] when the event does not parse. Rejected operations
    /// are not errors; they come back as `rejected` actions.
    pub fn try_handle_event(&mut self, json: &str) -> Result<String, BindError> {
        let event: InputEvent = serde_json::from_str(json)?;
        let actions = self.core.handle(event);
        encode_actions(&actions)
    }

    /// # Errors
    ///
    /// Only if serialization fails.
    pub fn try_scene(&self) -> Result<String, BindError> {
        Ok(serde_json::to_string(&build_scene(&self.core))?)
    }

    /// # Errors
    ///
    /// [`BindError::Json`] when the registry does not parse.
    pub fn try_set_registry(&mut self, json: &str) -> Result<(), BindError> {
        self.core.registry = ComponentRegistry::from_json(json)?;
        Ok(())
    }

    /// # Errors
    ///
    /// [`BindError::InvalidCellSize`] for a non-positive or non-finite size.
    pub fn try_set_cell_px(&mut self, cell_px: f64) -> Result<(), BindError> {
        if !cell_px.is_finite() || cell_px <= 0.0 {
            return Err(BindError::InvalidCellSize(cell_px));
        }
        self.core.config.snap.cell_px = cell_px;
        Ok(())
    }
}

#[wasm_bindgen]
impl Engine {
    #[wasm_bindgen(constructor)]
    pub fn new(cols: i32, rows: i32) -> Result<Engine, JsError> {
        Ok(Self::try_new(cols, rows, Box::new(RandomIds))?)
    }

    /// Replace the layout. Returns the actions JSON.
    #[wasm_bindgen(js_name = loadLayout)]
    pub fn load_layout(&mut self, json: &str) -> Result<String, JsError> {
        Ok(self.try_load_layout(json)?)
    }

    /// Current layout as persisted JSON.
    pub fn layout(&self) -> Result<String, JsError> {
        Ok(self.try_layout()?)
    }

    #[wasm_bindgen(js_name = handleEvent)]
    pub fn handle_event(&mut self, json: &str) -> Result<String, JsError> {
        Ok(self.try_handle_event(json)?)
    }

    pub fn scene(&self) -> Result<String, JsError> {
        Ok(self.try_scene()?)
    }

    #[wasm_bindgen(js_name = setRegistry)]
    pub fn set_registry(&mut self, json: &str) -> Result<(), JsError> {
        Ok(self.try_set_registry(json)?)
    }

    /// Rendered cell size after a viewport resize; guides are measured in pixels.
    #[wasm_bindgen(js_name = setCellPx)]
    pub fn set_cell_px(&mut self, cell_px: f64) -> Result<(), JsError> {
        Ok(self.try_set_cell_px(cell_px)?)
    }

    /// Selected item id, if any.
    pub fn selection(&self) -> Option<String> {
        self.core.selection().map(|id| id.as_str().to_owned())
    }

    #[wasm_bindgen(js_name = isDragging)]
    pub fn is_dragging(&self) -> bool {
        self.core.drag_state().is_some()
    }
}

fn encode_actions(actions: &[Action]) -> Result<String, BindError> {
    Ok(serde_json::to_string(actions)?)
}
