//! Document model: layout items, the ordered layout, and its persisted form.
//!
//! A [`Layout`] is the single mutable resource the engine manages. Its order
//! is insertion/z-order, not position. Layouts arrive from templates or saved
//! screens as JSON (`[{i, x, y, w, h, component, props}, ...]`) and are
//! validated on the way in; every mutation the engine makes is validated again
//! before it becomes visible.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{LayoutError, PersistError};
use crate::grid::{Cell, Footprint, GridSpec, Rect};

/// Stable identifier for a layout item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub String);

impl ItemId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

/// A widget placed on the grid, as stored in the layout and on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutItem {
    /// Unique identifier within the layout.
    #[serde(rename = "i")]
    pub id: ItemId,
    /// Left column (0-based).
    pub x: i32,
    /// Top row (0-based).
    pub y: i32,
    /// Width in cells.
    pub w: i32,
    /// Height in cells.
    pub h: i32,
    /// Which external widget renderer draws this item.
    #[serde(rename = "component")]
    pub component_type: String,
    /// Renderer configuration, passed through untouched.
    #[serde(default)]
    pub props: serde_json::Value,
}

impl LayoutItem {
    #[must_use]
    pub fn new(id: impl Into<ItemId>, rect: Rect, component_type: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            x: rect.x,
            y: rect.y,
            w: rect.w,
            h: rect.h,
            component_type: component_type.into(),
            props: serde_json::Value::Object(serde_json::Map::new()),
        }
    }

    #[must_use]
    pub fn with_props(mut self, props: serde_json::Value) -> Self {
        self.props = props;
        self
    }

    #[must_use]
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.w, self.h)
    }

    #[must_use]
    pub fn origin(&self) -> Cell {
        Cell::new(self.x, self.y)
    }

    #[must_use]
    pub fn footprint(&self) -> Footprint {
        Footprint::new(self.w, self.h)
    }
}

impl From<String> for ItemId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Ordered collection of layout items.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Layout {
    items: Vec<LayoutItem>,
}

impl Layout {
    /// Create an empty layout.
    #[must_use]
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Build a layout from template items, rejecting anything that breaks an invariant.
    ///
    /// # Errors
    ///
    /// Returns the first [`LayoutError`] found by [`Layout::validate`].
    pub fn from_template(items: Vec<LayoutItem>, grid: &GridSpec) -> Result<Self, LayoutError> {
        let layout = Self { items };
        layout.validate(grid)?;
        Ok(layout)
    }

    /// Build a layout without validation. Used by tests and by callers that
    /// validate separately.
    #[must_use]
    pub fn from_items_unchecked(items: Vec<LayoutItem>) -> Self {
        Self { items }
    }

    #[must_use]
    pub fn items(&self) -> &[LayoutItem] {
        &self.items
    }

    #[must_use]
    pub fn get(&self, id: &ItemId) -> Option<&LayoutItem> {
        self.items.iter().find(|item| &item.id == id)
    }

    #[must_use]
    pub fn contains(&self, id: &ItemId) -> bool {
        self.get(id).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Append an item at the top of the z-order.
    pub fn push(&mut self, item: LayoutItem) {
        self.items.push(item);
    }

    /// Remove an item by id, returning it if it was present.
    pub fn remove(&mut self, id: &ItemId) -> Option<LayoutItem> {
        let idx = self.items.iter().position(|item| &item.id == id)?;
        Some(self.items.remove(idx))
    }

    /// Move an existing item's origin. Returns false if the id is unknown.
    pub fn set_origin(&mut self, id: &ItemId, origin: Cell) -> bool {
        let Some(item) = self.items.iter_mut().find(|item| &item.id == id) else {
            return false;
        };
        item.x = origin.x;
        item.y = origin.y;
        true
    }

    /// Check every placement invariant: positive footprint, in bounds, unique ids, no overlap.
    ///
    /// # Errors
    ///
    /// Returns the first violation found, scanning items in layout order.
    pub fn validate(&self, grid: &GridSpec) -> Result<(), LayoutError> {
        let mut seen = HashSet::with_capacity(self.items.len());
        for item in &self.items {
            if item.w < 1 || item.h < 1 {
                return Err(LayoutError::EmptyFootprint { id: item.id.clone(), w: item.w, h: item.h });
            }
            if !grid.is_in_bounds(item.rect()) {
                return Err(LayoutError::OutOfBounds {
                    id: item.id.clone(),
                    x: item.x,
                    y: item.y,
                    w: item.w,
                    h: item.h,
                    cols: grid.cols,
                    rows: grid.rows,
                });
            }
            if !seen.insert(&item.id) {
                return Err(LayoutError::DuplicateId(item.id.clone()));
            }
        }
        for (i, a) in self.items.iter().enumerate() {
            for b in &self.items[i + 1..] {
                if a.rect().overlaps(&b.rect()) {
                    return Err(LayoutError::Overlap { a: a.id.clone(), b: b.id.clone() });
                }
            }
        }
        Ok(())
    }

    /// Component types used by the layout, in first-appearance order.
    #[must_use]
    pub fn component_types(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for item in &self.items {
            if !out.contains(&item.component_type.as_str()) {
                out.push(&item.component_type);
            }
        }
        out
    }

    /// Serialize to the persisted JSON array form.
    ///
    /// # Errors
    ///
    /// Returns [`PersistError::Json`] if a `props` value cannot be encoded.
    pub fn to_json(&self) -> Result<String, PersistError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Pretty-printed variant of [`Layout::to_json`].
    ///
    /// # Errors
    ///
    /// Returns [`PersistError::Json`] if a `props` value cannot be encoded.
    pub fn to_json_pretty(&self) -> Result<String, PersistError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse and validate a persisted layout.
    ///
    /// # Errors
    ///
    /// Returns [`PersistError::Json`] for malformed input and
    /// [`PersistError::Invalid`] when the parsed layout breaks an invariant.
    pub fn from_json(json: &str, grid: &GridSpec) -> Result<Self, PersistError> {
        let layout: Self = serde_json::from_str(json)?;
        layout.validate(grid)?;
        Ok(layout)
    }
}

impl<'a> IntoIterator for &'a Layout {
    type Item = &'a LayoutItem;
    type IntoIter = std::slice::Iter<'a, LayoutItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
