//! Component registry: default footprint and props per widget type.
//!
//! The engine only consults the registry when a new widget is dragged in
//! from the palette. Stored items whose `component_type` is unknown are kept
//! as-is; whether they can be drawn is the renderer's problem.

#[cfg(test)]
#[path = "registry_test.rs"]
mod registry_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::consts::{FALLBACK_FOOTPRINT_H, FALLBACK_FOOTPRINT_W};
use crate::grid::Footprint;

/// Defaults for one widget type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentSpec {
    /// Size of a freshly inserted widget.
    pub footprint: Footprint,
    /// Props a freshly inserted widget starts with.
    #[serde(default = "empty_props")]
    pub props: serde_json::Value,
}

impl ComponentSpec {
    #[must_use]
    pub fn new(w: i32, h: i32, props: serde_json::Value) -> Self {
        Self { footprint: Footprint::new(w, h), props }
    }
}

/// Mapping from `component_type` to its defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComponentRegistry {
    components: BTreeMap<String, ComponentSpec>,
}

impl Default for ComponentRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ComponentRegistry {
    /// A registry with no entries.
    #[must_use]
    pub fn empty() -> Self {
        Self { components: BTreeMap::new() }
    }

    /// The widgets shipped with the editor.
    #[must_use]
    pub fn builtin() -> Self {
        let mut registry = Self::empty();
        registry.register("weather", ComponentSpec::new(8, 6, json!({"location": "", "units": "metric"})));
        registry.register("clock", ComponentSpec::new(4, 2, json!({"format24h": true, "showSeconds": false})));
        registry.register("news", ComponentSpec::new(12, 3, json!({"feedUrl": "", "scrollSpeed": 1})));
        registry.register("web", ComponentSpec::new(12, 8, json!({"url": "", "refreshSeconds": 0})));
        registry.register("solar", ComponentSpec::new(10, 6, json!({"siteId": ""})));
        registry.register("slideshow", ComponentSpec::new(16, 9, json!({"images": [], "intervalSeconds": 10})));
        registry.register("custom", ComponentSpec::new(4, 4, json!({"html": ""})));
        registry
    }

    /// Parse a registry from a JSON object keyed by component type.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error for malformed input.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Add or replace a component's defaults.
    pub fn register(&mut self, component_type: impl Into<String>, spec: ComponentSpec) {
        self.components.insert(component_type.into(), spec);
    }

    #[must_use]
    pub fn get(&self, component_type: &str) -> Option<&ComponentSpec> {
        self.components.get(component_type)
    }

    #[must_use]
    pub fn contains(&self, component_type: &str) -> bool {
        self.components.contains_key(component_type)
    }

    /// Registered component types, sorted.
    #[must_use]
    pub fn component_types(&self) -> Vec<&str> {
        self.components.keys().map(String::as_str).collect()
    }

    /// Defaults for a palette insert. Unknown types get the fallback
    /// footprint and empty props.
    #[must_use]
    pub fn defaults_for(&self, component_type: &str) -> ComponentSpec {
        if let Some(spec) = self.get(component_type) {
            return spec.clone();
        }
        tracing::warn!(component_type, "unknown component type; using fallback footprint");
        ComponentSpec { footprint: Footprint::new(FALLBACK_FOOTPRINT_W, FALLBACK_FOOTPRINT_H), props: empty_props() }
    }
}

fn empty_props() -> serde_json::Value {
    serde_json::Value::Object(serde_json::Map::new())
}
