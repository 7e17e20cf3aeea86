//! Id generation for newly inserted items.
//!
//! The generator is injected into [`crate::engine::EngineCore`] so tests can
//! use a predictable counter while the browser build uses random UUIDs.

#[cfg(test)]
#[path = "ids_test.rs"]
mod ids_test;

use uuid::Uuid;

use crate::consts::DEFAULT_ID_PREFIX;
use crate::doc::{ItemId, Layout};

/// Source of fresh item ids.
pub trait IdGenerator {
    /// Return an id not currently used in `layout`.
    fn next_id(&mut self, layout: &Layout) -> ItemId;
}

/// Monotonic `<prefix>-<n>` ids. Skips any id the layout already holds,
/// so it is safe to use on layouts loaded from templates.
#[derive(Debug, Clone)]
pub struct SequentialIds {
    prefix: String,
    next: u64,
}

impl SequentialIds {
    #[must_use]
    pub fn new(prefix: impl Into<String>) -> Self {
        Self { prefix: prefix.into(), next: 1 }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new(DEFAULT_ID_PREFIX)
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self, layout: &Layout) -> ItemId {
        loop {
            let id = ItemId(format!("{}-{}", self.prefix, self.next));
            self.next += 1;
            if !layout.contains(&id) {
                return id;
            }
        }
    }
}

/// Random v4 UUID ids.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIds;

impl IdGenerator for RandomIds {
    fn next_id(&mut self, layout: &Layout) -> ItemId {
        loop {
            let id = ItemId(Uuid::new_v4().to_string());
            if !layout.contains(&id) {
                return id;
            }
        }
    }
}
