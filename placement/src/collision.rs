//! Collision detection against the items already in a layout.

#[cfg(test)]
#[path = "collision_test.rs"]
mod collision_test;

use crate::doc::{ItemId, Layout, LayoutItem};
use crate::grid::Rect;

/// Whether `candidate` overlaps any item in `layout` other than `exclude`.
#[must_use]
pub fn collides_with(layout: &Layout, candidate: Rect, exclude: Option<&ItemId>) -> bool {
    first_collision(layout, candidate, exclude).is_some()
}

/// The first item, in layout order, that `candidate` overlaps.
#[must_use]
pub fn first_collision<'a>(layout: &'a Layout, candidate: Rect, exclude: Option<&ItemId>) -> Option<&'a LayoutItem> {
    others(layout, exclude).find(|item| item.rect().overlaps(&candidate))
}

/// Ids of every item `candidate` overlaps, in layout order. Used for highlighting.
#[must_use]
pub fn find_collisions(layout: &Layout, candidate: Rect, exclude: Option<&ItemId>) -> Vec<ItemId> {
    others(layout, exclude)
        .filter(|item| item.rect().overlaps(&candidate))
        .map(|item| item.id.clone())
        .collect()
}

fn others<'a>(layout: &'a Layout, exclude: Option<&ItemId>) -> impl Iterator<Item = &'a LayoutItem> {
    layout
        .items()
        .iter()
        .filter(move |item| exclude != Some(&item.id))
}
