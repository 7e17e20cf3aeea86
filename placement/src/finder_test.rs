use super::*;
use crate::doc::LayoutItem;
use crate::grid::Rect;

fn item(id: &str, x: i32, y: i32, w: i32, h: i32) -> LayoutItem {
    LayoutItem::new(id, Rect::new(x, y, w, h), "custom")
}

fn layout(items: Vec<LayoutItem>) -> Layout {
    Layout::from_items_unchecked(items)
}

fn grid() -> GridSpec {
    GridSpec::new(32, 18)
}

// =============================================================
// Direct hits
// =============================================================

#[test]
fn empty_layout_returns_target() {
    let found = find_best_drop_position(&Layout::new(), &grid(), Cell::new(5, 6), Footprint::new(4, 4), None);
    assert_eq!(found, DropPosition { position: Cell::new(5, 6), is_valid: true, fits: true });
    assert_eq!(found.snap(), Some(Cell::new(5, 6)));
}

#[test]
fn target_is_clamped_into_bounds() {
    let found = find_best_drop_position(&Layout::new(), &grid(), Cell::new(40, -3), Footprint::new(4, 4), None);
    assert_eq!(found.snap(), Some(Cell::new(28, 0)));
}

#[test]
fn moving_item_does_not_block_itself() {
    let l = layout(vec![item("a", 0, 0, 4, 4)]);
    let a = ItemId::from("a");
    let found = find_best_drop_position(&l, &grid(), Cell::new(1, 1), Footprint::new(4, 4), Some(&a));
    assert_eq!(found.snap(), Some(Cell::new(1, 1)));
}

// =============================================================
// Ring search
// =============================================================

#[test]
fn overlapping_target_resolves_outside_existing_item() {
    let l = layout(vec![item("a", 0, 0, 4, 4)]);
    let found = find_best_drop_position(&l, &grid(), Cell::new(2, 2), Footprint::new(4, 4), None);
    assert!(found.is_valid);
    let rect = Footprint::new(4, 4).at(found.position);
    assert!(!rect.overlaps(&Rect::new(0, 0, 4, 4)));
    // (4,2) and (2,4) are both at distance 2; (4,2) comes first in row-major order.
    assert_eq!(found.position, Cell::new(4, 2));
}

#[test]
fn closest_to_unclamped_target_wins_within_ring() {
    let g = GridSpec::new(10, 10);
    let l = layout(vec![item("a", 0, 0, 2, 2)]);
    let found = find_best_drop_position(&l, &g, Cell::new(-5, 0), Footprint::new(2, 2), None);
    // Ring 2 offers (2,0) first in scan order, but (0,2) is nearer to (-5,0).
    assert_eq!(found.snap(), Some(Cell::new(0, 2)));
}

#[test]
fn search_is_deterministic() {
    let l = layout(vec![item("a", 4, 4, 6, 6), item("b", 12, 2, 3, 8), item("c", 0, 12, 10, 2)]);
    let first = find_best_drop_position(&l, &grid(), Cell::new(6, 6), Footprint::new(3, 3), None);
    for _ in 0..10 {
        assert_eq!(find_best_drop_position(&l, &grid(), Cell::new(6, 6), Footprint::new(3, 3), None), first);
    }
    assert!(first.is_valid);
}

#[test]
fn finds_single_remaining_hole_far_away() {
    let g = GridSpec::new(8, 4);
    let l = layout(vec![item("left", 0, 0, 7, 4), item("corner", 7, 0, 1, 3)]);
    let found = find_best_drop_position(&l, &g, Cell::new(0, 0), Footprint::new(1, 1), None);
    assert_eq!(found.snap(), Some(Cell::new(7, 3)));
}

#[test]
fn result_is_in_bounds_and_free() {
    let l = layout(vec![item("a", 28, 14, 4, 4), item("b", 24, 14, 4, 4)]);
    let fp = Footprint::new(4, 4);
    let found = find_best_drop_position(&l, &grid(), Cell::new(31, 17), fp, None);
    let rect = fp.at(found.position);
    assert!(found.is_valid);
    assert!(grid().is_in_bounds(rect));
    assert!(!collides_with(&l, rect, None));
}

// =============================================================
// Failure outcomes
// =============================================================

#[test]
fn full_grid_is_invalid_with_clamped_hint() {
    let g = GridSpec::new(4, 4);
    let l = layout(vec![item("all", 0, 0, 4, 4)]);
    let fp = Footprint::new(2, 2);
    let found = find_best_drop_position(&l, &g, Cell::new(9, 1), fp, None);
    assert!(!found.is_valid);
    assert!(found.fits);
    assert_eq!(found.position, Cell::new(2, 1));
    assert_eq!(found.snap(), None);
    assert_eq!(found.rejection(fp, &g), Some(PlacementError::InvalidDrop { footprint: fp }));
}

#[test]
fn oversized_footprint_is_out_of_bounds() {
    let g = GridSpec::new(32, 18);
    let fp = Footprint::new(33, 2);
    let found = find_best_drop_position(&Layout::new(), &g, Cell::new(3, 3), fp, None);
    assert!(!found.is_valid);
    assert!(!found.fits);
    assert_eq!(found.rejection(fp, &g), Some(PlacementError::OutOfBounds { footprint: fp, cols: 32, rows: 18 }));
}

#[test]
fn valid_result_has_no_rejection() {
    let fp = Footprint::new(1, 1);
    let found = find_best_drop_position(&Layout::new(), &grid(), Cell::new(0, 0), fp, None);
    assert_eq!(found.rejection(fp, &grid()), None);
}

#[test]
fn distance_saturates_instead_of_overflowing() {
    let far = distance_sq(Cell::new(i32::MIN, i32::MIN), Cell::new(i32::MAX, i32::MAX));
    assert_eq!(far, i64::MAX);
    assert_eq!(distance_sq(Cell::new(1, 2), Cell::new(4, 6)), 25);
}

#[test]
fn extreme_target_still_finds_a_position() {
    let layout = Layout::from_items_unchecked(vec![LayoutItem::new("a", Rect::new(0, 0, 4, 4), "custom")]);
    let grid = GridSpec::new(32, 18);
    let found = find_best_drop_position(&layout, &grid, Cell::new(i32::MIN, i32::MIN), Footprint::new(4, 4), None);
    assert!(found.is_valid);
    assert!(!Rect::new(found.position.x, found.position.y, 4, 4).overlaps(&Rect::new(0, 0, 4, 4)));
}
