use super::*;
use crate::doc::LayoutItem;
use crate::grid::{Cell, Footprint};
use crate::input::DragSource;

fn item(id: &str, x: i32, y: i32, w: i32, h: i32) -> LayoutItem {
    LayoutItem::new(id, Rect::new(x, y, w, h), "custom")
}

fn shared_edge_layout() -> Layout {
    Layout::from_items_unchecked(vec![item("a", 0, 0, 2, 2), item("b", 2, 0, 2, 2)])
}

#[test]
fn shared_edge_produces_vertical_guide() {
    let lines = snap_lines_for(&shared_edge_layout(), Rect::new(2, 5, 2, 2), None, &SnapConfig::default());
    assert!(lines.vertical.contains(&2));
}

#[test]
fn far_edges_produce_no_guides() {
    let lines = snap_lines_for(&shared_edge_layout(), Rect::new(10, 10, 3, 3), None, &SnapConfig::default());
    assert!(lines.is_empty());
}

#[test]
fn right_edge_matching_left_edge_is_a_guide() {
    let layout = Layout::from_items_unchecked(vec![item("a", 10, 0, 2, 2)]);
    let lines = snap_lines_for(&layout, Rect::new(6, 8, 4, 2), None, &SnapConfig::default());
    assert_eq!(lines.vertical.into_iter().collect::<Vec<_>>(), vec![10]);
}

#[test]
fn top_and_bottom_edges_produce_horizontal_guides() {
    let layout = Layout::from_items_unchecked(vec![item("a", 0, 3, 2, 4)]);
    let lines = snap_lines_for(&layout, Rect::new(10, 3, 2, 4), None, &SnapConfig::default());
    assert_eq!(lines.horizontal.into_iter().collect::<Vec<_>>(), vec![3, 7]);
    assert!(lines.vertical.is_empty());
}

#[test]
fn excluded_item_is_ignored() {
    let layout = Layout::from_items_unchecked(vec![item("a", 0, 0, 2, 2)]);
    let a = ItemId::from("a");
    let lines = snap_lines_for(&layout, Rect::new(0, 0, 2, 2), Some(&a), &SnapConfig::default());
    assert!(lines.is_empty());
}

#[test]
fn tiny_cells_widen_the_guide_band() {
    // At 2px per cell, edges one cell apart are 2px apart, under the 5px threshold.
    let config = SnapConfig { cell_px: 2.0, threshold_px: 5.0 };
    let layout = Layout::from_items_unchecked(vec![item("a", 0, 0, 4, 4)]);
    let lines = snap_lines_for(&layout, Rect::new(5, 10, 2, 2), None, &config);
    assert!(lines.vertical.contains(&4));
}

#[test]
fn drag_state_uses_hint_when_invalid() {
    let layout = shared_edge_layout();
    let mut drag = DragState::new(DragSource::Palette { component_type: "clock".into() }, Footprint::new(2, 2), Cell::new(0, 0));
    drag.snap_position = None;
    drag.hint_position = Cell::new(2, 8);
    let lines = compute_snap_lines(&layout, &drag, &SnapConfig::default());
    assert!(lines.vertical.contains(&2));
}

#[test]
fn drag_state_excludes_dragged_item() {
    let layout = shared_edge_layout();
    let mut drag = DragState::new(DragSource::Existing { id: ItemId::from("b") }, Footprint::new(2, 2), Cell::new(0, 0));
    drag.snap_position = Some(Cell::new(20, 0));
    drag.hint_position = Cell::new(20, 0);
    let lines = compute_snap_lines(&layout, &drag, &SnapConfig::default());
    // Only item "a" is compared: its top/bottom edges line up, its x edges do not.
    assert!(lines.vertical.is_empty());
    assert_eq!(lines.horizontal.into_iter().collect::<Vec<_>>(), vec![0, 2]);
}
