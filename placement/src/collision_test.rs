use super::*;

fn layout() -> Layout {
    Layout::from_items_unchecked(vec![
        LayoutItem::new("a", Rect::new(0, 0, 4, 4), "weather"),
        LayoutItem::new("b", Rect::new(4, 0, 4, 4), "clock"),
        LayoutItem::new("c", Rect::new(0, 10, 8, 2), "news"),
    ])
}

#[test]
fn empty_layout_never_collides() {
    let empty = Layout::new();
    assert!(!collides_with(&empty, Rect::new(0, 0, 32, 18), None));
    assert!(find_collisions(&empty, Rect::new(0, 0, 32, 18), None).is_empty());
}

#[test]
fn overlapping_candidate_collides() {
    assert!(collides_with(&layout(), Rect::new(2, 2, 2, 2), None));
}

#[test]
fn edge_touching_candidate_does_not_collide() {
    assert!(!collides_with(&layout(), Rect::new(8, 0, 2, 2), None));
    assert!(!collides_with(&layout(), Rect::new(0, 4, 8, 6), None));
}

#[test]
fn excluded_item_is_ignored() {
    let l = layout();
    let a = ItemId::from("a");
    assert!(!collides_with(&l, Rect::new(1, 1, 2, 2), Some(&a)));
    assert!(collides_with(&l, Rect::new(3, 1, 2, 2), Some(&a)));
}

#[test]
fn find_collisions_lists_all_in_layout_order() {
    let hits = find_collisions(&layout(), Rect::new(3, 3, 2, 8), None);
    assert_eq!(hits, vec![ItemId::from("a"), ItemId::from("b"), ItemId::from("c")]);
}

#[test]
fn find_collisions_respects_exclusion() {
    let b = ItemId::from("b");
    let hits = find_collisions(&layout(), Rect::new(3, 3, 2, 2), Some(&b));
    assert_eq!(hits, vec![ItemId::from("a")]);
}

#[test]
fn first_collision_returns_earliest_item() {
    let l = layout();
    let hit = first_collision(&l, Rect::new(3, 0, 2, 2), None).unwrap();
    assert_eq!(hit.id, ItemId::from("a"));
}
