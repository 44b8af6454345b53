//! Object store tests

use embodi_canvas::board::Board;
use embodi_canvas::types::{ObjectId, Point, Rect};

#[test]
fn test_create_always_meets_floor() {
    let mut board = Board::new();
    let drags = [
        ((0.0, 0.0), (0.0, 0.0)),
        ((10.0, 10.0), (10.0, 500.0)),
        ((10.0, 10.0), (-5.0, 12.0)),
        ((-40.0, -40.0), (-41.0, -39.0)),
        ((0.0, 0.0), (99.9, 59.9)),
        ((300.0, 300.0), (0.0, 0.0)),
    ];
    for ((ax, ay), (cx, cy)) in drags {
        let object = board.create(Point::new(ax, ay), Point::new(cx, cy));
        assert!(object.size.0 >= 100.0, "width {} from {:?}", object.size.0, (ax, ay, cx, cy));
        assert!(object.size.1 >= 60.0, "height {} from {:?}", object.size.1, (ax, ay, cx, cy));
    }
}

#[test]
fn test_rect_intersect_selects_first_only() {
    let mut board = Board::new();
    let a = board.create(Point::new(0.0, 0.0), Point::new(120.0, 80.0)).id;
    board.create(Point::new(200.0, 200.0), Point::new(320.0, 280.0));

    let hits = board.rect_intersect(&Rect::new(10.0, 10.0, 50.0, 50.0));
    assert_eq!(hits, vec![a]);
}

#[test]
fn test_rect_touching_corner_counts() {
    let mut board = Board::new();
    let a = board.create(Point::new(0.0, 0.0), Point::new(100.0, 60.0)).id;
    let hits = board.rect_intersect(&Rect::new(100.0, 60.0, 50.0, 50.0));
    assert_eq!(hits, vec![a]);
}

#[test]
fn test_delete_returns_only_existing() {
    let mut board = Board::new();
    let a = board.create(Point::new(0.0, 0.0), Point::new(0.0, 0.0)).id;
    let removed = board.delete(&[a, ObjectId(999)]);
    assert_eq!(removed, vec![a]);
    assert!(board.is_empty());
    assert_eq!(board.hit_test(Point::new(10.0, 10.0)), None);
}

#[test]
fn test_handle_scales_with_zoom() {
    let mut board = Board::new();
    let a = board.create(Point::new(0.0, 0.0), Point::new(100.0, 60.0)).id;
    // 16px handle at zoom 2 is 8 world units
    assert_eq!(board.handle_rect(a, 16.0, 2.0), Some(Rect::new(92.0, 52.0, 8.0, 8.0)));
    assert_eq!(board.resize_handle_at(Point::new(95.0, 55.0), 16.0, 2.0, |_| true), Some(a));
    assert_eq!(board.resize_handle_at(Point::new(88.0, 55.0), 16.0, 2.0, |_| true), None);
}
