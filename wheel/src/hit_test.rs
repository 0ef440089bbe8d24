use super::*;

const CENTER: Point = Point { x: 150.0, y: 150.0 };

#[test]
fn center_is_inside_hub() {
    assert!(hub_contains(CENTER, 40.0, CENTER));
}

#[test]
fn hub_edge_is_inside() {
    assert!(hub_contains(CENTER, 40.0, Point::new(190.0, 150.0)));
    assert!(hub_contains(CENTER, 40.0, Point::new(150.0, 110.0)));
}

#[test]
fn just_outside_hub_misses() {
    assert!(!hub_contains(CENTER, 40.0, Point::new(190.5, 150.0)));
    // Diagonal: (30, 30) is ~42.4 from center.
    assert!(!hub_contains(CENTER, 40.0, Point::new(180.0, 180.0)));
}

#[test]
fn slice_area_misses() {
    assert!(!hub_contains(CENTER, 40.0, Point::new(150.0, 20.0)));
    assert!(!hub_contains(CENTER, 40.0, Point::new(0.0, 0.0)));
}

#[test]
fn client_to_canvas_subtracts_rect_origin() {
    let pt = client_to_canvas(420.0, 310.0, 270.0, 160.0);
    assert_eq!(pt, Point::new(150.0, 150.0));
}
