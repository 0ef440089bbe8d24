#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::geometry::Point;

/// Whether `pt` falls on the center hub (boundary included).
#[must_use]
pub fn hub_contains(center: Point, hub_radius: f64, pt: Point) -> bool {
    center.distance(pt) <= hub_radius
}

/// Convert a viewport-space click into canvas space, given the canvas's
/// bounding rectangle origin.
#[must_use]
pub fn client_to_canvas(client_x: f64, client_y: f64, rect_left: f64, rect_top: f64) -> Point {
    Point::new(client_x - rect_left, client_y - rect_top)
}
