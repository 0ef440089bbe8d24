#![allow(clippy::float_cmp)]

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use super::*;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

// --- Point ---

#[test]
fn point_distance() {
    let a = Point::new(0.0, 0.0);
    let b = Point::new(3.0, 4.0);
    assert!(approx_eq(a.distance(b), 5.0));
    assert!(approx_eq(b.distance(a), 5.0));
}

// --- slice_angle ---

#[test]
fn empty_wheel_has_zero_slice_angle() {
    let geo = WheelGeometry::new(0);
    assert_eq!(geo.slice_angle(), 0.0);
    assert_eq!(geo.slice_at(1.0), None);
}

#[test]
fn slices_cover_full_turn() {
    for n in 1..=64 {
        let geo = WheelGeometry::new(n);
        #[allow(clippy::cast_precision_loss)]
        let total = geo.slice_angle() * n as f64;
        assert!(approx_eq(total, TAU), "n={n} total={total}");
    }
}

#[test]
fn single_entry_is_whole_wheel() {
    let geo = WheelGeometry::new(1);
    assert!(approx_eq(geo.slice_angle(), TAU));
    assert_eq!(geo.slice_at(0.0), Some(0));
    assert_eq!(geo.slice_at(6.0), Some(0));
}

// --- slice_span / label_angle ---

#[test]
fn first_slice_starts_at_top() {
    let geo = WheelGeometry::new(4);
    let (start, end) = geo.slice_span(0);
    assert!(approx_eq(start, -FRAC_PI_2));
    assert!(approx_eq(end, 0.0));
}

#[test]
fn slices_are_contiguous() {
    let geo = WheelGeometry::new(7);
    for i in 0..6 {
        let (_, end) = geo.slice_span(i);
        let (next_start, _) = geo.slice_span(i + 1);
        assert!(approx_eq(end, next_start));
    }
}

#[test]
fn label_angle_is_slice_midpoint() {
    let geo = WheelGeometry::new(3);
    let (start, end) = geo.slice_span(1);
    assert!(approx_eq(geo.label_angle(1), (start + end) / 2.0));
}

// --- slice_at ---

#[test]
fn slice_at_walks_slices_in_order() {
    let geo = WheelGeometry::new(4);
    assert_eq!(geo.slice_at(0.1), Some(0));
    assert_eq!(geo.slice_at(FRAC_PI_2 + 0.1), Some(1));
    assert_eq!(geo.slice_at(PI + 0.1), Some(2));
    assert_eq!(geo.slice_at(3.0 * FRAC_PI_2 + 0.1), Some(3));
}

#[test]
fn slice_at_wraps_full_turns() {
    let geo = WheelGeometry::new(4);
    assert_eq!(geo.slice_at(10.0 * TAU + FRAC_PI_2 + 0.1), geo.slice_at(FRAC_PI_2 + 0.1));
}

#[test]
fn slice_at_handles_negative_rotation() {
    let geo = WheelGeometry::new(4);
    assert_eq!(geo.slice_at(-0.1), Some(3));
}

#[test]
fn slice_at_never_exceeds_last_index() {
    let geo = WheelGeometry::new(3);
    assert_eq!(geo.slice_at(TAU - 1e-15), Some(2));
}

#[test]
fn slice_at_rejects_non_finite() {
    let geo = WheelGeometry::new(3);
    assert_eq!(geo.slice_at(f64::NAN), None);
    assert_eq!(geo.slice_at(f64::INFINITY), None);
}

// --- normalize_angle ---

#[test]
fn normalize_angle_range() {
    for angle in [-100.0, -TAU, -0.5, 0.0, 0.5, TAU, 7.0 * PI, 1e6] {
        let n = normalize_angle(angle);
        assert!((0.0..TAU).contains(&n), "angle={angle} normalized={n}");
    }
}

#[test]
fn normalize_angle_keeps_in_range_values() {
    assert!(approx_eq(normalize_angle(1.25), 1.25));
    assert!(approx_eq(normalize_angle(TAU + 1.25), 1.25));
    assert!(approx_eq(normalize_angle(-TAU + 1.25), 1.25));
}
