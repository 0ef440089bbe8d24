//! Slice geometry shared by the spin engine and the renderer.
//!
//! Slice `i` spans `[i * slice_angle + SLICE_OFFSET, (i + 1) * slice_angle + SLICE_OFFSET)`
//! in wheel-local angles. The slice under the pointer for a given wheel
//! rotation is `floor(normalize(rotation) / slice_angle)`.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use crate::consts::{FULL_TURN, SLICE_OFFSET};

/// A point in canvas space (CSS pixels, origin top-left, y down).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Slice layout for a wheel with `count` entries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelGeometry {
    count: usize,
    slice_angle: f64,
}

impl WheelGeometry {
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn new(count: usize) -> Self {
        let slice_angle = if count == 0 { 0.0 } else { FULL_TURN / count as f64 };
        Self { count, slice_angle }
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Angular width of one slice, or `0.0` for an empty wheel.
    #[must_use]
    pub fn slice_angle(&self) -> f64 {
        self.slice_angle
    }

    /// Start and end angles of slice `index` before rotation.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn slice_span(&self, index: usize) -> (f64, f64) {
        let start = index as f64 * self.slice_angle + SLICE_OFFSET;
        (start, start + self.slice_angle)
    }

    /// Angle of the radial line through the middle of slice `index`.
    #[must_use]
    pub fn label_angle(&self, index: usize) -> f64 {
        let (start, _) = self.slice_span(index);
        start + self.slice_angle / 2.0
    }

    /// Index of the slice under the pointer when the wheel is at `rotation`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn slice_at(&self, rotation: f64) -> Option<usize> {
        if self.count == 0 || !rotation.is_finite() {
            return None;
        }
        let slice = (normalize_angle(rotation) / self.slice_angle).floor() as usize;
        Some(slice.min(self.count - 1))
    }
}

/// Map any angle into `[0, 2π)`.
#[must_use]
pub fn normalize_angle(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(FULL_TURN);
    if wrapped >= FULL_TURN { 0.0 } else { wrapped }
}
