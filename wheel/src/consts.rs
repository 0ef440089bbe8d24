//! Fixed constants for the wheel physics and layout.

use std::f64::consts::{FRAC_PI_2, TAU};

// ── Geometry ────────────────────────────────────────────────────

/// Angle at which slice 0 begins; the pointer sits at the top of the wheel.
pub const SLICE_OFFSET: f64 = -FRAC_PI_2;

/// A full turn, in radians.
pub const FULL_TURN: f64 = TAU;

/// Labels are drawn starting at this fraction of the wheel radius.
pub const LABEL_RADIUS_RATIO: f64 = 0.6;

// ── Spin ────────────────────────────────────────────────────────

/// Whole revolutions added on top of the landing angle.
pub const SPIN_REVOLUTIONS: u32 = 5;

/// Length of a spin animation in milliseconds.
pub const SPIN_DURATION_MS: f64 = 6000.0;

// ── Confetti ────────────────────────────────────────────────────

/// Number of particles in one burst.
pub const CONFETTI_COUNT: usize = 100;

/// Number of update steps before the burst is cleared.
pub const CONFETTI_FRAMES: u32 = 60;

/// Downward acceleration in pixels per frame².
pub const CONFETTI_GRAVITY: f64 = 0.2;

/// Horizontal launch speed range in pixels per frame.
pub const CONFETTI_VX: (f64, f64) = (-3.0, 3.0);

/// Vertical launch speed range in pixels per frame (negative is up).
pub const CONFETTI_VY: (f64, f64) = (-8.0, -2.0);

/// Particle radius range in pixels.
pub const CONFETTI_SIZE: (f64, f64) = (2.0, 7.0);
