//! Confetti burst played once a spin settles.
//!
//! Particles are integrated with semi-implicit Euler steps (position first,
//! then velocity) once per animation frame, with no collisions or bounds.
//! After [`CONFETTI_FRAMES`] steps the burst is cleared.

#[cfg(test)]
#[path = "confetti_test.rs"]
mod confetti_test;

use rand::Rng;

use crate::consts::{CONFETTI_COUNT, CONFETTI_FRAMES, CONFETTI_GRAVITY, CONFETTI_SIZE, CONFETTI_VX, CONFETTI_VY};
use crate::geometry::Point;

/// One confetti dot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub gravity: f64,
    /// Radius in pixels.
    pub size: f64,
    /// Index into the palette.
    pub color: usize,
}

impl Particle {
    fn step(&mut self) {
        self.x += self.vx;
        self.y += self.vy;
        self.vy += self.gravity;
    }
}

/// Owns the particles of the current burst.
#[derive(Debug, Clone, Default)]
pub struct ConfettiSimulator {
    particles: Vec<Particle>,
    frames_run: u32,
}

impl ConfettiSimulator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace any running burst with a fresh one centered on `origin`.
    pub fn launch<R: Rng + ?Sized>(&mut self, origin: Point, palette_len: usize, rng: &mut R) {
        let palette_len = palette_len.max(1);
        self.frames_run = 0;
        self.particles = (0..CONFETTI_COUNT)
            .map(|_| Particle {
                x: origin.x,
                y: origin.y,
                vx: rng.random_range(CONFETTI_VX.0..CONFETTI_VX.1),
                vy: rng.random_range(CONFETTI_VY.0..CONFETTI_VY.1),
                gravity: CONFETTI_GRAVITY,
                size: rng.random_range(CONFETTI_SIZE.0..CONFETTI_SIZE.1),
                color: rng.random_range(0..palette_len),
            })
            .collect();
    }

    /// Advance every particle by one frame.
    ///
    /// Returns `true` on the step that finishes the burst; the particles are
    /// dropped at that point. Steps on an inactive simulator do nothing.
    pub fn step(&mut self) -> bool {
        if !self.is_active() {
            return false;
        }
        for particle in &mut self.particles {
            particle.step();
        }
        self.frames_run += 1;
        if self.frames_run >= CONFETTI_FRAMES {
            self.particles.clear();
            return true;
        }
        false
    }

    /// Drop the current burst without finishing it.
    pub fn clear(&mut self) {
        self.particles.clear();
        self.frames_run = 0;
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.particles.is_empty()
    }

    #[must_use]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Steps taken by the current (or last finished) burst.
    #[must_use]
    pub fn frames_run(&self) -> u32 {
        self.frames_run
    }
}
