//! Spin state machine: `Idle → Spinning → Settled`.
//!
//! A spin is planned once, up front: the winning index is chosen by the
//! caller, and the total rotation needed to bring the pointer to the middle of
//! that slice after [`SPIN_REVOLUTIONS`] full turns is fixed in a
//! [`SpinTarget`]. Each animation frame then only evaluates the easing curve
//! at the elapsed time. The slice geometry and the winning label are copied
//! into the spin when it starts, so edits to the entry list cannot shift the
//! landing slice mid-animation.

#[cfg(test)]
#[path = "spin_test.rs"]
mod spin_test;

use log::{debug, info};

use crate::consts::{FULL_TURN, SPIN_DURATION_MS, SPIN_REVOLUTIONS};
use crate::geometry::WheelGeometry;

/// Cubic ease-out: fast start, smooth stop. `p` is clamped to `[0, 1]`.
#[must_use]
pub fn ease_out_cubic(p: f64) -> f64 {
    let p = p.clamp(0.0, 1.0);
    1.0 - (1.0 - p).powi(3)
}

/// The planned end state of one spin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpinTarget {
    /// Index of the winning entry.
    pub index: usize,
    /// Total rotation in radians at the end of the spin.
    pub rotation: f64,
}

impl SpinTarget {
    /// Rotation that lands the pointer on the center of slice `index`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn new(geometry: &WheelGeometry, index: usize) -> Self {
        let slice = geometry.slice_angle();
        let rotation = f64::from(SPIN_REVOLUTIONS) * FULL_TURN + index as f64 * slice + slice / 2.0;
        Self { index, rotation }
    }
}

/// The result of a finished spin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// Winning label, as it was when the spin started.
    pub label: String,
    /// Slice currently holding the winner, if it is still on the wheel.
    pub slice: Option<usize>,
}

/// A spin in progress.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveSpin {
    target: SpinTarget,
    geometry: WheelGeometry,
    label: String,
    started_at_ms: Option<f64>,
    last_tick_slice: Option<usize>,
}

impl ActiveSpin {
    #[must_use]
    pub fn target(&self) -> SpinTarget {
        self.target
    }

    /// Geometry frozen at spin start.
    #[must_use]
    pub fn geometry(&self) -> WheelGeometry {
        self.geometry
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum SpinPhase {
    /// No spin has run yet.
    #[default]
    Idle,
    Spinning(ActiveSpin),
    /// The last spin finished; the winner stays until the next spin.
    Settled(Outcome),
}

/// Events produced while advancing a spin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpinEvent {
    /// The pointer moved into a different slice this frame.
    Tick { slice: usize },
    /// The spin reached its target.
    Settled { index: usize, label: String },
}

/// Owns the wheel rotation and the spin lifecycle.
#[derive(Debug, Clone, Default)]
pub struct SpinEngine {
    phase: SpinPhase,
    rotation: f64,
}

impl SpinEngine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn phase(&self) -> &SpinPhase {
        &self.phase
    }

    /// Current wheel rotation in radians.
    #[must_use]
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    #[must_use]
    pub fn is_spinning(&self) -> bool {
        matches!(self.phase, SpinPhase::Spinning(_))
    }

    /// The settled result, if the last spin has finished.
    #[must_use]
    pub fn outcome(&self) -> Option<&Outcome> {
        match &self.phase {
            SpinPhase::Settled(outcome) => Some(outcome),
            _ => None,
        }
    }

    /// Start a spin that will land on `entries[index]`.
    ///
    /// Returns `None` without changing state if a spin is already running or
    /// `index` is not a valid entry (which covers an empty wheel).
    pub fn start(&mut self, entries: &[String], index: usize) -> Option<SpinTarget> {
        if self.is_spinning() {
            debug!("spin: ignoring request while spinning");
            return None;
        }
        let label = entries.get(index)?.clone();
        let geometry = WheelGeometry::new(entries.len());
        let target = SpinTarget::new(&geometry, index);
        debug!("spin: start index={} target={:.4} slices={}", index, target.rotation, geometry.count());

        self.rotation = 0.0;
        self.phase = SpinPhase::Spinning(ActiveSpin {
            target,
            geometry,
            label,
            started_at_ms: None,
            last_tick_slice: None,
        });
        Some(target)
    }

    /// Advance the running spin to the frame timestamp `now_ms`.
    ///
    /// The first frame after [`SpinEngine::start`] marks the start time. Emits
    /// at most one tick per frame, and a `Settled` event on the frame where
    /// the elapsed time reaches the spin duration.
    pub fn advance(&mut self, now_ms: f64) -> Vec<SpinEvent> {
        let SpinPhase::Spinning(spin) = &mut self.phase else {
            return Vec::new();
        };
        if !now_ms.is_finite() {
            return Vec::new();
        }

        let started_at = *spin.started_at_ms.get_or_insert(now_ms);
        let progress = ((now_ms - started_at) / SPIN_DURATION_MS).clamp(0.0, 1.0);
        self.rotation = spin.target.rotation * ease_out_cubic(progress);

        let mut events = Vec::new();
        if let Some(slice) = spin.geometry.slice_at(self.rotation)
            && spin.last_tick_slice != Some(slice)
        {
            spin.last_tick_slice = Some(slice);
            events.push(SpinEvent::Tick { slice });
        }

        if progress >= 1.0 {
            let index = spin.target.index;
            let label = std::mem::take(&mut spin.label);
            info!("spin: settled on {label:?} (index {index})");
            self.phase = SpinPhase::Settled(Outcome { label: label.clone(), slice: Some(index) });
            events.push(SpinEvent::Settled { index, label });
        }
        events
    }

    /// Keep the settled winner's slice in step with an entry removal.
    pub fn entry_removed(&mut self, index: usize) {
        let SpinPhase::Settled(outcome) = &mut self.phase else {
            return;
        };
        outcome.slice = match outcome.slice {
            Some(slice) if slice == index => None,
            Some(slice) if slice > index => Some(slice - 1),
            other => other,
        };
    }
}
