use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::confetti::{ConfettiSimulator, Particle};
use crate::config::WheelConfig;
use crate::entries::EntryStore;
use crate::geometry::{Point, WheelGeometry};
use crate::hit;
use crate::input::{self, Button, Intent, Key};
use crate::render;
use crate::spin::{SpinEngine, SpinEvent, SpinTarget};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Side effects returned from engine operations for the host to carry out.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    EntryAdded { index: usize, label: String },
    EntryRemoved { index: usize, label: String },
    SpinStarted(SpinTarget),
    /// The pointer crossed into `slice`; play the tick clip.
    Tick { slice: usize },
    /// The spin settled; play the win clip and show the winner.
    Won { index: usize, label: String },
    ConfettiFinished,
    RenderNeeded,
}

/// Errors raised while binding the engine to a canvas element.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("2d canvas context unavailable")]
    ContextUnavailable,
    #[error("canvas call failed: {0}")]
    Js(String),
}

impl From<JsValue> for EngineError {
    fn from(value: JsValue) -> Self {
        Self::Js(format!("{value:?}"))
    }
}

/// Core engine state — all logic that doesn't depend on the canvas element.
///
/// Owns the entry list, the spin state machine, the confetti burst and the
/// random source. Every operation returns the [`Action`]s it caused; an empty
/// list means the request was ignored.
#[derive(Debug, Clone)]
pub struct EngineCore {
    config: WheelConfig,
    entries: EntryStore,
    spin: SpinEngine,
    confetti: ConfettiSimulator,
    rng: StdRng,
}

impl Default for EngineCore {
    fn default() -> Self {
        Self::new(WheelConfig::default())
    }
}

impl EngineCore {
    /// Create an engine seeded from the OS random source.
    #[must_use]
    pub fn new(config: WheelConfig) -> Self {
        Self::with_rng(config, StdRng::from_os_rng())
    }

    /// Create an engine with an explicit random source, e.g. a seeded one for tests.
    #[must_use]
    pub fn with_rng(config: WheelConfig, rng: StdRng) -> Self {
        Self {
            config,
            entries: EntryStore::new(),
            spin: SpinEngine::new(),
            confetti: ConfettiSimulator::new(),
            rng,
        }
    }

    // --- Entries ---

    /// Add an entry. Ignored for blank text and while a spin is running.
    pub fn add_entry(&mut self, text: &str) -> Vec<Action> {
        if self.spin.is_spinning() {
            log::debug!("engine: entry edits are locked while spinning");
            return Vec::new();
        }
        let Some(index) = self.entries.add(text) else {
            return Vec::new();
        };
        let label = self.entries.get(index).unwrap_or_default().to_owned();
        vec![Action::EntryAdded { index, label }, Action::RenderNeeded]
    }

    /// Remove the entry at `index`. Ignored when out of range or while spinning.
    pub fn remove_entry(&mut self, index: usize) -> Vec<Action> {
        if self.spin.is_spinning() {
            log::debug!("engine: entry edits are locked while spinning");
            return Vec::new();
        }
        let Some(label) = self.entries.remove(index) else {
            return Vec::new();
        };
        self.spin.entry_removed(index);
        vec![Action::EntryRemoved { index, label }, Action::RenderNeeded]
    }

    // --- Spin ---

    /// Start a spin on a uniformly random entry.
    pub fn request_spin(&mut self) -> Vec<Action> {
        if self.entries.is_empty() {
            return Vec::new();
        }
        let index = self.rng.random_range(0..self.entries.len());
        self.request_spin_at(index)
    }

    /// Start a spin that will land on entry `index`.
    ///
    /// Clears the previous winner and any confetti. Ignored with no entries,
    /// while already spinning, or for an out-of-range index.
    pub fn request_spin_at(&mut self, index: usize) -> Vec<Action> {
        let Some(target) = self.spin.start(self.entries.as_slice(), index) else {
            return Vec::new();
        };
        self.confetti.clear();
        vec![Action::SpinStarted(target), Action::RenderNeeded]
    }

    // --- Input ---

    /// Apply a user intent.
    pub fn dispatch(&mut self, intent: Intent) -> Vec<Action> {
        match intent {
            Intent::AddEntry(text) => self.add_entry(&text),
            Intent::RemoveEntry(index) => self.remove_entry(index),
            Intent::Spin => self.request_spin(),
        }
    }

    /// Key press in the entry field currently holding `draft`.
    pub fn on_key_down(&mut self, key: &Key, draft: &str) -> Vec<Action> {
        input::intent_for_key(key, draft).map_or_else(Vec::new, |intent| self.dispatch(intent))
    }

    /// Click at canvas point `pt`.
    pub fn on_click(&mut self, pt: Point, button: Button) -> Vec<Action> {
        input::intent_for_click(pt, button, self.center(), self.config.hub_radius)
            .map_or_else(Vec::new, |intent| self.dispatch(intent))
    }

    // --- Frames ---

    /// Advance the spin and the confetti to the frame timestamp `now_ms`.
    pub fn on_frame(&mut self, now_ms: f64) -> Vec<Action> {
        if !self.is_animating() {
            return Vec::new();
        }
        let mut actions = Vec::new();

        if self.confetti.step() {
            actions.push(Action::ConfettiFinished);
        }

        for event in self.spin.advance(now_ms) {
            match event {
                SpinEvent::Tick { slice } => actions.push(Action::Tick { slice }),
                SpinEvent::Settled { index, label } => {
                    let center = self.center();
                    self.confetti.launch(center, self.config.palette.len(), &mut self.rng);
                    actions.push(Action::Won { index, label });
                }
            }
        }

        actions.push(Action::RenderNeeded);
        actions
    }

    // --- Queries ---

    #[must_use]
    pub fn config(&self) -> &WheelConfig {
        &self.config
    }

    #[must_use]
    pub fn entries(&self) -> &[String] {
        self.entries.as_slice()
    }

    /// Geometry for the current entry list.
    #[must_use]
    pub fn geometry(&self) -> WheelGeometry {
        WheelGeometry::new(self.entries.len())
    }

    #[must_use]
    pub fn rotation(&self) -> f64 {
        self.spin.rotation()
    }

    #[must_use]
    pub fn spinning(&self) -> bool {
        self.spin.is_spinning()
    }

    /// Label of the last winner, until the next spin starts.
    #[must_use]
    pub fn winner(&self) -> Option<&str> {
        self.spin.outcome().map(|o| o.label.as_str())
    }

    /// Slice to highlight as the winner, if it is still on the wheel.
    #[must_use]
    pub fn winner_slice(&self) -> Option<usize> {
        self.spin.outcome().and_then(|o| o.slice)
    }

    #[must_use]
    pub fn confetti(&self) -> &[Particle] {
        self.confetti.particles()
    }

    /// Whether the host should keep requesting animation frames.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.spin.is_spinning() || self.confetti.is_active()
    }

    /// Wheel center in canvas space.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.config.radius, self.config.radius)
    }
}

/// Binds the wheel to a browser `<canvas>` element.
pub struct Engine {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    dpr: f64,
}

impl Engine {
    /// Acquire the canvas's 2D context.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError`] if the element has no usable 2D context.
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, EngineError> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or(EngineError::ContextUnavailable)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| EngineError::ContextUnavailable)?;
        Ok(Self { canvas, ctx, dpr: 1.0 })
    }

    /// Size the backing store for `config` at device pixel ratio `dpr`.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn resize(&mut self, config: &WheelConfig, dpr: f64) {
        self.dpr = if dpr.is_finite() && dpr > 0.0 { dpr } else { 1.0 };
        let px = (config.canvas_size() * self.dpr).round().max(1.0) as u32;
        self.canvas.set_width(px);
        self.canvas.set_height(px);
    }

    /// Draw the current state to the canvas.
    ///
    /// # Errors
    ///
    /// Returns `Err` if any `Canvas2D` call fails.
    pub fn render(&self, core: &EngineCore) -> Result<(), JsValue> {
        render::draw(&self.ctx, core, self.dpr)
    }

    /// Convert a `MouseEvent` client position into canvas space.
    #[must_use]
    pub fn canvas_point(&self, client_x: f64, client_y: f64) -> Point {
        let rect = self.canvas.get_bounding_client_rect();
        hit::client_to_canvas(client_x, client_y, rect.left(), rect.top())
    }
}
