//! Input model: keys and the intents user input maps to.
//!
//! The host forwards raw DOM events; this module decides what they mean.
//! [`Intent`]s are applied by [`crate::engine::EngineCore::dispatch`].

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::geometry::Point;
use crate::hit;

/// A keyboard key as reported by the browser (e.g. `"Enter"`, `"a"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key(pub String);

impl Key {
    /// Whether this key submits the entry text field.
    #[must_use]
    pub fn is_submit(&self) -> bool {
        self.0 == "Enter"
    }
}

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Left mouse button (or single-finger tap).
    Primary,
    Middle,
    Secondary,
}

impl Button {
    /// Map a DOM `MouseEvent.button` code.
    #[must_use]
    pub fn from_dom(code: i16) -> Self {
        match code {
            1 => Self::Middle,
            2 => Self::Secondary,
            _ => Self::Primary,
        }
    }
}

/// What the user asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Add the given (untrimmed) text as an entry.
    AddEntry(String),
    /// Remove the entry at this position.
    RemoveEntry(usize),
    /// Start a spin.
    Spin,
}

/// Intent for a key press in the entry field holding `draft`.
#[must_use]
pub fn intent_for_key(key: &Key, draft: &str) -> Option<Intent> {
    key.is_submit().then(|| Intent::AddEntry(draft.to_owned()))
}

/// Intent for a click at canvas point `pt` on a wheel centered at `center`.
///
/// Only primary clicks on the hub spin the wheel.
#[must_use]
pub fn intent_for_click(pt: Point, button: Button, center: Point, hub_radius: f64) -> Option<Intent> {
    (button == Button::Primary && hit::hub_contains(center, hub_radius, pt)).then_some(Intent::Spin)
}
