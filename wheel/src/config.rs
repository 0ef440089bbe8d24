//! Presentation settings for the wheel.
//!
//! Only look-and-feel lives here: canvas size, hub size, palette, fonts and
//! the two sound clips. Spin timing and confetti physics are fixed in
//! [`crate::consts`].

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

pub const DEFAULT_RADIUS: f64 = 150.0;
pub const DEFAULT_HUB_RADIUS: f64 = 40.0;
pub const DEFAULT_PALETTE: [&str; 5] = ["#FF6B6B", "#4ECDC4", "#FFD93D", "#6A4C93", "#1A535C"];
pub const DEFAULT_LABEL_FONT: &str = "bold 16px Arial";
pub const DEFAULT_TICK_SOUND_URL: &str = "https://actions.google.com/sounds/v1/cartoon/wood_plank_flicks.ogg";
pub const DEFAULT_WIN_SOUND_URL: &str = "https://actions.google.com/sounds/v1/cartoon/clang_and_wobble.ogg";

/// Errors produced while reading a [`WheelConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config text is not valid JSON for this shape.
    #[error("invalid wheel config: {0}")]
    Parse(#[from] serde_json::Error),
    /// A numeric field is zero, negative or not finite.
    #[error("{field} must be a positive number, got {value}")]
    NotPositive { field: &'static str, value: f64 },
    /// The hub would not fit inside the wheel.
    #[error("hub radius {hub} must be smaller than wheel radius {radius}")]
    HubTooLarge { hub: f64, radius: f64 },
    /// No slice colors were given.
    #[error("palette must contain at least one color")]
    EmptyPalette,
}

/// Look-and-feel settings. Every field falls back to its default when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WheelConfig {
    /// Wheel radius in CSS pixels; the canvas is `2 * radius` on each side.
    pub radius: f64,
    /// Radius of the clickable center hub.
    pub hub_radius: f64,
    /// Slice and confetti colors, cycled by index.
    pub palette: Vec<String>,
    /// Canvas font used for slice labels and the hub caption.
    pub label_font: String,
    pub tick_sound_url: String,
    pub win_sound_url: String,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            radius: DEFAULT_RADIUS,
            hub_radius: DEFAULT_HUB_RADIUS,
            palette: DEFAULT_PALETTE.iter().map(|c| (*c).to_owned()).collect(),
            label_font: DEFAULT_LABEL_FONT.to_owned(),
            tick_sound_url: DEFAULT_TICK_SOUND_URL.to_owned(),
            win_sound_url: DEFAULT_WIN_SOUND_URL.to_owned(),
        }
    }
}

impl WheelConfig {
    /// Parse and validate a config from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the JSON is malformed or a value is out of range.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [("radius", self.radius), ("hub_radius", self.hub_radius)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::NotPositive { field, value });
            }
        }
        if self.hub_radius >= self.radius {
            return Err(ConfigError::HubTooLarge { hub: self.hub_radius, radius: self.radius });
        }
        if self.palette.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        Ok(())
    }

    /// Canvas edge length in CSS pixels.
    #[must_use]
    pub fn canvas_size(&self) -> f64 {
        self.radius * 2.0
    }

    /// Color for palette slot `index`, wrapping around.
    #[must_use]
    pub fn color(&self, index: usize) -> &str {
        if self.palette.is_empty() {
            return DEFAULT_PALETTE[index % DEFAULT_PALETTE.len()];
        }
        &self.palette[index % self.palette.len()]
    }
}
