//! Page-level configuration.
//!
//! The host page may embed a JSON object in
//! `<script type="application/json" id="spinwheel-config">`. Missing or
//! invalid config falls back to the defaults with a warning, so a typo never
//! leaves the page blank.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use wheel::config::WheelConfig;

/// DOM id of the optional config element.
pub const CONFIG_ELEMENT_ID: &str = "spinwheel-config";

/// Read the wheel config from the current document.
pub fn load_config() -> WheelConfig {
    #[cfg(feature = "csr")]
    {
        let raw = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());
        config_from_optional(raw.as_deref())
    }
    #[cfg(not(feature = "csr"))]
    {
        WheelConfig::default()
    }
}

/// Parse embedded config text, falling back to defaults when absent or invalid.
pub fn config_from_optional(raw: Option<&str>) -> WheelConfig {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return WheelConfig::default();
    };
    match WheelConfig::from_json(raw) {
        Ok(config) => {
            log::debug!("config: loaded from #{CONFIG_ELEMENT_ID}");
            config
        }
        Err(err) => {
            log::warn!("config: ignoring #{CONFIG_ELEMENT_ID}: {err}");
            WheelConfig::default()
        }
    }
}
