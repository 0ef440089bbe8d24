#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn missing_config_uses_defaults() {
    assert_eq!(config_from_optional(None), WheelConfig::default());
}

#[test]
fn blank_config_uses_defaults() {
    assert_eq!(config_from_optional(Some("  \n ")), WheelConfig::default());
}

#[test]
fn partial_config_overrides_fields() {
    let config = config_from_optional(Some(r#"{ "radius": 200, "label_font": "12px serif" }"#));
    assert_eq!(config.radius, 200.0);
    assert_eq!(config.label_font, "12px serif");
    assert_eq!(config.hub_radius, WheelConfig::default().hub_radius);
}

#[test]
fn malformed_json_falls_back() {
    assert_eq!(config_from_optional(Some("{ radius: ")), WheelConfig::default());
}

#[test]
fn invalid_values_fall_back() {
    assert_eq!(config_from_optional(Some(r#"{ "radius": 30, "hub_radius": 40 }"#)), WheelConfig::default());
}

#[cfg(not(feature = "csr"))]
#[test]
fn non_browser_load_uses_defaults() {
    assert_eq!(load_config(), WheelConfig::default());
}
