//! Rendering: draws the full wheel scene to a 2D context.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! It reads engine state and produces pixels — it does not mutate any state.
//!
//! The wheel is painted rotated by `-rotation`, which puts slice
//! [`crate::geometry::WheelGeometry::slice_at`]`(rotation)` under the fixed
//! pointer at the top.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! The top-level caller ([`crate::engine::Engine::render`]) hands the result
//! to the host.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use std::f64::consts::TAU;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::config::WheelConfig;
use crate::confetti::Particle;
use crate::consts::LABEL_RADIUS_RATIO;
use crate::engine::EngineCore;
use crate::geometry::WheelGeometry;

const WINNER_HIGHLIGHT: &str = "rgba(255,255,255,0.3)";
const LABEL_COLOR: &str = "black";
const HUB_FILL: &str = "#1A535C";
const HUB_STROKE: &str = "white";
const HUB_STROKE_WIDTH: f64 = 3.0;
const POINTER_COLOR: &str = "white";
/// Pointer tip distance below the top edge, and its length and half-width.
const POINTER_INSET: f64 = 5.0;
const POINTER_LENGTH: f64 = 20.0;
const POINTER_HALF_WIDTH: f64 = 10.0;

/// Draw the full scene: slices, labels, hub, pointer and confetti.
///
/// `dpr` is the device pixel ratio; drawing happens in CSS pixels.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. invalid context state).
pub fn draw(ctx: &CanvasRenderingContext2d, core: &EngineCore, dpr: f64) -> Result<(), JsValue> {
    let config = core.config();
    let size = config.canvas_size();

    ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0)?;
    ctx.clear_rect(0.0, 0.0, size, size);

    if core.entries().is_empty() {
        return Ok(());
    }

    draw_slices(ctx, core, config)?;
    draw_hub(ctx, config, core.spinning())?;
    draw_pointer(ctx, config);
    draw_confetti(ctx, config, core.confetti())?;
    Ok(())
}

// =============================================================
// Wheel
// =============================================================

fn draw_slices(ctx: &CanvasRenderingContext2d, core: &EngineCore, config: &WheelConfig) -> Result<(), JsValue> {
    let geometry = core.geometry();
    let radius = config.radius;

    ctx.save();
    ctx.translate(radius, radius)?;
    ctx.rotate(-core.rotation())?;

    for (i, label) in core.entries().iter().enumerate() {
        let (start, end) = geometry.slice_span(i);
        ctx.begin_path();
        ctx.move_to(0.0, 0.0);
        ctx.arc(0.0, 0.0, radius, start, end)?;
        ctx.close_path();
        ctx.set_fill_style_str(config.color(i));
        ctx.fill();

        if core.winner_slice() == Some(i) {
            ctx.set_fill_style_str(WINNER_HIGHLIGHT);
            ctx.fill();
        }

        draw_label(ctx, &geometry, i, label, config)?;
    }

    ctx.restore();
    Ok(())
}

fn draw_label(
    ctx: &CanvasRenderingContext2d,
    geometry: &WheelGeometry,
    index: usize,
    label: &str,
    config: &WheelConfig,
) -> Result<(), JsValue> {
    ctx.save();
    ctx.rotate(geometry.label_angle(index))?;
    ctx.set_text_align("left");
    ctx.set_text_baseline("middle");
    ctx.set_fill_style_str(LABEL_COLOR);
    ctx.set_font(&config.label_font);
    ctx.fill_text(label, config.radius * LABEL_RADIUS_RATIO, 0.0)?;
    ctx.restore();
    Ok(())
}

fn draw_hub(ctx: &CanvasRenderingContext2d, config: &WheelConfig, spinning: bool) -> Result<(), JsValue> {
    let c = config.radius;

    ctx.begin_path();
    ctx.arc(c, c, config.hub_radius, 0.0, TAU)?;
    ctx.set_fill_style_str(HUB_FILL);
    ctx.fill();
    ctx.set_line_width(HUB_STROKE_WIDTH);
    ctx.set_stroke_style_str(HUB_STROKE);
    ctx.stroke();

    ctx.set_fill_style_str(HUB_STROKE);
    ctx.set_font(&config.label_font);
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");
    ctx.fill_text(hub_caption(spinning), c, c)?;
    Ok(())
}

/// Hub text: a start prompt, or an ellipsis while the wheel turns.
#[must_use]
pub fn hub_caption(spinning: bool) -> &'static str {
    if spinning { "..." } else { "START" }
}

fn draw_pointer(ctx: &CanvasRenderingContext2d, config: &WheelConfig) {
    let c = config.radius;
    let tip = POINTER_INSET;
    let base = POINTER_INSET + POINTER_LENGTH;

    ctx.set_fill_style_str(POINTER_COLOR);
    ctx.begin_path();
    ctx.move_to(c, tip);
    ctx.line_to(c - POINTER_HALF_WIDTH, base);
    ctx.line_to(c + POINTER_HALF_WIDTH, base);
    ctx.close_path();
    ctx.fill();
}

fn draw_confetti(ctx: &CanvasRenderingContext2d, config: &WheelConfig, particles: &[Particle]) -> Result<(), JsValue> {
    for p in particles {
        ctx.set_fill_style_str(config.color(p.color));
        ctx.begin_path();
        ctx.arc(p.x, p.y, p.size, 0.0, TAU)?;
        ctx.fill();
    }
    Ok(())
}
