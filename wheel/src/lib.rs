//! Spin-the-wheel engine: entry list, slice geometry, spin animation,
//! confetti particles, and canvas rendering.
//!
//! This crate is compiled to WebAssembly and runs in the browser. Everything
//! except [`render`] and [`engine::Engine`] is plain Rust with no browser
//! dependency, so the whole spin lifecycle is testable natively. The host
//! (a Leptos app) drives [`engine::EngineCore`] from input handlers and a
//! `requestAnimationFrame` loop, and turns the returned [`engine::Action`]s
//! into sounds and UI updates.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level state container [`engine::EngineCore`] and canvas-bound [`engine::Engine`] |
//! | [`entries`] | Ordered entry list |
//! | [`geometry`] | Slice angles, angle normalization, points |
//! | [`spin`] | Spin state machine, easing, tick detection |
//! | [`confetti`] | Particle burst played after a spin settles |
//! | [`input`] | Keys and intents produced by user input |
//! | [`hit`] | Center hub hit-testing |
//! | [`render`] | Scene rendering onto a 2D canvas context |
//! | [`config`] | Presentation settings (size, palette, fonts, clips) |
//! | [`consts`] | Fixed physics constants |

pub mod config;
pub mod confetti;
pub mod consts;
pub mod engine;
pub mod entries;
pub mod geometry;
pub mod hit;
pub mod input;
pub mod render;
pub mod spin;
