//! # spinwheel
//!
//! Leptos + WASM front end for the spin-the-wheel widget.
//!
//! This crate contains the page shell, the entry form and list, the winner
//! banner, and the `WheelHost` bridge that mounts the `wheel` crate's
//! imperative canvas engine and drives it from `requestAnimationFrame`.
//! All wheel state lives in one `wheel::engine::EngineCore` held in a
//! reactive signal; components read it through a derived [`state::wheel_view::WheelView`].

pub mod app;
pub mod components;
pub mod state;
pub mod util;
