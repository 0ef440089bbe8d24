//! Client-side state helpers.
//!
//! DESIGN
//! ======
//! The authoritative state is a single `wheel::engine::EngineCore` provided
//! as an `RwSignal`. Components subscribe to the smaller
//! [`wheel_view::WheelView`] memo so per-frame rotation updates do not
//! re-render the DOM chrome.

pub mod wheel_view;
