//! Browser glue: sound playback, config loading, and the frame loop.

pub mod audio;
pub mod config;
#[cfg(feature = "csr")]
pub mod frame_loop;
