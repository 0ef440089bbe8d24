//! Sound effects for spin ticks and the win.
//!
//! Which clips to play is decided from the engine's [`Action`] list, which is
//! pure and tested. Playback itself needs a browser and is gated on `csr`.
//! Every play clones the preloaded element so rapid ticks can overlap.

#[cfg(test)]
#[path = "audio_test.rs"]
mod audio_test;

use wheel::engine::Action;

/// A sound the wheel can play.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Clip {
    Tick,
    Win,
}

/// Clips to play for the given actions, in order.
pub fn clips_for(actions: &[Action]) -> Vec<Clip> {
    actions
        .iter()
        .filter_map(|action| match action {
            Action::Tick { .. } => Some(Clip::Tick),
            Action::Won { .. } => Some(Clip::Win),
            _ => None,
        })
        .collect()
}

#[cfg(feature = "csr")]
pub use board::SoundBoard;

#[cfg(feature = "csr")]
mod board {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::HtmlAudioElement;
    use wheel::config::WheelConfig;
    use wheel::engine::Action;

    use super::{Clip, clips_for};

    /// Preloaded audio elements for each [`Clip`].
    ///
    /// A clip whose element could not be created is skipped silently.
    pub struct SoundBoard {
        tick: Option<HtmlAudioElement>,
        win: Option<HtmlAudioElement>,
    }

    impl SoundBoard {
        pub fn new(config: &WheelConfig) -> Self {
            Self { tick: preload(&config.tick_sound_url), win: preload(&config.win_sound_url) }
        }

        /// Play every clip the actions call for.
        pub fn play_for(&self, actions: &[Action]) {
            for clip in clips_for(actions) {
                self.play(clip);
            }
        }

        pub fn play(&self, clip: Clip) {
            let source = match clip {
                Clip::Tick => self.tick.as_ref(),
                Clip::Win => self.win.as_ref(),
            };
            let Some(source) = source else {
                return;
            };
            let audio = match source.clone_node() {
                Ok(node) => match node.dyn_into::<HtmlAudioElement>() {
                    Ok(audio) => audio,
                    Err(_) => return,
                },
                Err(err) => {
                    log::debug!("audio: clone {clip:?} failed: {err:?}");
                    return;
                }
            };
            match audio.play() {
                Ok(promise) => await_playback(clip, promise),
                Err(err) => log::debug!("audio: play {clip:?} failed: {err:?}"),
            }
        }
    }

    fn preload(url: &str) -> Option<HtmlAudioElement> {
        if url.is_empty() {
            return None;
        }
        match HtmlAudioElement::new_with_src(url) {
            Ok(audio) => Some(audio),
            Err(err) => {
                log::warn!("audio: cannot load {url}: {err:?}");
                None
            }
        }
    }

    /// Browsers reject playback before the first user gesture; that is not an error.
    fn await_playback(clip: Clip, promise: js_sys::Promise) {
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(err) = JsFuture::from(promise).await {
                log::debug!("audio: {clip:?} rejected: {err:?}");
            }
        });
    }
}
