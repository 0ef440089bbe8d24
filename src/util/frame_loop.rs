//! `requestAnimationFrame` driver for spins and confetti.
//!
//! A single loop advances the engine while [`EngineCore::is_animating`] holds,
//! plays the clips each frame produced and re-arms itself. `pending` ensures
//! at most one frame is queued no matter how many clicks start the loop.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wheel::engine::EngineCore;

use crate::util::audio::SoundBoard;

/// Queue the next animation frame unless one is already pending.
pub fn request_frame(core: RwSignal<EngineCore>, sounds: Rc<SoundBoard>, pending: RwSignal<bool>) {
    if pending.get_untracked() {
        return;
    }
    let Some(window) = web_sys::window() else {
        log::warn!("frame_loop: no window, animation disabled");
        return;
    };
    pending.set(true);

    let holder: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let holder_for_cb = Rc::clone(&holder);
    let cb = Closure::wrap(Box::new(move |ts: f64| {
        pending.set(false);
        let actions = core.try_update(|c| c.on_frame(ts)).unwrap_or_default();
        sounds.play_for(&actions);
        if core.with_untracked(EngineCore::is_animating) {
            request_frame(core, Rc::clone(&sounds), pending);
        }
        holder_for_cb.borrow_mut().take();
    }) as Box<dyn FnMut(f64)>);

    if window.request_animation_frame(cb.as_ref().unchecked_ref()).is_ok() {
        *holder.borrow_mut() = Some(cb);
    } else {
        log::warn!("frame_loop: requestAnimationFrame rejected");
        pending.set(false);
    }
}
