//! Bridge component between Leptos state and the imperative `wheel::Engine`.
//!
//! ARCHITECTURE
//! ============
//! The wheel crate owns drawing and all spin logic. This host mounts the
//! engine on a `<canvas>`, re-renders whenever the engine signal changes,
//! routes clicks into [`EngineCore::on_click`], and starts the frame loop
//! when a click leaves the engine animating.

use leptos::prelude::*;
use wheel::engine::EngineCore;

#[cfg(feature = "csr")]
use std::cell::RefCell;
#[cfg(feature = "csr")]
use std::rc::Rc;

#[cfg(feature = "csr")]
use wheel::engine::Engine;
#[cfg(feature = "csr")]
use wheel::input::Button;

#[cfg(feature = "csr")]
use crate::util::audio::SoundBoard;
#[cfg(feature = "csr")]
use crate::util::frame_loop::request_frame;

#[cfg(feature = "csr")]
fn device_pixel_ratio() -> f64 {
    web_sys::window().map_or(1.0, |w| w.device_pixel_ratio())
}

/// Canvas host component.
#[component]
pub fn WheelHost() -> impl IntoView {
    let core = expect_context::<RwSignal<EngineCore>>();
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();

    let size = core.with_untracked(|c| c.config().canvas_size());
    let style = format!("width: {size}px; height: {size}px;");

    #[cfg(feature = "csr")]
    let engine = Rc::new(RefCell::new(None::<Engine>));
    #[cfg(feature = "csr")]
    let sounds = Rc::new(core.with_untracked(|c| SoundBoard::new(c.config())));
    #[cfg(feature = "csr")]
    let raf_pending = RwSignal::new(false);

    #[cfg(feature = "csr")]
    {
        let engine = Rc::clone(&engine);
        Effect::new(move || {
            let Some(canvas) = canvas_ref.get() else {
                return;
            };
            let mut slot = engine.borrow_mut();
            if slot.is_none() {
                match Engine::new(canvas) {
                    Ok(mut instance) => {
                        core.with_untracked(|c| instance.resize(c.config(), device_pixel_ratio()));
                        log::info!("wheel_host: engine mounted");
                        *slot = Some(instance);
                    }
                    Err(err) => {
                        log::error!("wheel_host: cannot mount engine: {err}");
                        return;
                    }
                }
            }
            let Some(instance) = slot.as_ref() else {
                return;
            };
            core.with(|c| {
                if let Err(err) = instance.render(c) {
                    log::error!("wheel_host: render failed: {err:?}");
                }
            });
        });
    }

    let on_click = {
        #[cfg(feature = "csr")]
        {
            let engine = Rc::clone(&engine);
            move |ev: leptos::ev::MouseEvent| {
                let Some(point) = engine
                    .borrow()
                    .as_ref()
                    .map(|e| e.canvas_point(f64::from(ev.client_x()), f64::from(ev.client_y())))
                else {
                    return;
                };
                let button = Button::from_dom(ev.button());
                let actions = core.try_update(|c| c.on_click(point, button)).unwrap_or_default();
                if !actions.is_empty() && core.with_untracked(EngineCore::is_animating) {
                    request_frame(core, Rc::clone(&sounds), raf_pending);
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::MouseEvent| {}
        }
    };

    view! {
        <div class="wheel-host">
            <canvas
                class="wheel-host__canvas"
                node_ref=canvas_ref
                width=size.to_string()
                height=size.to_string()
                style=style
                on:click=on_click
            >
                "Your browser does not support canvas."
            </canvas>
        </div>
    }
}
