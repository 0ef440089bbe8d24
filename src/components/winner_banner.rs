//! Winner announcement shown after a spin settles.

use leptos::prelude::*;

use crate::state::wheel_view::WheelView;

#[component]
pub fn WinnerBanner() -> impl IntoView {
    let view_state = expect_context::<Memo<WheelView>>();
    let banner = move || view_state.get().banner_text();

    view! {
        <Show when=move || banner().is_some()>
            <h2 class="winner-banner">{move || banner().unwrap_or_default()}</h2>
        </Show>
    }
}
