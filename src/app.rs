//! Root application component and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use wheel::engine::EngineCore;

use crate::components::{entry_form::EntryForm, entry_list::EntryList, wheel_host::WheelHost, winner_banner::WinnerBanner};
use crate::state::wheel_view::WheelView;
use crate::util::config::load_config;

/// Root application component.
///
/// Provides the engine state and its derived view to all child components.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let core = RwSignal::new(EngineCore::new(load_config()));
    let view_state = Memo::new(move |_| core.with(WheelView::from_core));

    provide_context(core);
    provide_context(view_state);

    view! {
        <Title text="Spin the Wheel"/>

        <main class="spinwheel">
            <h1 class="spinwheel__title">"🎡 Spin the Wheel"</h1>
            <EntryForm/>
            <EntryList/>
            <WheelHost/>
            <WinnerBanner/>
        </main>
    }
}
