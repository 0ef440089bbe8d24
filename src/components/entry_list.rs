//! List of current entries with per-entry remove buttons.

use leptos::prelude::*;
use wheel::engine::EngineCore;

use crate::state::wheel_view::WheelView;

/// Entry list. Removal buttons are disabled while the wheel spins.
#[component]
pub fn EntryList() -> impl IntoView {
    let core = expect_context::<RwSignal<EngineCore>>();
    let view_state = expect_context::<Memo<WheelView>>();

    let locked = move || !view_state.get().can_edit();

    view! {
        <ul class="entry-list">
            {move || {
                view_state
                    .get()
                    .entries
                    .into_iter()
                    .enumerate()
                    .map(|(index, label)| {
                        view! {
                            <li class="entry-list__item">
                                <span class="entry-list__label">{label}</span>
                                <button
                                    class="btn entry-list__remove"
                                    title="Remove"
                                    disabled=locked
                                    on:click=move |_| core.update(|c| {
                                        c.remove_entry(index);
                                    })
                                >
                                    "X"
                                </button>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </ul>
    }
}
