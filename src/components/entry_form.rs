//! Text field and button for adding wheel entries.

use leptos::prelude::*;
use wheel::engine::EngineCore;
use wheel::input::Key;

use crate::state::wheel_view::{WheelView, entry_added};

/// Entry form. Enter or the Add button submits the trimmed draft; the field
/// clears only when the entry was accepted.
#[component]
pub fn EntryForm() -> impl IntoView {
    let core = expect_context::<RwSignal<EngineCore>>();
    let view_state = expect_context::<Memo<WheelView>>();

    let draft = RwSignal::new(String::new());

    let clear_if_added = move |actions: Option<Vec<wheel::engine::Action>>| {
        if actions.is_some_and(|a| entry_added(&a)) {
            draft.set(String::new());
        }
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        let key = Key(ev.key());
        if !key.is_submit() {
            return;
        }
        ev.prevent_default();
        let text = draft.get_untracked();
        clear_if_added(core.try_update(|c| c.on_key_down(&key, &text)));
    };

    let on_add = move |_| {
        let text = draft.get_untracked();
        clear_if_added(core.try_update(|c| c.add_entry(&text)));
    };

    let locked = move || !view_state.get().can_edit();

    view! {
        <div class="entry-form">
            <input
                class="entry-form__input"
                type="text"
                placeholder="Add entry..."
                prop:value=move || draft.get()
                on:input=move |ev| draft.set(event_target_value(&ev))
                on:keydown=on_keydown
                disabled=locked
            />
            <button
                class="btn btn--primary entry-form__add"
                on:click=on_add
                disabled=move || locked() || draft.get().trim().is_empty()
            >
                "Add"
            </button>
        </div>
    }
}
