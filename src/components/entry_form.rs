//! Entry Form Component
//!
//! Adds entries and restores the fixture.

use leptos::prelude::*;

use crate::context::use_app_context;

/// Form for appending entries, with a reset button
#[component]
pub fn EntryForm() -> impl IntoView {
    let ctx = use_app_context();
    let (new_title, set_new_title) = signal(String::new());

    let add_entry = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let title = new_title.get().trim().to_string();
        if title.is_empty() { return; }
        ctx.add_entry(title);
        set_new_title.set(String::new());
    };

    view! {
        <form class="new-item-form" on:submit=add_entry>
            <div class="new-item-row">
                <input
                    type="text"
                    placeholder="Add new entry..."
                    prop:value=move || new_title.get()
                    on:input=move |ev| set_new_title.set(event_target_value(&ev))
                />
                <button type="submit">"Add"</button>
                <button type="button" class="cancel-btn" on:click=move |_| ctx.reset_entries()>
                    "Reset"
                </button>
            </div>
        </form>
    }
}
