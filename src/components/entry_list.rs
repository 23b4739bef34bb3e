//! Entry List Component
//!
//! Entries on the current page, each with a delete button.

use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn EntryList() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <ul class="entry-list">
            <For
                each=move || ctx.page_items()
                key=|entry| entry.id
                children=move |entry| {
                    let id = entry.id;
                    view! {
                        <li class="entry">
                            <span class="entry-id">"#" {id}</span>
                            <span class="entry-title">{entry.title}</span>
                            <button
                                class="delete-btn"
                                on:click=move |ev| {
                                    ev.stop_propagation();
                                    ctx.remove_entry(id);
                                }
                            >
                                "×"
                            </button>
                        </li>
                    }
                }
            />
        </ul>
    }
}
