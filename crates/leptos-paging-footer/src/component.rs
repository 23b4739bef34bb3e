//! Paging Footer Component
//!
//! Leptos rendering of the footer. Same affordances and rules as
//! `PagingFooter`, with the collection's notifications feeding a signal
//! instead of a region.

use std::rc::Rc;

use leptos::html;
use leptos::prelude::*;

use crate::collection::{PaginatedCollection, SubscriptionId};
use crate::event::CollectionEvent;
use crate::state::{resolve_page_request, FooterState};
use crate::template::{link_class, NEXT_PAGE_CLASS, PAGE_INPUT_CLASS, PAGE_INPUT_ID, PREVIOUS_PAGE_CLASS};

/// Pagination footer bound to a collection
///
/// # Arguments
/// * `collection` - Collection to observe and navigate
/// * `input_id` - Id for the page-number input (defaults to `page-number-input`)
#[component]
pub fn PagingFooterBar<C>(
    collection: Rc<C>,
    #[prop(into, default = PAGE_INPUT_ID.to_string())] input_id: String,
) -> impl IntoView
where
    C: PaginatedCollection + 'static,
{
    let collection = StoredValue::new_local(collection);
    let version = RwSignal::new(0u32);
    let input_ref = NodeRef::<html::Input>::new();

    let ids: Vec<SubscriptionId> = CollectionEvent::ALL.iter()
        .map(|&event| {
            collection.get_value().subscribe(event, Rc::new(move |event: CollectionEvent| {
                log::debug!("[PagingFooterBar] Collection {}, re-rendering", event);
                let _ = version.try_update(|v| *v += 1);
            }))
        })
        .collect();

    on_cleanup(move || {
        if let Some(collection) = collection.try_get_value() {
            for id in &ids {
                collection.unsubscribe(*id);
            }
        }
    });

    let state = Memo::new(move |_| {
        version.track();
        FooterState::from_collection(collection.get_value().as_ref())
    });

    let on_previous = move |_: web_sys::MouseEvent| collection.get_value().previous_page();
    let on_next = move |_: web_sys::MouseEvent| collection.get_value().next_page();

    let on_change = move |_: web_sys::Event| {
        let Some(input) = input_ref.get() else {
            log::error!("[PagingFooterBar] Page number input is not mounted");
            return;
        };
        let collection = collection.get_value();
        let text = input.value();
        match resolve_page_request(&text, collection.current_page(), collection.total_pages()) {
            Some(page) => collection.set_page(page),
            None => log::debug!("[PagingFooterBar] Ignoring page input {:?}", text),
        }
        input.set_value("");
    };

    view! {
        <nav class="pagination pagination-full bottom" aria-label="Pagination">
            <div class="nav-item previous">
                <button
                    class=move || link_class(PREVIOUS_PAGE_CLASS, state.get().previous_disabled)
                    aria-disabled=move || state.get().previous_disabled.to_string()
                    on:click=on_previous
                >
                    <span class="nav-label">"Previous"</span>
                </button>
            </div>
            <div class="nav-item page">
                <div class="pagination-form">
                    <label class="page-number-label" for=input_id.clone()>"Page number"</label>
                    <input
                        node_ref=input_ref
                        id=input_id
                        class=PAGE_INPUT_CLASS
                        name="page-number"
                        type="text"
                        size="4"
                        autocomplete="off"
                        on:change=on_change
                    />
                </div>
                <span class="current-page">{move || state.get().display_page()}</span>
                <span class="sr">" out of "</span>
                <span class="page-divider" aria-hidden="true">"/"</span>
                <span class="total-pages">{move || state.get().total_pages}</span>
            </div>
            <div class="nav-item next">
                <button
                    class=move || link_class(NEXT_PAGE_CLASS, state.get().next_disabled)
                    aria-disabled=move || state.get().next_disabled.to_string()
                    on:click=on_next
                >
                    <span class="nav-label">"Next"</span>
                </button>
            </div>
        </nav>
    }
}
