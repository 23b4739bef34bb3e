//! Classic Footer Component
//!
//! Hosts a template-rendered `PagingFooter` inside a plain element. The
//! footer owns the element's content; Leptos only provides the host.
//! Disposing the component drops the mounted footer, which detaches its
//! listeners and collection subscriptions.

use leptos::html;
use leptos::prelude::*;
use leptos_paging_footer::{mount, MountedFooter};

use crate::context::{use_app_context, EntryCollection};

#[component]
pub fn ClassicFooter() -> impl IntoView {
    let ctx = use_app_context();
    let host = NodeRef::<html::Div>::new();
    let mounted = StoredValue::new_local(None::<MountedFooter<EntryCollection>>);

    Effect::new(move |_| {
        let Some(el) = host.get() else { return };
        if mounted.with_value(Option::is_some) { return; }
        match mount(el.into(), ctx.collection()) {
            Ok(footer) => {
                log::debug!("[ClassicFooter] Mounted");
                mounted.set_value(Some(footer));
            }
            Err(e) => log::error!("[ClassicFooter] Mount failed: {}", e),
        }
    });

    view! {
        <div class="paging-footer" node_ref=host></div>
    }
}
