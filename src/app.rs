//! Paging Footer Demo App
//!
//! A paged entry list with two footers over the same collection: the
//! Leptos component and the template-rendered classic footer.

use leptos::prelude::*;
use leptos_paging_footer::PagingFooterBar;

use crate::components::{ClassicFooter, EntryForm, EntryList};
use crate::context::AppContext;
use crate::models::DemoConfig;

#[component]
pub fn App() -> impl IntoView {
    let config = DemoConfig::load().unwrap_or_else(|e| {
        log::error!("[APP] Failed to load fixture: {}", e);
        DemoConfig::default()
    });
    let ctx = AppContext::new(config);

    // Provide context to all children
    provide_context(ctx);

    view! {
        <main class="main-content">
            <h1>"Paged Entries"</h1>

            <EntryForm />

            <EntryList />

            <PagingFooterBar collection=ctx.collection() input_id="page-number-input-bar" />

            <section class="classic-footer">
                <h2>"Template footer"</h2>
                <ClassicFooter />
            </section>

            <p class="item-count">{move || format!("{} entries", ctx.total_count())}</p>
        </main>
    }
}
