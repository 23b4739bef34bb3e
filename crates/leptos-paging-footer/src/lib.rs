//! Leptos Paging Footer
//!
//! A pagination footer bound to a paginated collection: previous/next
//! controls plus a page-number input.
//!
//! - `PagingFooter` renders template markup into a `FooterRegion`
//!   (`DomRegion` in the browser, `HeadlessRegion` elsewhere).
//! - `PagingFooterBar` is the same footer as a Leptos component.
//!
//! Both re-render on every `add`, `remove` and `reset` the collection emits.

mod collection;
mod component;
mod dom;
mod error;
mod event;
mod footer;
mod paged;
mod region;
mod state;
mod template;

#[cfg(test)]
mod tests;

pub use collection::{Listener, PaginatedCollection, SubscriptionId, Subscribers};
pub use component::PagingFooterBar;
pub use dom::{mount, Affordances, DomEvents, DomRegion, MountedFooter};
pub use error::{FooterError, FooterResult};
pub use event::CollectionEvent;
pub use footer::{FooterAction, PagingFooter, PagingFooterOptions, EVENTS};
pub use paged::PagedCollection;
pub use region::{FooterRegion, HeadlessRegion};
pub use state::{parse_page_number, resolve_page_request, FooterState};
pub use template::{render_markup, DISABLED_CLASS, NEXT_PAGE_CLASS, PAGE_INPUT_CLASS, PAGE_INPUT_ID, PREVIOUS_PAGE_CLASS};
