//! Paging Footer Controller
//!
//! Binds one collection to one region. Re-renders the region on every
//! collection change and turns footer interactions into collection
//! navigation calls.

use std::cell::RefCell;
use std::rc::Rc;

use crate::collection::{PaginatedCollection, SubscriptionId};
use crate::error::FooterResult;
use crate::event::CollectionEvent;
use crate::region::FooterRegion;
use crate::state::{resolve_page_request, FooterState};
use crate::template::{render_markup, NEXT_PAGE_CLASS, PAGE_INPUT_CLASS, PREVIOUS_PAGE_CLASS};

/// User interaction the footer responds to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FooterAction {
    NextPage,
    PreviousPage,
    ChangePage,
}

/// DOM event type and affordance class for each action
pub const EVENTS: &[(&str, &str, FooterAction)] = &[
    ("click", NEXT_PAGE_CLASS, FooterAction::NextPage),
    ("click", PREVIOUS_PAGE_CLASS, FooterAction::PreviousPage),
    ("change", PAGE_INPUT_CLASS, FooterAction::ChangePage),
];

impl FooterAction {
    /// Find the action bound to `event_type` on an element carrying `class`
    pub fn lookup(event_type: &str, class: &str) -> Option<Self> {
        EVENTS.iter()
            .find(|(ty, cls, _)| *ty == event_type && *cls == class)
            .map(|(_, _, action)| *action)
    }
}

/// Construction options
pub struct PagingFooterOptions<C> {
    pub collection: Rc<C>,
}

/// Pagination footer bound to a collection.
///
/// Holds no page state of its own; every render is a projection of the
/// collection's `current_page` and `total_pages`.
pub struct PagingFooter<C, R>
where
    C: PaginatedCollection + 'static,
    R: FooterRegion + 'static,
{
    collection: Rc<C>,
    region: R,
    subscriptions: RefCell<Vec<SubscriptionId>>,
}

impl<C, R> PagingFooter<C, R>
where
    C: PaginatedCollection + 'static,
    R: FooterRegion + 'static,
{
    /// Subscribe to `add`, `remove` and `reset`, then render once
    pub fn new(options: PagingFooterOptions<C>, region: R) -> FooterResult<Rc<Self>> {
        let footer = Rc::new(Self {
            collection: options.collection,
            region,
            subscriptions: RefCell::new(Vec::new()),
        });

        for event in CollectionEvent::ALL {
            let weak = Rc::downgrade(&footer);
            let id = footer.collection.subscribe(event, Rc::new(move |event: CollectionEvent| {
                if let Some(footer) = weak.upgrade() {
                    log::debug!("[PagingFooter] Collection {}, re-rendering", event);
                    if let Err(e) = footer.render() {
                        log::error!("[PagingFooter] Render after {} failed: {}", event, e);
                    }
                }
            }));
            footer.subscriptions.borrow_mut().push(id);
        }

        footer.render()?;
        Ok(footer)
    }

    pub fn collection(&self) -> &Rc<C> {
        &self.collection
    }

    pub fn region(&self) -> &R {
        &self.region
    }

    /// Redraw the whole region from the collection's current state
    pub fn render(&self) -> FooterResult<&Self> {
        let state = FooterState::from_collection(self.collection.as_ref());
        self.region.replace_content(&render_markup(&state))?;
        Ok(self)
    }

    /// Navigate to the page typed into the input, then clear it.
    ///
    /// Returns the zero-based page requested, or `None` when the input
    /// was ignored.
    pub fn change_page(&self) -> FooterResult<Option<usize>> {
        let text = self.region.page_input_value()?;
        let target = resolve_page_request(
            &text,
            self.collection.current_page(),
            self.collection.total_pages(),
        );
        match target {
            Some(page) => {
                log::debug!("[PagingFooter] Jumping to page {}", page + 1);
                self.collection.set_page(page);
            }
            None => log::debug!("[PagingFooter] Ignoring page input {:?}", text),
        }
        self.region.clear_page_input()?;
        Ok(target)
    }

    pub fn next_page(&self) {
        self.collection.next_page();
    }

    pub fn previous_page(&self) {
        self.collection.previous_page();
    }

    /// Route a UI interaction to its handler
    pub fn dispatch(&self, action: FooterAction) -> FooterResult<()> {
        match action {
            FooterAction::NextPage => self.next_page(),
            FooterAction::PreviousPage => self.previous_page(),
            FooterAction::ChangePage => {
                self.change_page()?;
            }
        }
        Ok(())
    }

    /// Detach every collection listener. Safe to call more than once.
    pub fn teardown(&self) {
        for id in self.subscriptions.borrow_mut().drain(..) {
            self.collection.unsubscribe(id);
        }
    }

    pub fn is_attached(&self) -> bool {
        !self.subscriptions.borrow().is_empty()
    }
}

impl<C, R> Drop for PagingFooter<C, R>
where
    C: PaginatedCollection + 'static,
    R: FooterRegion + 'static,
{
    fn drop(&mut self) {
        self.teardown();
    }
}
