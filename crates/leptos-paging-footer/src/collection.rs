//! Paginated Collection Contract
//!
//! The interface a footer consumes, plus the subscription list a
//! collection uses to notify its observers.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::event::CollectionEvent;

/// Callback invoked with the event that triggered it
pub type Listener = Rc<dyn Fn(CollectionEvent)>;

/// Handle returned by `subscribe`, used to detach the listener later
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// A paginated data source that owns the authoritative page state.
///
/// Pages are zero-based. Implementations keep
/// `current_page() <= total_pages() - 1` and `total_pages() >= 1`;
/// consumers read these values but never mutate them directly.
pub trait PaginatedCollection {
    /// Zero-based index of the page currently loaded
    fn current_page(&self) -> usize;

    /// Number of pages, at least 1
    fn total_pages(&self) -> usize;

    /// Advance one page. Bounds are the collection's concern.
    fn next_page(&self);

    /// Go back one page. Bounds are the collection's concern.
    fn previous_page(&self);

    /// Jump to a zero-based page
    fn set_page(&self, page: usize);

    /// Register `listener` for one event kind
    fn subscribe(&self, event: CollectionEvent, listener: Listener) -> SubscriptionId;

    /// Detach a listener. Returns false if the id was unknown.
    fn unsubscribe(&self, id: SubscriptionId) -> bool;
}

struct Subscription {
    id: SubscriptionId,
    event: CollectionEvent,
    listener: Listener,
}

/// Ordered subscription list held by a collection.
///
/// `emit` snapshots the matching listeners before calling them, so a
/// listener may read the collection, navigate it, or unsubscribe while
/// being notified.
#[derive(Default)]
pub struct Subscribers {
    entries: RefCell<Vec<Subscription>>,
    next_id: Cell<u64>,
}

impl Subscribers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, event: CollectionEvent, listener: Listener) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.get());
        self.next_id.set(self.next_id.get() + 1);
        self.entries.borrow_mut().push(Subscription { id, event, listener });
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut entries = self.entries.borrow_mut();
        let before = entries.len();
        entries.retain(|sub| sub.id != id);
        entries.len() != before
    }

    /// Invoke every listener registered for `event`, in registration order
    pub fn emit(&self, event: CollectionEvent) {
        let listeners: Vec<Listener> = self.entries.borrow().iter()
            .filter(|sub| sub.event == event)
            .map(|sub| Rc::clone(&sub.listener))
            .collect();
        for listener in listeners {
            listener(event);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl std::fmt::Debug for Subscribers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscribers").field("len", &self.len()).finish()
    }
}
