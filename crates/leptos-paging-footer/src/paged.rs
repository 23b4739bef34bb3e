//! In-Memory Paged Collection
//!
//! Client-side paging over a `Vec`. Navigation stays within bounds and
//! every change is announced through `Subscribers`.

use std::cell::{Cell, RefCell};

use crate::collection::{Listener, PaginatedCollection, SubscriptionId, Subscribers};
use crate::error::{FooterError, FooterResult};
use crate::event::CollectionEvent;

/// Items split into fixed-size pages
#[derive(Debug)]
pub struct PagedCollection<T> {
    items: RefCell<Vec<T>>,
    page_size: usize,
    current_page: Cell<usize>,
    subscribers: Subscribers,
}

impl<T: Clone> PagedCollection<T> {
    /// Create a collection positioned on the first page
    pub fn new(items: Vec<T>, page_size: usize) -> FooterResult<Self> {
        if page_size == 0 {
            return Err(FooterError::InvalidPageSize);
        }
        Ok(Self {
            items: RefCell::new(items),
            page_size,
            current_page: Cell::new(0),
            subscribers: Subscribers::new(),
        })
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total_count(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn has_next_page(&self) -> bool {
        self.current_page.get() + 1 < self.total_pages()
    }

    pub fn has_previous_page(&self) -> bool {
        self.current_page.get() > 0
    }

    /// Items on the current page
    pub fn page_items(&self) -> Vec<T> {
        let items = self.items.borrow();
        items.iter()
            .skip(self.current_page.get() * self.page_size)
            .take(self.page_size)
            .cloned()
            .collect()
    }

    /// Append an item
    pub fn add(&self, item: T) {
        self.items.borrow_mut().push(item);
        self.subscribers.emit(CollectionEvent::Add);
    }

    /// Remove every item matching `pred`; one `Remove` per removed item
    pub fn remove_where<F>(&self, pred: F) -> usize
    where
        F: Fn(&T) -> bool,
    {
        let removed = {
            let mut items = self.items.borrow_mut();
            let before = items.len();
            items.retain(|item| !pred(item));
            before - items.len()
        };
        if removed > 0 {
            self.clamp_current_page();
            for _ in 0..removed {
                self.subscribers.emit(CollectionEvent::Remove);
            }
        }
        removed
    }

    /// Replace all items and return to the first page
    pub fn reset(&self, items: Vec<T>) {
        *self.items.borrow_mut() = items;
        self.current_page.set(0);
        self.subscribers.emit(CollectionEvent::Reset);
    }

    fn clamp_current_page(&self) {
        let last_page = self.total_pages() - 1;
        if self.current_page.get() > last_page {
            self.current_page.set(last_page);
        }
    }
}

impl<T: Clone> PaginatedCollection for PagedCollection<T> {
    fn current_page(&self) -> usize {
        self.current_page.get()
    }

    fn total_pages(&self) -> usize {
        self.total_count().div_ceil(self.page_size).max(1)
    }

    fn next_page(&self) {
        if self.has_next_page() {
            self.set_page(self.current_page.get() + 1);
        }
    }

    fn previous_page(&self) {
        if self.has_previous_page() {
            self.set_page(self.current_page.get() - 1);
        }
    }

    fn set_page(&self, page: usize) {
        if page >= self.total_pages() {
            log::warn!("[PagedCollection] Ignoring page {} of {}", page, self.total_pages());
            return;
        }
        log::debug!("[PagedCollection] Loading page {}", page);
        self.current_page.set(page);
        self.subscribers.emit(CollectionEvent::Reset);
    }

    fn subscribe(&self, event: CollectionEvent, listener: Listener) -> SubscriptionId {
        self.subscribers.subscribe(event, listener)
    }

    fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.subscribers.unsubscribe(id)
    }
}
