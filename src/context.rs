//! Application Context
//!
//! The shared paged collection plus a version signal bumped on every
//! collection change, provided via Leptos Context API.

use std::rc::Rc;

use leptos::prelude::*;
use leptos_paging_footer::{CollectionEvent, PagedCollection, PaginatedCollection};

use crate::models::{DemoConfig, Entry, DEFAULT_PAGE_SIZE};

pub type EntryCollection = PagedCollection<Entry>;

/// App-wide state provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    collection: StoredValue<Rc<EntryCollection>, LocalStorage>,
    /// Bumped on every add/remove/reset - read
    pub version: ReadSignal<u32>,
    /// Entries restored by `reset_entries`
    fixture: StoredValue<Vec<Entry>>,
    next_id: RwSignal<u32>,
}

impl AppContext {
    pub fn new(config: DemoConfig) -> Self {
        let next_id = config.next_id();
        let fixture = config.entries.clone();
        let collection = match PagedCollection::new(config.entries, config.page_size) {
            Ok(collection) => collection,
            Err(e) => {
                log::error!("[APP] {}, falling back to an empty list", e);
                PagedCollection::new(Vec::new(), DEFAULT_PAGE_SIZE).expect("default page size is non-zero")
            }
        };

        let (version, set_version) = signal(0u32);
        for event in CollectionEvent::ALL {
            collection.subscribe(event, Rc::new(move |_: CollectionEvent| {
                set_version.update(|v| *v += 1);
            }));
        }

        Self {
            collection: StoredValue::new_local(Rc::new(collection)),
            version,
            fixture: StoredValue::new(fixture),
            next_id: RwSignal::new(next_id),
        }
    }

    pub fn collection(&self) -> Rc<EntryCollection> {
        self.collection.get_value()
    }

    /// Entries on the current page (reactive)
    pub fn page_items(&self) -> Vec<Entry> {
        self.version.track();
        self.collection().page_items()
    }

    /// Total number of entries (reactive)
    pub fn total_count(&self) -> usize {
        self.version.track();
        self.collection().total_count()
    }

    pub fn add_entry(&self, title: String) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);
        log::debug!("[APP] Adding entry #{}", id);
        self.collection().add(Entry { id, title });
    }

    pub fn remove_entry(&self, id: u32) {
        log::debug!("[APP] Removing entry #{}", id);
        self.collection().remove_where(|entry| entry.id == id);
    }

    /// Restore the fixture entries and return to the first page
    pub fn reset_entries(&self) {
        let entries = self.fixture.get_value();
        let next_id = entries.iter().map(|e| e.id).max().unwrap_or(0) + 1;
        self.next_id.set(next_id);
        self.collection().reset(entries);
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
