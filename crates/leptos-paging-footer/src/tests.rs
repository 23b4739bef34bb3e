//! Footer Integration Tests
//!
//! Drives `PagingFooter` through `HeadlessRegion` against a recording
//! collection and the in-memory `PagedCollection`.

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use crate::collection::{Listener, PaginatedCollection, SubscriptionId, Subscribers};
    use crate::event::CollectionEvent;
    use crate::footer::{FooterAction, PagingFooter, PagingFooterOptions};
    use crate::paged::PagedCollection;
    use crate::region::HeadlessRegion;

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Call {
        Next,
        Previous,
        SetPage(usize),
    }

    /// Collection that records navigation calls. `set_page` moves to the
    /// page and emits `reset`; next/previous only record.
    struct RecordingCollection {
        current: Cell<usize>,
        total: Cell<usize>,
        calls: RefCell<Vec<Call>>,
        subscribers: Subscribers,
    }

    impl RecordingCollection {
        fn new(current: usize, total: usize) -> Rc<Self> {
            Rc::new(Self {
                current: Cell::new(current),
                total: Cell::new(total),
                calls: RefCell::new(Vec::new()),
                subscribers: Subscribers::new(),
            })
        }

        fn calls(&self) -> Vec<Call> {
            self.calls.borrow().clone()
        }

        fn set_pages(&self, current: usize, total: usize) {
            self.current.set(current);
            self.total.set(total);
        }

        fn emit(&self, event: CollectionEvent) {
            self.subscribers.emit(event);
        }
    }

    impl PaginatedCollection for RecordingCollection {
        fn current_page(&self) -> usize {
            self.current.get()
        }

        fn total_pages(&self) -> usize {
            self.total.get()
        }

        fn next_page(&self) {
            self.calls.borrow_mut().push(Call::Next);
        }

        fn previous_page(&self) {
            self.calls.borrow_mut().push(Call::Previous);
        }

        fn set_page(&self, page: usize) {
            self.calls.borrow_mut().push(Call::SetPage(page));
            self.current.set(page);
            self.subscribers.emit(CollectionEvent::Reset);
        }

        fn subscribe(&self, event: CollectionEvent, listener: Listener) -> SubscriptionId {
            self.subscribers.subscribe(event, listener)
        }

        fn unsubscribe(&self, id: SubscriptionId) -> bool {
            self.subscribers.unsubscribe(id)
        }
    }

    type TestFooter = PagingFooter<RecordingCollection, HeadlessRegion>;

    fn setup(current: usize, total: usize) -> (Rc<RecordingCollection>, Rc<TestFooter>) {
        let collection = RecordingCollection::new(current, total);
        let footer = PagingFooter::new(
            PagingFooterOptions { collection: Rc::clone(&collection) },
            HeadlessRegion::new(),
        ).expect("Failed to create footer");
        (collection, footer)
    }

    fn previous_enabled(markup: &str) -> bool {
        markup.contains(r#"class="nav-link previous-page-link" aria-disabled="false""#)
    }

    fn next_enabled(markup: &str) -> bool {
        markup.contains(r#"class="nav-link next-page-link" aria-disabled="false""#)
    }

    #[test]
    fn test_construction_subscribes_and_renders() {
        let (collection, footer) = setup(0, 3);

        assert_eq!(collection.subscribers.len(), 3);
        assert_eq!(footer.region().render_count(), 1);
        assert!(footer.region().markup().contains(r#"<span class="total-pages">3</span>"#));
    }

    #[test]
    fn test_disabled_state_tracks_position() {
        for total in 1..5 {
            for current in 0..total {
                let (_collection, footer) = setup(current, total);
                let markup = footer.region().markup();
                assert_eq!(!previous_enabled(&markup), current == 0, "p={} T={}", current, total);
                assert_eq!(!next_enabled(&markup), current == total - 1, "p={} T={}", current, total);
            }
        }
    }

    #[test]
    fn test_render_chains() {
        let (_collection, footer) = setup(1, 3);
        let count = footer.render().and_then(|f| f.render()).unwrap().region().render_count();
        assert_eq!(count, 3);
    }

    #[test]
    fn test_change_page_jumps_to_typed_page() {
        let (collection, footer) = setup(2, 5);
        footer.region().type_page("4");

        let target = footer.change_page().unwrap();

        assert_eq!(target, Some(3));
        assert_eq!(collection.calls(), vec![Call::SetPage(3)]);
        assert_eq!(footer.region().page_input(), "");
        let markup = footer.region().markup();
        assert!(previous_enabled(&markup));
        assert!(next_enabled(&markup));
        assert!(markup.contains(r#"<span class="current-page">4</span>"#));
    }

    #[test]
    fn test_change_page_ignores_invalid_input() {
        for text in ["0", "-1", "6", "abc", "", "  "] {
            let (collection, footer) = setup(2, 5);
            footer.region().type_page(text);

            assert_eq!(footer.change_page().unwrap(), None, "input {:?}", text);
            assert!(collection.calls().is_empty(), "input {:?}", text);
            assert_eq!(footer.region().page_input(), "");
        }
    }

    #[test]
    fn test_change_page_ignores_current_page() {
        let (collection, footer) = setup(2, 5);
        footer.region().type_page("3");

        assert_eq!(footer.change_page().unwrap(), None);
        assert!(collection.calls().is_empty());
        assert_eq!(footer.region().page_input(), "");
    }

    #[test]
    fn test_change_page_accepts_bounds() {
        let (collection, footer) = setup(2, 5);
        footer.region().type_page("1");
        footer.change_page().unwrap();
        footer.region().type_page("5");
        footer.change_page().unwrap();

        assert_eq!(collection.calls(), vec![Call::SetPage(0), Call::SetPage(4)]);
    }

    #[test]
    fn test_navigation_always_delegates() {
        let (collection, footer) = setup(0, 1);

        footer.previous_page();
        footer.next_page();

        assert_eq!(collection.calls(), vec![Call::Previous, Call::Next]);
    }

    #[test]
    fn test_dispatch_routes_actions() {
        let (collection, footer) = setup(0, 4);
        footer.region().type_page("2");

        footer.dispatch(FooterAction::NextPage).unwrap();
        footer.dispatch(FooterAction::PreviousPage).unwrap();
        footer.dispatch(FooterAction::ChangePage).unwrap();

        assert_eq!(collection.calls(), vec![Call::Next, Call::Previous, Call::SetPage(1)]);
    }

    #[test]
    fn test_each_change_renders_once() {
        let (collection, footer) = setup(0, 2);

        collection.set_pages(1, 3);
        collection.emit(CollectionEvent::Add);
        assert_eq!(footer.region().render_count(), 2);
        assert!(footer.region().markup().contains(r#"<span class="current-page">2</span>"#));

        collection.set_pages(1, 2);
        collection.emit(CollectionEvent::Remove);
        assert_eq!(footer.region().render_count(), 3);
        assert!(!next_enabled(&footer.region().markup()));

        collection.set_pages(0, 1);
        collection.emit(CollectionEvent::Reset);
        assert_eq!(footer.region().render_count(), 4);
        assert!(footer.region().markup().contains(r#"<span class="total-pages">1</span>"#));
    }

    #[test]
    fn test_teardown_detaches_listeners() {
        let (collection, footer) = setup(0, 2);

        footer.teardown();
        footer.teardown();
        collection.emit(CollectionEvent::Reset);

        assert!(!footer.is_attached());
        assert!(collection.subscribers.is_empty());
        assert_eq!(footer.region().render_count(), 1);
    }

    #[test]
    fn test_drop_detaches_listeners() {
        let (collection, footer) = setup(0, 2);
        drop(footer);

        assert!(collection.subscribers.is_empty());
        collection.emit(CollectionEvent::Add);
    }

    #[test]
    fn test_paged_collection_end_to_end() {
        let collection = Rc::new(PagedCollection::new((1..=45).collect::<Vec<u32>>(), 10).unwrap());
        let footer = PagingFooter::new(
            PagingFooterOptions { collection: Rc::clone(&collection) },
            HeadlessRegion::new(),
        ).unwrap();

        footer.region().type_page("5");
        footer.change_page().unwrap();
        assert_eq!(collection.current_page(), 4);
        assert!(!next_enabled(&footer.region().markup()));

        // Bounded by the collection, not the footer
        footer.next_page();
        assert_eq!(collection.current_page(), 4);

        collection.remove_where(|n| *n > 40);
        assert_eq!(collection.current_page(), 3);
        assert!(footer.region().markup().contains(r#"<span class="total-pages">4</span>"#));

        collection.reset(vec![1, 2, 3]);
        let markup = footer.region().markup();
        assert!(!previous_enabled(&markup));
        assert!(!next_enabled(&markup));
    }
}
