//! Footer Region
//!
//! The piece of UI a footer owns: its markup and the page-number input.

use std::cell::{Cell, RefCell};

use crate::error::FooterResult;

/// Surface a `PagingFooter` renders into
pub trait FooterRegion {
    /// Replace the region's entire content with `markup`
    fn replace_content(&self, markup: &str) -> FooterResult<()>;

    /// Current text of the page-number input
    fn page_input_value(&self) -> FooterResult<String>;

    /// Empty the page-number input
    fn clear_page_input(&self) -> FooterResult<()>;
}

/// In-memory region for headless rendering and tests
#[derive(Debug, Default)]
pub struct HeadlessRegion {
    markup: RefCell<String>,
    page_input: RefCell<String>,
    render_count: Cell<usize>,
}

impl HeadlessRegion {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulate typing into the page-number input
    pub fn type_page(&self, text: &str) {
        *self.page_input.borrow_mut() = text.to_string();
    }

    pub fn markup(&self) -> String {
        self.markup.borrow().clone()
    }

    pub fn page_input(&self) -> String {
        self.page_input.borrow().clone()
    }

    /// Number of times content was replaced
    pub fn render_count(&self) -> usize {
        self.render_count.get()
    }
}

impl FooterRegion for HeadlessRegion {
    fn replace_content(&self, markup: &str) -> FooterResult<()> {
        *self.markup.borrow_mut() = markup.to_string();
        // A full replace recreates the input empty
        self.page_input.borrow_mut().clear();
        self.render_count.set(self.render_count.get() + 1);
        Ok(())
    }

    fn page_input_value(&self) -> FooterResult<String> {
        Ok(self.page_input())
    }

    fn clear_page_input(&self) -> FooterResult<()> {
        self.page_input.borrow_mut().clear();
        Ok(())
    }
}
