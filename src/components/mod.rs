//! UI Components
//!
//! Demo components around the paged collection.

mod classic_footer;
mod entry_form;
mod entry_list;

pub use classic_footer::ClassicFooter;
pub use entry_form::EntryForm;
pub use entry_list::EntryList;
