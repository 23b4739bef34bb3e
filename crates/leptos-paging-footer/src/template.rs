//! Footer Template
//!
//! Markup for the footer region. Produces the three affordances the
//! footer addresses by class: previous link, next link, page-number input.

use crate::state::FooterState;

pub const PREVIOUS_PAGE_CLASS: &str = "previous-page-link";
pub const NEXT_PAGE_CLASS: &str = "next-page-link";
pub const PAGE_INPUT_CLASS: &str = "page-number-input";
pub const PAGE_INPUT_ID: &str = "page-number-input";
pub const DISABLED_CLASS: &str = "is-disabled";

/// Class list for a nav link, with the disabled marker when needed
pub fn link_class(base: &str, disabled: bool) -> String {
    if disabled {
        format!("nav-link {} {}", base, DISABLED_CLASS)
    } else {
        format!("nav-link {}", base)
    }
}

/// Render the full footer markup for `state`
pub fn render_markup(state: &FooterState) -> String {
    format!(
        r#"<nav class="pagination pagination-full bottom" aria-label="Pagination">
    <div class="nav-item previous"><button class="{previous_class}" aria-disabled="{previous_disabled}"><span class="nav-label">Previous</span></button></div>
    <div class="nav-item page">
        <div class="pagination-form">
            <label class="page-number-label" for="{input_id}">Page number</label>
            <input id="{input_id}" class="{input_class}" name="page-number" type="text" size="4" autocomplete="off" />
        </div>
        <span class="current-page">{display_page}</span>
        <span class="sr"> out of </span>
        <span class="page-divider" aria-hidden="true">/</span>
        <span class="total-pages">{total_pages}</span>
    </div>
    <div class="nav-item next"><button class="{next_class}" aria-disabled="{next_disabled}"><span class="nav-label">Next</span></button></div>
</nav>"#,
        previous_class = link_class(PREVIOUS_PAGE_CLASS, state.previous_disabled),
        previous_disabled = state.previous_disabled,
        next_class = link_class(NEXT_PAGE_CLASS, state.next_disabled),
        next_disabled = state.next_disabled,
        input_id = PAGE_INPUT_ID,
        input_class = PAGE_INPUT_CLASS,
        display_page = state.display_page(),
        total_pages = state.total_pages,
    )
}
