//! Footer State
//!
//! Pure projection of collection page state into what the footer shows,
//! and resolution of what the user typed into the page-number input.

use serde::Serialize;

use crate::collection::PaginatedCollection;

/// Everything a render needs. Serializes to the template bindings
/// `current_page` and `total_pages` plus the two disabled flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FooterState {
    /// Zero-based current page
    pub current_page: usize,
    pub total_pages: usize,
    pub previous_disabled: bool,
    pub next_disabled: bool,
}

impl FooterState {
    pub fn new(current_page: usize, total_pages: usize) -> Self {
        let last_page = total_pages.saturating_sub(1);
        Self {
            current_page,
            total_pages,
            previous_disabled: current_page == 0,
            next_disabled: current_page == last_page,
        }
    }

    pub fn from_collection<C: PaginatedCollection + ?Sized>(collection: &C) -> Self {
        Self::new(collection.current_page(), collection.total_pages())
    }

    /// One-based page number shown to the user
    pub fn display_page(&self) -> usize {
        self.current_page + 1
    }
}

/// Parse a base-10 integer the lenient way form fields are usually read:
/// leading whitespace and an optional sign are accepted, parsing stops at
/// the first non-digit, and text without leading digits yields `None`.
pub fn parse_page_number(text: &str) -> Option<i64> {
    let trimmed = text.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }
    // Too many digits to fit is still "a number", just an absurdly large one
    let magnitude = rest[..digits_len].parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}

/// Resolve page-number input to a zero-based page to load.
///
/// `None` means "do not navigate": the text is not a number, is out of
/// `1..=total_pages`, or names the page already shown.
pub fn resolve_page_request(text: &str, current_page: usize, total_pages: usize) -> Option<usize> {
    let requested = parse_page_number(text)?;
    if requested <= 0 || requested > total_pages as i64 {
        return None;
    }
    let requested = requested as usize;
    if requested == current_page + 1 {
        return None;
    }
    Some(requested - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_flags() {
        for total in 1..6 {
            for current in 0..total {
                let state = FooterState::new(current, total);
                assert_eq!(state.previous_disabled, current == 0);
                assert_eq!(state.next_disabled, current == total - 1);
            }
        }
    }

    #[test]
    fn test_single_page_disables_both() {
        let state = FooterState::new(0, 1);
        assert!(state.previous_disabled);
        assert!(state.next_disabled);
    }

    #[test]
    fn test_template_bindings() {
        let value = serde_json::to_value(FooterState::new(2, 5)).unwrap();
        assert_eq!(value["current_page"], 2);
        assert_eq!(value["total_pages"], 5);
    }

    #[test]
    fn test_parse_page_number() {
        assert_eq!(parse_page_number("4"), Some(4));
        assert_eq!(parse_page_number("  12"), Some(12));
        assert_eq!(parse_page_number("+3"), Some(3));
        assert_eq!(parse_page_number("-2"), Some(-2));
        assert_eq!(parse_page_number("7abc"), Some(7));
        assert_eq!(parse_page_number("3.9"), Some(3));
        assert_eq!(parse_page_number("abc"), None);
        assert_eq!(parse_page_number(""), None);
        assert_eq!(parse_page_number("-"), None);
        assert_eq!(parse_page_number(" x1"), None);
    }

    #[test]
    fn test_resolve_page_request() {
        // five pages, third page shown
        assert_eq!(resolve_page_request("4", 2, 5), Some(3));
        assert_eq!(resolve_page_request("1", 2, 5), Some(0));
        assert_eq!(resolve_page_request("5", 2, 5), Some(4));
        assert_eq!(resolve_page_request("3", 2, 5), None);
        assert_eq!(resolve_page_request("6", 2, 5), None);
        assert_eq!(resolve_page_request("0", 2, 5), None);
        assert_eq!(resolve_page_request("-1", 2, 5), None);
        assert_eq!(resolve_page_request("two", 2, 5), None);
        assert_eq!(resolve_page_request("99999999999999999999999", 2, 5), None);
    }
}
