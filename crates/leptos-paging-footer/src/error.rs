//! Footer Errors
//!
//! Failures the footer cannot absorb silently: missing DOM affordances,
//! browser API errors and invalid collection configuration.

use wasm_bindgen::JsValue;

/// Common result type for footer operations
pub type FooterResult<T> = Result<T, FooterError>;

/// Footer-level errors
#[derive(Debug, Clone, PartialEq)]
pub enum FooterError {
    /// A rendered affordance (selector) was not found in the region
    MissingAffordance(&'static str),
    /// A browser API call failed
    Dom(String),
    /// A collection was configured with a page size of zero
    InvalidPageSize,
}

impl std::fmt::Display for FooterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FooterError::MissingAffordance(selector) => write!(f, "Missing affordance: {}", selector),
            FooterError::Dom(msg) => write!(f, "DOM error: {}", msg),
            FooterError::InvalidPageSize => write!(f, "Invalid page size: must be at least 1"),
        }
    }
}

impl std::error::Error for FooterError {}

impl From<JsValue> for FooterError {
    fn from(value: JsValue) -> Self {
        FooterError::Dom(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}
