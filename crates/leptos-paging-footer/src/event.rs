//! Collection Change Events
//!
//! Membership notifications a paginated collection emits.

use serde::{Deserialize, Serialize};

/// Kind of change a collection reports to its subscribers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollectionEvent {
    /// An item was added
    Add,
    /// An item was removed
    Remove,
    /// The contents were replaced wholesale (new page, refetch)
    Reset,
}

impl CollectionEvent {
    /// Every event kind, in the order a footer subscribes to them
    pub const ALL: [CollectionEvent; 3] = [CollectionEvent::Add, CollectionEvent::Remove, CollectionEvent::Reset];

    pub fn as_str(&self) -> &'static str {
        match self {
            CollectionEvent::Add => "add",
            CollectionEvent::Remove => "remove",
            CollectionEvent::Reset => "reset",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "add" => Some(CollectionEvent::Add),
            "remove" => Some(CollectionEvent::Remove),
            "reset" => Some(CollectionEvent::Reset),
            _ => None,
        }
    }
}

impl std::fmt::Display for CollectionEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
