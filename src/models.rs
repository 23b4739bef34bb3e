//! Demo Models
//!
//! Entries shown in the paged list and the fixture they are loaded from.

use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_SIZE: usize = 5;

const FIXTURE: &str = include_str!("../assets/entries.json");

/// A listed entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub id: u32,
    pub title: String,
}

/// Demo configuration: paging and initial entries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemoConfig {
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    #[serde(default)]
    pub entries: Vec<Entry>,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            entries: Vec::new(),
        }
    }
}

impl DemoConfig {
    /// Load the bundled fixture
    pub fn load() -> Result<Self, String> {
        Self::parse(FIXTURE)
    }

    pub fn parse(json: &str) -> Result<Self, String> {
        let config: DemoConfig = serde_json::from_str(json).map_err(|e| e.to_string())?;
        if config.page_size == 0 {
            return Err("page_size must be at least 1".to_string());
        }
        Ok(config)
    }

    /// Id one past the largest entry id
    pub fn next_id(&self) -> u32 {
        self.entries.iter().map(|e| e.id).max().unwrap_or(0) + 1
    }
}
