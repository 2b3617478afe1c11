//! The per-site result: one slot per category plus run metadata.

use crate::config::Strategy;
use crate::taxonomy::Category;
use chrono::{DateTime, Utc};
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use std::collections::BTreeMap;

/// Slot value for a category with no document.
pub const NOT_FOUND: &str = "None";

/// Error recorded when the root page cannot be read.
pub const ROOT_FETCH_ERROR: &str = "Could not fetch main page";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScanStatus {
    Pending,
    Success,
    FailedToFetch,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScanMeta {
    pub url: String,
    pub status: ScanStatus,
    pub strategy: Strategy,
    /// Candidates extracted from the root page.
    pub links_found: usize,
    /// Candidates after probing (extracted + probed).
    pub candidates: usize,
    pub documents_found: usize,
    pub scraped_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Result of scanning one site.
///
/// Serializes to a flat JSON object: the seven category ids in taxonomy
/// order, each holding a rendered value or `"None"`, then `_meta`.
#[derive(Debug, Clone)]
pub struct ScrapeReport {
    slots: BTreeMap<Category, String>,
    pub meta: ScanMeta,
}

impl ScrapeReport {
    /// An empty report for `url` in `pending` state.
    pub fn pending(url: &str, strategy: Strategy) -> Self {
        Self {
            slots: BTreeMap::new(),
            meta: ScanMeta {
                url: url.to_string(),
                status: ScanStatus::Pending,
                strategy,
                links_found: 0,
                candidates: 0,
                documents_found: 0,
                scraped_at: Utc::now(),
                error: None,
            },
        }
    }

    /// Terminal report for a root page that could not be fetched.
    pub fn failed_to_fetch(mut self) -> Self {
        self.slots.clear();
        self.meta.status = ScanStatus::FailedToFetch;
        self.meta.documents_found = 0;
        self.meta.error = Some(ROOT_FETCH_ERROR.to_string());
        self
    }

    /// Finish a successful scan with the resolved slots.
    pub fn complete(mut self, slots: BTreeMap<Category, String>) -> Self {
        self.meta.documents_found = slots.len();
        self.slots = slots;
        self.meta.status = ScanStatus::Success;
        self
    }

    /// Rendered value for `category`, if one was found.
    pub fn get(&self, category: Category) -> Option<&str> {
        self.slots.get(&category).map(String::as_str)
    }

    /// Slot value as serialized: the rendered value or [`NOT_FOUND`].
    pub fn value(&self, category: Category) -> &str {
        self.get(category).unwrap_or(NOT_FOUND)
    }

    pub fn found_categories(&self) -> impl Iterator<Item = Category> + '_ {
        self.slots.keys().copied()
    }
}

impl Serialize for ScrapeReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Category::ALL.len() + 1))?;
        for category in Category::ALL {
            map.serialize_entry(category.id(), self.value(category))?;
        }
        map.serialize_entry("_meta", &self.meta)?;
        map.end()
    }
}
