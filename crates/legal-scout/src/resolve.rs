//! First-wins resolution of classifications into report slots, and rendering.

use crate::classify::{Classification, Evidence};
use crate::taxonomy::Category;
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

static BLANK_RUNS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{3,}").unwrap());

/// Holds at most one rendered value per category.
///
/// The first accepted classification for a category wins; later ones are
/// ignored whatever their confidence.
#[derive(Debug, Clone)]
pub struct Resolver {
    slots: BTreeMap<Category, String>,
    threshold: f64,
    excerpt_limit: usize,
}

impl Resolver {
    pub fn new(threshold: f64, excerpt_limit: usize) -> Self {
        Self {
            slots: BTreeMap::new(),
            threshold,
            excerpt_limit,
        }
    }

    /// Offer a classification. Returns the category it filled, if any.
    pub fn offer(&mut self, classification: &Classification) -> Option<Category> {
        if !classification.is_accepted(self.threshold) {
            return None;
        }
        let category = classification.category?;
        if self.slots.contains_key(&category) {
            return None;
        }
        let rendered = render(classification, self.excerpt_limit);
        self.slots.insert(category, rendered);
        Some(category)
    }

    pub fn get(&self, category: Category) -> Option<&str> {
        self.slots.get(&category).map(String::as_str)
    }

    pub fn found(&self) -> usize {
        self.slots.len()
    }

    /// Whether every category already has a value.
    pub fn is_complete(&self) -> bool {
        self.slots.len() == Category::ALL.len()
    }

    pub fn into_slots(self) -> BTreeMap<Category, String> {
        self.slots
    }
}

/// Render the report value for a classification.
pub fn render(classification: &Classification, excerpt_limit: usize) -> String {
    match &classification.evidence {
        Evidence::Link { text, url } => render_link(text, url),
        Evidence::Document { url, text } => render_document(
            text,
            url,
            classification.summary.as_deref().unwrap_or_default(),
            excerpt_limit,
        ),
    }
}

/// `[text](url)`, falling back to the URL when the anchor had no text.
pub fn render_link(text: &str, url: &str) -> String {
    let label = if text.trim().is_empty() { url } else { text };
    format!("[{label}]({url})")
}

/// Markdown block with the source, the oracle summary and a bounded excerpt.
pub fn render_document(text: &str, url: &str, summary: &str, excerpt_limit: usize) -> String {
    let cleaned = BLANK_RUNS.replace_all(text, "\n\n");
    let (excerpt, truncated) = truncate_chars(&cleaned, excerpt_limit);
    let marker = if truncated { "..." } else { "" };

    format!(
        "**Source:** [{url}]({url})\n\n**Summary:** {summary}\n\n---\n\n{excerpt}\n\n{marker}\n"
    )
}

/// The first `limit` characters of `s`, and whether anything was cut.
pub(crate) fn truncate_chars(s: &str, limit: usize) -> (&str, bool) {
    match s.char_indices().nth(limit) {
        Some((byte_idx, _)) => (&s[..byte_idx], true),
        None => (s, false),
    }
}
