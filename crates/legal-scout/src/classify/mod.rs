//! Candidate classification.
//!
//! Two strategies share the [`Classifier`] contract:
//! - [`HeuristicClassifier`]: phrase matching on anchor text and href.
//! - [`ContentClassifier`]: fetches the page and asks a categorization oracle.
//!
//! A classifier either skips a candidate (no usable content) or produces a
//! [`Classification`]. Whether that classification fills a report slot is
//! decided by [`Classification::is_accepted`].

pub mod anthropic;
pub mod content;
pub mod heuristic;
pub mod oracle;

pub use anthropic::AnthropicOracle;
pub use content::ContentClassifier;
pub use heuristic::{match_category, HeuristicClassifier};
pub use oracle::{parse_reply, CategorizationOracle, OracleReply, OracleRequest, Verdict};

use crate::cartography::Candidate;
use crate::config::Strategy;
use crate::taxonomy::Category;
use async_trait::async_trait;

/// What a rendered report value is built from.
#[derive(Debug, Clone, PartialEq)]
pub enum Evidence {
    /// A link to the document, as found on the page.
    Link { text: String, url: String },
    /// The document itself, read from `url`.
    Document { url: String, text: String },
}

/// The outcome of classifying one candidate.
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    /// `None` means "unknown".
    pub category: Option<Category>,
    /// In `[0, 1]`.
    pub confidence: f64,
    pub summary: Option<String>,
    pub evidence: Evidence,
}

impl Classification {
    /// An outcome that never fills a slot.
    pub fn unknown(evidence: Evidence) -> Self {
        Self {
            category: None,
            confidence: 0.0,
            summary: None,
            evidence,
        }
    }

    /// Known category with confidence at or above `threshold`.
    pub fn is_accepted(&self, threshold: f64) -> bool {
        self.category.is_some() && self.confidence >= threshold
    }
}

/// A classification strategy.
#[async_trait]
pub trait Classifier: Send + Sync {
    fn strategy(&self) -> Strategy;

    /// Classify one candidate. `None` means the candidate was skipped and
    /// must not be counted.
    async fn classify(&self, candidate: &Candidate) -> Option<Classification>;
}
