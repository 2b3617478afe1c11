//! Classify candidates by phrase patterns in their anchor text and href.

use super::{Classification, Classifier, Evidence};
use crate::acquisition::PageFetcher;
use crate::cartography::{Candidate, CandidateOrigin};
use crate::config::Strategy;
use crate::taxonomy::Category;
use async_trait::async_trait;
use std::sync::{Arc, LazyLock};
use tracing::debug;

/// Every pattern in three spellings: `terms of use`, `terms-of-use`, `termsofuse`.
static PATTERN_FORMS: LazyLock<Vec<(Category, Vec<String>)>> = LazyLock::new(|| {
    Category::ALL
        .iter()
        .map(|&category| {
            let forms = category
                .patterns()
                .iter()
                .flat_map(|p| [p.to_string(), p.replace(' ', "-"), p.replace(' ', "")])
                .collect();
            (category, forms)
        })
        .collect()
});

/// First category, in taxonomy order, with a pattern in `text` or `href`.
pub fn match_category(text: &str, href: &str) -> Option<Category> {
    let text = text.to_lowercase();
    let href = href.to_lowercase();
    PATTERN_FORMS
        .iter()
        .find(|(_, forms)| {
            forms
                .iter()
                .any(|form| text.contains(form.as_str()) || href.contains(form.as_str()))
        })
        .map(|(category, _)| *category)
}

/// Cheap classifier: one pass over the patterns per candidate, confidence 1.0.
///
/// Anchors are matched as found. Probed paths have no anchor behind them, so
/// they are matched only after a fetch shows the page exists.
pub struct HeuristicClassifier {
    fetcher: Arc<dyn PageFetcher>,
    min_content_chars: usize,
}

impl HeuristicClassifier {
    pub fn new(fetcher: Arc<dyn PageFetcher>, min_content_chars: usize) -> Self {
        Self {
            fetcher,
            min_content_chars,
        }
    }
}

#[async_trait]
impl Classifier for HeuristicClassifier {
    fn strategy(&self) -> Strategy {
        Strategy::Heuristic
    }

    async fn classify(&self, candidate: &Candidate) -> Option<Classification> {
        if candidate.origin == CandidateOrigin::Probe {
            let text = self.fetcher.fetch_text(&candidate.url).await;
            if text.chars().count() < self.min_content_chars {
                debug!(url = %candidate.url, "probed path has no content");
                return None;
            }
        }

        let evidence = Evidence::Link {
            text: candidate.text.clone(),
            url: candidate.url.clone(),
        };
        let Some(category) = match_category(&candidate.text, &candidate.href) else {
            return Some(Classification::unknown(evidence));
        };

        Some(Classification {
            category: Some(category),
            confidence: 1.0,
            summary: None,
            evidence,
        })
    }
}
