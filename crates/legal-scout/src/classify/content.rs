//! Classify candidates by reading the page and consulting an oracle.

use super::oracle::{parse_reply, CategorizationOracle, OracleReply, OracleRequest, Verdict};
use super::{Classification, Classifier, Evidence};
use crate::acquisition::PageFetcher;
use crate::cartography::Candidate;
use crate::config::{ScoutConfig, Strategy};
use crate::resolve::truncate_chars;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, warn};

/// Fetches each candidate's text and asks the oracle what it is.
///
/// Candidates whose text is missing or shorter than `min_content_chars` are
/// skipped. Oracle failures and unreadable replies become "unknown".
pub struct ContentClassifier {
    fetcher: Arc<dyn PageFetcher>,
    oracle: Arc<dyn CategorizationOracle>,
    min_content_chars: usize,
    oracle_text_limit: usize,
}

impl ContentClassifier {
    pub fn new(
        fetcher: Arc<dyn PageFetcher>,
        oracle: Arc<dyn CategorizationOracle>,
        config: &ScoutConfig,
    ) -> Self {
        Self {
            fetcher,
            oracle,
            min_content_chars: config.min_content_chars,
            oracle_text_limit: config.oracle_text_limit,
        }
    }

    async fn consult(&self, candidate: &Candidate, text: &str) -> Verdict {
        let (preview, _) = truncate_chars(text, self.oracle_text_limit);
        let request = OracleRequest {
            url: &candidate.url,
            text: preview,
            anchor_text: &candidate.text,
        };

        match self.oracle.classify(&request).await {
            Ok(reply) => match parse_reply(&reply) {
                OracleReply::Parsed(verdict) => verdict,
                OracleReply::Malformed => {
                    warn!(url = %candidate.url, "oracle reply held no JSON object");
                    Verdict::unknown()
                }
            },
            Err(e) => {
                warn!(url = %candidate.url, "oracle call failed: {e}");
                Verdict::unknown()
            }
        }
    }
}

#[async_trait]
impl Classifier for ContentClassifier {
    fn strategy(&self) -> Strategy {
        Strategy::Content
    }

    async fn classify(&self, candidate: &Candidate) -> Option<Classification> {
        let text = self.fetcher.fetch_text(&candidate.url).await;
        if text.chars().count() < self.min_content_chars {
            debug!(url = %candidate.url, chars = text.chars().count(), "skipping: no usable content");
            return None;
        }

        let verdict = self.consult(candidate, &text).await;
        debug!(
            url = %candidate.url,
            category = ?verdict.category,
            confidence = verdict.confidence,
            "oracle verdict"
        );

        Some(Classification {
            category: verdict.category,
            confidence: verdict.confidence,
            summary: Some(verdict.summary),
            evidence: Evidence::Document {
                url: candidate.url.clone(),
                text,
            },
        })
    }
}
