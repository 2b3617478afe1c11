//! One scan of one site: root page → candidates → classification → report.

use crate::acquisition::{HttpFetcher, PageFetcher};
use crate::cartography::{extract_candidates, probe_paths, LinkFilter};
use crate::classify::{AnthropicOracle, Classifier, ContentClassifier, HeuristicClassifier};
use crate::config::{ScoutConfig, Strategy};
use crate::error::{Result, ScoutError};
use crate::report::ScrapeReport;
use crate::resolve::Resolver;
use std::sync::Arc;
use tracing::{debug, info, info_span, warn, Instrument};
use url::Url;

/// Runs scans sequentially: one fetch or oracle call at a time.
///
/// A `Scanner` holds no per-scan state, so one instance can serve any
/// number of concurrent scans.
pub struct Scanner {
    fetcher: Arc<dyn PageFetcher>,
    classifier: Arc<dyn Classifier>,
    config: ScoutConfig,
}

impl Scanner {
    pub fn new(
        fetcher: Arc<dyn PageFetcher>,
        classifier: Arc<dyn Classifier>,
        config: ScoutConfig,
    ) -> Self {
        Self {
            fetcher,
            classifier,
            config,
        }
    }

    /// Build an HTTP-backed scanner for the configured strategy.
    pub fn from_config(config: ScoutConfig) -> Result<Self> {
        config.validate()?;
        let fetcher: Arc<dyn PageFetcher> = Arc::new(HttpFetcher::from_config(&config)?);

        let classifier: Arc<dyn Classifier> = match config.strategy {
            Strategy::Heuristic => Arc::new(HeuristicClassifier::new(
                fetcher.clone(),
                config.min_content_chars,
            )),
            Strategy::Content => {
                let oracle = Arc::new(AnthropicOracle::from_config(&config.oracle)?);
                Arc::new(ContentClassifier::new(fetcher.clone(), oracle, &config))
            }
        };

        Ok(Self::new(fetcher, classifier, config))
    }

    pub fn strategy(&self) -> Strategy {
        self.classifier.strategy()
    }

    /// Scan `target` (scheme optional).
    ///
    /// Only an unusable target URL is an error. Everything that goes wrong
    /// afterwards is reported inside the returned [`ScrapeReport`].
    pub async fn scan(&self, target: &str) -> Result<ScrapeReport> {
        let url = normalize_target(target)?;
        let span = info_span!("scan", url = %url, run_id = %uuid::Uuid::new_v4());
        Ok(self.scan_url(&url).instrument(span).await)
    }

    async fn scan_url(&self, url: &Url) -> ScrapeReport {
        let strategy = self.strategy();
        let report = ScrapeReport::pending(url.as_str(), strategy);
        info!(%strategy, "scan started");

        let html = self.fetcher.fetch_markup(url.as_str()).await;
        if html.is_empty() {
            warn!("could not fetch root page");
            return report.failed_to_fetch();
        }

        let filter = match strategy {
            Strategy::Heuristic => LinkFilter::All,
            Strategy::Content => LinkFilter::LegalKeywords,
        };
        let mut candidates = extract_candidates(&html, url, filter);
        let links_found = candidates.len();
        let probes = probe_paths(url, &candidates);
        candidates.extend(probes);
        debug!(links_found, candidates = candidates.len(), "candidates collected");

        let mut resolver = Resolver::new(self.config.acceptance_threshold, self.config.excerpt_limit);
        for candidate in &candidates {
            // Filled slots are never replaced, so nothing left can change the result.
            if resolver.is_complete() {
                debug!("all categories found");
                break;
            }
            let Some(classification) = self.classifier.classify(candidate).await else {
                continue;
            };
            if let Some(category) = resolver.offer(&classification) {
                info!(%category, url = %candidate.url, "document found");
            }
        }

        let mut report = report.complete(resolver.into_slots());
        report.meta.links_found = links_found;
        report.meta.candidates = candidates.len();
        info!(documents_found = report.meta.documents_found, "scan finished");
        report
    }
}

/// Parse a user-supplied target, defaulting the scheme to `https`.
pub fn normalize_target(target: &str) -> Result<Url> {
    let trimmed = target.trim();
    if trimmed.is_empty() {
        return Err(ScoutError::invalid_url(target, "empty url"));
    }

    let lower = trimmed.to_lowercase();
    let with_scheme = if lower.starts_with("http://") || lower.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    };

    let url = Url::parse(&with_scheme).map_err(|e| ScoutError::invalid_url(target, e))?;
    if url.host_str().is_none() {
        return Err(ScoutError::invalid_url(target, "missing host"));
    }
    Ok(url)
}
