//! Extract candidate links from page markup.

use super::{Candidate, CandidateOrigin};
use crate::taxonomy::LEGAL_KEYWORDS;
use scraper::{Html, Selector};
use std::collections::HashSet;
use std::sync::LazyLock;
use url::Url;

static ANCHOR_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a[href]").expect("anchor selector is valid"));

/// Which anchors become candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkFilter {
    /// Only anchors whose text or href mentions a legal keyword.
    LegalKeywords,
    /// Every followable anchor.
    All,
}

/// Collect candidate links from `html`, resolved against `base`.
///
/// Anchors with an empty, `javascript:` or bare `#` href are ignored.
/// Output keeps document order; when several anchors resolve to the same
/// URL only the first accepted one is kept.
pub fn extract_candidates(html: &str, base: &Url, filter: LinkFilter) -> Vec<Candidate> {
    let document = Html::parse_document(html);
    let mut seen: HashSet<String> = HashSet::new();
    let mut candidates = Vec::new();

    for anchor in document.select(&ANCHOR_SELECTOR) {
        let Some(href) = anchor.value().attr("href") else {
            continue;
        };
        let href = href.trim();
        if !is_followable(href) {
            continue;
        }

        let Ok(resolved) = base.join(href) else {
            continue;
        };
        let url = resolved.to_string();
        if seen.contains(&url) {
            continue;
        }

        let text = anchor
            .text()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .collect::<Vec<_>>()
            .join(" ");

        if filter == LinkFilter::LegalKeywords && !mentions_legal_keyword(&text, href) {
            continue;
        }

        seen.insert(url.clone());
        candidates.push(Candidate {
            url,
            text,
            href: href.to_string(),
            origin: CandidateOrigin::Anchor,
        });
    }

    candidates
}

fn is_followable(href: &str) -> bool {
    !(href.is_empty() || href == "#" || href.to_lowercase().starts_with("javascript:"))
}

fn mentions_legal_keyword(text: &str, href: &str) -> bool {
    let text = text.to_lowercase();
    let href = href.to_lowercase();
    LEGAL_KEYWORDS
        .iter()
        .any(|kw| text.contains(kw) || href.contains(kw))
}
