//! Candidate discovery: anchors on the root page plus conventional paths.

pub mod link_extractor;
pub mod path_prober;

pub use link_extractor::{extract_candidates, LinkFilter};
pub use path_prober::probe_paths;

use serde::Serialize;

/// Where a candidate came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CandidateOrigin {
    /// An anchor on the root page.
    Anchor,
    /// A conventional path synthesized by the prober.
    Probe,
}

/// A URL eligible for classification. Unique by `url` within a scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Candidate {
    /// Absolute URL.
    pub url: String,
    /// Visible anchor text, or a title derived from the probed path.
    pub text: String,
    /// The href as written in the markup (or the probed path).
    pub href: String,
    pub origin: CandidateOrigin,
}
