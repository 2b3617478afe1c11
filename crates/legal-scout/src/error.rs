//! Error types for legal-scout.

use thiserror::Error;

/// Result type for legal-scout operations.
pub type Result<T> = std::result::Result<T, ScoutError>;

/// Errors raised while building or driving a scan.
///
/// A running scan never surfaces these to its caller: fetch and oracle
/// failures are absorbed into the report. They escape only from
/// construction (configuration, target URL) and from the collaborators
/// themselves when called directly.
#[derive(Debug, Error)]
pub enum ScoutError {
    /// Configuration error (missing API key, invalid setting)
    #[error("configuration error: {0}")]
    Config(String),

    /// A URL could not be parsed or resolved
    #[error("invalid url '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// Network-level failure (connect, timeout, body read)
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success HTTP status
    #[error("unexpected status {status} from {url}")]
    Status { url: String, status: u16 },

    /// The categorization oracle rejected the request or replied unusably
    #[error("oracle error: {0}")]
    Oracle(String),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl ScoutError {
    pub(crate) fn invalid_url(url: &str, reason: impl ToString) -> Self {
        Self::InvalidUrl {
            url: url.to_string(),
            reason: reason.to_string(),
        }
    }
}
