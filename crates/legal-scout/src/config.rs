//! Scan configuration: strategy selection, fetch limits, oracle settings.

use crate::error::{Result, ScoutError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Which classifier a scan runs with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Phrase matching against anchor text and href. No oracle.
    Heuristic,
    /// Fetch each candidate and ask the categorization oracle.
    Content,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Heuristic => f.write_str("heuristic"),
            Strategy::Content => f.write_str("content"),
        }
    }
}

impl FromStr for Strategy {
    type Err = ScoutError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "heuristic" => Ok(Strategy::Heuristic),
            "content" | "oracle" => Ok(Strategy::Content),
            other => Err(ScoutError::Config(format!(
                "unknown strategy '{other}' (expected heuristic or content)"
            ))),
        }
    }
}

/// Settings for the Anthropic-backed categorization oracle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OracleConfig {
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
    pub model: String,
    pub max_tokens: u32,
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: "claude-sonnet-4-20250514".into(),
            max_tokens: 500,
            base_url: "https://api.anthropic.com".into(),
            timeout_secs: 60,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoutConfig {
    pub strategy: Strategy,
    pub fetch_timeout_secs: u64,
    pub user_agent: String,
    /// Pages with less visible text than this are treated as absent.
    pub min_content_chars: usize,
    /// Prefix of page text handed to the oracle.
    pub oracle_text_limit: usize,
    /// Length of the excerpt kept in a rendered document.
    pub excerpt_limit: usize,
    /// Minimum oracle confidence for a classification to fill a slot.
    pub acceptance_threshold: f64,
    pub oracle: OracleConfig,
}

impl Default for ScoutConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::Heuristic,
            fetch_timeout_secs: 10,
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36".into(),
            min_content_chars: 100,
            oracle_text_limit: 8000,
            excerpt_limit: 5000,
            acceptance_threshold: 0.6,
            oracle: OracleConfig::default(),
        }
    }
}

impl ScoutConfig {
    /// Defaults overlaid with environment variables.
    ///
    /// The strategy falls back to `content` when an API key is present and
    /// no explicit `LEGAL_SCOUT_STRATEGY` is given.
    pub fn from_env() -> Result<Self> {
        Self::from_env_with_strategy(None)
    }

    /// Like [`ScoutConfig::from_env`], but an explicit `strategy` replaces
    /// `LEGAL_SCOUT_STRATEGY` before the result is validated.
    pub fn from_env_with_strategy(strategy: Option<Strategy>) -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok(), strategy)
    }

    fn from_lookup(
        get: impl Fn(&str) -> Option<String>,
        strategy: Option<Strategy>,
    ) -> Result<Self> {
        let mut config = Self::default();

        config.oracle.api_key = get("ANTHROPIC_API_KEY").filter(|k| !k.trim().is_empty());
        if let Some(model) = get("LEGAL_SCOUT_MODEL") {
            config.oracle.model = model;
        }
        if let Some(base_url) = get("LEGAL_SCOUT_ORACLE_URL") {
            config.oracle.base_url = base_url;
        }
        if let Some(ua) = get("LEGAL_SCOUT_USER_AGENT") {
            config.user_agent = ua;
        }
        if let Some(secs) = get("LEGAL_SCOUT_FETCH_TIMEOUT_SECS") {
            config.fetch_timeout_secs = secs.trim().parse().map_err(|_| {
                ScoutError::Config(format!("LEGAL_SCOUT_FETCH_TIMEOUT_SECS is not a number: {secs}"))
            })?;
        }

        config.strategy = match (strategy, get("LEGAL_SCOUT_STRATEGY")) {
            (Some(strategy), _) => strategy,
            (None, Some(s)) => s.parse()?,
            (None, None) if config.oracle.api_key.is_some() => Strategy::Content,
            (None, None) => Strategy::Heuristic,
        };

        config.validate()?;
        Ok(config)
    }

    /// Reject settings a scan cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.strategy == Strategy::Content && self.oracle.api_key.is_none() {
            return Err(ScoutError::Config(
                "content strategy requires ANTHROPIC_API_KEY".into(),
            ));
        }
        if self.fetch_timeout_secs == 0 {
            return Err(ScoutError::Config("fetch timeout must be positive".into()));
        }
        if !(0.0..=1.0).contains(&self.acceptance_threshold) {
            return Err(ScoutError::Config(format!(
                "acceptance threshold {} outside [0, 1]",
                self.acceptance_threshold
            )));
        }
        Ok(())
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }
}
