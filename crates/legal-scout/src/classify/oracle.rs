//! Categorization oracle contract and defensive reply parsing.

use crate::error::Result;
use crate::taxonomy::Category;
use async_trait::async_trait;
use serde_json::{Map, Value};

/// What the oracle is asked about one document.
#[derive(Debug, Clone, Copy)]
pub struct OracleRequest<'a> {
    pub url: &'a str,
    /// Page text, already cut to the configured prefix.
    pub text: &'a str,
    pub anchor_text: &'a str,
}

/// An external capability that reads a document and names its category.
///
/// Implementations return the raw reply text; callers parse it with
/// [`parse_reply`] and must tolerate anything.
#[async_trait]
pub trait CategorizationOracle: Send + Sync {
    async fn classify(&self, request: &OracleRequest<'_>) -> Result<String>;
}

/// The oracle's judgement, after validation.
#[derive(Debug, Clone, PartialEq)]
pub struct Verdict {
    /// `None` when the oracle said "unknown" or named something outside the taxonomy.
    pub category: Option<Category>,
    pub confidence: f64,
    pub summary: String,
}

impl Verdict {
    pub fn unknown() -> Self {
        Self {
            category: None,
            confidence: 0.0,
            summary: String::new(),
        }
    }
}

/// Result of reading a free-form oracle reply.
#[derive(Debug, Clone, PartialEq)]
pub enum OracleReply {
    Parsed(Verdict),
    /// No JSON object could be found in the reply.
    Malformed,
}

impl OracleReply {
    /// The verdict, or "unknown" for a malformed reply.
    pub fn into_verdict(self) -> Verdict {
        match self {
            OracleReply::Parsed(verdict) => verdict,
            OracleReply::Malformed => Verdict::unknown(),
        }
    }
}

/// Locate the first well-formed JSON object in `reply` and read a verdict from it.
///
/// Surrounding prose and code fences are ignored. Missing or mistyped fields
/// degrade to "unknown" / 0.0 / empty rather than failing.
pub fn parse_reply(reply: &str) -> OracleReply {
    for (start, _) in reply.char_indices().filter(|(_, c)| *c == '{') {
        let mut stream = serde_json::Deserializer::from_str(&reply[start..]).into_iter::<Value>();
        if let Some(Ok(Value::Object(object))) = stream.next() {
            return OracleReply::Parsed(verdict_from_object(&object));
        }
    }
    OracleReply::Malformed
}

fn verdict_from_object(object: &Map<String, Value>) -> Verdict {
    let category = object
        .get("category")
        .and_then(Value::as_str)
        .and_then(|id| Category::from_id(id.trim()));

    let confidence = match object.get("confidence") {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => s.trim().parse::<f64>().unwrap_or(0.0),
        _ => 0.0,
    };
    let confidence = if confidence.is_finite() {
        confidence.clamp(0.0, 1.0)
    } else {
        0.0
    };

    let summary = object
        .get("summary")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .trim()
        .to_string();

    Verdict {
        category,
        confidence,
        summary,
    }
}

/// The instruction sent to a language-model oracle.
pub fn build_prompt(request: &OracleRequest<'_>) -> String {
    let categories = Category::ALL
        .iter()
        .map(|c| format!("- {} ({})", c.id(), c.description()))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"Analyze this legal document and classify it.

URL: {url}
Link Text: {anchor}

Document Content:
{text}

Classify this document into ONE of these categories (or "unknown" if it doesn't fit):
{categories}

Return JSON only:
{{
    "category": "R0X_category_name or unknown",
    "confidence": 0.0-1.0,
    "summary": "2-3 sentence summary of what this document covers"
}}"#,
        url = request.url,
        anchor = request.anchor_text,
        text = request.text,
    )
}
