//! Thin reqwest wrapper with a per-request timeout.

use crate::error::Result;
use std::time::Duration;

/// A fully read GET response.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// URL after redirects.
    pub final_url: String,
    pub status: u16,
    pub content_type: Option<String>,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Whether the body is text we can read markup from.
    ///
    /// Media types compare case-insensitively. A missing header counts as HTML;
    /// binary bodies (PDF, images) do not.
    pub fn is_html(&self) -> bool {
        let Some(ct) = self.content_type.as_deref() else {
            return true;
        };
        let ct = ct.to_ascii_lowercase();
        ct.starts_with("text/") || ct.contains("xhtml") || ct.contains("/xml")
    }
}

/// Shared HTTP client. Cheap to clone.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::Client,
}

impl HttpClient {
    pub fn new(user_agent: &str) -> Result<Self> {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::ACCEPT,
            reqwest::header::HeaderValue::from_static(
                "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
            ),
        );

        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .default_headers(headers)
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()?;

        Ok(Self { client })
    }

    /// GET `url`, giving up after `timeout_ms`. Non-2xx statuses are returned, not raised.
    pub async fn get(&self, url: &str, timeout_ms: u64) -> Result<HttpResponse> {
        let resp = self
            .client
            .get(url)
            .timeout(Duration::from_millis(timeout_ms))
            .send()
            .await?;

        let status = resp.status().as_u16();
        let final_url = resp.url().to_string();
        let content_type = resp
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = resp.text().await?;

        Ok(HttpResponse {
            final_url,
            status,
            content_type,
            body,
        })
    }
}
