//! Page fetching for scans.
//!
//! A `PageFetcher` never fails: anything that goes wrong (network error,
//! timeout, non-2xx status, non-HTML body) yields an empty string, which the
//! pipeline treats as "no content".

use super::http_client::HttpClient;
use crate::config::ScoutConfig;
use crate::error::Result;
use async_trait::async_trait;
use scraper::Html;
use std::time::Duration;
use tracing::{debug, warn};

/// Elements whose text never counts as page content.
const SKIPPED_ELEMENTS: &[&str] = &["script", "style", "nav", "header"];

/// Source of page markup for a scan.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Raw markup of `url`, or an empty string when it could not be fetched.
    async fn fetch_markup(&self, url: &str) -> String;

    /// Visible text of `url` (see [`visible_text`]), or empty.
    async fn fetch_text(&self, url: &str) -> String {
        let markup = self.fetch_markup(url).await;
        if markup.is_empty() {
            return String::new();
        }
        visible_text(&markup)
    }
}

/// Fetches pages over HTTP with a fixed timeout and no retries.
pub struct HttpFetcher {
    client: HttpClient,
    timeout: Duration,
}

impl HttpFetcher {
    pub fn new(client: HttpClient, timeout: Duration) -> Self {
        Self { client, timeout }
    }

    pub fn from_config(config: &ScoutConfig) -> Result<Self> {
        Ok(Self::new(
            HttpClient::new(&config.user_agent)?,
            config.fetch_timeout(),
        ))
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch_markup(&self, url: &str) -> String {
        let timeout_ms = self.timeout.as_millis() as u64;
        match self.client.get(url, timeout_ms).await {
            Ok(resp) if !resp.is_success() => {
                debug!(url, status = resp.status, "non-success status");
                String::new()
            }
            Ok(resp) if !resp.is_html() => {
                debug!(url, content_type = ?resp.content_type, "skipping non-html body");
                String::new()
            }
            Ok(resp) => {
                if resp.final_url != url {
                    debug!(url, final_url = %resp.final_url, "followed redirect");
                }
                resp.body
            }
            Err(e) => {
                warn!(url, "fetch failed: {e}");
                String::new()
            }
        }
    }
}

/// Text content of `html` with script, style, nav and header subtrees removed.
///
/// Each non-blank text node becomes one trimmed line.
pub fn visible_text(html: &str) -> String {
    let document = Html::parse_document(html);
    let mut lines: Vec<&str> = Vec::new();

    for node in document.tree.root().descendants() {
        let Some(text) = node.value().as_text() else {
            continue;
        };
        let hidden = node.ancestors().any(|ancestor| {
            ancestor
                .value()
                .as_element()
                .is_some_and(|el| SKIPPED_ELEMENTS.contains(&el.name()))
        });
        if hidden {
            continue;
        }
        let trimmed = text.trim();
        if !trimmed.is_empty() {
            lines.push(trimmed);
        }
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible_text_strips_chrome() {
        let html = r#"
        <html>
          <head><title>Privacy</title><style>body { color: red; }</style></head>
          <body>
            <header>Site Header</header>
            <nav><a href="/">Home</a></nav>
            <script>var tracking = true;</script>
            <h1>Privacy Policy</h1>
            <p>We collect   data.</p>
            <p>
            </p>
            <footer>Footer text</footer>
          </body>
        </html>
        "#;

        let text = visible_text(html);
        assert_eq!(text, "Privacy\nPrivacy Policy\nWe collect   data.\nFooter text");
    }

    #[test]
    fn test_visible_text_empty() {
        assert_eq!(visible_text(""), "");
        assert_eq!(visible_text("<html><body><script>x()</script></body></html>"), "");
    }

    struct StaticFetcher(&'static str);

    #[async_trait]
    impl PageFetcher for StaticFetcher {
        async fn fetch_markup(&self, _url: &str) -> String {
            self.0.to_string()
        }
    }

    #[tokio::test]
    async fn test_fetch_text_default() {
        let fetcher = StaticFetcher("<body><nav>menu</nav><p>Terms apply.</p></body>");
        assert_eq!(fetcher.fetch_text("https://example.com").await, "Terms apply.");
    }

    #[test]
    fn test_fetch_text_empty_markup() {
        let empty = StaticFetcher("");
        let text = tokio_test::block_on(empty.fetch_text("https://example.com"));
        assert_eq!(text, "");
    }
}
