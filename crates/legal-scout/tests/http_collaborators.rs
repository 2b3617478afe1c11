//! The HTTP fetcher and Anthropic oracle against a mock server.

use legal_scout::acquisition::{HttpClient, HttpFetcher, PageFetcher};
use legal_scout::classify::{AnthropicOracle, CategorizationOracle, HeuristicClassifier, OracleRequest};
use legal_scout::{Category, Classifier, OracleConfig, Scanner, ScanStatus, ScoutConfig, ScoutError};
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn fetcher(timeout: Duration) -> HttpFetcher {
    HttpFetcher::new(HttpClient::new("legal-scout-test").unwrap(), timeout)
}

fn html(body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_raw(body.to_string(), "text/html; charset=utf-8")
}

#[tokio::test]
async fn fetcher_returns_markup_on_success() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/privacy"))
        .respond_with(html("<html><body><script>x()</script><p>Privacy matters.</p></body></html>"))
        .mount(&server)
        .await;

    let fetcher = fetcher(Duration::from_secs(5));
    let url = format!("{}/privacy", server.uri());
    assert!(fetcher.fetch_markup(&url).await.contains("Privacy matters."));
    assert_eq!(fetcher.fetch_text(&url).await, "Privacy matters.");
}

#[tokio::test]
async fn fetcher_degrades_to_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(html("<p>late</p>").set_delay(Duration::from_secs(3)))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/broken"))
        .respond_with(ResponseTemplate::new(500).set_body_string("oops"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/terms.pdf"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(b"%PDF-1.7".to_vec(), "application/pdf"))
        .mount(&server)
        .await;

    let fetcher = fetcher(Duration::from_millis(300));
    let base = server.uri();
    assert_eq!(fetcher.fetch_markup(&format!("{base}/slow")).await, "");
    assert_eq!(fetcher.fetch_markup(&format!("{base}/broken")).await, "");
    assert_eq!(fetcher.fetch_markup(&format!("{base}/missing")).await, "");
    assert_eq!(fetcher.fetch_markup(&format!("{base}/terms.pdf")).await, "");
    assert_eq!(fetcher.fetch_markup("http://127.0.0.1:1/unreachable").await, "");
}

#[tokio::test]
async fn mixed_case_content_type_is_still_html() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw("<html><body><a href=\"/terms\">Terms</a></body></html>", "Text/HTML"),
        )
        .mount(&server)
        .await;

    let fetcher = fetcher(Duration::from_secs(5));
    let markup = fetcher.fetch_markup(&format!("{}/", server.uri())).await;
    assert!(markup.contains("href=\"/terms\""));

    let config = ScoutConfig::default();
    let fetcher: Arc<dyn PageFetcher> = Arc::new(HttpFetcher::from_config(&config).unwrap());
    let classifier: Arc<dyn Classifier> =
        Arc::new(HeuristicClassifier::new(fetcher.clone(), config.min_content_chars));
    let report = Scanner::new(fetcher, classifier, config)
        .scan(&server.uri())
        .await
        .unwrap();
    assert_eq!(report.meta.status, ScanStatus::Success);
    assert!(report.get(Category::TermsAndConditions).is_some());
}

#[tokio::test]
async fn client_reports_url_after_redirect() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/privacy"))
        .respond_with(
            ResponseTemplate::new(301)
                .insert_header("location", format!("{}/legal/privacy", server.uri()).as_str()),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/legal/privacy"))
        .respond_with(html("<p>Privacy</p>"))
        .mount(&server)
        .await;

    let client = HttpClient::new("legal-scout-test").unwrap();
    let resp = client.get(&format!("{}/privacy", server.uri()), 5000).await.unwrap();
    assert_eq!(resp.status, 200);
    assert_eq!(resp.final_url, format!("{}/legal/privacy", server.uri()));
    assert!(resp.body.contains("Privacy"));
}

fn oracle_for(server: &MockServer) -> AnthropicOracle {
    AnthropicOracle::from_config(&OracleConfig {
        api_key: Some("sk-test".into()),
        base_url: server.uri(),
        ..OracleConfig::default()
    })
    .unwrap()
}

fn request() -> OracleRequest<'static> {
    OracleRequest {
        url: "https://example.com/privacy",
        text: "We collect and process personal data.",
        anchor_text: "Privacy",
    }
}

#[tokio::test]
async fn anthropic_oracle_returns_reply_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .and(header("x-api-key", "sk-test"))
        .and(header("anthropic-version", "2023-06-01"))
        .and(body_string_contains("claude-sonnet-4-20250514"))
        .and(body_string_contains("We collect and process personal data."))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "msg_01",
            "type": "message",
            "role": "assistant",
            "content": [{
                "type": "text",
                "text": "{\"category\": \"R02_privacy_policy\", \"confidence\": 0.9, \"summary\": \"Data practices.\"}"
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let reply = oracle_for(&server).classify(&request()).await.unwrap();
    let verdict = legal_scout::classify::parse_reply(&reply).into_verdict();
    assert_eq!(verdict.category, Some(Category::PrivacyPolicy));
    assert_eq!(verdict.summary, "Data practices.");
}

#[tokio::test]
async fn anthropic_oracle_surfaces_api_errors() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .respond_with(ResponseTemplate::new(529).set_body_string("overloaded"))
        .mount(&server)
        .await;

    let err = oracle_for(&server).classify(&request()).await.unwrap_err();
    assert!(matches!(err, ScoutError::Oracle(ref msg) if msg.contains("overloaded")));
}

#[tokio::test]
async fn heuristic_scan_over_http() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html(
            r#"<html><body>
                <a href="/legal/terms">Terms &amp; Conditions</a>
                <a href="javascript:void(0)">Cookie preferences</a>
                <a href="/help">Help</a>
            </body></html>"#,
        ))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/cookie-policy"))
        .respond_with(html(&format!(
            "<html><body><h1>Cookie Policy</h1><p>{}</p></body></html>",
            "We use cookies to remember your preferences and measure traffic. ".repeat(3)
        )))
        .mount(&server)
        .await;

    let config = ScoutConfig::default();
    let fetcher: Arc<dyn PageFetcher> = Arc::new(fetcher(Duration::from_secs(5)));
    let classifier: Arc<dyn Classifier> =
        Arc::new(HeuristicClassifier::new(fetcher.clone(), config.min_content_chars));
    let scanner = Scanner::new(fetcher, classifier, config);

    let report = scanner.scan(&server.uri()).await.unwrap();
    let base = server.uri();

    assert_eq!(report.meta.status, ScanStatus::Success);
    assert_eq!(report.meta.links_found, 2);
    assert_eq!(
        report.get(Category::TermsAndConditions),
        Some(format!("[Terms & Conditions]({base}/legal/terms)").as_str())
    );
    assert_eq!(
        report.get(Category::CookiePolicy),
        Some(format!("[Cookie Policy]({base}/cookie-policy)").as_str())
    );
    assert_eq!(report.meta.documents_found, 2);
}

#[tokio::test]
async fn unreachable_root_reports_failed_to_fetch() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;

    let config = ScoutConfig::default();
    let fetcher: Arc<dyn PageFetcher> = Arc::new(fetcher(Duration::from_secs(5)));
    let classifier: Arc<dyn Classifier> =
        Arc::new(HeuristicClassifier::new(fetcher.clone(), config.min_content_chars));
    let report = Scanner::new(fetcher, classifier, config)
        .scan(&server.uri())
        .await
        .unwrap();

    assert_eq!(report.meta.status, ScanStatus::FailedToFetch);
    assert!(report.found_categories().next().is_none());
}
