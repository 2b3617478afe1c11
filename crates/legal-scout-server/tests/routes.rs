//! Router tests driven through `tower::ServiceExt::oneshot`.

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use legal_scout::acquisition::PageFetcher;
use legal_scout::classify::HeuristicClassifier;
use legal_scout::{Classifier, Scanner, ScoutConfig};
use legal_scout_server::server::{router, AppState};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tower::ServiceExt;

struct InMemorySite(HashMap<String, String>);

#[async_trait]
impl PageFetcher for InMemorySite {
    async fn fetch_markup(&self, url: &str) -> String {
        self.0.get(url).cloned().unwrap_or_default()
    }
}

fn app() -> axum::Router {
    let mut pages = HashMap::new();
    pages.insert(
        "https://example.com/".to_string(),
        r#"<html><body><a href="/terms">Terms of Service</a></body></html>"#.to_string(),
    );
    let site: Arc<dyn PageFetcher> = Arc::new(InMemorySite(pages));
    let config = ScoutConfig::default();
    let classifier: Arc<dyn Classifier> = Arc::new(HeuristicClassifier::new(
        site.clone(),
        config.min_content_chars,
    ));
    router(AppState::new(Scanner::new(site, classifier, config)))
}

async fn send(request: Request<Body>) -> (StatusCode, Value) {
    let response = app().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn post_scrape(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/scrape")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn health_reports_ok() {
    let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
    let (status, body) = send(request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!({ "status": "ok" }));
}

#[tokio::test]
async fn scrape_without_body_is_rejected() {
    let (status, body) = send(post_scrape("")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "No URL provided");
}

#[tokio::test]
async fn scrape_with_empty_url_is_rejected() {
    let (status, body) = send(post_scrape(r#"{"url": ""}"#)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "No URL provided");

    let (status, _) = send(post_scrape(r#"{"site": "example.com"}"#)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn scrape_with_unusable_url_is_rejected() {
    let (status, body) = send(post_scrape(r#"{"url": "https://"}"#)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn scrape_returns_the_report() {
    let (status, body) = send(post_scrape(r#"{"url": "example.com"}"#)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["R01_terms_and_conditions"],
        "[Terms of Service](https://example.com/terms)"
    );
    assert_eq!(body["R02_privacy_policy"], "None");
    assert_eq!(body["_meta"]["status"], "success");
    assert_eq!(body["_meta"]["documents_found"], 1);
}

#[tokio::test]
async fn unreachable_site_is_still_a_200() {
    let (status, body) = send(post_scrape(r#"{"url": "https://nowhere.test"}"#)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["_meta"]["status"], "failed_to_fetch");
    assert_eq!(body["_meta"]["error"], "Could not fetch main page");
}

#[tokio::test]
async fn cors_headers_are_present() {
    let request = Request::builder()
        .method("OPTIONS")
        .uri("/scrape")
        .header("origin", "https://dashboard.example")
        .header("access-control-request-method", "POST")
        .body(Body::empty())
        .unwrap();
    let response = app().oneshot(request).await.unwrap();
    assert!(response
        .headers()
        .contains_key("access-control-allow-origin"));
}
