//! Webhook server: `POST /scrape` and `GET /health`.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use legal_scout::{Scanner, ScoutError};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::{error, info};

/// Shared handler state. Each request still gets its own report.
#[derive(Clone)]
pub struct AppState {
    scanner: Arc<Scanner>,
}

impl AppState {
    pub fn new(scanner: Scanner) -> Self {
        Self {
            scanner: Arc::new(scanner),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ScrapeRequest {
    #[serde(default)]
    url: Option<String>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/scrape", post(scrape))
        .route("/health", get(health))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

async fn scrape(State(state): State<AppState>, body: Bytes) -> Response {
    // A missing or unparsable body is treated like one without a url.
    let url = serde_json::from_slice::<ScrapeRequest>(&body)
        .ok()
        .and_then(|req| req.url)
        .filter(|u| !u.trim().is_empty());

    let Some(url) = url else {
        return error_response(StatusCode::BAD_REQUEST, "No URL provided");
    };

    info!(%url, "scrape requested");

    // Run on its own task so a panic deep in a scan becomes a 500, not a dropped connection.
    let scanner = state.scanner.clone();
    let outcome = tokio::spawn(async move { scanner.scan(&url).await }).await;

    match outcome {
        Ok(Ok(report)) => Json(report).into_response(),
        Ok(Err(e @ ScoutError::InvalidUrl { .. })) => {
            error_response(StatusCode::BAD_REQUEST, &e.to_string())
        }
        Ok(Err(e)) => {
            error!("scan failed: {e}");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, &e.to_string())
        }
        Err(e) => {
            error!("scan task aborted: {e}");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "internal error")
        }
    }
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}
