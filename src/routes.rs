use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;

use crate::config::Config;
use crate::models::AnalyzeRequest;
use crate::relay::{self, RelayError};
use crate::scrape::{self, ScrapeError};
use crate::validate;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub http: reqwest::Client,
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/main.js", get(main_js))
        .route("/styles.css", get(styles_css))
        .route("/health", get(health))
        .route("/analyze-url", post(analyze_url))
        .with_state(state)
}

// ── Static client assets ─────────────────────────────────────────────────────

async fn index() -> Html<&'static str> {
    Html(include_str!("../static/index.html"))
}

async fn main_js() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/javascript; charset=utf-8")],
        include_str!("../static/main.js"),
    )
}

async fn styles_css() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/css; charset=utf-8")],
        include_str!("../static/styles.css"),
    )
}

async fn health() -> impl IntoResponse {
    Json(json!({"status": "ok"}))
}

// ── Error translation ────────────────────────────────────────────────────────

/// Single translation point from internal failures to HTTP status plus an
/// `{"error": ...}` body.
#[derive(Debug)]
pub enum ApiError {
    MissingUrl,
    InvalidUrl,
    Scrape(ScrapeError),
    Analyze(RelayError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::MissingUrl => (StatusCode::BAD_REQUEST, "URL is required"),
            ApiError::InvalidUrl => (StatusCode::BAD_REQUEST, "Please provide a valid URL"),
            ApiError::Scrape(ScrapeError::NoContent) => (
                StatusCode::BAD_REQUEST,
                "No text content found at the provided URL",
            ),
            ApiError::Scrape(_) => (
                StatusCode::BAD_REQUEST,
                "Failed to scrape text from the URL",
            ),
            ApiError::Analyze(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to analyze the URL",
            ),
        };
        (status, Json(json!({"error": message}))).into_response()
    }
}

// ── Analysis endpoint ────────────────────────────────────────────────────────

async fn analyze_url(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let url = match req.url.as_deref() {
        Some(u) if !u.is_empty() => u.to_string(),
        _ => {
            tracing::warn!("analyze-url request without a URL");
            return Err(ApiError::MissingUrl);
        }
    };

    if !validate::is_valid_url(&url) {
        tracing::warn!(%url, "rejected syntactically invalid URL");
        return Err(ApiError::InvalidUrl);
    }

    tracing::info!(%url, "fetching and scraping text");
    let text = scrape::scrape_text(&state.http, &url).await.map_err(|e| {
        tracing::warn!(%url, error = %e, "scrape failed");
        ApiError::Scrape(e)
    })?;

    let analysis = relay::analyze(&state.http, &state.config.api_endpoint, &text)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "analysis relay failed");
            ApiError::Analyze(e)
        })?;

    Ok(Json(analysis))
}
