//! HTTP surface of the service.
//!
//! # Routes
//!
//! | Method | Path | Response |
//! |--------|------|----------|
//! | GET | `/` | `200 ok` liveness probe |
//! | GET | `/posts` | `200 {"posts": [...]}` or `500 {"message", "error"}` |
//!
//! `GET /posts` performs exactly one homepage fetch per request. This module
//! is the only place that turns scraper errors into status codes.

use crate::error::FetchError;
use crate::models::{ErrorResponse, PostsResponse};
use crate::scrapers::PostScraper;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use tower_http::trace::TraceLayer;
use tracing::{error, info, instrument};

/// Message returned alongside the error text when scraping fails.
pub const SCRAPE_FAILED_MESSAGE: &str = "Ocorreu um erro ao buscar os posts";

/// Shared state handed to every handler.
#[derive(Debug, Clone)]
pub struct AppState {
    pub scraper: PostScraper,
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(|| async { "ok" }))
        .route("/posts", get(list_posts))
        .with_state(state)
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                tracing::info_span!(
                    "http_request",
                    method = %request.method(),
                    path = %request.uri().path(),
                )
            }),
        )
}

/// `GET /posts`: scrape the homepage and return its posts.
#[instrument(level = "info", skip_all)]
pub async fn list_posts(State(state): State<AppState>) -> Result<Json<PostsResponse>, ApiError> {
    let posts = state.scraper.scrape_posts().await?;
    info!(count = posts.len(), "Serving posts");
    Ok(Json(PostsResponse { posts }))
}

/// Error returned by handlers, rendered as a 500 JSON body.
#[derive(Debug)]
pub struct ApiError(FetchError);

impl From<FetchError> for ApiError {
    fn from(e: FetchError) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        error!(error = %self.0, timeout = self.0.is_timeout(), "Failed to scrape posts");
        let body = ErrorResponse {
            message: SCRAPE_FAILED_MESSAGE.to_string(),
            error: self.0.to_string(),
        };
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}
