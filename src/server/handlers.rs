//! HTTP endpoint handlers
//!
//! The scrape endpoint enforces the fixed 400 contract for incomplete
//! credentials and maps every scraper failure into the JSON error
//! envelope; `/ping` reports uptime and version.

use crate::{
    error::format_error,
    server::app::AppState,
    types::{PingResponse, ScrapeQuery, ScrapeResponse},
};
use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Fixed message for requests missing either credential parameter
pub const MISSING_PARAMS_ERROR: &str = "Missing \"username\" or \"password\" query parameters.";

/// Scrape endpoint
///
/// GET /?username=\<u\>&password=\<p\>
///
/// Runs the full login-and-scrape sequence and returns the aggregate
/// result. Missing parameters are a 400; every scrape failure is a 500
/// carrying the error message in the envelope.
#[axum_macros::debug_handler]
pub async fn scrape_account(
    State(state): State<AppState>,
    Query(query): Query<ScrapeQuery>,
) -> Response {
    let Some(credentials) = query.credentials() else {
        return (
            StatusCode::BAD_REQUEST,
            Json(ScrapeResponse::failure(MISSING_PARAMS_ERROR)),
        )
            .into_response();
    };

    tracing::info!("Scrape requested for user {}", credentials.username);

    match state.scraper.fetch_account_data(&credentials).await {
        Ok(data) => (StatusCode::OK, Json(ScrapeResponse::success(data))).into_response(),
        Err(e) => {
            tracing::error!(
                "Scrape failed for user {}: {}",
                credentials.username,
                format_error(&e)
            );
            (
                e.http_status(),
                Json(ScrapeResponse::failure(format_error(&e))),
            )
                .into_response()
        }
    }
}

/// Health endpoint
///
/// GET /ping
pub async fn ping(State(state): State<AppState>) -> Json<PingResponse> {
    let uptime = state.started_at.elapsed().as_secs();
    Json(PingResponse::new(uptime, crate::VERSION))
}
