//! Router construction
//!
//! Wires the scrape and health endpoints into an axum [`Router`] with the
//! shared application state and the tracing/CORS middleware stack.

use crate::{config::Settings, scrape::PortalScraper};
use axum::{Router, routing::get};
use std::sync::Arc;
use std::time::Instant;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// State shared by every handler
///
/// The scraper itself is stateless per call; sharing one instance only
/// shares its settings.
#[derive(Clone)]
pub struct AppState {
    /// Scraper bound to the configured portal
    pub scraper: Arc<PortalScraper>,
    /// Resolved application settings
    pub settings: Arc<Settings>,
    /// When the server came up, for the `/ping` uptime figure
    pub started_at: Instant,
}

/// Build the application router over the given settings
pub fn create_app(settings: Settings) -> Router {
    let state = AppState {
        scraper: Arc::new(PortalScraper::new(settings.clone())),
        settings: Arc::new(settings),
        started_at: Instant::now(),
    };

    Router::new()
        .route("/", get(super::handlers::scrape_account))
        .route("/ping", get(super::handlers::ping))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
