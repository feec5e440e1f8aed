//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /shorten`       - Create a shortened URL
//! - `GET  /stats/{code}`  - Click statistics for a link
//! - `GET  /health`        - Health check
//! - `GET  /{code}`        - Short link redirect
//!
//! Specific paths are registered before the catch-all redirect route;
//! `shorten`, `stats`, and `health` are additionally rejected as custom ids
//! so links can never shadow service endpoints.
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use axum::routing::{get, post};
use axum::Router;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::trace::TraceLayer;

use crate::api::handlers::{health_handler, redirect_handler, shorten_handler, stats_handler};
use crate::state::AppState;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/stats/{code}", get(stats_handler))
        .route("/health", get(health_handler))
        .route("/{code}", get(redirect_handler))
        .with_state(state)
        .layer(TraceLayer::new_for_http());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
