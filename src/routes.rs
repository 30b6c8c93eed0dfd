//! Router configuration.
//!
//! # Route Structure
//!
//! - `GET  /{code}`     - Short link redirect
//! - `GET  /health`     - Health check with storage probe
//! - `POST /api/shorten` - Create a short link
//! - `GET  /api/recent`  - Recent mappings with counters
//!
//! Requests are traced at `INFO` level and trailing slashes are
//! normalized before routing.

use axum::routing::{get, post};
use axum::{Router, http::Request};
use tower::Layer;
use tower_http::LatencyUnit;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::trace::{DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::api::handlers::{health_handler, recent_handler, redirect_handler, shorten_handler};
use crate::state::AppState;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let api_router = Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/recent", get(recent_handler));

    let router = Router::new()
        .route("/{code}", get(redirect_handler))
        .route("/health", get(health_handler))
        .nest("/api", api_router)
        .with_state(state)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<_>| {
                    tracing::info_span!(
                        "request",
                        method = %request.method(),
                        uri = %request.uri(),
                    )
                })
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .latency_unit(LatencyUnit::Millis),
                ),
        );

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
