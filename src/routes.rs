//! Top-level router configuration combining web and REST routes.
//!
//! # Route Structure
//!
//! - `GET  /`             - Landing page with the shorten form
//! - `POST /shorten`      - Form submission (renders result/error page)
//! - `GET  /{code}`       - Short link redirect (public)
//! - `GET  /health`       - Health check: link count (public)
//! - `/rest/*`            - REST API (JSON)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket, 2 requests/second everywhere
//! - **Path normalization** - `/{code}/` and `/{code}` resolve identically

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{rate_limit, tracing};
use crate::state::AppState;
use crate::web;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// The returned service must be served with connect info so the rate
/// limiter can key on the peer address (see [`crate::server::run`]).
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/health", get(health_handler))
        .nest("/rest", api::routes::rest_routes())
        .merge(web::routes::public_routes())
        .with_state(state)
        .layer(rate_limit::layer())
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
