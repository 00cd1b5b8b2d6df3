//! REST route configuration.

use crate::api::handlers::{resolve_handler, shorten_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// REST endpoints, mounted under `/rest`.
///
/// # Endpoints
///
/// - `POST /shorten` - Create (or reuse) a short link for a URL
/// - `GET  /{code}`  - Return the raw target URL for a code
pub fn rest_routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/{code}", get(resolve_handler))
}
