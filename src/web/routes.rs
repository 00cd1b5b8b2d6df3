//! Web route configuration.

use crate::state::AppState;
use crate::web::handlers::{home_handler, redirect_handler, shorten_form_handler};
use axum::{
    Router,
    routing::{get, post},
};

/// Browser-facing routes.
///
/// # Endpoints
///
/// - `GET  /`         - Landing page with the shorten form
/// - `POST /shorten`  - Form submission, renders result or error page
/// - `GET  /{code}`   - Short link redirect
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home_handler))
        .route("/shorten", post(shorten_form_handler))
        .route("/{code}", get(redirect_handler))
}
