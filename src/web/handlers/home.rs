//! Landing page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;

/// Template for the landing page with the shorten form.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct IndexTemplate {}

/// Renders the landing page.
///
/// # Endpoint
///
/// `GET /`
pub async fn home_handler() -> impl IntoResponse {
    IndexTemplate {}
}
