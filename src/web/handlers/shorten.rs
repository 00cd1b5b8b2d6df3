//! Form-driven shorten handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Form, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use crate::error::AppError;
use crate::state::AppState;
use crate::web::handlers::ErrorTemplate;

/// Form body submitted from the landing page.
#[derive(Debug, Deserialize)]
pub struct ShortenForm {
    pub url: String,
}

/// Template showing the freshly shortened link.
#[derive(Template, WebTemplate)]
#[template(path = "result.html")]
pub struct ResultTemplate {
    pub short_url: String,
}

/// Shortens the URL submitted through the landing page form.
///
/// # Endpoint
///
/// `POST /shorten` (form field `url`)
///
/// Renders the result page with the absolute short link on success, or the
/// error page with a matching status code otherwise.
pub async fn shorten_form_handler(
    State(state): State<AppState>,
    Form(form): Form<ShortenForm>,
) -> Response {
    let outcome = match state.link_service.shorten(&form.url).await {
        Ok(link) => state.link_service.short_url(&link.code),
        Err(e) => Err(e),
    };

    match outcome {
        Ok(short_url) => ResultTemplate { short_url }.into_response(),
        Err(AppError::Validation { .. }) => (
            StatusCode::BAD_REQUEST,
            ErrorTemplate::new("The requested URL is malformed"),
        )
            .into_response(),
        Err(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            ErrorTemplate::new("An internal server error occurred"),
        )
            .into_response(),
    }
}
