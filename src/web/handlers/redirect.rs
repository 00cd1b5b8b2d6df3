//! Browser redirect handler.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};

use crate::error::AppError;
use crate::state::AppState;
use crate::web::handlers::ErrorTemplate;

/// Redirects a short code to its target URL.
///
/// # Endpoint
///
/// `GET /{code}` (the trailing-slash spelling `/{code}/` is folded into
/// this route by path normalization)
///
/// Issues a 307 Temporary Redirect to the stored target. When the code is
/// not registered, renders the error page with 404 instead of redirecting.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Response {
    match state.link_service.resolve(&code).await {
        Ok(link) => Redirect::temporary(&link.target_url).into_response(),
        Err(AppError::NotFound { .. }) => (
            StatusCode::NOT_FOUND,
            ErrorTemplate::new("The requested URL is not registered with this service"),
        )
            .into_response(),
        Err(err) => err.into_response(),
    }
}
