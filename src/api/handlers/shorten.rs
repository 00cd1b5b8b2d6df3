//! Handler for the REST shorten endpoint.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates (or reuses) a short link for a long URL.
///
/// # Endpoint
///
/// `POST /rest/shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com/very/long/path" }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "code": "Ab3xY9q2",
///   "short_url": "http://short.example.com/Ab3xY9q2/",
///   "target_url": "https://example.com/very/long/path"
/// }
/// ```
///
/// Shortening is idempotent: submitting a URL that was shortened before
/// returns the code minted the first time.
///
/// # Errors
///
/// Returns 400 Bad Request when the URL fails validation, and 500 when the
/// short link cannot be formatted from the configured service host.
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<Json<ShortenResponse>, AppError> {
    payload.validate()?;

    let link = state.link_service.shorten(&payload.url).await?;
    let short_url = state.link_service.short_url(&link.code)?;

    Ok(Json(ShortenResponse {
        code: link.code,
        short_url,
        target_url: link.target_url,
    }))
}
