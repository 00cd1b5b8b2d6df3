//! Handler for raw short code resolution.

use axum::extract::{Path, State};

use crate::error::AppError;
use crate::state::AppState;

/// Returns the stored target URL for a code, without redirecting.
///
/// # Endpoint
///
/// `GET /rest/{code}`
///
/// Responds 200 with the raw target URL as the body, or 404 when the code
/// is not registered. The path segment is not pre-validated; anything that
/// is not a live code is simply not found.
pub async fn resolve_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<String, AppError> {
    let link = state.link_service.resolve(&code).await?;
    Ok(link.target_url)
}
