//! Handler for health check endpoint.

use axum::{Json, extract::State};

use crate::api::dto::health::HealthResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns service health and the live link count.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response
///
/// ```json
/// { "status": "ok", "version": "0.1.0", "links": 42 }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, AppError> {
    let links = state.link_service.link_count().await?;

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        links,
    }))
}
