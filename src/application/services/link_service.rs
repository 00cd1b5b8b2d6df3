//! Link shortening and resolution service.

use std::sync::Arc;

use serde_json::json;
use tracing::{debug, error};
use url::Url;

use crate::domain::entities::ShortLink;
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::url_validator::parse_target_url;

/// Service for shortening URLs and resolving short codes.
///
/// Validates input before it can touch the table, and formats the absolute
/// short URL handed back to callers from the configured service host/port.
pub struct LinkService<R: LinkRepository> {
    repository: Arc<R>,
    service_host: String,
    service_port: Option<u16>,
}

impl<R: LinkRepository> LinkService<R> {
    /// Creates a new link service.
    ///
    /// `service_host` and `service_port` are used only to format returned
    /// short links; the table stores and compares target URLs, never the
    /// service's own address.
    pub fn new(repository: Arc<R>, service_host: String, service_port: Option<u16>) -> Self {
        Self {
            repository,
            service_host,
            service_port,
        }
    }

    /// Shortens `raw_url`, reusing the existing code when this target was
    /// shortened before.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] when the input is not an absolute
    /// HTTP(S) URL. No entry is created in that case.
    pub async fn shorten(&self, raw_url: &str) -> Result<ShortLink, AppError> {
        let target = parse_target_url(raw_url).map_err(|e| {
            AppError::bad_request("Invalid URL", json!({ "reason": e.to_string() }))
        })?;

        let link = self.repository.find_or_create(&target).await?;
        debug!(code = %link.code, target = %link.target_url, "shortened");

        Ok(link)
    }

    /// Resolves a short code to its stored link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when the code is not registered.
    pub async fn resolve(&self, code: &str) -> Result<ShortLink, AppError> {
        self.repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::not_found("Short link not found", json!({ "code": code })))
    }

    /// Builds the absolute short URL for a code:
    /// `http://{host}[:{port}]/{code}/`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] when the formatted string is not a
    /// well-formed URL (a misconfigured host only surfaces here, after the
    /// insert already succeeded).
    pub fn short_url(&self, code: &str) -> Result<String, AppError> {
        let formatted = match self.service_port {
            Some(port) => format!("http://{}:{}/{}/", self.service_host, port, code),
            None => format!("http://{}/{}/", self.service_host, code),
        };

        match Url::parse(&formatted) {
            Ok(url) => Ok(url.to_string()),
            Err(e) => {
                error!("generated malformed short URL {formatted:?}: {e}");
                Err(AppError::internal("Failed to build short URL", json!({})))
            }
        }
    }

    /// Number of live links in the table.
    pub async fn link_count(&self) -> Result<usize, AppError> {
        self.repository.count().await
    }
}
