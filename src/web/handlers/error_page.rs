//! Shared error page template.

use askama::Template;
use askama_web::WebTemplate;

/// Template for user-facing error pages.
///
/// Renders `templates/error.html` with a single human-readable message.
#[derive(Template, WebTemplate)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub message: String,
}

impl ErrorTemplate {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
