//! DTOs for the shorten endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to shorten a single URL.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The original URL to shorten (must be an absolute HTTP/HTTPS URL).
    #[validate(length(min = 1, max = 2048, message = "URL must be 1-2048 characters"))]
    pub url: String,
}

/// Response for a successfully shortened URL.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    /// The 8-character short code.
    pub code: String,
    /// Absolute short link, ready to hand out.
    pub short_url: String,
    /// The stored target, in its parsed form.
    pub target_url: String,
}
