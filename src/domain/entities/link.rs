//! Short link entity.

use chrono::{DateTime, Utc};

/// A live mapping from a short code to its target URL.
///
/// Entries are immutable once inserted: the table has no update or delete
/// path, so a `ShortLink` lives exactly as long as the process.
#[derive(Debug, Clone)]
pub struct ShortLink {
    /// 8-character alphanumeric identifier, unique across all live entries.
    pub code: String,
    /// The validated absolute URL this code redirects to, in the exact
    /// textual form produced by URL parsing.
    pub target_url: String,
    pub created_at: DateTime<Utc>,
}

impl ShortLink {
    /// Creates a new link stamped with the current time.
    pub fn new(code: String, target_url: String) -> Self {
        Self {
            code,
            target_url,
            created_at: Utc::now(),
        }
    }
}
