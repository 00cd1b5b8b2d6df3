//! Repository trait for the short link table.

use crate::domain::entities::ShortLink;
use crate::error::AppError;
use async_trait::async_trait;
use url::Url;

/// Interface to the code ↔ URL table.
///
/// The table is the only shared mutable resource in the service. Codes are
/// unique across all live entries, and every target stores at most one
/// entry, which the compound [`LinkRepository::find_or_create`] operation
/// guarantees even under concurrent callers.
///
/// # Implementations
///
/// - [`crate::infrastructure::memory::MemoryLinkRepository`] - in-process table
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Forward lookup: code → stored link.
    ///
    /// The input arrives from a URL path segment and is not pre-validated;
    /// anything that is not a live code simply resolves to `Ok(None)`.
    /// Pure read, safe to call concurrently with any other operation.
    async fn find_by_code(&self, code: &str) -> Result<Option<ShortLink>, AppError>;

    /// Returns the existing link for `target`, or mints a fresh code and
    /// inserts a new entry.
    ///
    /// The reverse lookup, code generation, and insert are one atomic step:
    /// concurrent calls for the same new target must produce exactly one
    /// entry, with every caller seeing the same code.
    async fn find_or_create(&self, target: &Url) -> Result<ShortLink, AppError>;

    /// Number of live links.
    async fn count(&self) -> Result<usize, AppError>;
}
