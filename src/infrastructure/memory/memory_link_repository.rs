//! In-memory implementation of the link table.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;
use serde_json::json;
use url::Url;

use crate::domain::entities::ShortLink;
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::random_code;

/// The process-wide code ↔ URL table.
///
/// A single `RwLock<HashMap>` holds the forward index (code → link). Reads
/// (`find_by_code`, `count`) share the read guard; `find_or_create` holds
/// the write guard across the whole reverse-scan → generate → insert
/// sequence. Locking the individual map calls would let two concurrent
/// requests for the same new target both pass the reverse lookup and both
/// insert, so the compound operation is the unit of exclusion.
///
/// The reverse lookup (target → code) is a linear scan over the map values.
/// The table only grows, never shrinks, and is discarded with the process.
#[derive(Debug, Default)]
pub struct MemoryLinkRepository {
    links: RwLock<HashMap<String, ShortLink>>,
}

impl MemoryLinkRepository {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LinkRepository for MemoryLinkRepository {
    async fn find_by_code(&self, code: &str) -> Result<Option<ShortLink>, AppError> {
        let links = self.links.read().map_err(poisoned)?;
        Ok(links.get(code).cloned())
    }

    async fn find_or_create(&self, target: &Url) -> Result<ShortLink, AppError> {
        let target = target.as_str();
        let mut links = self.links.write().map_err(poisoned)?;

        if let Some(existing) = links.values().find(|l| l.target_url == target) {
            return Ok(existing.clone());
        }

        // Rejection sampling: redraw while the candidate collides with a
        // live code. Under the write guard, so no other caller can settle
        // on the same still-unused candidate.
        let mut rng = rand::rng();
        let code = loop {
            let candidate = random_code(&mut rng);
            if !links.contains_key(&candidate) {
                break candidate;
            }
        };

        let link = ShortLink::new(code.clone(), target.to_string());
        links.insert(code, link.clone());
        Ok(link)
    }

    async fn count(&self) -> Result<usize, AppError> {
        Ok(self.links.read().map_err(poisoned)?.len())
    }
}

fn poisoned<T>(_: PoisonError<T>) -> AppError {
    AppError::internal("Link table lock poisoned", json!({}))
}
