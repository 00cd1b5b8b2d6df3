use std::sync::Arc;

use crate::application::services::LinkService;
use crate::infrastructure::memory::MemoryLinkRepository;

/// Shared application state injected into every handler.
///
/// The link table behind `link_service` is constructed once at startup (or
/// per test) and owned here; handlers share it by reference through cloning
/// this state.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService<MemoryLinkRepository>>,
}

impl AppState {
    pub fn new(link_service: Arc<LinkService<MemoryLinkRepository>>) -> Self {
        Self { link_service }
    }
}
