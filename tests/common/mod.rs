#![allow(dead_code)]

use std::sync::Arc;

use shortly::application::services::LinkService;
use shortly::infrastructure::memory::MemoryLinkRepository;
use shortly::state::AppState;

/// Fresh application state backed by an empty in-memory link table.
pub fn create_test_state() -> AppState {
    create_test_state_with_base("s.test.com", None)
}

/// Fresh state with an explicit short-link host and port.
pub fn create_test_state_with_base(host: &str, port: Option<u16>) -> AppState {
    let repository = Arc::new(MemoryLinkRepository::new());
    let link_service = Arc::new(LinkService::new(repository, host.to_string(), port));
    AppState::new(link_service)
}
