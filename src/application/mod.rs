//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a clean API for HTTP
//! handlers.
//!
//! - [`services::link_service::LinkService`] - Shortening, resolution, and
//!   short URL formatting

pub mod services;
