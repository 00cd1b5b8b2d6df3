//! # Shortly
//!
//! A minimal URL shortening service built with Axum, keeping all link state
//! in process memory.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer
//! separation:
//!
//! - **Domain Layer** ([`domain`]) - Core entities and the link table trait
//! - **Application Layer** ([`application`]) - Shortening and resolution logic
//! - **Infrastructure Layer** ([`infrastructure`]) - The in-memory link table
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//! - **Web Layer** ([`web`]) - HTML landing, result, and error pages
//!
//! ## Behavior
//!
//! - Codes are 8 random alphanumeric characters, unique for the process
//!   lifetime
//! - Shortening the same URL twice returns the same code
//! - State lives only in memory; a restart starts from an empty table
//! - Every endpoint is rate limited per client IP
//!
//! ## Quick Start
//!
//! ```bash
//! # Host (and optional port) used in the links handed back to callers
//! export SERVICE_HOST="short.example.com"
//!
//! # Start the service
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::LinkService;
    pub use crate::domain::entities::ShortLink;
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
