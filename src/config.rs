//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server
//! starts.
//!
//! ## Required Variables
//!
//! - `SERVICE_HOST` - Host name used to format returned short links
//!
//! ## Optional Variables
//!
//! - `SERVICE_PORT` - Port appended to formatted short links (default: none)
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//!
//! `SERVICE_HOST`/`SERVICE_PORT` affect only the absolute links handed back
//! to callers; they are independent of the address the server binds to.

use anyhow::{Context, Result};
use std::env;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Host used to format returned short links.
    pub service_host: String,
    /// Port appended to formatted short links, when configured.
    pub service_port: Option<u16>,
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `SERVICE_HOST` is missing or `SERVICE_PORT` is
    /// not a valid port number.
    pub fn from_env() -> Result<Self> {
        let service_host = env::var("SERVICE_HOST").context("SERVICE_HOST must be set")?;

        let service_port = match env::var("SERVICE_PORT") {
            Ok(value) if value.is_empty() => None,
            Ok(value) => Some(
                value
                    .parse::<u16>()
                    .context("SERVICE_PORT must be a port number")?,
            ),
            Err(_) => None,
        };

        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        Ok(Self {
            service_host,
            service_port,
            listen_addr,
            log_level,
            log_format,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `service_host` is empty or carries a scheme or path
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not in `host:port` form
    pub fn validate(&self) -> Result<()> {
        if self.service_host.is_empty() {
            anyhow::bail!("SERVICE_HOST must not be empty");
        }

        if self.service_host.contains("://") || self.service_host.contains('/') {
            anyhow::bail!(
                "SERVICE_HOST must be a bare host name, got '{}'",
                self.service_host
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        Ok(())
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);

        match self.service_port {
            Some(port) => {
                tracing::info!("  Short link base: http://{}:{}/", self.service_host, port);
            }
            None => tracing::info!("  Short link base: http://{}/", self.service_host),
        }

        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if required variables are missing or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
