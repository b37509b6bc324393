//! Gateway configuration, built once at startup and injected everywhere.

use thiserror::Error;

use crate::constants::{DEFAULT_HOST, DEFAULT_PORT};
use crate::env::env_parse_with_default;

/// Configuration errors raised before the gateway starts serving.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required environment variable is missing or empty.
    #[error("missing required environment variable: {0}")]
    MissingVar(&'static str),
}

/// Immutable gateway configuration.
///
/// Constructed once from the environment and shared by reference; no
/// component reads the environment after startup.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Raw comma-separated collection allow-list, validated by the registry.
    pub collections: String,
    /// Username every caller must present.
    pub username: String,
    /// Optional password. When unset, any password is accepted once the
    /// username matches (intentional weak-auth mode for trusted networks).
    pub password: Option<String>,
    /// PostgreSQL connection string.
    pub database_url: String,
    /// HTTP bind address.
    pub host: String,
    /// HTTP bind port.
    pub port: u16,
}

impl GatewayConfig {
    /// Build the configuration from environment variables.
    ///
    /// Required: `DOCGATE_COLLECTIONS`, `DOCGATE_USERNAME`, `DATABASE_URL`.
    /// Optional: `DOCGATE_PASSWORD`, `DOCGATE_HOST`, `DOCGATE_PORT`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            collections: require("DOCGATE_COLLECTIONS")?,
            username: require("DOCGATE_USERNAME")?,
            password: std::env::var("DOCGATE_PASSWORD").ok().filter(|p| !p.is_empty()),
            database_url: require("DATABASE_URL")?,
            host: std::env::var("DOCGATE_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_owned()),
            port: env_parse_with_default("DOCGATE_PORT", DEFAULT_PORT),
        })
    }
}

fn require(var: &'static str) -> Result<String, ConfigError> {
    std::env::var(var).ok().filter(|v| !v.trim().is_empty()).ok_or(ConfigError::MissingVar(var))
}
