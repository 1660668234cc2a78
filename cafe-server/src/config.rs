//! Server configuration from the environment

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::path::PathBuf;

/// Key accepted by the delete endpoint when `CAFE_API_KEY` is unset
pub const DEFAULT_API_KEY: &str = "This-Is-An-API-Key";

/// Runtime configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// SQLite database file
    pub database_path: PathBuf,

    /// Listen address
    pub bind_addr: SocketAddr,

    /// Shared secret required to delete cafes
    pub api_key: String,

    /// Comma-separated list of allowed origins, or "*" for any
    pub cors_origins: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            database_path: PathBuf::from("./cafes.db"),
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            api_key: DEFAULT_API_KEY.to_string(),
            cors_origins: None,
        }
    }
}

impl ServerConfig {
    /// Load configuration, falling back to defaults for unset variables
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let database_path = std::env::var("CAFE_DATABASE_PATH")
            .map(PathBuf::from)
            .unwrap_or(defaults.database_path);

        let bind_addr = match std::env::var("CAFE_BIND_ADDR") {
            Ok(addr) => addr
                .parse()
                .with_context(|| format!("Invalid CAFE_BIND_ADDR: {}", addr))?,
            Err(_) => defaults.bind_addr,
        };

        let api_key = match std::env::var("CAFE_API_KEY") {
            Ok(key) if !key.is_empty() => key,
            _ => {
                tracing::warn!("CAFE_API_KEY not set, using the built-in default key");
                defaults.api_key
            }
        };

        Ok(Self {
            database_path,
            bind_addr,
            api_key,
            cors_origins: std::env::var("CAFE_CORS_ORIGINS").ok(),
        })
    }
}
