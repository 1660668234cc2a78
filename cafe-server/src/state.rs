//! Application state

use crate::config::ServerConfig;
use anyhow::{Context, Result};
use cafe_core::{CafeStore, SqliteStore};
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Cafe storage
    pub store: Arc<dyn CafeStore>,

    /// Immutable runtime configuration
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// Open the configured database and build the state around it
    pub async fn new(config: ServerConfig) -> Result<Self> {
        let store = SqliteStore::open(&config.database_path)
            .await
            .with_context(|| {
                format!(
                    "Failed to open database at {}",
                    config.database_path.display()
                )
            })?;

        Ok(Self::with_store(Arc::new(store), config))
    }

    /// Build state around an already opened store
    pub fn with_store(store: Arc<dyn CafeStore>, config: ServerConfig) -> Self {
        Self {
            store,
            config: Arc::new(config),
        }
    }

    /// Check a caller-supplied key against the configured one
    pub fn api_key_matches(&self, key: Option<&str>) -> bool {
        key == Some(self.config.api_key.as_str())
    }
}
