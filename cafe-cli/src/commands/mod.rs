//! CLI command implementations

mod import;
mod manage;
mod query;

pub use import::import;
pub use manage::{add, init, remove, set_price, AddArgs};
pub use query::{list, search};

use anyhow::{Context, Result};
use cafe_core::SqliteStore;
use std::path::Path;

/// Open the database, creating it if needed
pub async fn open_store(path: &Path) -> Result<SqliteStore> {
    SqliteStore::open(path)
        .await
        .with_context(|| format!("Failed to open database: {}", path.display()))
}
