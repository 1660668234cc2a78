//! Bulk import command

use anyhow::{Context, Result};
use cafe_core::{CafeError, CafeStore, NewCafe, SqliteStore};
use std::path::Path;

/// Insert every cafe from a JSON array, skipping names that already exist
pub async fn import(store: &SqliteStore, input: &Path) -> Result<()> {
    let data = tokio::fs::read_to_string(input)
        .await
        .with_context(|| format!("Failed to read input file: {}", input.display()))?;
    let cafes: Vec<NewCafe> = serde_json::from_str(&data)
        .with_context(|| format!("Failed to parse {}", input.display()))?;

    let total = cafes.len();
    let mut inserted = 0;
    let mut skipped = 0;

    for cafe in cafes {
        match store.insert(cafe).await {
            Ok(_) => inserted += 1,
            Err(CafeError::Duplicate(name)) => {
                tracing::warn!("Skipping duplicate cafe: {}", name);
                skipped += 1;
            }
            Err(e) => return Err(e).context("Import aborted"),
        }
    }

    println!(
        "Imported {} of {} cafes ({} duplicates skipped)",
        inserted, total, skipped
    );
    Ok(())
}
