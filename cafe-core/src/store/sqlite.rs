//! SQLite-backed cafe store

use super::CafeStore;
use crate::error::{CafeError, Result};
use crate::types::{Cafe, NewCafe};
use async_trait::async_trait;
use rand::seq::SliceRandom;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use std::path::Path;
use std::time::Duration;

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS cafe (
    id INTEGER PRIMARY KEY,
    name VARCHAR(250) NOT NULL UNIQUE,
    map_url VARCHAR(500) NOT NULL,
    img_url VARCHAR(500) NOT NULL,
    location VARCHAR(250) NOT NULL,
    seats VARCHAR(250) NOT NULL,
    has_toilet BOOLEAN NOT NULL,
    has_wifi BOOLEAN NOT NULL,
    has_sockets BOOLEAN NOT NULL,
    can_take_calls BOOLEAN NOT NULL,
    coffee_price VARCHAR(250)
)
"#;

const COLUMNS: &str = "id, name, map_url, img_url, location, seats, \
    has_toilet, has_wifi, has_sockets, can_take_calls, coffee_price";

/// Cafe store over a SQLite connection pool
#[derive(Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Open (or create) the database file and make sure the table exists
    pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
        let options = SqliteConnectOptions::new()
            .filename(path.as_ref())
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(Duration::from_secs(5));

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;

        tracing::info!("Opened cafe database at {}", path.as_ref().display());
        Self::from_pool(pool).await
    }

    /// Wrap an existing pool, creating the table if absent
    pub async fn from_pool(pool: SqlitePool) -> Result<Self> {
        sqlx::query(SCHEMA).execute(&pool).await?;
        Ok(Self { pool })
    }

    /// Close all pooled connections
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl CafeStore for SqliteStore {
    async fn list_all(&self) -> Result<Vec<Cafe>> {
        let cafes = sqlx::query_as::<_, Cafe>(&format!(
            "SELECT {COLUMNS} FROM cafe ORDER BY name"
        ))
        .fetch_all(&self.pool)
        .await?;
        Ok(cafes)
    }

    async fn random(&self) -> Result<Option<Cafe>> {
        let cafes = sqlx::query_as::<_, Cafe>(&format!("SELECT {COLUMNS} FROM cafe"))
            .fetch_all(&self.pool)
            .await?;
        let picked = cafes.choose(&mut rand::thread_rng()).cloned();
        Ok(picked)
    }

    async fn find_by_location(&self, location: &str) -> Result<Vec<Cafe>> {
        // `=` on TEXT uses the BINARY collation, so matching is case-sensitive
        let cafes = sqlx::query_as::<_, Cafe>(&format!(
            "SELECT {COLUMNS} FROM cafe WHERE location = ? ORDER BY name"
        ))
        .bind(location)
        .fetch_all(&self.pool)
        .await?;
        Ok(cafes)
    }

    async fn get(&self, id: i64) -> Result<Option<Cafe>> {
        let cafe = sqlx::query_as::<_, Cafe>(&format!("SELECT {COLUMNS} FROM cafe WHERE id = ?"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(cafe)
    }

    async fn insert(&self, cafe: NewCafe) -> Result<Cafe> {
        cafe.validate()?;

        let result = sqlx::query(
            "INSERT INTO cafe (name, map_url, img_url, location, seats, \
             has_toilet, has_wifi, has_sockets, can_take_calls, coffee_price) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&cafe.name)
        .bind(&cafe.map_url)
        .bind(&cafe.img_url)
        .bind(&cafe.location)
        .bind(&cafe.seats)
        .bind(cafe.has_toilet)
        .bind(cafe.has_wifi)
        .bind(cafe.has_sockets)
        .bind(cafe.can_take_calls)
        .bind(&cafe.coffee_price)
        .execute(&self.pool)
        .await;

        match result {
            Ok(done) => Ok(cafe.with_id(done.last_insert_rowid())),
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
                Err(CafeError::Duplicate(cafe.name))
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn update_price(&self, id: i64, price: Option<&str>) -> Result<bool> {
        let done = sqlx::query("UPDATE cafe SET coffee_price = ? WHERE id = ?")
            .bind(price)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(done.rows_affected() > 0)
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        let done = sqlx::query("DELETE FROM cafe WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(done.rows_affected() > 0)
    }

    async fn count(&self) -> Result<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM cafe")
            .fetch_one(&self.pool)
            .await?;
        Ok(count as u64)
    }
}
