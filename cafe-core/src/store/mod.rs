//! Storage abstraction for cafe records

mod sqlite;

pub use sqlite::SqliteStore;

use crate::error::Result;
use crate::types::{Cafe, NewCafe};
use async_trait::async_trait;

/// Abstract cafe storage
///
/// Each method maps to a single statement against the backing table, so
/// every call is atomic on its own. Callers hold it as `Arc<dyn CafeStore>`.
#[async_trait]
pub trait CafeStore: Send + Sync {
    /// All cafes ordered by name
    async fn list_all(&self) -> Result<Vec<Cafe>>;

    /// One cafe chosen uniformly at random, `None` if the table is empty
    async fn random(&self) -> Result<Option<Cafe>>;

    /// Cafes whose location equals `location` exactly (case-sensitive)
    async fn find_by_location(&self, location: &str) -> Result<Vec<Cafe>>;

    /// Look up a cafe by id
    ///
    /// The HTTP handlers report missing rows through `update_price` and
    /// `delete`; this lookup serves admin tooling and tests.
    async fn get(&self, id: i64) -> Result<Option<Cafe>>;

    /// Insert a cafe and return it with its assigned id.
    ///
    /// Fails with [`CafeError::Duplicate`](crate::CafeError::Duplicate) if the
    /// name is taken.
    async fn insert(&self, cafe: NewCafe) -> Result<Cafe>;

    /// Set the coffee price. Returns `false` if no cafe has this id.
    async fn update_price(&self, id: i64, price: Option<&str>) -> Result<bool>;

    /// Delete a cafe. Returns `false` if no cafe has this id.
    async fn delete(&self, id: i64) -> Result<bool>;

    /// Number of stored cafes
    async fn count(&self) -> Result<u64>;
}
