//! Cafe Core Library
//!
//! Record types, form decoding and the storage layer shared by the Cafe API
//! server and the admin CLI. Everything above this crate talks to the database
//! through the [`CafeStore`] trait.

pub mod error;
pub mod store;
pub mod types;

pub use error::{CafeError, Result};
pub use store::{CafeStore, SqliteStore};
pub use types::{parse_flag, Cafe, CafeForm, NewCafe};
