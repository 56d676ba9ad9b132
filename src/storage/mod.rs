//! Storage backends for normalized entity graphs
//!
//! Backends implement the `GraphStore` trait. The primary implementation
//! is `SqliteStore`, which maps each entity kind onto its own table.

mod schema;
mod sqlite;
mod traits;

pub use sqlite::SqliteStore;
pub use traits::{GraphStore, OpenStore, PersistReceipt, StorageError, StorageResult};
