//! Storage trait definitions

use crate::graph::{EntityGraph, EntityKind, EntityRef, GraphViolation};
use std::collections::BTreeMap;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during storage operations
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid graph: {0}")]
    Graph(#[from] GraphViolation),

    #[error("Entity {entity} references {parent}, which has no stored key")]
    UnresolvedParent { entity: EntityRef, parent: EntityRef },

    #[error("Unknown table: {0}")]
    UnknownTable(String),

    #[error("Store lock poisoned")]
    LockPoisoned,
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Surrogate keys assigned by one `persist` call, in graph order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersistReceipt {
    keys: Vec<i64>,
}

impl PersistReceipt {
    pub(crate) fn new(keys: Vec<i64>) -> Self {
        Self { keys }
    }

    /// Key of the row written for `entity`.
    pub fn key(&self, entity: EntityRef) -> Option<i64> {
        self.keys.get(entity.index()).copied()
    }

    pub fn keys(&self) -> &[i64] {
        &self.keys
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

/// Trait for entity graph storage backends
///
/// Implementations must be thread-safe (Send + Sync) so one store can
/// serve several ingesting threads.
pub trait GraphStore: Send + Sync {
    /// Write every entity of `graph` atomically, parents before children.
    ///
    /// Parent refs become foreign keys to the parent's assigned key.
    fn persist(&self, graph: &EntityGraph) -> StorageResult<PersistReceipt>;

    /// Row count of one entity table.
    fn count_rows(&self, table: &str) -> StorageResult<usize>;

    /// Row counts of every entity table.
    fn table_counts(&self) -> StorageResult<BTreeMap<&'static str, usize>> {
        let mut counts = BTreeMap::new();
        for kind in EntityKind::ALL {
            counts.insert(kind.table(), self.count_rows(kind.table())?);
        }
        Ok(counts)
    }
}

/// Extension trait for opening stores from paths
pub trait OpenStore: GraphStore + Sized {
    /// Open or create a store at the given path
    fn open(path: impl AsRef<Path>) -> StorageResult<Self>;

    /// Create an in-memory store (useful for testing)
    fn open_in_memory() -> StorageResult<Self>;
}
