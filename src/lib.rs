//! Refiner: contribution payload normalization
//!
//! Turns user-contributed provider exports (food delivery, ride hailing,
//! streaming, social) into relationally linked entity graphs ready for
//! storage.
//!
//! # Core Concepts
//!
//! - **Contributions**: one provider export attributed to one account
//! - **Normalizers**: per-provider field mappings, selected by the provider tag
//! - **Entity graphs**: accounts and their details, with parent links that
//!   always point backwards
//!
//! # Example
//!
//! ```
//! use refiner::{IngestPipeline, FormatKind};
//!
//! let payload = r#"{"contributions": [{
//!     "type": "STEAM",
//!     "witnesses": "https://example.com/proof",
//!     "AccountUsername": "gamer_jane",
//!     "securedSharedData": {"userId": "steam_1", "ownedGames": ["Elden Ring"]}
//! }]}"#;
//!
//! let outcome = IngestPipeline::default().ingest_str(payload).unwrap();
//! assert_eq!(outcome.format, FormatKind::MultiProviderEnvelope);
//! assert_eq!(outcome.graph.len(), 2);
//! ```

pub mod detect;
pub mod graph;
pub mod ingest;
pub mod model;
pub mod normalize;
pub mod storage;
pub mod validate;

pub use detect::{detect, Detection, FormatKind};
pub use graph::{Entity, EntityGraph, EntityKind, EntityRef, Fragment, GraphViolation};
pub use ingest::{IngestError, IngestOptions, IngestOutcome, IngestPipeline, IngestReport, SkippedContribution};
pub use model::{Contribution, LegacyContribution, ProviderType, SecuredData};
pub use normalize::{normalize_legacy, Dispatcher, NormalizeError, Normalizer};
pub use storage::{GraphStore, OpenStore, PersistReceipt, SqliteStore, StorageError, StorageResult};
pub use validate::{PayloadValidator, SerdeValidator, ValidationError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
