//! Normalized entity graph

mod entity;
mod entity_graph;
pub mod records;

pub use entity::{Entity, EntityKind, EntityRef};
pub use entity_graph::{EntityGraph, Fragment, GraphViolation};
pub use records::AccountMeta;
