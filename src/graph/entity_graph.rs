//! EntityGraph: ordered entities with forward-only parent links
//!
//! A normalizer builds one graph per contribution (a fragment); the
//! ingest pipeline appends fragments into one graph per payload.
//! Every parent link points at an earlier entity, so a store can assign
//! keys in a single pass.

use super::entity::{Entity, EntityKind, EntityRef};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// A broken ordering or ownership rule found by `verify`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphViolation {
    #[error("entity {entity} references {parent}, which does not precede it")]
    DanglingParent { entity: EntityRef, parent: EntityRef },

    #[error("entity {entity} ({kind}) must be owned by {expected}, found {found}")]
    ParentKindMismatch {
        entity: EntityRef,
        kind: EntityKind,
        expected: EntityKind,
        found: EntityKind,
    },

    #[error("fragment must start with exactly one account, found {accounts}")]
    AccountCount { accounts: usize },

    #[error("fragment must start with its account, found {found}")]
    DetailBeforeAccount { found: EntityKind },
}

/// Ordered collection of entities, parents before children.
///
/// Also used as the per-contribution fragment; see [`Fragment`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityGraph {
    entities: Vec<Entity>,
}

/// The graph produced for a single contribution.
pub type Fragment = EntityGraph;

impl EntityGraph {
    pub fn new() -> Self {
        Self {
            entities: Vec::new(),
        }
    }

    /// Append an entity and return its position.
    ///
    /// Callers set the entity's parent ref before pushing; `verify`
    /// checks that it points backwards.
    pub fn push(&mut self, entity: Entity) -> EntityRef {
        let at = EntityRef::new(self.entities.len());
        self.entities.push(entity);
        at
    }

    /// Move every entity of `other` onto the end of this graph,
    /// shifting its parent refs so they keep pointing at the same owners.
    pub fn append(&mut self, other: EntityGraph) {
        let offset = self.entities.len();
        self.entities.reserve(other.entities.len());
        for mut entity in other.entities {
            if let Some(parent) = entity.parent_mut() {
                *parent = parent.shifted(offset);
            }
            self.entities.push(entity);
        }
    }

    pub fn get(&self, at: EntityRef) -> Option<&Entity> {
        self.entities.get(at.index())
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn iter(&self) -> impl Iterator<Item = (EntityRef, &Entity)> {
        self.entities
            .iter()
            .enumerate()
            .map(|(i, e)| (EntityRef::new(i), e))
    }

    pub fn into_entities(self) -> Vec<Entity> {
        self.entities
    }

    pub fn accounts(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter().filter(|e| e.is_account())
    }

    pub fn account_count(&self) -> usize {
        self.accounts().count()
    }

    pub fn detail_count(&self) -> usize {
        self.len() - self.account_count()
    }

    /// Direct children of `parent`, in graph order.
    pub fn children_of(&self, parent: EntityRef) -> impl Iterator<Item = &Entity> {
        self.entities
            .iter()
            .filter(move |e| e.parent() == Some(parent))
    }

    pub fn count_kind(&self, kind: EntityKind) -> usize {
        self.entities.iter().filter(|e| e.kind() == kind).count()
    }

    /// Entity counts keyed by table name.
    pub fn counts_by_table(&self) -> BTreeMap<&'static str, usize> {
        let mut counts = BTreeMap::new();
        for entity in &self.entities {
            *counts.entry(entity.kind().table()).or_insert(0) += 1;
        }
        counts
    }

    /// Check that every parent ref points at an earlier entity of the
    /// kind its child expects.
    pub fn verify(&self) -> Result<(), GraphViolation> {
        for (at, entity) in self.iter() {
            let Some(parent) = entity.parent() else {
                continue;
            };
            if parent >= at {
                return Err(GraphViolation::DanglingParent { entity: at, parent });
            }
            let kind = entity.kind();
            // parent < at, so the lookup cannot miss
            let found = self.entities[parent.index()].kind();
            if let Some(expected) = kind.parent_kind() {
                if found != expected {
                    return Err(GraphViolation::ParentKindMismatch {
                        entity: at,
                        kind,
                        expected,
                        found,
                    });
                }
            }
        }
        Ok(())
    }

    /// `verify`, plus the per-contribution shape: the account comes first
    /// and is the only account. An empty fragment is valid (skipped input).
    pub fn verify_fragment(&self) -> Result<(), GraphViolation> {
        if let Some(first) = self.entities.first() {
            if !first.is_account() {
                return Err(GraphViolation::DetailBeforeAccount { found: first.kind() });
            }
            let accounts = self.account_count();
            if accounts != 1 {
                return Err(GraphViolation::AccountCount { accounts });
            }
        }
        self.verify()
    }
}

impl<'a> IntoIterator for &'a EntityGraph {
    type Item = &'a Entity;
    type IntoIter = std::slice::Iter<'a, Entity>;

    fn into_iter(self) -> Self::IntoIter {
        self.entities.iter()
    }
}
