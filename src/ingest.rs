//! Ingest pipeline: one raw payload in, one entity graph out
//!
//! Pipeline steps:
//! 1. Detect the payload format (flag or reject ambiguous legacy mixes)
//! 2. Validate every contribution for that format
//! 3. Dispatch each contribution in order, appending its fragment
//! 4. Verify the combined graph and return it with a report

use crate::detect::{Detection, FormatKind};
use crate::graph::{EntityGraph, Fragment, GraphViolation};
use crate::model::{Contribution, LegacyContribution, ProviderType};
use crate::normalize::{normalize_legacy, Dispatcher, NormalizeError};
use crate::validate::{contribution_list, contribution_path, PayloadValidator, SerdeValidator, ValidationError};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;

/// Errors that abort a whole payload.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("payload is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(
        "ambiguous payload format: {legacy} legacy-shaped and {other} current-shaped ZOMATO entries"
    )]
    AmbiguousLegacyFormat { legacy: usize, other: usize },

    /// A contribution failed inside the core. `partial` holds everything
    /// built from the contributions before it.
    #[error("contribution {index} failed: {source}")]
    Contribution {
        index: usize,
        source: NormalizeError,
        partial: Box<EntityGraph>,
    },

    #[error("combined graph is malformed: {0}")]
    Graph(#[from] GraphViolation),
}

/// Pipeline switches, set from the CLI flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestOptions {
    /// Reject payloads whose ZOMATO entries mix legacy and current shapes
    /// instead of flagging them on the report.
    pub strict_format: bool,
    /// Skip every non-ZOMATO contribution.
    pub zomato_only: bool,
}

/// A contribution that produced no entities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedContribution {
    pub index: usize,
    pub provider_type: ProviderType,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IngestReport {
    /// Contributions seen in the payload
    pub contributions: usize,
    /// Contributions that produced a fragment
    pub normalized: usize,
    pub skipped: Vec<SkippedContribution>,
    /// ZOMATO entries disagreed on format version
    pub ambiguous_legacy: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct IngestOutcome {
    pub format: FormatKind,
    pub graph: EntityGraph,
    pub report: IngestReport,
}

/// Validated contributions, tagged with the path they normalize through.
enum Validated {
    /// Normalized whatever its declared tag.
    Bare(LegacyContribution),
    /// Only ZOMATO entries normalize; the detector admits no others.
    LegacyEnvelope(Vec<LegacyContribution>),
    Current(Vec<Contribution>),
}

/// The single entry point from raw payload to entity graph.
///
/// Holds only immutable registrations; share one pipeline across threads.
#[derive(Clone)]
pub struct IngestPipeline {
    options: IngestOptions,
    validator: Arc<dyn PayloadValidator>,
    dispatcher: Dispatcher,
}

impl IngestPipeline {
    /// Pipeline with the serde validator and every built-in normalizer.
    pub fn new(options: IngestOptions) -> Self {
        Self {
            options,
            validator: Arc::new(SerdeValidator::new()),
            dispatcher: Dispatcher::with_defaults(),
        }
    }

    /// Pipeline that keeps only ZOMATO contributions.
    pub fn zomato_only() -> Self {
        Self::new(IngestOptions {
            zomato_only: true,
            ..IngestOptions::default()
        })
    }

    pub fn with_validator(mut self, validator: Arc<dyn PayloadValidator>) -> Self {
        self.validator = validator;
        self
    }

    pub fn with_dispatcher(mut self, dispatcher: Dispatcher) -> Self {
        self.dispatcher = dispatcher;
        self
    }

    pub fn options(&self) -> IngestOptions {
        self.options
    }

    /// Parse and ingest a JSON document.
    pub fn ingest_str(&self, json: &str) -> Result<IngestOutcome, IngestError> {
        let raw: Value = serde_json::from_str(json)?;
        self.ingest(&raw)
    }

    /// Ingest one payload.
    ///
    /// The whole payload is validated before any contribution is
    /// normalized; a validation error produces no entities at all.
    pub fn ingest(&self, raw: &Value) -> Result<IngestOutcome, IngestError> {
        let detection = Detection::inspect(raw);
        let ambiguous = detection.is_ambiguous();
        if ambiguous {
            if self.options.strict_format {
                return Err(IngestError::AmbiguousLegacyFormat {
                    legacy: detection.legacy_entries,
                    other: detection.nonlegacy_zomato_entries,
                });
            }
            tracing::warn!(
                legacy = detection.legacy_entries,
                current = detection.nonlegacy_zomato_entries,
                "ZOMATO entries mix legacy and current shapes; treating payload as multi-provider"
            );
        }

        let validated = self.validate(raw, detection.kind)?;

        let mut graph = EntityGraph::new();
        let mut report = IngestReport {
            ambiguous_legacy: ambiguous,
            ..IngestReport::default()
        };

        match validated {
            Validated::Bare(contribution) => {
                report.contributions = 1;
                let fragment = normalize_legacy(&contribution);
                absorb(&mut graph, &mut report, 0, &contribution.provider_type, fragment)?;
            }
            Validated::LegacyEnvelope(contributions) => {
                report.contributions = contributions.len();
                for (index, contribution) in contributions.iter().enumerate() {
                    if contribution.provider_type != ProviderType::Zomato {
                        skip(&mut report, index, &contribution.provider_type);
                        continue;
                    }
                    let fragment = normalize_legacy(contribution);
                    absorb(&mut graph, &mut report, index, &contribution.provider_type, fragment)?;
                }
            }
            Validated::Current(contributions) => {
                report.contributions = contributions.len();
                for (index, contribution) in contributions.iter().enumerate() {
                    if self.options.zomato_only && contribution.provider_type != ProviderType::Zomato {
                        skip(&mut report, index, &contribution.provider_type);
                        continue;
                    }
                    let fragment = self.dispatcher.dispatch(contribution);
                    absorb(&mut graph, &mut report, index, &contribution.provider_type, fragment)?;
                }
            }
        }

        graph.verify()?;

        tracing::info!(
            format = %detection.kind,
            contributions = report.contributions,
            normalized = report.normalized,
            skipped = report.skipped.len(),
            entities = graph.len(),
            "payload ingested"
        );

        Ok(IngestOutcome {
            format: detection.kind,
            graph,
            report,
        })
    }

    fn validate(&self, raw: &Value, kind: FormatKind) -> Result<Validated, ValidationError> {
        match kind {
            FormatKind::LegacyBare => {
                let contribution = self.validator.validate_legacy(raw, "$")?;
                Ok(Validated::Bare(contribution))
            }
            FormatKind::LegacyEnvelope => {
                self.validator.validate_legacy_envelope(raw)?;
                let contributions = contribution_list(raw)?
                    .iter()
                    .enumerate()
                    .map(|(i, entry)| self.validator.validate_legacy(entry, &contribution_path(i)))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Validated::LegacyEnvelope(contributions))
            }
            FormatKind::MultiProviderEnvelope => {
                let contributions = contribution_list(raw)?
                    .iter()
                    .enumerate()
                    .map(|(i, entry)| self.validator.validate_contribution(entry, &contribution_path(i)))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Validated::Current(contributions))
            }
        }
    }
}

impl Default for IngestPipeline {
    fn default() -> Self {
        Self::new(IngestOptions::default())
    }
}

impl std::fmt::Debug for IngestPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IngestPipeline")
            .field("options", &self.options)
            .field("dispatcher", &self.dispatcher)
            .finish()
    }
}

fn skip(report: &mut IngestReport, index: usize, provider: &ProviderType) {
    tracing::debug!(index, provider = %provider, "contribution skipped");
    report.skipped.push(SkippedContribution {
        index,
        provider_type: provider.clone(),
    });
}

/// Append a contribution's fragment, or fail the payload with what was
/// built so far.
fn absorb(
    graph: &mut EntityGraph,
    report: &mut IngestReport,
    index: usize,
    provider: &ProviderType,
    fragment: Result<Fragment, NormalizeError>,
) -> Result<(), IngestError> {
    match fragment {
        Ok(fragment) if fragment.is_empty() => {
            skip(report, index, provider);
            Ok(())
        }
        Ok(fragment) => {
            graph.append(fragment);
            report.normalized += 1;
            Ok(())
        }
        Err(source) => Err(IngestError::Contribution {
            index,
            source,
            partial: Box::new(std::mem::take(graph)),
        }),
    }
}
