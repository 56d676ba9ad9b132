//! Payload format detection
//!
//! Payloads carry no version field, so the format is inferred from shape:
//!
//! - no top-level `contributions` → `LegacyBare` (the payload is one Zomato contribution)
//! - `contributions` where every entry is a legacy Zomato entry → `LegacyEnvelope`
//! - anything else with `contributions` → `MultiProviderEnvelope`
//!
//! A legacy entry is typed `ZOMATO` *and* carries both `userid` and
//! `orders` in its secured payload; the tag alone is not enough because
//! tags are reused across format versions. The rule is all-or-nothing and
//! an empty list is never legacy.

use serde::Serialize;

const LEGACY_TYPE: &str = "ZOMATO";
const LEGACY_FIELDS: [&str; 2] = ["userid", "orders"];

/// The three payload shapes the pipeline understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormatKind {
    LegacyBare,
    LegacyEnvelope,
    MultiProviderEnvelope,
}

impl FormatKind {
    pub fn is_legacy(self) -> bool {
        matches!(self, Self::LegacyBare | Self::LegacyEnvelope)
    }
}

impl std::fmt::Display for FormatKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::LegacyBare => "legacy-bare",
            Self::LegacyEnvelope => "legacy-envelope",
            Self::MultiProviderEnvelope => "multi-provider-envelope",
        };
        f.write_str(name)
    }
}

/// Classify a raw payload.
pub fn detect(raw: &serde_json::Value) -> FormatKind {
    Detection::inspect(raw).kind
}

/// Classification plus the entry tallies behind it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Detection {
    pub kind: FormatKind,
    /// Entries in `contributions` (0 for a bare payload)
    pub entries: usize,
    /// Entries matching the legacy Zomato shape
    pub legacy_entries: usize,
    /// Zomato-typed entries that do not match the legacy shape
    pub nonlegacy_zomato_entries: usize,
}

impl Detection {
    pub fn inspect(raw: &serde_json::Value) -> Self {
        let Some(contributions) = raw.get("contributions") else {
            return Self {
                kind: FormatKind::LegacyBare,
                entries: 0,
                legacy_entries: 0,
                nonlegacy_zomato_entries: 0,
            };
        };

        let entries = contributions.as_array().map(Vec::as_slice).unwrap_or_default();
        let mut legacy_entries = 0;
        let mut nonlegacy_zomato_entries = 0;
        for entry in entries {
            if is_legacy_entry(entry) {
                legacy_entries += 1;
            } else if declared_type(entry) == Some(LEGACY_TYPE) {
                nonlegacy_zomato_entries += 1;
            }
        }

        let kind = if !entries.is_empty() && legacy_entries == entries.len() {
            FormatKind::LegacyEnvelope
        } else {
            FormatKind::MultiProviderEnvelope
        };

        Self {
            kind,
            entries: entries.len(),
            legacy_entries,
            nonlegacy_zomato_entries,
        }
    }

    /// True when Zomato entries disagree about which shape they use.
    ///
    /// Such payloads are handled as multi-provider; the flag lets the
    /// caller surface that instead of trusting the guess.
    pub fn is_ambiguous(&self) -> bool {
        self.kind == FormatKind::MultiProviderEnvelope
            && self.legacy_entries > 0
            && self.nonlegacy_zomato_entries > 0
    }
}

fn declared_type(entry: &serde_json::Value) -> Option<&str> {
    entry.get("type").and_then(|t| t.as_str())
}

fn is_legacy_entry(entry: &serde_json::Value) -> bool {
    if declared_type(entry) != Some(LEGACY_TYPE) {
        return false;
    }
    match entry.get("securedSharedData").and_then(|d| d.as_object()) {
        Some(data) => LEGACY_FIELDS.iter().all(|field| data.contains_key(*field)),
        None => false,
    }
}
