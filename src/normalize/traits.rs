//! Normalizer trait: the contract every provider implements
//!
//! A normalizer turns one validated contribution into a fragment: the
//! account entity first, then its details in payload order.

use crate::graph::{AccountMeta, Fragment, GraphViolation};
use crate::model::{Contribution, ProviderType};
use thiserror::Error;

/// Errors raised while normalizing a contribution.
///
/// An unknown provider type is not an error; the dispatcher skips it.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NormalizeError {
    /// The record handed to a normalizer does not fit what it expects,
    /// or it produced a malformed fragment. Validator and normalizer disagree.
    #[error("structural invariant violated in {provider} normalizer: {detail}")]
    StructuralInvariantViolation { provider: ProviderType, detail: String },
}

impl NormalizeError {
    pub fn violation(provider: ProviderType, detail: impl Into<String>) -> Self {
        Self::StructuralInvariantViolation {
            provider,
            detail: detail.into(),
        }
    }

    /// A normalizer received another provider's record.
    pub fn record_mismatch(provider: ProviderType, contribution: &Contribution) -> Self {
        Self::violation(
            provider,
            format!(
                "expected its own record, got {} tagged {}",
                contribution.secured_shared_data.describe(),
                contribution.provider_type
            ),
        )
    }

    pub fn malformed_fragment(provider: ProviderType, violation: GraphViolation) -> Self {
        Self::violation(provider, violation.to_string())
    }
}

/// The contract provider normalizers implement.
///
/// Implementations are stateless and pure: normalizing the same
/// contribution twice yields equal fragments.
pub trait Normalizer: Send + Sync {
    /// Unique identifier, used in logs
    fn id(&self) -> &str;

    /// The provider tag this normalizer is registered under
    fn provider_type(&self) -> ProviderType;

    /// Build the fragment for one contribution.
    ///
    /// If the secured payload is not this provider's record, return
    /// `NormalizeError::StructuralInvariantViolation`.
    fn normalize(&self, contribution: &Contribution) -> Result<Fragment, NormalizeError>;
}

/// Account metadata shared by every provider.
pub fn account_meta(contribution: &Contribution) -> AccountMeta {
    AccountMeta {
        data_type: contribution.provider_type.as_str().to_string(),
        witnesses: contribution.witnesses.clone(),
        account_username: contribution.account_username.clone(),
    }
}
