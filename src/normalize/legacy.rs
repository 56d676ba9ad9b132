//! Legacy path for Zomato-only payloads
//!
//! Old exports share the Zomato record shape but arrive outside the
//! multi-provider envelope. They map to the same account/order rows.

use super::traits::NormalizeError;
use super::zomato::zomato_fragment;
use crate::graph::{AccountMeta, Fragment};
use crate::model::{LegacyContribution, ProviderType};

/// Normalize a legacy contribution with the Zomato field mapping.
///
/// The declared tag is copied onto the account as given.
pub fn normalize_legacy(contribution: &LegacyContribution) -> Result<Fragment, NormalizeError> {
    let meta = AccountMeta {
        data_type: contribution.provider_type.as_str().to_string(),
        witnesses: contribution.witnesses.clone(),
        account_username: contribution.account_username.clone(),
    };
    let fragment = zomato_fragment(meta, &contribution.secured_shared_data);
    fragment
        .verify_fragment()
        .map_err(|v| NormalizeError::malformed_fragment(ProviderType::Zomato, v))?;
    tracing::debug!(
        account = %contribution.account_username,
        entities = fragment.len(),
        "legacy contribution normalized"
    );
    Ok(fragment)
}
