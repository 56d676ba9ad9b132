//! Payload validation
//!
//! Turns raw JSON contributions into typed [`Contribution`] records.
//! Normalizers only ever see validated input; anything malformed is
//! rejected here with the JSON path of the offending field.

use crate::model::{
    Contribution, LegacyContribution, ProviderType, SecuredData, ZomatoData,
};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

/// A payload or contribution that does not match its schema.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("validation failed at {path}: {cause}")]
pub struct ValidationError {
    /// JSON path of the failing value, e.g. `contributions[2].securedSharedData`
    pub path: String,
    pub cause: String,
}

impl ValidationError {
    pub fn new(path: impl Into<String>, cause: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            cause: cause.into(),
        }
    }
}

/// The validation step in front of the normalizers.
///
/// Implementations must be pure: the same raw value always yields the
/// same record or the same error.
pub trait PayloadValidator: Send + Sync {
    /// Validate one multi-provider contribution found at `path`.
    fn validate_contribution(&self, raw: &Value, path: &str) -> Result<Contribution, ValidationError>;

    /// Validate one contribution in the legacy Zomato-only shape.
    fn validate_legacy(&self, raw: &Value, path: &str) -> Result<LegacyContribution, ValidationError>;

    /// Validate the legacy envelope's top-level fields (`walletAddress`,
    /// `claimDate`). The entries are checked separately with
    /// `validate_legacy`.
    fn validate_legacy_envelope(&self, raw: &Value) -> Result<(), ValidationError>;
}

/// Contribution fields shared by every format version.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawContribution {
    #[serde(rename = "type")]
    provider_type: String,
    witnesses: String,
    #[serde(rename = "AccountUsername")]
    account_username: String,
    // Checked for type when present, then dropped.
    #[serde(default)]
    #[allow(dead_code)]
    wallet_address: Option<String>,
    #[serde(default)]
    #[allow(dead_code)]
    claimed_date: Option<String>,
    secured_shared_data: Value,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawLegacyEnvelope {
    #[serde(default)]
    #[allow(dead_code)]
    wallet_address: Option<String>,
    #[serde(default)]
    #[allow(dead_code)]
    claim_date: Option<String>,
}

/// `PayloadValidator` backed by the serde record definitions in [`crate::model`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SerdeValidator;

impl SerdeValidator {
    pub fn new() -> Self {
        Self
    }

    fn envelope(raw: &Value, path: &str) -> Result<RawContribution, ValidationError> {
        if !raw.is_object() {
            return Err(ValidationError::new(path, "contribution must be an object"));
        }
        RawContribution::deserialize(raw).map_err(|e| ValidationError::new(path, e.to_string()))
    }

    fn typed<T: DeserializeOwned>(raw: &Value, path: &str) -> Result<T, ValidationError> {
        let path = format!("{}.securedSharedData", path);
        T::deserialize(raw).map_err(|e| ValidationError::new(path, e.to_string()))
    }

    fn secured_data(
        provider: &ProviderType,
        raw: &Value,
        path: &str,
    ) -> Result<SecuredData, ValidationError> {
        let data = match provider {
            ProviderType::Zomato => SecuredData::Zomato(Self::typed(raw, path)?),
            ProviderType::Uber => SecuredData::Uber(Self::typed(raw, path)?),
            ProviderType::Linkedin => SecuredData::Linkedin(Self::typed(raw, path)?),
            ProviderType::Spotify => SecuredData::Spotify(Self::typed(raw, path)?),
            ProviderType::Netflix => SecuredData::Netflix(Self::typed(raw, path)?),
            ProviderType::AmazonPrime => SecuredData::PrimeVideo(Self::typed(raw, path)?),
            ProviderType::Twitch => SecuredData::Twitch(Self::typed(raw, path)?),
            ProviderType::Twitter => SecuredData::Twitter(Self::typed(raw, path)?),
            ProviderType::Reddit => SecuredData::Reddit(Self::typed(raw, path)?),
            ProviderType::Steam => SecuredData::Steam(Self::typed(raw, path)?),
            ProviderType::Other(_) => SecuredData::Unrecognized(raw.clone()),
        };
        Ok(data)
    }
}

impl PayloadValidator for SerdeValidator {
    fn validate_contribution(&self, raw: &Value, path: &str) -> Result<Contribution, ValidationError> {
        let envelope = Self::envelope(raw, path)?;
        if envelope.provider_type.is_empty() {
            return Err(ValidationError::new(format!("{}.type", path), "provider type is empty"));
        }
        let provider_type = ProviderType::from(envelope.provider_type.as_str());
        let secured_shared_data =
            Self::secured_data(&provider_type, &envelope.secured_shared_data, path)?;

        Ok(Contribution {
            provider_type,
            witnesses: envelope.witnesses,
            account_username: envelope.account_username,
            secured_shared_data,
        })
    }

    fn validate_legacy(&self, raw: &Value, path: &str) -> Result<LegacyContribution, ValidationError> {
        let envelope = Self::envelope(raw, path)?;
        let secured_shared_data: ZomatoData = Self::typed(&envelope.secured_shared_data, path)?;

        Ok(LegacyContribution {
            provider_type: ProviderType::from(envelope.provider_type.as_str()),
            witnesses: envelope.witnesses,
            account_username: envelope.account_username,
            secured_shared_data,
        })
    }

    fn validate_legacy_envelope(&self, raw: &Value) -> Result<(), ValidationError> {
        RawLegacyEnvelope::deserialize(raw)
            .map(|_| ())
            .map_err(|e| ValidationError::new("$", e.to_string()))
    }
}

/// The `contributions` list of an envelope payload.
pub fn contribution_list(raw: &Value) -> Result<&[Value], ValidationError> {
    raw.get("contributions")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .ok_or_else(|| ValidationError::new("contributions", "expected an array of contributions"))
}

/// Path label for the contribution at `index`.
pub fn contribution_path(index: usize) -> String {
    format!("contributions[{}]", index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn steam(secured: Value) -> Value {
        json!({
            "type": "STEAM",
            "witnesses": "https://example.com/steam-proof",
            "walletAddress": "0xabc",
            "AccountUsername": "gamer_jane",
            "claimedDate": "2025-08-15T12:00:00Z",
            "securedSharedData": secured
        })
    }

    #[test]
    fn valid_contribution_is_typed_by_its_tag() {
        let raw = steam(json!({"userId": "steam_1", "ownedGames": ["Elden Ring"]}));
        let c = SerdeValidator.validate_contribution(&raw, "contributions[0]").unwrap();

        assert_eq!(c.provider_type, ProviderType::Steam);
        assert_eq!(c.account_username, "gamer_jane");
        match c.secured_shared_data {
            SecuredData::Steam(data) => assert_eq!(data.owned_games, vec!["Elden Ring"]),
            other => panic!("expected steam record, got {:?}", other),
        }
    }

    #[test]
    fn missing_nested_field_reports_secured_data_path() {
        let raw = steam(json!({"userId": "steam_1"}));
        let err = SerdeValidator
            .validate_contribution(&raw, "contributions[3]")
            .unwrap_err();

        assert_eq!(err.path, "contributions[3].securedSharedData");
        assert!(err.cause.contains("ownedGames"), "cause was: {}", err.cause);
    }

    #[test]
    fn missing_envelope_field_reports_contribution_path() {
        let raw = json!({"type": "STEAM", "witnesses": "w", "securedSharedData": {}});
        let err = SerdeValidator.validate_contribution(&raw, "contributions[0]").unwrap_err();
        assert_eq!(err.path, "contributions[0]");
        assert!(err.cause.contains("AccountUsername"));
    }

    #[test]
    fn wallet_address_must_be_a_string_when_present() {
        let mut raw = steam(json!({"userId": "s", "ownedGames": []}));
        raw["walletAddress"] = json!(42);
        assert!(SerdeValidator.validate_contribution(&raw, "c").is_err());
    }

    #[test]
    fn unknown_tag_keeps_raw_payload() {
        let raw = json!({
            "type": "UNKNOWN_PROVIDER",
            "witnesses": "w",
            "AccountUsername": "x",
            "securedSharedData": {"anything": [1, 2]}
        });
        let c = SerdeValidator.validate_contribution(&raw, "c").unwrap();
        assert_eq!(c.provider_type, ProviderType::Other("UNKNOWN_PROVIDER".to_string()));
        assert_eq!(
            c.secured_shared_data,
            SecuredData::Unrecognized(json!({"anything": [1, 2]}))
        );
    }

    #[test]
    fn empty_type_is_rejected() {
        let raw = json!({
            "type": "",
            "witnesses": "w",
            "AccountUsername": "x",
            "securedSharedData": {}
        });
        let err = SerdeValidator.validate_contribution(&raw, "contributions[1]").unwrap_err();
        assert_eq!(err.path, "contributions[1].type");
    }

    #[test]
    fn legacy_contribution_always_reads_zomato_record() {
        let raw = json!({
            "type": "ZOMATO",
            "witnesses": "w",
            "AccountUsername": "foodie",
            "securedSharedData": {"userid": "z1", "orders": []}
        });
        let legacy = SerdeValidator.validate_legacy(&raw, "$").unwrap();
        assert_eq!(legacy.secured_shared_data.userid, "z1");
        assert_eq!(legacy.provider_type, ProviderType::Zomato);
    }

    #[test]
    fn non_object_contribution_is_rejected() {
        let err = SerdeValidator.validate_contribution(&json!("ZOMATO"), "contributions[0]").unwrap_err();
        assert_eq!(err.cause, "contribution must be an object");
    }

    #[test]
    fn legacy_envelope_checks_top_level_field_types() {
        assert!(SerdeValidator
            .validate_legacy_envelope(&json!({"walletAddress": "0x1", "claimDate": "2025-01-01", "contributions": []}))
            .is_ok());
        assert!(SerdeValidator
            .validate_legacy_envelope(&json!({"claimDate": 5, "contributions": []}))
            .is_err());
    }

    #[test]
    fn contribution_list_requires_array() {
        assert!(contribution_list(&json!({"contributions": {}})).is_err());
        assert_eq!(contribution_list(&json!({"contributions": [1]})).unwrap().len(), 1);
        assert_eq!(contribution_path(4), "contributions[4]");
    }
}
