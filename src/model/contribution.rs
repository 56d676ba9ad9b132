//! Validated contribution envelope
//!
//! A contribution is one provider export attributed to one account.
//! The secured payload is already typed by the time a normalizer sees it.

use super::providers::{
    LinkedinData, NetflixData, PrimeVideoData, RedditData, SpotifyData, SteamData, TwitchData,
    TwitterData, UberData, ZomatoData,
};
use serde::{Deserialize, Serialize};

/// Provider type tag carried in a contribution's `type` field.
///
/// Open enumeration: tags this crate does not know are kept verbatim
/// in `Other` so the dispatcher can skip them without failing the batch.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ProviderType {
    Zomato,
    Uber,
    Linkedin,
    Spotify,
    Netflix,
    AmazonPrime,
    Twitch,
    Twitter,
    Reddit,
    Steam,
    Other(String),
}

impl ProviderType {
    /// Every provider with a built-in normalizer.
    pub const KNOWN: [ProviderType; 10] = [
        ProviderType::Zomato,
        ProviderType::Uber,
        ProviderType::Linkedin,
        ProviderType::Spotify,
        ProviderType::Netflix,
        ProviderType::AmazonPrime,
        ProviderType::Twitch,
        ProviderType::Twitter,
        ProviderType::Reddit,
        ProviderType::Steam,
    ];

    /// The wire tag, e.g. `"AMAZON_PRIME"`.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Zomato => "ZOMATO",
            Self::Uber => "UBER",
            Self::Linkedin => "LINKEDIN",
            Self::Spotify => "SPOTIFY",
            Self::Netflix => "NETFLIX",
            Self::AmazonPrime => "AMAZON_PRIME",
            Self::Twitch => "TWITCH",
            Self::Twitter => "TWITTER",
            Self::Reddit => "REDDIT",
            Self::Steam => "STEAM",
            Self::Other(tag) => tag,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl From<&str> for ProviderType {
    fn from(tag: &str) -> Self {
        match tag {
            "ZOMATO" => Self::Zomato,
            "UBER" => Self::Uber,
            "LINKEDIN" => Self::Linkedin,
            "SPOTIFY" => Self::Spotify,
            "NETFLIX" => Self::Netflix,
            "AMAZON_PRIME" => Self::AmazonPrime,
            "TWITCH" => Self::Twitch,
            "TWITTER" => Self::Twitter,
            "REDDIT" => Self::Reddit,
            "STEAM" => Self::Steam,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for ProviderType {
    fn from(tag: String) -> Self {
        Self::from(tag.as_str())
    }
}

impl From<ProviderType> for String {
    fn from(provider: ProviderType) -> Self {
        provider.as_str().to_string()
    }
}

impl std::fmt::Display for ProviderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Provider-specific payload, typed by the validator.
#[derive(Debug, Clone, PartialEq)]
pub enum SecuredData {
    Zomato(ZomatoData),
    Uber(UberData),
    Linkedin(LinkedinData),
    Spotify(SpotifyData),
    Netflix(NetflixData),
    PrimeVideo(PrimeVideoData),
    Twitch(TwitchData),
    Twitter(TwitterData),
    Reddit(RedditData),
    Steam(SteamData),
    /// Payload of a provider type with no record schema; kept untouched.
    Unrecognized(serde_json::Value),
}

impl SecuredData {
    /// The provider whose record shape this payload holds, if any.
    pub fn provider_type(&self) -> Option<ProviderType> {
        let provider = match self {
            Self::Zomato(_) => ProviderType::Zomato,
            Self::Uber(_) => ProviderType::Uber,
            Self::Linkedin(_) => ProviderType::Linkedin,
            Self::Spotify(_) => ProviderType::Spotify,
            Self::Netflix(_) => ProviderType::Netflix,
            Self::PrimeVideo(_) => ProviderType::AmazonPrime,
            Self::Twitch(_) => ProviderType::Twitch,
            Self::Twitter(_) => ProviderType::Twitter,
            Self::Reddit(_) => ProviderType::Reddit,
            Self::Steam(_) => ProviderType::Steam,
            Self::Unrecognized(_) => return None,
        };
        Some(provider)
    }

    /// Short label for logs and error messages.
    pub fn describe(&self) -> String {
        match self.provider_type() {
            Some(provider) => format!("{} record", provider),
            None => "unrecognized record".to_string(),
        }
    }
}

/// One validated unit of work for the dispatcher.
///
/// `walletAddress` and `claimedDate` are checked by the validator but
/// not carried here; nothing downstream stores them.
#[derive(Debug, Clone, PartialEq)]
pub struct Contribution {
    pub provider_type: ProviderType,
    pub witnesses: String,
    pub account_username: String,
    pub secured_shared_data: SecuredData,
}

impl Contribution {
    pub fn new(
        provider_type: ProviderType,
        witnesses: impl Into<String>,
        account_username: impl Into<String>,
        secured_shared_data: SecuredData,
    ) -> Self {
        Self {
            provider_type,
            witnesses: witnesses.into(),
            account_username: account_username.into(),
            secured_shared_data,
        }
    }
}

/// A contribution in the oldest, Zomato-only shape.
///
/// The payload is always a Zomato record; the declared type is kept as
/// given because legacy exports reused the tag loosely.
#[derive(Debug, Clone, PartialEq)]
pub struct LegacyContribution {
    pub provider_type: ProviderType,
    pub witnesses: String,
    pub account_username: String,
    pub secured_shared_data: ZomatoData,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_tags_round_trip_through_strings() {
        for provider in ProviderType::KNOWN {
            let tag = provider.as_str().to_string();
            assert_eq!(ProviderType::from(tag.as_str()), provider);
            assert!(provider.is_known());
        }
    }

    #[test]
    fn unknown_tag_is_kept_verbatim() {
        let provider = ProviderType::from("UNKNOWN_PROVIDER");
        assert_eq!(provider, ProviderType::Other("UNKNOWN_PROVIDER".to_string()));
        assert_eq!(provider.to_string(), "UNKNOWN_PROVIDER");
        assert!(!provider.is_known());
    }

    #[test]
    fn tags_are_case_sensitive() {
        assert!(!ProviderType::from("zomato").is_known());
    }

    #[test]
    fn provider_type_serializes_as_plain_tag() {
        let json = serde_json::to_string(&ProviderType::AmazonPrime).unwrap();
        assert_eq!(json, "\"AMAZON_PRIME\"");
        let back: ProviderType = serde_json::from_str("\"STEAM\"").unwrap();
        assert_eq!(back, ProviderType::Steam);
    }

    #[test]
    fn unrecognized_payload_has_no_provider() {
        let data = SecuredData::Unrecognized(serde_json::json!({"x": 1}));
        assert_eq!(data.provider_type(), None);
        assert_eq!(data.describe(), "unrecognized record");
    }
}
