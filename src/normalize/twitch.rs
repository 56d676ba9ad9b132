//! Twitch: single account entity, no details

use super::traits::{account_meta, NormalizeError, Normalizer};
use crate::graph::records::TwitchAccount;
use crate::graph::{Entity, Fragment};
use crate::model::{Contribution, ProviderType, SecuredData};

pub struct TwitchNormalizer;

impl Normalizer for TwitchNormalizer {
    fn id(&self) -> &str {
        "twitch"
    }

    fn provider_type(&self) -> ProviderType {
        ProviderType::Twitch
    }

    fn normalize(&self, contribution: &Contribution) -> Result<Fragment, NormalizeError> {
        let SecuredData::Twitch(data) = &contribution.secured_shared_data else {
            return Err(NormalizeError::record_mismatch(ProviderType::Twitch, contribution));
        };

        let mut fragment = Fragment::new();
        fragment.push(Entity::TwitchAccount(TwitchAccount {
            meta: account_meta(contribution),
            username: data.username.clone(),
            followers: data.followers,
            pfp_url: data.pfp_url.clone(),
            bio: data.bio.clone(),
            socials: data.socials.clone(),
        }));
        Ok(fragment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TwitchData;

    #[test]
    fn single_entity_carries_all_fields() {
        let c = Contribution::new(
            ProviderType::Twitch,
            "w",
            "streamer",
            SecuredData::Twitch(TwitchData {
                username: "streamer".to_string(),
                followers: 1200,
                pfp_url: None,
                bio: Some("speedruns".to_string()),
                socials: vec!["https://x.com/streamer".to_string()],
            }),
        );

        let fragment = TwitchNormalizer.normalize(&c).unwrap();
        assert_eq!(fragment.len(), 1);
        match &fragment.entities()[0] {
            Entity::TwitchAccount(a) => {
                assert_eq!(a.followers, 1200);
                assert_eq!(a.pfp_url, None);
                assert_eq!(a.bio.as_deref(), Some("speedruns"));
                assert_eq!(a.socials.len(), 1);
            }
            other => panic!("expected twitch account, got {:?}", other),
        }
    }
}
