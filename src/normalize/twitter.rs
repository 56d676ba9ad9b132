//! Twitter: single account entity, no details

use super::traits::{account_meta, NormalizeError, Normalizer};
use crate::graph::records::TwitterAccount;
use crate::graph::{Entity, Fragment};
use crate::model::{Contribution, ProviderType, SecuredData};

pub struct TwitterNormalizer;

impl Normalizer for TwitterNormalizer {
    fn id(&self) -> &str {
        "twitter"
    }

    fn provider_type(&self) -> ProviderType {
        ProviderType::Twitter
    }

    fn normalize(&self, contribution: &Contribution) -> Result<Fragment, NormalizeError> {
        let SecuredData::Twitter(data) = &contribution.secured_shared_data else {
            return Err(NormalizeError::record_mismatch(ProviderType::Twitter, contribution));
        };

        let mut fragment = Fragment::new();
        fragment.push(Entity::TwitterAccount(TwitterAccount {
            meta: account_meta(contribution),
            user_name: data.user_name.clone(),
            followers: data.followers,
            following: data.following,
            posts: data.posts,
            user_description: data.user_description.clone(),
        }));
        Ok(fragment)
    }
}
