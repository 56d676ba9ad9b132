//! Netflix: profile account, one row per favorite title

use super::traits::{account_meta, NormalizeError, Normalizer};
use crate::graph::records::{NetflixAccount, NetflixFavorite};
use crate::graph::{Entity, Fragment};
use crate::model::{Contribution, ProviderType, SecuredData};

pub struct NetflixNormalizer;

impl Normalizer for NetflixNormalizer {
    fn id(&self) -> &str {
        "netflix"
    }

    fn provider_type(&self) -> ProviderType {
        ProviderType::Netflix
    }

    fn normalize(&self, contribution: &Contribution) -> Result<Fragment, NormalizeError> {
        let SecuredData::Netflix(data) = &contribution.secured_shared_data else {
            return Err(NormalizeError::record_mismatch(ProviderType::Netflix, contribution));
        };

        let mut fragment = Fragment::new();
        let account = fragment.push(Entity::NetflixAccount(NetflixAccount {
            meta: account_meta(contribution),
            profile_name: data.profile_name.clone(),
            user_id: data.user_id.clone(),
        }));

        for title in &data.favorites {
            fragment.push(Entity::NetflixFavorite(NetflixFavorite {
                account,
                favorite_item: title.clone(),
            }));
        }

        Ok(fragment)
    }
}
