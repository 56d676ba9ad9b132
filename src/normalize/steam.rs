//! Steam: one row per owned game

use super::traits::{account_meta, NormalizeError, Normalizer};
use crate::graph::records::{SteamAccount, SteamGame};
use crate::graph::{Entity, Fragment};
use crate::model::{Contribution, ProviderType, SecuredData};

pub struct SteamNormalizer;

impl Normalizer for SteamNormalizer {
    fn id(&self) -> &str {
        "steam"
    }

    fn provider_type(&self) -> ProviderType {
        ProviderType::Steam
    }

    fn normalize(&self, contribution: &Contribution) -> Result<Fragment, NormalizeError> {
        let SecuredData::Steam(data) = &contribution.secured_shared_data else {
            return Err(NormalizeError::record_mismatch(ProviderType::Steam, contribution));
        };

        let mut fragment = Fragment::new();
        let account = fragment.push(Entity::SteamAccount(SteamAccount {
            meta: account_meta(contribution),
            user_id: data.user_id.clone(),
        }));

        for game in &data.owned_games {
            fragment.push(Entity::SteamGame(SteamGame {
                account,
                game_name: game.clone(),
            }));
        }

        Ok(fragment)
    }
}
