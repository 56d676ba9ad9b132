//! Prime Video: watch history grouped by date
//!
//! One detail row per date key holding that date's full title list;
//! titles are not split into rows of their own.

use super::traits::{account_meta, NormalizeError, Normalizer};
use crate::graph::records::{PrimeVideoAccount, PrimeVideoWatchHistory};
use crate::graph::{Entity, Fragment};
use crate::model::{Contribution, ProviderType, SecuredData};

pub struct PrimeVideoNormalizer;

impl Normalizer for PrimeVideoNormalizer {
    fn id(&self) -> &str {
        "prime-video"
    }

    fn provider_type(&self) -> ProviderType {
        ProviderType::AmazonPrime
    }

    fn normalize(&self, contribution: &Contribution) -> Result<Fragment, NormalizeError> {
        let SecuredData::PrimeVideo(data) = &contribution.secured_shared_data else {
            return Err(NormalizeError::record_mismatch(ProviderType::AmazonPrime, contribution));
        };

        let mut fragment = Fragment::new();
        let account = fragment.push(Entity::PrimeVideoAccount(PrimeVideoAccount {
            meta: account_meta(contribution),
            profile_name: data.profile_name.clone(),
            user_id: data.user_id.clone(),
        }));

        for day in data.watch_history.days() {
            fragment.push(Entity::PrimeVideoWatchHistory(PrimeVideoWatchHistory {
                account,
                watch_date: day.date.clone(),
                watched_items: day.items.clone(),
            }));
        }

        Ok(fragment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::EntityKind;
    use crate::model::PrimeVideoData;
    use serde_json::json;

    fn contribution(history: serde_json::Value) -> Contribution {
        let data: PrimeVideoData = serde_json::from_value(json!({
            "profileName": "Alex P",
            "watchHistory": history
        }))
        .unwrap();
        Contribution::new(ProviderType::AmazonPrime, "w", "prime_alex", SecuredData::PrimeVideo(data))
    }

    // === Scenario: one entity per date, not per title ===
    #[test]
    fn one_detail_per_date_key() {
        let c = contribution(json!({
            "2024-01-01": ["Show A", "Show B"],
            "2024-01-02": ["Show C"]
        }));

        let fragment = PrimeVideoNormalizer.normalize(&c).unwrap();
        assert_eq!(fragment.len(), 3);
        assert_eq!(fragment.count_kind(EntityKind::PrimeVideoWatchHistory), 2);

        let days: Vec<_> = fragment
            .entities()
            .iter()
            .filter_map(|e| match e {
                Entity::PrimeVideoWatchHistory(h) => Some((h.watch_date.as_str(), h.watched_items.len())),
                _ => None,
            })
            .collect();
        assert_eq!(days, vec![("2024-01-01", 2), ("2024-01-02", 1)]);
    }

    #[test]
    fn date_with_no_titles_still_gets_a_row() {
        let fragment = PrimeVideoNormalizer
            .normalize(&contribution(json!({"2024-05-05": []})))
            .unwrap();
        match &fragment.entities()[1] {
            Entity::PrimeVideoWatchHistory(h) => assert!(h.watched_items.is_empty()),
            other => panic!("expected watch history, got {:?}", other),
        }
    }

    #[test]
    fn missing_user_id_stays_absent() {
        let fragment = PrimeVideoNormalizer.normalize(&contribution(json!({}))).unwrap();
        match &fragment.entities()[0] {
            Entity::PrimeVideoAccount(a) => {
                assert_eq!(a.user_id, None);
                assert_eq!(a.meta.data_type, "AMAZON_PRIME");
            }
            other => panic!("expected prime video account, got {:?}", other),
        }
    }
}
