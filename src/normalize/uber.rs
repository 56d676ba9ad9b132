//! Uber: account with user id and username, one row per trip

use super::traits::{account_meta, NormalizeError, Normalizer};
use crate::graph::records::{UberAccount, UberTrip};
use crate::graph::{Entity, Fragment};
use crate::model::{Contribution, ProviderType, SecuredData};

pub struct UberNormalizer;

impl Normalizer for UberNormalizer {
    fn id(&self) -> &str {
        "uber"
    }

    fn provider_type(&self) -> ProviderType {
        ProviderType::Uber
    }

    fn normalize(&self, contribution: &Contribution) -> Result<Fragment, NormalizeError> {
        let SecuredData::Uber(data) = &contribution.secured_shared_data else {
            return Err(NormalizeError::record_mismatch(ProviderType::Uber, contribution));
        };

        let mut fragment = Fragment::new();
        let account = fragment.push(Entity::UberAccount(UberAccount {
            meta: account_meta(contribution),
            user_id: data.userid.clone(),
            username: data.username.clone(),
        }));

        for trip in &data.trips {
            fragment.push(Entity::UberTrip(UberTrip {
                account,
                begin_trip_time: trip.begin_trip_time.clone(),
                dropoff_time: trip.dropoff_time.clone(),
                pickup_address: trip.pickup_address.clone(),
                dropoff_address: trip.dropoff_address.clone(),
                fare: trip.fare.clone(),
                vehicle_type: trip.vehicle_type.clone(),
            }));
        }

        Ok(fragment)
    }
}
