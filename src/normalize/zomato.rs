//! Zomato: one account, one order per delivered order
//!
//! Delivery details are flattened onto the order row.

use super::traits::{account_meta, NormalizeError, Normalizer};
use crate::graph::records::{ZomatoAccount, ZomatoOrder};
use crate::graph::{AccountMeta, Entity, Fragment};
use crate::model::{Contribution, ProviderType, SecuredData, ZomatoData};

pub struct ZomatoNormalizer;

impl Normalizer for ZomatoNormalizer {
    fn id(&self) -> &str {
        "zomato"
    }

    fn provider_type(&self) -> ProviderType {
        ProviderType::Zomato
    }

    fn normalize(&self, contribution: &Contribution) -> Result<Fragment, NormalizeError> {
        let SecuredData::Zomato(data) = &contribution.secured_shared_data else {
            return Err(NormalizeError::record_mismatch(ProviderType::Zomato, contribution));
        };
        Ok(zomato_fragment(account_meta(contribution), data))
    }
}

/// Field mapping shared with the legacy path.
pub(crate) fn zomato_fragment(meta: AccountMeta, data: &ZomatoData) -> Fragment {
    let mut fragment = Fragment::new();
    let account = fragment.push(Entity::ZomatoAccount(ZomatoAccount {
        meta,
        user_id: data.userid.clone(),
    }));

    for order in &data.orders {
        let delivery = &order.delivery_details;
        fragment.push(Entity::ZomatoOrder(ZomatoOrder {
            account,
            order_id: order.order_id.clone(),
            total_cost: order.total_cost.clone(),
            dish_string: order.dish_string.clone(),
            restaurant_url: order.restaurant_url.clone(),
            delivery_address: delivery.delivery_address.clone(),
            delivery_status: delivery.delivery_status.clone(),
            delivery_message: delivery.delivery_message.clone(),
            delivery_label: delivery.delivery_label.clone(),
        }));
    }

    fragment
}
