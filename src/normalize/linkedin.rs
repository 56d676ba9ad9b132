//! LinkedIn: profile blob on the account, one row per connection

use super::traits::{account_meta, NormalizeError, Normalizer};
use crate::graph::records::{LinkedinAccount, LinkedinConnection};
use crate::graph::{Entity, Fragment};
use crate::model::{Contribution, ProviderType, SecuredData};

pub struct LinkedinNormalizer;

impl Normalizer for LinkedinNormalizer {
    fn id(&self) -> &str {
        "linkedin"
    }

    fn provider_type(&self) -> ProviderType {
        ProviderType::Linkedin
    }

    fn normalize(&self, contribution: &Contribution) -> Result<Fragment, NormalizeError> {
        let SecuredData::Linkedin(data) = &contribution.secured_shared_data else {
            return Err(NormalizeError::record_mismatch(ProviderType::Linkedin, contribution));
        };

        let mut fragment = Fragment::new();
        let account = fragment.push(Entity::LinkedinAccount(LinkedinAccount {
            meta: account_meta(contribution),
            linkedin_user_data: data.linkedin_user_data.clone(),
        }));

        for connection in &data.connections_list {
            fragment.push(Entity::LinkedinConnection(LinkedinConnection {
                account,
                name: connection.name.clone(),
                headline: connection.headline.clone(),
                url: connection.url.clone(),
                pfp: connection.pfp.clone(),
            }));
        }

        Ok(fragment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{LinkedinConnectionData, LinkedinData};
    use serde_json::json;

    #[test]
    fn connections_keep_missing_pictures_absent() {
        let c = Contribution::new(
            ProviderType::Linkedin,
            "w",
            "pro",
            SecuredData::Linkedin(LinkedinData {
                linkedin_user_data: json!({"headline": "Engineer"}),
                connections_list: vec![
                    LinkedinConnectionData {
                        name: "Ada".to_string(),
                        headline: "Analyst".to_string(),
                        url: "https://linkedin.com/in/ada".to_string(),
                        pfp: Some("https://img/ada.png".to_string()),
                    },
                    LinkedinConnectionData {
                        name: "Bob".to_string(),
                        headline: "Builder".to_string(),
                        url: "https://linkedin.com/in/bob".to_string(),
                        pfp: None,
                    },
                ],
            }),
        );

        let fragment = LinkedinNormalizer.normalize(&c).unwrap();
        assert_eq!(fragment.len(), 3);

        let pictures: Vec<_> = fragment
            .entities()
            .iter()
            .filter_map(|e| match e {
                Entity::LinkedinConnection(conn) => Some(conn.pfp.clone()),
                _ => None,
            })
            .collect();
        assert_eq!(pictures, vec![Some("https://img/ada.png".to_string()), None]);

        match &fragment.entities()[0] {
            Entity::LinkedinAccount(a) => assert_eq!(a.linkedin_user_data["headline"], "Engineer"),
            other => panic!("expected linkedin account, got {:?}", other),
        }
    }
}
