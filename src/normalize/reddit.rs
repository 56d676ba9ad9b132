//! Reddit: karma folded into the account, one row per post

use super::traits::{account_meta, NormalizeError, Normalizer};
use crate::graph::records::{RedditAccount, RedditPost};
use crate::graph::{Entity, Fragment};
use crate::model::{Contribution, ProviderType, SecuredData};

pub struct RedditNormalizer;

impl Normalizer for RedditNormalizer {
    fn id(&self) -> &str {
        "reddit"
    }

    fn provider_type(&self) -> ProviderType {
        ProviderType::Reddit
    }

    fn normalize(&self, contribution: &Contribution) -> Result<Fragment, NormalizeError> {
        let SecuredData::Reddit(data) = &contribution.secured_shared_data else {
            return Err(NormalizeError::record_mismatch(ProviderType::Reddit, contribution));
        };

        let mut fragment = Fragment::new();
        let account = fragment.push(Entity::RedditAccount(RedditAccount {
            meta: account_meta(contribution),
            username: data.username.clone(),
            pfp: data.pfp.clone(),
            user_id: data.userid.clone(),
            bio: data.bio.clone(),
            social_links: data.social_links.clone(),
            post_karma: data.karma.post_karma,
            comment_karma: data.karma.comment_karma,
        }));

        for post in &data.posts {
            fragment.push(Entity::RedditPost(RedditPost {
                account,
                post_id: post.id.clone(),
                title: post.title.clone(),
            }));
        }

        Ok(fragment)
    }
}
