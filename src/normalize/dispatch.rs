//! Dispatcher: routes a contribution to the normalizer for its tag
//!
//! Exactly one normalizer per provider tag. A tag with no normalizer
//! yields an empty fragment so one unknown provider never sinks the
//! rest of a batch.

use super::traits::{NormalizeError, Normalizer};
use super::{
    LinkedinNormalizer, NetflixNormalizer, PrimeVideoNormalizer, RedditNormalizer,
    SpotifyNormalizer, SteamNormalizer, TwitchNormalizer, TwitterNormalizer, UberNormalizer,
    ZomatoNormalizer,
};
use crate::graph::Fragment;
use crate::model::{Contribution, ProviderType};
use std::collections::HashMap;
use std::sync::Arc;

/// Maps provider tags to normalizers.
#[derive(Clone, Default)]
pub struct Dispatcher {
    normalizers: HashMap<ProviderType, Arc<dyn Normalizer>>,
}

impl Dispatcher {
    /// A dispatcher with nothing registered; every tag is skipped.
    pub fn new() -> Self {
        Self {
            normalizers: HashMap::new(),
        }
    }

    /// A dispatcher with every built-in provider registered.
    pub fn with_defaults() -> Self {
        let mut dispatcher = Self::new();
        dispatcher.register(Arc::new(ZomatoNormalizer));
        dispatcher.register(Arc::new(UberNormalizer));
        dispatcher.register(Arc::new(LinkedinNormalizer));
        dispatcher.register(Arc::new(SpotifyNormalizer));
        dispatcher.register(Arc::new(NetflixNormalizer));
        dispatcher.register(Arc::new(PrimeVideoNormalizer));
        dispatcher.register(Arc::new(TwitchNormalizer));
        dispatcher.register(Arc::new(TwitterNormalizer));
        dispatcher.register(Arc::new(RedditNormalizer));
        dispatcher.register(Arc::new(SteamNormalizer));
        dispatcher
    }

    /// Register a normalizer under its provider tag.
    ///
    /// Returns the normalizer previously registered for that tag, if any.
    pub fn register(&mut self, normalizer: Arc<dyn Normalizer>) -> Option<Arc<dyn Normalizer>> {
        self.normalizers.insert(normalizer.provider_type(), normalizer)
    }

    pub fn is_registered(&self, provider: &ProviderType) -> bool {
        self.normalizers.contains_key(provider)
    }

    /// Registered tags, sorted for stable output.
    pub fn provider_types(&self) -> Vec<ProviderType> {
        let mut providers: Vec<_> = self.normalizers.keys().cloned().collect();
        providers.sort_by(|a, b| a.as_str().cmp(b.as_str()));
        providers
    }

    /// Normalize one contribution.
    ///
    /// Unknown tags return an empty fragment. Fragments from registered
    /// normalizers are checked before they are returned, so a faulty
    /// normalizer surfaces as a structural violation rather than a bad graph.
    pub fn dispatch(&self, contribution: &Contribution) -> Result<Fragment, NormalizeError> {
        let provider = &contribution.provider_type;
        let Some(normalizer) = self.normalizers.get(provider) else {
            tracing::debug!(provider = %provider, "no normalizer registered, skipping contribution");
            return Ok(Fragment::new());
        };

        let fragment = normalizer.normalize(contribution)?;
        fragment
            .verify_fragment()
            .map_err(|v| NormalizeError::malformed_fragment(provider.clone(), v))?;
        if fragment.is_empty() {
            return Err(NormalizeError::violation(
                provider.clone(),
                "normalizer produced no account entity",
            ));
        }

        tracing::debug!(
            normalizer = normalizer.id(),
            entities = fragment.len(),
            "normalized contribution"
        );
        Ok(fragment)
    }
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("providers", &self.provider_types())
            .finish()
    }
}
