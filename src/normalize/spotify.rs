//! Spotify: two independent child collections on one account
//!
//! - playlists, each immediately followed by its tracks (owned by the playlist)
//! - recently played tracks, owned by the account

use super::traits::{account_meta, NormalizeError, Normalizer};
use crate::graph::records::{SpotifyAccount, SpotifyPlaylist, SpotifyRecentlyPlayed, SpotifyTrack};
use crate::graph::{Entity, Fragment};
use crate::model::{Contribution, ProviderType, SecuredData};

pub struct SpotifyNormalizer;

impl Normalizer for SpotifyNormalizer {
    fn id(&self) -> &str {
        "spotify"
    }

    fn provider_type(&self) -> ProviderType {
        ProviderType::Spotify
    }

    fn normalize(&self, contribution: &Contribution) -> Result<Fragment, NormalizeError> {
        let SecuredData::Spotify(data) = &contribution.secured_shared_data else {
            return Err(NormalizeError::record_mismatch(ProviderType::Spotify, contribution));
        };

        let mut fragment = Fragment::new();
        let account = fragment.push(Entity::SpotifyAccount(SpotifyAccount {
            meta: account_meta(contribution),
            username: data.username.clone(),
        }));

        for playlist in &data.user_playlists {
            let owner = fragment.push(Entity::SpotifyPlaylist(SpotifyPlaylist {
                account,
                playlist_id: playlist.playlist_id.clone(),
                playlist_name: playlist.playlist_name.clone(),
                playlist_owner: playlist.playlist_owner.clone(),
            }));

            for track in &playlist.tracks {
                fragment.push(Entity::SpotifyTrack(SpotifyTrack {
                    playlist: owner,
                    playlist_id: playlist.playlist_id.clone(),
                    track_id: track.track_id.clone(),
                    track_name: track.track_name.clone(),
                }));
            }
        }

        for track in &data.recently_played {
            fragment.push(Entity::SpotifyRecentlyPlayed(SpotifyRecentlyPlayed {
                account,
                track_id: track.track_id.clone(),
                track_name: track.track_name.clone(),
            }));
        }

        Ok(fragment)
    }
}
