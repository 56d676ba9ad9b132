//! Output records, one struct per relational table
//!
//! Accounts flatten the shared contribution metadata; details carry an
//! `EntityRef` to their owner instead of a foreign key.

use super::entity::EntityRef;
use serde::{Deserialize, Serialize};

/// Contribution metadata copied onto every account row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountMeta {
    /// Declared provider tag, e.g. `"ZOMATO"`
    pub data_type: String,
    pub witnesses: String,
    pub account_username: String,
}

// === Zomato ===

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZomatoAccount {
    #[serde(flatten)]
    pub meta: AccountMeta,
    pub user_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZomatoOrder {
    pub account: EntityRef,
    pub order_id: String,
    pub total_cost: String,
    pub dish_string: String,
    pub restaurant_url: String,
    pub delivery_address: String,
    pub delivery_status: String,
    pub delivery_message: Option<String>,
    pub delivery_label: String,
}

// === Uber ===

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UberAccount {
    #[serde(flatten)]
    pub meta: AccountMeta,
    pub user_id: String,
    pub username: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UberTrip {
    pub account: EntityRef,
    pub begin_trip_time: String,
    pub dropoff_time: String,
    pub pickup_address: String,
    pub dropoff_address: String,
    pub fare: String,
    pub vehicle_type: String,
}

// === LinkedIn ===

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkedinAccount {
    #[serde(flatten)]
    pub meta: AccountMeta,
    pub linkedin_user_data: serde_json::Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkedinConnection {
    pub account: EntityRef,
    pub name: String,
    pub headline: String,
    pub url: String,
    pub pfp: Option<String>,
}

// === Spotify ===

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpotifyAccount {
    #[serde(flatten)]
    pub meta: AccountMeta,
    pub username: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpotifyPlaylist {
    pub account: EntityRef,
    pub playlist_id: String,
    pub playlist_name: String,
    pub playlist_owner: String,
}

/// A track inside a playlist. Owned by the playlist, not the account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpotifyTrack {
    pub playlist: EntityRef,
    /// Provider playlist id, denormalized from the owning playlist
    pub playlist_id: String,
    pub track_id: String,
    pub track_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpotifyRecentlyPlayed {
    pub account: EntityRef,
    pub track_id: String,
    pub track_name: String,
}

// === Netflix ===

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetflixAccount {
    #[serde(flatten)]
    pub meta: AccountMeta,
    pub profile_name: String,
    pub user_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetflixFavorite {
    pub account: EntityRef,
    pub favorite_item: String,
}

// === Prime Video ===

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrimeVideoAccount {
    #[serde(flatten)]
    pub meta: AccountMeta,
    pub profile_name: String,
    pub user_id: Option<String>,
}

/// Everything watched on one date; one row per date, not per title.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrimeVideoWatchHistory {
    pub account: EntityRef,
    pub watch_date: String,
    pub watched_items: Vec<String>,
}

// === Twitch / Twitter ===

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TwitchAccount {
    #[serde(flatten)]
    pub meta: AccountMeta,
    pub username: String,
    pub followers: i64,
    pub pfp_url: Option<String>,
    pub bio: Option<String>,
    pub socials: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TwitterAccount {
    #[serde(flatten)]
    pub meta: AccountMeta,
    pub user_name: String,
    pub followers: i64,
    pub following: i64,
    pub posts: i64,
    pub user_description: Option<String>,
}

// === Reddit ===

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RedditAccount {
    #[serde(flatten)]
    pub meta: AccountMeta,
    pub username: String,
    pub pfp: Option<String>,
    pub user_id: String,
    pub bio: Option<String>,
    pub social_links: Vec<String>,
    pub post_karma: i64,
    pub comment_karma: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RedditPost {
    pub account: EntityRef,
    pub post_id: String,
    pub title: String,
}

// === Steam ===

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SteamAccount {
    #[serde(flatten)]
    pub meta: AccountMeta,
    pub user_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SteamGame {
    pub account: EntityRef,
    pub game_name: String,
}
