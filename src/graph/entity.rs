//! Entity: one node of the normalized graph
//!
//! Parent links are positions in the owning graph, never live references
//! and never database keys. Keys are assigned downstream by the store.

use super::records::*;
use serde::{Deserialize, Serialize};

/// Position of an entity inside its graph.
///
/// Only meaningful relative to the graph that issued it. Appending a
/// fragment into a larger graph rebases the fragment's refs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityRef(usize);

impl EntityRef {
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0
    }

    pub(crate) fn shifted(self, offset: usize) -> Self {
        Self(self.0 + offset)
    }
}

impl std::fmt::Display for EntityRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Discriminant of an entity; doubles as its relational table name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    ZomatoAccount,
    ZomatoOrder,
    UberAccount,
    UberTrip,
    LinkedinAccount,
    LinkedinConnection,
    SpotifyAccount,
    SpotifyPlaylist,
    SpotifyTrack,
    SpotifyRecentlyPlayed,
    NetflixAccount,
    NetflixFavorite,
    PrimeVideoAccount,
    PrimeVideoWatchHistory,
    TwitchAccount,
    TwitterAccount,
    RedditAccount,
    RedditPost,
    SteamAccount,
    SteamGame,
}

impl EntityKind {
    pub const ALL: [EntityKind; 20] = [
        EntityKind::ZomatoAccount,
        EntityKind::ZomatoOrder,
        EntityKind::UberAccount,
        EntityKind::UberTrip,
        EntityKind::LinkedinAccount,
        EntityKind::LinkedinConnection,
        EntityKind::SpotifyAccount,
        EntityKind::SpotifyPlaylist,
        EntityKind::SpotifyTrack,
        EntityKind::SpotifyRecentlyPlayed,
        EntityKind::NetflixAccount,
        EntityKind::NetflixFavorite,
        EntityKind::PrimeVideoAccount,
        EntityKind::PrimeVideoWatchHistory,
        EntityKind::TwitchAccount,
        EntityKind::TwitterAccount,
        EntityKind::RedditAccount,
        EntityKind::RedditPost,
        EntityKind::SteamAccount,
        EntityKind::SteamGame,
    ];

    /// Relational table this kind is stored in.
    pub fn table(self) -> &'static str {
        match self {
            Self::ZomatoAccount => "zomato_accounts",
            Self::ZomatoOrder => "zomato_orders",
            Self::UberAccount => "uber_accounts",
            Self::UberTrip => "uber_trips",
            Self::LinkedinAccount => "linkedin_accounts",
            Self::LinkedinConnection => "linkedin_connections",
            Self::SpotifyAccount => "spotify_accounts",
            Self::SpotifyPlaylist => "spotify_playlists",
            Self::SpotifyTrack => "spotify_tracks",
            Self::SpotifyRecentlyPlayed => "spotify_recently_played",
            Self::NetflixAccount => "netflix_accounts",
            Self::NetflixFavorite => "netflix_favorites",
            Self::PrimeVideoAccount => "prime_video_accounts",
            Self::PrimeVideoWatchHistory => "prime_video_watch_history",
            Self::TwitchAccount => "twitch_accounts",
            Self::TwitterAccount => "twitter_accounts",
            Self::RedditAccount => "reddit_accounts",
            Self::RedditPost => "reddit_posts",
            Self::SteamAccount => "steam_accounts",
            Self::SteamGame => "steam_games",
        }
    }

    /// The kind a child of this kind must point at. `None` for accounts.
    pub fn parent_kind(self) -> Option<EntityKind> {
        match self {
            Self::ZomatoOrder => Some(Self::ZomatoAccount),
            Self::UberTrip => Some(Self::UberAccount),
            Self::LinkedinConnection => Some(Self::LinkedinAccount),
            Self::SpotifyPlaylist | Self::SpotifyRecentlyPlayed => Some(Self::SpotifyAccount),
            Self::SpotifyTrack => Some(Self::SpotifyPlaylist),
            Self::NetflixFavorite => Some(Self::NetflixAccount),
            Self::PrimeVideoWatchHistory => Some(Self::PrimeVideoAccount),
            Self::RedditPost => Some(Self::RedditAccount),
            Self::SteamGame => Some(Self::SteamAccount),
            Self::ZomatoAccount
            | Self::UberAccount
            | Self::LinkedinAccount
            | Self::SpotifyAccount
            | Self::NetflixAccount
            | Self::PrimeVideoAccount
            | Self::TwitchAccount
            | Self::TwitterAccount
            | Self::RedditAccount
            | Self::SteamAccount => None,
        }
    }

    pub fn is_account(self) -> bool {
        self.parent_kind().is_none()
    }

    pub fn from_table(table: &str) -> Option<EntityKind> {
        Self::ALL.into_iter().find(|k| k.table() == table)
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.table())
    }
}

/// A normalized record awaiting persistence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Entity {
    ZomatoAccount(ZomatoAccount),
    ZomatoOrder(ZomatoOrder),
    UberAccount(UberAccount),
    UberTrip(UberTrip),
    LinkedinAccount(LinkedinAccount),
    LinkedinConnection(LinkedinConnection),
    SpotifyAccount(SpotifyAccount),
    SpotifyPlaylist(SpotifyPlaylist),
    SpotifyTrack(SpotifyTrack),
    SpotifyRecentlyPlayed(SpotifyRecentlyPlayed),
    NetflixAccount(NetflixAccount),
    NetflixFavorite(NetflixFavorite),
    PrimeVideoAccount(PrimeVideoAccount),
    PrimeVideoWatchHistory(PrimeVideoWatchHistory),
    TwitchAccount(TwitchAccount),
    TwitterAccount(TwitterAccount),
    RedditAccount(RedditAccount),
    RedditPost(RedditPost),
    SteamAccount(SteamAccount),
    SteamGame(SteamGame),
}

impl Entity {
    pub fn kind(&self) -> EntityKind {
        match self {
            Self::ZomatoAccount(_) => EntityKind::ZomatoAccount,
            Self::ZomatoOrder(_) => EntityKind::ZomatoOrder,
            Self::UberAccount(_) => EntityKind::UberAccount,
            Self::UberTrip(_) => EntityKind::UberTrip,
            Self::LinkedinAccount(_) => EntityKind::LinkedinAccount,
            Self::LinkedinConnection(_) => EntityKind::LinkedinConnection,
            Self::SpotifyAccount(_) => EntityKind::SpotifyAccount,
            Self::SpotifyPlaylist(_) => EntityKind::SpotifyPlaylist,
            Self::SpotifyTrack(_) => EntityKind::SpotifyTrack,
            Self::SpotifyRecentlyPlayed(_) => EntityKind::SpotifyRecentlyPlayed,
            Self::NetflixAccount(_) => EntityKind::NetflixAccount,
            Self::NetflixFavorite(_) => EntityKind::NetflixFavorite,
            Self::PrimeVideoAccount(_) => EntityKind::PrimeVideoAccount,
            Self::PrimeVideoWatchHistory(_) => EntityKind::PrimeVideoWatchHistory,
            Self::TwitchAccount(_) => EntityKind::TwitchAccount,
            Self::TwitterAccount(_) => EntityKind::TwitterAccount,
            Self::RedditAccount(_) => EntityKind::RedditAccount,
            Self::RedditPost(_) => EntityKind::RedditPost,
            Self::SteamAccount(_) => EntityKind::SteamAccount,
            Self::SteamGame(_) => EntityKind::SteamGame,
        }
    }

    pub fn is_account(&self) -> bool {
        self.kind().is_account()
    }

    /// The unresolved owner of this entity; `None` for accounts.
    pub fn parent(&self) -> Option<EntityRef> {
        match self {
            Self::ZomatoOrder(r) => Some(r.account),
            Self::UberTrip(r) => Some(r.account),
            Self::LinkedinConnection(r) => Some(r.account),
            Self::SpotifyPlaylist(r) => Some(r.account),
            Self::SpotifyTrack(r) => Some(r.playlist),
            Self::SpotifyRecentlyPlayed(r) => Some(r.account),
            Self::NetflixFavorite(r) => Some(r.account),
            Self::PrimeVideoWatchHistory(r) => Some(r.account),
            Self::RedditPost(r) => Some(r.account),
            Self::SteamGame(r) => Some(r.account),
            _ => None,
        }
    }

    pub(crate) fn parent_mut(&mut self) -> Option<&mut EntityRef> {
        match self {
            Self::ZomatoOrder(r) => Some(&mut r.account),
            Self::UberTrip(r) => Some(&mut r.account),
            Self::LinkedinConnection(r) => Some(&mut r.account),
            Self::SpotifyPlaylist(r) => Some(&mut r.account),
            Self::SpotifyTrack(r) => Some(&mut r.playlist),
            Self::SpotifyRecentlyPlayed(r) => Some(&mut r.account),
            Self::NetflixFavorite(r) => Some(&mut r.account),
            Self::PrimeVideoWatchHistory(r) => Some(&mut r.account),
            Self::RedditPost(r) => Some(&mut r.account),
            Self::SteamGame(r) => Some(&mut r.account),
            _ => None,
        }
    }

    /// Shared metadata of an account entity.
    pub fn account_meta(&self) -> Option<&AccountMeta> {
        match self {
            Self::ZomatoAccount(a) => Some(&a.meta),
            Self::UberAccount(a) => Some(&a.meta),
            Self::LinkedinAccount(a) => Some(&a.meta),
            Self::SpotifyAccount(a) => Some(&a.meta),
            Self::NetflixAccount(a) => Some(&a.meta),
            Self::PrimeVideoAccount(a) => Some(&a.meta),
            Self::TwitchAccount(a) => Some(&a.meta),
            Self::TwitterAccount(a) => Some(&a.meta),
            Self::RedditAccount(a) => Some(&a.meta),
            Self::SteamAccount(a) => Some(&a.meta),
            _ => None,
        }
    }
}
