//! Input-side data model: contributions and provider record types

mod contribution;
pub mod providers;

pub use contribution::{Contribution, LegacyContribution, ProviderType, SecuredData};
pub use providers::{
    DeliveryDetails, Karma, LinkedinConnectionData, LinkedinData, NetflixData, PrimeVideoData,
    RedditData, RedditPostData, SpotifyData, SpotifyPlaylistData, SpotifyTrackData, SteamData,
    TwitchData, TwitterData, UberData, UberTripData, WatchDay, WatchHistory, ZomatoData,
    ZomatoOrderData,
};
