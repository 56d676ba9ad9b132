//! Provider normalization layer
//!
//! Each provider implements [`Normalizer`]; the [`Dispatcher`] maps a
//! contribution's provider tag to the right one. Adding a provider means
//! one new normalizer and one registration in `Dispatcher::with_defaults`.

mod dispatch;
mod legacy;
mod linkedin;
mod netflix;
mod prime_video;
mod reddit;
mod spotify;
mod steam;
mod traits;
mod twitch;
mod twitter;
mod uber;
mod zomato;

pub use dispatch::Dispatcher;
pub use legacy::normalize_legacy;
pub use linkedin::LinkedinNormalizer;
pub use netflix::NetflixNormalizer;
pub use prime_video::PrimeVideoNormalizer;
pub use reddit::RedditNormalizer;
pub use spotify::SpotifyNormalizer;
pub use steam::SteamNormalizer;
pub use traits::{account_meta, NormalizeError, Normalizer};
pub use twitch::TwitchNormalizer;
pub use twitter::TwitterNormalizer;
pub use uber::UberNormalizer;
pub use zomato::ZomatoNormalizer;
