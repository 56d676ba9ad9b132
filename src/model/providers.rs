//! Provider record types
//!
//! Field names follow the exporters' camelCase JSON. These types only
//! describe shape; normalizers decide how they map onto entities.

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::fmt;

// ---------------------------------------------------------------------------
// Zomato
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryDetails {
    pub delivery_address: String,
    pub delivery_status: String,
    #[serde(default)]
    pub delivery_message: Option<String>,
    pub delivery_label: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZomatoOrderData {
    pub order_id: String,
    pub total_cost: String,
    pub dish_string: String,
    pub delivery_details: DeliveryDetails,
    #[serde(rename = "restaurantURL")]
    pub restaurant_url: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ZomatoData {
    pub userid: String,
    pub orders: Vec<ZomatoOrderData>,
}

// ---------------------------------------------------------------------------
// Uber
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UberTripData {
    pub begin_trip_time: String,
    pub dropoff_time: String,
    pub pickup_address: String,
    pub dropoff_address: String,
    pub fare: String,
    pub vehicle_type: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UberData {
    pub userid: String,
    pub username: String,
    pub trips: Vec<UberTripData>,
}

// ---------------------------------------------------------------------------
// LinkedIn
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LinkedinConnectionData {
    pub name: String,
    pub headline: String,
    pub url: String,
    #[serde(default)]
    pub pfp: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkedinData {
    /// Free-form profile blob; stored as JSON.
    pub linkedin_user_data: serde_json::Value,
    pub connections_list: Vec<LinkedinConnectionData>,
}

// ---------------------------------------------------------------------------
// Spotify
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpotifyTrackData {
    pub track_id: String,
    pub track_name: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpotifyPlaylistData {
    pub playlist_id: String,
    pub playlist_name: String,
    pub playlist_owner: String,
    pub tracks: Vec<SpotifyTrackData>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpotifyData {
    pub username: String,
    pub user_playlists: Vec<SpotifyPlaylistData>,
    pub recently_played: Vec<SpotifyTrackData>,
}

// ---------------------------------------------------------------------------
// Netflix / Prime Video
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetflixData {
    pub profile_name: String,
    pub user_id: String,
    pub favorites: Vec<String>,
}

/// Titles watched on one date.
#[derive(Debug, Clone, PartialEq)]
pub struct WatchDay {
    pub date: String,
    pub items: Vec<String>,
}

/// Watch history keyed by date, in document order.
///
/// Exported as a JSON object `{ "2024-01-01": ["Show A", ...], ... }`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WatchHistory(pub Vec<WatchDay>);

impl WatchHistory {
    pub fn days(&self) -> &[WatchDay] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'de> Deserialize<'de> for WatchHistory {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct WatchHistoryVisitor;

        impl<'de> Visitor<'de> for WatchHistoryVisitor {
            type Value = WatchHistory;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map from date to a list of watched titles")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<WatchHistory, A::Error> {
                let mut days = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((date, items)) = map.next_entry::<String, Vec<String>>()? {
                    days.push(WatchDay { date, items });
                }
                Ok(WatchHistory(days))
            }
        }

        deserializer.deserialize_map(WatchHistoryVisitor)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrimeVideoData {
    pub profile_name: String,
    #[serde(default)]
    pub user_id: Option<String>,
    pub watch_history: WatchHistory,
}

// ---------------------------------------------------------------------------
// Single-entity providers
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TwitchData {
    pub username: String,
    pub followers: i64,
    #[serde(default)]
    pub pfp_url: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub socials: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TwitterData {
    pub user_name: String,
    pub followers: i64,
    pub following: i64,
    /// Post count, not post bodies.
    pub posts: i64,
    #[serde(default)]
    pub user_description: Option<String>,
}

// ---------------------------------------------------------------------------
// Reddit / Steam
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Karma {
    pub post_karma: i64,
    pub comment_karma: i64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RedditPostData {
    pub id: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RedditData {
    pub username: String,
    #[serde(default)]
    pub pfp: Option<String>,
    pub userid: String,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub social_links: Vec<String>,
    pub karma: Karma,
    pub posts: Vec<RedditPostData>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SteamData {
    pub user_id: String,
    pub owned_games: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn zomato_order_reads_restaurant_url_acronym() {
        let data: ZomatoData = serde_json::from_value(json!({
            "userid": "u1",
            "orders": [{
                "orderId": "o1",
                "totalCost": "250",
                "dishString": "Pizza",
                "restaurantURL": "http://x",
                "deliveryDetails": {
                    "deliveryAddress": "addr",
                    "deliveryStatus": "Delivered",
                    "deliveryMessage": "ok",
                    "deliveryLabel": "On time"
                }
            }]
        }))
        .unwrap();

        assert_eq!(data.orders[0].restaurant_url, "http://x");
        assert_eq!(data.orders[0].delivery_details.delivery_message.as_deref(), Some("ok"));
    }

    #[test]
    fn watch_history_keeps_document_order() {
        let history: WatchHistory = serde_json::from_str(
            r#"{"2024-03-01": ["C"], "2024-01-01": ["A", "B"], "2024-02-01": []}"#,
        )
        .unwrap();

        let dates: Vec<_> = history.days().iter().map(|d| d.date.as_str()).collect();
        assert_eq!(dates, vec!["2024-03-01", "2024-01-01", "2024-02-01"]);
        assert_eq!(history.days()[1].items, vec!["A", "B"]);
        assert!(history.days()[2].items.is_empty());
    }

    #[test]
    fn watch_history_order_survives_value_round_trip() {
        let value = json!({"watchHistory": {"b": ["1"], "a": ["2"]}, "profileName": "P"});
        let data: PrimeVideoData = serde_json::from_value(value).unwrap();
        assert_eq!(data.watch_history.days()[0].date, "b");
        assert_eq!(data.user_id, None);
    }

    #[test]
    fn watch_history_rejects_non_list_entries() {
        let result: Result<WatchHistory, _> = serde_json::from_str(r#"{"2024-01-01": "Show"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn optional_profile_fields_stay_absent() {
        let data: TwitchData = serde_json::from_value(json!({
            "username": "streamer",
            "followers": 12
        }))
        .unwrap();
        assert_eq!(data.bio, None);
        assert_eq!(data.pfp_url, None);
        assert!(data.socials.is_empty());
    }

    #[test]
    fn empty_bio_is_distinct_from_missing_bio() {
        let data: RedditData = serde_json::from_value(json!({
            "username": "r",
            "userid": "t2_1",
            "bio": "",
            "karma": {"postKarma": 1, "commentKarma": 2},
            "posts": []
        }))
        .unwrap();
        assert_eq!(data.bio.as_deref(), Some(""));
        assert_eq!(data.pfp, None);
    }
}
