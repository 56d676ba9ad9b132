//! Payload builders
//!
//! Hand-written builders for scenario tests, and a seeded generator of
//! random contributions that knows how many entities each should yield.

use rand::rngs::StdRng;
use rand::Rng;
use serde_json::{json, Value};

/// A contribution envelope in the multi-provider shape.
pub fn contribution(tag: &str, username: &str, secured: Value) -> Value {
    json!({
        "type": tag,
        "claimedDate": "2025-08-01T00:00:00Z",
        "witnesses": format!("https://example.com/{}-proof", tag.to_lowercase()),
        "walletAddress": "0x0000000000000000000000000000000000000000",
        "AccountUsername": username,
        "securedSharedData": secured
    })
}

pub fn envelope(contributions: Vec<Value>) -> Value {
    json!({ "contributions": contributions })
}

pub fn zomato_order(order_id: &str, total_cost: &str) -> Value {
    json!({
        "orderId": order_id,
        "totalCost": total_cost,
        "dishString": "Pizza",
        "deliveryDetails": {
            "deliveryAddress": "addr",
            "deliveryStatus": "Delivered",
            "deliveryMessage": "ok",
            "deliveryLabel": "On time"
        },
        "restaurantURL": "http://x"
    })
}

pub fn zomato_secured(userid: &str, orders: Vec<Value>) -> Value {
    json!({ "userid": userid, "orders": orders })
}

/// A generated contribution and the entity count it must normalize to.
#[derive(Debug, Clone)]
pub struct Generated {
    pub tag: &'static str,
    pub contribution: Value,
    /// Account plus every nested item
    pub expected_entities: usize,
}

fn titles(rng: &mut StdRng, prefix: &str, max: usize) -> Vec<String> {
    let n = rng.gen_range(0..=max);
    (0..n).map(|i| format!("{} {}", prefix, i)).collect()
}

fn tracks(rng: &mut StdRng, prefix: &str, max: usize) -> Vec<Value> {
    titles(rng, prefix, max)
        .into_iter()
        .enumerate()
        .map(|(i, name)| json!({"trackId": format!("{}_{}", prefix, i), "trackName": name}))
        .collect()
}

/// One random contribution of a random known provider.
pub fn random_contribution(rng: &mut StdRng, seq: usize) -> Generated {
    let user = format!("user_{}", seq);
    match rng.gen_range(0..10) {
        0 => {
            let orders: Vec<Value> = (0..rng.gen_range(0..=4))
                .map(|i| zomato_order(&format!("o{}_{}", seq, i), "10"))
                .collect();
            let n = orders.len();
            Generated {
                tag: "ZOMATO",
                contribution: contribution("ZOMATO", &user, zomato_secured(&user, orders)),
                expected_entities: 1 + n,
            }
        }
        1 => {
            let trips: Vec<Value> = (0..rng.gen_range(0..=4))
                .map(|i| {
                    json!({
                        "beginTripTime": "2025-07-15T08:15:00Z",
                        "dropoffTime": "2025-07-15T08:45:00Z",
                        "pickupAddress": format!("{} Main St", i),
                        "dropoffAddress": "456 Market St",
                        "fare": "12.00 USD",
                        "vehicleType": "UberX"
                    })
                })
                .collect();
            let n = trips.len();
            Generated {
                tag: "UBER",
                contribution: contribution(
                    "UBER",
                    &user,
                    json!({"userid": user, "username": user, "trips": trips}),
                ),
                expected_entities: 1 + n,
            }
        }
        2 => {
            let connections: Vec<Value> = titles(rng, "Contact", 4)
                .into_iter()
                .map(|name| json!({"name": name, "headline": "Engineer", "url": "https://linkedin.com/in/x"}))
                .collect();
            let n = connections.len();
            Generated {
                tag: "LINKEDIN",
                contribution: contribution(
                    "LINKEDIN",
                    &user,
                    json!({"linkedinUserData": {"name": user}, "connectionsList": connections}),
                ),
                expected_entities: 1 + n,
            }
        }
        3 => {
            let mut nested = 0;
            let playlists: Vec<Value> = (0..rng.gen_range(0..=3))
                .map(|p| {
                    let list_tracks = tracks(rng, &format!("pl{}", p), 4);
                    nested += 1 + list_tracks.len();
                    json!({
                        "playlistId": format!("pl{}", p),
                        "playlistName": format!("Playlist {}", p),
                        "playlistOwner": user,
                        "tracks": list_tracks
                    })
                })
                .collect();
            let recent = tracks(rng, "recent", 4);
            nested += recent.len();
            Generated {
                tag: "SPOTIFY",
                contribution: contribution(
                    "SPOTIFY",
                    &user,
                    json!({"username": user, "userPlaylists": playlists, "recentlyPlayed": recent}),
                ),
                expected_entities: 1 + nested,
            }
        }
        4 => {
            let favorites = titles(rng, "Show", 5);
            let n = favorites.len();
            Generated {
                tag: "NETFLIX",
                contribution: contribution(
                    "NETFLIX",
                    &user,
                    json!({"profileName": user, "userId": user, "favorites": favorites}),
                ),
                expected_entities: 1 + n,
            }
        }
        5 => {
            let days = rng.gen_range(0..=4);
            let mut history = serde_json::Map::new();
            for d in 0..days {
                let watched = titles(rng, "Episode", 3);
                history.insert(format!("2025-07-{:02}", d + 1), json!(watched));
            }
            Generated {
                tag: "AMAZON_PRIME",
                contribution: contribution(
                    "AMAZON_PRIME",
                    &user,
                    json!({"profileName": user, "watchHistory": history}),
                ),
                expected_entities: 1 + days,
            }
        }
        6 => Generated {
            tag: "TWITCH",
            contribution: contribution(
                "TWITCH",
                &user,
                json!({"username": user, "followers": rng.gen_range(0..100_000)}),
            ),
            expected_entities: 1,
        },
        7 => Generated {
            tag: "TWITTER",
            contribution: contribution(
                "TWITTER",
                &user,
                json!({
                    "userName": user,
                    "followers": rng.gen_range(0..1000),
                    "following": rng.gen_range(0..1000),
                    "posts": rng.gen_range(0..1000)
                }),
            ),
            expected_entities: 1,
        },
        8 => {
            let posts: Vec<Value> = titles(rng, "Post", 4)
                .into_iter()
                .enumerate()
                .map(|(i, title)| json!({"id": format!("t3_{}_{}", seq, i), "title": title}))
                .collect();
            let n = posts.len();
            Generated {
                tag: "REDDIT",
                contribution: contribution(
                    "REDDIT",
                    &user,
                    json!({
                        "username": user,
                        "userid": format!("t2_{}", seq),
                        "karma": {"postKarma": 1, "commentKarma": 2},
                        "posts": posts
                    }),
                ),
                expected_entities: 1 + n,
            }
        }
        _ => {
            let games = titles(rng, "Game", 5);
            let n = games.len();
            Generated {
                tag: "STEAM",
                contribution: contribution("STEAM", &user, json!({"userId": user, "ownedGames": games})),
                expected_entities: 1 + n,
            }
        }
    }
}
