//! Persisting ingested graphs into a file-backed SQLite store

mod common;

use common::load_fixture;
use refiner::{Entity, GraphStore, IngestPipeline, OpenStore, SqliteStore, StorageError};
use rusqlite::Connection;
use tempfile::TempDir;

fn ingest_fixture(name: &str) -> refiner::EntityGraph {
    let payload = load_fixture(name).unwrap();
    IngestPipeline::default().ingest(&payload).unwrap().graph
}

#[test]
fn multi_provider_fixture_lands_in_every_table() {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("nested").join("refiner.db");
    let store = SqliteStore::open(&db_path).unwrap();

    let graph = ingest_fixture("multi_provider.json");
    let receipt = store.persist(&graph).unwrap();
    assert_eq!(receipt.len(), graph.len());

    let counts = store.table_counts().unwrap();
    for (table, expected) in graph.counts_by_table() {
        assert_eq!(counts[table], expected, "table {}", table);
    }
    assert!(db_path.exists());
}

#[test]
fn foreign_keys_match_receipt_keys() {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("refiner.db");
    let store = SqliteStore::open(&db_path).unwrap();

    let graph = ingest_fixture("multi_provider.json");
    let receipt = store.persist(&graph).unwrap();
    drop(store);

    let conn = Connection::open(&db_path).unwrap();
    for (at, entity) in graph.iter() {
        let key = receipt.key(at).unwrap();
        match entity {
            Entity::SpotifyTrack(track) => {
                let playlist_key: i64 = conn
                    .query_row(
                        "SELECT playlist_key FROM spotify_tracks WHERE id = ?1",
                        [key],
                        |row| row.get(0),
                    )
                    .unwrap();
                assert_eq!(Some(playlist_key), receipt.key(track.playlist));
            }
            Entity::UberTrip(trip) => {
                let account_id: i64 = conn
                    .query_row("SELECT account_id FROM uber_trips WHERE id = ?1", [key], |row| row.get(0))
                    .unwrap();
                assert_eq!(Some(account_id), receipt.key(trip.account));
            }
            _ => {}
        }
    }
}

#[test]
fn json_columns_round_trip() {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("refiner.db");
    let store = SqliteStore::open(&db_path).unwrap();
    store.persist(&ingest_fixture("multi_provider.json")).unwrap();
    drop(store);

    let conn = Connection::open(&db_path).unwrap();
    let profile: String = conn
        .query_row("SELECT linkedin_user_data FROM linkedin_accounts", [], |row| row.get(0))
        .unwrap();
    let profile: serde_json::Value = serde_json::from_str(&profile).unwrap();
    assert_eq!(profile["headline"], "Staff Engineer");

    let socials: String = conn
        .query_row("SELECT socials FROM twitch_accounts", [], |row| row.get(0))
        .unwrap();
    let socials: Vec<String> = serde_json::from_str(&socials).unwrap();
    assert_eq!(socials.len(), 2);
}

#[test]
fn reopening_keeps_earlier_rows() {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("refiner.db");

    {
        let store = SqliteStore::open(&db_path).unwrap();
        store.persist(&ingest_fixture("legacy_envelope.json")).unwrap();
    }

    let store = SqliteStore::open(&db_path).unwrap();
    store.persist(&ingest_fixture("legacy_bare.json")).unwrap();
    assert_eq!(store.count_rows("zomato_accounts").unwrap(), 3);
    assert_eq!(store.count_rows("zomato_orders").unwrap(), 2);
}

#[test]
fn unknown_table_is_rejected() {
    let store = SqliteStore::open_in_memory().unwrap();
    assert!(matches!(
        store.count_rows("users; DROP TABLE steam_games"),
        Err(StorageError::UnknownTable(_))
    ));
}
