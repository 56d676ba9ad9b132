//! SQLite storage backend for entity graphs

use super::schema::SCHEMA;
use super::traits::{GraphStore, OpenStore, PersistReceipt, StorageError, StorageResult};
use crate::graph::{Entity, EntityGraph, EntityKind};
use chrono::Utc;
use rusqlite::types::Value as SqlValue;
use rusqlite::{params_from_iter, Connection};
use serde::Serialize;
use std::path::Path;
use std::sync::{Mutex, MutexGuard};

/// SQLite-backed graph store
///
/// One table per entity kind with autoincrement surrogate keys.
/// Thread-safe via internal mutex on the connection; each `persist`
/// call is a single transaction.
pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    /// Initialize the database schema
    fn init_schema(conn: &Connection) -> StorageResult<()> {
        conn.execute_batch(SCHEMA)?;
        Ok(())
    }

    fn lock(&self) -> StorageResult<MutexGuard<'_, Connection>> {
        self.conn.lock().map_err(|_| StorageError::LockPoisoned)
    }
}

impl OpenStore for SqliteStore {
    fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        // Ensure parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(path)?;
        Self::init_schema(&conn)?;

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn open_in_memory() -> StorageResult<Self> {
        let conn = Connection::open_in_memory()?;
        Self::init_schema(&conn)?;

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }
}

impl GraphStore for SqliteStore {
    fn persist(&self, graph: &EntityGraph) -> StorageResult<PersistReceipt> {
        graph.verify()?;

        let created_at = Utc::now().to_rfc3339();
        let mut conn = self.lock()?;
        let tx = conn.transaction()?;

        // keys[i] is the surrogate key of graph entity i
        let mut keys: Vec<i64> = Vec::with_capacity(graph.len());
        for (at, entity) in graph.iter() {
            let mut row = Row::new(entity.kind());
            if let Some(parent) = entity.parent() {
                let key = keys
                    .get(parent.index())
                    .copied()
                    .ok_or(StorageError::UnresolvedParent { entity: at, parent })?;
                row = row.int(parent_column(entity.kind()), key);
            }
            let key = entity_row(entity, row)?.insert(&tx, &created_at)?;
            keys.push(key);
        }

        tx.commit()?;
        tracing::debug!(entities = keys.len(), "graph persisted");
        Ok(PersistReceipt::new(keys))
    }

    fn count_rows(&self, table: &str) -> StorageResult<usize> {
        // Only known table names reach the SQL text
        let kind = EntityKind::from_table(table)
            .ok_or_else(|| StorageError::UnknownTable(table.to_string()))?;

        let conn = self.lock()?;
        let count: i64 = conn.query_row(
            &format!("SELECT COUNT(*) FROM {}", kind.table()),
            [],
            |row| row.get(0),
        )?;
        Ok(count as usize)
    }
}

/// Foreign key column linking a detail row to its owner.
fn parent_column(kind: EntityKind) -> &'static str {
    match kind {
        EntityKind::SpotifyTrack => "playlist_key",
        _ => "account_id",
    }
}

/// Column/value pairs for one INSERT.
struct Row {
    table: &'static str,
    columns: Vec<&'static str>,
    values: Vec<SqlValue>,
}

impl Row {
    fn new(kind: EntityKind) -> Self {
        Self {
            table: kind.table(),
            columns: Vec::new(),
            values: Vec::new(),
        }
    }

    fn text(mut self, column: &'static str, value: &str) -> Self {
        self.columns.push(column);
        self.values.push(SqlValue::Text(value.to_string()));
        self
    }

    fn opt_text(mut self, column: &'static str, value: &Option<String>) -> Self {
        self.columns.push(column);
        self.values.push(match value {
            Some(v) => SqlValue::Text(v.clone()),
            None => SqlValue::Null,
        });
        self
    }

    fn int(mut self, column: &'static str, value: i64) -> Self {
        self.columns.push(column);
        self.values.push(SqlValue::Integer(value));
        self
    }

    /// Lists and free-form blobs are stored as JSON text.
    fn json<T: Serialize>(mut self, column: &'static str, value: &T) -> StorageResult<Self> {
        self.columns.push(column);
        self.values.push(SqlValue::Text(serde_json::to_string(value)?));
        Ok(self)
    }

    fn insert(mut self, conn: &Connection, created_at: &str) -> StorageResult<i64> {
        self.columns.push("created_at");
        self.values.push(SqlValue::Text(created_at.to_string()));

        let placeholders: Vec<String> = (1..=self.columns.len()).map(|i| format!("?{}", i)).collect();
        let sql = format!(
            "INSERT INTO {} ({}) VALUES ({})",
            self.table,
            self.columns.join(", "),
            placeholders.join(", ")
        );

        let mut stmt = conn.prepare_cached(&sql)?;
        stmt.execute(params_from_iter(self.values.iter()))?;
        Ok(conn.last_insert_rowid())
    }
}

fn entity_row(entity: &Entity, mut row: Row) -> StorageResult<Row> {
    if let Some(meta) = entity.account_meta() {
        row = row
            .text("data_type", &meta.data_type)
            .text("witnesses", &meta.witnesses)
            .text("account_username", &meta.account_username);
    }

    let row = match entity {
        Entity::ZomatoAccount(a) => row.text("user_id", &a.user_id),
        Entity::ZomatoOrder(o) => row
            .text("order_id", &o.order_id)
            .text("total_cost", &o.total_cost)
            .text("dish_string", &o.dish_string)
            .text("restaurant_url", &o.restaurant_url)
            .text("delivery_address", &o.delivery_address)
            .text("delivery_status", &o.delivery_status)
            .opt_text("delivery_message", &o.delivery_message)
            .text("delivery_label", &o.delivery_label),
        Entity::UberAccount(a) => row.text("user_id", &a.user_id).text("username", &a.username),
        Entity::UberTrip(t) => row
            .text("begin_trip_time", &t.begin_trip_time)
            .text("dropoff_time", &t.dropoff_time)
            .text("pickup_address", &t.pickup_address)
            .text("dropoff_address", &t.dropoff_address)
            .text("fare", &t.fare)
            .text("vehicle_type", &t.vehicle_type),
        Entity::LinkedinAccount(a) => row.json("linkedin_user_data", &a.linkedin_user_data)?,
        Entity::LinkedinConnection(c) => row
            .text("name", &c.name)
            .text("headline", &c.headline)
            .text("url", &c.url)
            .opt_text("pfp", &c.pfp),
        Entity::SpotifyAccount(a) => row.text("username", &a.username),
        Entity::SpotifyPlaylist(p) => row
            .text("playlist_id", &p.playlist_id)
            .text("playlist_name", &p.playlist_name)
            .text("playlist_owner", &p.playlist_owner),
        Entity::SpotifyTrack(t) => row
            .text("playlist_id", &t.playlist_id)
            .text("track_id", &t.track_id)
            .text("track_name", &t.track_name),
        Entity::SpotifyRecentlyPlayed(t) => row
            .text("track_id", &t.track_id)
            .text("track_name", &t.track_name),
        Entity::NetflixAccount(a) => row
            .text("profile_name", &a.profile_name)
            .text("user_id", &a.user_id),
        Entity::NetflixFavorite(f) => row.text("favorite_item", &f.favorite_item),
        Entity::PrimeVideoAccount(a) => row
            .text("profile_name", &a.profile_name)
            .opt_text("user_id", &a.user_id),
        Entity::PrimeVideoWatchHistory(h) => row
            .text("watch_date", &h.watch_date)
            .json("watched_items", &h.watched_items)?,
        Entity::TwitchAccount(a) => row
            .text("username", &a.username)
            .int("followers", a.followers)
            .opt_text("pfp_url", &a.pfp_url)
            .opt_text("bio", &a.bio)
            .json("socials", &a.socials)?,
        Entity::TwitterAccount(a) => row
            .text("user_name", &a.user_name)
            .int("followers", a.followers)
            .int("following", a.following)
            .int("posts", a.posts)
            .opt_text("user_description", &a.user_description),
        Entity::RedditAccount(a) => row
            .text("username", &a.username)
            .opt_text("pfp", &a.pfp)
            .text("user_id", &a.user_id)
            .opt_text("bio", &a.bio)
            .json("social_links", &a.social_links)?
            .int("post_karma", a.post_karma)
            .int("comment_karma", a.comment_karma),
        Entity::RedditPost(p) => row.text("post_id", &p.post_id).text("title", &p.title),
        Entity::SteamAccount(a) => row.text("user_id", &a.user_id),
        Entity::SteamGame(g) => row.text("game_name", &g.game_name),
    };
    Ok(row)
}
