//! Relational schema, one table per entity kind
//!
//! Account tables key on `account_id`; detail tables key on `id` and
//! point at their owner through a `NOT NULL` foreign key.

pub(super) const SCHEMA: &str = r#"
    -- Zomato
    CREATE TABLE IF NOT EXISTS zomato_accounts (
        account_id INTEGER PRIMARY KEY AUTOINCREMENT,
        data_type TEXT NOT NULL,
        witnesses TEXT NOT NULL,
        account_username TEXT NOT NULL,
        user_id TEXT NOT NULL,
        created_at TEXT NOT NULL
    );
    CREATE TABLE IF NOT EXISTS zomato_orders (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        account_id INTEGER NOT NULL REFERENCES zomato_accounts(account_id),
        order_id TEXT NOT NULL,
        total_cost TEXT NOT NULL,
        dish_string TEXT NOT NULL,
        restaurant_url TEXT NOT NULL,
        delivery_address TEXT NOT NULL,
        delivery_status TEXT NOT NULL,
        delivery_message TEXT,
        delivery_label TEXT NOT NULL,
        created_at TEXT NOT NULL
    );

    -- Uber
    CREATE TABLE IF NOT EXISTS uber_accounts (
        account_id INTEGER PRIMARY KEY AUTOINCREMENT,
        data_type TEXT NOT NULL,
        witnesses TEXT NOT NULL,
        account_username TEXT NOT NULL,
        user_id TEXT NOT NULL,
        username TEXT NOT NULL,
        created_at TEXT NOT NULL
    );
    CREATE TABLE IF NOT EXISTS uber_trips (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        account_id INTEGER NOT NULL REFERENCES uber_accounts(account_id),
        begin_trip_time TEXT NOT NULL,
        dropoff_time TEXT NOT NULL,
        pickup_address TEXT NOT NULL,
        dropoff_address TEXT NOT NULL,
        fare TEXT NOT NULL,
        vehicle_type TEXT NOT NULL,
        created_at TEXT NOT NULL
    );

    -- LinkedIn
    CREATE TABLE IF NOT EXISTS linkedin_accounts (
        account_id INTEGER PRIMARY KEY AUTOINCREMENT,
        data_type TEXT NOT NULL,
        witnesses TEXT NOT NULL,
        account_username TEXT NOT NULL,
        linkedin_user_data TEXT NOT NULL,
        created_at TEXT NOT NULL
    );
    CREATE TABLE IF NOT EXISTS linkedin_connections (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        account_id INTEGER NOT NULL REFERENCES linkedin_accounts(account_id),
        name TEXT NOT NULL,
        headline TEXT NOT NULL,
        url TEXT NOT NULL,
        pfp TEXT,
        created_at TEXT NOT NULL
    );

    -- Spotify
    CREATE TABLE IF NOT EXISTS spotify_accounts (
        account_id INTEGER PRIMARY KEY AUTOINCREMENT,
        data_type TEXT NOT NULL,
        witnesses TEXT NOT NULL,
        account_username TEXT NOT NULL,
        username TEXT NOT NULL,
        created_at TEXT NOT NULL
    );
    CREATE TABLE IF NOT EXISTS spotify_playlists (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        account_id INTEGER NOT NULL REFERENCES spotify_accounts(account_id),
        playlist_id TEXT NOT NULL,
        playlist_name TEXT NOT NULL,
        playlist_owner TEXT NOT NULL,
        created_at TEXT NOT NULL
    );
    CREATE TABLE IF NOT EXISTS spotify_tracks (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        playlist_key INTEGER NOT NULL REFERENCES spotify_playlists(id),
        playlist_id TEXT NOT NULL,
        track_id TEXT NOT NULL,
        track_name TEXT NOT NULL,
        created_at TEXT NOT NULL
    );
    CREATE TABLE IF NOT EXISTS spotify_recently_played (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        account_id INTEGER NOT NULL REFERENCES spotify_accounts(account_id),
        track_id TEXT NOT NULL,
        track_name TEXT NOT NULL,
        created_at TEXT NOT NULL
    );

    -- Netflix
    CREATE TABLE IF NOT EXISTS netflix_accounts (
        account_id INTEGER PRIMARY KEY AUTOINCREMENT,
        data_type TEXT NOT NULL,
        witnesses TEXT NOT NULL,
        account_username TEXT NOT NULL,
        profile_name TEXT NOT NULL,
        user_id TEXT NOT NULL,
        created_at TEXT NOT NULL
    );
    CREATE TABLE IF NOT EXISTS netflix_favorites (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        account_id INTEGER NOT NULL REFERENCES netflix_accounts(account_id),
        favorite_item TEXT NOT NULL,
        created_at TEXT NOT NULL
    );

    -- Prime Video
    CREATE TABLE IF NOT EXISTS prime_video_accounts (
        account_id INTEGER PRIMARY KEY AUTOINCREMENT,
        data_type TEXT NOT NULL,
        witnesses TEXT NOT NULL,
        account_username TEXT NOT NULL,
        profile_name TEXT NOT NULL,
        user_id TEXT,
        created_at TEXT NOT NULL
    );
    CREATE TABLE IF NOT EXISTS prime_video_watch_history (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        account_id INTEGER NOT NULL REFERENCES prime_video_accounts(account_id),
        watch_date TEXT NOT NULL,
        watched_items TEXT NOT NULL,
        created_at TEXT NOT NULL
    );

    -- Twitch / Twitter
    CREATE TABLE IF NOT EXISTS twitch_accounts (
        account_id INTEGER PRIMARY KEY AUTOINCREMENT,
        data_type TEXT NOT NULL,
        witnesses TEXT NOT NULL,
        account_username TEXT NOT NULL,
        username TEXT NOT NULL,
        followers INTEGER NOT NULL,
        pfp_url TEXT,
        bio TEXT,
        socials TEXT NOT NULL,
        created_at TEXT NOT NULL
    );
    CREATE TABLE IF NOT EXISTS twitter_accounts (
        account_id INTEGER PRIMARY KEY AUTOINCREMENT,
        data_type TEXT NOT NULL,
        witnesses TEXT NOT NULL,
        account_username TEXT NOT NULL,
        user_name TEXT NOT NULL,
        followers INTEGER NOT NULL,
        following INTEGER NOT NULL,
        posts INTEGER NOT NULL,
        user_description TEXT,
        created_at TEXT NOT NULL
    );

    -- Reddit
    CREATE TABLE IF NOT EXISTS reddit_accounts (
        account_id INTEGER PRIMARY KEY AUTOINCREMENT,
        data_type TEXT NOT NULL,
        witnesses TEXT NOT NULL,
        account_username TEXT NOT NULL,
        username TEXT NOT NULL,
        pfp TEXT,
        user_id TEXT NOT NULL,
        bio TEXT,
        social_links TEXT NOT NULL,
        post_karma INTEGER NOT NULL,
        comment_karma INTEGER NOT NULL,
        created_at TEXT NOT NULL
    );
    CREATE TABLE IF NOT EXISTS reddit_posts (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        account_id INTEGER NOT NULL REFERENCES reddit_accounts(account_id),
        post_id TEXT NOT NULL,
        title TEXT NOT NULL,
        created_at TEXT NOT NULL
    );

    -- Steam
    CREATE TABLE IF NOT EXISTS steam_accounts (
        account_id INTEGER PRIMARY KEY AUTOINCREMENT,
        data_type TEXT NOT NULL,
        witnesses TEXT NOT NULL,
        account_username TEXT NOT NULL,
        user_id TEXT NOT NULL,
        created_at TEXT NOT NULL
    );
    CREATE TABLE IF NOT EXISTS steam_games (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        account_id INTEGER NOT NULL REFERENCES steam_accounts(account_id),
        game_name TEXT NOT NULL,
        created_at TEXT NOT NULL
    );

    -- Foreign key indexes
    CREATE INDEX IF NOT EXISTS idx_zomato_orders_account ON zomato_orders(account_id);
    CREATE INDEX IF NOT EXISTS idx_uber_trips_account ON uber_trips(account_id);
    CREATE INDEX IF NOT EXISTS idx_linkedin_connections_account ON linkedin_connections(account_id);
    CREATE INDEX IF NOT EXISTS idx_spotify_playlists_account ON spotify_playlists(account_id);
    CREATE INDEX IF NOT EXISTS idx_spotify_tracks_playlist ON spotify_tracks(playlist_key);
    CREATE INDEX IF NOT EXISTS idx_spotify_recently_played_account ON spotify_recently_played(account_id);
    CREATE INDEX IF NOT EXISTS idx_netflix_favorites_account ON netflix_favorites(account_id);
    CREATE INDEX IF NOT EXISTS idx_prime_video_watch_history_account ON prime_video_watch_history(account_id);
    CREATE INDEX IF NOT EXISTS idx_reddit_posts_account ON reddit_posts(account_id);
    CREATE INDEX IF NOT EXISTS idx_steam_games_account ON steam_games(account_id);

    -- Enable foreign keys
    PRAGMA foreign_keys = ON;

    -- Enable WAL mode for concurrent reads during writes
    PRAGMA journal_mode = WAL;
"#;
