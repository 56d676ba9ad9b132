//! JSON fixture loading
//!
//! Fixtures live in `tests/fixtures/`, one payload per file.

use serde_json::Value;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("fixture not found: {0}")]
    NotFound(String),

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Get the fixtures root directory
pub fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures")
}

/// Load one fixture by file name, e.g. `"legacy_bare.json"`
pub fn load_fixture(name: &str) -> Result<Value, FixtureError> {
    let path = fixtures_root().join(name);
    if !path.exists() {
        return Err(FixtureError::NotFound(name.to_string()));
    }
    read_json(&path)
}

/// Every `.json` fixture, sorted by path
pub fn all_fixtures() -> Result<Vec<(PathBuf, Value)>, FixtureError> {
    let mut paths: Vec<PathBuf> = WalkDir::new(fixtures_root())
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| e.path().extension().map(|ext| ext == "json").unwrap_or(false))
        .map(|e| e.into_path())
        .collect();
    paths.sort();

    paths
        .into_iter()
        .map(|path| read_json(&path).map(|value| (path, value)))
        .collect()
}

fn read_json(path: &Path) -> Result<Value, FixtureError> {
    let text = std::fs::read_to_string(path).map_err(|source| FixtureError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| FixtureError::Json {
        path: path.to_path_buf(),
        source,
    })
}
