//! JSON files used as a write-through cache, keyed by path.

use crate::CacheError;
use serde::{de::DeserializeOwned, Serialize};
use std::{fs, path::Path};
use tracing::info;

/// Reads and deserializes the cache file at `path`, or returns [None] if it does not exist.
///
/// The content is trusted as long as it deserializes into `T`.
pub fn read_cached<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, CacheError> {
    if !path.exists() {
        return Ok(None);
    }
    info!(target: "fixtures", ">>> reading {}", path.display());
    read_json(path).map(Some)
}

/// Reads and deserializes the JSON file at `path`.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, CacheError> {
    let raw = fs::read_to_string(path)
        .map_err(|source| CacheError::Io { path: path.to_path_buf(), source })?;
    serde_json::from_str(&raw)
        .map_err(|source| CacheError::Malformed { path: path.to_path_buf(), source })
}

/// Serializes `value` to `path` as 2-space indented JSON with a trailing newline, replacing any
/// existing content.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), CacheError> {
    let mut json = serde_json::to_string_pretty(value).map_err(CacheError::Serialize)?;
    json.push('\n');
    fs::write(path, json).map_err(|source| CacheError::Io { path: path.to_path_buf(), source })
}
