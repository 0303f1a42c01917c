//! Key/value persistence
//!
//! Everything the roster keeps between sessions is a JSON string (or a plain
//! string) stored under a fixed key. In the browser the backing store is
//! LocalStorage (see `platform`); native builds and tests use [`MemoryStorage`].

mod memory;

pub use memory::MemoryStorage;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Failure talking to the backing store
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("storage is unavailable")]
    Unavailable,
    #[error("failed to read key {key}: {reason}")]
    Read { key: String, reason: String },
    #[error("failed to write key {key}: {reason}")]
    Write { key: String, reason: String },
}

/// Why a persisted value could not be used
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("nothing stored under {0}")]
    Missing(&'static str),
    #[error("could not read {key}: {source}")]
    Unreadable {
        key: &'static str,
        #[source]
        source: StorageError,
    },
    #[error("malformed value under {key}: {source}")]
    Malformed {
        key: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// String key/value store. Methods take `&self`; implementations handle
/// their own interior mutability (LocalStorage already does).
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Read a raw string value, treating "not there" as [`LoadError::Missing`]
pub fn load_string(store: &dyn KeyValueStore, key: &'static str) -> Result<String, LoadError> {
    store
        .get_item(key)
        .map_err(|source| LoadError::Unreadable { key, source })?
        .ok_or(LoadError::Missing(key))
}

/// Read and decode a JSON value
pub fn load_json<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &'static str,
) -> Result<T, LoadError> {
    let json = load_string(store, key)?;
    serde_json::from_str(&json).map_err(|source| LoadError::Malformed { key, source })
}

/// Encode and write a JSON value
pub fn save_json<T: Serialize + ?Sized>(
    store: &dyn KeyValueStore,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let json = serde_json::to_string(value).map_err(|e| StorageError::Write {
        key: key.to_string(),
        reason: e.to_string(),
    })?;
    store.set_item(key, &json)
}
