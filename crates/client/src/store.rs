//! Durable local state persistence.
//!
//! The managers write their state through this adapter on every mutation so
//! that a process restart never loses the last known cart or session. The
//! contract is deliberately total: a missing or corrupt value is "no prior
//! state", never an error, and write failures are logged and swallowed.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Storage keys for client state.
pub mod keys {
    /// Key for the serialized cart line items.
    pub const CART: &str = "pawly_cart";

    /// Key for the normalized session record.
    pub const USER: &str = "user";
}

/// Durable key/value storage for client state.
///
/// Values are JSON-serialized. Implementations must treat deserialization
/// failure as absence and proactively clear the corrupt value, so callers
/// never see an error from `load`.
pub trait StateStore {
    /// Read the raw serialized value for `key`, if any.
    fn load_raw(&self, key: &str) -> Option<String>;

    /// Write the raw serialized value for `key`, overwriting any prior value.
    /// Failures are logged, not returned.
    fn save_raw(&self, key: &str, value: &str);

    /// Remove the value for `key`. Idempotent.
    fn clear(&self, key: &str);

    /// Load and deserialize the value for `key`.
    ///
    /// Returns `None` if the key is missing or holds a value that no longer
    /// deserializes; the corrupt value is cleared so the next load is clean.
    fn load<T: DeserializeOwned>(&self, key: &str) -> Option<T>
    where
        Self: Sized,
    {
        let raw = self.load_raw(key)?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!("discarding corrupt state under {key:?}: {e}");
                self.clear(key);
                None
            }
        }
    }

    /// Serialize and write the value for `key`.
    fn save<T: Serialize>(&self, key: &str, value: &T)
    where
        Self: Sized,
    {
        match serde_json::to_string(value) {
            Ok(raw) => self.save_raw(key, &raw),
            Err(e) => tracing::warn!("failed to serialize state for {key:?}: {e}"),
        }
    }
}

/// Shared handles behave like the store they wrap.
impl<S: StateStore> StateStore for std::sync::Arc<S> {
    fn load_raw(&self, key: &str) -> Option<String> {
        self.as_ref().load_raw(key)
    }

    fn save_raw(&self, key: &str, value: &str) {
        self.as_ref().save_raw(key, value);
    }

    fn clear(&self, key: &str) {
        self.as_ref().clear(key);
    }
}

/// File-backed store: one JSON file per key under a data directory.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// Create a store rooted at `dir`. The directory is created lazily on
    /// the first write.
    #[must_use]
    pub const fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl StateStore for JsonFileStore {
    fn load_raw(&self, key: &str) -> Option<String> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(raw) => Some(raw),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => {
                tracing::warn!("failed to read state for {key:?}: {e}");
                None
            }
        }
    }

    fn save_raw(&self, key: &str, value: &str) {
        if let Err(e) = fs::create_dir_all(&self.dir) {
            tracing::warn!("failed to create state dir {:?}: {e}", self.dir);
            return;
        }
        if let Err(e) = fs::write(self.path_for(key), value) {
            tracing::warn!("failed to write state for {key:?}: {e}");
        }
    }

    fn clear(&self, key: &str) {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => tracing::warn!("failed to clear state for {key:?}: {e}"),
        }
    }
}

/// In-memory store for tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl StateStore for MemoryStore {
    fn load_raw(&self, key: &str) -> Option<String> {
        self.values
            .lock()
            .ok()
            .and_then(|values| values.get(key).cloned())
    }

    fn save_raw(&self, key: &str, value: &str) {
        if let Ok(mut values) = self.values.lock() {
            values.insert(key.to_owned(), value.to_owned());
        }
    }

    fn clear(&self, key: &str) {
        if let Ok(mut values) = self.values.lock() {
            values.remove(key);
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_roundtrip() {
        let store = MemoryStore::new();
        store.save(keys::CART, &vec![1, 2, 3]);
        assert_eq!(store.load::<Vec<i32>>(keys::CART), Some(vec![1, 2, 3]));
    }

    #[test]
    fn test_load_missing_is_none() {
        let store = MemoryStore::new();
        assert_eq!(store.load::<Vec<i32>>("nothing"), None);
    }

    #[test]
    fn test_corrupt_value_is_cleared() {
        let store = MemoryStore::new();
        store.save_raw(keys::USER, "{not json");
        assert_eq!(store.load::<serde_json::Value>(keys::USER), None);
        // The corrupt value must be gone, not just skipped.
        assert_eq!(store.load_raw(keys::USER), None);
    }

    #[test]
    fn test_save_overwrites() {
        let store = MemoryStore::new();
        store.save(keys::CART, &1);
        store.save(keys::CART, &2);
        assert_eq!(store.load::<i32>(keys::CART), Some(2));
    }

    #[test]
    fn test_clear_is_idempotent() {
        let store = MemoryStore::new();
        store.save(keys::CART, &1);
        store.clear(keys::CART);
        store.clear(keys::CART);
        assert_eq!(store.load::<i32>(keys::CART), None);
    }

    #[test]
    fn test_file_store_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().to_path_buf());
        store.save(keys::CART, &vec!["a".to_owned()]);
        assert_eq!(
            store.load::<Vec<String>>(keys::CART),
            Some(vec!["a".to_owned()])
        );
        store.clear(keys::CART);
        assert_eq!(store.load::<Vec<String>>(keys::CART), None);
    }

    #[test]
    fn test_file_store_corrupt_file_cleared() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().to_path_buf());
        store.save_raw(keys::USER, "][");
        assert_eq!(store.load::<serde_json::Value>(keys::USER), None);
        assert!(!dir.path().join("user.json").exists());
    }
}
