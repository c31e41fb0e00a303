//! In-process key-value store.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use crate::domain::ports::{KeyValueStore, StorageError};

/// Mutex-guarded map. Contents vanish with the process.
#[derive(Debug, Default)]
pub struct MemoryKeyValueStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryKeyValueStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> Result<MutexGuard<'_, HashMap<String, String>>, StorageError> {
        self.entries
            .lock()
            .map_err(|_| StorageError::unavailable("memory store lock poisoned"))
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries()?.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries()?.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_get_remove() {
        let store = MemoryKeyValueStore::new();
        assert_eq!(store.get("k").expect("get"), None);
        store.set("k", "v1").expect("set");
        store.set("k", "v2").expect("overwrite");
        assert_eq!(store.get("k").expect("get").as_deref(), Some("v2"));
        store.remove("k").expect("remove");
        store.remove("k").expect("remove missing");
        assert_eq!(store.get("k").expect("get"), None);
    }
}
