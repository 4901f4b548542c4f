use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::kv::KeyValueStore;

/// In-memory KeyValueStore for testing and as a fallback when no persistent
/// storage is available.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store pre-populated with the given entries.
    pub fn with_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let store = Self::new();
        for (key, value) in entries {
            store.set(key, value);
        }
        store
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key.to_string(), value.to_string());
        }
    }

    fn remove(&self, key: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.remove(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_remove() {
        let store = MemoryStore::new();
        assert!(store.get("user").is_none());

        store.set("user", "{}");
        assert_eq!(store.get("user").as_deref(), Some("{}"));

        store.set("user", "[]");
        assert_eq!(store.get("user").as_deref(), Some("[]"));

        store.remove("user");
        assert!(store.get("user").is_none());
    }

    #[test]
    fn test_clones_share_entries() {
        let store = MemoryStore::with_entries([("token", "abc")]);
        let other = store.clone();

        other.set("user", "x");
        assert_eq!(store.get("user").as_deref(), Some("x"));
        assert_eq!(other.get("token").as_deref(), Some("abc"));
    }
}
