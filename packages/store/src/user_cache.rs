//! Cached copy of the signed-in user, stored as JSON under [`USER_KEY`].

use crate::kv::{is_corrupted, KeyValueStore};
use crate::models::UserRecord;

/// Key holding the serialized [`UserRecord`].
pub const USER_KEY: &str = "user";

/// Typed access to the cached user record on top of any [`KeyValueStore`].
#[derive(Clone, Debug)]
pub struct UserCache<S> {
    store: S,
}

impl<S: KeyValueStore> UserCache<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Remove the cached value if it is one of the corrupted literals.
    /// Returns `true` when something was removed.
    pub fn clear_corrupted(&self) -> bool {
        match self.store.get(USER_KEY) {
            Some(raw) if is_corrupted(&raw) => {
                self.store.remove(USER_KEY);
                true
            }
            _ => false,
        }
    }

    /// Read the cached record. Corrupted literals and unparsable JSON read as
    /// absent.
    pub fn load(&self) -> Option<UserRecord> {
        let raw = self.store.get(USER_KEY)?;
        if is_corrupted(&raw) {
            return None;
        }
        serde_json::from_str(&raw).ok()
    }

    pub fn save(&self, user: &UserRecord) {
        if let Ok(json) = serde_json::to_string(user) {
            self.store.set(USER_KEY, &json);
        }
    }

    /// Apply `change` to the record as it is cached now and write it back.
    /// Returns the updated record, or `None` when nothing usable is cached.
    pub fn update(&self, change: impl FnOnce(&mut UserRecord)) -> Option<UserRecord> {
        let mut user = self.load()?;
        change(&mut user);
        self.save(&user);
        Some(user)
    }

    pub fn clear(&self) {
        self.store.remove(USER_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;

    fn alice() -> UserRecord {
        UserRecord {
            id: "1".into(),
            name: "Alice".into(),
            email: "alice@example.com".into(),
            photo: None,
        }
    }

    #[test]
    fn test_save_and_load() {
        let cache = UserCache::new(MemoryStore::new());
        assert!(cache.load().is_none());

        cache.save(&alice());
        assert_eq!(cache.load(), Some(alice()));

        cache.clear();
        assert!(cache.load().is_none());
    }

    #[test]
    fn test_corrupted_literals_are_cleared() {
        for literal in ["undefined", "null", ""] {
            let store = MemoryStore::with_entries([(USER_KEY, literal)]);
            let cache = UserCache::new(store.clone());

            assert!(cache.load().is_none());
            assert!(cache.clear_corrupted());
            assert!(store.get(USER_KEY).is_none());
        }
    }

    #[test]
    fn test_valid_entry_survives_clear_corrupted() {
        let cache = UserCache::new(MemoryStore::new());
        cache.save(&alice());

        assert!(!cache.clear_corrupted());
        assert_eq!(cache.load(), Some(alice()));
    }

    #[test]
    fn test_update_changes_only_the_touched_field() {
        let cache = UserCache::new(MemoryStore::new());
        cache.save(&alice());

        cache.update(|u| u.photo = Some("https://cdn/a.png".into()));
        cache.update(|u| u.name = "Alicia".into());

        let cached = cache.load().unwrap();
        assert_eq!(cached.name, "Alicia");
        assert_eq!(cached.photo.as_deref(), Some("https://cdn/a.png"));
        assert_eq!(cached.email, "alice@example.com");
    }

    #[test]
    fn test_update_without_cached_record_is_noop() {
        let store = MemoryStore::new();
        let cache = UserCache::new(store.clone());

        assert!(cache.update(|u| u.name = "Alicia".into()).is_none());
        assert!(store.get(USER_KEY).is_none());
    }

    #[test]
    fn test_unparsable_json_reads_as_absent() {
        let cache = UserCache::new(MemoryStore::with_entries([(USER_KEY, "{not json")]));
        assert!(cache.load().is_none());
    }
}
