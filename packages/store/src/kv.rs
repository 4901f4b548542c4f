//! # Key-value storage capability
//!
//! Everything the profile screen persists locally goes through [`KeyValueStore`]:
//! a synchronous string-to-string map with `get`/`set`/`remove`. The screen never
//! touches browser storage directly, so tests can swap in a [`crate::MemoryStore`]
//! and the desktop shell can use a [`crate::FileStore`].
//!
//! ## Implementations
//!
//! | Backend | Platform | Module |
//! |---------|----------|--------|
//! | [`crate::MemoryStore`] | all | `memory` |
//! | [`crate::FileStore`] | native | `file_store` |
//! | `LocalStore` | wasm + `web` feature | `local` |
//!
//! Backends swallow their own I/O failures: a read that fails is reported as
//! `None` and a failed write is dropped, so a broken store degrades to "nothing
//! cached" instead of breaking the screen.

/// Synchronous string key-value store.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Whether a raw stored value is a leftover from a careless serializer
/// (`"undefined"`, `"null"`) or blank, and must be treated as absent.
pub fn is_corrupted(raw: &str) -> bool {
    let trimmed = raw.trim();
    trimmed.is_empty() || trimmed == "undefined" || trimmed == "null"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corrupted_literals() {
        assert!(is_corrupted("undefined"));
        assert!(is_corrupted("null"));
        assert!(is_corrupted(""));
        assert!(is_corrupted("   "));
        assert!(!is_corrupted("{\"name\":\"null\"}"));
        assert!(!is_corrupted("eyJhbGciOi"));
    }
}
