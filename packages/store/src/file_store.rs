//! # Filesystem-backed key-value store
//!
//! [`FileStore`] is the [`KeyValueStore`] used by the desktop shell. Each key is
//! one file under the base directory, holding the raw value:
//!
//! ```text
//! <base_dir>/
//! ├── user      # serialized UserRecord JSON
//! └── token     # bearer token
//! ```
//!
//! Use `dirs::data_dir()` to obtain a platform-appropriate base (the `ui`
//! crate does this in `make_store`).
//!
//! Keys are sanitised to a single path component so a key can never escape the
//! base directory.

use std::path::PathBuf;

use crate::kv::KeyValueStore;

/// Filesystem-backed KeyValueStore for desktop persistence.
#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        let name: String = key
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
            .collect();
        self.base.join(name)
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.entry_path(key)).ok()
    }

    fn set(&self, key: &str, value: &str) {
        let _ = std::fs::create_dir_all(&self.base);
        let _ = std::fs::write(self.entry_path(key), value);
    }

    fn remove(&self, key: &str) {
        let _ = std::fs::remove_file(self.entry_path(key));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_store_roundtrip() {
        let dir = std::env::temp_dir().join(format!("profile_store_test_{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);

        let store = FileStore::new(dir.clone());
        assert!(store.get("user").is_none());
        store.set("user", r#"{"id":"1"}"#);

        // Re-open from same directory
        let reopened = FileStore::new(dir.clone());
        assert_eq!(reopened.get("user").as_deref(), Some(r#"{"id":"1"}"#));

        reopened.remove("user");
        assert!(store.get("user").is_none());

        // Cleanup
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_keys_stay_inside_base() {
        let store = FileStore::new(PathBuf::from("/tmp/base"));
        assert_eq!(store.entry_path("../etc/passwd"), PathBuf::from("/tmp/base/___etc_passwd"));
    }
}
