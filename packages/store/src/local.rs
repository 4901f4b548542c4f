//! # Browser `localStorage` store
//!
//! [`LocalStore`] is the [`KeyValueStore`] used on the **web platform**. It wraps
//! `window.localStorage` through `web-sys`.
//!
//! `LocalStore` is a zero-size struct that looks the storage object up on every
//! call; `web_sys::Storage` is not `Send` and the lookup is cheap.
//!
//! All methods silently swallow errors (private browsing, quota exceeded,
//! storage disabled). Reads degrade to `None`, writes are dropped.

use crate::kv::KeyValueStore;

/// localStorage-backed KeyValueStore for the web platform.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStore;

impl LocalStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}
