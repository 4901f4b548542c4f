pub mod config;
pub mod kv;
pub mod models;
pub mod user_cache;

mod memory;
pub use memory::MemoryStore;

#[cfg(not(target_arch = "wasm32"))]
mod file_store;
#[cfg(not(target_arch = "wasm32"))]
pub use file_store::FileStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStore;

pub use config::ProfileConfig;
pub use kv::{is_corrupted, KeyValueStore};
pub use models::UserRecord;
pub use user_cache::UserCache;
