//! Platform-specific construction of the profile screen's collaborators.
//!
//! The key-value store behind the [`api::Session`] depends on the platform:
//! - **Web** (WASM + `web` feature): `localStorage` via `store::LocalStore`
//! - **Desktop** (native): filesystem via [`store::FileStore`] under `<data_dir>/profile/`
//! - **WASM without `web`**: in-memory [`store::MemoryStore`]

use api::{HttpClient, Session};
use store::ProfileConfig;

use crate::profile::ProfileService;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type AppStore = store::LocalStore;
#[cfg(all(target_arch = "wasm32", not(feature = "web")))]
pub type AppStore = store::MemoryStore;
#[cfg(not(target_arch = "wasm32"))]
pub type AppStore = store::FileStore;

/// The profile service as wired for the running platform.
pub type AppService = ProfileService<AppStore, HttpClient<AppStore>>;

#[cfg(not(target_arch = "wasm32"))]
fn data_dir() -> std::path::PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| std::path::PathBuf::from("."))
        .join("profile")
}

/// Create the platform-appropriate key-value store.
pub fn make_store() -> AppStore {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::LocalStore::new()
    }
    #[cfg(all(target_arch = "wasm32", not(feature = "web")))]
    {
        store::MemoryStore::new()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        store::FileStore::new(data_dir())
    }
}

/// Read `profile.toml` from the data directory on desktop. The web build uses
/// defaults, with the API base URL taken from `PROFILE_API_URL` at build time.
pub fn load_config() -> ProfileConfig {
    #[cfg(target_arch = "wasm32")]
    {
        match option_env!("PROFILE_API_URL") {
            Some(url) => ProfileConfig::new(url.to_string()),
            None => ProfileConfig::default(),
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        load_config_from(&data_dir().join(ProfileConfig::filename()))
    }
}

/// Parse the config at `path`. A missing file is created with the defaults so
/// it can be edited; an invalid one is ignored.
#[cfg(not(target_arch = "wasm32"))]
fn load_config_from(path: &std::path::Path) -> ProfileConfig {
    let Ok(text) = std::fs::read_to_string(path) else {
        let config = ProfileConfig::default();
        write_default_config(path, &config);
        return config;
    };
    ProfileConfig::from_toml(&text).unwrap_or_else(|e| {
        tracing::warn!("Ignoring invalid {}: {}", path.display(), e);
        ProfileConfig::default()
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn write_default_config(path: &std::path::Path, config: &ProfileConfig) {
    let Ok(text) = config.to_toml() else {
        return;
    };
    if let Some(parent) = path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    match std::fs::write(path, text) {
        Ok(()) => tracing::info!("Wrote default config to {}", path.display()),
        Err(e) => tracing::debug!("Could not write {}: {}", path.display(), e),
    }
}

/// Wire session, HTTP client and limits from the given config.
pub fn make_service(config: ProfileConfig) -> AppService {
    let session = Session::new(make_store());
    let client = HttpClient::new(config.api.base_url, session.clone());
    ProfileService::new(session, client, config.profile)
}
