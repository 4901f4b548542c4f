//! # Profile screen configuration: `profile.toml`
//!
//! Defines the TOML configuration read by the platform shells at startup
//! (filename: [`ProfileConfig::filename`] = `"profile.toml"`).
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "https://example.com/api"
//!
//! [profile]
//! max_photo_bytes = 5242880    # 5 MiB
//! min_password_len = 6
//! success_banner_secs = 3
//! ```
//!
//! ## Types
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`ProfileConfig`] | Top-level config. Builder helpers, TOML (de)serialisation, canonical filename. |
//! | [`ApiConfig`] | Remote API location. |
//! | [`ProfileLimits`] | Form and upload limits, banner timing. |
//!
//! All structs derive `Default` so that a missing or empty config file is
//! equivalent to the default configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Top-level configuration stored in `profile.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub profile: ProfileLimits,
}

/// Remote API configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL every endpoint path is appended to. No trailing slash needed.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "/api".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// Limits applied by the profile form.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProfileLimits {
    /// Largest accepted photo upload, in bytes.
    #[serde(default = "default_max_photo_bytes")]
    pub max_photo_bytes: u64,
    #[serde(default = "default_min_password_len")]
    pub min_password_len: usize,
    /// How long a success banner stays visible.
    #[serde(default = "default_success_banner_secs")]
    pub success_banner_secs: u64,
}

fn default_max_photo_bytes() -> u64 {
    5 * 1024 * 1024
}

fn default_min_password_len() -> usize {
    6
}

fn default_success_banner_secs() -> u64 {
    3
}

impl Default for ProfileLimits {
    fn default() -> Self {
        Self {
            max_photo_bytes: default_max_photo_bytes(),
            min_password_len: default_min_password_len(),
            success_banner_secs: default_success_banner_secs(),
        }
    }
}

impl ProfileLimits {
    pub fn success_banner_delay(&self) -> Duration {
        Duration::from_secs(self.success_banner_secs)
    }
}

impl ProfileConfig {
    /// Create a config pointing at the given API base URL.
    pub fn new(base_url: String) -> Self {
        Self {
            api: ApiConfig { base_url },
            profile: ProfileLimits::default(),
        }
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "profile.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
