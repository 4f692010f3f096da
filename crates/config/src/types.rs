//! Configuration types for the Natter client.
//!
//! Responsibilities:
//! - Define connection settings (URL, TLS verification, timeout).
//! - Define navigation targets used by the login and space flows.
//! - Define the main `Config` structure combining both with the cookie jar location.
//!
//! Does NOT handle:
//! - Configuration loading from `.env`/environment (see `loader` module).
//! - Actual network connections (see client crate).
//!
//! Invariants:
//! - All duration fields are serialized as seconds (integers).
//! - Default values come from `constants`, not magic numbers.

use crate::constants::{
    DEFAULT_APP_PAGE, DEFAULT_BASE_URL, DEFAULT_LOGIN_PAGE, DEFAULT_TIMEOUT_SECS,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Module for serializing Duration as seconds (integer).
mod duration_seconds {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_secs().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}

/// Connection configuration for the Natter API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionConfig {
    /// Base URL of the API (e.g., https://localhost:4567), without trailing slash
    pub base_url: String,
    /// Whether to skip TLS verification (for self-signed certificates)
    pub skip_verify: bool,
    /// Request timeout (serialized as seconds)
    #[serde(with = "duration_seconds")]
    pub timeout: Duration,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            skip_verify: false,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// Pages the UI flows navigate to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PagesConfig {
    /// Target after a successful login.
    pub app_page: String,
    /// Target when an authenticated request is rejected with 401.
    pub login_page: String,
}

impl Default for PagesConfig {
    fn default() -> Self {
        Self {
            app_page: DEFAULT_APP_PAGE.to_string(),
            login_page: DEFAULT_LOGIN_PAGE.to_string(),
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Connection settings
    pub connection: ConnectionConfig,
    /// Navigation targets
    pub pages: PagesConfig,
    /// Location of the persisted cookie jar. `None` keeps cookies in memory only.
    pub cookie_jar: Option<PathBuf>,
}

impl Config {
    /// Create a config pointing at `base_url` with every other value defaulted.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            connection: ConnectionConfig {
                base_url: base_url.into(),
                ..ConnectionConfig::default()
            },
            ..Self::default()
        }
    }
}
