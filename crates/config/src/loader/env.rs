//! Environment variable parsing for configuration.
//!
//! Responsibilities:
//! - Read and parse `NATTER_*` environment variables.
//! - Apply environment variable values to a ConfigLoader instance.
//! - Provide helper functions for reading env vars with empty/whitespace filtering.
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed (leading/trailing whitespace removed).
//! - Invalid numeric or boolean values return ConfigError::InvalidValue.

use std::path::PathBuf;
use std::time::Duration;

use super::builder::ConfigLoader;
use super::error::ConfigError;

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// `true`/`false`/`1`/`0`, case-insensitive.
fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}

/// Apply environment variable configuration to the loader.
pub fn apply_env(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    if let Some(url) = env_var_or_none("NATTER_BASE_URL") {
        loader.set_base_url(Some(url));
    }
    if let Some(skip) = env_var_or_none("NATTER_SKIP_VERIFY") {
        loader.set_skip_verify(Some(parse_bool(&skip).ok_or_else(|| {
            ConfigError::InvalidValue {
                var: "NATTER_SKIP_VERIFY".to_string(),
                message: "must be true, false, 1 or 0".to_string(),
            }
        })?));
    }
    if let Some(timeout) = env_var_or_none("NATTER_TIMEOUT") {
        let secs: u64 = timeout.parse().map_err(|_| ConfigError::InvalidValue {
            var: "NATTER_TIMEOUT".to_string(),
            message: "must be a number".to_string(),
        })?;
        loader.set_timeout(Some(Duration::from_secs(secs)));
    }
    if let Some(page) = env_var_or_none("NATTER_APP_PAGE") {
        loader.set_app_page(Some(page));
    }
    if let Some(page) = env_var_or_none("NATTER_LOGIN_PAGE") {
        loader.set_login_page(Some(page));
    }

    // Only if not already set via CLI
    if loader.cookie_jar().is_none()
        && let Some(path) = env_var_or_none("NATTER_COOKIE_JAR")
    {
        loader.set_cookie_jar(Some(PathBuf::from(path)));
    }

    Ok(())
}
