//! Path helpers for persisted client state.
//!
//! Responsibilities:
//! - Determine the default cookie jar location.
//! - Use `directories` crate for platform-appropriate paths.
//!
//! Does NOT handle:
//! - File I/O operations.

use std::path::PathBuf;

use crate::constants::COOKIE_JAR_FILE_NAME;
use crate::loader::ConfigError;

/// Returns the default path of the persisted cookie jar.
///
/// - Linux: `~/.local/share/natter/cookies.json`
/// - macOS: `~/Library/Application Support/natter/cookies.json`
/// - Windows: `%AppData%\natter\data\cookies.json`
pub fn default_cookie_jar_path() -> Result<PathBuf, ConfigError> {
    let proj_dirs = directories::ProjectDirs::from("", "", "natter").ok_or_else(|| {
        ConfigError::DataDirUnavailable("no home directory for the current user".to_string())
    })?;

    Ok(proj_dirs.data_dir().join(COOKIE_JAR_FILE_NAME))
}
