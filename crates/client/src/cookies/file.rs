//! JSON-backed cookie store.
//!
//! Lets `natter login` and a later `natter spaces create` share the session
//! cookie and the anti-forgery token across processes.
//!
//! # Invariants
//! - Writes are atomic (temp file + rename)
//! - A missing file is an empty jar; an unreadable file is logged and replaced on next persist

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{Cookie, CookieStore, MemoryCookieStore};
use crate::error::{ClientError, Result};

#[derive(Debug, Default, Serialize, Deserialize)]
struct CookieJarFile {
    cookies: Vec<Cookie>,
}

/// A cookie store persisted as JSON at a fixed path.
#[derive(Debug)]
pub struct FileCookieStore {
    path: PathBuf,
    inner: MemoryCookieStore,
}

impl FileCookieStore {
    /// Open the jar at `path`, starting empty if the file does not exist.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let inner = match Self::load(&path) {
            Ok(Some(file)) => MemoryCookieStore::from_cookies(file.cookies),
            Ok(None) => MemoryCookieStore::new(),
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "Failed to read cookie jar, starting with an empty one"
                );
                MemoryCookieStore::new()
            }
        };
        Self { path, inner }
    }

    /// Location of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(path: &Path) -> Result<Option<CookieJarFile>> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(ClientError::CookieStore(e.to_string())),
        };
        serde_json::from_str(&content)
            .map(Some)
            .map_err(|e| ClientError::CookieStore(format!("invalid cookie jar: {e}")))
    }
}

impl CookieStore for FileCookieStore {
    fn set(&mut self, cookie: Cookie) {
        self.inner.set(cookie);
    }

    fn remove(&mut self, name: &str) -> Option<Cookie> {
        self.inner.remove(name)
    }

    fn cookies(&self) -> Vec<Cookie> {
        self.inner.cookies()
    }

    fn persist(&self) -> Result<()> {
        let io_err = |context: &str, e: std::io::Error| {
            ClientError::CookieStore(format!("{context} {}: {e}", self.path.display()))
        };

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)
                .map_err(|e| io_err("failed to create directory for", e))?;
        }

        let file = CookieJarFile {
            cookies: self.inner.cookies(),
        };
        let content = serde_json::to_string_pretty(&file)
            .map_err(|e| ClientError::CookieStore(e.to_string()))?;

        let temp_path = self.path.with_extension("tmp");
        std::fs::write(&temp_path, content).map_err(|e| io_err("failed to write", e))?;
        std::fs::rename(&temp_path, &self.path).map_err(|e| io_err("failed to replace", e))?;

        tracing::debug!(
            path = %self.path.display(),
            count = file.cookies.len(),
            "Cookie jar saved"
        );
        Ok(())
    }
}
