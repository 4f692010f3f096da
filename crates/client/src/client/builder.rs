//! Client builder for constructing [`NatterClient`] instances.
//!
//! This module is responsible for:
//! - Providing a fluent builder API for client configuration
//! - Validating and normalizing the base URL (removing trailing slashes)
//! - Configuring the underlying HTTP client (timeouts, redirects, TLS verification)
//! - Choosing the cookie store (injected, file-backed from config, or in-memory)
//!
//! # Invariants
//! - `base_url` is required and must be an absolute http(s) URL
//! - `skip_verify` only affects HTTPS connections; HTTP connections log a warning

use std::time::Duration;

use natter_config::{
    Config, PagesConfig,
    constants::{DEFAULT_MAX_REDIRECTS, DEFAULT_TIMEOUT_SECS},
};
use url::Url;

use crate::client::NatterClient;
use crate::cookies::{CookieStore, FileCookieStore, MemoryCookieStore};
use crate::error::{ClientError, Result};

/// Builder for creating a new [`NatterClient`].
#[derive(Debug)]
pub struct NatterClientBuilder {
    base_url: Option<String>,
    skip_verify: bool,
    timeout: Duration,
    pages: PagesConfig,
    cookie_store: Option<Box<dyn CookieStore>>,
}

impl Default for NatterClientBuilder {
    fn default() -> Self {
        Self {
            base_url: None,
            skip_verify: false,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            pages: PagesConfig::default(),
            cookie_store: None,
        }
    }
}

impl NatterClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL of the Natter API, e.g. `https://localhost:4567`.
    ///
    /// Trailing slashes will be automatically removed.
    pub fn base_url(mut self, url: String) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Set whether to skip TLS certificate verification.
    ///
    /// # Security Warning
    /// Only use this against a development server with a self-signed
    /// certificate.
    pub fn skip_verify(mut self, skip: bool) -> Self {
        self.skip_verify = skip;
        self
    }

    /// Set the request timeout.
    ///
    /// Default is 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the pages the login and space flows navigate to.
    pub fn pages(mut self, pages: PagesConfig) -> Self {
        self.pages = pages;
        self
    }

    /// Use `store` for cookies instead of a fresh in-memory store.
    pub fn cookie_store(mut self, store: Box<dyn CookieStore>) -> Self {
        self.cookie_store = Some(store);
        self
    }

    /// Create a client builder from configuration.
    ///
    /// A configured cookie jar path opens a [`FileCookieStore`]; without one
    /// cookies stay in memory.
    pub fn from_config(mut self, config: &Config) -> Self {
        self.base_url = Some(config.connection.base_url.clone());
        self.skip_verify = config.connection.skip_verify;
        self.timeout = config.connection.timeout;
        self.pages = config.pages.clone();
        if let Some(path) = &config.cookie_jar {
            self.cookie_store = Some(Box::new(FileCookieStore::open(path)));
        }
        self
    }

    /// Normalize a base URL by removing trailing slashes.
    ///
    /// - `"https://localhost:4567/"` -> `"https://localhost:4567"`
    /// - `"https://natter.example.com//"` -> `"https://natter.example.com"`
    fn normalize_base_url(url: String) -> String {
        url.trim_end_matches('/').to_string()
    }

    /// Build the [`NatterClient`] with the configured options.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] if `base_url` is missing or not an
    /// absolute http(s) URL.
    /// Returns `ClientError::HttpError` if the HTTP client fails to build.
    pub fn build(self) -> Result<NatterClient> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::InvalidUrl("base_url is required".to_string()))?;
        let base_url = Self::normalize_base_url(base_url);

        let parsed =
            Url::parse(&base_url).map_err(|e| ClientError::InvalidUrl(format!("{base_url}: {e}")))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ClientError::InvalidUrl(format!(
                "{base_url}: scheme must be http or https"
            )));
        }

        let mut http_builder = reqwest::Client::builder()
            .timeout(self.timeout)
            .redirect(reqwest::redirect::Policy::limited(DEFAULT_MAX_REDIRECTS));

        if self.skip_verify {
            if parsed.scheme() == "https" {
                http_builder = http_builder.danger_accept_invalid_certs(true);
            } else {
                tracing::warn!(
                    "skip_verify=true has no effect on HTTP URLs. TLS verification only applies to HTTPS connections."
                );
            }
        }

        let http = http_builder.build()?;
        let cookies = self
            .cookie_store
            .unwrap_or_else(|| Box::new(MemoryCookieStore::new()));

        Ok(NatterClient {
            http,
            base_url,
            pages: self.pages,
            cookies,
        })
    }
}
