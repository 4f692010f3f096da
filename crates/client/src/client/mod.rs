//! Main Natter API client and API methods.
//!
//! This module provides the primary [`NatterClient`] for interacting with the
//! Natter API. The client owns the cookie store, so the session cookie and
//! the anti-forgery token follow it from call to call.
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//! - `session`: Login, logout and anti-forgery token lookup
//! - `spaces`: Social space methods
//! - `users`: User registration
//!
//! # What this module does NOT handle:
//! - Direct HTTP request implementation (delegated to [`crate::endpoints`])
//! - Turning results into navigation (handled by [`crate::handlers`])
//!
//! # Invariants
//! - Every request carries the cookies that apply to its URL
//! - Requests are never retried; a 401 is reported, not recovered from

pub mod builder;
mod session;
mod spaces;
mod users;

use natter_config::PagesConfig;

use crate::cookies::CookieStore;

/// Natter API client.
///
/// # Creating a Client
///
/// ```rust,ignore
/// use natter_client::NatterClient;
///
/// let client = NatterClient::builder()
///     .base_url("https://localhost:4567".to_string())
///     .build()?;
/// ```
#[derive(Debug)]
pub struct NatterClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) pages: PagesConfig,
    pub(crate) cookies: Box<dyn CookieStore>,
}

impl NatterClient {
    /// Create a new client builder.
    pub fn builder() -> builder::NatterClientBuilder {
        builder::NatterClientBuilder::new()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Navigation targets used by the login and space flows.
    pub fn pages(&self) -> &PagesConfig {
        &self.pages
    }

    pub fn cookie_store(&self) -> &dyn CookieStore {
        self.cookies.as_ref()
    }

    pub fn cookie_store_mut(&mut self) -> &mut dyn CookieStore {
        self.cookies.as_mut()
    }
}
