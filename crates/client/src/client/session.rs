//! Client-level session management.
//!
//! # Invariants
//! - The anti-forgery token is read through [`get_cookie`] over the store's
//!   document cookie string, the same view a page script has
//! - The `csrfToken` cookie is only written after a successful login

use natter_config::constants::CSRF_COOKIE_NAME;
use tracing::info;

use crate::auth::Credentials;
use crate::client::NatterClient;
use crate::cookies::{Cookie, get_cookie};
use crate::endpoints;
use crate::error::{ClientError, Result};

impl NatterClient {
    /// Log in and store the returned anti-forgery token as the `csrfToken`
    /// cookie (`Secure; SameSite=Strict`).
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::AuthFailed`] if the server rejects the
    /// credentials. Nothing is written to the cookie store in that case
    /// apart from cookies the server itself set.
    pub async fn login(&mut self, credentials: &Credentials) -> Result<()> {
        let session = endpoints::create_session(
            &self.http,
            &self.base_url,
            credentials,
            self.cookies.as_mut(),
        )
        .await?;

        self.cookies.set(Cookie::csrf_token(session.token));
        self.cookies.persist()?;

        info!(username = %credentials.username, "Logged in");
        Ok(())
    }

    /// Log out and drop the `csrfToken` cookie.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::MissingCsrfToken`] without contacting the
    /// server when no token is stored.
    pub async fn logout(&mut self) -> Result<()> {
        let token = self.csrf_token()?;
        endpoints::delete_session(&self.http, &self.base_url, &token, self.cookies.as_mut())
            .await?;

        self.cookies.remove(CSRF_COOKIE_NAME);
        self.cookies.persist()?;

        info!("Logged out");
        Ok(())
    }

    /// The stored anti-forgery token.
    pub fn csrf_token(&self) -> Result<String> {
        get_cookie(&self.cookies.document_cookie(), CSRF_COOKIE_NAME)
            .ok_or(ClientError::MissingCsrfToken)
    }

    /// Whether a login has stored an anti-forgery token.
    pub fn has_session(&self) -> bool {
        self.csrf_token().is_ok()
    }
}
