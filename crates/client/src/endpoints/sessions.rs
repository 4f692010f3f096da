//! Session endpoints.

use natter_config::constants::CSRF_HEADER_NAME;
use reqwest::Client;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use tracing::debug;

use crate::auth::Credentials;
use crate::cookies::CookieStore;
use crate::endpoints::{FailedResponse, ensure_success, parse_json, send_request};
use crate::error::{ClientError, Result};
use crate::models::SessionToken;

/// Log in with Basic credentials.
///
/// Sends `POST /sessions` with no body. The session cookie set by the
/// server lands in `jar`; the returned token is the anti-forgery value.
///
/// # Errors
///
/// Returns [`ClientError::AuthFailed`] for any non-success status and
/// [`ClientError::InvalidResponse`] if the body has no `token`.
pub async fn create_session(
    http: &Client,
    base_url: &str,
    credentials: &Credentials,
    jar: &mut dyn CookieStore,
) -> Result<SessionToken> {
    debug!(username = %credentials.username, "Creating session");

    let builder = http
        .post(format!("{base_url}/sessions"))
        .header(AUTHORIZATION, credentials.authorization_header()?)
        .header(CONTENT_TYPE, "application/json");
    let response = send_request(http, builder, jar).await?;

    if !response.status().is_success() {
        let failed = FailedResponse::read(response).await;
        return Err(ClientError::AuthFailed {
            status: failed.status.as_u16(),
            message: failed.message,
        });
    }

    parse_json(response).await
}

/// Log out, invalidating the server-side session.
///
/// Sends `DELETE /sessions` with the anti-forgery token.
pub async fn delete_session(
    http: &Client,
    base_url: &str,
    csrf_token: &str,
    jar: &mut dyn CookieStore,
) -> Result<()> {
    debug!("Deleting session");

    let builder = http
        .delete(format!("{base_url}/sessions"))
        .header(CSRF_HEADER_NAME, csrf_token);
    let response = send_request(http, builder, jar).await?;
    ensure_success(response).await?;
    Ok(())
}
