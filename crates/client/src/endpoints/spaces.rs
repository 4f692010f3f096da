//! Social space endpoints.

use natter_config::constants::CSRF_HEADER_NAME;
use reqwest::Client;
use tracing::debug;

use crate::cookies::CookieStore;
use crate::endpoints::{ensure_success, parse_json, send_request};
use crate::error::Result;
use crate::models::{CreateSpaceRequest, CreatedSpace};

/// Create a social space.
///
/// Sends `POST /spaces` with a JSON body and the anti-forgery token in
/// `X-CSRF-Token`. The session itself travels in the ambient cookies.
///
/// # Errors
///
/// Returns [`crate::ClientError::Unauthorized`] on 401 and
/// [`crate::ClientError::ApiError`] on any other non-success status.
pub async fn create_space(
    http: &Client,
    base_url: &str,
    request: &CreateSpaceRequest,
    csrf_token: &str,
    jar: &mut dyn CookieStore,
) -> Result<CreatedSpace> {
    debug!(name = %request.name, owner = %request.owner, "Creating space");

    let builder = http
        .post(format!("{base_url}/spaces"))
        .header(CSRF_HEADER_NAME, csrf_token)
        .json(request);
    let response = send_request(http, builder, jar).await?;
    let response = ensure_success(response).await?;

    parse_json(response).await
}
