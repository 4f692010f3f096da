//! User registration endpoint.

use reqwest::Client;
use tracing::debug;

use crate::cookies::CookieStore;
use crate::endpoints::{ensure_success, parse_json, send_request};
use crate::error::Result;
use crate::models::{NewUser, RegisteredUser};

/// Register a new user with `POST /users`.
pub async fn register_user(
    http: &Client,
    base_url: &str,
    user: &NewUser,
    jar: &mut dyn CookieStore,
) -> Result<RegisteredUser> {
    debug!(username = %user.username, "Registering user");

    let builder = http.post(format!("{base_url}/users")).json(user);
    let response = send_request(http, builder, jar).await?;
    let response = ensure_success(response).await?;

    parse_json(response).await
}
