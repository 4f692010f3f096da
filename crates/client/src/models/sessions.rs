//! Session models.

use serde::Deserialize;

/// Body of a successful `POST /sessions`.
///
/// `token` is the anti-forgery value the client stores as the `csrfToken`
/// cookie.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct SessionToken {
    pub token: String,
}
