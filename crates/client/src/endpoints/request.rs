//! Request dispatch shared by every endpoint.
//!
//! Attaches the cookies that apply to the request URL, absorbs the cookies
//! set by the response, and turns non-success responses into errors.
//! Requests are sent exactly once.

use reqwest::header::{COOKIE, HeaderValue};
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::cookies::CookieStore;
use crate::error::{ClientError, Result};
use crate::models::ErrorBody;

/// Send a request with ambient cookies, returning the raw response.
///
/// The status is not inspected here; callers decide how a failure maps onto
/// [`ClientError`] (see [`FailedResponse`]).
pub(crate) async fn send_request(
    http: &Client,
    builder: RequestBuilder,
    jar: &mut dyn CookieStore,
) -> Result<Response> {
    let mut request = builder.build()?;

    if let Some(cookies) = jar.cookie_header(request.url()) {
        let value = HeaderValue::from_str(&cookies)
            .map_err(|e| ClientError::CookieStore(format!("invalid Cookie header: {e}")))?;
        request.headers_mut().insert(COOKIE, value);
    }

    let method = request.method().clone();
    let url = request.url().clone();
    let response = http.execute(request).await?;

    debug!(
        method = %method,
        url = %url,
        status = response.status().as_u16(),
        "Received response"
    );

    if jar.store_response_cookies(response.headers()) {
        jar.persist()?;
    }

    Ok(response)
}

/// A non-success response, with its body reduced to a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct FailedResponse {
    pub status: StatusCode,
    pub url: String,
    pub message: String,
}

impl FailedResponse {
    /// Consume the response body.
    ///
    /// `{"error": "..."}` bodies yield their message; anything else is kept
    /// as text.
    pub async fn read(response: Response) -> Self {
        let status = response.status();
        let url = response.url().to_string();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Could not read error response body".to_string());

        let message = match serde_json::from_str::<ErrorBody>(&body) {
            Ok(parsed) => parsed.error,
            Err(_) if body.trim().is_empty() => status_text(status).to_string(),
            Err(_) => body,
        };

        Self {
            status,
            url,
            message,
        }
    }

    /// 401 becomes [`ClientError::Unauthorized`]; everything else
    /// [`ClientError::ApiError`].
    pub fn into_error(self) -> ClientError {
        if self.status == StatusCode::UNAUTHORIZED {
            return ClientError::Unauthorized(self.url);
        }
        ClientError::ApiError {
            status: self.status.as_u16(),
            status_text: status_text(self.status).to_string(),
            url: self.url,
            message: self.message,
        }
    }
}

/// Fail with the classified error unless the response is a success.
pub(crate) async fn ensure_success(response: Response) -> Result<Response> {
    if response.status().is_success() {
        Ok(response)
    } else {
        Err(FailedResponse::read(response).await.into_error())
    }
}

/// Read the body as JSON, reporting malformed bodies as
/// [`ClientError::InvalidResponse`].
pub(crate) async fn parse_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    let body = response.text().await?;
    serde_json::from_str(&body).map_err(|e| ClientError::InvalidResponse(e.to_string()))
}

fn status_text(status: StatusCode) -> &'static str {
    status.canonical_reason().unwrap_or("Unknown Status")
}
