//! Error types for the Natter client.

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during Natter client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Transport failure: DNS, connect, TLS, timeout, or body read.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// The session endpoint refused the supplied credentials.
    #[error("Authentication failed ({status}): {message}")]
    AuthFailed { status: u16, message: String },

    /// An authenticated request was rejected with 401.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// No anti-forgery token is available in the cookie store.
    #[error("No csrfToken cookie found, please log in")]
    MissingCsrfToken,

    /// Any other non-success response.
    #[error("API error ({status} {status_text}) at {url}: {message}")]
    ApiError {
        status: u16,
        status_text: String,
        url: String,
        message: String,
    },

    /// The response body could not be read as the expected JSON.
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    /// Credentials that cannot be expressed as a Basic auth header.
    #[error("Invalid credentials: {0}")]
    InvalidCredentials(String),

    /// Input rejected before a request was sent.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The cookie jar could not be loaded or saved.
    #[error("Cookie store error: {0}")]
    CookieStore(String),
}

impl ClientError {
    /// Check if this error means the user has to (re-)authenticate.
    pub fn is_auth_error(&self) -> bool {
        matches!(
            self,
            Self::AuthFailed { .. } | Self::Unauthorized(_) | Self::MissingCsrfToken
        )
    }

    /// Check if this error was raised by the transport rather than the server.
    pub fn is_transport_error(&self) -> bool {
        matches!(self, Self::HttpError(_))
    }

    /// HTTP status carried by the error, if the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::AuthFailed { status, .. } | Self::ApiError { status, .. } => Some(*status),
            Self::Unauthorized(_) => Some(401),
            Self::HttpError(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_is_auth_error() {
        let err = ClientError::AuthFailed {
            status: 401,
            message: "bad credentials".to_string(),
        };
        assert!(err.is_auth_error());
        assert!(ClientError::Unauthorized("/spaces".to_string()).is_auth_error());
        assert!(ClientError::MissingCsrfToken.is_auth_error());

        let err = ClientError::Validation("name too long".to_string());
        assert!(!err.is_auth_error());
    }

    #[test]
    fn test_api_error_display_contains_status_text() {
        let err = ClientError::ApiError {
            status: 500,
            status_text: "Internal Server Error".to_string(),
            url: "https://localhost:4567/spaces".to_string(),
            message: "boom".to_string(),
        };
        let text = err.to_string();
        assert!(text.contains("500 Internal Server Error"));
        assert!(text.contains("/spaces"));
        assert_eq!(err.status(), Some(500));
    }

    #[test]
    fn test_status_of_local_errors_is_none() {
        assert_eq!(ClientError::MissingCsrfToken.status(), None);
        assert_eq!(
            ClientError::Unauthorized("/spaces".to_string()).status(),
            Some(401)
        );
    }
}
