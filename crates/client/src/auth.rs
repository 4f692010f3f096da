//! HTTP Basic credentials for the session endpoint.
//!
//! Credentials only live long enough to build the `Authorization` header
//! of a single login request. They are never persisted.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use secrecy::{ExposeSecret, SecretString};

use crate::error::{ClientError, Result};

/// Username and password submitted by the login form.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: SecretString,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: SecretString::new(password.into().into()),
        }
    }

    /// Build the `Authorization` header value for these credentials.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidCredentials`] if the username contains `:`,
    /// which would make the decoded pair ambiguous.
    pub fn authorization_header(&self) -> Result<String> {
        if self.username.contains(':') {
            return Err(ClientError::InvalidCredentials(
                "username must not contain ':'".to_string(),
            ));
        }
        Ok(basic_auth_header(
            &self.username,
            self.password.expose_secret(),
        ))
    }
}

/// `"Basic " + base64(username + ":" + password)`.
pub fn basic_auth_header(username: &str, password: &str) -> String {
    let encoded = BASE64_STANDARD.encode(format!("{username}:{password}"));
    format!("Basic {encoded}")
}

/// Split a Basic `Authorization` header back into `(username, password)`.
///
/// The pair is split at the first `:`, so passwords may contain colons.
pub fn parse_basic_auth_header(header: &str) -> Option<(String, String)> {
    let encoded = header.strip_prefix("Basic ")?;
    let decoded = BASE64_STANDARD.decode(encoded.trim()).ok()?;
    let decoded = String::from_utf8(decoded).ok()?;
    let (username, password) = decoded.split_once(':')?;
    Some((username.to_string(), password.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_basic_auth_header_known_value() {
        // RFC 7617 example
        assert_eq!(
            basic_auth_header("Aladdin", "open sesame"),
            "Basic QWxhZGRpbjpvcGVuIHNlc2FtZQ=="
        );
    }

    #[test]
    fn test_password_with_colons_round_trips() {
        let header = basic_auth_header("demo", "pa:ss:word");
        assert_eq!(
            parse_basic_auth_header(&header),
            Some(("demo".to_string(), "pa:ss:word".to_string()))
        );
    }

    #[test]
    fn test_username_with_colon_rejected() {
        let creds = Credentials::new("de:mo", "password");
        assert!(matches!(
            creds.authorization_header(),
            Err(ClientError::InvalidCredentials(_))
        ));
    }

    #[test]
    fn test_parse_rejects_other_schemes() {
        assert_eq!(parse_basic_auth_header("Bearer abc"), None);
        assert_eq!(parse_basic_auth_header("Basic !!!"), None);
    }

    #[test]
    fn test_password_not_exposed_in_debug() {
        let creds = Credentials::new("demo", "secret-password-45678");
        let debug_output = format!("{:?}", creds);
        assert!(!debug_output.contains("secret-password-45678"));
        assert!(debug_output.contains("demo"));
    }

    proptest! {
        #[test]
        fn prop_header_is_base64_of_pair(
            username in "[^:]{0,32}",
            password in any::<String>(),
        ) {
            let header = Credentials::new(username.clone(), password.clone())
                .authorization_header()
                .unwrap();
            let expected = format!(
                "Basic {}",
                BASE64_STANDARD.encode(format!("{username}:{password}"))
            );
            prop_assert_eq!(&header, &expected);
            prop_assert_eq!(parse_basic_auth_header(&header), Some((username, password)));
        }
    }
}
