//! User registration models.

use natter_config::constants::{MAX_USERNAME_LEN, MIN_PASSWORD_LEN};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize, Serializer};

use crate::error::{ClientError, Result};

/// Check `value` against the API's username rule: an ASCII letter followed
/// by 1 to 29 ASCII letters or digits.
///
/// `field` names the offending input in the error message.
pub fn validate_username(field: &str, value: &str) -> Result<()> {
    let mut chars = value.chars();
    let starts_with_letter = chars.next().is_some_and(|c| c.is_ascii_alphabetic());
    let rest_alphanumeric = chars.all(|c| c.is_ascii_alphanumeric());
    let len = value.len();

    if starts_with_letter && rest_alphanumeric && (2..=MAX_USERNAME_LEN).contains(&len) {
        Ok(())
    } else {
        Err(ClientError::Validation(format!(
            "{field} must start with a letter and contain 2 to {MAX_USERNAME_LEN} letters or digits"
        )))
    }
}

fn serialize_secret<S>(secret: &SecretString, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(secret.expose_secret())
}

/// Body of `POST /users`.
#[derive(Debug, Serialize, Clone)]
pub struct NewUser {
    pub username: String,
    #[serde(serialize_with = "serialize_secret")]
    pub password: SecretString,
}

impl NewUser {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: SecretString::new(password.into().into()),
        }
    }

    /// # Errors
    ///
    /// Returns [`ClientError::Validation`] for an invalid username or a
    /// password shorter than [`MIN_PASSWORD_LEN`] characters.
    pub fn validate(&self) -> Result<()> {
        validate_username("username", &self.username)?;
        if self.password.expose_secret().chars().count() < MIN_PASSWORD_LEN {
            return Err(ClientError::Validation(format!(
                "password must be at least {MIN_PASSWORD_LEN} characters"
            )));
        }
        Ok(())
    }
}

/// Body of a successful `POST /users`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct RegisteredUser {
    pub username: String,
}
