//! Social space models.

use natter_config::constants::MAX_SPACE_NAME_LEN;
use serde::{Deserialize, Serialize};

use super::users::validate_username;
use crate::error::{ClientError, Result};

/// Body of `POST /spaces`.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct CreateSpaceRequest {
    pub name: String,
    pub owner: String,
}

impl CreateSpaceRequest {
    pub fn new(name: impl Into<String>, owner: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            owner: owner.into(),
        }
    }

    /// Apply the same limits the API enforces before sending the request.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Validation`] if the name is longer than
    /// [`MAX_SPACE_NAME_LEN`] characters or the owner is not a valid username.
    pub fn validate(&self) -> Result<()> {
        if self.name.chars().count() > MAX_SPACE_NAME_LEN {
            return Err(ClientError::Validation(format!(
                "space name must be at most {MAX_SPACE_NAME_LEN} characters"
            )));
        }
        validate_username("owner", &self.owner)
    }
}

/// Fields read from a successful `POST /spaces` response.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct CreatedSpace {
    pub name: String,
    pub uri: String,
}
