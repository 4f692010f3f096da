//! User registration for [`NatterClient`].

use crate::client::NatterClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{NewUser, RegisteredUser};

impl NatterClient {
    /// Register a new user. No session is required.
    pub async fn register_user(&mut self, user: &NewUser) -> Result<RegisteredUser> {
        user.validate()?;
        endpoints::register_user(&self.http, &self.base_url, user, self.cookies.as_mut()).await
    }
}
