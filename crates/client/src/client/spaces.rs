//! Social space API methods for [`NatterClient`].

use crate::client::NatterClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{CreateSpaceRequest, CreatedSpace};

impl NatterClient {
    /// Create a social space owned by `request.owner`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ClientError::MissingCsrfToken`] if no login has
    /// happened, checked first, and [`crate::ClientError::Validation`]
    /// before sending if the request breaks the API's limits.
    pub async fn create_space(&mut self, request: &CreateSpaceRequest) -> Result<CreatedSpace> {
        let token = self.csrf_token()?;
        request.validate()?;
        endpoints::create_space(
            &self.http,
            &self.base_url,
            request,
            &token,
            self.cookies.as_mut(),
        )
        .await
    }
}
