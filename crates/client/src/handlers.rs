//! Form submission handlers for the login and space-creation flows.
//!
//! Each handler reads its form, performs one request through the
//! [`NatterClient`] and reduces the result to an outcome. Errors never
//! escape a handler; they are logged and carried in the outcome. Where the
//! flow would move the user to another page, the outcome names that page.

use secrecy::SecretString;
use tracing::{error, info, warn};

use crate::auth::Credentials;
use crate::client::NatterClient;
use crate::error::ClientError;
use crate::models::{CreateSpaceRequest, CreatedSpace};

/// Fields of the login form.
#[derive(Debug, Clone)]
pub struct LoginForm {
    pub username: String,
    pub password: SecretString,
}

impl LoginForm {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: SecretString::new(password.into().into()),
        }
    }
}

/// Fields of the create-space form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpaceForm {
    pub name: String,
    pub owner: String,
}

impl SpaceForm {
    pub fn new(name: impl Into<String>, owner: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            owner: owner.into(),
        }
    }
}

/// Result of submitting the login form.
#[derive(Debug)]
pub enum LoginOutcome {
    /// The token is stored; continue to the application page.
    Authenticated { navigate_to: String },
    /// The server refused the credentials. Nothing was stored.
    Rejected { status: u16, message: String },
    /// The request could not be completed.
    Failed(ClientError),
}

impl LoginOutcome {
    /// Page to move to, if any.
    pub fn navigation(&self) -> Option<&str> {
        match self {
            Self::Authenticated { navigate_to } => Some(navigate_to),
            Self::Rejected { .. } | Self::Failed(_) => None,
        }
    }
}

/// Result of submitting the create-space form.
#[derive(Debug)]
pub enum SpaceOutcome {
    Created(CreatedSpace),
    /// The session is missing or was rejected; go back to the login page.
    ReauthenticationRequired { navigate_to: String },
    Failed(ClientError),
}

impl SpaceOutcome {
    /// Page to move to, if any.
    pub fn navigation(&self) -> Option<&str> {
        match self {
            Self::ReauthenticationRequired { navigate_to } => Some(navigate_to),
            Self::Created(_) | Self::Failed(_) => None,
        }
    }
}

/// Submit the login form.
pub async fn submit_login(client: &mut NatterClient, form: &LoginForm) -> LoginOutcome {
    let credentials = Credentials {
        username: form.username.clone(),
        password: form.password.clone(),
    };

    match client.login(&credentials).await {
        Ok(()) => LoginOutcome::Authenticated {
            navigate_to: client.pages().app_page.clone(),
        },
        Err(ClientError::AuthFailed { status, message }) => {
            warn!(username = %form.username, status, message = %message, "Login rejected");
            LoginOutcome::Rejected { status, message }
        }
        Err(e) => {
            error!(error = %e, "Error logging in");
            LoginOutcome::Failed(e)
        }
    }
}

/// Submit the create-space form.
///
/// A missing `csrfToken` cookie is handled like a 401: the server would
/// refuse the request, so it is not sent.
pub async fn submit_create_space(client: &mut NatterClient, form: &SpaceForm) -> SpaceOutcome {
    let request = CreateSpaceRequest::new(form.name.clone(), form.owner.clone());

    match client.create_space(&request).await {
        Ok(space) => {
            info!(name = %space.name, uri = %space.uri, "Created space");
            SpaceOutcome::Created(space)
        }
        Err(e @ (ClientError::Unauthorized(_) | ClientError::MissingCsrfToken)) => {
            warn!(error = %e, "Session not accepted, returning to login");
            SpaceOutcome::ReauthenticationRequired {
                navigate_to: client.pages().login_page.clone(),
            }
        }
        Err(e) => {
            error!(error = %e, "Error creating space");
            SpaceOutcome::Failed(e)
        }
    }
}
