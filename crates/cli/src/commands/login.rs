//! Login command.
//!
//! Runs the login flow and leaves the session cookie and the `csrfToken`
//! cookie in the cookie jar for later invocations.

use anyhow::Result;
use natter_client::{ClientError, LoginForm, LoginOutcome, submit_login};
use natter_config::Config;
use serde_json::json;

use crate::commands::{build_client, password_or_prompt};
use crate::output::{OutputFormat, print_result};

pub async fn run(
    config: &Config,
    username: String,
    password: Option<String>,
    format: OutputFormat,
) -> Result<()> {
    let password = password_or_prompt(password, false)?;
    let mut client = build_client(config)?;

    let form = LoginForm::new(username.clone(), password);
    match submit_login(&mut client, &form).await {
        LoginOutcome::Authenticated { navigate_to } => print_result(
            format,
            &json!({ "username": username, "navigate_to": navigate_to }),
            &format!("Logged in as {username}. Continue at {navigate_to}"),
        ),
        LoginOutcome::Rejected { status, message } => {
            Err(ClientError::AuthFailed { status, message }.into())
        }
        LoginOutcome::Failed(e) => Err(e.into()),
    }
}
