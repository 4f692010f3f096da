//! Register command.
//!
//! Invariants:
//! - The password is asked for twice when prompted interactively.

use anyhow::{Context, Result};
use natter_client::NewUser;
use natter_config::Config;

use crate::commands::{build_client, password_or_prompt};
use crate::output::{OutputFormat, print_result};

pub async fn run(
    config: &Config,
    username: String,
    password: Option<String>,
    format: OutputFormat,
) -> Result<()> {
    let password = password_or_prompt(password, true)?;
    let mut client = build_client(config)?;

    let user = client
        .register_user(&NewUser::new(username, password))
        .await
        .context("Failed to register user")?;

    print_result(
        format,
        &user,
        &format!("Registered user {}", user.username),
    )
}
