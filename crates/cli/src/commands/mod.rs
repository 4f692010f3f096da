//! Command implementations.
//!
//! Each command builds its own [`NatterClient`] from the loaded config, so
//! the cookie jar is opened once per invocation.

pub mod config;
pub mod cookies;
pub mod login;
pub mod logout;
pub mod register;
pub mod spaces;

use anyhow::{Context, Result};
use natter_client::NatterClient;
use natter_config::Config;

pub(crate) fn build_client(config: &Config) -> Result<NatterClient> {
    NatterClient::builder()
        .from_config(config)
        .build()
        .context("Failed to create Natter client")
}

/// Return `value`, or prompt for a password on the terminal.
pub(crate) fn password_or_prompt(value: Option<String>, confirm: bool) -> Result<String> {
    if let Some(password) = value {
        return Ok(password);
    }

    let mut prompt = dialoguer::Password::new().with_prompt("Password");
    if confirm {
        prompt = prompt.with_confirmation("Repeat password", "Passwords do not match");
    }
    prompt.interact().context("Failed to read password")
}
