//! Logout command.

use anyhow::{Context, Result};
use natter_config::Config;
use serde_json::json;

use crate::commands::build_client;
use crate::output::{OutputFormat, print_result};

pub async fn run(config: &Config, format: OutputFormat) -> Result<()> {
    let mut client = build_client(config)?;
    client.logout().await.context("Failed to log out")?;
    print_result(format, &json!({ "logged_out": true }), "Logged out")
}
