//! Config command: show the effective configuration.

use anyhow::Result;
use clap::Subcommand;
use natter_config::Config;

use crate::output::{OutputFormat, print_result};

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show the configuration after `.env`, environment and flags are applied
    Show,
}

pub fn run(config: &Config, command: ConfigCommand, format: OutputFormat) -> Result<()> {
    match command {
        ConfigCommand::Show => print_result(format, config, &render_config(config)),
    }
}

fn render_config(config: &Config) -> String {
    let cookie_jar = config
        .cookie_jar
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(in memory)".to_string());

    [
        format!("{:<14} {}", "Base URL:", config.connection.base_url),
        format!("{:<14} {}", "Skip verify:", config.connection.skip_verify),
        format!("{:<14} {}s", "Timeout:", config.connection.timeout.as_secs()),
        format!("{:<14} {}", "App page:", config.pages.app_page),
        format!("{:<14} {}", "Login page:", config.pages.login_page),
        format!("{:<14} {}", "Cookie jar:", cookie_jar),
    ]
    .join("\n")
}
