//! Command dispatch logic.
//!
//! Responsibilities:
//! - Route parsed CLI arguments to appropriate command handlers.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Configuration loading (see `main()`).

use anyhow::Result;
use natter_config::Config;

use crate::args::{Cli, Commands};
use crate::commands;

pub(crate) async fn run_command(cli: Cli, config: Config) -> Result<()> {
    let format = cli.output;
    match cli.command {
        Commands::Login { username, password } => {
            commands::login::run(&config, username, password, format).await?;
        }
        Commands::Logout => {
            commands::logout::run(&config, format).await?;
        }
        Commands::Register { username, password } => {
            commands::register::run(&config, username, password, format).await?;
        }
        Commands::Spaces { command } => {
            commands::spaces::run(&config, command, format).await?;
        }
        Commands::Cookies { document } => {
            commands::cookies::run(&config, document, format)?;
        }
        Commands::Config { command } => {
            commands::config::run(&config, command, format)?;
        }
    }
    Ok(())
}
