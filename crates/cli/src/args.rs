//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Parse command-line arguments and environment variables.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not validate configuration values (see `natter_config::ConfigLoader`).

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::commands;
use crate::output::OutputFormat;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Parser)]
#[command(name = "natter")]
#[command(about = "Natter CLI - log in and manage social spaces from the command line", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  natter register demo\n  natter login -u demo\n  natter spaces create 'Rust fans' --owner demo\n  natter cookies\n  natter logout\n"
)]
pub struct Cli {
    /// Base URL of the Natter API (e.g., https://localhost:4567)
    #[arg(short, long, global = true, env = "NATTER_BASE_URL")]
    pub base_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true, env = "NATTER_TIMEOUT")]
    pub timeout: Option<u64>,

    /// Skip TLS certificate verification (for self-signed certificates)
    #[arg(long, global = true, env = "NATTER_SKIP_VERIFY")]
    pub skip_verify: bool,

    /// Cookie jar shared between invocations (defaults to the user data directory)
    #[arg(long, global = true, env = "NATTER_COOKIE_JAR", value_name = "FILE")]
    pub cookie_jar: Option<PathBuf>,

    /// Keep cookies in memory only for this invocation (wins over --cookie-jar)
    #[arg(long, global = true)]
    pub no_cookie_jar: bool,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,

    /// Log format written to stderr (filter with RUST_LOG)
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Log in and store the session cookies
    Login {
        /// Username
        #[arg(short, long, env = "NATTER_USERNAME")]
        username: String,

        /// Password (will prompt if not provided)
        #[arg(short, long, env = "NATTER_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },

    /// End the session and forget the anti-forgery token
    Logout,

    /// Register a new user
    Register {
        /// Username: a letter followed by 1 to 29 letters or digits
        username: String,

        /// Password, at least 8 characters (will prompt if not provided)
        #[arg(short, long, env = "NATTER_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },

    /// Manage social spaces
    Spaces {
        #[command(subcommand)]
        command: commands::spaces::SpacesCommand,
    },

    /// Show the cookies held in the cookie jar
    Cookies {
        /// Print only what a page script would see in `document.cookie`
        #[arg(long)]
        document: bool,
    },

    /// Inspect the effective configuration
    Config {
        #[command(subcommand)]
        command: commands::config::ConfigCommand,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_spaces_create() {
        let cli = Cli::try_parse_from([
            "natter",
            "--base-url",
            "http://127.0.0.1:4567",
            "spaces",
            "create",
            "n1",
            "--owner",
            "demo",
        ])
        .unwrap();

        assert_eq!(cli.base_url.as_deref(), Some("http://127.0.0.1:4567"));
        match cli.command {
            Commands::Spaces {
                command: commands::spaces::SpacesCommand::Create { name, owner },
            } => {
                assert_eq!(name, "n1");
                assert_eq!(owner, "demo");
            }
            _ => panic!("Expected spaces create"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["natter", "logout", "--no-cookie-jar", "-o", "json"]).unwrap();
        assert!(cli.no_cookie_jar);
        assert_eq!(cli.output, OutputFormat::Json);
        assert!(matches!(cli.command, Commands::Logout));
    }
}
