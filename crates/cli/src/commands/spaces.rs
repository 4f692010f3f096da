//! Spaces command implementation.
//!
//! Responsibilities:
//! - Create a social space through the space-creation flow.
//!
//! Does NOT handle:
//! - Logging in; a missing or rejected session ends with exit code 2.

use anyhow::Result;
use clap::Subcommand;
use natter_client::{SpaceForm, SpaceOutcome, submit_create_space};
use natter_config::Config;

use crate::commands::build_client;
use crate::error::CliError;
use crate::output::{OutputFormat, print_result};

#[derive(Debug, Subcommand)]
pub enum SpacesCommand {
    /// Create a new social space
    Create {
        /// Name of the space (at most 255 characters)
        name: String,
        /// Owner of the space, normally the logged-in user
        #[arg(long, env = "NATTER_USERNAME")]
        owner: String,
    },
}

pub async fn run(config: &Config, command: SpacesCommand, format: OutputFormat) -> Result<()> {
    match command {
        SpacesCommand::Create { name, owner } => run_create(config, name, owner, format).await,
    }
}

async fn run_create(
    config: &Config,
    name: String,
    owner: String,
    format: OutputFormat,
) -> Result<()> {
    let mut client = build_client(config)?;

    match submit_create_space(&mut client, &SpaceForm::new(name, owner)).await {
        SpaceOutcome::Created(space) => print_result(
            format,
            &space,
            &format!("Created space {} at {}", space.name, space.uri),
        ),
        SpaceOutcome::ReauthenticationRequired { navigate_to } => {
            Err(CliError::ReauthenticationRequired { navigate_to }.into())
        }
        SpaceOutcome::Failed(e) => Err(e.into()),
    }
}
