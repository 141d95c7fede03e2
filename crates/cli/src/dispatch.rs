//! Command dispatch logic.
//!
//! Responsibilities:
//! - Route parsed CLI arguments to the command handlers.
//! - Extract the configuration context each command needs.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Configuration loading (see `config_context`).
//!
//! Invariants:
//! - Output options are parsed before any request is sent.
//! - Only `settings` runs with a placeholder context.

use anyhow::Result;

use crate::args::{Cli, Commands};
use crate::commands::{self, OutputOptions};
use crate::config_context::ConfigCommandContext;

/// Dispatch CLI commands to their respective handlers.
pub(crate) async fn run_command(cli: Cli, config: ConfigCommandContext) -> Result<()> {
    let output = OutputOptions {
        format: cli.output.parse()?,
        depth: cli.depth,
        file: cli.output_file.clone(),
    };

    match cli.command {
        Commands::Info => {
            let context = config.into_real()?;
            commands::info::run(context, &output).await?;
        }
        Commands::Search { query, query_file } => {
            let context = config.into_real()?;
            commands::search::run(context, query, query_file, &output).await?;
        }
        Commands::Get { id } => {
            let context = config.into_real()?;
            commands::documents::get(context, &id, &output).await?;
        }
        Commands::Index { id, body } => {
            let context = config.into_real()?;
            commands::documents::index(context, id.as_deref(), &body, &output).await?;
        }
        Commands::Update { id, body } => {
            let context = config.into_real()?;
            commands::documents::update(context, &id, body.as_deref(), &output).await?;
        }
        Commands::Delete { id, yes } => {
            let context = config.into_real()?;
            commands::documents::delete(context, &id, yes, &output).await?;
        }
        Commands::Settings { command } => {
            // Settings commands only need the store location
            commands::settings::run(command, cli.settings_path.as_deref(), &output)?;
        }
    }

    Ok(())
}
