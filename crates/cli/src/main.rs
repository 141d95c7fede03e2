//! es-viewer - Command-line viewer for Elasticsearch documents.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Execute document operations via the shared client library.
//! - Display responses as a tree, JSON, YAML or flat CSV.
//!
//! Does NOT handle:
//! - HTTP or tree normalization logic (see `crates/client`).
//! - Settings file format (see `crates/config`).
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing to allow `.env` to provide clap defaults.
//! - Logs go to stderr; results go to stdout or `--output-file`.

mod args;
mod commands;
mod config_context;
mod dispatch;
mod error;
mod formatters;
mod input;
mod interactive;

use args::Cli;
use clap::Parser;
use config_context::{CommandContext, ConfigCommandContext};
use dispatch::run_command;
use error::{ExitCode, ExitCodeExt, render_error};
use es_config::ConfigLoader;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() {
    // Load .env file BEFORE CLI parsing so clap env defaults can read .env values
    if let Err(e) = ConfigLoader::new().load_dotenv() {
        eprintln!("Failed to load environment: {}", e);
        std::process::exit(ExitCode::GeneralError.as_i32());
    }

    let cli = Cli::parse();
    init_logging(&cli.log_format);

    let exit_code = match run(cli).await {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("{}", render_error(&e));
            e.exit_code()
        }
    };

    std::process::exit(exit_code.as_i32());
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config_context = if cli.command.needs_connection() {
        ConfigCommandContext::Real(Box::new(CommandContext::load(&cli)?))
    } else {
        ConfigCommandContext::Placeholder
    };

    run_command(cli, config_context).await
}

/// Install the stderr subscriber. `RUST_LOG` overrides the default `warn` level.
fn init_logging(log_format: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format == "json" {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
