//! Settings command implementation.
//!
//! Responsibilities:
//! - Show, locate and reset the remembered settings file.
//!
//! Does NOT handle:
//! - Writing settings (done after successful cluster commands).

use std::path::Path;

use anyhow::{Context, Result};
use clap::Subcommand;
use es_config::SettingsStore;

use super::OutputOptions;
use crate::config_context::open_store;
use crate::formatters::{get_formatter, output_result};

#[derive(Subcommand)]
pub enum SettingsCommand {
    /// Show the remembered connection, index and last query
    Show,
    /// Print the settings file path
    Path,
    /// Delete the settings file
    Reset,
}

pub fn run(
    command: SettingsCommand,
    settings_path: Option<&Path>,
    output: &OutputOptions,
) -> Result<()> {
    let store = open_store(settings_path).context(
        "Settings file location unavailable; pass --settings-path or set ES_VIEWER_SETTINGS",
    )?;

    match command {
        SettingsCommand::Show => show(&store, output),
        SettingsCommand::Path => {
            println!("{}", store.path().display());
            Ok(())
        }
        SettingsCommand::Reset => reset(&store),
    }
}

/// Read-only: a corrupt file is reported and left in place.
fn show(store: &SettingsStore, output: &OutputOptions) -> Result<()> {
    let settings = store
        .try_load()
        .context("Settings file is unreadable; `es-viewer settings reset` discards it")?
        .unwrap_or_default();
    let formatted = get_formatter(output.format, output.depth).format_settings(&settings)?;
    output_result(&formatted, output.format, output.file.as_deref())
}

fn reset(store: &SettingsStore) -> Result<()> {
    let removed = store
        .reset()
        .with_context(|| format!("Failed to reset settings at {}", store.path().display()))?;
    if removed {
        println!("Removed {}", store.path().display());
    } else {
        println!("No settings file at {}", store.path().display());
    }
    Ok(())
}
