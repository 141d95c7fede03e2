//! User interaction utilities for the CLI.
//!
//! Responsibilities:
//! - Confirm destructive operations before they are sent.
//! - Refuse to prompt when stdin is not a terminal, so scripts never hang.

use std::io::IsTerminal;

use anyhow::{Context, Result};
use dialoguer::Confirm;
use es_client::ClientError;

/// Prompt the user to confirm deleting document `id` from `index`.
///
/// Returns `Ok(false)` when the user declines. When stdin is not a terminal
/// this fails with an invalid-input error asking for `--yes`.
pub fn confirm_delete(index: &str, id: &str) -> Result<bool> {
    if !std::io::stdin().is_terminal() {
        return Err(ClientError::InvalidInput(
            "refusing to delete without confirmation; pass --yes when not running interactively"
                .to_string(),
        )
        .into());
    }

    let confirmed = Confirm::new()
        .with_prompt(format!("Delete document '{}' from index '{}'?", id, index))
        .default(false)
        .interact()
        .context("Failed to read confirmation")?;

    if !confirmed {
        eprintln!("Delete cancelled.");
    }
    Ok(confirmed)
}
