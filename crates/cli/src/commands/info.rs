//! Cluster info command implementation.

use anyhow::{Context, Result};

use super::{OutputOptions, build_client};
use crate::config_context::CommandContext;

pub async fn run(context: CommandContext, output: &OutputOptions) -> Result<()> {
    let client = build_client(&context.config)?;

    let info = client
        .info()
        .await
        .context("Failed to fetch cluster info")?;

    context.remember(&context.index, None);
    output.emit(&info)
}
