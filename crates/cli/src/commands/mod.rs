//! CLI command implementations.

pub mod documents;
pub mod info;
pub mod search;
pub mod settings;

use std::path::PathBuf;

use anyhow::Result;
use es_client::EsClient;
use es_config::Config;
use serde_json::Value;

use crate::formatters::{OutputFormat, get_formatter, output_result};

/// Where and how a command prints its result.
pub(crate) struct OutputOptions {
    pub format: OutputFormat,
    pub depth: Option<usize>,
    pub file: Option<PathBuf>,
}

impl OutputOptions {
    pub(crate) fn emit(&self, value: &Value) -> Result<()> {
        let output = get_formatter(self.format, self.depth).format_value(value)?;
        output_result(&output, self.format, self.file.as_deref())
    }
}

pub(crate) fn build_client(config: &Config) -> Result<EsClient> {
    let client = EsClient::builder().from_config(config).build()?;
    tracing::info!("Connecting to {}", client.base_url());
    Ok(client)
}
