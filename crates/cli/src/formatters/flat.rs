//! Flat formatter: one CSV record per tree row.
//!
//! Responsibilities:
//! - Emit the depth-first, parent-indexed rows of a response as CSV.
//!
//! Invariants:
//! - The header row is always present, even for an empty response.
//! - `parent` is the zero-based position of the parent record, empty for top-level rows.

use anyhow::{Context, Result};
use es_client::JsonTree;
use serde_json::Value;

use super::Formatter;

const HEADER: [&str; 5] = ["depth", "parent", "path", "key", "value"];

pub struct FlatFormatter;

impl Formatter for FlatFormatter {
    fn format_value(&self, value: &Value) -> Result<String> {
        let rows = JsonTree::from_value(value).flatten();

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(Vec::new());
        writer.write_record(HEADER)?;
        for row in &rows {
            writer.serialize(row)?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| anyhow::anyhow!("Failed to finish CSV output: {}", e.error()))?;
        String::from_utf8(bytes).context("CSV output was not valid UTF-8")
    }
}
