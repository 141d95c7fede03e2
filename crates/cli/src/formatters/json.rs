//! JSON formatter implementation.
//!
//! Responsibilities:
//! - Pretty-print responses with key order exactly as the cluster returned it.

use anyhow::Result;
use serde_json::Value;

use super::Formatter;

/// Pretty-printed JSON.
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format_value(&self, value: &Value) -> Result<String> {
        Ok(format!("{}\n", serde_json::to_string_pretty(value)?))
    }
}
