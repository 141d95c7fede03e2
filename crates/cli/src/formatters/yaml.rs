//! YAML formatter implementation.

use anyhow::Result;
use serde_json::Value;

use super::Formatter;

pub struct YamlFormatter;

impl Formatter for YamlFormatter {
    fn format_value(&self, value: &Value) -> Result<String> {
        let mut output = serde_yaml::to_string(value)?;
        if !output.ends_with('\n') {
            output.push('\n');
        }
        Ok(output)
    }
}
