//! Tree formatter: the indented row view of a response.

use anyhow::Result;
use es_client::{JsonTree, RowKind};
use serde_json::Value;

use super::Formatter;

/// Indented tree, optionally collapsed below `max_depth` levels.
pub struct TreeFormatter {
    pub max_depth: Option<usize>,
}

impl Formatter for TreeFormatter {
    fn format_value(&self, value: &Value) -> Result<String> {
        let tree = JsonTree::from_value(value);
        if tree.is_empty() {
            let empty = if tree.kind == RowKind::Array { "[]" } else { "{}" };
            return Ok(format!("{}\n", empty));
        }
        Ok(tree.render(self.max_depth))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_search_response_tree() {
        let value = json!({"hits": {"hits": [{"_id": "a"}, {"_id": "b"}]}});
        let output = TreeFormatter { max_depth: None }
            .format_value(&value)
            .unwrap();

        let expected = "\
hits
  hits
    [0]
      _id: a
    [1]
      _id: b
";
        assert_eq!(output, expected);
    }

    #[test]
    fn test_depth_collapses_nested_rows() {
        let value = json!({"hits": {"total": {"value": 2}, "hits": [{"_id": "a"}, {"_id": "b"}]}});
        let output = TreeFormatter { max_depth: Some(2) }
            .format_value(&value)
            .unwrap();

        assert_eq!(output, "hits\n  total … (1 key)\n  hits … (2 items)\n");
    }

    #[test]
    fn test_empty_containers() {
        let formatter = TreeFormatter { max_depth: None };
        assert_eq!(formatter.format_value(&json!({})).unwrap(), "{}\n");
        assert_eq!(formatter.format_value(&json!([])).unwrap(), "[]\n");
    }

    #[test]
    fn test_scalar_root() {
        let formatter = TreeFormatter { max_depth: None };
        assert_eq!(formatter.format_value(&json!(true)).unwrap(), "true\n");
        assert_eq!(formatter.format_value(&Value::Null).unwrap(), "null\n");
    }
}
