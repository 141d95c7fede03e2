//! JSON-to-tree normalization for hierarchical display.
//!
//! Responsibilities:
//! - Convert any JSON value into ordered [`TreeRow`]s, one row per object key
//!   or array element, with scalars stringified.
//! - Rebuild the object/array shape from rows (see [`reconstruct`]).
//! - Address rows with JSONPath-like paths ([`flatten`]) and render them as
//!   indented text ([`render`]).
//!
//! Does NOT handle:
//! - Parsing. Input is an already-decoded `serde_json::Value`.
//! - Truncation or lazy expansion. The whole tree is materialized eagerly.
//!
//! Invariants:
//! - Object rows keep the key order of the input (`serde_json` is built with
//!   `preserve_order`); nothing is re-sorted.
//! - Array rows are labeled `[0]`, `[1]`, ... with no gaps.
//! - A row has a value or children, never both. Empty containers have neither.
//! - Normalization is total: every `Value` produces a tree.

mod flatten;
mod render;

use serde::Serialize;
use serde_json::{Map, Value};

pub use flatten::{FlatRow, flatten};
pub use render::render;

/// JSON shape a row was produced from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RowKind {
    Object,
    Array,
    Value,
}

impl RowKind {
    fn of(value: &Value) -> Self {
        match value {
            Value::Object(_) => RowKind::Object,
            Value::Array(_) => RowKind::Array,
            _ => RowKind::Value,
        }
    }
}

/// One line of the tree view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeRow {
    /// Object key, `[i]` for array elements, or empty for a scalar root.
    pub key: String,
    pub kind: RowKind,
    /// Stringified scalar; `None` for objects and arrays.
    pub value: Option<String>,
    pub children: Vec<TreeRow>,
}

impl TreeRow {
    fn from_entry(key: String, value: &Value) -> Self {
        match value {
            Value::Object(map) => TreeRow {
                key,
                kind: RowKind::Object,
                value: None,
                children: object_rows(map),
            },
            Value::Array(items) => TreeRow {
                key,
                kind: RowKind::Array,
                value: None,
                children: array_rows(items),
            },
            scalar => TreeRow {
                key,
                kind: RowKind::Value,
                value: Some(scalar_text(scalar)),
                children: Vec::new(),
            },
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.kind == RowKind::Value
    }

    /// Text placed on the clipboard when the row is copied.
    ///
    /// `key: value` for a leaf, the bare key for an object or array, and the
    /// bare value for an unlabeled scalar root.
    pub fn copy_text(&self) -> String {
        match &self.value {
            Some(value) if self.key.is_empty() => value.clone(),
            Some(value) => format!("{}: {}", self.key, value),
            None => self.key.clone(),
        }
    }

    /// Number of rows in this subtree, including this one.
    pub fn row_count(&self) -> usize {
        1 + self.children.iter().map(TreeRow::row_count).sum::<usize>()
    }

    fn to_value(&self) -> Value {
        match self.kind {
            RowKind::Object => object_of(&self.children),
            RowKind::Array => Value::Array(self.children.iter().map(TreeRow::to_value).collect()),
            RowKind::Value => Value::String(self.value.clone().unwrap_or_default()),
        }
    }
}

/// A normalized document: the top-level rows plus the shape of the root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonTree {
    pub kind: RowKind,
    pub rows: Vec<TreeRow>,
}

impl JsonTree {
    pub fn from_value(value: &Value) -> Self {
        Self {
            kind: RowKind::of(value),
            rows: normalize(value),
        }
    }

    /// Rebuild the JSON shape with every scalar as its display string.
    pub fn reconstruct(&self) -> Value {
        match self.kind {
            RowKind::Object => object_of(&self.rows),
            RowKind::Array => Value::Array(self.rows.iter().map(TreeRow::to_value).collect()),
            RowKind::Value => reconstruct(&self.rows),
        }
    }

    /// Depth-first, parent-indexed rows with JSONPath-like addresses.
    pub fn flatten(&self) -> Vec<FlatRow> {
        flatten::flatten_tree(self)
    }

    pub fn render(&self, max_depth: Option<usize>) -> String {
        render(&self.rows, max_depth)
    }

    /// Total number of rows at every depth.
    pub fn len(&self) -> usize {
        self.rows.iter().map(TreeRow::row_count).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Normalize a JSON value into its top-level rows.
///
/// Objects yield one row per key, arrays one row per element labeled `[i]`,
/// and a scalar root yields a single row with an empty key.
pub fn normalize(value: &Value) -> Vec<TreeRow> {
    match value {
        Value::Object(map) => object_rows(map),
        Value::Array(items) => array_rows(items),
        scalar => vec![TreeRow::from_entry(String::new(), scalar)],
    }
}

fn object_rows(map: &Map<String, Value>) -> Vec<TreeRow> {
    map.iter()
        .map(|(key, value)| TreeRow::from_entry(key.clone(), value))
        .collect()
}

fn array_rows(items: &[Value]) -> Vec<TreeRow> {
    items
        .iter()
        .enumerate()
        .map(|(i, value)| TreeRow::from_entry(index_label(i), value))
        .collect()
}

/// Label of the `i`-th array element.
pub fn index_label(i: usize) -> String {
    format!("[{}]", i)
}

/// Display form of a scalar.
///
/// Strings are shown without quotes, numbers in their JSON form, booleans as
/// `true`/`false` and null as `null`. Composite values fall back to compact JSON.
pub fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        composite => composite.to_string(),
    }
}

/// Rebuild a value from top-level rows.
///
/// A single unlabeled leaf is a scalar root; anything else becomes an object
/// keyed by row key. Use [`JsonTree::reconstruct`] to keep an array root.
pub fn reconstruct(rows: &[TreeRow]) -> Value {
    match rows {
        [row] if row.key.is_empty() && row.is_leaf() => row.to_value(),
        _ => object_of(rows),
    }
}

fn object_of(rows: &[TreeRow]) -> Value {
    Value::Object(
        rows.iter()
            .map(|row| (row.key.clone(), row.to_value()))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn keys(rows: &[TreeRow]) -> Vec<&str> {
        rows.iter().map(|r| r.key.as_str()).collect()
    }

    #[test]
    fn test_search_response_shape() {
        let response = json!({"hits": {"hits": [{"_id": "a"}, {"_id": "b"}]}});
        let rows = normalize(&response);

        assert_eq!(keys(&rows), vec!["hits"]);
        let inner = &rows[0].children;
        assert_eq!(keys(inner), vec!["hits"]);
        assert_eq!(inner[0].kind, RowKind::Array);

        let docs = &inner[0].children;
        assert_eq!(keys(docs), vec!["[0]", "[1]"]);
        assert_eq!(docs[0].children[0].key, "_id");
        assert_eq!(docs[0].children[0].value.as_deref(), Some("a"));
        assert_eq!(docs[1].children[0].value.as_deref(), Some("b"));
    }

    #[test]
    fn test_object_keys_keep_input_order() {
        let value: Value = serde_json::from_str(r#"{"zeta": 1, "alpha": 2, "mid": 3}"#).unwrap();
        assert_eq!(keys(&normalize(&value)), vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_scalar_stringification() {
        let rows = normalize(&json!({
            "s": "text",
            "i": 42,
            "f": 2.5,
            "t": true,
            "n": null
        }));
        let values: Vec<_> = rows.iter().map(|r| r.value.as_deref().unwrap()).collect();
        assert_eq!(values, vec!["text", "42", "2.5", "true", "null"]);
    }

    #[test]
    fn test_scalar_root_is_unlabeled_row() {
        let rows = normalize(&json!(7));
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].key, "");
        assert_eq!(rows[0].value.as_deref(), Some("7"));
        assert_eq!(rows[0].copy_text(), "7");
    }

    #[test]
    fn test_composite_rows_have_no_value() {
        let rows = normalize(&json!({"a": {"b": 1}, "c": [], "d": {}}));
        assert!(rows.iter().all(|r| r.value.is_none()));
        assert_eq!(rows[1].kind, RowKind::Array);
        assert!(rows[1].children.is_empty());
        assert_eq!(rows[2].kind, RowKind::Object);
        assert!(rows[2].children.is_empty());
    }

    #[test]
    fn test_copy_text() {
        let rows = normalize(&json!({"_id": "a", "_source": {"title": "x"}}));
        assert_eq!(rows[0].copy_text(), "_id: a");
        assert_eq!(rows[1].copy_text(), "_source");
    }

    #[test]
    fn test_reconstruct_stringifies_leaves() {
        let value = json!({"a": [1, {"b": null}], "c": {}, "d": []});
        let tree = JsonTree::from_value(&value);
        assert_eq!(
            tree.reconstruct(),
            json!({"a": ["1", {"b": "null"}], "c": {}, "d": []})
        );
    }

    #[test]
    fn test_reconstruct_array_root() {
        let tree = JsonTree::from_value(&json!([true, "x"]));
        assert_eq!(tree.kind, RowKind::Array);
        assert_eq!(tree.reconstruct(), json!(["true", "x"]));
    }

    #[test]
    fn test_reconstruct_scalar_root() {
        assert_eq!(reconstruct(&normalize(&json!(null))), json!("null"));
        assert_eq!(JsonTree::from_value(&json!("hi")).reconstruct(), json!("hi"));
    }

    #[test]
    fn test_reconstruct_empty_key_object() {
        let tree = JsonTree::from_value(&json!({"": 1}));
        assert_eq!(tree.reconstruct(), json!({"": "1"}));
    }

    #[test]
    fn test_tree_len_counts_every_row() {
        let tree = JsonTree::from_value(&json!({"a": {"b": 1, "c": [1, 2]}}));
        // a, b, c, [0], [1]
        assert_eq!(tree.len(), 5);
        assert!(!tree.is_empty());
        assert!(JsonTree::from_value(&json!({})).is_empty());
    }
}
