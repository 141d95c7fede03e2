//! Parent-indexed, path-addressed view of a tree.

use serde::Serialize;

use super::{JsonTree, RowKind, TreeRow};

/// One row of the flattened tree, in depth-first pre-order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlatRow {
    pub depth: usize,
    /// Position of the parent row in the flattened output.
    pub parent: Option<usize>,
    /// JSONPath-like address, e.g. `$.hits.hits[0]._id` or `$['@timestamp']`.
    pub path: String,
    pub key: String,
    pub value: Option<String>,
}

/// Flatten top-level rows.
///
/// Top-level rows are addressed as object keys unless they are a single
/// unlabeled scalar root. [`JsonTree::flatten`] also handles array roots.
pub fn flatten(rows: &[TreeRow]) -> Vec<FlatRow> {
    let root_kind = match rows {
        [row] if row.key.is_empty() && row.is_leaf() => RowKind::Value,
        _ => RowKind::Object,
    };
    flatten_rows(rows, root_kind)
}

pub(super) fn flatten_tree(tree: &JsonTree) -> Vec<FlatRow> {
    flatten_rows(&tree.rows, tree.kind)
}

fn flatten_rows(rows: &[TreeRow], root_kind: RowKind) -> Vec<FlatRow> {
    let mut out = Vec::new();
    for row in rows {
        walk(&mut out, row, root_kind, "$", 0, None);
    }
    out
}

fn walk(
    out: &mut Vec<FlatRow>,
    row: &TreeRow,
    container: RowKind,
    container_path: &str,
    depth: usize,
    parent: Option<usize>,
) {
    let path = match container {
        RowKind::Object => member_path(container_path, &row.key),
        RowKind::Array => format!("{}{}", container_path, row.key),
        RowKind::Value => container_path.to_string(),
    };

    let position = out.len();
    out.push(FlatRow {
        depth,
        parent,
        path: path.clone(),
        key: row.key.clone(),
        value: row.value.clone(),
    });

    for child in &row.children {
        walk(out, child, row.kind, &path, depth + 1, Some(position));
    }
}

/// Dot notation for plain identifiers, bracket notation for anything else.
fn member_path(container_path: &str, key: &str) -> String {
    let plain = !key.is_empty() && key.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
    if plain {
        format!("{}.{}", container_path, key)
    } else {
        let escaped = key.replace('\\', "\\\\").replace('\'', "\\'");
        format!("{}['{}']", container_path, escaped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::normalize;
    use serde_json::json;

    #[test]
    fn test_flatten_search_response() {
        let tree = JsonTree::from_value(&json!({"hits": {"hits": [{"_id": "a"}, {"_id": "b"}]}}));
        let flat = tree.flatten();

        let paths: Vec<_> = flat.iter().map(|r| r.path.as_str()).collect();
        assert_eq!(
            paths,
            vec![
                "$.hits",
                "$.hits.hits",
                "$.hits.hits[0]",
                "$.hits.hits[0]._id",
                "$.hits.hits[1]",
                "$.hits.hits[1]._id",
            ]
        );

        let depths: Vec<_> = flat.iter().map(|r| r.depth).collect();
        assert_eq!(depths, vec![0, 1, 2, 3, 2, 3]);

        let parents: Vec<_> = flat.iter().map(|r| r.parent).collect();
        assert_eq!(
            parents,
            vec![None, Some(0), Some(1), Some(2), Some(1), Some(4)]
        );
        assert_eq!(flat[3].value.as_deref(), Some("a"));
    }

    #[test]
    fn test_flatten_array_root() {
        let tree = JsonTree::from_value(&json!([{"k": 1}, 2]));
        let paths: Vec<_> = tree.flatten().into_iter().map(|r| r.path).collect();
        assert_eq!(paths, vec!["$[0]", "$[0].k", "$[1]"]);
    }

    #[test]
    fn test_flatten_scalar_root() {
        let flat = flatten(&normalize(&json!("hello")));
        assert_eq!(flat.len(), 1);
        assert_eq!(flat[0].path, "$");
        assert_eq!(flat[0].value.as_deref(), Some("hello"));
    }

    #[test]
    fn test_bracket_notation_for_special_keys() {
        let flat = flatten(&normalize(&json!({
            "@timestamp": "2024-01-01",
            "host.name": "web-1",
            "it's": 1,
            "plain_key": 2
        })));
        let paths: Vec<_> = flat.iter().map(|r| r.path.as_str()).collect();
        assert_eq!(
            paths,
            vec!["$['@timestamp']", "$['host.name']", "$['it\\'s']", "$.plain_key"]
        );
    }
}
