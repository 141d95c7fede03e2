//! Indented text rendering of a tree.
//!
//! Invariants:
//! - Every row starts on its own line at `2 * depth` spaces.
//! - A multi-line string value keeps its continuation lines one level deeper
//!   than the row they belong to.

use super::{RowKind, TreeRow};

const INDENT: &str = "  ";

/// Render rows as indented text, one row per line.
///
/// With `max_depth = Some(n)`, only the first `n` levels are shown (at least
/// one) and a composite row whose children would be hidden ends in a `…`
/// marker with its child count.
pub fn render(rows: &[TreeRow], max_depth: Option<usize>) -> String {
    let limit = max_depth.map(|depth| depth.max(1));
    let mut out = String::new();
    for row in rows {
        render_row(&mut out, row, 0, limit);
    }
    out
}

fn render_row(out: &mut String, row: &TreeRow, depth: usize, limit: Option<usize>) {
    if let Some(value) = &row.value {
        let label = if row.key.is_empty() {
            String::new()
        } else {
            format!("{}: ", row.key)
        };
        push_value(out, depth, &label, value);
        return;
    }

    if row.children.is_empty() {
        let empty = if row.kind == RowKind::Array { "[]" } else { "{}" };
        push_line(out, depth, &format!("{} {}", row.key, empty));
        return;
    }

    let collapsed = limit.is_some_and(|limit| depth + 1 >= limit);
    if collapsed {
        let count = row.children.len();
        let noun = match (row.kind, count) {
            (RowKind::Array, 1) => "item",
            (RowKind::Array, _) => "items",
            (_, 1) => "key",
            _ => "keys",
        };
        push_line(out, depth, &format!("{} … ({} {})", row.key, count, noun));
        return;
    }

    push_line(out, depth, &row.key);
    for child in &row.children {
        render_row(out, child, depth + 1, limit);
    }
}

fn push_line(out: &mut String, depth: usize, text: &str) {
    out.push_str(&INDENT.repeat(depth));
    out.push_str(text);
    out.push('\n');
}

fn push_value(out: &mut String, depth: usize, label: &str, value: &str) {
    let mut lines = value.lines();
    let first = lines.next().unwrap_or_default();
    push_line(out, depth, &format!("{}{}", label, first));
    for line in lines {
        push_line(out, depth + 1, line);
    }
}
