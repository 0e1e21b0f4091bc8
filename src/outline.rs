//! Textual outline of a grid's semantic tree.
//!
//! Renders the structure the way assistive technology (or an AI agent, or a
//! snapshot test) sees it: roles, positions, labels, and the one target
//! currently holding the roving marker. Wrapper nodes and plain text leaves
//! do not appear; target text is inlined into the target's own line.
//!
//! ```text
//! grid "Inbox" rows=2 cols=2
//!   row 1
//!     gridcell 1
//!       link "Open" *
//!     columnheader 2 sort=ascending
//!       button "Sort"
//! ```

use crate::node::Node;
use crate::semantics::{Role, Semantics};

/// Render the semantic outline of `grid`.
///
/// The reachable target, if any, is marked with a trailing `*`.
pub fn outline(grid: &Node) -> String {
    let mut out = String::new();
    emit(grid, 0, &mut out);
    out
}

fn emit(node: &Node, depth: usize, out: &mut String) {
    let next_depth = match node.semantics() {
        Some(sem) if sem.role != Role::None => {
            push_line(node, sem, depth, out);
            depth + 1
        }
        // wrappers and text leaves are structure, not semantics
        _ => depth,
    };
    for child in node.children() {
        emit(child, next_depth, out);
    }
}

fn push_line(node: &Node, sem: &Semantics, depth: usize, out: &mut String) {
    for _ in 0..depth {
        out.push_str("  ");
    }
    out.push_str(sem.role.name());

    match sem.role {
        Role::Grid => {
            if let Some(label) = &sem.label {
                out.push_str(&format!(" {label:?}"));
            }
            if let Some(rows) = sem.row_count {
                out.push_str(&format!(" rows={rows}"));
            }
            if let Some(cols) = sem.col_count {
                out.push_str(&format!(" cols={cols}"));
            }
        }
        Role::Row => {
            if let Some(index) = sem.row_index {
                out.push_str(&format!(" {index}"));
            }
            if sem.selected == Some(true) {
                out.push_str(" selected");
            }
        }
        Role::Cell | Role::ColumnHeader => {
            if let Some(index) = sem.col_index {
                out.push_str(&format!(" {index}"));
            }
            if let Some(sort) = sem.sort {
                out.push_str(&format!(" sort={}", sort.name()));
            }
        }
        Role::Link | Role::Button => {
            let text = gather_text(node);
            if !text.is_empty() {
                out.push_str(&format!(" {text:?}"));
            }
            if sem.is_reachable() {
                out.push_str(" *");
            }
        }
        Role::None => {}
    }
    out.push('\n');
}

/// Concatenated text content of a node's subtree.
fn gather_text(node: &Node) -> String {
    fn walk(node: &Node, out: &mut String) {
        if let Node::Text(text) = node {
            out.push_str(text.text());
        }
        for child in node.children() {
            walk(child, out);
        }
    }
    let mut text = String::new();
    walk(node, &mut text);
    text
}
