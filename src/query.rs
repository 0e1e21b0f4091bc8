//! Read-only structure queries over the navigable tree.
//!
//! Every function here is a pure read, re-derived from the current tree on
//! each call. Nothing is memoized: the host may rebuild any subtree between
//! calls, so cached structure would go stale without notice. Traversal is
//! recursive document order, and plain wrapper nodes between semantic layers
//! are transparent.

use crate::error::StructureError;
use crate::node::{Node, NodeId};
use crate::semantics::Role;

/// All rows of `grid`, in structural document order.
pub fn rows_of(grid: &Node) -> Vec<&Node> {
    collect(grid, &|n| role_of(n) == Role::Row)
}

/// All cells (content cells and column headers) of `row`, in structural order.
pub fn cells_of(row: &Node) -> Vec<&Node> {
    collect(row, &|n| role_of(n).is_cell())
}

/// All interactive targets anywhere within `scope`, in structural order.
///
/// `scope` may be a cell, a row, or the whole grid.
pub fn targets_of(scope: &Node) -> Vec<&Node> {
    collect(scope, &|n| role_of(n).is_interactive())
}

/// True iff `cell` contains at least one interactive target.
///
/// Cells for which this is false are invisible to directional navigation.
pub fn has_targets(cell: &Node) -> bool {
    any_descendant(cell, &|n| role_of(n).is_interactive())
}

/// The single target of `grid` currently flagged reachable, if any.
pub fn active_target(grid: &Node) -> Option<&Node> {
    first_descendant(grid, &|n| n.semantics().is_some_and(|s| s.is_reachable()))
}

/// Nearest row enclosing the node `id` within `grid`.
pub fn enclosing_row<'a>(grid: &'a Node, id: NodeId) -> Result<&'a Node, StructureError> {
    enclosing(grid, id, &|n| role_of(n) == Role::Row)
        .flatten()
        .ok_or(StructureError::NoEnclosing(id, "row"))
}

/// Nearest cell (content cell or column header) enclosing the node `id`
/// within `grid`.
pub fn enclosing_cell<'a>(grid: &'a Node, id: NodeId) -> Result<&'a Node, StructureError> {
    enclosing(grid, id, &|n| role_of(n).is_cell())
        .flatten()
        .ok_or(StructureError::NoEnclosing(id, "gridcell"))
}

/// Find the node with the given id within `scope` (including `scope` itself).
pub fn find(scope: &Node, id: NodeId) -> Option<&Node> {
    if scope.id() == id {
        return Some(scope);
    }
    for child in scope.children() {
        if let Some(found) = find(child, id) {
            return Some(found);
        }
    }
    None
}

/// Mutable lookup of the node with the given id.
pub(crate) fn find_mut(scope: &mut Node, id: NodeId) -> Option<&mut Node> {
    if scope.id() == id {
        return Some(scope);
    }
    if let Some(children) = scope.children_mut() {
        for child in children {
            if let Some(found) = find_mut(child, id) {
                return Some(found);
            }
        }
    }
    None
}

/// True iff `scope` is or contains the node with the given id.
pub fn contains(scope: &Node, id: NodeId) -> bool {
    find(scope, id).is_some()
}

fn role_of(node: &Node) -> Role {
    node.semantics().map(|s| s.role).unwrap_or_default()
}

/// Collect descendants of `scope` matching `pred`, document order.
fn collect<'a>(scope: &'a Node, pred: &dyn Fn(&Node) -> bool) -> Vec<&'a Node> {
    fn walk<'a>(node: &'a Node, pred: &dyn Fn(&Node) -> bool, out: &mut Vec<&'a Node>) {
        for child in node.children() {
            if pred(child) {
                out.push(child);
            }
            walk(child, pred, out);
        }
    }
    let mut out = Vec::new();
    walk(scope, pred, &mut out);
    out
}

/// First descendant of `scope` matching `pred`, document order.
fn first_descendant<'a>(scope: &'a Node, pred: &dyn Fn(&Node) -> bool) -> Option<&'a Node> {
    for child in scope.children() {
        if pred(child) {
            return Some(child);
        }
        if let Some(found) = first_descendant(child, pred) {
            return Some(found);
        }
    }
    None
}

fn any_descendant(scope: &Node, pred: &dyn Fn(&Node) -> bool) -> bool {
    first_descendant(scope, pred).is_some()
}

/// Locate `id` under `scope` and report the nearest ancestor on its path
/// matching `pred`. Outer `Some` means the id was found at all.
fn enclosing<'a>(
    scope: &'a Node,
    id: NodeId,
    pred: &dyn Fn(&Node) -> bool,
) -> Option<Option<&'a Node>> {
    fn walk<'a>(
        node: &'a Node,
        id: NodeId,
        pred: &dyn Fn(&Node) -> bool,
        nearest: Option<&'a Node>,
    ) -> Option<Option<&'a Node>> {
        if node.id() == id {
            return Some(nearest);
        }
        let nearest = if pred(node) { Some(node) } else { nearest };
        for child in node.children() {
            if let Some(found) = walk(child, id, pred, nearest) {
                return Some(found);
            }
        }
        None
    }
    walk(scope, id, pred, None)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::node::{BoxNode, TextNode};
    use crate::semantics::TabStop;

    /// Two rows, wrapper nesting between every layer:
    /// row 1 holds [link a, button b] in cell 1 and an empty cell 2;
    /// row 2 holds [link c] in cell 1.
    fn sample_grid() -> (Node, NodeId, NodeId, NodeId) {
        let a = BoxNode::new().role(Role::Link).child(TextNode::new("a"));
        let b = BoxNode::new().role(Role::Button).child(TextNode::new("b"));
        let c = BoxNode::new().role(Role::Link).child(TextNode::new("c"));
        let (a_id, b_id, c_id) = (a.id, b.id, c.id);

        let grid: Node = BoxNode::new()
            .role(Role::Grid)
            .label("sample")
            .child(
                // non-semantic wrapper around the first row
                BoxNode::new().child(
                    BoxNode::new()
                        .role(Role::Row)
                        .row_index(1)
                        .child(
                            BoxNode::new()
                                .role(Role::Cell)
                                .col_index(1)
                                .child(BoxNode::new().child(a).child(b)),
                        )
                        .child(
                            BoxNode::new()
                                .role(Role::Cell)
                                .col_index(2)
                                .child(TextNode::new("just text")),
                        ),
                ),
            )
            .child(
                BoxNode::new().role(Role::Row).row_index(2).child(
                    BoxNode::new()
                        .role(Role::ColumnHeader)
                        .col_index(1)
                        .child(c),
                ),
            )
            .into();
        (grid, a_id, b_id, c_id)
    }

    #[test]
    fn test_rows_in_document_order() {
        let (grid, ..) = sample_grid();
        let rows = rows_of(&grid);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].semantics().unwrap().row_index, Some(1));
        assert_eq!(rows[1].semantics().unwrap().row_index, Some(2));
    }

    #[test]
    fn test_cells_include_headers() {
        let (grid, ..) = sample_grid();
        let rows = rows_of(&grid);
        assert_eq!(cells_of(rows[0]).len(), 2);
        // the header in row 2 has the same traversal role as a content cell
        assert_eq!(cells_of(rows[1]).len(), 1);
    }

    #[test]
    fn test_targets_cross_wrappers() {
        let (grid, a, b, c) = sample_grid();
        let ids: Vec<NodeId> = targets_of(&grid).iter().map(|t| t.id()).collect();
        assert_eq!(ids, vec![a, b, c]);
    }

    #[test]
    fn test_has_targets_skips_text_only_cells() {
        let (grid, ..) = sample_grid();
        let rows = rows_of(&grid);
        let cells = cells_of(rows[0]);
        assert!(has_targets(cells[0]));
        assert!(!has_targets(cells[1]));
    }

    #[test]
    fn test_active_target_none_until_flagged() {
        let (mut grid, a, ..) = sample_grid();
        assert!(active_target(&grid).is_none());

        let sem = find_mut(&mut grid, a).unwrap().semantics_mut().unwrap();
        sem.tab_stop = TabStop::Active;
        assert_eq!(active_target(&grid).unwrap().id(), a);
    }

    #[test]
    fn test_enclosing_row_and_cell() {
        let (grid, a, _, c) = sample_grid();
        assert_eq!(
            enclosing_row(&grid, a).unwrap().semantics().unwrap().row_index,
            Some(1)
        );
        assert_eq!(
            enclosing_cell(&grid, a).unwrap().semantics().unwrap().col_index,
            Some(1)
        );
        assert_eq!(
            enclosing_cell(&grid, c).unwrap().semantics().unwrap().role,
            Role::ColumnHeader
        );
    }

    #[test]
    fn test_enclosing_fails_outside_structure() {
        let (grid, ..) = sample_grid();
        let stray = NodeId::new();
        assert!(matches!(
            enclosing_row(&grid, stray),
            Err(StructureError::NoEnclosing(id, "row")) if id == stray
        ));

        // the grid root itself has no enclosing cell
        assert!(enclosing_cell(&grid, grid.id()).is_err());
    }

    #[test]
    fn test_find_and_contains() {
        let (grid, a, ..) = sample_grid();
        assert!(contains(&grid, a));
        assert!(contains(&grid, grid.id()));
        assert!(!contains(&grid, NodeId::new()));
        assert_eq!(find(&grid, a).unwrap().id(), a);
    }
}
