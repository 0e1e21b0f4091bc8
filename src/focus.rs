//! The focus engine: roving-tabindex navigation over a grid tree.
//!
//! At most one target in a grid is sequentially reachable at any time; the
//! functions here move that single marker in response to arrow keys and row
//! selection, and heal it when the host's re-renders lose it.
//!
//! Focus management is transparent to the components inside the grid. If a
//! new link or button is added to a cell it participates without
//! modification, because every move re-derives structure from the current
//! tree and the marker itself lives on the tree.
//!
//! Every public operation starts by self-healing: if no target is flagged
//! reachable (first use, or the host rebuilt the active subtree), the first
//! target in structural order becomes the marker before the move is applied.
//! A grid with no targets at all turns every operation into a no-op.
//!
//! # Example
//!
//! ```
//! use rove::components::{Button, FocusGrid, GridCell, GridRow, Link};
//! use rove::focus::{move_focus, Direction};
//! use rove::node::Node;
//!
//! let mut grid: Node = FocusGrid::new("Inbox")
//!     .child(
//!         GridRow::new(0)
//!             .child(GridCell::new(0).child(Link::new("Open")))
//!             .child(GridCell::new(1).child(Button::new("Archive"))),
//!     )
//!     .into();
//!
//! // Nothing is reachable yet: the first move self-heals onto "Open",
//! // then steps right onto "Archive".
//! let moved = move_focus(&mut grid, Direction::Right);
//! assert!(moved.is_some());
//! ```

use crate::error::{GridError, StructureError};
use crate::events::{dispatch_focus_change, FocusChange};
use crate::node::{Node, NodeId};
use crate::query;
use crate::semantics::{Role, TabStop};

/// Direction in which to move the focus marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// To the matching column of a previous row.
    Up,
    /// To the matching column of a following row.
    Down,
    /// To the previous target in the row.
    Left,
    /// To the next target in the row.
    Right,
}

/// Move the focus marker one step in `direction`.
///
/// Returns the newly reachable target when the marker moved. Boundary moves
/// and empty grids are silent no-ops; structural contract violations are
/// logged and likewise leave the tree untouched. This entry point never
/// fails - hosts that want the diagnosis use [`try_move_focus`].
pub fn move_focus(grid: &mut Node, direction: Direction) -> Option<NodeId> {
    match try_move_focus(grid, direction) {
        Ok(moved) => moved,
        Err(err) => {
            tracing::error!(%err, ?direction, "focus move aborted");
            None
        }
    }
}

/// Fallible variant of [`move_focus`].
///
/// `Ok(None)` covers the expected no-ops: an empty grid, or a move past the
/// grid boundary in the requested direction.
pub fn try_move_focus(grid: &mut Node, direction: Direction) -> Result<Option<NodeId>, GridError> {
    require_grid(grid)?;

    let Some(current) = ensure_active(grid) else {
        // no targets anywhere in the grid
        return Ok(None);
    };

    let next = next_target(grid, current, direction)?;
    Ok(next.map(|to| {
        transfer(grid, Some(current), to);
        to
    }))
}

/// Move the focus marker to the first target of `row`.
///
/// Used when a row is activated by pointer interaction: subsequent arrow
/// keys should travel from the selected row instead of jumping back to
/// wherever the marker was. A no-op when the marker already lies inside
/// `row`, or when `row` has no targets.
pub fn focus_first_in_row(grid: &mut Node, row: NodeId) -> Option<NodeId> {
    match try_focus_first_in_row(grid, row) {
        Ok(moved) => moved,
        Err(err) => {
            tracing::error!(%err, "row selection aborted");
            None
        }
    }
}

/// Fallible variant of [`focus_first_in_row`].
pub fn try_focus_first_in_row(grid: &mut Node, row: NodeId) -> Result<Option<NodeId>, GridError> {
    require_grid(grid)?;

    let previous = query::active_target(grid).map(|t| t.id());
    let first = {
        let row_node = query::find(grid, row).ok_or(GridError::MissingGrid)?;
        if row_node.semantics().map(|s| s.role) != Some(Role::Row) {
            return Err(StructureError::WrongRole(row, "row").into());
        }
        if let Some(prev) = previous {
            if query::contains(row_node, prev) {
                // the user is already navigating inside this row
                return Ok(None);
            }
        }
        query::targets_of(row_node).first().map(|t| t.id())
    };

    // A row without targets never orphans the marker.
    let Some(first) = first else { return Ok(None) };
    transfer(grid, previous, first);
    Ok(Some(first))
}

/// Guarantee that some target of `grid` is flagged reachable.
///
/// Returns the reachable target: the existing marker if one survives, else
/// the first target in structural order, freshly flagged. `None` iff the
/// grid has no targets at all. Healing flags without emitting a focus
/// effect; only an actual transfer does that.
///
/// This covers two situations: the first time the grid is keyboard
/// navigated, and graceful fallback after the host rebuilt the subtree that
/// held the marker.
pub fn ensure_active(grid: &mut Node) -> Option<NodeId> {
    if let Some(active) = query::active_target(grid) {
        return Some(active.id());
    }

    let first = query::targets_of(grid).first().map(|t| t.id())?;
    set_tab_stop(grid, first, TabStop::Active);
    tracing::trace!(node = ?first, "no reachable target; falling back to first");
    Some(first)
}

fn require_grid(grid: &Node) -> Result<(), GridError> {
    if grid.semantics().map(|s| s.role) == Some(Role::Grid) {
        Ok(())
    } else {
        Err(GridError::MissingGrid)
    }
}

/// Compute the id of the target the marker should move to, or `None` at the
/// grid boundary. Pure read; the tree is not touched.
fn next_target(
    grid: &Node,
    current: NodeId,
    direction: Direction,
) -> Result<Option<NodeId>, StructureError> {
    match direction {
        Direction::Left | Direction::Right => next_in_row(grid, current, direction),
        Direction::Up | Direction::Down => next_in_column(grid, current, direction),
    }
}

/// LEFT/RIGHT: neighbor within the current cell first, then hop to the
/// nearest non-empty cell of the same row.
fn next_in_row(
    grid: &Node,
    current: NodeId,
    direction: Direction,
) -> Result<Option<NodeId>, StructureError> {
    let backward = direction == Direction::Left;
    let cell = query::enclosing_cell(grid, current)?;

    // Exit early if a neighboring target exists in the same cell - the
    // common case of multiple interactive elements inside one cell.
    let cell_targets = query::targets_of(cell);
    let pos = position_of(&cell_targets, current)
        .ok_or(StructureError::NoEnclosing(current, "gridcell"))?;
    let within = if backward {
        pos.checked_sub(1).and_then(|i| cell_targets.get(i))
    } else {
        cell_targets.get(pos + 1)
    };
    if let Some(next) = within {
        return Ok(Some(next.id()));
    }

    let row = query::enclosing_row(grid, current)?;
    let cells = query::cells_of(row);
    let cell_pos = position_of(&cells, cell.id())
        .ok_or(StructureError::NoEnclosing(cell.id(), "row"))?;

    // Nearest cell with targets in the scanned direction; empty cells are
    // invisible. None means the edge of the row.
    let next_cell = if backward {
        cells[..cell_pos]
            .iter()
            .rev()
            .find(|c| query::has_targets(c))
    } else {
        cells[cell_pos + 1..].iter().find(|c| query::has_targets(c))
    };
    let Some(next_cell) = next_cell else {
        return Ok(None);
    };

    // Enter the neighboring cell from the side nearer the origin.
    let hop_targets = query::targets_of(next_cell);
    let landing = if backward {
        hop_targets.last()
    } else {
        hop_targets.first()
    };
    Ok(landing.map(|t| t.id()))
}

/// UP/DOWN: nearest row whose cell at the current column position has
/// targets, landing on the same in-cell index when the destination has one.
fn next_in_column(
    grid: &Node,
    current: NodeId,
    direction: Direction,
) -> Result<Option<NodeId>, StructureError> {
    let backward = direction == Direction::Up;
    let cell = query::enclosing_cell(grid, current)?;
    let col = cell
        .semantics()
        .and_then(|s| s.col_index)
        .ok_or(StructureError::NoColumnPosition(cell.id()))?;

    let row = query::enclosing_row(grid, current)?;
    let rows = query::rows_of(grid);
    let row_pos =
        position_of(&rows, row.id()).ok_or(StructureError::NoEnclosing(row.id(), "grid"))?;

    let candidates: Vec<&Node> = if backward {
        rows[..row_pos].iter().rev().copied().collect()
    } else {
        rows[row_pos + 1..].iter().copied().collect()
    };

    for next_row in candidates {
        // The first cell declaring the matching column position speaks for
        // the row: if it is empty the whole row is skipped.
        let Some(dest_cell) = query::cells_of(next_row)
            .into_iter()
            .find(|c| c.semantics().and_then(|s| s.col_index) == Some(col))
        else {
            continue;
        };
        if !query::has_targets(dest_cell) {
            continue;
        }

        // Same-index correspondence, falling back to the first target when
        // the destination cell holds fewer.
        let origin_targets = query::targets_of(cell);
        let idx = position_of(&origin_targets, current)
            .ok_or(StructureError::NoEnclosing(current, "gridcell"))?;
        let dest_targets = query::targets_of(dest_cell);
        return Ok(dest_targets
            .get(idx)
            .or_else(|| dest_targets.first())
            .map(|t| t.id()));
    }

    // Hit the edge of the grid without finding a destination.
    Ok(None)
}

/// Move the reachability flag from `previous` onto `to` and emit the focus
/// effect. The previous target (if different) drops out of the tab order.
fn transfer(grid: &mut Node, previous: Option<NodeId>, to: NodeId) {
    let grid_id = grid.id();
    if let Some(prev) = previous {
        if prev != to {
            set_tab_stop(grid, prev, TabStop::Removed);
        }
    }
    set_tab_stop(grid, to, TabStop::Active);
    tracing::trace!(?previous, focused = ?to, "focus transferred");
    dispatch_focus_change(&FocusChange {
        grid: grid_id,
        previous,
        focused: to,
    });
}

fn set_tab_stop(grid: &mut Node, id: NodeId, tab_stop: TabStop) {
    if let Some(sem) = query::find_mut(grid, id).and_then(Node::semantics_mut) {
        sem.tab_stop = tab_stop;
    }
}

fn position_of(nodes: &[&Node], id: NodeId) -> Option<usize> {
    nodes.iter().position(|n| n.id() == id)
}
