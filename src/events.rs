//! Event boundary: key dispatch into the engine and focus-change fan-out.
//!
//! Arrow keys targeted at the grid region are the only keyboard input the
//! engine consumes; everything else passes through to the host. Focus
//! transfers are fanned out to registered handlers so the host can apply
//! the real terminal side effect (cursor placement, screen-reader
//! announcement) for the newly reachable target.

use crate::focus::{move_focus, Direction};
use crate::node::{Node, NodeId};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use parking_lot::RwLock;
use std::sync::Arc;

/// Map an arrow key press to a navigation direction.
///
/// Key releases and non-arrow keys map to `None`.
pub fn direction_for_key(key: &KeyEvent) -> Option<Direction> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    match key.code {
        KeyCode::Up => Some(Direction::Up),
        KeyCode::Down => Some(Direction::Down),
        KeyCode::Left => Some(Direction::Left),
        KeyCode::Right => Some(Direction::Right),
        _ => None,
    }
}

/// Feed one key event into the grid.
///
/// Returns true when the key was an arrow and has been consumed - including
/// arrows that hit the grid boundary and moved nothing, which the host
/// should still swallow to prevent scrolling.
pub fn handle_grid_key(grid: &mut Node, key: &KeyEvent) -> bool {
    let Some(direction) = direction_for_key(key) else {
        return false;
    };
    move_focus(grid, direction);
    true
}

/// A completed focus transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusChange {
    /// The grid the transfer happened in.
    pub grid: NodeId,
    /// The target that lost the marker, if one held it.
    pub previous: Option<NodeId>,
    /// The target that is now sequentially reachable and focused.
    pub focused: NodeId,
}

/// Focus-change handler callback type.
pub type FocusChangeHandler = Arc<dyn Fn(&FocusChange) + Send + Sync>;

/// Global focus-change handlers.
/// Uses parking_lot::RwLock for faster uncontended reads (no poisoning overhead).
static FOCUS_CHANGE_HANDLERS: RwLock<Vec<FocusChangeHandler>> = RwLock::new(Vec::new());

/// Register a focus-change handler.
///
/// # Example
///
/// ```
/// rove::events::on_focus_change(|change| {
///     // place the terminal cursor on change.focused
///     let _ = change.focused;
/// });
/// # rove::events::clear_focus_change_handlers();
/// ```
pub fn on_focus_change<F>(handler: F)
where
    F: Fn(&FocusChange) + Send + Sync + 'static,
{
    FOCUS_CHANGE_HANDLERS.write().push(Arc::new(handler));
}

/// Dispatch a focus change to all handlers.
pub fn dispatch_focus_change(event: &FocusChange) {
    let handlers = FOCUS_CHANGE_HANDLERS.read();
    for handler in &*handlers {
        handler(event);
    }
}

/// Clear all focus-change handlers.
pub fn clear_focus_change_handlers() {
    FOCUS_CHANGE_HANDLERS.write().clear();
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::node::{BoxNode, TextNode};
    use crate::query;
    use crate::semantics::Role;
    use crossterm::event::KeyModifiers;
    use serial_test::serial;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn two_cell_grid() -> Node {
        BoxNode::new()
            .role(Role::Grid)
            .label("grid")
            .child(
                BoxNode::new()
                    .role(Role::Row)
                    .row_index(1)
                    .child(
                        BoxNode::new()
                            .role(Role::Cell)
                            .col_index(1)
                            .child(BoxNode::new().role(Role::Link).child(TextNode::new("a"))),
                    )
                    .child(
                        BoxNode::new()
                            .role(Role::Cell)
                            .col_index(2)
                            .child(BoxNode::new().role(Role::Button).child(TextNode::new("b"))),
                    ),
            )
            .into()
    }

    #[test]
    fn test_direction_mapping() {
        assert_eq!(direction_for_key(&press(KeyCode::Up)), Some(Direction::Up));
        assert_eq!(
            direction_for_key(&press(KeyCode::Down)),
            Some(Direction::Down)
        );
        assert_eq!(
            direction_for_key(&press(KeyCode::Left)),
            Some(Direction::Left)
        );
        assert_eq!(
            direction_for_key(&press(KeyCode::Right)),
            Some(Direction::Right)
        );
        assert_eq!(direction_for_key(&press(KeyCode::Enter)), None);
        assert_eq!(direction_for_key(&press(KeyCode::Char('j'))), None);
    }

    #[test]
    fn test_release_is_ignored() {
        let release = KeyEvent::new_with_kind(KeyCode::Up, KeyModifiers::NONE, KeyEventKind::Release);
        assert_eq!(direction_for_key(&release), None);
    }

    #[test]
    #[serial]
    fn test_arrows_are_consumed_even_at_boundary() {
        let mut grid = two_cell_grid();

        // first arrow heals + consumes
        assert!(handle_grid_key(&mut grid, &press(KeyCode::Right)));
        // boundary arrow moves nothing but is still consumed
        assert!(handle_grid_key(&mut grid, &press(KeyCode::Right)));
        // non-arrows pass through
        assert!(!handle_grid_key(&mut grid, &press(KeyCode::Enter)));
    }

    #[test]
    #[serial]
    fn test_focus_change_dispatch() {
        use std::sync::atomic::{AtomicUsize, Ordering};

        clear_focus_change_handlers();

        let mut grid = two_cell_grid();
        let grid_id = grid.id();

        // Count only this grid's events: tests in other modules drive their
        // own grids through the same global registry.
        let seen = Arc::new(AtomicUsize::new(0));
        let seen_clone = seen.clone();
        on_focus_change(move |change| {
            if change.grid == grid_id {
                seen_clone.fetch_add(1, Ordering::SeqCst);
            }
        });

        // heal (no event) then step right (one event)
        handle_grid_key(&mut grid, &press(KeyCode::Right));
        assert_eq!(seen.load(Ordering::SeqCst), 1);

        // boundary no-op emits nothing
        handle_grid_key(&mut grid, &press(KeyCode::Right));
        assert_eq!(seen.load(Ordering::SeqCst), 1);

        clear_focus_change_handlers();
    }

    #[test]
    #[serial]
    fn test_focus_change_payload() {
        clear_focus_change_handlers();

        let mut grid = two_cell_grid();
        let grid_id = grid.id();

        let changes: Arc<RwLock<Vec<FocusChange>>> = Arc::new(RwLock::new(Vec::new()));
        let changes_clone = changes.clone();
        on_focus_change(move |change| {
            if change.grid == grid_id {
                changes_clone.write().push(*change);
            }
        });

        handle_grid_key(&mut grid, &press(KeyCode::Right));

        let seen = changes.read();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].grid, grid_id);
        let targets = query::targets_of(&grid);
        assert_eq!(seen[0].previous, Some(targets[0].id()));
        assert_eq!(seen[0].focused, targets[1].id());

        drop(seen);
        clear_focus_change_handlers();
    }

    #[test]
    #[serial]
    fn test_clear_focus_change_handlers() {
        use std::sync::atomic::{AtomicBool, Ordering};

        clear_focus_change_handlers();

        let sentinel = crate::node::NodeId::new();
        let called = Arc::new(AtomicBool::new(false));
        let called_clone = called.clone();
        on_focus_change(move |change| {
            if change.grid == sentinel {
                called_clone.store(true, Ordering::SeqCst);
            }
        });
        clear_focus_change_handlers();

        dispatch_focus_change(&FocusChange {
            grid: sentinel,
            previous: None,
            focused: crate::node::NodeId::new(),
        });
        assert!(!called.load(Ordering::SeqCst));
    }
}
