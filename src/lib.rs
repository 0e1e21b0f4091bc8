//! Roving-tabindex focus navigation for grid-shaped terminal UIs.
//!
//! At most one interactive target inside a grid is sequentially (Tab key)
//! reachable at any time. Arrow keys move that single marker between
//! targets; the surrounding tree is left untouched. This is the
//! [roving tabindex](https://www.w3.org/TR/wai-aria-practices/#kbd_roving_tabindex)
//! pattern, lifted onto a React-like node tree that the host framework may
//! rebuild at any moment.
//!
//! Because the host can change the tree from under our nose, every
//! operation re-derives structure from the current tree and starts by
//! making sure a reachable target actually exists, falling back to the
//! first target in the grid when a re-render lost the marker.
//!
//! The engine assumes this hierarchy, with any amount of non-semantic
//! wrapper nesting between the layers:
//!
//! ```text
//! grid
//! └── row (1-based position)
//!     └── gridcell | columnheader (1-based position)
//!         └── link, button ...
//! ```
//!
//! Position attributes are matched for equality only; adjacency always
//! comes from structural order, so sparse or out-of-order indices never
//! affect where the marker lands.
//!
//! # Quick start
//!
//! ```
//! use rove::prelude::*;
//!
//! let mut grid: Node = FocusGrid::new("Inbox")
//!     .row_count(2)
//!     .column_count(2)
//!     .child(
//!         GridRow::new(0)
//!             .child(GridCell::new(0).child(Link::new("Re: lunch")))
//!             .child(GridCell::new(1).child(Button::new("Archive"))),
//!     )
//!     .child(
//!         GridRow::new(1)
//!             .child(GridCell::new(0).child(Link::new("Weekly report")))
//!             .child(GridCell::new(1).child(Button::new("Archive"))),
//!     )
//!     .into();
//!
//! // First move initializes the marker on the first target, then steps.
//! move_focus(&mut grid, Direction::Right);
//! move_focus(&mut grid, Direction::Down);
//!
//! let active = rove::query::active_target(&grid).map(|t| t.id());
//! assert!(active.is_some());
//! ```
//!
//! # Module map
//!
//! - [`node`] / [`semantics`] - the annotated tree substrate
//! - [`query`] - pure structure reads (rows, cells, targets, ancestors)
//! - [`focus`] - the navigation engine and self-healing marker
//! - [`normalize`] - post-mutation tab-order normalization
//! - [`events`] - arrow-key dispatch and focus-change fan-out
//! - [`components`] - declarative grid/row/cell/target builders
//! - [`outline`] - semantic text dump for tests and assistive output

pub mod components;
pub mod error;
pub mod events;
pub mod focus;
pub mod node;
pub mod normalize;
pub mod outline;
pub mod query;
pub mod semantics;

/// Commonly used types and functions.
///
/// ```
/// use rove::prelude::*;
/// ```
pub mod prelude {
    pub use crate::components::{Button, ColumnHeader, FocusGrid, GridCell, GridRow, Link};
    pub use crate::error::{GridError, StructureError};
    pub use crate::events::{
        direction_for_key, handle_grid_key, on_focus_change, FocusChange,
    };
    pub use crate::focus::{ensure_active, focus_first_in_row, move_focus, Direction};
    pub use crate::node::{BoxNode, Node, NodeId, TextNode};
    pub use crate::normalize::normalize_tab_order;
    pub use crate::outline::outline;
    pub use crate::semantics::{Role, Semantics, SortDirection, TabStop};
}
