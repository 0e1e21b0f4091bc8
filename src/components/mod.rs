//! Declarative components for assembling navigable grids.
//!
//! Thin structural adapters: each component only annotates a node with the
//! role and position attributes the focus engine dispatches on, then calls
//! into the core. They carry no rendering behavior of their own, so any
//! host layout/styling layer can wrap them.
//!
//! # Example
//!
//! ```
//! use rove::components::{Button, ColumnHeader, FocusGrid, GridCell, GridRow, Link};
//! use rove::node::Node;
//! use rove::semantics::SortDirection;
//!
//! let grid: Node = FocusGrid::new("Releases")
//!     .row_count(2)
//!     .column_count(2)
//!     .child(
//!         GridRow::new(0)
//!             .child(ColumnHeader::new(0).sort(SortDirection::Ascending).child(Button::new("Name")))
//!             .child(ColumnHeader::new(1).child(Button::new("Date"))),
//!     )
//!     .child(
//!         GridRow::new(1)
//!             .child(GridCell::new(0).child(Link::new("rove 0.1.0")))
//!             .child(GridCell::new(1).child(Link::new("2024-06-01"))),
//!     )
//!     .into();
//! ```

mod grid;

pub use grid::{Button, ColumnHeader, FocusGrid, GridCell, GridRow, Link};
