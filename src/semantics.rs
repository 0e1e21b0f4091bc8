//! Semantic annotations consumed by the focus engine.
//!
//! Roles and position attributes are the only contract between the host's
//! rendering layer and navigation: the engine dispatches on what a node
//! *declares itself to be*, never on how it is rendered. This keeps focus
//! management transparent to the surrounding components - a new link or
//! button dropped into a cell participates without modification.
//!
//! Position attributes are 1-based, need not be contiguous, and need not
//! appear in increasing structural order. The engine compares them only for
//! equality (same-column matching); adjacency always comes from structural
//! order.

/// Semantic roles for nodes in a navigable grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Role {
    /// Plain wrapper with no semantics; traversed transparently.
    #[default]
    None,
    /// The grid region root.
    Grid,
    /// A positional grouping of cells.
    Row,
    /// Content cell.
    Cell,
    /// Column header cell; same traversal role as [`Role::Cell`].
    ColumnHeader,
    /// Link-like interactive target.
    Link,
    /// Button-like interactive target.
    Button,
}

impl Role {
    /// Returns true if this role is an interactive target.
    pub fn is_interactive(&self) -> bool {
        matches!(self, Role::Link | Role::Button)
    }

    /// Returns true if this role is a cell (content or header).
    pub fn is_cell(&self) -> bool {
        matches!(self, Role::Cell | Role::ColumnHeader)
    }

    /// Get the human-readable name for this role.
    pub fn name(&self) -> &'static str {
        match self {
            Role::None => "none",
            Role::Grid => "grid",
            Role::Row => "row",
            Role::Cell => "gridcell",
            Role::ColumnHeader => "columnheader",
            Role::Link => "link",
            Role::Button => "button",
        }
    }
}

/// Sort annotation for column headers.
///
/// Exposed to assistive technology; never consulted by navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    /// Sorted ascending.
    Ascending,
    /// Sorted descending.
    Descending,
    /// Explicitly unsorted.
    None,
    /// Sorted by something other than this column's values.
    Other,
}

impl SortDirection {
    /// Get the exposed attribute value for this sort direction.
    pub fn name(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "ascending",
            SortDirection::Descending => "descending",
            SortDirection::None => "none",
            SortDirection::Other => "other",
        }
    }
}

/// Sequential (Tab key) reachability of an interactive node.
///
/// The roving tabindex marker. At most one target per grid holds
/// [`TabStop::Active`]; everything else is either freshly built
/// ([`TabStop::Auto`], reverts to the platform default of being reachable)
/// or explicitly removed from the tab order ([`TabStop::Removed`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TabStop {
    /// Platform default for a freshly built node. Normalization demotes
    /// interactive nodes in this state to [`TabStop::Removed`].
    #[default]
    Auto,
    /// The single roving tab stop of its grid.
    Active,
    /// Explicitly removed from the sequential tab order.
    Removed,
}

impl TabStop {
    /// True for the single sequentially reachable target of a grid.
    pub fn is_active(&self) -> bool {
        matches!(self, TabStop::Active)
    }
}

/// Semantic annotations on a container node.
///
/// The full boundary data format between structure and engine. Everything
/// except `role` and `tab_stop` is advisory: positions are matched for
/// equality only, counts and labels are display/announcement data.
#[derive(Debug, Clone, Default)]
pub struct Semantics {
    /// The semantic role.
    pub role: Role,
    /// Accessible label (grids carry one per the boundary contract).
    pub label: Option<String>,
    /// Exposed 1-based row position (rows only).
    pub row_index: Option<u32>,
    /// Exposed 1-based column position (cells only).
    pub col_index: Option<u32>,
    /// Declared row count (grids only; advisory).
    pub row_count: Option<u32>,
    /// Declared column count (grids only; advisory).
    pub col_count: Option<u32>,
    /// Sort annotation (column headers only; advisory).
    pub sort: Option<SortDirection>,
    /// Advisory selection flag (rows only).
    pub selected: Option<bool>,
    /// Sequential tab stop state (interactive targets only).
    pub tab_stop: TabStop,
}

impl Semantics {
    /// Create default (wrapper) semantics.
    pub fn new() -> Self {
        Self::default()
    }

    /// True iff this node is the sequentially reachable target of its grid.
    pub fn is_reachable(&self) -> bool {
        self.role.is_interactive() && self.tab_stop.is_active()
    }
}
