//! Grid structure components.
//!
//! These mirror the boundary contract the engine queries against: a grid
//! region containing rows, rows containing cells or column headers, cells
//! containing interactive targets. Position indices are taken 0-based (the
//! natural loop counter on the host side) and exposed 1-based on the node,
//! matching how assistive technology expects them.
//!
//! Cell and header components normalize their subtree when converted into a
//! [`Node`]: freshly built links and buttons drop out of the sequential tab
//! order at that point, so a tree assembled from these components never
//! introduces a second tab stop behind the engine's back.

use crate::node::{BoxNode, Node, NodeId, TextNode};
use crate::normalize::normalize_tab_order;
use crate::semantics::{Role, SortDirection, TabStop};

/// The grid region root.
///
/// Carries the accessible label and the advisory declared size. The
/// declared counts are exposed for announcement only; traversal uses actual
/// structural positions.
#[derive(Debug, Clone)]
pub struct FocusGrid {
    node: BoxNode,
}

impl FocusGrid {
    /// Create a grid region with an accessible label.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            node: BoxNode::new().role(Role::Grid).label(label),
        }
    }

    /// This grid's node id.
    pub fn id(&self) -> NodeId {
        self.node.id
    }

    /// Declare the row count (advisory, display-only).
    pub fn row_count(mut self, count: u32) -> Self {
        self.node = self.node.row_count(count);
        self
    }

    /// Declare the column count (advisory, display-only).
    pub fn column_count(mut self, count: u32) -> Self {
        self.node = self.node.col_count(count);
        self
    }

    /// Add a child node.
    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.node = self.node.child(node);
        self
    }

    /// Add multiple children.
    pub fn children(mut self, nodes: impl IntoIterator<Item = impl Into<Node>>) -> Self {
        self.node = self.node.children(nodes);
        self
    }
}

impl From<FocusGrid> for Node {
    fn from(grid: FocusGrid) -> Self {
        grid.node.into()
    }
}

/// A grid row.
///
/// Takes a 0-based row index and exposes it 1-based. Indices need not be
/// contiguous; the engine orders rows structurally.
#[derive(Debug, Clone)]
pub struct GridRow {
    node: BoxNode,
}

impl GridRow {
    /// Create a row at the given 0-based index.
    pub fn new(row_index: u32) -> Self {
        Self {
            node: BoxNode::new().role(Role::Row).row_index(row_index + 1),
        }
    }

    /// This row's node id (pass to [`crate::focus::focus_first_in_row`]
    /// when the row is activated by pointer).
    pub fn id(&self) -> NodeId {
        self.node.id
    }

    /// Set the advisory selection flag.
    pub fn selected(mut self, selected: bool) -> Self {
        self.node = self.node.selected(selected);
        self
    }

    /// Add a child node.
    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.node = self.node.child(node);
        self
    }

    /// Add multiple children.
    pub fn children(mut self, nodes: impl IntoIterator<Item = impl Into<Node>>) -> Self {
        self.node = self.node.children(nodes);
        self
    }
}

impl From<GridRow> for Node {
    fn from(row: GridRow) -> Self {
        row.node.into()
    }
}

/// A content cell.
///
/// Takes a 0-based column index and exposes it 1-based. The cell container
/// itself sits outside the tab order; its targets are managed by the
/// engine.
#[derive(Debug, Clone)]
pub struct GridCell {
    node: BoxNode,
}

impl GridCell {
    /// Create a cell at the given 0-based column index.
    pub fn new(column_index: u32) -> Self {
        Self {
            node: BoxNode::new()
                .role(Role::Cell)
                .col_index(column_index + 1)
                .tab_stop(TabStop::Removed),
        }
    }

    /// Add a child node.
    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.node = self.node.child(node);
        self
    }

    /// Add multiple children.
    pub fn children(mut self, nodes: impl IntoIterator<Item = impl Into<Node>>) -> Self {
        self.node = self.node.children(nodes);
        self
    }
}

impl From<GridCell> for Node {
    fn from(cell: GridCell) -> Self {
        let mut node: Node = cell.node.into();
        normalize_tab_order(&mut node);
        node
    }
}

/// A column header cell.
///
/// Same traversal role as [`GridCell`], with an optional sort annotation
/// exposed to assistive technology.
#[derive(Debug, Clone)]
pub struct ColumnHeader {
    node: BoxNode,
}

impl ColumnHeader {
    /// Create a header at the given 0-based column index.
    pub fn new(column_index: u32) -> Self {
        Self {
            node: BoxNode::new()
                .role(Role::ColumnHeader)
                .col_index(column_index + 1)
                .tab_stop(TabStop::Removed),
        }
    }

    /// Annotate the sort direction of this column.
    pub fn sort(mut self, sort: SortDirection) -> Self {
        self.node = self.node.sort(sort);
        self
    }

    /// Add a child node.
    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.node = self.node.child(node);
        self
    }

    /// Add multiple children.
    pub fn children(mut self, nodes: impl IntoIterator<Item = impl Into<Node>>) -> Self {
        self.node = self.node.children(nodes);
        self
    }
}

impl From<ColumnHeader> for Node {
    fn from(header: ColumnHeader) -> Self {
        let mut node: Node = header.node.into();
        normalize_tab_order(&mut node);
        node
    }
}

/// A link-like interactive target.
#[derive(Debug, Clone)]
pub struct Link {
    node: BoxNode,
}

impl Link {
    /// Create a link with the given text.
    pub fn new(text: impl AsRef<str>) -> Self {
        Self {
            node: BoxNode::new().role(Role::Link).child(TextNode::new(text)),
        }
    }

    /// This link's node id.
    pub fn id(&self) -> NodeId {
        self.node.id
    }
}

impl From<Link> for Node {
    fn from(link: Link) -> Self {
        link.node.into()
    }
}

/// A button-like interactive target.
#[derive(Debug, Clone)]
pub struct Button {
    node: BoxNode,
}

impl Button {
    /// Create a button with the given text.
    pub fn new(text: impl AsRef<str>) -> Self {
        Self {
            node: BoxNode::new().role(Role::Button).child(TextNode::new(text)),
        }
    }

    /// This button's node id.
    pub fn id(&self) -> NodeId {
        self.node.id
    }
}

impl From<Button> for Node {
    fn from(button: Button) -> Self {
        button.node.into()
    }
}
