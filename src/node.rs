//! Node types for the navigable tree.
//!
//! The node tree is the shared substrate between the host framework (which
//! builds and rebuilds it on every render) and the focus engine (which reads
//! it and flips reachability flags on it). Each node is either a container
//! carrying [`Semantics`] or an inert text leaf.
//!
//! The engine never assumes a fixed shape: semantic layers (grid, row, cell,
//! target) may be separated by any number of plain wrapper containers, and
//! the host may replace whole subtrees between calls.
//!
//! # Example
//!
//! ```
//! use rove::node::{BoxNode, Node, TextNode};
//! use rove::semantics::Role;
//!
//! let cell: Node = BoxNode::new()
//!     .role(Role::Cell)
//!     .col_index(1)
//!     .child(BoxNode::new().role(Role::Link).child(TextNode::new("Open")))
//!     .into();
//! ```

use crate::semantics::Semantics;
use smallvec::SmallVec;
use smartstring::alias::String as SmartString;
use std::sync::atomic::{AtomicU64, Ordering};

/// Type alias for node children collections.
/// Uses SmallVec with boxed nodes - the Box provides necessary indirection for
/// the recursive Node type while SmallVec avoids Vec overhead for small child counts.
pub type NodeChildren = SmallVec<[Box<Node>; 8]>;

/// Unique identifier for nodes in the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub u64);

impl NodeId {
    /// Generate a new unique node ID.
    pub fn new() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        NodeId(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NodeId {
    fn default() -> Self {
        Self::new()
    }
}

/// A node in the navigable tree.
#[derive(Debug, Clone)]
pub enum Node {
    /// Container node carrying semantics.
    Box(BoxNode),
    /// Text content node; invisible to navigation.
    Text(TextNode),
}

impl Node {
    /// Get the node's unique ID.
    #[inline]
    pub fn id(&self) -> NodeId {
        match self {
            Node::Box(n) => n.id,
            Node::Text(n) => n.id,
        }
    }

    /// Get the node's children (if any).
    pub fn children(&self) -> &[Box<Node>] {
        match self {
            Node::Box(n) => &n.children,
            Node::Text(_) => &[],
        }
    }

    /// Get mutable reference to children (if any).
    pub fn children_mut(&mut self) -> Option<&mut NodeChildren> {
        match self {
            Node::Box(n) => Some(&mut n.children),
            Node::Text(_) => None,
        }
    }

    /// Get the node's semantics. Text leaves carry none.
    pub fn semantics(&self) -> Option<&Semantics> {
        match self {
            Node::Box(n) => Some(&n.semantics),
            Node::Text(_) => None,
        }
    }

    /// Get mutable semantics (if any).
    pub fn semantics_mut(&mut self) -> Option<&mut Semantics> {
        match self {
            Node::Box(n) => Some(&mut n.semantics),
            Node::Text(_) => None,
        }
    }
}

// === Box Node ===

/// Container node (equivalent to a `<div>` with ARIA attributes).
///
/// Carries the [`Semantics`] the focus engine dispatches on. A box with
/// default semantics is a plain wrapper the engine traverses transparently.
///
/// # Example
///
/// ```
/// use rove::node::BoxNode;
/// use rove::semantics::Role;
///
/// let row = BoxNode::new()
///     .role(Role::Row)
///     .row_index(3)
///     .child(BoxNode::new().role(Role::Cell).col_index(1));
/// ```
#[derive(Debug, Clone)]
pub struct BoxNode {
    /// Unique identifier.
    pub id: NodeId,
    /// Child nodes (SmallVec: stack-allocated for ≤8 children).
    pub children: NodeChildren,
    /// Semantic annotations consumed by the focus engine.
    pub semantics: Semantics,
}

impl BoxNode {
    /// Create a new box node with default (wrapper) semantics.
    pub fn new() -> Self {
        Self {
            id: NodeId::new(),
            children: SmallVec::new(),
            semantics: Semantics::default(),
        }
    }

    /// Set a custom node ID.
    ///
    /// Useful for tracking specific nodes across rebuilds.
    pub fn id(mut self, id: NodeId) -> Self {
        self.id = id;
        self
    }

    // === Child management ===

    /// Add a child node.
    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(Box::new(node.into()));
        self
    }

    /// Add multiple children.
    pub fn children(mut self, nodes: impl IntoIterator<Item = impl Into<Node>>) -> Self {
        self.children
            .extend(nodes.into_iter().map(|n| Box::new(n.into())));
        self
    }

    // === Semantics ===

    /// Set the semantic role.
    pub fn role(mut self, role: crate::semantics::Role) -> Self {
        self.semantics.role = role;
        self
    }

    /// Set the accessible label.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.semantics.label = Some(label.into());
        self
    }

    /// Set the exposed 1-based row position.
    pub fn row_index(mut self, index: u32) -> Self {
        self.semantics.row_index = Some(index);
        self
    }

    /// Set the exposed 1-based column position.
    pub fn col_index(mut self, index: u32) -> Self {
        self.semantics.col_index = Some(index);
        self
    }

    /// Set the declared (advisory) row count.
    pub fn row_count(mut self, count: u32) -> Self {
        self.semantics.row_count = Some(count);
        self
    }

    /// Set the declared (advisory) column count.
    pub fn col_count(mut self, count: u32) -> Self {
        self.semantics.col_count = Some(count);
        self
    }

    /// Set the sort annotation (column headers only; advisory).
    pub fn sort(mut self, sort: crate::semantics::SortDirection) -> Self {
        self.semantics.sort = Some(sort);
        self
    }

    /// Set the advisory selection flag.
    pub fn selected(mut self, selected: bool) -> Self {
        self.semantics.selected = Some(selected);
        self
    }

    /// Set the sequential tab stop state.
    pub fn tab_stop(mut self, tab_stop: crate::semantics::TabStop) -> Self {
        self.semantics.tab_stop = tab_stop;
        self
    }

    /// Replace the entire semantics.
    pub fn semantics(mut self, semantics: Semantics) -> Self {
        self.semantics = semantics;
        self
    }
}

impl Default for BoxNode {
    fn default() -> Self {
        Self::new()
    }
}

impl From<BoxNode> for Node {
    fn from(node: BoxNode) -> Self {
        Node::Box(node)
    }
}

// === Text Node ===

/// Text content node.
///
/// Plain content inside cells. Navigation skips it entirely; a cell whose
/// only children are text leaves counts as empty.
///
/// The content is stored in a SmartString, which uses inline storage for
/// strings up to 23 bytes, avoiding heap allocation for short labels.
#[derive(Debug, Clone)]
pub struct TextNode {
    /// Unique identifier.
    pub id: NodeId,
    /// Text content.
    pub content: SmartString,
}

impl TextNode {
    /// Create a new text node.
    pub fn new(content: impl AsRef<str>) -> Self {
        Self {
            id: NodeId::new(),
            content: SmartString::from(content.as_ref()),
        }
    }

    /// Get the text content.
    pub fn text(&self) -> &str {
        self.content.as_str()
    }
}

impl From<TextNode> for Node {
    fn from(node: TextNode) -> Self {
        Node::Text(node)
    }
}

impl From<&str> for TextNode {
    fn from(s: &str) -> Self {
        TextNode::new(s)
    }
}

impl From<String> for TextNode {
    fn from(s: String) -> Self {
        TextNode::new(s)
    }
}
