//! Error types for grid focus navigation.
//!
//! Expected conditions (empty grid, moves past the grid boundary) are not
//! errors - they collapse to no-ops inside the engine. Errors here describe
//! genuine contract violations by the structural collaborator; the public
//! entry points log them and abandon the operation without partial state
//! change.

use crate::node::NodeId;

/// A tree violating the grid structure contract.
#[derive(Debug, Clone, Copy, thiserror::Error)]
pub enum StructureError {
    /// A node is not embedded inside the expected ancestor.
    #[error("node {0:?} has no enclosing {1}")]
    NoEnclosing(NodeId, &'static str),
    /// A cell required for vertical navigation declares no column position.
    #[error("cell {0:?} declares no column position")]
    NoColumnPosition(NodeId),
    /// A node was passed where a different role was required.
    #[error("node {0:?} is not a {1}")]
    WrongRole(NodeId, &'static str),
}

/// Grid navigation error.
#[derive(Debug, Clone, Copy, thiserror::Error)]
pub enum GridError {
    /// Navigation was invoked without a resolvable grid region.
    #[error("no grid region found; canceling focus move")]
    MissingGrid,
    /// The tree violates the grid structure contract.
    #[error(transparent)]
    Structure(#[from] StructureError),
}
