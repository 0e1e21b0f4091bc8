//! Post-mutation normalization of the sequential tab order.
//!
//! The host framework can rebuild any part of the tree at any time, and a
//! freshly built link or button reverts to the platform default of being
//! sequentially reachable. Run [`normalize_tab_order`] after every
//! structural change to re-establish the roving invariant: everything not
//! holding the marker is out of the tab order.
//!
//! The declarative cell builders in [`crate::components`] apply this to
//! their subtree at build time, so trees assembled through them come out
//! normalized.

use crate::node::Node;
use crate::semantics::TabStop;

/// Remove every interactive node in `scope` that does not hold the focus
/// marker from the sequential tab order.
///
/// Idempotent: re-applying to an already-normalized subtree changes
/// nothing, and a surviving [`TabStop::Active`] marker is preserved.
pub fn normalize_tab_order(scope: &mut Node) {
    if let Some(sem) = scope.semantics_mut() {
        if sem.role.is_interactive() && sem.tab_stop != TabStop::Active {
            sem.tab_stop = TabStop::Removed;
        }
    }
    if let Some(children) = scope.children_mut() {
        for child in children {
            normalize_tab_order(child);
        }
    }
}
