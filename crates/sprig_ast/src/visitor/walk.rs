//! Scan entry points.
//!
//! Element kinds go through [`scan`], reference kinds through
//! [`scan_reference`]. Mixing them up is a caller bug and panics.

use tracing::trace;

use crate::NodeRef;

use super::scan::Scanner;

/// Scans one element node.
///
/// Does nothing for `None`.
///
/// # Panics
///
/// Panics if the node is a reference kind.
pub fn scan<'a, S>(scanner: &mut S, node: Option<NodeRef<'_, 'a>>)
where
    S: Scanner<'a>,
{
    let Some(node) = node else {
        return;
    };
    assert!(
        !node.kind().is_reference(),
        "{} is a reference kind, scan it with scan_reference",
        node.kind()
    );
    scanner.dispatch(node);
}

/// Scans each element node of a collection, in order.
///
/// Does nothing for `None`.
///
/// # Panics
///
/// Panics if any node is a reference kind.
pub fn scan_all<'t, 'a: 't, S, I>(scanner: &mut S, nodes: Option<I>)
where
    S: Scanner<'a>,
    I: IntoIterator<Item = NodeRef<'t, 'a>>,
{
    let Some(nodes) = nodes else {
        return;
    };
    for node in nodes {
        scan(scanner, Some(node));
    }
}

/// Scans one reference node.
///
/// Does nothing for `None`.
///
/// # Panics
///
/// Panics if the node is not a reference kind.
pub fn scan_reference<'a, S>(scanner: &mut S, reference: Option<NodeRef<'_, 'a>>)
where
    S: Scanner<'a>,
{
    let Some(reference) = reference else {
        return;
    };
    assert!(
        reference.kind().is_reference(),
        "{} is not a reference kind, scan it with scan",
        reference.kind()
    );
    scanner.dispatch(reference);
}

/// Scans a whole subtree, pre-order, children in slot order.
///
/// Each node is routed through [`scan`] or [`scan_reference`] by kind. The
/// walk keeps its own stack, so tree depth is not limited by the call stack.
pub fn scan_subtree<'a, S>(scanner: &mut S, node: NodeRef<'_, 'a>)
where
    S: Scanner<'a>,
{
    let mut pending = vec![node];
    while let Some(node) = pending.pop() {
        trace!("Scanning {} {}", node.kind(), node.id());

        if node.kind().is_reference() {
            scan_reference(scanner, Some(node));
        } else {
            scan(scanner, Some(node));
        }

        pending.extend(node.child_nodes().into_iter().rev());
    }
}
