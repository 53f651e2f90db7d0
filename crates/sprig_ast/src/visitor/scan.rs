//! Scanner trait with one hook per capability.
//!
//! Every hook defaults to a no-op. Overriding a hook intercepts every node
//! kind possessing that capability, in the order fixed by
//! [`NodeKind::hook_table`](crate::NodeKind::hook_table).
//!
//! # Example
//!
//! ```rust
//! use sprig_ast::{AstArena, NodeData, NodeKind, NodeRef, Tree};
//! use sprig_ast::visitor::{Scanner, scan};
//!
//! /// Counts statement-capable nodes.
//! struct StatementCounter {
//!     count: usize,
//! }
//!
//! impl<'a> Scanner<'a> for StatementCounter {
//!     fn scan_statement(&mut self, _node: NodeRef<'_, 'a>) {
//!         self.count += 1;
//!     }
//! }
//!
//! let arena = AstArena::new();
//! let mut tree = Tree::new(&arena);
//! let brk = tree.add(NodeKind::Break, NodeData::new());
//! let lit = tree.add(NodeKind::Literal, NodeData::new());
//!
//! let mut counter = StatementCounter { count: 0 };
//! scan(&mut counter, Some(tree.node(brk)));
//! scan(&mut counter, Some(tree.node(lit)));
//! assert_eq!(counter.count, 1);
//! ```

use crate::NodeRef;

use super::dispatch::dispatch_node;

/// Consumer of capability hooks.
///
/// # Lifetime
///
/// The `'a` lifetime is the arena lifetime of the scanned tree, so names and
/// other node text can be kept beyond a single hook call.
pub trait Scanner<'a>: Sized {
    /// Dispatches a node to every hook of its kind, then to [`visited`].
    ///
    /// Override this if you need custom dispatch logic.
    ///
    /// [`visited`]: Scanner::visited
    #[inline]
    fn dispatch(&mut self, node: NodeRef<'_, 'a>) {
        dispatch_node(self, node);
    }

    /// Called once per dispatch, after every capability hook.
    #[inline]
    fn visited(&mut self, _node: NodeRef<'_, 'a>) {}

    // === Element capabilities ===

    fn scan_element(&mut self, _node: NodeRef<'_, 'a>) {}

    fn scan_code_element(&mut self, _node: NodeRef<'_, 'a>) {}

    fn scan_statement(&mut self, _node: NodeRef<'_, 'a>) {}

    fn scan_expression(&mut self, _node: NodeRef<'_, 'a>) {}

    fn scan_typed_element(&mut self, _node: NodeRef<'_, 'a>) {}

    fn scan_named_element(&mut self, _node: NodeRef<'_, 'a>) {}

    fn scan_modifiable(&mut self, _node: NodeRef<'_, 'a>) {}

    /// Fields, local variables, catch variables and parameters.
    fn scan_variable(&mut self, _node: NodeRef<'_, 'a>) {}

    fn scan_type_member(&mut self, _node: NodeRef<'_, 'a>) {}

    fn scan_generic_element(&mut self, _node: NodeRef<'_, 'a>) {}

    fn scan_multi_typed_element(&mut self, _node: NodeRef<'_, 'a>) {}

    fn scan_targeted_expression(&mut self, _node: NodeRef<'_, 'a>) {}

    fn scan_targeted_access(&mut self, _node: NodeRef<'_, 'a>) {}

    /// `break`, `continue`, `return` and `throw`.
    fn scan_cflow_break(&mut self, _node: NodeRef<'_, 'a>) {}

    fn scan_loop(&mut self, _node: NodeRef<'_, 'a>) {}

    fn scan_executable(&mut self, _node: NodeRef<'_, 'a>) {}

    fn scan_abstract_invocation(&mut self, _node: NodeRef<'_, 'a>) {}

    fn scan_type(&mut self, _node: NodeRef<'_, 'a>) {}

    /// Type declarations and type references alike.
    fn scan_type_information(&mut self, _node: NodeRef<'_, 'a>) {}

    fn scan_code_snippet(&mut self, _node: NodeRef<'_, 'a>) {}

    // === Reference capabilities ===

    fn scan_reference(&mut self, _node: NodeRef<'_, 'a>) {}

    fn scan_variable_reference(&mut self, _node: NodeRef<'_, 'a>) {}

    fn scan_generic_element_reference(&mut self, _node: NodeRef<'_, 'a>) {}

    fn scan_type_annotable_reference(&mut self, _node: NodeRef<'_, 'a>) {}
}
