//! Capability-scan traversal.
//!
//! Scanning a node does not call one method per concrete kind. Instead the
//! kind's [`HookTable`](crate::HookTable) lists every capability the kind
//! possesses, and dispatch calls the matching [`Scanner`] hook for each of
//! them in order, then [`Scanner::visited`]. A consumer overriding
//! `scan_statement` therefore sees every statement kind, including classes
//! declared in statement position and local variables.
//!
//! # Overview
//!
//! - [`Scanner`] - One default no-op hook per capability
//! - [`dispatch_node`] - Table-driven dispatch of one node
//! - [`scan`], [`scan_all`], [`scan_reference`] - Entry points for one node, a
//!   collection, and a reference
//! - [`scan_subtree`] - Pre-order scan of a whole subtree
//!
//! # Example
//!
//! ```rust
//! use sprig_ast::{AstArena, Capability, NodeData, NodeKind, NodeRef, Tree};
//! use sprig_ast::visitor::{Scanner, scan_subtree};
//!
//! /// Collects the names of typed elements.
//! struct TypedNames<'a> {
//!     names: Vec<&'a str>,
//! }
//!
//! impl<'a> Scanner<'a> for TypedNames<'a> {
//!     fn scan_typed_element(&mut self, node: NodeRef<'_, 'a>) {
//!         if let Some(name) = node.name() {
//!             self.names.push(name);
//!         }
//!     }
//! }
//!
//! let arena = AstArena::new();
//! let mut tree = Tree::new(&arena);
//! let class = tree.add(NodeKind::Class, NodeData::named("Foo"));
//! let field = tree.add(NodeKind::Field, NodeData::named("i"));
//! tree.attach(class, sprig_ast::Role::Members, field).unwrap();
//!
//! let mut collector = TypedNames { names: Vec::new() };
//! scan_subtree(&mut collector, tree.node(class));
//! assert_eq!(collector.names, vec!["i"]);
//! assert!(!NodeKind::Class.has_capability(Capability::TypedElement));
//! ```

mod dispatch;
mod scan;
mod walk;

pub use dispatch::{call_hook, dispatch_node};
pub use scan::Scanner;
pub use walk::{scan, scan_all, scan_reference, scan_subtree};
