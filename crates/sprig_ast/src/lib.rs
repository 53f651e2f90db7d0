//! # sprig_ast
//!
//! Node-kind model, arena-backed tree and capability scanner for Sprig.
//!
//! Sprig models the syntax of a statically typed object-oriented language:
//! declarations, statements, expressions and symbolic references are nodes
//! with typed child slots and parent back-links.
//!
//! ## Architecture
//!
//! - Node kinds form a lattice of [`Capability`] sets, not a single
//!   inheritance chain; each kind carries a static, ordered [`HookTable`]
//! - Node records live in a [`Tree`] and are addressed by [`NodeId`]
//! - Node text is allocated with `bumpalo` in an [`AstArena`]
//! - Traversal is table-driven, see [`visitor`]
//!
//! ## Example
//!
//! ```rust
//! use sprig_ast::{AstArena, Tree, factory};
//!
//! let arena = AstArena::new();
//! let mut tree = Tree::new(&arena);
//!
//! let class = factory::new_class(&mut tree, "Foo");
//! let field = factory::new_field(&mut tree, class, "int", "i").unwrap();
//!
//! assert_eq!(tree.node(class).member_named("i").map(|m| m.id()), Some(field));
//! ```

mod arena;
mod capability;
mod error;
pub mod factory;
mod node;
mod node_kind;
mod role;
mod span;
mod tree;
pub mod visitor;

pub use arena::AstArena;
pub use capability::Capability;
pub use error::TreeError;
pub use node::{BinaryOperatorKind, LiteralValue, Modifier, NodeData, UnaryOperatorKind};
pub use node_kind::{HookTable, NodeKind};
pub use role::{Arity, Attachment, Requirement, Role, SlotSpec};
pub use span::Span;
pub use tree::{NodeId, NodeRef, Tree};

// Re-export commonly used visitor items for convenience
pub use visitor::{Scanner, scan, scan_all, scan_reference, scan_subtree};

#[cfg(test)]
pub mod test_utils;
