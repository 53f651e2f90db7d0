//! # sprig_edit
//!
//! Structural replacement engine for Sprig trees.
//!
//! A [`Replacer`] substitutes a node in its parent slot with another node, or
//! a statement with an ordered sequence of statements, keeping parent links,
//! roles and sequence positions consistent. Edits are validated completely
//! before anything is mutated, and can be undone by replacing back or with
//! [`Replacer::revert`].
//!
//! Only structural validity is enforced: whether a replacement makes sense
//! for the type checker is up to the caller.

mod error;
mod integrity;
mod options;
mod replace;

pub use error::EditError;
pub use integrity::{IntegrityError, verify};
pub use options::EditOptions;
pub use replace::{Replacer, Splice};
