//! Edit error types.

use sprig_ast::{NodeId, Role, TreeError};
use thiserror::Error;

use crate::integrity::IntegrityError;

/// Errors that can occur while replacing nodes.
///
/// Every edit is validated completely before the tree is touched, so any
/// error other than [`EditError::Integrity`] means the tree is unchanged.
/// `Integrity` is reported by the post-edit check, after the edit was
/// applied.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EditError {
    /// The target has no parent slot to substitute into.
    #[error("node {target} is detached, there is no slot to replace it in")]
    NoAttachmentPoint { target: NodeId },

    /// A replacement does not fit the target's slot.
    #[error("structural mismatch: {0}")]
    StructuralMismatch(TreeError),

    /// A replacement is attached elsewhere and moving is disabled.
    #[error("replacement {node} is already attached elsewhere")]
    AlreadyAttached { node: NodeId },

    /// A replacement fills a required slot it cannot be moved out of.
    #[error("replacement {node} fills the required {role} slot of its parent")]
    Pinned { node: NodeId, role: Role },

    /// A replacement contains the target in its subtree.
    #[error("replacement {replacement} is an ancestor of target {target}")]
    Cycle { target: NodeId, replacement: NodeId },

    /// The same node was listed twice, or the target was listed.
    #[error("node {node} appears more than once in the edit")]
    DuplicateReplacement { node: NodeId },

    /// Post-edit integrity check failed. The edit has already been applied.
    #[error("integrity check failed: {0}")]
    Integrity(#[from] IntegrityError),

    /// Invalid edit options.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl EditError {
    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

impl From<TreeError> for EditError {
    fn from(error: TreeError) -> Self {
        match error {
            TreeError::AlreadyAttached { node } => Self::AlreadyAttached { node },
            TreeError::Cycle { parent, child } => Self::Cycle {
                target: parent,
                replacement: child,
            },
            other => Self::StructuralMismatch(other),
        }
    }
}
