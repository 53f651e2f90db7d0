//! Tree mutation error types.

use thiserror::Error;

use crate::role::{Arity, Requirement, Role};
use crate::{NodeId, NodeKind};

/// Errors that can occur while attaching or inserting children.
///
/// Every failing operation leaves the tree unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    /// The child kind does not satisfy the slot requirement.
    #[error("{parent} {role} slot requires {requirement}, found {found}")]
    StructuralMismatch {
        parent: NodeKind,
        role: Role,
        requirement: Requirement,
        found: NodeKind,
    },

    /// The operation needs a slot of a different arity.
    #[error("{parent} {role} slot is {actual:?}, operation needs {expected:?}")]
    Arity {
        parent: NodeKind,
        role: Role,
        expected: Arity,
        actual: Arity,
    },

    /// The parent kind declares no slot with this role.
    #[error("{parent} has no {role} slot")]
    NoSuchSlot { parent: NodeKind, role: Role },

    /// The child already has a parent.
    #[error("node {node} is already attached")]
    AlreadyAttached { node: NodeId },

    /// The single slot already holds a child.
    #[error("{role} slot of node {parent} is occupied by {occupant}")]
    SlotOccupied {
        parent: NodeId,
        role: Role,
        occupant: NodeId,
    },

    /// Attaching would make a node its own ancestor.
    #[error("attaching {child} under {parent} would create a cycle")]
    Cycle { parent: NodeId, child: NodeId },

    /// Insert position past the end of the sequence.
    #[error("index {index} out of bounds for {role} slot of length {len}")]
    IndexOutOfBounds { role: Role, index: usize, len: usize },
}
