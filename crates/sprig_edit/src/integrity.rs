//! Structural integrity check of a whole tree.
//!
//! The check compares slot contents against the attachments recorded on
//! children, both ways, and confirms every occupant satisfies its slot.

use std::collections::HashSet;

use sprig_ast::{Attachment, NodeId, NodeKind, Requirement, Role, Tree};
use thiserror::Error;
use tracing::debug;

/// Errors reported by [`verify`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntegrityError {
    /// A node records an attachment its parent slot does not confirm.
    #[error("node {node} records attachment {attachment} but the slot does not hold it")]
    DanglingAttachment { node: NodeId, attachment: Attachment },

    /// A slot holds a node whose recorded attachment points elsewhere.
    #[error("{parent}.{role} holds {child}, which records {recorded:?}")]
    MissingBackLink {
        parent: NodeId,
        role: Role,
        child: NodeId,
        recorded: Option<Attachment>,
    },

    /// A node occupies more than one slot.
    #[error("node {node} occupies more than one slot")]
    SharedChild { node: NodeId },

    /// A slot occupant does not satisfy the slot requirement.
    #[error("{parent}.{role} requires {requirement}, holds {child} of kind {found}")]
    Mismatch {
        parent: NodeId,
        role: Role,
        requirement: Requirement,
        child: NodeId,
        found: NodeKind,
    },

    /// A parent chain loops.
    #[error("parent chain of node {node} is cyclic")]
    Cycle { node: NodeId },
}

/// Checks every structural invariant of `tree`.
pub fn verify(tree: &Tree<'_>) -> Result<(), IntegrityError> {
    let mut seen = HashSet::new();

    for id in tree.ids() {
        if let Some(attachment) = tree.attachment(id) {
            check_attachment(tree, id, attachment)?;
        }

        for spec in tree.kind(id).slots() {
            for (position, &child) in tree.children(id, spec.role).iter().enumerate() {
                if !seen.insert(child) {
                    return Err(IntegrityError::SharedChild { node: child });
                }
                let expected = Attachment {
                    parent: id,
                    role: spec.role,
                    index: spec.arity.is_sequence().then_some(position),
                };
                let recorded = tree.attachment(child);
                if recorded != Some(expected) {
                    return Err(IntegrityError::MissingBackLink {
                        parent: id,
                        role: spec.role,
                        child,
                        recorded,
                    });
                }
                let found = tree.kind(child);
                if !spec.requirement.accepts(found) {
                    return Err(IntegrityError::Mismatch {
                        parent: id,
                        role: spec.role,
                        requirement: spec.requirement,
                        child,
                        found,
                    });
                }
            }
        }

        check_acyclic(tree, id)?;
    }

    debug!("Verified {} nodes", tree.len());
    Ok(())
}

fn check_attachment(
    tree: &Tree<'_>,
    node: NodeId,
    attachment: Attachment,
) -> Result<(), IntegrityError> {
    let holds = match attachment.index {
        Some(index) => tree.children(attachment.parent, attachment.role).get(index) == Some(&node),
        None => tree.child(attachment.parent, attachment.role) == Some(node),
    };
    if holds {
        Ok(())
    } else {
        Err(IntegrityError::DanglingAttachment { node, attachment })
    }
}

fn check_acyclic(tree: &Tree<'_>, node: NodeId) -> Result<(), IntegrityError> {
    let mut current = node;
    // A chain longer than the node count must revisit a node
    for _ in 0..tree.len() {
        match tree.parent(current) {
            Some(parent) => current = parent,
            None => return Ok(()),
        }
    }
    Err(IntegrityError::Cycle { node })
}
