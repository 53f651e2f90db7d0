//! In-place node replacement.
//!
//! A replacement takes over the target's parent slot: its parent, role and
//! (for sequence slots) position. The target ends up detached with its own
//! subtree untouched, so replacing back restores the original tree.
//!
//! # Example
//!
//! ```rust
//! use sprig_ast::{AstArena, LiteralValue, Role, Tree, factory};
//! use sprig_edit::Replacer;
//!
//! let arena = AstArena::new();
//! let mut tree = Tree::new(&arena);
//! let two = factory::new_literal(&mut tree, LiteralValue::Int(2));
//! let local = factory::new_local_variable(&mut tree, "int", "x", Some(two)).unwrap();
//! let three = factory::new_literal(&mut tree, LiteralValue::Int(3));
//!
//! let replacer = Replacer::new();
//! replacer.replace(&mut tree, two, three).unwrap();
//! assert_eq!(tree.child(local, Role::DefaultExpression), Some(three));
//! assert_eq!(tree.parent(two), None);
//!
//! replacer.replace(&mut tree, three, two).unwrap();
//! assert_eq!(tree.child(local, Role::DefaultExpression), Some(two));
//! ```

use std::collections::HashSet;

use sprig_ast::{Arity, Attachment, NodeId, Role, Tree, TreeError};
use tracing::{debug, trace};

use crate::integrity::verify;
use crate::{EditError, EditOptions};

/// Record of a completed sequence replacement, used to [`revert`] it.
///
/// [`revert`]: Replacer::revert
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Splice {
    /// Parent whose slot was edited.
    pub parent: NodeId,
    /// Role of the edited slot.
    pub role: Role,
    /// Position of the removed node, `None` for single and optional slots.
    pub start: Option<usize>,
    /// Nodes now occupying the removed node's place, in order.
    pub inserted: Vec<NodeId>,
    /// The node that was replaced.
    pub removed: NodeId,
}

/// Replacement engine.
#[derive(Debug, Clone, Default)]
pub struct Replacer {
    options: EditOptions,
}

impl Replacer {
    /// Creates a replacer with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a replacer with the given options.
    pub fn with_options(options: EditOptions) -> Self {
        Self { options }
    }

    /// Returns the options in effect.
    pub fn options(&self) -> &EditOptions {
        &self.options
    }

    /// Replaces `target` with `replacement` in `target`'s parent slot.
    ///
    /// Works for single, optional and sequence slots; in a sequence only
    /// the target's position changes. Replacing a node with itself is a
    /// no-op.
    ///
    /// # Errors
    ///
    /// - [`EditError::NoAttachmentPoint`] if `target` is detached
    /// - [`EditError::StructuralMismatch`] if `replacement` does not fit
    /// - [`EditError::AlreadyAttached`], [`EditError::Pinned`] if
    ///   `replacement` is attached and cannot be moved
    /// - [`EditError::Cycle`] if `replacement` is an ancestor of `target`
    pub fn replace(
        &self,
        tree: &mut Tree<'_>,
        target: NodeId,
        replacement: NodeId,
    ) -> Result<(), EditError> {
        if target == replacement {
            tree.attachment(target)
                .ok_or(EditError::NoAttachmentPoint { target })?;
            trace!("Replacing {} with itself", target);
            return Ok(());
        }
        self.apply(tree, target, &[replacement], self.options.reattach)?;
        Ok(())
    }

    /// Replaces `target` with an ordered sequence of nodes.
    ///
    /// In a sequence slot the target's position is removed and the
    /// replacements are inserted there in order, so the slot length changes
    /// by `replacements.len() - 1` and later siblings shift accordingly. An
    /// empty `replacements` simply removes the target. In a single or
    /// optional slot exactly one replacement is accepted.
    pub fn replace_with_sequence(
        &self,
        tree: &mut Tree<'_>,
        target: NodeId,
        replacements: &[NodeId],
    ) -> Result<Splice, EditError> {
        self.apply(tree, target, replacements, self.options.reattach)
    }

    /// Replaces `target` with every statement of the block or statement
    /// list `list`.
    ///
    /// The statements are moved out of `list`, which is left empty. This
    /// always moves, regardless of [`EditOptions::reattach`].
    pub fn replace_with_statements(
        &self,
        tree: &mut Tree<'_>,
        target: NodeId,
        list: NodeId,
    ) -> Result<Splice, EditError> {
        tree.slot_spec(list, Role::Statements)?;
        let statements = tree.children(list, Role::Statements).to_vec();
        debug!(
            "Splicing {} statements of {} over {}",
            statements.len(),
            list,
            target
        );
        self.apply(tree, target, &statements, true)
    }

    /// Undoes a splice: the removed node takes back the place of the first
    /// inserted node, and the other inserted nodes still in that slot are
    /// detached.
    pub fn revert(&self, tree: &mut Tree<'_>, splice: &Splice) -> Result<(), EditError> {
        let leftovers: Vec<NodeId> = splice
            .inserted
            .iter()
            .skip(1)
            .copied()
            .filter(|&node| {
                tree.attachment(node)
                    .is_some_and(|a| a.parent == splice.parent && a.role == splice.role)
            })
            .collect();

        match splice.inserted.first() {
            Some(&first) => {
                if first != splice.removed {
                    self.apply(tree, first, &[splice.removed], self.options.reattach)?;
                }
            }
            None => self.reinsert(tree, splice)?,
        }

        for node in leftovers {
            tree.detach(node);
        }
        debug!("Reverted splice over {} in {}", splice.removed, splice.parent);

        if self.options.verify {
            verify(tree)?;
        }
        Ok(())
    }

    /// Puts the removed node of an empty splice back at its position.
    fn reinsert(&self, tree: &mut Tree<'_>, splice: &Splice) -> Result<(), EditError> {
        let Some(start) = splice.start else {
            return Err(EditError::StructuralMismatch(TreeError::Arity {
                parent: tree.kind(splice.parent),
                role: splice.role,
                expected: Arity::Sequence,
                actual: Arity::Single,
            }));
        };
        let node = splice.removed;
        tree.check_fits(splice.parent, splice.role, tree.kind(node))?;
        let len = tree.children(splice.parent, splice.role).len();
        if start > len {
            return Err(EditError::StructuralMismatch(TreeError::IndexOutOfBounds {
                role: splice.role,
                index: start,
                len,
            }));
        }
        if tree.is_ancestor(node, splice.parent) {
            return Err(EditError::Cycle {
                target: splice.parent,
                replacement: node,
            });
        }
        self.check_movable(tree, node, self.options.reattach)?;

        tree.detach(node);
        tree.insert(splice.parent, splice.role, start, node)?;
        Ok(())
    }

    /// Validates the whole edit, then performs it.
    fn apply(
        &self,
        tree: &mut Tree<'_>,
        target: NodeId,
        replacements: &[NodeId],
        reattach: bool,
    ) -> Result<Splice, EditError> {
        let attachment = tree
            .attachment(target)
            .ok_or(EditError::NoAttachmentPoint { target })?;
        self.validate(tree, target, attachment, replacements, reattach)?;

        for &node in replacements {
            if let Some(previous) = tree.detach(node) {
                debug!("Moved {} out of {}", node, previous);
            }
        }

        // Moving a sibling out of the same sequence shifts the target
        let attachment = tree
            .attachment(target)
            .ok_or(EditError::NoAttachmentPoint { target })?;
        let Attachment {
            parent,
            role,
            index,
        } = attachment;

        tree.detach(target);
        match index {
            Some(start) => {
                for (offset, &node) in replacements.iter().enumerate() {
                    tree.insert(parent, role, start + offset, node)?;
                }
            }
            None => {
                if let Some(&node) = replacements.first() {
                    tree.attach(parent, role, node)?;
                }
            }
        }
        debug!(
            "Replaced {} at {} with {} node(s)",
            target,
            attachment,
            replacements.len()
        );

        if self.options.verify {
            verify(tree)?;
        }

        Ok(Splice {
            parent,
            role,
            start: index,
            inserted: replacements.to_vec(),
            removed: target,
        })
    }

    fn validate(
        &self,
        tree: &Tree<'_>,
        target: NodeId,
        attachment: Attachment,
        replacements: &[NodeId],
        reattach: bool,
    ) -> Result<(), EditError> {
        let (_, spec) = tree.slot_spec(attachment.parent, attachment.role)?;
        if !spec.arity.is_sequence() && replacements.len() != 1 {
            return Err(EditError::StructuralMismatch(TreeError::Arity {
                parent: tree.kind(attachment.parent),
                role: attachment.role,
                expected: Arity::Sequence,
                actual: spec.arity,
            }));
        }

        let mut seen = HashSet::from([target]);
        for &node in replacements {
            if !seen.insert(node) {
                return Err(EditError::DuplicateReplacement { node });
            }
            tree.check_fits(attachment.parent, attachment.role, tree.kind(node))?;
            if tree.is_ancestor(node, target) {
                return Err(EditError::Cycle {
                    target,
                    replacement: node,
                });
            }
            self.check_movable(tree, node, reattach)?;
        }
        Ok(())
    }

    fn check_movable(&self, tree: &Tree<'_>, node: NodeId, reattach: bool) -> Result<(), EditError> {
        let Some(current) = tree.attachment(node) else {
            return Ok(());
        };
        if !reattach {
            return Err(EditError::AlreadyAttached { node });
        }
        let (_, spec) = tree.slot_spec(current.parent, current.role)?;
        if spec.arity == Arity::Single {
            return Err(EditError::Pinned {
                node,
                role: current.role,
            });
        }
        Ok(())
    }
}
