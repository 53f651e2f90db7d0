//! Handle-addressed node storage with parent back-links.
//!
//! A [`Tree`] owns every node record and addresses them by [`NodeId`].
//! Parents refer to children, and children to their parent, only through
//! handles, so moving a subtree is a handle rewrite and never a copy.
//!
//! # Example
//!
//! ```rust
//! use sprig_ast::{AstArena, NodeData, NodeKind, Role, Tree};
//!
//! let arena = AstArena::new();
//! let mut tree = Tree::new(&arena);
//!
//! let block = tree.add(NodeKind::Block, NodeData::new());
//! let brk = tree.add(NodeKind::Break, NodeData::new());
//! tree.attach(block, Role::Statements, brk).unwrap();
//!
//! assert_eq!(tree.parent(brk), Some(block));
//! assert_eq!(tree.index(brk), Some(0));
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TreeError;
use crate::node::{Node, SlotValue};
use crate::role::{Arity, Attachment, Role, SlotSpec};
use crate::{AstArena, Modifier, NodeData, NodeKind, Span};

/// Handle of a node in a [`Tree`].
///
/// Handles are only meaningful for the tree that issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(u32);

impl NodeId {
    /// Creates a handle from its raw index.
    #[inline]
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    /// Returns the raw index.
    #[inline]
    pub const fn index(&self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// An AST with typed child slots and parent back-links.
///
/// Node text is borrowed from the [`AstArena`] for `'a`.
///
/// # Panics
///
/// Accessors panic when given a [`NodeId`] this tree did not issue.
pub struct Tree<'a> {
    arena: &'a AstArena,
    nodes: Vec<Node<'a>>,
}

impl<'a> Tree<'a> {
    /// Creates an empty tree backed by `arena`.
    pub fn new(arena: &'a AstArena) -> Self {
        Self {
            arena,
            nodes: Vec::new(),
        }
    }

    /// Returns the arena node text is allocated in.
    #[inline]
    pub fn arena(&self) -> &'a AstArena {
        self.arena
    }

    /// Copies `text` into the arena.
    #[inline]
    pub fn intern(&self, text: &str) -> &'a str {
        self.arena.alloc_str(text)
    }

    /// Copies a modifier list into the arena.
    #[inline]
    pub fn intern_modifiers(&self, modifiers: &[Modifier]) -> &'a [Modifier] {
        self.arena.alloc_slice_copy(modifiers)
    }

    /// Returns the number of nodes ever added.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if no node was added yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterates over every handle issued by this tree.
    pub fn ids(&self) -> impl Iterator<Item = NodeId> + use<> {
        // Every index below the node count fits in `u32`, see `add`.
        (0..self.nodes.len()).map(|index| NodeId(index as u32))
    }

    /// Creates a detached node with empty slots.
    ///
    /// # Panics
    ///
    /// Panics if the tree already holds `u32::MAX` nodes.
    pub fn add(&mut self, kind: NodeKind, data: NodeData<'a>) -> NodeId {
        let Ok(index) = u32::try_from(self.nodes.len()) else {
            panic!("tree is full, no handle left past {}", u32::MAX);
        };
        let id = NodeId(index);
        self.nodes.push(Node::new(kind, data));
        id
    }

    /// Creates a detached node carrying a source span.
    pub fn add_spanned(&mut self, kind: NodeKind, data: NodeData<'a>, span: Span) -> NodeId {
        let id = self.add(kind, data);
        self.nodes[id.index()].span = Some(span);
        id
    }

    /// Returns a borrowed view of a node.
    #[inline]
    pub fn node(&self, id: NodeId) -> NodeRef<'_, 'a> {
        debug_assert!(id.index() < self.nodes.len(), "unknown node {id}");
        NodeRef { tree: self, id }
    }

    #[inline]
    fn record(&self, id: NodeId) -> &Node<'a> {
        &self.nodes[id.index()]
    }

    /// Returns the kind of a node.
    #[inline]
    pub fn kind(&self, id: NodeId) -> NodeKind {
        self.record(id).kind
    }

    /// Returns the scalar data of a node.
    #[inline]
    pub fn data(&self, id: NodeId) -> NodeData<'a> {
        self.record(id).data
    }

    /// Returns the source span of a node, if it has one.
    #[inline]
    pub fn span(&self, id: NodeId) -> Option<Span> {
        self.record(id).span
    }

    /// Returns where a node is attached, if it is.
    #[inline]
    pub fn attachment(&self, id: NodeId) -> Option<Attachment> {
        self.record(id).attachment
    }

    /// Returns the parent of a node.
    #[inline]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.attachment(id).map(|a| a.parent)
    }

    /// Returns the role a node occupies in its parent.
    #[inline]
    pub fn role(&self, id: NodeId) -> Option<Role> {
        self.attachment(id).map(|a| a.role)
    }

    /// Returns the position of a node within its parent's sequence slot.
    #[inline]
    pub fn index(&self, id: NodeId) -> Option<usize> {
        self.attachment(id).and_then(|a| a.index)
    }

    /// Returns the occupant of a single or optional slot.
    ///
    /// Returns `None` for empty slots, sequence slots and undeclared roles.
    pub fn child(&self, id: NodeId, role: Role) -> Option<NodeId> {
        let (position, _) = self.kind(id).slot(role)?;
        match &self.record(id).slots[position] {
            SlotValue::Single(child) => *child,
            SlotValue::Sequence(_) => None,
        }
    }

    /// Returns the occupants of a slot in order.
    ///
    /// Empty for undeclared roles.
    pub fn children(&self, id: NodeId, role: Role) -> &[NodeId] {
        match self.kind(id).slot(role) {
            Some((position, _)) => self.record(id).slots[position].ids(),
            None => &[],
        }
    }

    /// Returns every child of a node, in slot order.
    pub fn child_nodes(&self, id: NodeId) -> Vec<NodeId> {
        self.record(id)
            .slots
            .iter()
            .flat_map(|slot| slot.ids().iter().copied())
            .collect()
    }

    /// Looks up the slot declared for `role` on `parent`'s kind.
    pub fn slot_spec(
        &self,
        parent: NodeId,
        role: Role,
    ) -> Result<(usize, &'static SlotSpec), TreeError> {
        let kind = self.kind(parent);
        kind.slot(role)
            .ok_or(TreeError::NoSuchSlot { parent: kind, role })
    }

    /// Checks that a node of `kind` may occupy `parent`'s `role` slot.
    pub fn check_fits(
        &self,
        parent: NodeId,
        role: Role,
        kind: NodeKind,
    ) -> Result<&'static SlotSpec, TreeError> {
        let (_, spec) = self.slot_spec(parent, role)?;
        if spec.requirement.accepts(kind) {
            Ok(spec)
        } else {
            Err(TreeError::StructuralMismatch {
                parent: self.kind(parent),
                role,
                requirement: spec.requirement,
                found: kind,
            })
        }
    }

    /// Returns true if `ancestor` is `node` or lies on its parent chain.
    pub fn is_ancestor(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.parent(id);
        }
        false
    }

    /// Returns the top of the parent chain of a node.
    pub fn root_of(&self, id: NodeId) -> NodeId {
        let mut current = id;
        while let Some(parent) = self.parent(current) {
            current = parent;
        }
        current
    }

    fn check_attachable(&self, parent: NodeId, child: NodeId) -> Result<(), TreeError> {
        if self.attachment(child).is_some() {
            return Err(TreeError::AlreadyAttached { node: child });
        }
        if self.is_ancestor(child, parent) {
            return Err(TreeError::Cycle { parent, child });
        }
        Ok(())
    }

    /// Attaches a detached node to `parent`.
    ///
    /// Fills an empty single or optional slot, or appends to a sequence slot.
    pub fn attach(&mut self, parent: NodeId, role: Role, child: NodeId) -> Result<(), TreeError> {
        self.check_attachable(parent, child)?;
        self.check_fits(parent, role, self.kind(child))?;
        let (position, _) = self.slot_spec(parent, role)?;

        let index = match &mut self.nodes[parent.index()].slots[position] {
            SlotValue::Single(slot) => {
                if let Some(occupant) = *slot {
                    return Err(TreeError::SlotOccupied {
                        parent,
                        role,
                        occupant,
                    });
                }
                *slot = Some(child);
                None
            }
            SlotValue::Sequence(children) => {
                children.push(child);
                Some(children.len() - 1)
            }
        };
        self.nodes[child.index()].attachment = Some(Attachment {
            parent,
            role,
            index,
        });
        Ok(())
    }

    /// Inserts a detached node at `index` of a sequence slot.
    ///
    /// Later siblings shift up by one.
    pub fn insert(
        &mut self,
        parent: NodeId,
        role: Role,
        index: usize,
        child: NodeId,
    ) -> Result<(), TreeError> {
        self.check_attachable(parent, child)?;
        let spec = self.check_fits(parent, role, self.kind(child))?;
        let parent_kind = self.kind(parent);
        let (position, _) = self.slot_spec(parent, role)?;

        let SlotValue::Sequence(children) = &mut self.nodes[parent.index()].slots[position] else {
            return Err(TreeError::Arity {
                parent: parent_kind,
                role,
                expected: Arity::Sequence,
                actual: spec.arity,
            });
        };
        if index > children.len() {
            return Err(TreeError::IndexOutOfBounds {
                role,
                index,
                len: children.len(),
            });
        }
        children.insert(index, child);
        self.nodes[child.index()].attachment = Some(Attachment {
            parent,
            role,
            index: Some(index),
        });
        self.renumber(parent, position, index + 1);
        Ok(())
    }

    /// Detaches a node from its parent and returns its former attachment.
    ///
    /// Later siblings in a sequence shift down by one. Detaching from a
    /// single slot leaves it empty. The subtree of `child` is untouched.
    pub fn detach(&mut self, child: NodeId) -> Option<Attachment> {
        let attachment = self.nodes[child.index()].attachment.take()?;
        let parent = attachment.parent;
        let (position, _) = self.kind(parent).slot(attachment.role)?;

        match &mut self.nodes[parent.index()].slots[position] {
            SlotValue::Single(slot) => *slot = None,
            SlotValue::Sequence(children) => {
                if let Some(index) = attachment.index {
                    children.remove(index);
                    self.renumber(parent, position, index);
                }
            }
        }
        Some(attachment)
    }

    /// Rewrites the recorded positions of sequence children from `from` on.
    fn renumber(&mut self, parent: NodeId, position: usize, from: usize) {
        let shifted: Vec<NodeId> = self.nodes[parent.index()].slots[position].ids()[from..].to_vec();
        for (offset, id) in shifted.into_iter().enumerate() {
            if let Some(attachment) = self.nodes[id.index()].attachment.as_mut() {
                attachment.index = Some(from + offset);
            }
        }
    }
}

impl fmt::Debug for Tree<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("nodes", &self.nodes.len())
            .finish()
    }
}

/// Borrowed view of one node of a [`Tree`].
#[derive(Clone, Copy)]
pub struct NodeRef<'t, 'a> {
    tree: &'t Tree<'a>,
    id: NodeId,
}

impl<'t, 'a> NodeRef<'t, 'a> {
    /// Returns the handle of the node.
    #[inline]
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Returns the tree the node lives in.
    #[inline]
    pub fn tree(&self) -> &'t Tree<'a> {
        self.tree
    }

    #[inline]
    pub fn kind(&self) -> NodeKind {
        self.tree.kind(self.id)
    }

    #[inline]
    pub fn data(&self) -> NodeData<'a> {
        self.tree.data(self.id)
    }

    /// Returns the simple name, if the node has one.
    #[inline]
    pub fn name(&self) -> Option<&'a str> {
        self.data().name
    }

    #[inline]
    pub fn span(&self) -> Option<Span> {
        self.tree.span(self.id)
    }

    pub fn parent(&self) -> Option<NodeRef<'t, 'a>> {
        self.tree.parent(self.id).map(|id| self.tree.node(id))
    }

    #[inline]
    pub fn role(&self) -> Option<Role> {
        self.tree.role(self.id)
    }

    #[inline]
    pub fn index(&self) -> Option<usize> {
        self.tree.index(self.id)
    }

    #[inline]
    pub fn attachment(&self) -> Option<Attachment> {
        self.tree.attachment(self.id)
    }

    /// Returns the occupant of a single or optional slot.
    pub fn child(&self, role: Role) -> Option<NodeRef<'t, 'a>> {
        self.tree.child(self.id, role).map(|id| self.tree.node(id))
    }

    /// Iterates over the occupants of a slot in order.
    pub fn children(&self, role: Role) -> impl Iterator<Item = NodeRef<'t, 'a>> + use<'t, 'a> {
        let tree = self.tree;
        tree.children(self.id, role).iter().map(move |&id| tree.node(id))
    }

    /// Returns every child, in slot order.
    pub fn child_nodes(&self) -> Vec<NodeRef<'t, 'a>> {
        self.tree
            .child_nodes(self.id)
            .into_iter()
            .map(|id| self.tree.node(id))
            .collect()
    }

    /// Finds a member (or enum value) of a type declaration by simple name.
    pub fn member_named(&self, name: &str) -> Option<NodeRef<'t, 'a>> {
        self.children(Role::EnumValues)
            .chain(self.children(Role::Members))
            .find(|member| member.name() == Some(name))
    }
}

impl fmt::Debug for NodeRef<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut debug = f.debug_struct("NodeRef");
        debug.field("id", &self.id).field("kind", &self.kind());
        if let Some(name) = self.name() {
            debug.field("name", &name);
        }
        debug.finish()
    }
}
