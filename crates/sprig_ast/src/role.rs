//! Roles and slot declarations.
//!
//! Every node kind declares an ordered list of child slots (see
//! [`NodeKind::slots`](crate::NodeKind::slots)). A slot is identified by its
//! [`Role`], holds one node, at most one node, or an ordered sequence, and
//! constrains which kinds may occupy it.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Capability, NodeId, NodeKind};

/// The logical slot a child occupies in its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    // Declarations
    Annotations,
    TypeParameters,
    SuperClass,
    Interfaces,
    Members,
    EnumValues,
    Types,
    Packages,
    Bounds,
    Type,
    DefaultExpression,
    Parameters,
    ThrownTypes,
    Body,
    AnnotationType,
    Values,

    // Statements
    Statements,
    CaseExpression,
    Condition,
    Message,
    ReturnedExpression,
    ThrownExpression,
    Parameter,
    LoopingExpression,
    ForInit,
    ForUpdate,
    ForeachVariable,
    Expression,
    Then,
    Else,
    Selector,
    Cases,
    Catchers,
    Finalizer,
    Resources,

    // Expressions
    Assigned,
    AssignedValue,
    LeftOperand,
    RightOperand,
    Operand,
    ThenExpression,
    ElseExpression,
    Target,
    Executable,
    Arguments,
    AnonymousClass,
    Dimensions,
    Elements,
    Variable,
    IndexExpression,
    AccessedType,

    // References
    Package,
    DeclaringType,
    TypeArguments,
    ComponentType,
    ParameterTypes,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// How many children a slot holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Arity {
    /// Exactly one child once the tree is complete.
    Single,
    /// Zero or one child.
    Optional,
    /// Ordered sequence of children.
    Sequence,
}

impl Arity {
    /// Returns true for sequence slots.
    #[inline]
    pub const fn is_sequence(&self) -> bool {
        matches!(self, Arity::Sequence)
    }
}

/// Constraint on the kinds a slot accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    /// The child kind must possess the capability.
    Capability(Capability),
    /// The child kind must be one of the listed kinds.
    Kinds(&'static [NodeKind]),
}

impl Requirement {
    /// Returns true if a node of `kind` may occupy the slot.
    pub fn accepts(&self, kind: NodeKind) -> bool {
        match self {
            Requirement::Capability(capability) => kind.has_capability(*capability),
            Requirement::Kinds(kinds) => kinds.contains(&kind),
        }
    }
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Requirement::Capability(capability) => write!(f, "{} capability", capability),
            Requirement::Kinds(kinds) => {
                let names: Vec<String> = kinds.iter().map(|k| k.to_string()).collect();
                write!(f, "one of [{}]", names.join(", "))
            }
        }
    }
}

/// Declaration of one child slot of a node kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotSpec {
    /// Role children in this slot are attached with.
    pub role: Role,
    /// Number of children the slot holds.
    pub arity: Arity,
    /// Kinds the slot accepts.
    pub requirement: Requirement,
}

impl SlotSpec {
    pub(crate) const fn single(role: Role, requirement: Requirement) -> Self {
        Self {
            role,
            arity: Arity::Single,
            requirement,
        }
    }

    pub(crate) const fn optional(role: Role, requirement: Requirement) -> Self {
        Self {
            role,
            arity: Arity::Optional,
            requirement,
        }
    }

    pub(crate) const fn sequence(role: Role, requirement: Requirement) -> Self {
        Self {
            role,
            arity: Arity::Sequence,
            requirement,
        }
    }
}

/// Where an attached node sits: its parent, role and sequence position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Attachment {
    /// The parent node.
    pub parent: NodeId,
    /// The parent slot the node occupies.
    pub role: Role,
    /// Position within the slot, for sequence slots.
    pub index: Option<usize>,
}

impl fmt::Display for Attachment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.index {
            Some(index) => write!(f, "{}.{}[{}]", self.parent, self.role, index),
            None => write!(f, "{}.{}", self.parent, self.role),
        }
    }
}
