//! Node records and node-specific data.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::role::{Arity, Attachment};
use crate::{NodeId, NodeKind, Span};

/// Declaration modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modifier {
    Public,
    Protected,
    Private,
    Abstract,
    Static,
    Final,
    Transient,
    Volatile,
    Synchronized,
    Native,
    Strictfp,
    Default,
}

impl Modifier {
    /// Returns the source keyword.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Modifier::Public => "public",
            Modifier::Protected => "protected",
            Modifier::Private => "private",
            Modifier::Abstract => "abstract",
            Modifier::Static => "static",
            Modifier::Final => "final",
            Modifier::Transient => "transient",
            Modifier::Volatile => "volatile",
            Modifier::Synchronized => "synchronized",
            Modifier::Native => "native",
            Modifier::Strictfp => "strictfp",
            Modifier::Default => "default",
        }
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Value of a literal expression.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LiteralValue<'a> {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Char(char),
    Str(&'a str),
}

impl fmt::Display for LiteralValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LiteralValue::Null => f.write_str("null"),
            LiteralValue::Bool(value) => write!(f, "{value}"),
            LiteralValue::Int(value) => write!(f, "{value}"),
            // Debug keeps the fractional part of whole floats (`3.0`)
            LiteralValue::Float(value) => write!(f, "{value:?}"),
            LiteralValue::Char(value) => write!(f, "'{value}'"),
            LiteralValue::Str(value) => write!(f, "\"{value}\""),
        }
    }
}

/// Operator of a binary expression or operator assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BinaryOperatorKind {
    Or,
    And,
    BitOr,
    BitXor,
    BitAnd,
    Eq,
    Ne,
    Lt,
    Gt,
    Le,
    Ge,
    Shl,
    Shr,
    Ushr,
    Plus,
    Minus,
    Mul,
    Div,
    Mod,
    InstanceOf,
}

impl BinaryOperatorKind {
    /// Returns the source symbol.
    pub const fn symbol(&self) -> &'static str {
        match self {
            BinaryOperatorKind::Or => "||",
            BinaryOperatorKind::And => "&&",
            BinaryOperatorKind::BitOr => "|",
            BinaryOperatorKind::BitXor => "^",
            BinaryOperatorKind::BitAnd => "&",
            BinaryOperatorKind::Eq => "==",
            BinaryOperatorKind::Ne => "!=",
            BinaryOperatorKind::Lt => "<",
            BinaryOperatorKind::Gt => ">",
            BinaryOperatorKind::Le => "<=",
            BinaryOperatorKind::Ge => ">=",
            BinaryOperatorKind::Shl => "<<",
            BinaryOperatorKind::Shr => ">>",
            BinaryOperatorKind::Ushr => ">>>",
            BinaryOperatorKind::Plus => "+",
            BinaryOperatorKind::Minus => "-",
            BinaryOperatorKind::Mul => "*",
            BinaryOperatorKind::Div => "/",
            BinaryOperatorKind::Mod => "%",
            BinaryOperatorKind::InstanceOf => "instanceof",
        }
    }
}

impl fmt::Display for BinaryOperatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Operator of a unary expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnaryOperatorKind {
    Pos,
    Neg,
    Not,
    Compl,
    PreInc,
    PreDec,
    PostInc,
    PostDec,
}

impl UnaryOperatorKind {
    /// Returns the source symbol.
    pub const fn symbol(&self) -> &'static str {
        match self {
            UnaryOperatorKind::Pos => "+",
            UnaryOperatorKind::Neg => "-",
            UnaryOperatorKind::Not => "!",
            UnaryOperatorKind::Compl => "~",
            UnaryOperatorKind::PreInc | UnaryOperatorKind::PostInc => "++",
            UnaryOperatorKind::PreDec | UnaryOperatorKind::PostDec => "--",
        }
    }

    /// Returns true if the operator is written after its operand.
    #[inline]
    pub const fn is_postfix(&self) -> bool {
        matches!(self, UnaryOperatorKind::PostInc | UnaryOperatorKind::PostDec)
    }
}

impl fmt::Display for UnaryOperatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Node-specific scalar data.
///
/// Every field is optional; which ones are meaningful depends on the kind:
/// `name` for named elements and references, `literal` for literals,
/// operators for operator expressions, `label` for labelled statements and
/// `break`/`continue` targets, `snippet` for code snippets.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NodeData<'a> {
    /// Simple name.
    pub name: Option<&'a str>,
    /// Literal value.
    pub literal: Option<LiteralValue<'a>>,
    /// Binary operator.
    pub binary_op: Option<BinaryOperatorKind>,
    /// Unary operator.
    pub unary_op: Option<UnaryOperatorKind>,
    /// Statement label or jump target label.
    pub label: Option<&'a str>,
    /// Unparsed source text of a snippet.
    pub snippet: Option<&'a str>,
    /// Declaration modifiers.
    pub modifiers: &'a [Modifier],
}

impl<'a> NodeData<'a> {
    /// Creates empty node data.
    #[inline]
    pub const fn new() -> Self {
        Self {
            name: None,
            literal: None,
            binary_op: None,
            unary_op: None,
            label: None,
            snippet: None,
            modifiers: &[],
        }
    }

    /// Creates node data carrying a simple name.
    #[inline]
    pub const fn named(name: &'a str) -> Self {
        Self {
            name: Some(name),
            ..Self::new()
        }
    }

    /// Creates node data for a literal.
    #[inline]
    pub const fn literal(value: LiteralValue<'a>) -> Self {
        Self {
            literal: Some(value),
            ..Self::new()
        }
    }

    /// Creates node data for a binary operator.
    #[inline]
    pub const fn binary(op: BinaryOperatorKind) -> Self {
        Self {
            binary_op: Some(op),
            ..Self::new()
        }
    }

    /// Creates node data for a unary operator.
    #[inline]
    pub const fn unary(op: UnaryOperatorKind) -> Self {
        Self {
            unary_op: Some(op),
            ..Self::new()
        }
    }

    /// Creates node data for a code snippet.
    #[inline]
    pub const fn snippet(text: &'a str) -> Self {
        Self {
            snippet: Some(text),
            ..Self::new()
        }
    }

    /// Returns the data with a label set.
    #[inline]
    pub const fn with_label(self, label: &'a str) -> Self {
        Self {
            label: Some(label),
            ..self
        }
    }

    /// Returns the data with modifiers set.
    #[inline]
    pub const fn with_modifiers(self, modifiers: &'a [Modifier]) -> Self {
        Self { modifiers, ..self }
    }

    /// Returns true if `modifier` is present.
    pub fn has_modifier(&self, modifier: Modifier) -> bool {
        self.modifiers.contains(&modifier)
    }
}

/// Contents of one child slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SlotValue {
    Single(Option<NodeId>),
    Sequence(Vec<NodeId>),
}

impl SlotValue {
    pub(crate) fn empty(arity: Arity) -> Self {
        match arity {
            Arity::Single | Arity::Optional => SlotValue::Single(None),
            Arity::Sequence => SlotValue::Sequence(Vec::new()),
        }
    }

    /// The occupants, in order.
    pub(crate) fn ids(&self) -> &[NodeId] {
        match self {
            SlotValue::Single(child) => child.as_slice(),
            SlotValue::Sequence(children) => children,
        }
    }
}

/// A node record stored in a [`Tree`](crate::Tree).
#[derive(Debug, Clone)]
pub(crate) struct Node<'a> {
    pub(crate) kind: NodeKind,
    pub(crate) data: NodeData<'a>,
    pub(crate) span: Option<Span>,
    pub(crate) attachment: Option<Attachment>,
    /// One entry per `kind.slots()`, same order.
    pub(crate) slots: Vec<SlotValue>,
}

impl<'a> Node<'a> {
    pub(crate) fn new(kind: NodeKind, data: NodeData<'a>) -> Self {
        Self {
            kind,
            data,
            span: None,
            attachment: None,
            slots: kind
                .slots()
                .iter()
                .map(|spec| SlotValue::empty(spec.arity))
                .collect(),
        }
    }
}
