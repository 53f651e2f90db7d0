//! Capabilities: cross-cutting classifications of node kinds.
//!
//! A node kind possesses any number of capabilities independently of the
//! others. Every capability has exactly one scanner hook, see
//! [`Scanner`](crate::visitor::Scanner).

use std::fmt;

use serde::{Deserialize, Serialize};

/// A named classification a node kind may possess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    // Elements
    /// Any tree element that is not a reference.
    Element,
    /// Element that appears inside executable code.
    CodeElement,
    /// Element usable in statement position.
    Statement,
    /// Element usable in expression position.
    Expression,
    /// Element with a declared or inferred type.
    TypedElement,
    /// Element with a simple name.
    NamedElement,
    /// Element carrying visibility and modifier flags.
    Modifiable,
    /// Declaration of a typed, named slot (field, local, parameter).
    Variable,
    /// Element that belongs to a declaring type.
    TypeMember,
    /// Element declaring type parameters.
    GenericElement,
    /// Element with a set of types, e.g. a multi-catch variable.
    MultiTypedElement,
    /// Expression with a receiver or target sub-expression.
    TargetedExpression,
    /// Access of a member through a target.
    TargetedAccess,
    /// `break`, `continue`, `return` and `throw`.
    #[serde(rename = "cflow_break")]
    CFlowBreak,
    /// Looping statement.
    Loop,
    /// Element with parameters and a body.
    Executable,
    /// Call of an executable.
    AbstractInvocation,
    /// Type declaration.
    Type,
    /// Element describing a type (declaration or reference).
    TypeInformation,
    /// Unparsed source text.
    CodeSnippet,

    // References
    /// Any symbolic cross-tree reference.
    Reference,
    /// Reference to a variable declaration.
    VariableReference,
    /// Reference carrying actual type arguments.
    GenericElementReference,
    /// Reference that can carry type annotations.
    TypeAnnotableReference,
}

impl Capability {
    /// Every capability, in declaration order.
    pub const ALL: [Capability; 24] = [
        Capability::Element,
        Capability::CodeElement,
        Capability::Statement,
        Capability::Expression,
        Capability::TypedElement,
        Capability::NamedElement,
        Capability::Modifiable,
        Capability::Variable,
        Capability::TypeMember,
        Capability::GenericElement,
        Capability::MultiTypedElement,
        Capability::TargetedExpression,
        Capability::TargetedAccess,
        Capability::CFlowBreak,
        Capability::Loop,
        Capability::Executable,
        Capability::AbstractInvocation,
        Capability::Type,
        Capability::TypeInformation,
        Capability::CodeSnippet,
        Capability::Reference,
        Capability::VariableReference,
        Capability::GenericElementReference,
        Capability::TypeAnnotableReference,
    ];

    /// Returns the snake_case name used for hooks and serialization.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Capability::Element => "element",
            Capability::CodeElement => "code_element",
            Capability::Statement => "statement",
            Capability::Expression => "expression",
            Capability::TypedElement => "typed_element",
            Capability::NamedElement => "named_element",
            Capability::Modifiable => "modifiable",
            Capability::Variable => "variable",
            Capability::TypeMember => "type_member",
            Capability::GenericElement => "generic_element",
            Capability::MultiTypedElement => "multi_typed_element",
            Capability::TargetedExpression => "targeted_expression",
            Capability::TargetedAccess => "targeted_access",
            Capability::CFlowBreak => "cflow_break",
            Capability::Loop => "loop",
            Capability::Executable => "executable",
            Capability::AbstractInvocation => "abstract_invocation",
            Capability::Type => "type",
            Capability::TypeInformation => "type_information",
            Capability::CodeSnippet => "code_snippet",
            Capability::Reference => "reference",
            Capability::VariableReference => "variable_reference",
            Capability::GenericElementReference => "generic_element_reference",
            Capability::TypeAnnotableReference => "type_annotable_reference",
        }
    }

    /// Returns true for capabilities only reference kinds can have.
    #[inline]
    pub const fn is_reference_capability(&self) -> bool {
        matches!(
            self,
            Capability::Reference
                | Capability::VariableReference
                | Capability::GenericElementReference
                | Capability::TypeAnnotableReference
        )
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
