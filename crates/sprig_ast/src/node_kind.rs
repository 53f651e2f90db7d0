//! Node kinds and their static tables.
//!
//! Each [`NodeKind`] carries two tables:
//!
//! - a [`HookTable`]: the ordered capability hooks its dispatch invokes, and
//! - a slot list: the typed child slots it owns (see [`SlotSpec`]).
//!
//! Kinds that specialize a more general kind delegate to that kind's hook
//! table instead of repeating it, so the specialization can never drift away
//! from the general contract.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::role::{Requirement, Role, SlotSpec};
use crate::Capability;

/// Concrete node kinds of the metamodel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum NodeKind {
    // Declarations
    Package,
    Class,
    Interface,
    Enum,
    AnnotationType,
    TypeParameter,
    Field,
    Method,
    Constructor,
    AnonymousExecutable,
    Parameter,
    LocalVariable,
    CatchVariable,
    Annotation,

    // Statements
    Block,
    StatementList,
    Case,
    Assert,
    Break,
    Continue,
    Return,
    Throw,
    Catch,
    Do,
    For,
    ForEach,
    While,
    If,
    Switch,
    Synchronized,
    Try,
    TryWithResource,
    CodeSnippetStatement,

    // Expressions
    Assignment,
    OperatorAssignment,
    BinaryOperator,
    UnaryOperator,
    Conditional,
    Invocation,
    ConstructorCall,
    NewClass,
    NewArray,
    Lambda,
    ExecutableReferenceExpression,
    Literal,
    ThisAccess,
    SuperAccess,
    FieldAccess,
    VariableAccess,
    AnnotationFieldAccess,
    ArrayAccess,
    TypeAccess,
    CodeSnippetExpression,

    // References
    TypeReference,
    ArrayTypeReference,
    TypeParameterReference,
    ExecutableReference,
    FieldReference,
    LocalVariableReference,
    CatchVariableReference,
    ParameterReference,
    PackageReference,
    UnboundVariableReference,
}

/// Ordered capability hooks of a node kind.
///
/// Iteration order is `before`, then the whole table of `delegate` (if any),
/// then `after`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HookTable {
    /// Hooks invoked before the delegate's table.
    pub before: &'static [Capability],
    /// More general kind whose table is invoked wholesale.
    pub delegate: Option<NodeKind>,
    /// Hooks invoked after the delegate's table.
    pub after: &'static [Capability],
}

impl HookTable {
    const fn own(hooks: &'static [Capability]) -> Self {
        Self {
            before: hooks,
            delegate: None,
            after: &[],
        }
    }

    const fn delegating(kind: NodeKind) -> Self {
        Self {
            before: &[],
            delegate: Some(kind),
            after: &[],
        }
    }

    const fn wrapping(
        before: &'static [Capability],
        kind: NodeKind,
        after: &'static [Capability],
    ) -> Self {
        Self {
            before,
            delegate: Some(kind),
            after,
        }
    }

    /// Calls `f` once per hook, in dispatch order.
    pub fn for_each<F: FnMut(Capability)>(&self, f: &mut F) {
        for capability in self.before {
            f(*capability);
        }
        if let Some(delegate) = self.delegate {
            delegate.hook_table().for_each(f);
        }
        for capability in self.after {
            f(*capability);
        }
    }

    /// Returns true if any hook of the table is `capability`.
    pub fn contains(&self, capability: Capability) -> bool {
        self.before.contains(&capability)
            || self
                .delegate
                .is_some_and(|delegate| delegate.hook_table().contains(capability))
            || self.after.contains(&capability)
    }
}

use Capability::*;

const EXPRESSION_HOOKS: &[Capability] = &[Expression, CodeElement, TypedElement, Element];
const TARGETED_EXPRESSION_HOOKS: &[Capability] =
    &[TargetedExpression, Expression, CodeElement, TypedElement, Element];
const STATEMENT_HOOKS: &[Capability] = &[Statement, CodeElement, Element];
const CFLOW_BREAK_HOOKS: &[Capability] = &[CFlowBreak, Statement, CodeElement, Element];
const LOOP_HOOKS: &[Capability] = &[Loop, Statement, CodeElement, Element];
const VARIABLE_REFERENCE_HOOKS: &[Capability] = &[VariableReference, Reference];

// Slot requirements shared between kinds.
const TYPE_REFERENCES: &[NodeKind] = &[
    NodeKind::TypeReference,
    NodeKind::ArrayTypeReference,
    NodeKind::TypeParameterReference,
];
const TYPE_REF: Requirement = Requirement::Kinds(TYPE_REFERENCES);
const EXPR: Requirement = Requirement::Capability(Expression);
const STMT: Requirement = Requirement::Capability(Statement);
const MEMBER: Requirement = Requirement::Capability(TypeMember);
const TYPE: Requirement = Requirement::Capability(Type);
const VAR_REF: Requirement = Requirement::Capability(VariableReference);
const BLOCK: Requirement = Requirement::Kinds(&[NodeKind::Block]);
const ANNOTATION: Requirement = Requirement::Kinds(&[NodeKind::Annotation]);
const TYPE_PARAM: Requirement = Requirement::Kinds(&[NodeKind::TypeParameter]);
const PARAM: Requirement = Requirement::Kinds(&[NodeKind::Parameter]);
const FIELD: Requirement = Requirement::Kinds(&[NodeKind::Field]);
const CLASS: Requirement = Requirement::Kinds(&[NodeKind::Class]);
const PACKAGE: Requirement = Requirement::Kinds(&[NodeKind::Package]);
const CASE: Requirement = Requirement::Kinds(&[NodeKind::Case]);
const CATCH: Requirement = Requirement::Kinds(&[NodeKind::Catch]);
const CATCH_VAR: Requirement = Requirement::Kinds(&[NodeKind::CatchVariable]);
const LOCAL_VAR: Requirement = Requirement::Kinds(&[NodeKind::LocalVariable]);
const FIELD_REF: Requirement = Requirement::Kinds(&[NodeKind::FieldReference]);
const EXEC_REF: Requirement = Requirement::Kinds(&[NodeKind::ExecutableReference]);
const PACKAGE_REF: Requirement = Requirement::Kinds(&[NodeKind::PackageReference]);

const PACKAGE_SLOTS: &[SlotSpec] = &[
    SlotSpec::sequence(Role::Packages, PACKAGE),
    SlotSpec::sequence(Role::Types, TYPE),
];
const CLASS_SLOTS: &[SlotSpec] = &[
    SlotSpec::sequence(Role::Annotations, ANNOTATION),
    SlotSpec::sequence(Role::TypeParameters, TYPE_PARAM),
    SlotSpec::optional(Role::SuperClass, TYPE_REF),
    SlotSpec::sequence(Role::Interfaces, TYPE_REF),
    SlotSpec::sequence(Role::Members, MEMBER),
];
const ENUM_SLOTS: &[SlotSpec] = &[
    SlotSpec::sequence(Role::Annotations, ANNOTATION),
    SlotSpec::sequence(Role::Interfaces, TYPE_REF),
    SlotSpec::sequence(Role::EnumValues, FIELD),
    SlotSpec::sequence(Role::Members, MEMBER),
];
const INTERFACE_SLOTS: &[SlotSpec] = &[
    SlotSpec::sequence(Role::Annotations, ANNOTATION),
    SlotSpec::sequence(Role::TypeParameters, TYPE_PARAM),
    SlotSpec::sequence(Role::Interfaces, TYPE_REF),
    SlotSpec::sequence(Role::Members, MEMBER),
];
const ANNOTATION_TYPE_SLOTS: &[SlotSpec] = &[
    SlotSpec::sequence(Role::Annotations, ANNOTATION),
    SlotSpec::sequence(Role::Members, MEMBER),
];
const BOUNDS_SLOTS: &[SlotSpec] = &[SlotSpec::sequence(Role::Bounds, TYPE_REF)];
const VARIABLE_SLOTS: &[SlotSpec] = &[
    SlotSpec::sequence(Role::Annotations, ANNOTATION),
    SlotSpec::single(Role::Type, TYPE_REF),
    SlotSpec::optional(Role::DefaultExpression, EXPR),
];
const METHOD_SLOTS: &[SlotSpec] = &[
    SlotSpec::sequence(Role::Annotations, ANNOTATION),
    SlotSpec::sequence(Role::TypeParameters, TYPE_PARAM),
    SlotSpec::single(Role::Type, TYPE_REF),
    SlotSpec::sequence(Role::Parameters, PARAM),
    SlotSpec::sequence(Role::ThrownTypes, TYPE_REF),
    SlotSpec::optional(Role::Body, BLOCK),
];
const CONSTRUCTOR_SLOTS: &[SlotSpec] = &[
    SlotSpec::sequence(Role::Annotations, ANNOTATION),
    SlotSpec::sequence(Role::TypeParameters, TYPE_PARAM),
    SlotSpec::sequence(Role::Parameters, PARAM),
    SlotSpec::sequence(Role::ThrownTypes, TYPE_REF),
    SlotSpec::optional(Role::Body, BLOCK),
];
const ANONYMOUS_EXECUTABLE_SLOTS: &[SlotSpec] = &[SlotSpec::single(Role::Body, BLOCK)];
const PARAMETER_SLOTS: &[SlotSpec] = &[
    SlotSpec::sequence(Role::Annotations, ANNOTATION),
    SlotSpec::single(Role::Type, TYPE_REF),
];
const CATCH_VARIABLE_SLOTS: &[SlotSpec] = &[
    SlotSpec::sequence(Role::Annotations, ANNOTATION),
    SlotSpec::sequence(Role::Types, TYPE_REF),
];
const ANNOTATION_SLOTS: &[SlotSpec] = &[
    SlotSpec::single(Role::AnnotationType, TYPE_REF),
    SlotSpec::sequence(Role::Values, EXPR),
];
const STATEMENT_LIST_SLOTS: &[SlotSpec] = &[SlotSpec::sequence(Role::Statements, STMT)];
const CASE_SLOTS: &[SlotSpec] = &[
    SlotSpec::optional(Role::CaseExpression, EXPR),
    SlotSpec::sequence(Role::Statements, STMT),
];
const ASSERT_SLOTS: &[SlotSpec] = &[
    SlotSpec::single(Role::Condition, EXPR),
    SlotSpec::optional(Role::Message, EXPR),
];
const RETURN_SLOTS: &[SlotSpec] = &[SlotSpec::optional(Role::ReturnedExpression, EXPR)];
const THROW_SLOTS: &[SlotSpec] = &[SlotSpec::single(Role::ThrownExpression, EXPR)];
const CATCH_SLOTS: &[SlotSpec] = &[
    SlotSpec::single(Role::Parameter, CATCH_VAR),
    SlotSpec::single(Role::Body, BLOCK),
];
const WHILE_SLOTS: &[SlotSpec] = &[
    SlotSpec::single(Role::LoopingExpression, EXPR),
    SlotSpec::single(Role::Body, STMT),
];
const FOR_SLOTS: &[SlotSpec] = &[
    SlotSpec::sequence(Role::ForInit, STMT),
    SlotSpec::optional(Role::Condition, EXPR),
    SlotSpec::sequence(Role::ForUpdate, STMT),
    SlotSpec::single(Role::Body, STMT),
];
const FOR_EACH_SLOTS: &[SlotSpec] = &[
    SlotSpec::single(Role::ForeachVariable, LOCAL_VAR),
    SlotSpec::single(Role::Expression, EXPR),
    SlotSpec::single(Role::Body, STMT),
];
const IF_SLOTS: &[SlotSpec] = &[
    SlotSpec::single(Role::Condition, EXPR),
    SlotSpec::single(Role::Then, STMT),
    SlotSpec::optional(Role::Else, STMT),
];
const SWITCH_SLOTS: &[SlotSpec] = &[
    SlotSpec::single(Role::Selector, EXPR),
    SlotSpec::sequence(Role::Cases, CASE),
];
const SYNCHRONIZED_SLOTS: &[SlotSpec] = &[
    SlotSpec::single(Role::Expression, EXPR),
    SlotSpec::single(Role::Body, BLOCK),
];
const TRY_SLOTS: &[SlotSpec] = &[
    SlotSpec::single(Role::Body, BLOCK),
    SlotSpec::sequence(Role::Catchers, CATCH),
    SlotSpec::optional(Role::Finalizer, BLOCK),
];
const TRY_WITH_RESOURCE_SLOTS: &[SlotSpec] = &[
    SlotSpec::sequence(Role::Resources, LOCAL_VAR),
    SlotSpec::single(Role::Body, BLOCK),
    SlotSpec::sequence(Role::Catchers, CATCH),
    SlotSpec::optional(Role::Finalizer, BLOCK),
];
const ASSIGNMENT_SLOTS: &[SlotSpec] = &[
    SlotSpec::single(Role::Assigned, EXPR),
    SlotSpec::single(Role::AssignedValue, EXPR),
];
const BINARY_OPERATOR_SLOTS: &[SlotSpec] = &[
    SlotSpec::single(Role::LeftOperand, EXPR),
    SlotSpec::single(Role::RightOperand, EXPR),
];
const UNARY_OPERATOR_SLOTS: &[SlotSpec] = &[SlotSpec::single(Role::Operand, EXPR)];
const CONDITIONAL_SLOTS: &[SlotSpec] = &[
    SlotSpec::single(Role::Condition, EXPR),
    SlotSpec::single(Role::ThenExpression, EXPR),
    SlotSpec::single(Role::ElseExpression, EXPR),
];
const INVOCATION_SLOTS: &[SlotSpec] = &[
    SlotSpec::optional(Role::Target, EXPR),
    SlotSpec::single(Role::Executable, EXEC_REF),
    SlotSpec::sequence(Role::Arguments, EXPR),
];
const NEW_CLASS_SLOTS: &[SlotSpec] = &[
    SlotSpec::optional(Role::Target, EXPR),
    SlotSpec::single(Role::Executable, EXEC_REF),
    SlotSpec::sequence(Role::Arguments, EXPR),
    SlotSpec::optional(Role::AnonymousClass, CLASS),
];
const NEW_ARRAY_SLOTS: &[SlotSpec] = &[
    SlotSpec::optional(Role::Type, TYPE_REF),
    SlotSpec::sequence(Role::Dimensions, EXPR),
    SlotSpec::sequence(Role::Elements, EXPR),
];
const LAMBDA_SLOTS: &[SlotSpec] = &[
    SlotSpec::sequence(Role::Parameters, PARAM),
    SlotSpec::optional(Role::Body, BLOCK),
    SlotSpec::optional(Role::Expression, EXPR),
];
const EXECUTABLE_REFERENCE_EXPRESSION_SLOTS: &[SlotSpec] = &[
    SlotSpec::optional(Role::Target, EXPR),
    SlotSpec::single(Role::Executable, EXEC_REF),
];
const VARIABLE_ACCESS_SLOTS: &[SlotSpec] = &[SlotSpec::single(Role::Variable, VAR_REF)];
const FIELD_ACCESS_SLOTS: &[SlotSpec] = &[
    SlotSpec::optional(Role::Target, EXPR),
    SlotSpec::single(Role::Variable, FIELD_REF),
];
const ARRAY_ACCESS_SLOTS: &[SlotSpec] = &[
    SlotSpec::single(Role::Target, EXPR),
    SlotSpec::single(Role::IndexExpression, EXPR),
];
const TYPE_ACCESS_SLOTS: &[SlotSpec] = &[SlotSpec::single(Role::AccessedType, TYPE_REF)];
const TYPE_REFERENCE_SLOTS: &[SlotSpec] = &[
    SlotSpec::optional(Role::Package, PACKAGE_REF),
    SlotSpec::optional(Role::DeclaringType, TYPE_REF),
    SlotSpec::sequence(Role::TypeArguments, TYPE_REF),
];
const ARRAY_TYPE_REFERENCE_SLOTS: &[SlotSpec] = &[SlotSpec::single(Role::ComponentType, TYPE_REF)];
const EXECUTABLE_REFERENCE_SLOTS: &[SlotSpec] = &[
    SlotSpec::optional(Role::DeclaringType, TYPE_REF),
    SlotSpec::optional(Role::Type, TYPE_REF),
    SlotSpec::sequence(Role::ParameterTypes, TYPE_REF),
    SlotSpec::sequence(Role::TypeArguments, TYPE_REF),
];
const FIELD_REFERENCE_SLOTS: &[SlotSpec] = &[
    SlotSpec::optional(Role::DeclaringType, TYPE_REF),
    SlotSpec::optional(Role::Type, TYPE_REF),
];
const VARIABLE_REFERENCE_SLOTS: &[SlotSpec] = &[SlotSpec::optional(Role::Type, TYPE_REF)];

impl NodeKind {
    /// Every node kind, elements first, then references.
    pub const ALL: [NodeKind; 63] = [
        NodeKind::Package,
        NodeKind::Class,
        NodeKind::Interface,
        NodeKind::Enum,
        NodeKind::AnnotationType,
        NodeKind::TypeParameter,
        NodeKind::Field,
        NodeKind::Method,
        NodeKind::Constructor,
        NodeKind::AnonymousExecutable,
        NodeKind::Parameter,
        NodeKind::LocalVariable,
        NodeKind::CatchVariable,
        NodeKind::Annotation,
        NodeKind::Block,
        NodeKind::StatementList,
        NodeKind::Case,
        NodeKind::Assert,
        NodeKind::Break,
        NodeKind::Continue,
        NodeKind::Return,
        NodeKind::Throw,
        NodeKind::Catch,
        NodeKind::Do,
        NodeKind::For,
        NodeKind::ForEach,
        NodeKind::While,
        NodeKind::If,
        NodeKind::Switch,
        NodeKind::Synchronized,
        NodeKind::Try,
        NodeKind::TryWithResource,
        NodeKind::CodeSnippetStatement,
        NodeKind::Assignment,
        NodeKind::OperatorAssignment,
        NodeKind::BinaryOperator,
        NodeKind::UnaryOperator,
        NodeKind::Conditional,
        NodeKind::Invocation,
        NodeKind::ConstructorCall,
        NodeKind::NewClass,
        NodeKind::NewArray,
        NodeKind::Lambda,
        NodeKind::ExecutableReferenceExpression,
        NodeKind::Literal,
        NodeKind::ThisAccess,
        NodeKind::SuperAccess,
        NodeKind::FieldAccess,
        NodeKind::VariableAccess,
        NodeKind::AnnotationFieldAccess,
        NodeKind::ArrayAccess,
        NodeKind::TypeAccess,
        NodeKind::CodeSnippetExpression,
        NodeKind::TypeReference,
        NodeKind::ArrayTypeReference,
        NodeKind::TypeParameterReference,
        NodeKind::ExecutableReference,
        NodeKind::FieldReference,
        NodeKind::LocalVariableReference,
        NodeKind::CatchVariableReference,
        NodeKind::ParameterReference,
        NodeKind::PackageReference,
        NodeKind::UnboundVariableReference,
    ];

    /// Returns true for symbolic reference kinds.
    ///
    /// References are scanned through
    /// [`scan_reference`](crate::visitor::scan_reference), every other kind
    /// through [`scan`](crate::visitor::scan).
    #[inline]
    pub const fn is_reference(&self) -> bool {
        matches!(
            self,
            NodeKind::TypeReference
                | NodeKind::ArrayTypeReference
                | NodeKind::TypeParameterReference
                | NodeKind::ExecutableReference
                | NodeKind::FieldReference
                | NodeKind::LocalVariableReference
                | NodeKind::CatchVariableReference
                | NodeKind::ParameterReference
                | NodeKind::PackageReference
                | NodeKind::UnboundVariableReference
        )
    }

    /// Returns the ordered hook table dispatched for this kind.
    pub const fn hook_table(&self) -> HookTable {
        match self {
            NodeKind::CodeSnippetExpression => HookTable::own(&[
                CodeSnippet,
                Expression,
                CodeElement,
                TypedElement,
                Element,
            ]),
            NodeKind::CodeSnippetStatement => {
                HookTable::own(&[CodeSnippet, Statement, CodeElement, Element])
            }
            NodeKind::Annotation
            | NodeKind::BinaryOperator
            | NodeKind::Conditional
            | NodeKind::Literal
            | NodeKind::NewArray
            | NodeKind::ThisAccess
            | NodeKind::TypeAccess
            | NodeKind::VariableAccess => HookTable::own(EXPRESSION_HOOKS),
            NodeKind::AnnotationType => HookTable::own(&[
                Type,
                NamedElement,
                TypeInformation,
                TypeMember,
                GenericElement,
                Modifiable,
                Element,
            ]),
            NodeKind::AnonymousExecutable => HookTable::own(&[Element, Modifiable, TypeMember]),
            NodeKind::ArrayAccess | NodeKind::ExecutableReferenceExpression => {
                HookTable::own(TARGETED_EXPRESSION_HOOKS)
            }
            NodeKind::Assert
            | NodeKind::If
            | NodeKind::Switch
            | NodeKind::Synchronized
            | NodeKind::Try => HookTable::own(STATEMENT_HOOKS),
            NodeKind::Assignment => HookTable::own(&[
                Statement,
                Expression,
                CodeElement,
                TypedElement,
                Element,
            ]),
            NodeKind::OperatorAssignment => HookTable::delegating(NodeKind::Assignment),
            NodeKind::Block | NodeKind::Case => {
                HookTable::wrapping(&[Statement], NodeKind::StatementList, &[])
            }
            NodeKind::StatementList | NodeKind::Catch => HookTable::own(&[CodeElement, Element]),
            NodeKind::Break | NodeKind::Continue | NodeKind::Return | NodeKind::Throw => {
                HookTable::own(CFLOW_BREAK_HOOKS)
            }
            NodeKind::Class => HookTable::own(&[
                Type,
                Statement,
                TypeInformation,
                GenericElement,
                CodeElement,
                NamedElement,
                TypeMember,
                Element,
                Modifiable,
            ]),
            NodeKind::Enum => HookTable::delegating(NodeKind::Class),
            NodeKind::Constructor => HookTable::own(&[
                Executable,
                NamedElement,
                GenericElement,
                TypedElement,
                TypeMember,
                Modifiable,
                Element,
            ]),
            NodeKind::Do | NodeKind::For | NodeKind::ForEach | NodeKind::While => {
                HookTable::own(LOOP_HOOKS)
            }
            NodeKind::Field => HookTable::own(&[
                NamedElement,
                Variable,
                TypeMember,
                Modifiable,
                TypedElement,
                Element,
            ]),
            NodeKind::Interface => HookTable::own(&[
                Type,
                TypeInformation,
                GenericElement,
                NamedElement,
                TypeMember,
                Element,
                Modifiable,
            ]),
            NodeKind::Invocation => HookTable::own(&[
                AbstractInvocation,
                Statement,
                TargetedExpression,
                Element,
                CodeElement,
                Expression,
                TypedElement,
            ]),
            NodeKind::ConstructorCall => HookTable::own(&[
                TargetedExpression,
                AbstractInvocation,
                Statement,
                Expression,
                Element,
                CodeElement,
                TypedElement,
            ]),
            NodeKind::NewClass => HookTable::delegating(NodeKind::ConstructorCall),
            NodeKind::Lambda => HookTable::own(&[
                Expression,
                CodeElement,
                TypedElement,
                Executable,
                NamedElement,
                Element,
            ]),
            NodeKind::LocalVariable => HookTable::own(&[
                Statement,
                Variable,
                CodeElement,
                NamedElement,
                TypedElement,
                Element,
                Modifiable,
            ]),
            NodeKind::CatchVariable => HookTable::own(&[
                Variable,
                MultiTypedElement,
                CodeElement,
                NamedElement,
                TypedElement,
                Element,
                Modifiable,
            ]),
            NodeKind::Method => HookTable::own(&[
                Executable,
                TypedElement,
                NamedElement,
                GenericElement,
                TypeMember,
                Element,
                Modifiable,
            ]),
            NodeKind::Package => HookTable::own(&[NamedElement, Element]),
            NodeKind::Parameter => HookTable::own(&[
                NamedElement,
                Variable,
                Modifiable,
                TypedElement,
                Element,
            ]),
            NodeKind::TryWithResource => HookTable::delegating(NodeKind::Try),
            NodeKind::TypeParameter => HookTable::own(&[Element]),
            NodeKind::UnaryOperator => HookTable::own(&[
                Expression,
                Statement,
                CodeElement,
                TypedElement,
                Element,
            ]),
            NodeKind::FieldAccess => HookTable::wrapping(
                &[],
                NodeKind::VariableAccess,
                &[TargetedAccess, TargetedExpression],
            ),
            NodeKind::SuperAccess => HookTable::wrapping(
                &[TargetedAccess],
                NodeKind::VariableAccess,
                &[TargetedExpression],
            ),
            NodeKind::AnnotationFieldAccess => {
                HookTable::wrapping(&[], NodeKind::VariableAccess, &[TargetedExpression])
            }
            NodeKind::TypeReference => HookTable::own(&[
                Reference,
                TypeInformation,
                GenericElementReference,
                TypeAnnotableReference,
            ]),
            NodeKind::ArrayTypeReference | NodeKind::TypeParameterReference => {
                HookTable::delegating(NodeKind::TypeReference)
            }
            NodeKind::ExecutableReference => {
                HookTable::own(&[Reference, GenericElementReference])
            }
            NodeKind::FieldReference
            | NodeKind::LocalVariableReference
            | NodeKind::CatchVariableReference
            | NodeKind::ParameterReference
            | NodeKind::UnboundVariableReference => HookTable::own(VARIABLE_REFERENCE_HOOKS),
            NodeKind::PackageReference => HookTable::own(&[Reference]),
        }
    }

    /// Returns the capabilities of this kind in hook order.
    pub fn capabilities(&self) -> Vec<Capability> {
        let mut capabilities = Vec::new();
        self.hook_table().for_each(&mut |capability| capabilities.push(capability));
        capabilities
    }

    /// Returns true if this kind possesses `capability`.
    #[inline]
    pub fn has_capability(&self, capability: Capability) -> bool {
        self.hook_table().contains(capability)
    }

    /// Returns the child slots of this kind, in traversal order.
    pub const fn slots(&self) -> &'static [SlotSpec] {
        match self {
            NodeKind::Package => PACKAGE_SLOTS,
            NodeKind::Class => CLASS_SLOTS,
            NodeKind::Enum => ENUM_SLOTS,
            NodeKind::Interface => INTERFACE_SLOTS,
            NodeKind::AnnotationType => ANNOTATION_TYPE_SLOTS,
            NodeKind::TypeParameter | NodeKind::TypeParameterReference => BOUNDS_SLOTS,
            NodeKind::Field | NodeKind::LocalVariable => VARIABLE_SLOTS,
            NodeKind::Method => METHOD_SLOTS,
            NodeKind::Constructor => CONSTRUCTOR_SLOTS,
            NodeKind::AnonymousExecutable => ANONYMOUS_EXECUTABLE_SLOTS,
            NodeKind::Parameter => PARAMETER_SLOTS,
            NodeKind::CatchVariable => CATCH_VARIABLE_SLOTS,
            NodeKind::Annotation => ANNOTATION_SLOTS,
            NodeKind::Block | NodeKind::StatementList => STATEMENT_LIST_SLOTS,
            NodeKind::Case => CASE_SLOTS,
            NodeKind::Assert => ASSERT_SLOTS,
            NodeKind::Return => RETURN_SLOTS,
            NodeKind::Throw => THROW_SLOTS,
            NodeKind::Catch => CATCH_SLOTS,
            NodeKind::Do | NodeKind::While => WHILE_SLOTS,
            NodeKind::For => FOR_SLOTS,
            NodeKind::ForEach => FOR_EACH_SLOTS,
            NodeKind::If => IF_SLOTS,
            NodeKind::Switch => SWITCH_SLOTS,
            NodeKind::Synchronized => SYNCHRONIZED_SLOTS,
            NodeKind::Try => TRY_SLOTS,
            NodeKind::TryWithResource => TRY_WITH_RESOURCE_SLOTS,
            NodeKind::Assignment | NodeKind::OperatorAssignment => ASSIGNMENT_SLOTS,
            NodeKind::BinaryOperator => BINARY_OPERATOR_SLOTS,
            NodeKind::UnaryOperator => UNARY_OPERATOR_SLOTS,
            NodeKind::Conditional => CONDITIONAL_SLOTS,
            NodeKind::Invocation | NodeKind::ConstructorCall => INVOCATION_SLOTS,
            NodeKind::NewClass => NEW_CLASS_SLOTS,
            NodeKind::NewArray => NEW_ARRAY_SLOTS,
            NodeKind::Lambda => LAMBDA_SLOTS,
            NodeKind::ExecutableReferenceExpression => EXECUTABLE_REFERENCE_EXPRESSION_SLOTS,
            NodeKind::VariableAccess => VARIABLE_ACCESS_SLOTS,
            NodeKind::FieldAccess | NodeKind::SuperAccess | NodeKind::AnnotationFieldAccess => {
                FIELD_ACCESS_SLOTS
            }
            NodeKind::ArrayAccess => ARRAY_ACCESS_SLOTS,
            NodeKind::TypeAccess => TYPE_ACCESS_SLOTS,
            NodeKind::TypeReference => TYPE_REFERENCE_SLOTS,
            NodeKind::ArrayTypeReference => ARRAY_TYPE_REFERENCE_SLOTS,
            NodeKind::ExecutableReference => EXECUTABLE_REFERENCE_SLOTS,
            NodeKind::FieldReference => FIELD_REFERENCE_SLOTS,
            NodeKind::LocalVariableReference
            | NodeKind::CatchVariableReference
            | NodeKind::ParameterReference
            | NodeKind::UnboundVariableReference => VARIABLE_REFERENCE_SLOTS,
            NodeKind::Break
            | NodeKind::Continue
            | NodeKind::Literal
            | NodeKind::ThisAccess
            | NodeKind::CodeSnippetStatement
            | NodeKind::CodeSnippetExpression
            | NodeKind::PackageReference => &[],
        }
    }

    /// Returns the slot declared for `role`, if this kind has one.
    pub fn slot(&self, role: Role) -> Option<(usize, &'static SlotSpec)> {
        self.slots()
            .iter()
            .enumerate()
            .find(|(_, spec)| spec.role == role)
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Same casing as serde serialization
        fmt::Debug::fmt(self, f)
    }
}
