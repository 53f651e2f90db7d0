//! Shared fixtures for the integration tests.
//!
//! The sample tree, written as source:
//!
//! ```text
//! package sample;
//!
//! class Foo {
//!     int i;
//!     void foo() { int x = 2; int z; z = x + 1; }
//!     void bar() { int y = 5; }
//!     void retry() { int a = 1; }
//!     void statements() { int b = 2; int c = 3; }
//! }
//!
//! class Bar {
//!     float i;
//! }
//! ```

use std::collections::BTreeMap;

use sprig_ast::{
    BinaryOperatorKind, Capability, LiteralValue, NodeId, NodeKind, NodeRef, Role, Scanner, Tree,
    TreeError, factory,
};

/// Handles into the sample tree.
#[derive(Debug, Clone, Copy)]
pub struct Sample {
    pub package: NodeId,
    pub foo: NodeId,
    pub bar: NodeId,
}

/// Builds the sample tree.
pub fn build_sample(tree: &mut Tree<'_>) -> Result<Sample, TreeError> {
    let package = factory::new_package(tree, "sample");
    let foo = factory::new_class(tree, "Foo");
    let bar = factory::new_class(tree, "Bar");
    tree.attach(package, Role::Types, foo)?;
    tree.attach(package, Role::Types, bar)?;

    factory::new_field(tree, foo, "int", "i")?;

    let body = method_body_of(tree, foo, "foo")?;
    let two = factory::new_literal(tree, LiteralValue::Int(2));
    let x = factory::new_local_variable(tree, "int", "x", Some(two))?;
    let z = factory::new_local_variable(tree, "int", "z", None)?;
    let z_read = factory::new_variable_read(tree, z)?;
    let x_read = factory::new_variable_read(tree, x)?;
    let one = factory::new_literal(tree, LiteralValue::Int(1));
    let sum = factory::new_binary(tree, BinaryOperatorKind::Plus, x_read, one)?;
    let assignment = factory::new_assignment(tree, z_read, sum)?;
    for statement in [x, z, assignment] {
        tree.attach(body, Role::Statements, statement)?;
    }

    add_locals(tree, foo, "bar", &[("y", 5)])?;
    add_locals(tree, foo, "retry", &[("a", 1)])?;
    add_locals(tree, foo, "statements", &[("b", 2), ("c", 3)])?;

    factory::new_field(tree, bar, "float", "i")?;

    Ok(Sample { package, foo, bar })
}

fn method_body_of(tree: &mut Tree<'_>, owner: NodeId, name: &str) -> Result<NodeId, TreeError> {
    let method = factory::new_method(tree, owner, "void", name)?;
    Ok(body(tree, method))
}

fn add_locals(
    tree: &mut Tree<'_>,
    owner: NodeId,
    method: &str,
    locals: &[(&str, i64)],
) -> Result<(), TreeError> {
    let body = method_body_of(tree, owner, method)?;
    for &(name, value) in locals {
        let init = factory::new_literal(tree, LiteralValue::Int(value));
        let local = factory::new_local_variable(tree, "int", name, Some(init))?;
        tree.attach(body, Role::Statements, local)?;
    }
    Ok(())
}

/// Returns the body block of a method.
///
/// # Panics
///
/// Panics if the method has no body.
pub fn body(tree: &Tree<'_>, method: NodeId) -> NodeId {
    tree.child(method, Role::Body)
        .unwrap_or_else(|| panic!("method {method} has no body"))
}

/// Returns a member of a type by name.
///
/// # Panics
///
/// Panics if there is no such member.
pub fn member(tree: &Tree<'_>, owner: NodeId, name: &str) -> NodeId {
    tree.node(owner)
        .member_named(name)
        .map(|m| m.id())
        .unwrap_or_else(|| panic!("no member {name} in {owner}"))
}

/// Returns the body statements of a method, in order.
pub fn statements_of(tree: &Tree<'_>, owner: NodeId, method: &str) -> Vec<NodeId> {
    let body = body(tree, member(tree, owner, method));
    tree.children(body, Role::Statements).to_vec()
}

/// Renders a node as source text.
///
/// Covers the kinds the sample tree uses; anything else renders as its kind.
pub fn render(tree: &Tree<'_>, id: NodeId) -> String {
    let node = tree.node(id);
    let child = |role| node.child(role).map(|c| render(tree, c.id()));
    match node.kind() {
        NodeKind::Field | NodeKind::LocalVariable => {
            let mut text = format!(
                "{} {}",
                child(Role::Type).unwrap_or_default(),
                node.name().unwrap_or_default()
            );
            if let Some(init) = child(Role::DefaultExpression) {
                text.push_str(" = ");
                text.push_str(&init);
            }
            text
        }
        NodeKind::Assignment => format!(
            "{} = {}",
            child(Role::Assigned).unwrap_or_default(),
            child(Role::AssignedValue).unwrap_or_default()
        ),
        NodeKind::BinaryOperator => format!(
            "{} {} {}",
            child(Role::LeftOperand).unwrap_or_default(),
            node.data()
                .binary_op
                .map(|op| op.symbol())
                .unwrap_or_default(),
            child(Role::RightOperand).unwrap_or_default()
        ),
        NodeKind::Literal => node
            .data()
            .literal
            .map(|value| value.to_string())
            .unwrap_or_default(),
        NodeKind::VariableAccess => child(Role::Variable).unwrap_or_default(),
        kind if kind.is_reference() => node.name().unwrap_or_default().to_string(),
        kind => kind.to_string(),
    }
}

/// Renders each node of a list.
pub fn render_all(tree: &Tree<'_>, ids: &[NodeId]) -> Vec<String> {
    ids.iter().map(|&id| render(tree, id)).collect()
}

/// Counts hook invocations per capability.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CapabilityCounter {
    pub counts: BTreeMap<Capability, usize>,
    pub visited: usize,
}

impl CapabilityCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self, capability: Capability) -> usize {
        self.counts.get(&capability).copied().unwrap_or(0)
    }

    fn bump(&mut self, capability: Capability) {
        *self.counts.entry(capability).or_insert(0) += 1;
    }
}

impl<'a> Scanner<'a> for CapabilityCounter {
    fn visited(&mut self, _node: NodeRef<'_, 'a>) {
        self.visited += 1;
    }

    fn scan_element(&mut self, _node: NodeRef<'_, 'a>) {
        self.bump(Capability::Element);
    }

    fn scan_code_element(&mut self, _node: NodeRef<'_, 'a>) {
        self.bump(Capability::CodeElement);
    }

    fn scan_statement(&mut self, _node: NodeRef<'_, 'a>) {
        self.bump(Capability::Statement);
    }

    fn scan_expression(&mut self, _node: NodeRef<'_, 'a>) {
        self.bump(Capability::Expression);
    }

    fn scan_typed_element(&mut self, _node: NodeRef<'_, 'a>) {
        self.bump(Capability::TypedElement);
    }

    fn scan_named_element(&mut self, _node: NodeRef<'_, 'a>) {
        self.bump(Capability::NamedElement);
    }

    fn scan_modifiable(&mut self, _node: NodeRef<'_, 'a>) {
        self.bump(Capability::Modifiable);
    }

    fn scan_variable(&mut self, _node: NodeRef<'_, 'a>) {
        self.bump(Capability::Variable);
    }

    fn scan_type_member(&mut self, _node: NodeRef<'_, 'a>) {
        self.bump(Capability::TypeMember);
    }

    fn scan_generic_element(&mut self, _node: NodeRef<'_, 'a>) {
        self.bump(Capability::GenericElement);
    }

    fn scan_multi_typed_element(&mut self, _node: NodeRef<'_, 'a>) {
        self.bump(Capability::MultiTypedElement);
    }

    fn scan_targeted_expression(&mut self, _node: NodeRef<'_, 'a>) {
        self.bump(Capability::TargetedExpression);
    }

    fn scan_targeted_access(&mut self, _node: NodeRef<'_, 'a>) {
        self.bump(Capability::TargetedAccess);
    }

    fn scan_cflow_break(&mut self, _node: NodeRef<'_, 'a>) {
        self.bump(Capability::CFlowBreak);
    }

    fn scan_loop(&mut self, _node: NodeRef<'_, 'a>) {
        self.bump(Capability::Loop);
    }

    fn scan_executable(&mut self, _node: NodeRef<'_, 'a>) {
        self.bump(Capability::Executable);
    }

    fn scan_abstract_invocation(&mut self, _node: NodeRef<'_, 'a>) {
        self.bump(Capability::AbstractInvocation);
    }

    fn scan_type(&mut self, _node: NodeRef<'_, 'a>) {
        self.bump(Capability::Type);
    }

    fn scan_type_information(&mut self, _node: NodeRef<'_, 'a>) {
        self.bump(Capability::TypeInformation);
    }

    fn scan_code_snippet(&mut self, _node: NodeRef<'_, 'a>) {
        self.bump(Capability::CodeSnippet);
    }

    fn scan_reference(&mut self, _node: NodeRef<'_, 'a>) {
        self.bump(Capability::Reference);
    }

    fn scan_variable_reference(&mut self, _node: NodeRef<'_, 'a>) {
        self.bump(Capability::VariableReference);
    }

    fn scan_generic_element_reference(&mut self, _node: NodeRef<'_, 'a>) {
        self.bump(Capability::GenericElementReference);
    }

    fn scan_type_annotable_reference(&mut self, _node: NodeRef<'_, 'a>) {
        self.bump(Capability::TypeAnnotableReference);
    }
}
