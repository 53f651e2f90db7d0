//! Helpers for building common node shapes.
//!
//! Helpers that only create nodes return the new handle; helpers that also
//! attach children return a `Result`, since every attachment is checked
//! against the slot requirements.

use crate::{
    BinaryOperatorKind, LiteralValue, NodeData, NodeId, NodeKind, Role, Tree, TreeError,
};

/// Creates a detached package.
pub fn new_package(tree: &mut Tree<'_>, name: &str) -> NodeId {
    let name = tree.intern(name);
    tree.add(NodeKind::Package, NodeData::named(name))
}

/// Creates a detached, empty class.
pub fn new_class(tree: &mut Tree<'_>, name: &str) -> NodeId {
    let name = tree.intern(name);
    tree.add(NodeKind::Class, NodeData::named(name))
}

/// Creates a detached type reference by simple name.
pub fn new_type_reference(tree: &mut Tree<'_>, name: &str) -> NodeId {
    let name = tree.intern(name);
    tree.add(NodeKind::TypeReference, NodeData::named(name))
}

/// Creates a field `type_name name;` and appends it to `owner`'s members.
pub fn new_field(
    tree: &mut Tree<'_>,
    owner: NodeId,
    type_name: &str,
    name: &str,
) -> Result<NodeId, TreeError> {
    let field = new_variable(tree, NodeKind::Field, type_name, name)?;
    tree.attach(owner, Role::Members, field)?;
    Ok(field)
}

/// Creates a method with an empty body and appends it to `owner`'s members.
pub fn new_method(
    tree: &mut Tree<'_>,
    owner: NodeId,
    return_type: &str,
    name: &str,
) -> Result<NodeId, TreeError> {
    let interned = tree.intern(name);
    let method = tree.add(NodeKind::Method, NodeData::named(interned));
    let return_type = new_type_reference(tree, return_type);
    tree.attach(method, Role::Type, return_type)?;
    let body = new_block(tree);
    tree.attach(method, Role::Body, body)?;
    tree.attach(owner, Role::Members, method)?;
    Ok(method)
}

/// Creates a detached, empty block.
pub fn new_block(tree: &mut Tree<'_>) -> NodeId {
    tree.add(NodeKind::Block, NodeData::new())
}

/// Creates a detached local variable `type_name name [= init];`.
pub fn new_local_variable(
    tree: &mut Tree<'_>,
    type_name: &str,
    name: &str,
    init: Option<NodeId>,
) -> Result<NodeId, TreeError> {
    let local = new_variable(tree, NodeKind::LocalVariable, type_name, name)?;
    if let Some(init) = init {
        tree.attach(local, Role::DefaultExpression, init)?;
    }
    Ok(local)
}

fn new_variable(
    tree: &mut Tree<'_>,
    kind: NodeKind,
    type_name: &str,
    name: &str,
) -> Result<NodeId, TreeError> {
    let name = tree.intern(name);
    let variable = tree.add(kind, NodeData::named(name));
    let ty = new_type_reference(tree, type_name);
    tree.attach(variable, Role::Type, ty)?;
    Ok(variable)
}

/// Creates a detached literal.
pub fn new_literal<'a>(tree: &mut Tree<'a>, value: LiteralValue<'a>) -> NodeId {
    tree.add(NodeKind::Literal, NodeData::literal(value))
}

/// Creates a detached string literal, copying `value` into the arena.
pub fn new_string_literal(tree: &mut Tree<'_>, value: &str) -> NodeId {
    let value = tree.intern(value);
    tree.add(NodeKind::Literal, NodeData::literal(LiteralValue::Str(value)))
}

/// Creates a detached read of `variable`.
///
/// The access refers to the variable through the reference kind matching
/// the declaration; anything else yields an unbound reference.
pub fn new_variable_read(tree: &mut Tree<'_>, variable: NodeId) -> Result<NodeId, TreeError> {
    let reference_kind = match tree.kind(variable) {
        NodeKind::Field => NodeKind::FieldReference,
        NodeKind::LocalVariable => NodeKind::LocalVariableReference,
        NodeKind::CatchVariable => NodeKind::CatchVariableReference,
        NodeKind::Parameter => NodeKind::ParameterReference,
        _ => NodeKind::UnboundVariableReference,
    };
    let name = tree.data(variable).name;
    let reference = tree.add(
        reference_kind,
        NodeData {
            name,
            ..NodeData::new()
        },
    );
    let access = tree.add(NodeKind::VariableAccess, NodeData::new());
    tree.attach(access, Role::Variable, reference)?;
    Ok(access)
}

/// Creates a detached binary expression `left op right`.
pub fn new_binary(
    tree: &mut Tree<'_>,
    op: BinaryOperatorKind,
    left: NodeId,
    right: NodeId,
) -> Result<NodeId, TreeError> {
    let binary = tree.add(NodeKind::BinaryOperator, NodeData::binary(op));
    tree.attach(binary, Role::LeftOperand, left)?;
    tree.attach(binary, Role::RightOperand, right)?;
    Ok(binary)
}

/// Creates a detached assignment `assigned = value`.
pub fn new_assignment(
    tree: &mut Tree<'_>,
    assigned: NodeId,
    value: NodeId,
) -> Result<NodeId, TreeError> {
    let assignment = tree.add(NodeKind::Assignment, NodeData::new());
    tree.attach(assignment, Role::Assigned, assigned)?;
    tree.attach(assignment, Role::AssignedValue, value)?;
    Ok(assignment)
}

/// Creates a detached `break`, optionally targeting a label.
pub fn new_break(tree: &mut Tree<'_>, label: Option<&str>) -> NodeId {
    let data = match label {
        Some(label) => NodeData::new().with_label(tree.intern(label)),
        None => NodeData::new(),
    };
    tree.add(NodeKind::Break, data)
}
