//! Table-driven dispatch of capability hooks.

use crate::{Capability, NodeRef};

use super::scan::Scanner;

/// Invokes every hook of the node's kind in table order, then `visited`.
///
/// Each capability the kind possesses is invoked exactly once; capabilities
/// it lacks are never invoked.
pub fn dispatch_node<'a, S>(scanner: &mut S, node: NodeRef<'_, 'a>)
where
    S: Scanner<'a>,
{
    node.kind()
        .hook_table()
        .for_each(&mut |capability| call_hook(scanner, capability, node));

    scanner.visited(node);
}

/// Invokes the single hook of `capability`.
pub fn call_hook<'a, S>(scanner: &mut S, capability: Capability, node: NodeRef<'_, 'a>)
where
    S: Scanner<'a>,
{
    match capability {
        // Elements
        Capability::Element => scanner.scan_element(node),
        Capability::CodeElement => scanner.scan_code_element(node),
        Capability::Statement => scanner.scan_statement(node),
        Capability::Expression => scanner.scan_expression(node),
        Capability::TypedElement => scanner.scan_typed_element(node),
        Capability::NamedElement => scanner.scan_named_element(node),
        Capability::Modifiable => scanner.scan_modifiable(node),
        Capability::Variable => scanner.scan_variable(node),
        Capability::TypeMember => scanner.scan_type_member(node),
        Capability::GenericElement => scanner.scan_generic_element(node),
        Capability::MultiTypedElement => scanner.scan_multi_typed_element(node),
        Capability::TargetedExpression => scanner.scan_targeted_expression(node),
        Capability::TargetedAccess => scanner.scan_targeted_access(node),
        Capability::CFlowBreak => scanner.scan_cflow_break(node),
        Capability::Loop => scanner.scan_loop(node),
        Capability::Executable => scanner.scan_executable(node),
        Capability::AbstractInvocation => scanner.scan_abstract_invocation(node),
        Capability::Type => scanner.scan_type(node),
        Capability::TypeInformation => scanner.scan_type_information(node),
        Capability::CodeSnippet => scanner.scan_code_snippet(node),

        // References
        Capability::Reference => scanner.scan_reference(node),
        Capability::VariableReference => scanner.scan_variable_reference(node),
        Capability::GenericElementReference => scanner.scan_generic_element_reference(node),
        Capability::TypeAnnotableReference => scanner.scan_type_annotable_reference(node),
    }
}
