use crate::visitor::Scanner;
use crate::{Capability, NodeId, NodeKind, NodeRef};

/// Records every hook invocation in call order.
#[derive(Debug, Default)]
pub struct HookRecorder {
    pub hooks: Vec<(NodeId, Capability)>,
    pub visited: Vec<(NodeId, NodeKind)>,
}

impl HookRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Capabilities recorded for one node, in call order.
    pub fn hooks_of(&self, id: NodeId) -> Vec<Capability> {
        self.hooks
            .iter()
            .filter(|(node, _)| *node == id)
            .map(|(_, capability)| *capability)
            .collect()
    }

    pub fn count(&self, capability: Capability) -> usize {
        self.hooks.iter().filter(|(_, c)| *c == capability).count()
    }

    fn push(&mut self, node: NodeRef<'_, '_>, capability: Capability) {
        self.hooks.push((node.id(), capability));
    }
}

impl<'a> Scanner<'a> for HookRecorder {
    fn visited(&mut self, node: NodeRef<'_, 'a>) {
        self.visited.push((node.id(), node.kind()));
    }

    fn scan_element(&mut self, node: NodeRef<'_, 'a>) {
        self.push(node, Capability::Element);
    }

    fn scan_code_element(&mut self, node: NodeRef<'_, 'a>) {
        self.push(node, Capability::CodeElement);
    }

    fn scan_statement(&mut self, node: NodeRef<'_, 'a>) {
        self.push(node, Capability::Statement);
    }

    fn scan_expression(&mut self, node: NodeRef<'_, 'a>) {
        self.push(node, Capability::Expression);
    }

    fn scan_typed_element(&mut self, node: NodeRef<'_, 'a>) {
        self.push(node, Capability::TypedElement);
    }

    fn scan_named_element(&mut self, node: NodeRef<'_, 'a>) {
        self.push(node, Capability::NamedElement);
    }

    fn scan_modifiable(&mut self, node: NodeRef<'_, 'a>) {
        self.push(node, Capability::Modifiable);
    }

    fn scan_variable(&mut self, node: NodeRef<'_, 'a>) {
        self.push(node, Capability::Variable);
    }

    fn scan_type_member(&mut self, node: NodeRef<'_, 'a>) {
        self.push(node, Capability::TypeMember);
    }

    fn scan_generic_element(&mut self, node: NodeRef<'_, 'a>) {
        self.push(node, Capability::GenericElement);
    }

    fn scan_multi_typed_element(&mut self, node: NodeRef<'_, 'a>) {
        self.push(node, Capability::MultiTypedElement);
    }

    fn scan_targeted_expression(&mut self, node: NodeRef<'_, 'a>) {
        self.push(node, Capability::TargetedExpression);
    }

    fn scan_targeted_access(&mut self, node: NodeRef<'_, 'a>) {
        self.push(node, Capability::TargetedAccess);
    }

    fn scan_cflow_break(&mut self, node: NodeRef<'_, 'a>) {
        self.push(node, Capability::CFlowBreak);
    }

    fn scan_loop(&mut self, node: NodeRef<'_, 'a>) {
        self.push(node, Capability::Loop);
    }

    fn scan_executable(&mut self, node: NodeRef<'_, 'a>) {
        self.push(node, Capability::Executable);
    }

    fn scan_abstract_invocation(&mut self, node: NodeRef<'_, 'a>) {
        self.push(node, Capability::AbstractInvocation);
    }

    fn scan_type(&mut self, node: NodeRef<'_, 'a>) {
        self.push(node, Capability::Type);
    }

    fn scan_type_information(&mut self, node: NodeRef<'_, 'a>) {
        self.push(node, Capability::TypeInformation);
    }

    fn scan_code_snippet(&mut self, node: NodeRef<'_, 'a>) {
        self.push(node, Capability::CodeSnippet);
    }

    fn scan_reference(&mut self, node: NodeRef<'_, 'a>) {
        self.push(node, Capability::Reference);
    }

    fn scan_variable_reference(&mut self, node: NodeRef<'_, 'a>) {
        self.push(node, Capability::VariableReference);
    }

    fn scan_generic_element_reference(&mut self, node: NodeRef<'_, 'a>) {
        self.push(node, Capability::GenericElementReference);
    }

    fn scan_type_annotable_reference(&mut self, node: NodeRef<'_, 'a>) {
        self.push(node, Capability::TypeAnnotableReference);
    }
}
