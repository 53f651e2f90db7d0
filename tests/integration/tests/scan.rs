//! Integration tests for capability scanning over the sample tree.

use pretty_assertions::assert_eq;
use rstest::rstest;
use sprig_ast::{AstArena, Capability, NodeRef, Role, Scanner, Tree, scan, scan_all, scan_subtree};
use sprig_integration_tests::{CapabilityCounter, build_sample, member, statements_of};

/// Collects names of typed elements, in scan order.
struct TypedNames<'a> {
    names: Vec<&'a str>,
}

impl<'a> Scanner<'a> for TypedNames<'a> {
    fn scan_typed_element(&mut self, node: NodeRef<'_, 'a>) {
        if let Some(name) = node.name() {
            self.names.push(name);
        }
    }
}

#[rstest]
#[case::statements(Capability::Statement, 12)]
#[case::variables(Capability::Variable, 7)]
#[case::expressions(Capability::Expression, 10)]
#[case::executables(Capability::Executable, 4)]
#[case::references(Capability::Reference, 13)]
#[case::variable_references(Capability::VariableReference, 2)]
#[case::type_information(Capability::TypeInformation, 12)]
#[case::loops(Capability::Loop, 0)]
fn counts_capabilities_of_class(#[case] capability: Capability, #[case] expected: usize) {
    let arena = AstArena::new();
    let mut tree = Tree::new(&arena);
    let sample = build_sample(&mut tree).unwrap();

    let mut counter = CapabilityCounter::new();
    scan_subtree(&mut counter, tree.node(sample.foo));

    assert_eq!(counter.count(capability), expected);
    assert_eq!(counter.visited, 39);
}

#[test]
fn typed_element_hook_sees_fields_methods_and_locals() {
    let arena = AstArena::new();
    let mut tree = Tree::new(&arena);
    let sample = build_sample(&mut tree).unwrap();

    let mut collector = TypedNames { names: Vec::new() };
    scan_subtree(&mut collector, tree.node(sample.foo));

    assert_eq!(
        collector.names,
        vec!["i", "foo", "x", "z", "bar", "y", "retry", "a", "statements", "b", "c"]
    );
}

#[test]
fn scan_all_over_package_types() {
    let arena = AstArena::new();
    let mut tree = Tree::new(&arena);
    let sample = build_sample(&mut tree).unwrap();

    let mut counter = CapabilityCounter::new();
    scan_all(&mut counter, Some(tree.node(sample.package).children(Role::Types)));

    assert_eq!(counter.visited, 2);
    assert_eq!(counter.count(Capability::Type), 2);
    assert_eq!(counter.count(Capability::Statement), 2);
    assert_eq!(counter.count(Capability::Variable), 0);
}

#[test]
fn scanning_an_empty_optional_slot_does_nothing() {
    let arena = AstArena::new();
    let mut tree = Tree::new(&arena);
    let sample = build_sample(&mut tree).unwrap();
    let z = statements_of(&tree, sample.foo, "foo")[1];

    let mut counter = CapabilityCounter::new();
    scan(&mut counter, tree.node(z).child(Role::DefaultExpression));

    assert_eq!(counter, CapabilityCounter::new());
}

#[test]
fn field_scans_exactly_its_capabilities() {
    let arena = AstArena::new();
    let mut tree = Tree::new(&arena);
    let sample = build_sample(&mut tree).unwrap();
    let field = member(&tree, sample.bar, "i");

    let mut counter = CapabilityCounter::new();
    scan(&mut counter, Some(tree.node(field)));

    let seen: Vec<_> = counter.counts.keys().copied().collect();
    let mut expected = tree.kind(field).capabilities();
    expected.sort();
    assert_eq!(seen, expected);
    assert_eq!(counter.visited, 1);
}
