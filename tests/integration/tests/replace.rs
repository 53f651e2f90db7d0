//! Integration tests for structural replacement on the sample tree.

use sprig_ast::{AstArena, LiteralValue, Role, Tree, TreeError, factory, scan_subtree};
use sprig_edit::{EditError, EditOptions, Replacer, verify};
use sprig_integration_tests::{
    CapabilityCounter, body, build_sample, member, render, render_all, statements_of,
};

fn checked_replacer() -> Replacer {
    Replacer::with_options(EditOptions::from_json(r#"{ "verify": true }"#).unwrap())
}

mod symmetric_replacement {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn replaces_field_and_back() {
        let arena = AstArena::new();
        let mut tree = Tree::new(&arena);
        let sample = build_sample(&mut tree).unwrap();
        let replacer = checked_replacer();
        let int_field = member(&tree, sample.foo, "i");
        let float_field = member(&tree, sample.bar, "i");
        assert_eq!(render(&tree, int_field), "int i");

        replacer.replace(&mut tree, int_field, float_field).unwrap();

        let now = member(&tree, sample.foo, "i");
        assert_eq!(now, float_field);
        assert_eq!(render(&tree, now), "float i");
        assert_eq!(tree.parent(float_field), Some(sample.foo));
        assert_eq!(tree.index(float_field), Some(0));
        assert_eq!(tree.parent(int_field), None);
        assert!(tree.node(sample.bar).member_named("i").is_none());

        replacer.replace(&mut tree, float_field, int_field).unwrap();

        assert_eq!(member(&tree, sample.foo, "i"), int_field);
        assert_eq!(render(&tree, int_field), "int i");
        assert_eq!(tree.role(int_field), Some(Role::Members));
        assert_eq!(tree.index(int_field), Some(0));
        assert_eq!(tree.parent(float_field), None);
    }

    #[test]
    fn replaces_expression_and_back() {
        let arena = AstArena::new();
        let mut tree = Tree::new(&arena);
        let sample = build_sample(&mut tree).unwrap();
        let replacer = checked_replacer();
        let assignment = statements_of(&tree, sample.foo, "foo")[2];
        let sum = tree.child(assignment, Role::AssignedValue).unwrap();
        assert_eq!(render(&tree, assignment), "z = x + 1");

        let three = factory::new_literal(&mut tree, LiteralValue::Int(3));
        replacer.replace(&mut tree, sum, three).unwrap();

        assert_eq!(render(&tree, assignment), "z = 3");
        assert_eq!(tree.parent(three), Some(assignment));
        assert_eq!(tree.role(three), Some(Role::AssignedValue));
        assert_eq!(tree.parent(sum), None);
        assert_eq!(render(&tree, sum), "x + 1");

        replacer.replace(&mut tree, three, sum).unwrap();

        assert_eq!(render(&tree, assignment), "z = x + 1");
        assert_eq!(tree.parent(sum), Some(assignment));
        assert_eq!(tree.parent(three), None);
    }
}

mod cross_subtree {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn moves_local_variable_into_other_method() {
        let arena = AstArena::new();
        let mut tree = Tree::new(&arena);
        let sample = build_sample(&mut tree).unwrap();
        let replacer = checked_replacer();
        let x = statements_of(&tree, sample.foo, "foo")[0];
        let y = statements_of(&tree, sample.foo, "bar")[0];
        let foo_body = body(&tree, member(&tree, sample.foo, "foo"));

        replacer.replace(&mut tree, x, y).unwrap();

        assert_eq!(tree.parent(y), Some(foo_body));
        assert_eq!(tree.index(y), Some(0));
        assert!(statements_of(&tree, sample.foo, "bar").is_empty());
        assert_eq!(
            render_all(&tree, &statements_of(&tree, sample.foo, "foo")),
            vec!["int y = 5", "int z", "z = x + 1"]
        );

        let five = tree.child(y, Role::DefaultExpression).unwrap();
        let zero = factory::new_literal(&mut tree, LiteralValue::Int(0));
        replacer.replace(&mut tree, five, zero).unwrap();

        assert_eq!(render(&tree, y), "int y = 0");
        assert_eq!(tree.root_of(y), sample.package);
    }

    #[test]
    fn refuses_to_move_without_reattach() {
        let arena = AstArena::new();
        let mut tree = Tree::new(&arena);
        let sample = build_sample(&mut tree).unwrap();
        let replacer = Replacer::with_options(
            EditOptions::from_json(r#"{ "reattach": false }"#).unwrap(),
        );
        let x = statements_of(&tree, sample.foo, "foo")[0];
        let y = statements_of(&tree, sample.foo, "bar")[0];

        let err = replacer.replace(&mut tree, x, y).unwrap_err();

        assert_eq!(err, EditError::AlreadyAttached { node: y });
        assert_eq!(statements_of(&tree, sample.foo, "bar"), vec![y]);
        assert_eq!(statements_of(&tree, sample.foo, "foo")[0], x);
    }
}

mod splice {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn replaces_statement_by_statement_list() {
        let arena = AstArena::new();
        let mut tree = Tree::new(&arena);
        let sample = build_sample(&mut tree).unwrap();
        let replacer = checked_replacer();
        let a = statements_of(&tree, sample.foo, "retry")[0];
        let list = body(&tree, member(&tree, sample.foo, "statements"));

        let splice = replacer
            .replace_with_statements(&mut tree, a, list)
            .unwrap();

        let retry = statements_of(&tree, sample.foo, "retry");
        assert_eq!(retry.len(), 2);
        assert_eq!(render_all(&tree, &retry), vec!["int b = 2", "int c = 3"]);
        assert_eq!(
            retry.iter().map(|&s| tree.index(s)).collect::<Vec<_>>(),
            vec![Some(0), Some(1)]
        );
        assert!(statements_of(&tree, sample.foo, "statements").is_empty());
        assert_eq!(tree.parent(a), None);
        assert_eq!(splice.inserted, retry);
    }

    #[test]
    fn reverts_statement_list_splice() {
        let arena = AstArena::new();
        let mut tree = Tree::new(&arena);
        let sample = build_sample(&mut tree).unwrap();
        let replacer = checked_replacer();
        let a = statements_of(&tree, sample.foo, "retry")[0];
        let list = body(&tree, member(&tree, sample.foo, "statements"));

        let splice = replacer
            .replace_with_statements(&mut tree, a, list)
            .unwrap();
        replacer.revert(&mut tree, &splice).unwrap();

        assert_eq!(statements_of(&tree, sample.foo, "retry"), vec![a]);
        assert_eq!(render(&tree, a), "int a = 1");
        assert!(splice.inserted.iter().all(|&s| tree.parent(s).is_none()));
        assert_eq!(verify(&tree), Ok(()));
    }

    #[test]
    fn splices_into_middle_of_body() {
        let arena = AstArena::new();
        let mut tree = Tree::new(&arena);
        let sample = build_sample(&mut tree).unwrap();
        let replacer = checked_replacer();
        let before = statements_of(&tree, sample.foo, "foo");
        let w = factory::new_local_variable(&mut tree, "int", "w", None).unwrap();
        let brk = factory::new_break(&mut tree, None);

        replacer
            .replace_with_sequence(&mut tree, before[1], &[w, brk])
            .unwrap();

        let after = statements_of(&tree, sample.foo, "foo");
        assert_eq!(after, vec![before[0], w, brk, before[2]]);
        assert_eq!(tree.index(before[2]), Some(3));
    }
}

mod rejection {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn mismatch_leaves_scan_counts_unchanged() {
        let arena = AstArena::new();
        let mut tree = Tree::new(&arena);
        let sample = build_sample(&mut tree).unwrap();
        let field = member(&tree, sample.foo, "i");
        let brk = factory::new_break(&mut tree, None);

        let mut before = CapabilityCounter::new();
        scan_subtree(&mut before, tree.node(sample.package));

        let err = checked_replacer()
            .replace(&mut tree, field, brk)
            .unwrap_err();

        assert!(matches!(
            err,
            EditError::StructuralMismatch(TreeError::StructuralMismatch { .. })
        ));
        let mut after = CapabilityCounter::new();
        scan_subtree(&mut after, tree.node(sample.package));
        assert_eq!(after, before);
        assert_eq!(tree.parent(field), Some(sample.foo));
    }

    #[test]
    fn non_expression_is_rejected_from_expression_slot() {
        let arena = AstArena::new();
        let mut tree = Tree::new(&arena);
        let sample = build_sample(&mut tree).unwrap();
        let assignment = statements_of(&tree, sample.foo, "foo")[2];
        let sum = tree.child(assignment, Role::AssignedValue).unwrap();
        let brk = factory::new_break(&mut tree, None);
        let local = factory::new_local_variable(&mut tree, "int", "w", None).unwrap();

        let mut before = CapabilityCounter::new();
        scan_subtree(&mut before, tree.node(sample.package));

        for replacement in [brk, local] {
            let err = checked_replacer()
                .replace(&mut tree, sum, replacement)
                .unwrap_err();
            assert!(matches!(
                err,
                EditError::StructuralMismatch(TreeError::StructuralMismatch { .. })
            ));
            assert_eq!(tree.parent(replacement), None);
        }

        let mut after = CapabilityCounter::new();
        scan_subtree(&mut after, tree.node(sample.package));
        assert_eq!(after, before);
        assert_eq!(render(&tree, assignment), "z = x + 1");
        assert_eq!(tree.child(assignment, Role::AssignedValue), Some(sum));
    }

    #[test]
    fn detached_target_has_no_attachment_point() {
        let arena = AstArena::new();
        let mut tree = Tree::new(&arena);
        build_sample(&mut tree).unwrap();
        let loose = factory::new_local_variable(&mut tree, "int", "q", None).unwrap();
        let brk = factory::new_break(&mut tree, None);

        let err = checked_replacer()
            .replace(&mut tree, loose, brk)
            .unwrap_err();

        assert_eq!(err, EditError::NoAttachmentPoint { target: loose });
        assert_eq!(tree.parent(brk), None);
    }
}
