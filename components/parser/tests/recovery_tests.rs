//! Error recovery behavior
//!
//! Broken input must still produce a tree: local mismatches become error
//! nodes at tolerant points, broken statements become error statements,
//! and parsing resumes at the next statement boundary.

use core_types::{DiagnosticKind, Severity};
use js_frontend::ast::{Expression, ObjectMember, Statement, VariableDeclarator};
use js_frontend::{parse, parse_with_options, ParseOptions};

fn expression_of(statement: &Statement) -> &Expression {
    match statement {
        Statement::ExpressionStatement { expression, .. } => expression,
        other => panic!("expected expression statement, got {other:?}"),
    }
}

// =============================================================================
// Tolerant points
// =============================================================================

#[test]
fn test_malformed_pair_value_yields_single_error_member() {
    let output = parse("({a: , b: 2})");
    assert_eq!(output.diagnostics.len(), 1);
    assert_eq!(output.diagnostics[0].kind, DiagnosticKind::RecoverableParseError);

    let Expression::ParenthesizedExpression { expression, .. } = expression_of(&output.program.body[0]) else {
        panic!("expected parenthesized expression");
    };
    let Expression::ObjectExpression { members, .. } = expression.as_ref() else {
        panic!("expected object expression");
    };
    assert_eq!(members.len(), 2);
    assert!(matches!(members[0], ObjectMember::Error(_)));
    assert!(matches!(
        &members[1],
        ObjectMember::Pair {
            value: Expression::Literal(_),
            ..
        }
    ));
}

#[test]
fn test_broken_binding_keeps_its_neighbours() {
    let output = parse("let a = 1, b = , c = 3;");
    assert_eq!(output.diagnostics.len(), 1);
    let Statement::VarDeclaration(declaration) = &output.program.body[0] else {
        panic!("expected declaration");
    };
    assert_eq!(declaration.declarations.len(), 3);
    assert!(matches!(declaration.declarations[0], VariableDeclarator::Binding { .. }));
    assert!(matches!(&declaration.declarations[1], VariableDeclarator::Error(e) if e.text == "b ="));
    assert!(matches!(declaration.declarations[2], VariableDeclarator::Binding { .. }));
}

#[test]
fn test_missing_argument_separator() {
    let output = parse("f(1 2, 3)");
    assert_eq!(output.diagnostics.len(), 1);
    let Expression::CallExpression { arguments, .. } = expression_of(&output.program.body[0]) else {
        panic!("expected call");
    };
    assert_eq!(arguments.len(), 3);
    assert!(matches!(&arguments[1], Expression::Error(e) if e.text == "2"));
}

#[test]
fn test_broken_subscript_index() {
    let output = parse("a[+] = 1");
    assert_eq!(output.diagnostics.len(), 1);
    let Expression::AssignmentExpression { target, .. } = expression_of(&output.program.body[0]) else {
        panic!("expected assignment");
    };
    assert!(matches!(
        target.as_ref(),
        Expression::SubscriptExpression { index, .. } if matches!(index.as_ref(), Expression::Error(_))
    ));
}

#[test]
fn test_unclosed_call_at_end_of_input() {
    let output = parse("f(a, b");
    assert_eq!(output.diagnostics.len(), 1);
    assert!(output.diagnostics[0].message.contains("end of input"));
    assert!(matches!(
        expression_of(&output.program.body[0]),
        Expression::Error(e) if e.text == "f(a, b"
    ));
}

#[test]
fn test_invalid_assignment_target_keeps_value() {
    let output = parse("f() = 1");
    assert_eq!(output.diagnostics.len(), 1);
    assert_eq!(output.diagnostics[0].message, "invalid assignment target");
    assert!(matches!(
        expression_of(&output.program.body[0]),
        Expression::AssignmentExpression { target, value, .. }
            if matches!(target.as_ref(), Expression::Error(_))
                && matches!(value.as_ref(), Expression::Literal(_))
    ));
}

// =============================================================================
// Statement-level recovery
// =============================================================================

#[test]
fn test_missing_terminator_between_statements() {
    let output = parse("let a = 1 let b = 2;");
    assert_eq!(output.program.body.len(), 2);
    assert_eq!(output.diagnostics.len(), 1);
    assert_eq!(output.diagnostics[0].kind, DiagnosticKind::StructuralParseError);
    assert_eq!(output.diagnostics[0].severity, Severity::Error);
}

#[test]
fn test_parsing_resumes_after_broken_statement() {
    let output = parse("if (a { b; }\nc;");
    assert!(output
        .diagnostics
        .iter()
        .any(|d| d.kind == DiagnosticKind::StructuralParseError));
    assert!(matches!(output.program.body[0], Statement::Error(_)));
    assert!(matches!(
        output.program.body.last(),
        Some(Statement::ExpressionStatement { .. })
    ));
}

#[test]
fn test_recovery_inside_function_body() {
    let output = parse("function f() { let = ; return 1 }");
    assert_eq!(output.diagnostics.len(), 1);
    let Expression::FunctionExpression(function) = expression_of(&output.program.body[0]) else {
        panic!("expected function");
    };
    assert_eq!(function.body.body.len(), 2);
    assert!(matches!(
        function.body.body[1],
        Statement::ReturnStatement { argument: Some(_), .. }
    ));
}

#[test]
fn test_recovery_stops_at_case_label() {
    let output = parse("switch (x) { case 1: ) ; case 2: b }");
    let Statement::SwitchStatement { cases, .. } = &output.program.body[0] else {
        panic!("expected switch");
    };
    assert_eq!(cases.len(), 2);
    assert!(matches!(&cases[0].consequent[0], Statement::Error(e) if e.text == ") ;"));
    assert_eq!(cases[1].consequent.len(), 1);
}

#[test]
fn test_stray_closers_become_error_statements() {
    let output = parse("a;\n)\n]\nb;");
    let kinds: Vec<_> = output
        .program
        .body
        .iter()
        .map(|s| matches!(s, Statement::Error(_)))
        .collect();
    assert_eq!(kinds, [false, true, true, false]);
}

// =============================================================================
// Lexical errors
// =============================================================================

#[test]
fn test_unterminated_string_reported_once() {
    let output = parse("a = 'abc\nb = 2");
    assert_eq!(output.diagnostics.len(), 1);
    assert_eq!(output.diagnostics[0].kind, DiagnosticKind::LexError);
    assert_eq!(output.program.body.len(), 2);
}

#[test]
fn test_invalid_characters_reported_once() {
    let output = parse("a @ b");
    assert_eq!(output.diagnostics.len(), 1);
    assert_eq!(output.diagnostics[0].kind, DiagnosticKind::LexError);
    assert!(matches!(
        expression_of(&output.program.body[1]),
        Expression::Error(e) if e.text == "@ b"
    ));
}

// =============================================================================
// Limits and modes
// =============================================================================

#[test]
fn test_nesting_limit_is_structural() {
    let source = format!("{}a{}", "(".repeat(100), ")".repeat(100));
    let options = ParseOptions {
        max_nesting_depth: 32,
        ..ParseOptions::default()
    };
    let output = parse_with_options(&source, options);
    assert_eq!(output.program.body.len(), 1);
    assert!(matches!(output.program.body[0], Statement::Error(_)));
    assert_eq!(output.diagnostics.len(), 1);
    assert!(output.diagnostics[0].message.contains("32"));
}

#[test]
fn test_default_nesting_limit_stops_deep_brackets() {
    let sources = [
        format!("x = {}1{}", "[".repeat(250), "]".repeat(250)),
        format!("{}1{}", "f(".repeat(250), ")".repeat(250)),
        format!("{}a{}", "(".repeat(250), ")".repeat(250)),
        format!("y = a{}", "[b".repeat(250) + &"]".repeat(250)),
    ];
    for source in &sources {
        let output = parse(source);
        assert_eq!(output.program.body.len(), 1);
        assert!(matches!(output.program.body[0], Statement::Error(_)));
        assert_eq!(output.diagnostics.len(), 1);
        assert_eq!(output.diagnostics[0].kind, DiagnosticKind::StructuralParseError);
        assert!(output.diagnostics[0].message.contains("128"));
    }
}

#[test]
fn test_default_nesting_limit_stops_deep_blocks() {
    let source = format!("{}a{}", "{".repeat(250), "}".repeat(250));
    let output = parse(&source);
    assert_eq!(output.program.body.len(), 1);
    assert!(matches!(output.program.body[0], Statement::Block(_)));
    assert_eq!(output.diagnostics.len(), 1);
    assert!(output.diagnostics[0].message.contains("128"));
}

#[test]
fn test_nesting_below_default_limit_parses() {
    let source = format!("x = {}1{}", "[".repeat(40), "]".repeat(40));
    let output = parse(&source);
    assert!(output.diagnostics.is_empty());
}

#[test]
fn test_diagnostics_are_capped() {
    let options = ParseOptions {
        max_diagnostics: 2,
        ..ParseOptions::default()
    };
    let output = parse_with_options("}\n}\n}\n}\n}", options);
    assert_eq!(output.program.body.len(), 5);
    assert_eq!(output.diagnostics.len(), 2);
}

#[test]
fn test_strict_mode_stops_at_first_error() {
    let options = ParseOptions {
        tolerant: false,
        ..ParseOptions::default()
    };
    let output = parse_with_options("a;\nb = ;\nc;\nd;", options);
    assert_eq!(output.diagnostics.len(), 1);
    assert_eq!(output.program.body.len(), 2);
    assert!(matches!(output.program.body[1], Statement::Error(_)));
    assert!(output.into_result().is_err());
}
