//! Golden-tree fixtures
//!
//! Each fixture parses a source snippet and compares the S-expression dump
//! of the resulting tree. Together they cover every node variant.

use js_frontend::ast_dump::dump_program;
use js_frontend::parse;

fn assert_tree(source: &str, expected: &str) {
    let output = parse(source);
    assert!(
        output.diagnostics.is_empty(),
        "unexpected diagnostics for {source:?}: {:?}",
        output.diagnostics
    );
    assert_eq!(dump_program(&output.program), expected, "source: {source:?}");
}

fn assert_tree_with_errors(source: &str, expected: &str) {
    let output = parse(source);
    assert!(output.has_errors(), "expected errors for {source:?}");
    assert_eq!(dump_program(&output.program), expected, "source: {source:?}");
}

// =============================================================================
// Operators
// =============================================================================

#[test]
fn test_golden_precedence() {
    assert_tree(
        "1 + 2 * 3",
        "(program (expression_statement (binary \"+\" (number 1) (binary \"*\" (number 2) (number 3)))))",
    );
}

#[test]
fn test_golden_relational_binds_tighter_than_additive() {
    assert_tree(
        "a + b < c",
        "(program (expression_statement (binary \"+\" (identifier a) (binary \"<\" (identifier b) (identifier c)))))",
    );
}

#[test]
fn test_golden_right_associative_assignment() {
    assert_tree(
        "a = b = c",
        "(program (expression_statement (assign (identifier a) (assign (identifier b) (identifier c)))))",
    );
}

#[test]
fn test_golden_nested_conditional() {
    assert_tree(
        "a ? b : c ? d : e",
        "(program (expression_statement (conditional (identifier a) (identifier b) \
         (conditional (identifier c) (identifier d) (identifier e)))))",
    );
}

#[test]
fn test_golden_division_and_regex() {
    assert_tree(
        "a / b",
        "(program (expression_statement (binary \"/\" (identifier a) (identifier b))))",
    );
    assert_tree(
        "f(/ab+c/)",
        "(program (expression_statement (call (identifier f) (regex \"ab+c\" \"\"))))",
    );
}

#[test]
fn test_golden_compound_assignment_sequence() {
    assert_tree(
        "x += 1, y -= 2",
        "(program (expression_statement (sequence (assign \"+=\" (identifier x) (number 1)) \
         (assign \"-=\" (identifier y) (number 2)))))",
    );
}

#[test]
fn test_golden_keyword_binary_operators() {
    assert_tree(
        "a in b && c instanceof D",
        "(program (expression_statement (binary \"&&\" (binary \"in\" (identifier a) (identifier b)) \
         (binary \"instanceof\" (identifier c) (identifier D)))))",
    );
}

#[test]
fn test_golden_unary_operators() {
    assert_tree(
        "!a && typeof b",
        "(program (expression_statement (binary \"&&\" (unary \"!\" (identifier a)) (unary \"typeof\" (identifier b)))))",
    );
    assert_tree(
        "delete o.p;\nvoid 0;\n~x;\n-y;\n+z",
        "(program (expression_statement (unary \"delete\" (member (identifier o) p))) \
         (expression_statement (unary \"void\" (number 0))) \
         (expression_statement (unary \"~\" (identifier x))) \
         (expression_statement (unary \"-\" (identifier y))) \
         (expression_statement (unary \"+\" (identifier z))))",
    );
}

#[test]
fn test_golden_update_expressions() {
    assert_tree(
        "++i;\ni--",
        "(program (expression_statement (update \"++\" prefix (identifier i))) \
         (expression_statement (update \"--\" postfix (identifier i))))",
    );
}

// =============================================================================
// Member access, calls and primaries
// =============================================================================

#[test]
fn test_golden_new_with_arguments() {
    assert_tree(
        "new Foo(1)",
        "(program (expression_statement (new (call (identifier Foo) (number 1)))))",
    );
}

#[test]
fn test_golden_member_chain() {
    assert_tree(
        "a.b[c](d)",
        "(program (expression_statement (call (subscript (member (identifier a) b) (identifier c)) (identifier d))))",
    );
}

#[test]
fn test_golden_leading_dot_chain() {
    assert_tree(
        "promise\n  .then(f)\n  .catch(g)",
        "(program (expression_statement (call (member (call (member (identifier promise) then) (identifier f)) catch) \
         (identifier g))))",
    );
}

#[test]
fn test_golden_parenthesized_sequence() {
    assert_tree(
        "(a, b)",
        "(program (expression_statement (paren (sequence (identifier a) (identifier b)))))",
    );
}

#[test]
fn test_golden_array_of_literals() {
    assert_tree(
        "[1, 'x', `t`, true, false, null, undefined, this]",
        "(program (expression_statement (array (number 1) (string 'x') (template `t`) (boolean true) \
         (boolean false) (null) (undefined) (this))))",
    );
}

#[test]
fn test_golden_object_members() {
    assert_tree(
        "({k: 1, 'q': 2, 3: 4, m() {}, get g() {}, set s(v) {}, *gen() {}, async am() {}})",
        "(program (expression_statement (paren (object (pair (identifier k) (number 1)) \
         (pair (string 'q') (number 2)) (pair (number 3) (number 4)) \
         (method m (params) (block)) (method get g (params) (block)) (method set s (params v) (block)) \
         (method * gen (params) (block)) (method async am (params) (block))))))",
    );
}

// =============================================================================
// Functions and classes
// =============================================================================

#[test]
fn test_golden_function_declaration() {
    assert_tree(
        "function f(a, b) { return a }",
        "(program (expression_statement (function f (params a b) (block (return (identifier a))))))",
    );
}

#[test]
fn test_golden_generator_function() {
    assert_tree(
        "function* g() { yield 1; }",
        "(program (expression_statement (generator g (params) (block (yield (number 1))))))",
    );
}

#[test]
fn test_golden_async_function_with_await() {
    assert_tree(
        "async function h() { await p; }",
        "(program (expression_statement (function async h (params) (block (expression_statement (await (identifier p)))))))",
    );
}

#[test]
fn test_golden_arrow_functions() {
    assert_tree(
        "x => x * 2;\n(a, b) => { };\nasync () => 1",
        "(program (expression_statement (arrow (params x) (binary \"*\" (identifier x) (number 2)))) \
         (expression_statement (arrow (params a b) (block))) \
         (expression_statement (arrow async (params) (number 1))))",
    );
}

#[test]
fn test_golden_class_with_methods() {
    assert_tree(
        "class A extends B { constructor(x) { super(x); } static create() { return new A(1); } get v() { return this.x; } }",
        "(program (expression_statement (class A (extends (identifier B)) \
         (method constructor (params x) (block (expression_statement (call (super) (identifier x))))) \
         (method static create (params) (block (return (new (call (identifier A) (number 1)))))) \
         (method get v (params) (block (return (member (this) x)))))))",
    );
}

// =============================================================================
// Statements
// =============================================================================

#[test]
fn test_golden_variable_declarations() {
    assert_tree(
        "var a = 1, b;\nlet c;\nconst d = 2;",
        "(program (var_declaration var (binding (identifier a) (number 1)) (binding (identifier b))) \
         (var_declaration let (binding (identifier c))) \
         (var_declaration const (binding (identifier d) (number 2))))",
    );
}

#[test]
fn test_golden_if_else_and_block() {
    assert_tree(
        "if (a) b; else { c }",
        "(program (if (identifier a) (expression_statement (identifier b)) (block (expression_statement (identifier c)))))",
    );
}

#[test]
fn test_golden_dangling_else() {
    assert_tree(
        "if (a) if (b) c; else d;",
        "(program (if (identifier a) (if (identifier b) (expression_statement (identifier c)) \
         (expression_statement (identifier d)))))",
    );
}

#[test]
fn test_golden_switch() {
    assert_tree(
        "switch (x) { case 1: a; break; default: b }",
        "(program (switch (identifier x) (case (number 1) (expression_statement (identifier a)) (break)) \
         (default (expression_statement (identifier b)))))",
    );
}

#[test]
fn test_golden_for_loops() {
    assert_tree(
        "for (let i = 0; i < 3; i++) {}",
        "(program (for (var_declaration let (binding (identifier i) (number 0))) \
         (binary \"<\" (identifier i) (number 3)) (update \"++\" postfix (identifier i)) (block)))",
    );
    assert_tree(
        "for (k in o) ;",
        "(program (for_in (identifier k) (identifier o) (empty)))",
    );
    assert_tree(
        "for (const v of list) f(v)",
        "(program (for_of const (identifier v) (identifier list) (expression_statement (call (identifier f) (identifier v)))))",
    );
}

#[test]
fn test_golden_while_and_do() {
    assert_tree(
        "while (a) a--;\ndo { a++ } while (a < 1);",
        "(program (while (identifier a) (expression_statement (update \"--\" postfix (identifier a)))) \
         (do (block (expression_statement (update \"++\" postfix (identifier a)))) (binary \"<\" (identifier a) (number 1))))",
    );
}

#[test]
fn test_golden_try_statements() {
    assert_tree(
        "try { a() } catch (e) { b(e) } finally { c() }\ntry {} catch {}",
        "(program (try (block (expression_statement (call (identifier a)))) \
         (catch (identifier e) (block (expression_statement (call (identifier b) (identifier e))))) \
         (finally (block (expression_statement (call (identifier c)))))) \
         (try (block) (catch (block))))",
    );
}

#[test]
fn test_golden_jumps_and_throw() {
    assert_tree(
        "while (1) { continue; break }\nthrow new Error('x')",
        "(program (while (number 1) (block (continue) (break))) \
         (throw (new (call (identifier Error) (string 'x')))))",
    );
}

#[test]
fn test_golden_return_without_argument() {
    assert_tree(
        "function f() { return }\n;",
        "(program (expression_statement (function f (params) (block (return)))) (empty))",
    );
}

#[test]
fn test_golden_imports() {
    assert_tree(
        "import a, * as ns from 'm';\nimport { x, y as z } from 'm';\nimport 'side';",
        "(program (import (identifier a) (namespace ns) (string 'm')) \
         (import (named (specifier x) (specifier y z)) (string 'm')) \
         (import (string 'side')))",
    );
}

#[test]
fn test_golden_exports() {
    assert_tree(
        "export * from 'm';\nexport { a, b as c } from 'm';\nexport default 42;\nexport let n = 1;\n\
         export function f() {}\nexport class K {}",
        "(program (export * (string 'm')) \
         (export (named (specifier a) (specifier b c)) (string 'm')) \
         (export default (number 42)) \
         (export (var_declaration let (binding (identifier n) (number 1)))) \
         (export (function f (params) (block))) \
         (export (class K)))",
    );
}

// =============================================================================
// Error nodes
// =============================================================================

#[test]
fn test_golden_error_declarator() {
    assert_tree_with_errors("let = 1;", "(program (var_declaration let (error \"= 1\")))");
}

#[test]
fn test_golden_error_expression() {
    assert_tree_with_errors("a +;", "(program (expression_statement (error \"a +\")))");
}

#[test]
fn test_golden_error_statement() {
    assert_tree_with_errors("}", "(program (error \"}\"))");
}

#[test]
fn test_golden_error_argument() {
    assert_tree_with_errors(
        "f(a b)",
        "(program (expression_statement (call (identifier f) (identifier a) (error \"b\"))))",
    );
}

#[test]
fn test_golden_error_before_closing_paren() {
    assert_tree_with_errors(
        "if (a b) c;",
        "(program (if (error \"a b\") (expression_statement (identifier c))))",
    );
}

#[test]
fn test_golden_error_before_closing_bracket() {
    assert_tree_with_errors(
        "x = a[b c];",
        "(program (expression_statement (assign (identifier x) (subscript (identifier a) (error \"b c\")))))",
    );
}

#[test]
fn test_golden_error_in_for_test() {
    assert_tree_with_errors("for (;a b;) {}", "(program (for _ (error \"a b\") _ (block)))");
}

#[test]
fn test_golden_keyword_property_division() {
    assert_tree(
        "x = obj.default / 2;",
        "(program (expression_statement (assign (identifier x) (binary \"/\" (member (identifier obj) default) (number 2)))))",
    );
}
