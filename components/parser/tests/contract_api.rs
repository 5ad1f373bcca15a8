//! Contract tests for the front-end API
//!
//! These tests pin down the public surface: lexer, parser entry points,
//! options, precedence injection and serialization.

use core_types::{DiagnosticKind, Severity, Span};
use js_frontend::ast::Statement;
use js_frontend::ast_dump::dump_program;
use js_frontend::precedence::{Associativity, Fixity, Operator, OperatorInfo, Precedence};
use js_frontend::{
    parse, parse_bytes, parse_with_options, Keyword, Lexer, ParseOptions, Parser, PrecedenceTable, Punctuator,
    TokenKind,
};

// =============================================================================
// Lexer Contract Tests
// =============================================================================

#[test]
fn test_lexer_next_token_reports_kind_text_and_span() {
    let mut lexer = Lexer::new("let x = 42;");
    let token = lexer.next_token();
    assert_eq!(token.kind, TokenKind::Keyword(Keyword::Let));
    assert_eq!(token.text, "let");
    assert_eq!(token.span, Span::new(0, 3));
    assert!(token.error.is_none());
}

#[test]
fn test_lexer_repeats_eof() {
    let mut lexer = Lexer::new("a");
    lexer.next_token();
    assert_eq!(lexer.next_token().kind, TokenKind::EOF);
    assert_eq!(lexer.next_token().kind, TokenKind::EOF);
}

#[test]
fn test_lexer_iterator_ends_after_eof() {
    let tokens: Vec<_> = Lexer::new("a + b").collect();
    assert_eq!(tokens.len(), 4);
    assert_eq!(tokens[1].kind, TokenKind::Punctuator(Punctuator::Plus));
    assert_eq!(tokens[3].kind, TokenKind::EOF);
}

#[test]
fn test_lexer_tracks_positions() {
    let tokens: Vec<_> = Lexer::new("a\n  b").collect();
    let b = tokens.iter().find(|t| t.text == "b").unwrap();
    assert_eq!((b.position.line, b.position.column, b.position.offset), (2, 3, 4));
}

// =============================================================================
// Parser Contract Tests
// =============================================================================

#[test]
fn test_parser_new_and_parse() {
    let output = Parser::new("let x = 42;").parse();
    assert_eq!(output.program.body.len(), 1);
    assert_eq!(output.program.span, Span::new(0, 11));
    assert!(output.diagnostics.is_empty());
}

#[test]
fn test_parse_never_fails_on_garbage() {
    let output = parse(")))(((}}}{{{");
    assert!(!output.program.body.is_empty());
    assert!(output.has_errors());
}

#[test]
fn test_into_result_separates_clean_and_broken_parses() {
    assert!(parse("a + b").into_result().is_ok());

    let err = parse("a +").into_result().unwrap_err();
    assert_eq!(err.to_string(), "1 syntax error(s)");
    assert!(err.0[0].to_string().starts_with("1:4: error:"));
}

#[test]
fn test_warnings_do_not_fail_into_result() {
    let options = ParseOptions {
        allow_trailing_statement: false,
        ..ParseOptions::default()
    };
    let output = parse_with_options("a", options);
    assert_eq!(output.diagnostics.len(), 1);
    assert_eq!(output.diagnostics[0].severity, Severity::Warning);
    assert!(output.into_result().is_ok());
}

#[test]
fn test_diagnostics_carry_positions() {
    let output = parse("a;\n  b = ;");
    let diagnostic = &output.diagnostics[0];
    assert_eq!(diagnostic.kind, DiagnosticKind::RecoverableParseError);
    assert_eq!(diagnostic.position.line, 2);
    assert_eq!(diagnostic.position.column, 7);
    assert_eq!(diagnostic.span, Span::new(9, 10));
}

#[test]
fn test_parse_bytes_accepts_utf8() {
    let output = parse_bytes("let s = 'héllo';".as_bytes());
    assert!(output.diagnostics.is_empty());
    assert!(matches!(output.program.body[0], Statement::VarDeclaration(_)));
}

#[test]
fn test_parse_bytes_rejects_invalid_utf8() {
    let output = parse_bytes(&[0x61, 0x20, 0xc3, 0x28]);
    assert!(output.program.body.is_empty());
    assert_eq!(output.diagnostics.len(), 1);
    assert_eq!(output.diagnostics[0].kind, DiagnosticKind::InvalidInput);
    assert_eq!(output.diagnostics[0].span, Span::new(2, 4));
}

#[test]
fn test_empty_source_is_a_warning() {
    let output = parse("");
    assert!(output.program.body.is_empty());
    assert_eq!(output.diagnostics.len(), 1);
    assert_eq!(output.diagnostics[0].kind, DiagnosticKind::InvalidInput);
    assert_eq!(output.diagnostics[0].severity, Severity::Warning);
}

#[test]
fn test_comments_are_collected_in_order() {
    let output = parse("/* a */ x; // b\n// c");
    let texts: Vec<_> = output.program.comments.iter().map(|c| c.text.as_str()).collect();
    assert_eq!(texts, ["/* a */", "// b", "// c"]);

    let options = ParseOptions {
        collect_comments: false,
        ..ParseOptions::default()
    };
    assert!(parse_with_options("x; // b", options).program.comments.is_empty());
}

// =============================================================================
// Precedence Injection
// =============================================================================

static SWAPPED_ENTRIES: &[(Operator, OperatorInfo)] = &[
    (
        Operator::Punctuator(Punctuator::Plus, Fixity::Infix),
        OperatorInfo::new(Precedence::TIMES, Associativity::Left, Fixity::Infix),
    ),
    (
        Operator::Punctuator(Punctuator::Star, Fixity::Infix),
        OperatorInfo::new(Precedence::PLUS, Associativity::Left, Fixity::Infix),
    ),
];

static SWAPPED: PrecedenceTable = PrecedenceTable::from_entries(SWAPPED_ENTRIES);

#[test]
fn test_custom_precedence_table() {
    let output = Parser::new("1 + 2 * 3").with_precedence_table(&SWAPPED).parse();
    assert_eq!(
        dump_program(&output.program),
        "(program (expression_statement (binary \"*\" (binary \"+\" (number 1) (number 2)) (number 3))))"
    );
}

#[test]
fn test_standard_table_is_default() {
    let default = parse("a = b ? c : d || e");
    let explicit = Parser::new("a = b ? c : d || e")
        .with_precedence_table(&PrecedenceTable::STANDARD)
        .parse();
    assert_eq!(default, explicit);
}

// =============================================================================
// Serialization
// =============================================================================

#[test]
fn test_program_serializes_to_json() {
    let output = parse("f(1)");
    let json = serde_json::to_value(&output.program).unwrap();
    let statement = &json["body"][0]["ExpressionStatement"];
    assert_eq!(statement["span"]["start"], 0);
    assert_eq!(statement["span"]["end"], 4);
    assert!(statement["expression"]["CallExpression"].is_object());
}

#[test]
fn test_options_round_trip_through_json() {
    let options: ParseOptions = serde_json::from_str(r#"{"max_diagnostics": 5}"#).unwrap();
    assert_eq!(options.max_diagnostics, 5);
    assert!(options.tolerant);

    let json = serde_json::to_string(&options).unwrap();
    let back: ParseOptions = serde_json::from_str(&json).unwrap();
    assert_eq!(back, options);
}
