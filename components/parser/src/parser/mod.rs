//! Recursive descent parser for JavaScript
//!
//! The statement parser (`statements.rs`) is the entry point and delegates
//! every expression position to the precedence-climbing expression parser
//! (`expressions.rs`). Both route mismatches through the recovery helpers in
//! `recovery.rs`, so a parse always yields a tree plus diagnostics.

mod expressions;
mod recovery;
mod statements;

pub use recovery::TolerantPoint;

use crate::ast::{Comment, CommentKind, Identifier, Program};
use crate::error::{unexpected_token, ParseError, SyntaxErrors};
use crate::lexer::{Keyword, Lexer, Punctuator, Token, TokenKind};
use crate::precedence::PrecedenceTable;
use core_types::{Diagnostic, DiagnosticKind, Severity, SourcePosition, Span};
use serde::{Deserialize, Serialize};

/// Result type used throughout the parser
pub type ParseResult<T> = Result<T, ParseError>;

/// Parser configuration
///
/// # Examples
///
/// ```
/// use js_frontend::{parse_with_options, ParseOptions};
///
/// let options = ParseOptions {
///     tolerant: false,
///     ..ParseOptions::default()
/// };
/// let output = parse_with_options("let = 1;", options);
/// assert_eq!(output.diagnostics.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    /// Recover from errors; when false the first error stops parsing
    pub tolerant: bool,
    /// Let the last statement of a list omit its terminator
    pub allow_trailing_statement: bool,
    /// Keep comment extras on the program
    pub collect_comments: bool,
    /// Diagnostics beyond this count are dropped
    pub max_diagnostics: usize,
    /// Recursion limit. Every expression, statement and bracketed region
    /// counts one level.
    pub max_nesting_depth: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            tolerant: true,
            allow_trailing_statement: true,
            collect_comments: true,
            max_diagnostics: 100,
            max_nesting_depth: 128,
        }
    }
}

/// A finished parse: the tree (possibly with error nodes) and diagnostics
/// in source order of discovery
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParseOutput {
    /// Root node
    pub program: Program,
    /// Problems found while lexing and parsing
    pub diagnostics: Vec<Diagnostic>,
}

impl ParseOutput {
    /// True if any diagnostic has error severity
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }

    /// Strict view of the parse: the program if no error was reported
    pub fn into_result(self) -> Result<Program, SyntaxErrors> {
        if self.has_errors() {
            Err(SyntaxErrors(
                self.diagnostics.into_iter().filter(Diagnostic::is_error).collect(),
            ))
        } else {
            Ok(self.program)
        }
    }
}

/// What closes the statement list being parsed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ListEnd {
    /// Top level
    Eof,
    /// Block or function body
    Brace,
    /// Consequent of a `case`/`default` clause
    SwitchCase,
}

/// Grammar context threaded through the descent
#[derive(Debug, Clone, Copy)]
pub(crate) struct Context {
    /// A line break may terminate the current construct
    pub(crate) newlines_significant: bool,
    /// `in` is a binary operator (false in for-headers)
    pub(crate) allow_in: bool,
    /// Closer of the innermost statement list
    pub(crate) list_end: ListEnd,
}

impl Context {
    const TOP_LEVEL: Context = Context {
        newlines_significant: true,
        allow_in: true,
        list_end: ListEnd::Eof,
    };
}

/// JavaScript parser
pub struct Parser<'a> {
    source: &'a str,
    lexer: Lexer<'a>,
    current: Token<'a>,
    /// A significant line break precedes `current`
    newline_before: bool,
    /// End offset of the last consumed token
    prev_end: usize,
    ctx: Context,
    options: ParseOptions,
    table: &'static PrecedenceTable,
    diagnostics: Vec<Diagnostic>,
    comments: Vec<Comment>,
    depth: usize,
    /// Set by the first error when not tolerant
    aborted: bool,
}

impl<'a> Parser<'a> {
    /// Create a new parser for the given source code
    pub fn new(source: &'a str) -> Self {
        Self::with_options(source, ParseOptions::default())
    }

    /// Create a parser with explicit options
    pub fn with_options(source: &'a str, options: ParseOptions) -> Self {
        let mut parser = Self {
            source,
            lexer: Lexer::new(source),
            current: Token {
                kind: TokenKind::EOF,
                text: "",
                span: Span::empty_at(0),
                position: SourcePosition::START,
                error: None,
            },
            newline_before: false,
            prev_end: 0,
            ctx: Context::TOP_LEVEL,
            options,
            table: &PrecedenceTable::STANDARD,
            diagnostics: Vec::new(),
            comments: Vec::new(),
            depth: 0,
            aborted: false,
        };
        parser.bump();
        parser
    }

    /// Replace the operator precedence table
    pub fn with_precedence_table(mut self, table: &'static PrecedenceTable) -> Self {
        self.table = table;
        self
    }

    /// Parse the source into a program. Never fails; problems are reported
    /// as diagnostics next to a best-effort tree.
    pub fn parse(mut self) -> ParseOutput {
        let empty = self.at_eof();
        let body = self.parse_statement_list(ListEnd::Eof);

        if empty {
            self.report(
                DiagnosticKind::InvalidInput,
                Severity::Warning,
                "empty source".to_string(),
                Span::new(0, self.source.len()),
            );
        }

        ParseOutput {
            program: Program {
                body,
                comments: self.comments,
                span: Span::new(0, self.source.len()),
            },
            diagnostics: self.diagnostics,
        }
    }

    // ----- token cursor -----

    /// Consume the current token and return it
    pub(crate) fn advance(&mut self) -> Token<'a> {
        let token = self.current;
        self.bump();
        token
    }

    /// Move to the next significant token, collecting extras
    fn bump(&mut self) {
        self.prev_end = self.current.span.end;
        self.newline_before = false;
        loop {
            let token = self.lexer.next_token();
            match token.kind {
                TokenKind::LineBreak => self.newline_before = true,
                TokenKind::Comment => {
                    self.record_lex_error(&token);
                    if self.options.collect_comments {
                        self.comments.push(Comment {
                            kind: if token.text.starts_with("//") {
                                CommentKind::Line
                            } else {
                                CommentKind::Block
                            },
                            text: token.text.to_string(),
                            span: token.span,
                        });
                    }
                }
                _ => {
                    self.record_lex_error(&token);
                    self.current = token;
                    return;
                }
            }
        }
    }

    /// Next significant token after `current`, without consuming anything
    pub(crate) fn peek(&self) -> Token<'a> {
        self.peek_nth(0)
    }

    /// The `n`th significant token after `current` (0-based)
    pub(crate) fn peek_nth(&self, n: usize) -> Token<'a> {
        let mut lexer = self.lexer.clone();
        let mut remaining = n;
        loop {
            let token = lexer.next_token();
            if token.kind.is_extra() {
                continue;
            }
            if remaining == 0 || token.kind == TokenKind::EOF {
                return token;
            }
            remaining -= 1;
        }
    }

    /// Re-lex the current `/` or `/=` as a regex literal
    pub(crate) fn rescan_current_as_regex(&mut self) {
        let token = self.lexer.rescan_regex(&self.current);
        self.record_lex_error(&token);
        self.current = token;
    }

    pub(crate) fn at_eof(&self) -> bool {
        self.current.kind == TokenKind::EOF
    }

    pub(crate) fn check_punctuator(&self, p: Punctuator) -> bool {
        self.current.is_punctuator(p)
    }

    pub(crate) fn check_keyword(&self, k: Keyword) -> bool {
        self.current.is_keyword(k)
    }

    /// Current token is the contextual word `name`
    pub(crate) fn check_word(&self, name: &str) -> bool {
        self.current.is_word(name)
    }

    /// Consume the punctuator if present
    pub(crate) fn eat_punctuator(&mut self, p: Punctuator) -> bool {
        if self.check_punctuator(p) {
            self.advance();
            true
        } else {
            false
        }
    }

    pub(crate) fn expect_punctuator(&mut self, p: Punctuator) -> ParseResult<Token<'a>> {
        if self.check_punctuator(p) {
            Ok(self.advance())
        } else {
            Err(unexpected_token(&format!("'{}'", p.as_str()), &self.current))
        }
    }

    pub(crate) fn expect_keyword(&mut self, k: Keyword) -> ParseResult<Token<'a>> {
        if self.check_keyword(k) {
            Ok(self.advance())
        } else {
            Err(unexpected_token(&format!("'{}'", k.as_str()), &self.current))
        }
    }

    pub(crate) fn expect_word(&mut self, name: &str) -> ParseResult<Token<'a>> {
        if self.check_word(name) {
            Ok(self.advance())
        } else {
            Err(unexpected_token(&format!("'{}'", name), &self.current))
        }
    }

    /// Identifier in a binding or reference position
    pub(crate) fn expect_identifier(&mut self) -> ParseResult<Identifier> {
        if self.current.kind == TokenKind::Identifier {
            let token = self.advance();
            Ok(Identifier {
                name: token.text.to_string(),
                span: token.span,
            })
        } else {
            Err(unexpected_token("identifier", &self.current))
        }
    }

    /// Property or method name: identifiers and reserved words alike
    pub(crate) fn expect_identifier_name(&mut self) -> ParseResult<Identifier> {
        match self.current.kind {
            TokenKind::Identifier | TokenKind::Keyword(_) => {
                let token = self.advance();
                Ok(Identifier {
                    name: token.text.to_string(),
                    span: token.span,
                })
            }
            _ => Err(unexpected_token("property name", &self.current)),
        }
    }

    /// Span from `start` to the end of the last consumed token
    pub(crate) fn finish(&self, start: usize) -> Span {
        Span::new(start, self.prev_end.max(start))
    }

    // ----- context -----

    /// Run `f` inside brackets: line breaks are insignificant and `in` is
    /// an operator again. Brackets count against the nesting limit.
    pub(crate) fn nested<T>(&mut self, f: impl FnOnce(&mut Self) -> ParseResult<T>) -> ParseResult<T> {
        self.guarded(|p| {
            let saved = p.ctx;
            p.ctx.newlines_significant = false;
            p.ctx.allow_in = true;
            let result = f(p);
            p.ctx = saved;
            result
        })
    }

    /// Run `f` with `in` disabled as a binary operator
    pub(crate) fn without_in<T>(&mut self, f: impl FnOnce(&mut Self) -> ParseResult<T>) -> ParseResult<T> {
        let saved = self.ctx.allow_in;
        self.ctx.allow_in = false;
        let result = f(self);
        self.ctx.allow_in = saved;
        result
    }

    /// Recursion guard around `f`
    pub(crate) fn guarded<T>(&mut self, f: impl FnOnce(&mut Self) -> ParseResult<T>) -> ParseResult<T> {
        if self.depth >= self.options.max_nesting_depth {
            return Err(ParseError::TooDeep {
                limit: self.options.max_nesting_depth,
                span: self.current.span,
            });
        }
        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        result
    }

    /// True if the current token closes the innermost statement list
    pub(crate) fn at_list_end(&self) -> bool {
        match self.ctx.list_end {
            ListEnd::Eof => self.at_eof(),
            ListEnd::Brace => self.at_eof() || self.check_punctuator(Punctuator::RBrace),
            ListEnd::SwitchCase => {
                self.at_eof()
                    || self.check_punctuator(Punctuator::RBrace)
                    || self.check_keyword(Keyword::Case)
                    || self.check_keyword(Keyword::Default)
            }
        }
    }

    // ----- diagnostics -----

    /// Record a diagnostic. In non-tolerant mode the first error stops the
    /// parse and later diagnostics are dropped.
    pub(crate) fn report(&mut self, kind: DiagnosticKind, severity: Severity, message: String, span: Span) {
        if self.aborted || self.diagnostics.len() >= self.options.max_diagnostics {
            return;
        }
        let position = position_at(self.source, span.start);
        self.diagnostics.push(Diagnostic {
            kind,
            severity,
            message,
            span,
            position,
        });
        if severity == Severity::Error && !self.options.tolerant {
            self.aborted = true;
        }
    }

    /// Report a parse error unless the lexer already reported its token
    pub(crate) fn report_parse_error(&mut self, kind: DiagnosticKind, err: &ParseError) {
        if !err.is_lexical() {
            self.report(kind, Severity::Error, err.to_string(), err.span());
        }
    }

    fn record_lex_error(&mut self, token: &Token<'a>) {
        if let Some(error) = token.error {
            self.report(
                DiagnosticKind::LexError,
                Severity::Error,
                error.to_string(),
                token.span,
            );
        }
    }
}

/// Line/column of a byte offset
pub(crate) fn position_at(source: &str, offset: usize) -> SourcePosition {
    let prefix = source.get(..offset).unwrap_or(source);
    let line = prefix.matches('\n').count() as u32 + 1;
    let line_start = prefix.rfind('\n').map_or(0, |i| i + 1);
    let column = prefix[line_start..].chars().count() as u32 + 1;
    SourcePosition {
        line,
        column,
        offset: prefix.len(),
    }
}

/// Parse `source` with default options
pub fn parse(source: &str) -> ParseOutput {
    Parser::new(source).parse()
}

/// Parse `source` with explicit options
pub fn parse_with_options(source: &str, options: ParseOptions) -> ParseOutput {
    Parser::with_options(source, options).parse()
}

/// Parse a raw byte buffer. Input that is not UTF-8 yields an empty program
/// and a single error.
pub fn parse_bytes(bytes: &[u8]) -> ParseOutput {
    match std::str::from_utf8(bytes) {
        Ok(source) => parse(source),
        Err(err) => {
            let valid = err.valid_up_to();
            let prefix = std::str::from_utf8(&bytes[..valid]).unwrap_or_default();
            let span = Span::new(valid, bytes.len());
            ParseOutput {
                program: Program::empty(Span::new(0, bytes.len())),
                diagnostics: vec![Diagnostic {
                    kind: DiagnosticKind::InvalidInput,
                    severity: Severity::Error,
                    message: format!("input is not valid UTF-8 (invalid byte at offset {valid})"),
                    span,
                    position: position_at(prefix, valid),
                }],
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parser_skips_extras() {
        let mut parser = Parser::new("// c\na /* b */ + b");
        assert_eq!(parser.current.text, "a");
        parser.advance();
        assert!(parser.check_punctuator(Punctuator::Plus));
        assert_eq!(parser.comments.len(), 2);
    }

    #[test]
    fn test_parser_tracks_newline_before() {
        let mut parser = Parser::new("a\nb");
        assert!(!parser.newline_before);
        parser.advance();
        assert!(parser.newline_before);
        assert_eq!(parser.prev_end, 1);
    }

    #[test]
    fn test_peek_does_not_consume() {
        let parser = Parser::new("a => b");
        assert!(parser.peek().is_punctuator(Punctuator::Arrow));
        assert_eq!(parser.peek_nth(1).text, "b");
        assert_eq!(parser.current.text, "a");
    }

    #[test]
    fn test_position_at() {
        let pos = position_at("ab\ncd", 4);
        assert_eq!((pos.line, pos.column, pos.offset), (2, 2, 4));
        assert_eq!(position_at("", 0), SourcePosition::START);
    }

    #[test]
    fn test_options_deserialize_with_defaults() {
        let options: ParseOptions = serde_json::from_str(r#"{"tolerant": false}"#).unwrap();
        assert!(!options.tolerant);
        assert_eq!(options.max_nesting_depth, 128);
    }

    #[test]
    fn test_parse_bytes_rejects_invalid_utf8() {
        let output = parse_bytes(b"let x\xff = 1;");
        assert!(output.program.body.is_empty());
        assert_eq!(output.diagnostics.len(), 1);
        assert_eq!(output.diagnostics[0].kind, DiagnosticKind::InvalidInput);
        assert_eq!(output.diagnostics[0].position.column, 6);
    }

    #[test]
    fn test_empty_source_warns() {
        let output = parse("   \n ");
        assert!(output.program.body.is_empty());
        assert_eq!(output.diagnostics.len(), 1);
        assert_eq!(output.diagnostics[0].severity, Severity::Warning);
        assert!(output.into_result().is_ok());
    }
}
