//! Error recovery: tolerant grammar points and statement resynchronization

use super::{ListEnd, ParseResult, Parser};
use crate::ast::{ErrorNode, Statement};
use crate::error::ParseError;
use crate::lexer::{Keyword, Punctuator, Token, TokenKind};
use core_types::{DiagnosticKind, Span};
use log::debug;

/// Grammar positions where a mismatch is recovered locally with an error
/// node instead of failing the enclosing construct
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TolerantPoint {
    /// Body of an expression statement
    ExpressionStatement,
    /// `( expression )` of `if`, `while`, `switch` or a grouping
    Parenthesized,
    /// One binding of a `var`/`let`/`const` declaration
    VarBinding,
    /// Init, test or update of a `for` header
    ForHeader,
    /// Array element or object member
    ListElement,
    /// Call argument
    Argument,
    /// `[ index ]`
    SubscriptIndex,
}

impl TolerantPoint {
    /// True if skipping stops before `token` at bracket depth zero.
    /// Unmatched closers and end of input always stop.
    fn syncs_at(self, token: &Token<'_>, newline_before: bool) -> bool {
        let is = |p| token.is_punctuator(p);
        match self {
            TolerantPoint::ExpressionStatement => is(Punctuator::Semicolon) || newline_before,
            TolerantPoint::VarBinding => {
                is(Punctuator::Comma) || is(Punctuator::Semicolon) || newline_before
            }
            TolerantPoint::ForHeader => is(Punctuator::Semicolon),
            TolerantPoint::ListElement | TolerantPoint::Argument => is(Punctuator::Comma),
            TolerantPoint::Parenthesized | TolerantPoint::SubscriptIndex => false,
        }
    }

    fn description(self) -> &'static str {
        match self {
            TolerantPoint::ExpressionStatement => "expression statement",
            TolerantPoint::Parenthesized => "parenthesized expression",
            TolerantPoint::VarBinding => "variable binding",
            TolerantPoint::ForHeader => "for header",
            TolerantPoint::ListElement => "list element",
            TolerantPoint::Argument => "argument",
            TolerantPoint::SubscriptIndex => "subscript index",
        }
    }
}

fn is_opener(token: &Token<'_>) -> bool {
    matches!(
        token.kind,
        TokenKind::Punctuator(Punctuator::LParen | Punctuator::LBracket | Punctuator::LBrace)
    )
}

fn is_closer(token: &Token<'_>) -> bool {
    matches!(
        token.kind,
        TokenKind::Punctuator(Punctuator::RParen | Punctuator::RBracket | Punctuator::RBrace)
    )
}

/// Keywords that can only begin a statement
fn starts_statement(token: &Token<'_>) -> bool {
    match token.kind {
        TokenKind::Keyword(k) => matches!(
            k,
            Keyword::Var
                | Keyword::Let
                | Keyword::Const
                | Keyword::If
                | Keyword::For
                | Keyword::While
                | Keyword::Do
                | Keyword::Switch
                | Keyword::Try
                | Keyword::Return
                | Keyword::Break
                | Keyword::Continue
                | Keyword::Throw
                | Keyword::Yield
                | Keyword::Import
                | Keyword::Export
        ),
        _ => false,
    }
}

impl<'a> Parser<'a> {
    /// Parse with `parse`; on failure skip to the point's delimiter and
    /// hand the skipped range to `wrap`. At least one token is consumed; if
    /// none can be (end of input or an unmatched closer) the error
    /// propagates to the enclosing construct.
    pub(crate) fn tolerant<T>(
        &mut self,
        point: TolerantPoint,
        parse: impl FnOnce(&mut Self) -> ParseResult<T>,
        wrap: impl FnOnce(ErrorNode) -> T,
    ) -> ParseResult<T> {
        let start = self.current.span.start;
        let err = match parse(self) {
            Ok(node) => return Ok(node),
            Err(err) => err,
        };
        if !self.options.tolerant || self.aborted || matches!(err, ParseError::TooDeep { .. }) {
            return Err(err);
        }

        let mut consumed = self.current.span.start != start;
        let mut depth = 0usize;
        loop {
            let token = self.current;
            if token.kind == TokenKind::EOF {
                break;
            }
            if depth == 0 {
                if is_closer(&token) {
                    break;
                }
                if consumed && point.syncs_at(&token, self.newline_before && self.ctx.newlines_significant) {
                    break;
                }
            }
            if is_opener(&token) {
                depth += 1;
            } else if is_closer(&token) {
                depth -= 1;
            }
            self.advance();
            consumed = true;
        }

        if !consumed {
            return Err(err);
        }

        let span = self.finish(start);
        debug!(
            target: "js_frontend",
            "recovered {} at {}..{}: {}",
            point.description(),
            span.start,
            span.end,
            err
        );
        self.report_parse_error(DiagnosticKind::RecoverableParseError, &err);
        Ok(wrap(self.error_node(span)))
    }

    /// Record a structural error for the statement starting at `start` and
    /// skip to the next statement boundary. Returns the skipped range as an
    /// error statement.
    pub(crate) fn recover_statement(&mut self, start: usize, err: ParseError) -> Option<Statement> {
        self.report_parse_error(DiagnosticKind::StructuralParseError, &err);
        debug!(
            target: "js_frontend",
            "statement at {} abandoned: {}",
            start,
            err
        );

        let mut consumed = self.current.span.start > start;
        let mut depth = 0usize;
        while !self.aborted {
            let token = self.current;
            if token.kind == TokenKind::EOF {
                break;
            }
            if depth == 0 && consumed {
                if self.newline_before || starts_statement(&token) {
                    break;
                }
                if token.is_punctuator(Punctuator::RBrace) {
                    break;
                }
                if self.ctx.list_end == ListEnd::SwitchCase
                    && (token.is_keyword(Keyword::Case) || token.is_keyword(Keyword::Default))
                {
                    break;
                }
            }
            if is_opener(&token) {
                depth += 1;
            } else if is_closer(&token) {
                depth = depth.saturating_sub(1);
            }
            self.advance();
            consumed = true;
            if depth == 0 && token.is_punctuator(Punctuator::Semicolon) {
                break;
            }
        }

        let span = self.finish(start);
        if span.is_empty() {
            return None;
        }
        Some(Statement::Error(self.error_node(span)))
    }

    pub(crate) fn error_node(&self, span: Span) -> ErrorNode {
        ErrorNode {
            text: span.slice(self.source).to_string(),
            span,
        }
    }
}
