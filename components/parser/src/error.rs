//! Lexer and parser error types and helpers

use crate::lexer::{Token, TokenKind};
use core_types::{Diagnostic, Span};
use thiserror::Error;

/// A lexical problem attached to the best-effort token the lexer produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LexErrorKind {
    /// String reached a raw line break or end of input
    #[error("unterminated string literal")]
    UnterminatedString,
    /// Template string reached end of input
    #[error("unterminated template string")]
    UnterminatedTemplate,
    /// Regex reached a line break or end of input
    #[error("unterminated regular expression")]
    UnterminatedRegex,
    /// Block comment reached end of input
    #[error("unterminated block comment")]
    UnterminatedComment,
    /// Character outside the lexical grammar
    #[error("unexpected character '{0}'")]
    UnexpectedCharacter(char),
}

/// A mismatch between the token stream and the grammar
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// A token other than the expected one
    #[error("expected {expected}, found {found}")]
    UnexpectedToken {
        /// Description of what the grammar wanted
        expected: String,
        /// Description of the token found
        found: String,
        /// Span of the offending token
        span: Span,
        /// The offending token already carries a lexical diagnostic
        lexical: bool,
    },
    /// Input ended inside a construct
    #[error("expected {expected}, found end of input")]
    UnexpectedEof {
        /// Description of what the grammar wanted
        expected: String,
        /// Zero-width span at the end of input
        span: Span,
    },
    /// Left side of `=` or a compound assignment is not assignable
    #[error("invalid assignment target")]
    InvalidAssignmentTarget {
        /// Span of the target expression
        span: Span,
    },
    /// `delete` applied to something other than a member or subscript access
    #[error("'delete' operand must be a member or subscript expression")]
    InvalidDeleteTarget {
        /// Span of the operand
        span: Span,
    },
    /// Recursion guard tripped
    #[error("nesting exceeds {limit} levels")]
    TooDeep {
        /// Configured limit
        limit: usize,
        /// Span of the token where the limit was hit
        span: Span,
    },
}

impl ParseError {
    /// Source range the error refers to
    pub fn span(&self) -> Span {
        match self {
            ParseError::UnexpectedToken { span, .. }
            | ParseError::UnexpectedEof { span, .. }
            | ParseError::InvalidAssignmentTarget { span }
            | ParseError::InvalidDeleteTarget { span }
            | ParseError::TooDeep { span, .. } => *span,
        }
    }

    /// True if the lexer already reported the offending token
    pub fn is_lexical(&self) -> bool {
        matches!(self, ParseError::UnexpectedToken { lexical: true, .. })
    }
}

/// Create an unexpected-token error for `token`
pub fn unexpected_token(expected: &str, token: &Token<'_>) -> ParseError {
    if token.kind == TokenKind::EOF {
        return ParseError::UnexpectedEof {
            expected: expected.to_string(),
            span: token.span,
        };
    }
    ParseError::UnexpectedToken {
        expected: expected.to_string(),
        found: describe_token(token),
        span: token.span,
        lexical: token.error.is_some(),
    }
}

/// Short human-readable description of a token for messages
pub fn describe_token(token: &Token<'_>) -> String {
    match token.kind {
        TokenKind::EOF => "end of input".to_string(),
        TokenKind::LineBreak => "line break".to_string(),
        TokenKind::String => "string".to_string(),
        TokenKind::TemplateString => "template string".to_string(),
        TokenKind::Regex => "regular expression".to_string(),
        TokenKind::Number => format!("number '{}'", token.text),
        TokenKind::Identifier => format!("identifier '{}'", token.text),
        _ => format!("'{}'", token.text),
    }
}

/// Every error-severity diagnostic of a parse, for callers wanting pass/fail
#[derive(Debug, Clone, Error)]
#[error("{} syntax error(s)", .0.len())]
pub struct SyntaxErrors(pub Vec<Diagnostic>);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::Lexer;

    #[test]
    fn test_unexpected_token_message() {
        let mut lexer = Lexer::new("foo");
        let token = lexer.next_token();
        let err = unexpected_token("'('", &token);
        assert_eq!(err.to_string(), "expected '(', found identifier 'foo'");
        assert_eq!(err.span(), Span::new(0, 3));
        assert!(!err.is_lexical());
    }

    #[test]
    fn test_unexpected_eof() {
        let mut lexer = Lexer::new("");
        let token = lexer.next_token();
        let err = unexpected_token("expression", &token);
        assert!(matches!(err, ParseError::UnexpectedEof { .. }));
        assert!(err.to_string().contains("end of input"));
    }

    #[test]
    fn test_lexical_flag_follows_token_error() {
        let mut lexer = Lexer::new("@");
        let token = lexer.next_token();
        assert!(unexpected_token("expression", &token).is_lexical());
    }
}
