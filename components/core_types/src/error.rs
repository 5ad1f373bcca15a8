//! Diagnostics reported while turning source text into a syntax tree.
//!
//! Parsing never aborts on malformed input: every problem is recorded as a
//! [`Diagnostic`] next to the (possibly partial) tree.

use crate::{SourcePosition, Span};
use serde::Serialize;
use std::fmt;

/// How serious a diagnostic is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Severity {
    /// The tree is complete but the input is suspicious
    Warning,
    /// Part of the input could not be parsed as written
    Error,
}

/// Where in the pipeline a diagnostic was raised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DiagnosticKind {
    /// Unterminated literal or comment, or a character outside the lexical grammar
    LexError,
    /// Mismatch at a tolerant point, recovered locally with an error node
    RecoverableParseError,
    /// Missing keyword or punctuator outside any tolerant point
    StructuralParseError,
    /// Input that cannot be parsed at all (empty or not text)
    InvalidInput,
}

/// A single problem found in the source.
///
/// # Examples
///
/// ```
/// use core_types::{Diagnostic, DiagnosticKind, Severity, SourcePosition, Span};
///
/// let diag = Diagnostic {
///     kind: DiagnosticKind::LexError,
///     severity: Severity::Error,
///     message: "unterminated string literal".to_string(),
///     span: Span::new(0, 4),
///     position: SourcePosition::START,
/// };
///
/// assert_eq!(diag.to_string(), "1:1: error: unterminated string literal");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// Pipeline stage that raised the diagnostic
    pub kind: DiagnosticKind,
    /// Severity
    pub severity: Severity,
    /// Human-readable message
    pub message: String,
    /// Offending source range
    pub span: Span,
    /// Line/column of `span.start`
    pub position: SourcePosition,
}

impl Diagnostic {
    /// True if this diagnostic has [`Severity::Error`]
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}: {}: {}",
            self.position.line, self.position.column, self.severity, self.message
        )
    }
}
