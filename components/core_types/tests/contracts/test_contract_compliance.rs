//! Contract compliance tests for core_types
//!
//! These tests pin the public surface the parser component and hosting
//! tools rely on.

use core_types::{Diagnostic, DiagnosticKind, Severity, SourcePosition, Span};

#[cfg(test)]
mod span_contract_tests {
    use super::*;

    /// Contract: spans are half-open byte ranges
    #[test]
    fn test_span_is_half_open() {
        let span = Span::new(0, 3);
        assert_eq!(span.slice("abcdef"), "abc");
        assert_eq!(span.len(), 3);
    }

    /// Contract: positions are 1-indexed
    #[test]
    fn test_positions_start_at_one() {
        assert_eq!(
            SourcePosition::START,
            SourcePosition {
                line: 1,
                column: 1,
                offset: 0
            }
        );
    }
}

#[cfg(test)]
mod diagnostic_contract_tests {
    use super::*;

    /// Contract: diagnostics carry kind, severity, message, span and position
    #[test]
    fn test_diagnostic_fields() {
        let diag = Diagnostic {
            kind: DiagnosticKind::InvalidInput,
            severity: Severity::Warning,
            message: "empty source".to_string(),
            span: Span::empty_at(0),
            position: SourcePosition::START,
        };
        assert!(!diag.is_error());
        assert!(diag.span.is_empty());
        assert_eq!(diag.message, "empty source");
    }
}
