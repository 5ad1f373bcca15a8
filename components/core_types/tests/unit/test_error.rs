//! Unit tests for Diagnostic, DiagnosticKind and Severity

use core_types::{Diagnostic, DiagnosticKind, Severity, SourcePosition, Span};

fn make(kind: DiagnosticKind, severity: Severity) -> Diagnostic {
    Diagnostic {
        kind,
        severity,
        message: "unterminated regular expression".to_string(),
        span: Span::new(10, 14),
        position: SourcePosition {
            line: 2,
            column: 3,
            offset: 10,
        },
    }
}

#[cfg(test)]
mod diagnostic_tests {
    use super::*;

    #[test]
    fn test_diagnostic_kinds_are_distinct() {
        let kinds = [
            DiagnosticKind::LexError,
            DiagnosticKind::RecoverableParseError,
            DiagnosticKind::StructuralParseError,
            DiagnosticKind::InvalidInput,
        ];
        for (i, a) in kinds.iter().enumerate() {
            for (j, b) in kinds.iter().enumerate() {
                assert_eq!(i == j, a == b);
            }
        }
    }

    #[test]
    fn test_diagnostic_display_uses_position() {
        let diag = make(DiagnosticKind::LexError, Severity::Error);
        assert_eq!(
            diag.to_string(),
            "2:3: error: unterminated regular expression"
        );
    }

    #[test]
    fn test_diagnostic_serializes_kind_and_severity() {
        let diag = make(DiagnosticKind::StructuralParseError, Severity::Warning);
        let json = serde_json::to_value(&diag).unwrap();
        assert_eq!(json["kind"], "StructuralParseError");
        assert_eq!(json["severity"], "Warning");
        assert_eq!(json["span"]["start"], 10);
        assert_eq!(json["span"]["end"], 14);
    }
}
