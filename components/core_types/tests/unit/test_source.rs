//! Unit tests for SourcePosition and Span

use core_types::{SourcePosition, Span};

#[cfg(test)]
mod source_position_tests {
    use super::*;

    #[test]
    fn test_source_position_creation() {
        let pos = SourcePosition {
            line: 10,
            column: 5,
            offset: 150,
        };

        assert_eq!(pos.line, 10);
        assert_eq!(pos.column, 5);
        assert_eq!(pos.offset, 150);
    }

    #[test]
    fn test_source_position_is_copy() {
        let pos = SourcePosition::START;
        let copy = pos;
        assert_eq!(pos, copy);
    }

    #[test]
    fn test_source_position_serializes_fields() {
        let json = serde_json::to_value(SourcePosition {
            line: 3,
            column: 9,
            offset: 40,
        })
        .unwrap();
        assert_eq!(json["line"], 3);
        assert_eq!(json["column"], 9);
        assert_eq!(json["offset"], 40);
    }
}

#[cfg(test)]
mod span_tests {
    use super::*;

    #[test]
    fn test_span_slice_multibyte() {
        let source = "let é = 1";
        // 'é' is two bytes long
        assert_eq!(Span::new(4, 6).slice(source), "é");
        // not on a char boundary
        assert_eq!(Span::new(4, 5).slice(source), "");
    }

    #[test]
    fn test_span_cover_chain() {
        let spans = [Span::new(5, 6), Span::new(1, 2), Span::new(9, 12)];
        let total = spans
            .iter()
            .copied()
            .reduce(Span::cover)
            .unwrap();
        assert_eq!(total, Span::new(1, 12));
    }

    #[test]
    fn test_span_reversed_has_zero_len() {
        let span = Span::new(8, 3);
        assert_eq!(span.len(), 0);
        assert!(span.is_empty());
    }
}
