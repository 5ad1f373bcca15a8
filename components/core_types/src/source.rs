//! Source position and span types for locating tokens, nodes and diagnostics.
//!
//! Offsets are byte offsets into the UTF-8 source buffer. Lines and columns
//! are 1-indexed; columns count Unicode scalar values.

use serde::Serialize;

/// Represents a position in source code.
///
/// Used for diagnostics and by tools mapping nodes back to editor locations.
///
/// # Examples
///
/// ```
/// use core_types::SourcePosition;
///
/// let pos = SourcePosition {
///     line: 10,
///     column: 5,
///     offset: 150,
/// };
///
/// assert_eq!(pos.line, 10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SourcePosition {
    /// Line number (1-indexed)
    pub line: u32,
    /// Column number (1-indexed, in characters)
    pub column: u32,
    /// Byte offset from the start of the source buffer
    pub offset: usize,
}

impl SourcePosition {
    /// Position of the first byte of a source buffer
    pub const START: SourcePosition = SourcePosition {
        line: 1,
        column: 1,
        offset: 0,
    };
}

impl Default for SourcePosition {
    fn default() -> Self {
        Self::START
    }
}

/// A half-open `[start, end)` byte range in the source buffer.
///
/// # Examples
///
/// ```
/// use core_types::Span;
///
/// let a = Span::new(0, 3);
/// let b = Span::new(6, 9);
/// assert_eq!(a.cover(b), Span::new(0, 9));
/// assert_eq!(Span::new(4, 7).slice("let foo = 1"), "foo");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Span {
    /// Inclusive start offset
    pub start: usize,
    /// Exclusive end offset
    pub end: usize,
}

impl Span {
    /// Create a span from two byte offsets
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Zero-width span at `offset`
    pub const fn empty_at(offset: usize) -> Self {
        Self {
            start: offset,
            end: offset,
        }
    }

    /// Length of the span in bytes
    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// True if the span covers no bytes
    pub const fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Smallest span containing both `self` and `other`
    pub fn cover(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    /// True if `other` lies entirely within `self`
    pub fn contains(&self, other: Span) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// The text this span covers. Out-of-range spans yield an empty string.
    pub fn slice<'s>(&self, source: &'s str) -> &'s str {
        source.get(self.start..self.end).unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
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
    fn test_source_position_default_is_start() {
        assert_eq!(SourcePosition::default(), SourcePosition::START);
        assert_eq!(SourcePosition::START.line, 1);
    }

    #[test]
    fn test_span_cover_is_order_independent() {
        let a = Span::new(4, 8);
        let b = Span::new(1, 5);
        assert_eq!(a.cover(b), Span::new(1, 8));
        assert_eq!(b.cover(a), Span::new(1, 8));
    }

    #[test]
    fn test_span_empty_and_len() {
        assert!(Span::empty_at(3).is_empty());
        assert_eq!(Span::new(2, 7).len(), 5);
        assert!(Span::new(0, 10).contains(Span::new(2, 3)));
        assert!(!Span::new(2, 3).contains(Span::new(0, 10)));
    }

    #[test]
    fn test_span_slice_out_of_range() {
        assert_eq!(Span::new(0, 100).slice("abc"), "");
        assert_eq!(Span::new(1, 3).slice("abc"), "bc");
    }
}
