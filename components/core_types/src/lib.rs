//! Source locations and diagnostics shared by the JavaScript front-end.
//!
//! # Overview
//!
//! - [`SourcePosition`] - Line/column/offset location in a source buffer
//! - [`Span`] - Half-open byte range in a source buffer
//! - [`Diagnostic`] - A problem found while lexing or parsing
//! - [`Severity`] - Warning or error
//! - [`DiagnosticKind`] - Pipeline stage that raised a diagnostic
//!
//! # Examples
//!
//! ```
//! use core_types::{Diagnostic, DiagnosticKind, Severity, SourcePosition, Span};
//!
//! let span = Span::new(4, 7);
//! assert_eq!(span.slice("let foo = 1;"), "foo");
//!
//! let diag = Diagnostic {
//!     kind: DiagnosticKind::StructuralParseError,
//!     severity: Severity::Error,
//!     message: "expected ')'".to_string(),
//!     span,
//!     position: SourcePosition { line: 1, column: 5, offset: 4 },
//! };
//! assert!(diag.is_error());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod error;
mod source;

pub use error::{Diagnostic, DiagnosticKind, Severity};
pub use source::{SourcePosition, Span};
