//! JavaScript parser front-end
//!
//! Turns JavaScript source text into an abstract syntax tree. Parsing is
//! tolerant: malformed regions become error nodes and diagnostics, and the
//! rest of the program is still parsed.
//!
//! # Overview
//!
//! - [`Lexer`] - Tokenizes source text, including comment and line-break extras
//! - [`PrecedenceTable`] - Operator precedence, associativity and fixity
//! - [`Parser`] - Recursive descent statements over a precedence-climbing
//!   expression parser
//! - [`ast`] - Tree node types produced by the parser
//! - [`ast_dump`] - S-expression rendering of a tree
//! - [`visit`] - Read-only tree traversal
//!
//! # Example
//!
//! ```
//! use js_frontend::ast::Statement;
//!
//! let output = js_frontend::parse("let x = 42;\nx = x +");
//! assert!(matches!(output.program.body[0], Statement::VarDeclaration(_)));
//! assert!(output.has_errors());
//! for diagnostic in &output.diagnostics {
//!     println!("{diagnostic}");
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod ast;
pub mod ast_dump;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod precedence;
pub mod visit;

pub use ast::{Expression, Program, Statement};
pub use error::{ParseError, SyntaxErrors};
pub use lexer::{Keyword, Lexer, Punctuator, Token, TokenKind};
pub use parser::{parse, parse_bytes, parse_with_options, ParseOptions, ParseOutput, Parser, TolerantPoint};
pub use precedence::PrecedenceTable;
