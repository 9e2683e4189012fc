//! Coil: a PEG parser for Python source.
//!
//! # Example
//!
//! ```
//! use coil_lib::{ParseOptions, parse_module};
//!
//! let source = "a = 1 + 2 * 3\n";
//! match parse_module(source, &ParseOptions::default()) {
//!     Ok(module) => println!("{}", module.dump()),
//!     Err(err) => eprintln!("{err}"),
//! }
//! ```
//!
//! The parser runs in two passes: a permissive pass over the valid grammar,
//! and, only when that fails, a diagnostic pass with the invalid-construct
//! alternatives enabled. Exactly one error is reported per failed parse.

pub mod ast;
pub mod diagnostics;
pub mod lexer;
pub mod parser;
pub mod span;

pub use ast::Mod;
pub use span::Span;
pub use diagnostics::{ErrorPrinter, ParseError, ParseErrorKind};
pub use parser::{InputType, ParseOptions, parse, parse_expression, parse_interactive, parse_module};

/// Errors produced by a parse.
///
/// Grammar mismatches and tokenizer problems surface as [`ParseError`] with a
/// source span. `RecursionLimitExceeded` is an engine-level condition: input
/// nesting is attacker-controlled, so the engine bails out instead of
/// exhausting the call stack.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    /// Input nested too deeply for the configured recursion limit.
    #[error("recursion limit exceeded")]
    RecursionLimitExceeded,

    #[error("{0}")]
    Parse(#[from] ParseError),
}

/// Result type for parse operations.
pub type Result<T> = std::result::Result<T, Error>;
