//! PEG parser: the backtracking engine and its grammar clients.
//!
//! # Architecture
//!
//! - `core` holds the cursor (token position, O(1) mark/reset), the
//!   single-error slot, lookahead and forced-token primitives, and the
//!   recursion guard.
//! - `cache` holds packrat memoization and the seed-growing resolver for
//!   left-recursive rules. Failures are cached like successes, so a parse
//!   visits each `(position, rule)` pair at most once.
//! - `grammar` is the client layer: hand-written rule procedures over a
//!   representative subset of Python.
//!
//! # Error protocol
//!
//! Parsing runs up to twice. The permissive pass knows only the valid
//! grammar; if it fails, the parser state is reset and a diagnostic pass
//! runs with the invalid-construct alternatives enabled, which re-parses the
//! prefix identically (the grammar is unambiguous on valid input) and then
//! trips a specific error at the offending construct. If even that pass
//! raises nothing, a generic fallback classifies the furthest token reached.
//! Exactly one error comes out of a failed parse.

mod cache;
mod core;
mod grammar;

#[cfg(test)]
mod tests;

pub(crate) use self::core::Parser;

use crate::ast::Mod;
use crate::{Error, Result};

/// Start symbol selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputType {
    /// A whole source file.
    Module,
    /// One interactive statement.
    Interactive,
    /// A lone expression, as for `eval`.
    Eval,
}

pub const DEFAULT_FEATURE_VERSION: u32 = 12;
pub const DEFAULT_RECURSION_LIMIT: u32 = 6000;

#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Python minor version whose syntax is accepted, e.g. 8 for 3.8.
    pub feature_version: u32,
    /// Engine recursion bound; exceeding it yields
    /// [`Error::RecursionLimitExceeded`].
    pub recursion_limit: u32,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            feature_version: DEFAULT_FEATURE_VERSION,
            recursion_limit: DEFAULT_RECURSION_LIMIT,
        }
    }
}

/// Parses `source` according to `input`, running the two-pass error protocol
/// on failure.
pub fn parse(source: &str, input: InputType, options: &ParseOptions) -> Result<Mod> {
    let mut parser = Parser::new(source, options);
    if let Some(module) = run(&mut parser, input) {
        return Ok(module);
    }
    if let Some(fatal) = parser.take_fatal_error() {
        return Err(fatal);
    }

    parser.reset_state();
    let _ = run(&mut parser, input);
    if let Some(fatal) = parser.take_fatal_error() {
        return Err(fatal);
    }
    let error = parser
        .take_error()
        .unwrap_or_else(|| parser.fallback_error());
    Err(Error::Parse(error))
}

pub fn parse_module(source: &str, options: &ParseOptions) -> Result<Mod> {
    parse(source, InputType::Module, options)
}

pub fn parse_interactive(source: &str, options: &ParseOptions) -> Result<Mod> {
    parse(source, InputType::Interactive, options)
}

pub fn parse_expression(source: &str, options: &ParseOptions) -> Result<Mod> {
    parse(source, InputType::Eval, options)
}

fn run(parser: &mut Parser, input: InputType) -> Option<Mod> {
    match input {
        InputType::Module => parser.parse_file(),
        InputType::Interactive => parser.parse_interactive_input(),
        InputType::Eval => parser.parse_eval_input(),
    }
}
