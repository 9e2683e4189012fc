//! Parse errors and their rendering.
//!
//! A failed parse produces exactly one [`ParseError`]: the first error raised
//! by the diagnostic pass (or by a forced-token expectation during the
//! permissive pass). The kind distinguishes plain syntax errors from
//! indentation, tab, and language-version errors, matching CPython's
//! exception taxonomy.

mod printer;

#[cfg(test)]
mod tests;

pub use printer::ErrorPrinter;

use std::fmt;

use crate::span::Span;

/// Which exception CPython would raise for this mistake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
pub enum ParseErrorKind {
    /// Grammar did not match.
    Syntax,
    /// Block-structure mistake (bad indent/dedent, missing indented block).
    Indentation,
    /// Inconsistent use of tabs and spaces in indentation.
    Tab,
    /// Construct is valid syntax but newer than the configured version.
    Version,
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ParseErrorKind::Syntax | ParseErrorKind::Version => "SyntaxError",
            ParseErrorKind::Indentation => "IndentationError",
            ParseErrorKind::Tab => "TabError",
        };
        f.write_str(name)
    }
}

/// Secondary location attached to an error, e.g. where an unclosed bracket
/// was opened.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct RelatedInfo {
    pub span: Span,
    pub message: String,
}

impl RelatedInfo {
    pub fn new(span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
        }
    }
}

/// A located syntax error with a CPython-compatible message.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub message: String,
    pub span: Span,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub related: Vec<RelatedInfo>,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, message: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            message: message.into(),
            span,
            related: Vec::new(),
        }
    }

    pub fn syntax(message: impl Into<String>, span: Span) -> Self {
        Self::new(ParseErrorKind::Syntax, message, span)
    }

    pub fn indentation(message: impl Into<String>, span: Span) -> Self {
        Self::new(ParseErrorKind::Indentation, message, span)
    }

    pub fn related_to(mut self, message: impl Into<String>, span: Span) -> Self {
        self.related.push(RelatedInfo::new(span, message));
        self
    }

    /// Builder-style printer for rendering against the source text.
    pub fn printer(&self) -> ErrorPrinter<'_, '_> {
        ErrorPrinter::new(self)
    }

    pub fn render(&self, source: &str) -> String {
        self.printer().source(source).render()
    }
}
