//! Grammar rule procedures for the Python subset.
//!
//! One `parse_*` method per rule, layered the way pegen layers the real
//! grammar: start symbols here, statements and blocks in `statements`,
//! the expression tower in `expressions`, terminals and displays in `atoms`.
//! Rules return `Option`: `None` is an ordinary mismatch that the caller
//! backtracks over, while raised errors travel through the parser's error
//! slot and short-circuit everything via `ok()`.

pub(crate) mod keywords;

mod atoms;
mod expressions;
mod statements;

use super::core::Parser;
use crate::ast::Mod;
use crate::lexer::TokenKind;

impl Parser<'_> {
    /// file: statements? ENDMARKER
    pub(super) fn parse_file(&mut self) -> Option<Mod> {
        let body = self.parse_statements();
        self.expect(TokenKind::EndMarker)?;
        Some(Mod::Module { body })
    }

    /// interactive: statement NEWLINE* ENDMARKER
    pub(super) fn parse_interactive_input(&mut self) -> Option<Mod> {
        let body = self.parse_statement()?;
        while self.expect(TokenKind::Newline).is_some() {}
        self.expect(TokenKind::EndMarker)?;
        Some(Mod::Interactive { body })
    }

    /// eval: expressions NEWLINE* ENDMARKER
    pub(super) fn parse_eval_input(&mut self) -> Option<Mod> {
        let body = self.parse_star_expressions()?;
        while self.expect(TokenKind::Newline).is_some() {}
        self.expect(TokenKind::EndMarker)?;
        Some(Mod::Expression {
            body: Box::new(body),
        })
    }

    /// The current token is a name the grammar treats as a soft keyword.
    pub(in crate::parser) fn at_soft_keyword(&self) -> bool {
        let token = self.peek();
        token.kind == TokenKind::Name && keywords::SOFT_KEYWORDS.contains(&self.text(token))
    }
}
