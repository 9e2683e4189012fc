//! Parser state machine and low-level operations.
//!
//! The cursor is an index into the token vector; `mark`/`reset` are O(1)
//! field accesses, which is what makes unbounded backtracking affordable.
//! Exactly one error is recorded per parse: the first raised wins and the
//! `ok()` flag short-circuits every rule entry and loop from then on.

use super::cache::MemoCache;
use super::grammar;
use crate::Error;
use crate::diagnostics::{ParseError, ParseErrorKind};
use crate::lexer::{self, OpenBracket, Token, TokenKind};
use crate::span::Span;

pub struct Parser<'src> {
    pub(super) source: &'src str,
    pub(super) tokens: Vec<Token>,
    pub(super) pos: usize,
    pub(super) cache: MemoCache,
    /// First raised parse error; never overwritten once set.
    pub(super) error: Option<ParseError>,
    /// Engine-level condition, reported instead of any parse error.
    pub(super) fatal_error: Option<Error>,
    /// Highest token index the cursor ever reached, across both passes.
    /// Drives the generic fallback diagnosis.
    pub(super) furthest: usize,
    /// Enables the invalid-construct alternatives in the diagnostic pass.
    pub(super) call_invalid_rules: bool,
    /// Python minor version accepted, e.g. 12 for 3.12.
    pub(super) feature_version: u32,
    pub(super) depth: u32,
    recursion_limit: u32,
    lexer_error: Option<ParseError>,
    unclosed: Option<OpenBracket>,
}

impl<'src> Parser<'src> {
    pub(super) fn new(source: &'src str, options: &super::ParseOptions) -> Self {
        let stream = lexer::tokenize(source);
        let mut tokens = stream.tokens;
        // Reserved keywords are a grammar concern; the lexer hands over plain
        // names and the parser rewrites them from the keyword table.
        for token in &mut tokens {
            if token.kind == TokenKind::Name
                && let Some(kw) = grammar::keywords::reserved(token.text(source))
            {
                token.kind = kw;
            }
        }
        Self {
            source,
            tokens,
            pos: 0,
            cache: MemoCache::new(),
            error: None,
            fatal_error: None,
            furthest: 0,
            call_invalid_rules: false,
            feature_version: options.feature_version,
            depth: 0,
            recursion_limit: options.recursion_limit,
            lexer_error: stream.error,
            unclosed: stream.unclosed,
        }
    }

    /// Rewinds to the start for the diagnostic pass. The furthest-token
    /// watermark survives on purpose.
    pub(super) fn reset_state(&mut self) {
        self.pos = 0;
        self.cache.clear();
        self.error = None;
        self.depth = 0;
        self.call_invalid_rules = true;
    }

    /// No error raised and no fatal condition; rules check this before doing
    /// any work.
    #[inline]
    pub(super) fn ok(&self) -> bool {
        self.error.is_none() && self.fatal_error.is_none()
    }

    #[inline]
    pub(super) fn mark(&self) -> usize {
        self.pos
    }

    #[inline]
    pub(super) fn reset(&mut self, mark: usize) {
        self.pos = mark;
    }

    /// Current token. The stream always ends in `EndMarker` or `ErrorToken`,
    /// so the cursor clamps to the last token instead of running off the end.
    pub(super) fn peek(&self) -> Token {
        let idx = self.pos.min(self.tokens.len().saturating_sub(1));
        self.tokens[idx]
    }

    #[inline]
    pub(super) fn peek_kind(&self) -> TokenKind {
        self.peek().kind
    }

    pub(super) fn advance(&mut self) -> Token {
        let token = self.peek();
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
        if self.pos > self.furthest {
            self.furthest = self.pos;
        }
        token
    }

    /// Consumes and returns the current token if it has the given kind.
    pub(super) fn expect(&mut self, kind: TokenKind) -> Option<Token> {
        let token = self.peek();
        if token.kind == TokenKind::ErrorToken {
            return self.raise_tokenizer_error();
        }
        if token.kind == kind {
            return Some(self.advance());
        }
        None
    }

    /// Like [`expect`](Self::expect), but a mismatch raises `expected ...`
    /// immediately, in the permissive pass too. Used where the grammar has
    /// committed and no other alternative could apply.
    pub(super) fn expect_forced(&mut self, kind: TokenKind, expected: &str) -> Option<Token> {
        if let Some(token) = self.expect(kind) {
            return Some(token);
        }
        if self.ok() {
            let span = self.peek().span;
            self.raise::<Token>(ParseError::syntax(format!("expected {expected}"), span));
        }
        None
    }

    /// A soft keyword is a plain name with exact text, reserved only where
    /// the grammar asks for it.
    pub(super) fn expect_soft_keyword(&mut self, keyword: &str) -> Option<Token> {
        let token = self.peek();
        if token.kind == TokenKind::Name && token.text(self.source) == keyword {
            return Some(self.advance());
        }
        None
    }

    /// Runs `f` and unconditionally rewinds; the outcome is reported but
    /// nothing is consumed.
    pub(super) fn positive_lookahead<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> Option<T>,
    ) -> Option<T> {
        let mark = self.mark();
        let result = f(self);
        self.reset(mark);
        result
    }

    /// Succeeds when `f` fails, consuming nothing either way.
    pub(super) fn negative_lookahead<T>(&mut self, f: impl FnOnce(&mut Self) -> Option<T>) -> bool {
        let mark = self.mark();
        let result = f(self);
        self.reset(mark);
        result.is_none() && self.ok()
    }

    /// Records `error` unless one is already set, and parses as a failure.
    /// The `Option` return lets rules write `return p.raise(...)`.
    pub(super) fn raise<T>(&mut self, error: ParseError) -> Option<T> {
        if self.error.is_none() {
            self.error = Some(error);
        }
        None
    }

    pub(super) fn raise_indentation_error<T>(&mut self, message: impl Into<String>) -> Option<T> {
        let span = self.peek().span;
        self.raise(ParseError::indentation(message, span))
    }

    /// Gate for constructs newer than the configured version. The construct
    /// is already recognized when this runs; too-old versions get the
    /// CPython-style message rather than a confusing grammar failure.
    pub(super) fn check_version(&mut self, minor: u32, feature: &str) -> bool {
        if self.feature_version >= minor {
            return true;
        }
        let span = self.peek().span;
        let _: Option<()> = self.raise(ParseError::new(
            ParseErrorKind::Version,
            format!("{feature} only supported in Python 3.{minor} and greater"),
            span,
        ));
        false
    }

    fn raise_tokenizer_error<T>(&mut self) -> Option<T> {
        let error = match &self.lexer_error {
            Some(err) => err.clone(),
            None => ParseError::syntax("invalid syntax", self.peek().span),
        };
        self.raise(error)
    }

    pub(super) fn enter_recursion(&mut self) -> bool {
        if self.depth >= self.recursion_limit {
            if self.fatal_error.is_none() {
                self.fatal_error = Some(Error::RecursionLimitExceeded);
            }
            return false;
        }
        self.depth += 1;
        true
    }

    pub(super) fn exit_recursion(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Source text of a token.
    pub(super) fn text(&self, token: Token) -> &'src str {
        token.text(self.source)
    }

    /// Span from the first token at `start` up to the last consumed token.
    pub(super) fn span_from(&self, start: usize) -> Span {
        let lo = self
            .tokens
            .get(start)
            .map_or_else(|| self.eof_span(), |t| t.span);
        let hi = if self.pos > start {
            self.tokens[self.pos - 1].span
        } else {
            lo
        };
        lo.to(hi)
    }

    pub(super) fn eof_span(&self) -> Span {
        Span::empty(self.source.len() as u32)
    }

    pub(super) fn take_fatal_error(&mut self) -> Option<Error> {
        self.fatal_error.take()
    }

    pub(super) fn take_error(&mut self) -> Option<ParseError> {
        self.error.take()
    }

    /// Generic diagnosis when both passes failed without raising anything
    /// specific: classify the furthest token the cursor reached.
    pub(super) fn fallback_error(&self) -> ParseError {
        if let Some(err) = &self.lexer_error {
            return err.clone();
        }
        // Newline suppression inside brackets makes an unclosed bracket fail
        // far from EOF, so it outranks the furthest-token classification.
        if let Some(open) = self.unclosed {
            return ParseError::syntax(
                format!("'{}' was never closed", open_char(open.kind)),
                open.span,
            );
        }
        let idx = self.furthest.min(self.tokens.len().saturating_sub(1));
        let token = self.tokens[idx];
        match token.kind {
            TokenKind::Indent => ParseError::indentation("unexpected indent", token.span),
            TokenKind::Dedent => ParseError::indentation("unexpected unindent", token.span),
            TokenKind::EndMarker => {
                ParseError::syntax("unexpected EOF while parsing", self.eof_span())
            }
            _ => ParseError::syntax("invalid syntax", token.span),
        }
    }
}

fn open_char(kind: TokenKind) -> char {
    match kind {
        TokenKind::LParen => '(',
        TokenKind::LBracket => '[',
        TokenKind::LBrace => '{',
        _ => unreachable!("not an open bracket: {kind:?}"),
    }
}
