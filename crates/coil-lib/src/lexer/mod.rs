//! Tokenizer for Python source.
//!
//! Two stages, as in most Logos-based lexers: a raw pass that recognizes
//! names, literals, operators and trivia over the whole input, then a
//! structural post-pass that turns the physical-line stream into Python's
//! logical-line token contract:
//!
//! - `NEWLINE` at the end of every non-blank logical line
//! - `INDENT`/`DEDENT` from an indentation stack (tabs advance to the next
//!   multiple of 8; a shadow stack with tab size 1 detects indentation whose
//!   meaning depends on the tab width, which is a `TabError`)
//! - newlines inside `()`/`[]`/`{}` are suppressed (implicit line joining)
//! - `\` at end of line joins physical lines explicitly
//! - `ENDMARKER` terminates every well-formed stream
//!
//! Lexical errors stop the stream at an `ErrorToken`; the specific message
//! travels in [`TokenStream::error`] so the parser can re-raise it with the
//! right error kind.

pub mod token;

#[cfg(test)]
mod tests;

use logos::Logos;

use crate::diagnostics::{ParseError, ParseErrorKind};
use crate::span::Span;

pub use token::{Token, TokenKind};

/// CPython's tab size for indentation columns.
const TAB_SIZE: u32 = 8;
/// CPython's MAXINDENT.
const MAX_INDENT: usize = 100;

/// An open `(`/`[`/`{` that has not been closed yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpenBracket {
    pub kind: TokenKind,
    pub span: Span,
}

impl OpenBracket {
    fn open_char(&self) -> char {
        match self.kind {
            TokenKind::LParen => '(',
            TokenKind::LBracket => '[',
            TokenKind::LBrace => '{',
            _ => unreachable!("not an open bracket: {:?}", self.kind),
        }
    }
}

/// Complete token stream for one source text.
#[derive(Debug, Clone)]
pub struct TokenStream {
    pub tokens: Vec<Token>,
    /// First lexical error, if any. The stream then ends with `ErrorToken`.
    pub error: Option<ParseError>,
    /// Innermost bracket still open at end of input, for
    /// `'(' was never closed` reporting.
    pub unclosed: Option<OpenBracket>,
}

/// Tokenizes `source` into the structural token stream consumed by the parser.
pub fn tokenize(source: &str) -> TokenStream {
    Lexer::new(source).run()
}

struct Lexer<'src> {
    source: &'src str,
    tokens: Vec<Token>,
    /// Indentation stack of (column, tab-size-1 column) pairs.
    indents: Vec<(u32, u32)>,
    brackets: Vec<OpenBracket>,
    /// Byte offset where the current logical line's indentation starts.
    line_start: u32,
    at_line_start: bool,
    line_has_content: bool,
    error: Option<ParseError>,
}

impl<'src> Lexer<'src> {
    fn new(source: &'src str) -> Self {
        Self {
            source,
            tokens: Vec::new(),
            indents: vec![(0, 0)],
            brackets: Vec::new(),
            line_start: 0,
            at_line_start: true,
            line_has_content: false,
            error: None,
        }
    }

    fn run(mut self) -> TokenStream {
        let mut raw = TokenKind::lexer(self.source);
        while let Some(result) = raw.next() {
            let range = raw.span();
            let span = Span::new(range.start as u32, range.end as u32);
            match result {
                Ok(kind) => {
                    if !self.token(kind, span) {
                        break;
                    }
                }
                Err(()) => {
                    self.fail(ParseError::syntax("invalid syntax", span), span);
                    break;
                }
            }
        }

        if self.error.is_none() {
            self.finish();
        }

        TokenStream {
            tokens: self.tokens,
            error: self.error,
            unclosed: self.brackets.last().copied(),
        }
    }

    /// Processes one raw token. Returns `false` to stop the stream.
    fn token(&mut self, kind: TokenKind, span: Span) -> bool {
        if kind == TokenKind::NewlineRaw {
            if self.brackets.is_empty() {
                if self.line_has_content {
                    self.tokens.push(Token::new(TokenKind::Newline, span));
                    self.line_has_content = false;
                }
                self.at_line_start = true;
                self.line_start = span.end;
            }
            return true;
        }

        if kind.is_trivia() {
            return true;
        }

        if self.at_line_start && self.brackets.is_empty() {
            self.at_line_start = false;
            if let Err(err) = self.handle_indentation(span.start) {
                self.fail(err, Span::empty(span.start));
                return false;
            }
        }

        match kind {
            TokenKind::LParen | TokenKind::LBracket | TokenKind::LBrace => {
                self.brackets.push(OpenBracket { kind, span });
            }
            TokenKind::RParen | TokenKind::RBracket | TokenKind::RBrace => {
                let close = close_char(kind);
                match self.brackets.pop() {
                    None => {
                        let err =
                            ParseError::syntax(format!("unmatched '{close}'"), span);
                        self.fail(err, span);
                        return false;
                    }
                    Some(open) if close_char(matching_close(open.kind)) != close => {
                        let err = ParseError::syntax(
                            format!(
                                "closing parenthesis '{close}' does not match opening parenthesis '{}'",
                                open.open_char()
                            ),
                            span,
                        )
                        .related_to("opened here", open.span);
                        self.fail(err, span);
                        return false;
                    }
                    Some(_) => {}
                }
            }
            _ => {}
        }

        self.line_has_content = true;
        self.tokens.push(Token::new(kind, span));
        true
    }

    /// Compares this line's indentation against the stack, emitting
    /// `Indent`/`Dedent` tokens.
    fn handle_indentation(&mut self, token_start: u32) -> Result<(), ParseError> {
        let (col, altcol) = self.measure_indent(token_start);
        let here = Span::empty(token_start);
        let &(top, alt_top) = self.indents.last().expect("indent stack never empty");

        if col == top {
            if altcol != alt_top {
                return Err(self.tab_error(here));
            }
            return Ok(());
        }

        if col > top {
            if altcol <= alt_top {
                return Err(self.tab_error(here));
            }
            if self.indents.len() >= MAX_INDENT {
                return Err(ParseError::indentation(
                    "too many levels of indentation",
                    here,
                ));
            }
            self.indents.push((col, altcol));
            self.tokens.push(Token::new(
                TokenKind::Indent,
                Span::new(self.line_start, token_start),
            ));
            return Ok(());
        }

        while self.indents.len() > 1 && col < self.indents.last().expect("non-empty").0 {
            self.indents.pop();
            self.tokens.push(Token::new(TokenKind::Dedent, here));
        }
        let &(top, alt_top) = self.indents.last().expect("indent stack never empty");
        if col != top {
            return Err(ParseError::indentation(
                "unindent does not match any outer indentation level",
                here,
            ));
        }
        if altcol != alt_top {
            return Err(self.tab_error(here));
        }
        Ok(())
    }

    /// Indentation columns of the current line: tab-size-8 and tab-size-1.
    fn measure_indent(&self, token_start: u32) -> (u32, u32) {
        let slice = &self.source[self.line_start as usize..token_start as usize];
        let mut col = 0u32;
        let mut altcol = 0u32;
        for c in slice.chars() {
            match c {
                ' ' => {
                    col += 1;
                    altcol += 1;
                }
                '\t' => {
                    col = col / TAB_SIZE * TAB_SIZE + TAB_SIZE;
                    altcol += 1;
                }
                '\x0c' => {
                    col = 0;
                    altcol = 0;
                }
                // Explicit line join at line start: indentation is taken
                // from the first physical line only.
                _ => break,
            }
        }
        (col, altcol)
    }

    fn tab_error(&self, span: Span) -> ParseError {
        ParseError::new(
            ParseErrorKind::Tab,
            "inconsistent use of tabs and spaces in indentation",
            span,
        )
    }

    /// Records the error and terminates the stream with an `ErrorToken`.
    fn fail(&mut self, err: ParseError, span: Span) {
        self.error = Some(err);
        self.tokens.push(Token::new(TokenKind::ErrorToken, span));
    }

    /// Closes out the stream: final `NEWLINE`, pending dedents, `ENDMARKER`.
    fn finish(&mut self) {
        let eof = Span::empty(self.source.len() as u32);
        if self.line_has_content {
            self.tokens.push(Token::new(TokenKind::Newline, eof));
        }
        while self.indents.len() > 1 {
            self.indents.pop();
            self.tokens.push(Token::new(TokenKind::Dedent, eof));
        }
        self.tokens.push(Token::new(TokenKind::EndMarker, eof));
    }
}

fn matching_close(open: TokenKind) -> TokenKind {
    match open {
        TokenKind::LParen => TokenKind::RParen,
        TokenKind::LBracket => TokenKind::RBracket,
        TokenKind::LBrace => TokenKind::RBrace,
        _ => unreachable!("not an open bracket: {open:?}"),
    }
}

fn close_char(kind: TokenKind) -> char {
    match kind {
        TokenKind::RParen => ')',
        TokenKind::RBracket => ']',
        TokenKind::RBrace => '}',
        _ => unreachable!("not a close bracket: {kind:?}"),
    }
}
