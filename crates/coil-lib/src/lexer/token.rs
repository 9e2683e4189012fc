//! Token kinds for Python source.
//!
//! `TokenKind` serves two roles: raw kinds recognized by Logos, and
//! structural kinds (`Newline`, `Indent`, `Dedent`, `EndMarker`) synthesized
//! by the post-pass in [`super::tokenize`]. Keyword kinds carry no Logos
//! pattern either: the parser rewrites `Name` tokens using the grammar's
//! reserved-keyword table, so the lexer stays grammar-agnostic.

use logos::Logos;

use crate::span::Span;

/// Zero-copy token: kind + span, text sliced from the source when needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }

    #[inline]
    pub fn text<'src>(&self, source: &'src str) -> &'src str {
        self.span.text(source)
    }
}

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[repr(u16)]
pub enum TokenKind {
    #[regex(r"[\p{XID_Start}_]\p{XID_Continue}*")]
    Name = 0,

    // Integer literals in all bases, floats (leading dot, trailing dot,
    // exponent-only), and imaginary forms. Underscore separators are accepted
    // here; their version gate lives in number decoding.
    #[regex(r"0[bB](?:_?[01])+")]
    #[regex(r"0[oO](?:_?[0-7])+")]
    #[regex(r"0[xX](?:_?[0-9a-fA-F])+")]
    #[regex(r"[0-9](?:_?[0-9])*[jJ]?")]
    #[regex(
        r"(?:[0-9](?:_?[0-9])*)?\.[0-9](?:_?[0-9])*(?:[eE][+-]?[0-9](?:_?[0-9])*)?[jJ]?",
        priority = 5
    )]
    #[regex(r"[0-9](?:_?[0-9])*\.(?:[0-9](?:_?[0-9])*)?(?:[eE][+-]?[0-9](?:_?[0-9])*)?[jJ]?")]
    #[regex(r"[0-9](?:_?[0-9])*[eE][+-]?[0-9](?:_?[0-9])*[jJ]?")]
    Number,

    // One-line and triple-quoted strings, with optional prefix letters
    // (r/b/u/f and combinations; validity of the combination is not a lexer
    // concern). Triple-quoted bodies may span lines; the `"{3,5}` close lets
    // content end in up to two quote characters.
    #[regex(r#"[rRbBuUfF]{0,3}"(?:[^"\\\r\n]|\\(?s:.))*""#)]
    #[regex(r"[rRbBuUfF]{0,3}'(?:[^'\\\r\n]|\\(?s:.))*'")]
    #[regex(r#"[rRbBuUfF]{0,3}"""(?:[^"\\]|\\(?s:.)|"(?:[^"\\]|\\(?s:.))|""(?:[^"\\]|\\(?s:.)))*"{3,5}"#)]
    #[regex(r"[rRbBuUfF]{0,3}'''(?:[^'\\]|\\(?s:.)|'(?:[^'\\]|\\(?s:.))|''(?:[^'\\]|\\(?s:.)))*'{3,5}")]
    String,

    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,

    #[token(":")]
    Colon,
    #[token(":=")]
    ColonEqual,
    #[token(",")]
    Comma,
    #[token(";")]
    Semi,
    #[token(".")]
    Dot,
    #[token("...")]
    Ellipsis,
    #[token("->")]
    RArrow,
    #[token("=")]
    Equals,

    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("**")]
    DoubleStar,
    #[token("/")]
    Slash,
    #[token("//")]
    DoubleSlash,
    #[token("%")]
    Percent,
    #[token("@")]
    At,
    #[token("&")]
    Amper,
    #[token("|")]
    VBar,
    #[token("^")]
    Circumflex,
    #[token("~")]
    Tilde,
    #[token("<<")]
    LeftShift,
    #[token(">>")]
    RightShift,

    #[token("<")]
    Less,
    #[token(">")]
    Greater,
    #[token("==")]
    EqEqual,
    #[token("!=")]
    NotEqual,
    #[token("<=")]
    LessEqual,
    #[token(">=")]
    GreaterEqual,

    #[token("+=")]
    PlusEqual,
    #[token("-=")]
    MinusEqual,
    #[token("*=")]
    StarEqual,
    #[token("**=")]
    DoubleStarEqual,
    #[token("/=")]
    SlashEqual,
    #[token("//=")]
    DoubleSlashEqual,
    #[token("%=")]
    PercentEqual,
    #[token("@=")]
    AtEqual,
    #[token("&=")]
    AmperEqual,
    #[token("|=")]
    VBarEqual,
    #[token("^=")]
    CircumflexEqual,
    #[token("<<=")]
    LeftShiftEqual,
    #[token(">>=")]
    RightShiftEqual,

    // Lexer-internal trivia, consumed by the post-pass.
    #[regex(r"[ \t\f]+")]
    #[doc(hidden)]
    Whitespace,
    #[regex(r"#[^\r\n]*", allow_greedy = true)]
    #[doc(hidden)]
    Comment,
    #[regex(r"\\\r?\n")]
    #[doc(hidden)]
    LineJoin,
    #[regex(r"\r?\n|\r")]
    #[doc(hidden)]
    NewlineRaw,

    // Structural kinds synthesized by the post-pass.
    /// End of a non-blank logical line.
    Newline,
    Indent,
    Dedent,
    /// End of input; always the last token of a well-formed stream.
    EndMarker,
    /// Lexical error; the stream's `error` field carries the message.
    ErrorToken,

    // Reserved keywords, rewritten from `Name` by the parser using the
    // grammar's keyword table.
    KwFalse,
    KwNone,
    KwTrue,
    KwAnd,
    KwAs,
    KwAssert,
    KwAsync,
    KwAwait,
    KwBreak,
    KwClass,
    KwContinue,
    KwDef,
    KwDel,
    KwElif,
    KwElse,
    KwExcept,
    KwFinally,
    KwFor,
    KwFrom,
    KwGlobal,
    KwIf,
    KwImport,
    KwIn,
    KwIs,
    KwLambda,
    KwNonlocal,
    KwNot,
    KwOr,
    KwPass,
    KwRaise,
    KwReturn,
    KwTry,
    KwWhile,
    KwWith,
    KwYield,
}

impl TokenKind {
    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            TokenKind::Whitespace | TokenKind::Comment | TokenKind::LineJoin
        )
    }

    pub fn is_keyword(self) -> bool {
        self >= TokenKind::KwFalse
    }

    /// Stable name used by token dumps.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Name => "NAME",
            TokenKind::Number => "NUMBER",
            TokenKind::String => "STRING",
            TokenKind::Newline => "NEWLINE",
            TokenKind::Indent => "INDENT",
            TokenKind::Dedent => "DEDENT",
            TokenKind::EndMarker => "ENDMARKER",
            TokenKind::ErrorToken => "ERRORTOKEN",
            kind if kind.is_keyword() => "KEYWORD",
            _ => "OP",
        }
    }
}

impl PartialOrd for TokenKind {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TokenKind {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (*self as u16).cmp(&(*other as u16))
    }
}
