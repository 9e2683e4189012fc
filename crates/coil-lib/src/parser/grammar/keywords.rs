//! Keyword tables.
//!
//! Reserved keywords are rewritten onto NAME tokens when the parser is
//! constructed; soft keywords stay plain names and are matched positionally
//! with `expect_soft_keyword`.

use crate::lexer::TokenKind;

/// Names the grammar reserves only in specific positions.
pub(crate) const SOFT_KEYWORDS: &[&str] = &["type"];

pub(crate) fn reserved(text: &str) -> Option<TokenKind> {
    let kind = match text {
        "False" => TokenKind::KwFalse,
        "None" => TokenKind::KwNone,
        "True" => TokenKind::KwTrue,
        "and" => TokenKind::KwAnd,
        "as" => TokenKind::KwAs,
        "assert" => TokenKind::KwAssert,
        "async" => TokenKind::KwAsync,
        "await" => TokenKind::KwAwait,
        "break" => TokenKind::KwBreak,
        "class" => TokenKind::KwClass,
        "continue" => TokenKind::KwContinue,
        "def" => TokenKind::KwDef,
        "del" => TokenKind::KwDel,
        "elif" => TokenKind::KwElif,
        "else" => TokenKind::KwElse,
        "except" => TokenKind::KwExcept,
        "finally" => TokenKind::KwFinally,
        "for" => TokenKind::KwFor,
        "from" => TokenKind::KwFrom,
        "global" => TokenKind::KwGlobal,
        "if" => TokenKind::KwIf,
        "import" => TokenKind::KwImport,
        "in" => TokenKind::KwIn,
        "is" => TokenKind::KwIs,
        "lambda" => TokenKind::KwLambda,
        "nonlocal" => TokenKind::KwNonlocal,
        "not" => TokenKind::KwNot,
        "or" => TokenKind::KwOr,
        "pass" => TokenKind::KwPass,
        "raise" => TokenKind::KwRaise,
        "return" => TokenKind::KwReturn,
        "try" => TokenKind::KwTry,
        "while" => TokenKind::KwWhile,
        "with" => TokenKind::KwWith,
        "yield" => TokenKind::KwYield,
        _ => return None,
    };
    Some(kind)
}
