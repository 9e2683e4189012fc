use indoc::indoc;
use insta::assert_snapshot;

use super::{TokenKind, tokenize};

fn dump(source: &str) -> String {
    let stream = tokenize(source);
    let mut out = String::new();
    for tok in &stream.tokens {
        let name = tok.kind.name();
        match tok.kind {
            TokenKind::Newline
            | TokenKind::Indent
            | TokenKind::Dedent
            | TokenKind::EndMarker
            | TokenKind::ErrorToken => out.push_str(name),
            _ => {
                out.push_str(name);
                out.push(' ');
                out.push('\'');
                out.push_str(tok.text(source));
                out.push('\'');
            }
        }
        out.push('\n');
    }
    if let Some(err) = &stream.error {
        out.push_str("error: ");
        out.push_str(&err.to_string());
        out.push('\n');
    }
    out
}

#[test]
fn simple_statement() {
    assert_snapshot!(dump("x = 1\n"), @r"
    NAME 'x'
    OP '='
    NUMBER '1'
    NEWLINE
    ENDMARKER
    ");
}

#[test]
fn final_newline_is_synthesized() {
    // No trailing newline in the source, but the stream still ends in
    // NEWLINE ENDMARKER.
    assert_snapshot!(dump("pass"), @r"
    NAME 'pass'
    NEWLINE
    ENDMARKER
    ");
}

#[test]
fn empty_input_is_just_endmarker() {
    assert_snapshot!(dump(""), @"ENDMARKER");
}

#[test]
fn indent_and_dedent() {
    let source = indoc! {"
        if x:
            pass
        y
    "};
    assert_snapshot!(dump(source), @r"
    NAME 'if'
    NAME 'x'
    OP ':'
    NEWLINE
    INDENT
    NAME 'pass'
    NEWLINE
    DEDENT
    NAME 'y'
    NEWLINE
    ENDMARKER
    ");
}

#[test]
fn dedents_are_closed_at_eof() {
    let source = "if x:\n    if y:\n        pass\n";
    let stream = tokenize(source);
    let dedents = stream
        .tokens
        .iter()
        .filter(|t| t.kind == TokenKind::Dedent)
        .count();
    assert_eq!(dedents, 2);
    assert_eq!(
        stream.tokens.last().map(|t| t.kind),
        Some(TokenKind::EndMarker)
    );
}

#[test]
fn blank_and_comment_lines_produce_no_newline() {
    let source = indoc! {"
        x

        # a comment
        y
    "};
    assert_snapshot!(dump(source), @r"
    NAME 'x'
    NEWLINE
    NAME 'y'
    NEWLINE
    ENDMARKER
    ");
}

#[test]
fn newlines_inside_brackets_are_suppressed() {
    let source = "(1 +\n 2)\n";
    assert_snapshot!(dump(source), @r"
    OP '('
    NUMBER '1'
    OP '+'
    NUMBER '2'
    OP ')'
    NEWLINE
    ENDMARKER
    ");
}

#[test]
fn backslash_joins_physical_lines() {
    let source = "x = 1 + \\\n    2\n";
    assert_snapshot!(dump(source), @r"
    NAME 'x'
    OP '='
    NUMBER '1'
    OP '+'
    NUMBER '2'
    NEWLINE
    ENDMARKER
    ");
}

#[test]
fn triple_quoted_string_spans_lines() {
    let source = "s = \"\"\"one\ntwo\"\"\"\n";
    let stream = tokenize(source);
    assert!(stream.error.is_none());
    let string = stream
        .tokens
        .iter()
        .find(|t| t.kind == TokenKind::String)
        .expect("string token");
    assert_eq!(string.text(source), "\"\"\"one\ntwo\"\"\"");
}

#[test]
fn unindent_must_match_an_outer_level() {
    let source = "if x:\n        pass\n    pass\n";
    let stream = tokenize(source);
    let err = stream.error.expect("lexical error");
    assert_eq!(
        err.to_string(),
        "IndentationError: unindent does not match any outer indentation level"
    );
    assert_eq!(
        stream.tokens.last().map(|t| t.kind),
        Some(TokenKind::ErrorToken)
    );
}

#[test]
fn inconsistent_tabs_and_spaces() {
    // Four spaces, then a lone tab. With tab size 8 the tab indents deeper,
    // with tab size 1 it does not, so the meaning depends on the tab width.
    let source = "if x:\n    pass\n\tpass\n";
    let stream = tokenize(source);
    let err = stream.error.expect("lexical error");
    assert_eq!(
        err.to_string(),
        "TabError: inconsistent use of tabs and spaces in indentation"
    );
}

#[test]
fn tabs_alone_are_consistent() {
    let source = "if x:\n\tpass\n";
    let stream = tokenize(source);
    assert!(stream.error.is_none());
    assert!(stream.tokens.iter().any(|t| t.kind == TokenKind::Indent));
}

#[test]
fn unclosed_bracket_is_recorded() {
    let stream = tokenize("(1 + 2\n");
    assert!(stream.error.is_none());
    let open = stream.unclosed.expect("unclosed bracket");
    assert_eq!(open.kind, TokenKind::LParen);
    assert_eq!(open.span.start, 0);
}

#[test]
fn mismatched_closer() {
    let stream = tokenize("(1 + 2]\n");
    let err = stream.error.expect("lexical error");
    assert_eq!(
        err.to_string(),
        "SyntaxError: closing parenthesis ']' does not match opening parenthesis '('"
    );
}

#[test]
fn unmatched_closer() {
    let stream = tokenize("1)\n");
    let err = stream.error.expect("lexical error");
    assert_eq!(err.to_string(), "SyntaxError: unmatched ')'");
}

#[test]
fn number_forms() {
    let source = "0b101 0o17 0xFF 42 3.14 .5 1. 1e10 2j 1_000\n";
    let stream = tokenize(source);
    assert!(stream.error.is_none());
    let numbers: Vec<_> = stream
        .tokens
        .iter()
        .filter(|t| t.kind == TokenKind::Number)
        .map(|t| t.text(source))
        .collect();
    assert_eq!(
        numbers,
        ["0b101", "0o17", "0xFF", "42", "3.14", ".5", "1.", "1e10", "2j", "1_000"]
    );
}

#[test]
fn walrus_and_arrow_lex_as_single_tokens() {
    let source = "(x := 1) -> y\n";
    let stream = tokenize(source);
    let kinds: Vec<_> = stream
        .tokens
        .iter()
        .map(|t| t.kind)
        .filter(|k| matches!(k, TokenKind::ColonEqual | TokenKind::RArrow))
        .collect();
    assert_eq!(kinds, [TokenKind::ColonEqual, TokenKind::RArrow]);
}
