//! Message compatibility for the diagnostic protocol.

use super::err;
use crate::{Error, ParseErrorKind, ParseOptions, parse_expression, parse_module};

#[test]
fn missing_colon_is_forced() {
    // The forced token fires in the permissive pass already; the report must
    // not be masked by a generic EOF error.
    assert_eq!(err("if x\n"), "SyntaxError: expected ':'");
    assert_eq!(err("while x\n    pass\n"), "SyntaxError: expected ':'");
    assert_eq!(err("for i in y\n    pass\n"), "SyntaxError: expected ':'");
}

#[test]
fn missing_paren_after_def_name() {
    assert_eq!(err("def f:\n    pass\n"), "SyntaxError: expected '('");
}

#[test]
fn missing_in_keyword() {
    assert_eq!(err("for i y:\n    pass\n"), "SyntaxError: expected 'in'");
}

#[test]
fn missing_indented_block() {
    let error = parse_module("if x:\npass\n", &ParseOptions::default()).unwrap_err();
    assert_eq!(error.to_string(), "IndentationError: expected an indented block");
    match error {
        Error::Parse(parse_err) => assert_eq!(parse_err.kind, ParseErrorKind::Indentation),
        other => panic!("expected a parse error, got {other:?}"),
    }
}

#[test]
fn unexpected_indent() {
    assert_eq!(
        err("x = 1\n    y = 2\n"),
        "IndentationError: unexpected indent"
    );
}

#[test]
fn unindent_mismatch_surfaces_through_the_parser() {
    assert_eq!(
        err("if x:\n        pass\n    pass\n"),
        "IndentationError: unindent does not match any outer indentation level"
    );
}

#[test]
fn inconsistent_tabs_surface_through_the_parser() {
    let error = parse_module("if x:\n    pass\n\tpass\n", &ParseOptions::default()).unwrap_err();
    assert_eq!(
        error.to_string(),
        "TabError: inconsistent use of tabs and spaces in indentation"
    );
}

#[test]
fn cannot_assign_to_literal() {
    assert_eq!(err("1 = x\n"), "SyntaxError: cannot assign to literal");
    assert_eq!(err("True = x\n"), "SyntaxError: cannot assign to True");
    assert_eq!(err("None = x\n"), "SyntaxError: cannot assign to None");
}

#[test]
fn cannot_assign_to_function_call() {
    assert_eq!(err("f() = 1\n"), "SyntaxError: cannot assign to function call");
}

#[test]
fn cannot_assign_to_expression() {
    assert_eq!(err("a + b = 1\n"), "SyntaxError: cannot assign to expression");
    assert_eq!(err("a < b = 1\n"), "SyntaxError: cannot assign to comparison");
}

#[test]
fn missing_comma_between_expressions() {
    assert_eq!(
        err("a b\n"),
        "SyntaxError: invalid syntax. Perhaps you forgot a comma?"
    );
}

#[test]
fn positional_after_keyword_argument() {
    assert_eq!(
        err("f(key=1, 2)\n"),
        "SyntaxError: positional argument follows keyword argument"
    );
}

#[test]
fn parameter_default_ordering() {
    assert_eq!(
        err("def f(a=1, b):\n    pass\n"),
        "SyntaxError: parameter without a default follows parameter with a default"
    );
}

#[test]
fn unclosed_bracket_wins_over_generic_diagnosis() {
    assert_eq!(err("x = (1 + 2\n"), "SyntaxError: '(' was never closed");
    assert_eq!(err("x = [1, 2\n"), "SyntaxError: '[' was never closed");
}

#[test]
fn unexpected_eof_in_eval_mode() {
    let error = parse_expression("", &ParseOptions::default()).unwrap_err();
    assert_eq!(error.to_string(), "SyntaxError: unexpected EOF while parsing");
}

#[test]
fn garbage_token_is_invalid_syntax() {
    assert_eq!(err("x = $\n"), "SyntaxError: invalid syntax");
}

#[test]
fn generic_invalid_syntax_points_at_furthest_token() {
    assert_eq!(err("x = 1 +\n"), "SyntaxError: invalid syntax");
}

#[test]
fn unmatched_closer_carries_through_the_parser() {
    assert_eq!(err("x = )\n"), "SyntaxError: unmatched ')'");
}

#[test]
fn exactly_one_error_per_failed_parse() {
    // Both the missing colon and the bad target would each raise; the first
    // raised error wins and nothing overwrites it.
    let error = parse_module("if x\n    1 = 2\n", &ParseOptions::default()).unwrap_err();
    assert_eq!(error.to_string(), "SyntaxError: expected ':'");
}
