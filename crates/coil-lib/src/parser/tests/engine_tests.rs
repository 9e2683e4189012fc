//! Engine-level properties: cursor, memoization, lookahead, recursion guard,
//! version gating.

use insta::assert_snapshot;

use super::{dump, dump_expr};
use crate::lexer::TokenKind;
use crate::parser::Parser;
use crate::{Error, ParseErrorKind, ParseOptions, parse_module};

#[test]
fn parsing_is_deterministic() {
    let source = "x = f(1 + 2 * 3, key=4)\nif x:\n    pass\n";
    assert_eq!(dump(source), dump(source));
}

#[test]
fn reset_to_mark_is_a_no_op() {
    let mut p = Parser::new("a + b\n", &ParseOptions::default());
    let m = p.mark();
    p.reset(m);
    assert_eq!(p.mark(), m);

    let first = p.parse_expression().expect("parses");
    p.reset(m);
    let second = p.parse_expression().expect("parses");
    assert_eq!(first, second);
}

#[test]
fn negative_lookahead_consumes_nothing() {
    let mut p = Parser::new("a = 1\n", &ParseOptions::default());
    let m = p.mark();
    // Fails on a match, succeeds on a mismatch, moves the cursor in neither
    // case.
    assert!(!p.negative_lookahead(|p| p.expect(TokenKind::Name)));
    assert_eq!(p.mark(), m);
    assert!(p.negative_lookahead(|p| p.expect(TokenKind::Number)));
    assert_eq!(p.mark(), m);
}

#[test]
fn positive_lookahead_consumes_nothing() {
    let mut p = Parser::new("a + b\n", &ParseOptions::default());
    let m = p.mark();
    assert!(p.positive_lookahead(|p| p.expect(TokenKind::Name)).is_some());
    assert_eq!(p.mark(), m);
}

#[test]
fn memoized_failures_replay_at_the_same_position() {
    // '1' is not an assignment target, so star_targets fails; the cached
    // failure must leave the cursor where the first attempt did.
    let mut p = Parser::new("1 + 2\n", &ParseOptions::default());
    let m = p.mark();
    assert!(p.parse_star_targets().is_none());
    assert_eq!(p.mark(), m);
    assert!(p.parse_star_targets().is_none());
    assert_eq!(p.mark(), m);
}

#[test]
fn memoized_successes_replay_to_the_same_end() {
    let mut p = Parser::new("a.b.c = 1\n", &ParseOptions::default());
    let m = p.mark();
    let first = p.parse_star_targets().expect("parses");
    let end = p.mark();
    p.reset(m);
    let second = p.parse_star_targets().expect("parses");
    assert_eq!(p.mark(), end);
    assert_eq!(first, second);
}

#[test]
fn subtraction_is_left_associative() {
    assert_snapshot!(dump_expr("1 - 2 - 3"), @r"
    Expression
      BinOp Sub
        BinOp Sub
          Constant 1
          Constant 2
        Constant 3
    ");
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_snapshot!(dump("a = 1 + 2 * 3\n"), @r"
    Module
      Assign
        targets:
          Name 'a'
        value:
          BinOp Add
            Constant 1
            BinOp Mult
              Constant 2
              Constant 3
    ");
}

#[test]
fn deep_nesting_hits_the_recursion_limit() {
    let options = ParseOptions {
        recursion_limit: 200,
        ..Default::default()
    };
    let deep = format!("x = {}1{}\n", "(".repeat(100), ")".repeat(100));
    match parse_module(&deep, &options) {
        Err(Error::RecursionLimitExceeded) => {}
        other => panic!("expected recursion limit error, got {other:?}"),
    }
    // The same limit leaves shallow input untouched.
    assert!(parse_module("x = ((1))\n", &options).is_ok());
}

#[test]
fn walrus_is_version_gated() {
    let options = ParseOptions {
        feature_version: 7,
        ..Default::default()
    };
    let err = parse_module("while x := f():\n    pass\n", &options).unwrap_err();
    assert_eq!(
        err.to_string(),
        "SyntaxError: The ':=' operator is only supported in Python 3.8 and greater"
    );
    match err {
        Error::Parse(parse_err) => assert_eq!(parse_err.kind, ParseErrorKind::Version),
        other => panic!("expected a parse error, got {other:?}"),
    }
    assert!(parse_module("while x := f():\n    pass\n", &ParseOptions::default()).is_ok());
}

#[test]
fn numeric_underscores_are_version_gated() {
    let options = ParseOptions {
        feature_version: 5,
        ..Default::default()
    };
    let err = parse_module("x = 1_000\n", &options).unwrap_err();
    assert_eq!(
        err.to_string(),
        "SyntaxError: Underscores in numeric literals are only supported in Python 3.6 and greater"
    );
}

#[test]
fn type_statement_is_version_gated() {
    let options = ParseOptions {
        feature_version: 11,
        ..Default::default()
    };
    let err = parse_module("type X = int\n", &options).unwrap_err();
    assert_eq!(
        err.to_string(),
        "SyntaxError: Type statement is only supported in Python 3.12 and greater"
    );
}
