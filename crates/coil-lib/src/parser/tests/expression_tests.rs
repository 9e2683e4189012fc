//! Expression grammar coverage via AST dumps.

use insta::assert_snapshot;

use super::{dump, dump_expr};

#[test]
fn name_and_constants() {
    assert_snapshot!(dump_expr("x"), @r"
    Expression
      Name 'x'
    ");
    assert_snapshot!(dump_expr("..."), @r"
    Expression
      Constant Ellipsis
    ");
    assert_snapshot!(dump_expr("None"), @r"
    Expression
      Constant None
    ");
}

#[test]
fn number_literals() {
    assert_snapshot!(dump_expr("0xFF"), @r"
    Expression
      Constant 255
    ");
    assert_snapshot!(dump_expr("3.5"), @r"
    Expression
      Constant 3.5
    ");
    assert_snapshot!(dump_expr("2j"), @r"
    Expression
      Constant 2.0j
    ");
    assert_snapshot!(dump_expr("99999999999999999999"), @r"
    Expression
      Constant BigInt '99999999999999999999'
    ");
}

#[test]
fn adjacent_strings_concatenate() {
    assert_snapshot!(dump_expr("'ab' 'cd'"), @r#"
    Expression
      Constant "abcd"
    "#);
}

#[test]
fn boolean_operators_collect_operands() {
    assert_snapshot!(dump_expr("a or b or c"), @r"
    Expression
      BoolOp Or
        Name 'a'
        Name 'b'
        Name 'c'
    ");
    assert_snapshot!(dump_expr("a and not b"), @r"
    Expression
      BoolOp And
        Name 'a'
        UnaryOp Not
          Name 'b'
    ");
}

#[test]
fn chained_comparison() {
    assert_snapshot!(dump_expr("a < b <= c"), @r"
    Expression
      Compare Lt LtE
        Name 'a'
        Name 'b'
        Name 'c'
    ");
}

#[test]
fn membership_and_identity() {
    assert_snapshot!(dump_expr("a not in b"), @r"
    Expression
      Compare NotIn
        Name 'a'
        Name 'b'
    ");
    assert_snapshot!(dump_expr("a is not b"), @r"
    Expression
      Compare IsNot
        Name 'a'
        Name 'b'
    ");
}

#[test]
fn bitwise_and_shift_precedence() {
    // '|' is loosest, then '^', '&', shifts.
    assert_snapshot!(dump_expr("1 | 2 ^ 3 & 4 << 5"), @r"
    Expression
      BinOp BitOr
        Constant 1
        BinOp BitXor
          Constant 2
          BinOp BitAnd
            Constant 3
            BinOp LShift
              Constant 4
              Constant 5
    ");
}

#[test]
fn shift_is_left_associative() {
    assert_snapshot!(dump_expr("x >> 1 >> 2"), @r"
    Expression
      BinOp RShift
        BinOp RShift
          Name 'x'
          Constant 1
        Constant 2
    ");
}

#[test]
fn floor_div_and_matmul() {
    assert_snapshot!(dump_expr("a // b @ m % c"), @r"
    Expression
      BinOp Mod
        BinOp MatMult
          BinOp FloorDiv
            Name 'a'
            Name 'b'
          Name 'm'
        Name 'c'
    ");
}

#[test]
fn power_is_right_associative() {
    assert_snapshot!(dump_expr("2 ** 3 ** 2"), @r"
    Expression
      BinOp Pow
        Constant 2
        BinOp Pow
          Constant 3
          Constant 2
    ");
}

#[test]
fn unary_chain() {
    assert_snapshot!(dump_expr("-~+x"), @r"
    Expression
      UnaryOp USub
        UnaryOp Invert
          UnaryOp UAdd
            Name 'x'
    ");
}

#[test]
fn primary_trailers_chain_left() {
    assert_snapshot!(dump_expr("a.b(c)[d]"), @r"
    Expression
      Subscript
        Call
          func:
            Attribute 'b'
              Name 'a'
          args:
            Name 'c'
        Name 'd'
    ");
}

#[test]
fn call_with_keyword_arguments() {
    assert_snapshot!(dump_expr("f(1, x, key=2)"), @r"
    Expression
      Call
        func:
          Name 'f'
        args:
          Constant 1
          Name 'x'
        keywords:
          Keyword 'key'
            Constant 2
    ");
}

#[test]
fn empty_call() {
    assert_snapshot!(dump_expr("f()"), @r"
    Expression
      Call
        func:
          Name 'f'
    ");
}

#[test]
fn displays() {
    assert_snapshot!(dump_expr("[1, 2, 3]"), @r"
    Expression
      List
        Constant 1
        Constant 2
        Constant 3
    ");
    assert_snapshot!(dump_expr("[]"), @r"
    Expression
      List
    ");
    assert_snapshot!(dump_expr("()"), @r"
    Expression
      Tuple
    ");
    assert_snapshot!(dump_expr("(1, 2)"), @r"
    Expression
      Tuple
        Constant 1
        Constant 2
    ");
}

#[test]
fn parentheses_are_transparent() {
    assert_snapshot!(dump_expr("(a + b) * c"), @r"
    Expression
      BinOp Mult
        BinOp Add
          Name 'a'
          Name 'b'
        Name 'c'
    ");
}

#[test]
fn bare_tuple_in_eval_mode() {
    assert_snapshot!(dump_expr("1, 2"), @r"
    Expression
      Tuple
        Constant 1
        Constant 2
    ");
}

#[test]
fn walrus_in_a_group() {
    assert_snapshot!(dump("x = (y := 1)\n"), @r"
    Module
      Assign
        targets:
          Name 'x'
        value:
          NamedExpr
            Name 'y'
            Constant 1
    ");
}

#[test]
fn subscript_tuple() {
    assert_snapshot!(dump_expr("m[1, 2]"), @r"
    Expression
      Subscript
        Name 'm'
        Tuple
          Constant 1
          Constant 2
    ");
}
