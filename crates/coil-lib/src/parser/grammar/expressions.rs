//! The expression tower, layered as pegen layers it: named expression,
//! boolean operators, comparison chains, then the left-recursive binary
//! ladders down to unary, power, and primary trailers.

use crate::ast::{BoolOpKind, CmpOp, Expr, ExprKind, Keyword, Operator, UnaryOpKind};
use crate::diagnostics::ParseError;
use crate::lexer::TokenKind;

use super::super::cache::RuleId;
use super::super::core::Parser;

impl Parser<'_> {
    /// star_expressions: expression (',' expression)* ','?
    pub(in crate::parser) fn parse_star_expressions(&mut self) -> Option<Expr> {
        self.memoize(RuleId::StarExpressions, |p| {
            let start = p.mark();
            let first = p.parse_expression()?;
            if p.peek_kind() != TokenKind::Comma {
                return Some(first);
            }
            let mut elts = vec![first];
            while p.expect(TokenKind::Comma).is_some() {
                let m = p.mark();
                match p.parse_expression() {
                    Some(expr) => elts.push(expr),
                    None => {
                        if !p.ok() {
                            return None;
                        }
                        p.reset(m);
                        break;
                    }
                }
            }
            let span = p.span_from(start);
            Some(Expr::new(ExprKind::Tuple { elts }, span))
        })
    }

    /// expression: disjunction (conditional and lambda forms are out of scope)
    pub(in crate::parser) fn parse_expression(&mut self) -> Option<Expr> {
        self.parse_disjunction()
    }

    /// named_expression: NAME ':=' expression | expression
    pub(in crate::parser) fn parse_named_expression(&mut self) -> Option<Expr> {
        self.memoize(RuleId::NamedExpression, |p| {
            let start = p.mark();
            if let Some(name) = p.expect(TokenKind::Name)
                && p.expect(TokenKind::ColonEqual).is_some()
            {
                if !p.check_version(8, "The ':=' operator is") {
                    return None;
                }
                let Some(value) = p.parse_expression() else {
                    if !p.ok() {
                        return None;
                    }
                    p.reset(start);
                    return None;
                };
                let target = Expr::new(
                    ExprKind::Name {
                        id: p.text(name).to_owned(),
                    },
                    name.span,
                );
                let span = name.span.to(value.span);
                return Some(Expr::new(
                    ExprKind::NamedExpr {
                        target: Box::new(target),
                        value: Box::new(value),
                    },
                    span,
                ));
            }
            p.reset(start);
            p.parse_expression()
        })
    }

    /// disjunction: conjunction ('or' conjunction)*
    pub(in crate::parser) fn parse_disjunction(&mut self) -> Option<Expr> {
        self.memoize(RuleId::Disjunction, |p| {
            p.parse_bool_op(TokenKind::KwOr, BoolOpKind::Or, Self::parse_conjunction)
        })
    }

    /// conjunction: inversion ('and' inversion)*
    pub(in crate::parser) fn parse_conjunction(&mut self) -> Option<Expr> {
        self.memoize(RuleId::Conjunction, |p| {
            p.parse_bool_op(TokenKind::KwAnd, BoolOpKind::And, Self::parse_inversion)
        })
    }

    fn parse_bool_op(
        &mut self,
        kind: TokenKind,
        op: BoolOpKind,
        next: fn(&mut Self) -> Option<Expr>,
    ) -> Option<Expr> {
        let start = self.mark();
        let first = next(self)?;
        if self.peek_kind() != kind {
            return Some(first);
        }
        let mut values = vec![first];
        while self.expect(kind).is_some() {
            values.push(next(self)?);
        }
        let span = self.span_from(start);
        Some(Expr::new(ExprKind::BoolOp { op, values }, span))
    }

    /// inversion: 'not' inversion | comparison
    pub(in crate::parser) fn parse_inversion(&mut self) -> Option<Expr> {
        self.memoize(RuleId::Inversion, |p| {
            let start = p.mark();
            if p.expect(TokenKind::KwNot).is_some() {
                // 'not in' belongs to comparison, not to a unary chain.
                if p.peek_kind() == TokenKind::KwIn {
                    p.reset(start);
                    return None;
                }
                let operand = p.parse_inversion()?;
                let span = p.span_from(start);
                return Some(Expr::new(
                    ExprKind::UnaryOp {
                        op: UnaryOpKind::Not,
                        operand: Box::new(operand),
                    },
                    span,
                ));
            }
            p.parse_comparison()
        })
    }

    /// comparison: bitwise_or (compare_op bitwise_or)*
    pub(in crate::parser) fn parse_comparison(&mut self) -> Option<Expr> {
        self.memoize(RuleId::Comparison, |p| {
            let start = p.mark();
            let left = p.parse_bitwise_or()?;
            let mut ops = Vec::new();
            let mut comparators = Vec::new();
            loop {
                let m = p.mark();
                let Some(op) = p.parse_compare_op() else { break };
                let Some(right) = p.parse_bitwise_or() else {
                    if !p.ok() {
                        return None;
                    }
                    p.reset(m);
                    break;
                };
                ops.push(op);
                comparators.push(right);
            }
            if ops.is_empty() {
                return Some(left);
            }
            let span = p.span_from(start);
            Some(Expr::new(
                ExprKind::Compare {
                    left: Box::new(left),
                    ops,
                    comparators,
                },
                span,
            ))
        })
    }

    fn parse_compare_op(&mut self) -> Option<CmpOp> {
        let op = match self.peek_kind() {
            TokenKind::EqEqual => CmpOp::Eq,
            TokenKind::NotEqual => CmpOp::NotEq,
            TokenKind::LessEqual => CmpOp::LtE,
            TokenKind::Less => CmpOp::Lt,
            TokenKind::GreaterEqual => CmpOp::GtE,
            TokenKind::Greater => CmpOp::Gt,
            TokenKind::KwIn => CmpOp::In,
            TokenKind::KwIs => {
                self.advance();
                return if self.expect(TokenKind::KwNot).is_some() {
                    Some(CmpOp::IsNot)
                } else {
                    Some(CmpOp::Is)
                };
            }
            TokenKind::KwNot => {
                let m = self.mark();
                self.advance();
                if self.expect(TokenKind::KwIn).is_some() {
                    return Some(CmpOp::NotIn);
                }
                self.reset(m);
                return None;
            }
            _ => return None,
        };
        self.advance();
        Some(op)
    }

    /// bitwise_or: bitwise_or '|' bitwise_xor | bitwise_xor
    pub(in crate::parser) fn parse_bitwise_or(&mut self) -> Option<Expr> {
        self.binop_left_rec(
            RuleId::BitwiseOr,
            Self::parse_bitwise_or,
            Self::parse_bitwise_xor,
            &[(TokenKind::VBar, Operator::BitOr)],
        )
    }

    /// bitwise_xor: bitwise_xor '^' bitwise_and | bitwise_and
    pub(in crate::parser) fn parse_bitwise_xor(&mut self) -> Option<Expr> {
        self.binop_left_rec(
            RuleId::BitwiseXor,
            Self::parse_bitwise_xor,
            Self::parse_bitwise_and,
            &[(TokenKind::Circumflex, Operator::BitXor)],
        )
    }

    /// bitwise_and: bitwise_and '&' shift_expr | shift_expr
    pub(in crate::parser) fn parse_bitwise_and(&mut self) -> Option<Expr> {
        self.binop_left_rec(
            RuleId::BitwiseAnd,
            Self::parse_bitwise_and,
            Self::parse_shift_expr,
            &[(TokenKind::Amper, Operator::BitAnd)],
        )
    }

    /// shift_expr: shift_expr ('<<' | '>>') sum | sum
    pub(in crate::parser) fn parse_shift_expr(&mut self) -> Option<Expr> {
        self.binop_left_rec(
            RuleId::ShiftExpr,
            Self::parse_shift_expr,
            Self::parse_sum,
            &[
                (TokenKind::LeftShift, Operator::LShift),
                (TokenKind::RightShift, Operator::RShift),
            ],
        )
    }

    /// sum: sum ('+' | '-') term | term
    pub(in crate::parser) fn parse_sum(&mut self) -> Option<Expr> {
        self.binop_left_rec(
            RuleId::Sum,
            Self::parse_sum,
            Self::parse_term,
            &[
                (TokenKind::Plus, Operator::Add),
                (TokenKind::Minus, Operator::Sub),
            ],
        )
    }

    /// term: term ('*' | '/' | '//' | '%' | '@') factor | factor
    pub(in crate::parser) fn parse_term(&mut self) -> Option<Expr> {
        self.binop_left_rec(
            RuleId::Term,
            Self::parse_term,
            Self::parse_factor,
            &[
                (TokenKind::Star, Operator::Mult),
                (TokenKind::Slash, Operator::Div),
                (TokenKind::DoubleSlash, Operator::FloorDiv),
                (TokenKind::Percent, Operator::Mod),
                (TokenKind::At, Operator::MatMult),
            ],
        )
    }

    /// One left-recursive ladder rung, via the seed-growing resolver. The
    /// recursive alternative comes first, the fall-through to the next level
    /// second, so each grown seed extends the chain one operator to the
    /// right and the tree associates left.
    fn binop_left_rec(
        &mut self,
        rule: RuleId,
        this: fn(&mut Self) -> Option<Expr>,
        next: fn(&mut Self) -> Option<Expr>,
        ops: &[(TokenKind, Operator)],
    ) -> Option<Expr> {
        self.memoize_left_rec(rule, |p| {
            let start = p.mark();
            if let Some(left) = this(p)
                && let Some(op) = p.expect_binop(ops)
                && let Some(right) = next(p)
            {
                let span = left.span.to(right.span);
                return Some(Expr::new(
                    ExprKind::BinOp {
                        left: Box::new(left),
                        op,
                        right: Box::new(right),
                    },
                    span,
                ));
            }
            if !p.ok() {
                return None;
            }
            p.reset(start);
            next(p)
        })
    }

    fn expect_binop(&mut self, ops: &[(TokenKind, Operator)]) -> Option<Operator> {
        for &(kind, op) in ops {
            if self.expect(kind).is_some() {
                return Some(op);
            }
        }
        None
    }

    /// factor: ('+' | '-' | '~') factor | power
    pub(in crate::parser) fn parse_factor(&mut self) -> Option<Expr> {
        self.memoize(RuleId::Factor, |p| {
            let start = p.mark();
            let op = match p.peek_kind() {
                TokenKind::Plus => Some(UnaryOpKind::UAdd),
                TokenKind::Minus => Some(UnaryOpKind::USub),
                TokenKind::Tilde => Some(UnaryOpKind::Invert),
                _ => None,
            };
            let Some(op) = op else {
                return p.parse_power();
            };
            p.advance();
            let Some(operand) = p.parse_factor() else {
                if !p.ok() {
                    return None;
                }
                p.reset(start);
                return None;
            };
            let span = p.span_from(start);
            Some(Expr::new(
                ExprKind::UnaryOp {
                    op,
                    operand: Box::new(operand),
                },
                span,
            ))
        })
    }

    /// power: primary ['**' factor] (right-associative through factor)
    pub(in crate::parser) fn parse_power(&mut self) -> Option<Expr> {
        self.memoize(RuleId::Power, |p| {
            let base = p.parse_primary()?;
            let m = p.mark();
            if p.expect(TokenKind::DoubleStar).is_some() {
                if let Some(exp) = p.parse_factor() {
                    let span = base.span.to(exp.span);
                    return Some(Expr::new(
                        ExprKind::BinOp {
                            left: Box::new(base),
                            op: Operator::Pow,
                            right: Box::new(exp),
                        },
                        span,
                    ));
                }
                if !p.ok() {
                    return None;
                }
                p.reset(m);
            }
            Some(base)
        })
    }

    /// primary: primary '.' NAME | primary '(' args ')' | primary '[' slices ']' | atom
    pub(in crate::parser) fn parse_primary(&mut self) -> Option<Expr> {
        self.memoize_left_rec(RuleId::Primary, |p| {
            let start = p.mark();
            if let Some(value) = p.parse_primary()
                && p.expect(TokenKind::Dot).is_some()
                && let Some(name) = p.expect(TokenKind::Name)
            {
                let span = value.span.to(name.span);
                let attr = p.text(name).to_owned();
                return Some(Expr::new(
                    ExprKind::Attribute {
                        value: Box::new(value),
                        attr,
                    },
                    span,
                ));
            }
            if !p.ok() {
                return None;
            }
            p.reset(start);
            if let Some(func) = p.parse_primary()
                && p.expect(TokenKind::LParen).is_some()
                && let Some((args, keywords)) = p.parse_arguments()
                && let Some(close) = p.expect(TokenKind::RParen)
            {
                let span = func.span.to(close.span);
                return Some(Expr::new(
                    ExprKind::Call {
                        func: Box::new(func),
                        args,
                        keywords,
                    },
                    span,
                ));
            }
            if !p.ok() {
                return None;
            }
            p.reset(start);
            if let Some(value) = p.parse_primary()
                && p.expect(TokenKind::LBracket).is_some()
                && let Some(slice) = p.parse_slices()
                && let Some(close) = p.expect(TokenKind::RBracket)
            {
                let span = value.span.to(close.span);
                return Some(Expr::new(
                    ExprKind::Subscript {
                        value: Box::new(value),
                        slice: Box::new(slice),
                    },
                    span,
                ));
            }
            if !p.ok() {
                return None;
            }
            p.reset(start);
            p.parse_atom()
        })
    }

    /// arguments: (NAME '=' expression | named_expression) (',' ...)* ','?
    fn parse_arguments(&mut self) -> Option<(Vec<Expr>, Vec<Keyword>)> {
        let mut args = Vec::new();
        let mut keywords: Vec<Keyword> = Vec::new();
        if self.peek_kind() == TokenKind::RParen {
            return Some((args, keywords));
        }
        loop {
            let m = self.mark();
            if let Some(name) = self.expect(TokenKind::Name)
                && self.expect(TokenKind::Equals).is_some()
            {
                let Some(value) = self.parse_expression() else {
                    if !self.ok() {
                        return None;
                    }
                    self.reset(m);
                    return None;
                };
                let span = name.span.to(value.span);
                keywords.push(Keyword {
                    arg: self.text(name).to_owned(),
                    value: Box::new(value),
                    span,
                });
            } else {
                if !self.ok() {
                    return None;
                }
                self.reset(m);
                let value = self.parse_named_expression()?;
                // The valid grammar only accepts keywords after the last
                // positional argument; the diagnostic pass names the mistake.
                if !keywords.is_empty() {
                    if self.call_invalid_rules {
                        return self.raise(ParseError::syntax(
                            "positional argument follows keyword argument",
                            value.span,
                        ));
                    }
                    return None;
                }
                args.push(value);
            }
            if self.expect(TokenKind::Comma).is_none() {
                break;
            }
            if self.peek_kind() == TokenKind::RParen {
                break;
            }
        }
        Some((args, keywords))
    }

    /// slices: expression (',' expression)* ','? (a tuple when more than one)
    fn parse_slices(&mut self) -> Option<Expr> {
        let start = self.mark();
        let first = self.parse_expression()?;
        if self.peek_kind() != TokenKind::Comma {
            return Some(first);
        }
        let mut elts = vec![first];
        while self.expect(TokenKind::Comma).is_some() {
            let m = self.mark();
            match self.parse_expression() {
                Some(expr) => elts.push(expr),
                None => {
                    if !self.ok() {
                        return None;
                    }
                    self.reset(m);
                    break;
                }
            }
        }
        let span = self.span_from(start);
        Some(Expr::new(ExprKind::Tuple { elts }, span))
    }

    /// Whether the current token can begin an expression.
    pub(in crate::parser) fn at_expression_start(&self) -> bool {
        matches!(
            self.peek_kind(),
            TokenKind::Name
                | TokenKind::Number
                | TokenKind::String
                | TokenKind::LParen
                | TokenKind::LBracket
                | TokenKind::Ellipsis
                | TokenKind::KwTrue
                | TokenKind::KwFalse
                | TokenKind::KwNone
                | TokenKind::KwNot
                | TokenKind::Plus
                | TokenKind::Minus
                | TokenKind::Tilde
        )
    }
}
