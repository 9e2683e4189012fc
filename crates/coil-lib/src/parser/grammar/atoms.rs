//! Terminals and bracketed displays.

use crate::ast::{self, Constant, Expr, ExprKind};
use crate::lexer::{Token, TokenKind};

use super::super::cache::RuleId;
use super::super::core::Parser;

impl Parser<'_> {
    /// atom: NAME | 'True' | 'False' | 'None' | '...' | NUMBER | STRING+
    ///     | group | list
    pub(in crate::parser) fn parse_atom(&mut self) -> Option<Expr> {
        self.memoize(RuleId::Atom, |p| {
            let token = p.peek();
            match token.kind {
                TokenKind::Name => {
                    p.advance();
                    Some(Expr::new(
                        ExprKind::Name {
                            id: p.text(token).to_owned(),
                        },
                        token.span,
                    ))
                }
                TokenKind::KwTrue => {
                    p.advance();
                    Some(constant(Constant::True, token))
                }
                TokenKind::KwFalse => {
                    p.advance();
                    Some(constant(Constant::False, token))
                }
                TokenKind::KwNone => {
                    p.advance();
                    Some(constant(Constant::None, token))
                }
                TokenKind::Ellipsis => {
                    p.advance();
                    Some(constant(Constant::Ellipsis, token))
                }
                TokenKind::Number => p.parse_number(),
                TokenKind::String => p.parse_strings(),
                _ => p.parse_enclosure(),
            }
        })
    }

    fn parse_number(&mut self) -> Option<Expr> {
        let token = self.peek();
        let text = self.text(token);
        if text.contains('_') && !self.check_version(6, "Underscores in numeric literals are") {
            return None;
        }
        self.advance();
        Some(Expr::new(
            ExprKind::Constant {
                value: ast::decode_number(text),
            },
            token.span,
        ))
    }

    /// strings: STRING+ — adjacent literals concatenate
    fn parse_strings(&mut self) -> Option<Expr> {
        let start = self.mark();
        let mut value = String::new();
        while self.peek_kind() == TokenKind::String {
            let token = self.advance();
            value.push_str(&ast::decode_string(self.text(token)));
        }
        let span = self.span_from(start);
        Some(Expr::new(
            ExprKind::Constant {
                value: Constant::Str(value),
            },
            span,
        ))
    }

    /// Bracketed alternatives, each with a cut after its opening token: once
    /// '(' or '[' is consumed the alternative is committed, and its failure
    /// fails the whole atom instead of trying the remaining alternatives.
    fn parse_enclosure(&mut self) -> Option<Expr> {
        let start = self.mark();
        let mut cut = false;
        if let Some(open) = self.expect(TokenKind::LParen) {
            cut = true;
            if let Some(expr) = self.parse_group_rest(open) {
                return Some(expr);
            }
        }
        if !self.ok() {
            return None;
        }
        self.reset(start);
        if cut {
            return None;
        }

        let mut cut = false;
        if let Some(open) = self.expect(TokenKind::LBracket) {
            cut = true;
            if let Some(expr) = self.parse_list_rest(open) {
                return Some(expr);
            }
        }
        if !self.ok() {
            return None;
        }
        self.reset(start);
        if cut {
            return None;
        }
        None
    }

    /// After '(': empty tuple, parenthesized expression, or tuple display.
    fn parse_group_rest(&mut self, open: Token) -> Option<Expr> {
        if let Some(close) = self.expect(TokenKind::RParen) {
            return Some(Expr::new(
                ExprKind::Tuple { elts: Vec::new() },
                open.span.to(close.span),
            ));
        }
        let first = self.parse_named_expression()?;
        if self.peek_kind() != TokenKind::Comma {
            self.expect(TokenKind::RParen)?;
            // Plain parentheses are transparent; the inner node keeps its span.
            return Some(first);
        }
        let mut elts = vec![first];
        while self.expect(TokenKind::Comma).is_some() {
            if self.peek_kind() == TokenKind::RParen {
                break;
            }
            elts.push(self.parse_named_expression()?);
        }
        let close = self.expect(TokenKind::RParen)?;
        Some(Expr::new(
            ExprKind::Tuple { elts },
            open.span.to(close.span),
        ))
    }

    /// After '[': list display, possibly empty, trailing comma allowed.
    fn parse_list_rest(&mut self, open: Token) -> Option<Expr> {
        let mut elts = Vec::new();
        if self.peek_kind() != TokenKind::RBracket {
            elts.push(self.parse_named_expression()?);
            while self.expect(TokenKind::Comma).is_some() {
                if self.peek_kind() == TokenKind::RBracket {
                    break;
                }
                elts.push(self.parse_named_expression()?);
            }
        }
        let close = self.expect(TokenKind::RBracket)?;
        Some(Expr::new(
            ExprKind::List { elts },
            open.span.to(close.span),
        ))
    }
}

fn constant(value: Constant, token: Token) -> Expr {
    Expr::new(ExprKind::Constant { value }, token.span)
}
