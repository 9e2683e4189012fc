//! Statement rules: simple statements, compound statements, blocks.

use crate::ast::{Expr, ExprKind, Param, Stmt, StmtKind};
use crate::diagnostics::ParseError;
use crate::lexer::TokenKind;

use super::super::cache::RuleId;
use super::super::core::Parser;

impl Parser<'_> {
    /// statements: statement+
    pub(in crate::parser) fn parse_statements(&mut self) -> Vec<Stmt> {
        let mut body = Vec::new();
        while self.ok() && !matches!(self.peek_kind(), TokenKind::EndMarker | TokenKind::Dedent) {
            match self.parse_statement() {
                Some(stmts) => body.extend(stmts),
                None => break,
            }
        }
        body
    }

    /// statement: compound_stmt | simple_stmts
    pub(in crate::parser) fn parse_statement(&mut self) -> Option<Vec<Stmt>> {
        match self.peek_kind() {
            TokenKind::KwIf => self.parse_if_stmt().map(|s| vec![s]),
            TokenKind::KwWhile => self.parse_while_stmt().map(|s| vec![s]),
            TokenKind::KwFor => self.parse_for_stmt().map(|s| vec![s]),
            TokenKind::KwDef => self.parse_function_def().map(|s| vec![s]),
            _ => self.parse_simple_stmts(),
        }
    }

    /// simple_stmts: simple_stmt (';' simple_stmt)* ';'? NEWLINE
    pub(in crate::parser) fn parse_simple_stmts(&mut self) -> Option<Vec<Stmt>> {
        let start = self.mark();
        let mut stmts = Vec::new();
        loop {
            let Some(stmt) = self.parse_simple_stmt() else {
                self.reset(start);
                return None;
            };
            stmts.push(stmt);
            if self.expect(TokenKind::Semi).is_none() || self.peek_kind() == TokenKind::Newline {
                break;
            }
        }
        if self.expect(TokenKind::Newline).is_none() {
            self.reset(start);
            return None;
        }
        Some(stmts)
    }

    fn parse_simple_stmt(&mut self) -> Option<Stmt> {
        match self.peek_kind() {
            TokenKind::KwReturn => self.parse_return_stmt(),
            TokenKind::KwPass => {
                let token = self.advance();
                Some(Stmt::new(StmtKind::Pass, token.span))
            }
            TokenKind::KwBreak => {
                let token = self.advance();
                Some(Stmt::new(StmtKind::Break, token.span))
            }
            TokenKind::KwContinue => {
                let token = self.advance();
                Some(Stmt::new(StmtKind::Continue, token.span))
            }
            _ => {
                let at_type_alias = self
                    .positive_lookahead(|p| {
                        p.expect_soft_keyword("type")?;
                        p.expect(TokenKind::Name)
                    })
                    .is_some();
                if at_type_alias {
                    if let Some(stmt) = self.parse_type_alias() {
                        return Some(stmt);
                    }
                    if !self.ok() {
                        return None;
                    }
                }
                if let Some(stmt) = self.parse_assignment() {
                    return Some(stmt);
                }
                if !self.ok() {
                    return None;
                }
                if self.call_invalid_rules {
                    self.invalid_assignment();
                    if !self.ok() {
                        return None;
                    }
                }
                self.parse_expression_stmt()
            }
        }
    }

    /// return_stmt: 'return' [star_expressions]
    fn parse_return_stmt(&mut self) -> Option<Stmt> {
        let kw = self.advance();
        let mut span = kw.span;
        let value = if self.at_expression_start() {
            let expr = self.parse_star_expressions()?;
            span = span.to(expr.span);
            Some(Box::new(expr))
        } else {
            None
        };
        Some(Stmt::new(StmtKind::Return { value }, span))
    }

    /// type_alias: "type" NAME '=' expression
    fn parse_type_alias(&mut self) -> Option<Stmt> {
        let start = self.mark();
        let kw = self.expect_soft_keyword("type")?;
        let Some(name) = self.expect(TokenKind::Name) else {
            self.reset(start);
            return None;
        };
        if self.expect(TokenKind::Equals).is_none() {
            self.reset(start);
            return None;
        }
        // The construct is unambiguous at this point; version-gate before
        // touching the value.
        if !self.check_version(12, "Type statement is") {
            return None;
        }
        let Some(value) = self.parse_expression() else {
            if !self.ok() {
                return None;
            }
            self.reset(start);
            return None;
        };
        let span = kw.span.to(value.span);
        let name = Expr::new(
            ExprKind::Name {
                id: self.text(name).to_owned(),
            },
            name.span,
        );
        Some(Stmt::new(
            StmtKind::TypeAlias {
                name: Box::new(name),
                value: Box::new(value),
            },
            span,
        ))
    }

    /// assignment: (star_targets '=')+ star_expressions !'='
    fn parse_assignment(&mut self) -> Option<Stmt> {
        let start = self.mark();
        let mut targets = Vec::new();
        loop {
            let m = self.mark();
            let Some(target) = self.parse_star_targets() else {
                self.reset(m);
                break;
            };
            if self.expect(TokenKind::Equals).is_none() {
                self.reset(m);
                break;
            }
            targets.push(target);
        }
        if targets.is_empty() || !self.ok() {
            self.reset(start);
            return None;
        }
        let Some(value) = self.parse_star_expressions() else {
            if !self.ok() {
                return None;
            }
            self.reset(start);
            return None;
        };
        if !self.negative_lookahead(|p| p.expect(TokenKind::Equals)) {
            self.reset(start);
            return None;
        }
        let span = self.span_from(start);
        Some(Stmt::new(
            StmtKind::Assign {
                targets,
                value: Box::new(value),
            },
            span,
        ))
    }

    /// Diagnostic-pass rule: an arbitrary expression left of '=' yields
    /// `cannot assign to ...` instead of the generic failure.
    fn invalid_assignment(&mut self) {
        let start = self.mark();
        if let Some(lhs) = self.parse_star_expressions()
            && self.expect(TokenKind::Equals).is_some()
            && !is_assign_target(&lhs)
        {
            let message = format!("cannot assign to {}", lhs.assign_target_name());
            let _: Option<()> = self.raise(ParseError::syntax(message, lhs.span));
            return;
        }
        self.reset(start);
    }

    /// expression_stmt: star_expressions
    fn parse_expression_stmt(&mut self) -> Option<Stmt> {
        let value = self.parse_star_expressions()?;
        // Diagnostic pass: two adjacent expressions are almost always a
        // missing comma.
        if self.call_invalid_rules && self.at_expression_start() && !self.at_soft_keyword() {
            let span = value.span.to(self.peek().span);
            return self.raise(ParseError::syntax(
                "invalid syntax. Perhaps you forgot a comma?",
                span,
            ));
        }
        let span = value.span;
        Some(Stmt::new(
            StmtKind::Expr {
                value: Box::new(value),
            },
            span,
        ))
    }

    /// star_targets: target (',' target)* ','?
    pub(in crate::parser) fn parse_star_targets(&mut self) -> Option<Expr> {
        self.memoize(RuleId::StarTargets, |p| {
            let start = p.mark();
            let first = p.parse_target()?;
            if p.peek_kind() != TokenKind::Comma {
                return Some(first);
            }
            let mut elts = vec![first];
            while p.expect(TokenKind::Comma).is_some() {
                let m = p.mark();
                match p.parse_target() {
                    Some(target) => elts.push(target),
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

    /// target: a primary with an assignable shape
    fn parse_target(&mut self) -> Option<Expr> {
        let m = self.mark();
        let expr = self.parse_primary()?;
        if is_assign_target(&expr) {
            Some(expr)
        } else {
            self.reset(m);
            None
        }
    }

    /// if_stmt: 'if' named_expression ':' block ('elif' ... | 'else' ...)?
    fn parse_if_stmt(&mut self) -> Option<Stmt> {
        let start = self.mark();
        self.expect(TokenKind::KwIf)?;
        let test = self.parse_named_expression()?;
        self.expect_forced(TokenKind::Colon, "':'")?;
        let body = self.parse_block()?;
        let orelse = self.parse_elif_or_else()?;
        let span = self.span_from(start);
        Some(Stmt::new(
            StmtKind::If {
                test: Box::new(test),
                body,
                orelse,
            },
            span,
        ))
    }

    /// An `elif` continues as a nested `If` in the else branch, as CPython
    /// builds it.
    fn parse_elif_or_else(&mut self) -> Option<Vec<Stmt>> {
        if self.peek_kind() != TokenKind::KwElif {
            return self.parse_else_block();
        }
        let start = self.mark();
        self.advance();
        let test = self.parse_named_expression()?;
        self.expect_forced(TokenKind::Colon, "':'")?;
        let body = self.parse_block()?;
        let orelse = self.parse_elif_or_else()?;
        let span = self.span_from(start);
        Some(vec![Stmt::new(
            StmtKind::If {
                test: Box::new(test),
                body,
                orelse,
            },
            span,
        )])
    }

    /// else_block: ('else' ':' block)?
    fn parse_else_block(&mut self) -> Option<Vec<Stmt>> {
        if self.expect(TokenKind::KwElse).is_none() {
            return Some(Vec::new());
        }
        self.expect_forced(TokenKind::Colon, "':'")?;
        self.parse_block()
    }

    /// while_stmt: 'while' named_expression ':' block else_block
    fn parse_while_stmt(&mut self) -> Option<Stmt> {
        let start = self.mark();
        self.expect(TokenKind::KwWhile)?;
        let test = self.parse_named_expression()?;
        self.expect_forced(TokenKind::Colon, "':'")?;
        let body = self.parse_block()?;
        let orelse = self.parse_else_block()?;
        let span = self.span_from(start);
        Some(Stmt::new(
            StmtKind::While {
                test: Box::new(test),
                body,
                orelse,
            },
            span,
        ))
    }

    /// for_stmt: 'for' star_targets 'in' star_expressions ':' block else_block
    fn parse_for_stmt(&mut self) -> Option<Stmt> {
        let start = self.mark();
        self.expect(TokenKind::KwFor)?;
        let target = self.parse_star_targets()?;
        self.expect_forced(TokenKind::KwIn, "'in'")?;
        let iter = self.parse_star_expressions()?;
        self.expect_forced(TokenKind::Colon, "':'")?;
        let body = self.parse_block()?;
        let orelse = self.parse_else_block()?;
        let span = self.span_from(start);
        Some(Stmt::new(
            StmtKind::For {
                target: Box::new(target),
                iter: Box::new(iter),
                body,
                orelse,
            },
            span,
        ))
    }

    /// function_def: 'def' NAME '(' params ')' ['->' expression] ':' block
    fn parse_function_def(&mut self) -> Option<Stmt> {
        let start = self.mark();
        self.expect(TokenKind::KwDef)?;
        let name = self.expect(TokenKind::Name)?;
        self.expect_forced(TokenKind::LParen, "'('")?;
        let params = self.parse_params()?;
        self.expect_forced(TokenKind::RParen, "')'")?;
        let returns = if self.expect(TokenKind::RArrow).is_some() {
            Some(Box::new(self.parse_expression()?))
        } else {
            None
        };
        self.expect_forced(TokenKind::Colon, "':'")?;
        let body = self.parse_block()?;
        let span = self.span_from(start);
        Some(Stmt::new(
            StmtKind::FunctionDef {
                name: self.text(name).to_owned(),
                params,
                returns,
                body,
            },
            span,
        ))
    }

    /// params: param (',' param)* ','? where param: NAME [':' expression] ['=' expression]
    fn parse_params(&mut self) -> Option<Vec<Param>> {
        let mut params: Vec<Param> = Vec::new();
        while self.peek_kind() == TokenKind::Name {
            let start = self.mark();
            let name = self.advance();
            let annotation = if self.expect(TokenKind::Colon).is_some() {
                Some(Box::new(self.parse_expression()?))
            } else {
                None
            };
            let default = if self.expect(TokenKind::Equals).is_some() {
                Some(Box::new(self.parse_expression()?))
            } else {
                None
            };
            if default.is_none() && params.iter().any(|p| p.default.is_some()) {
                if self.call_invalid_rules {
                    return self.raise(ParseError::syntax(
                        "parameter without a default follows parameter with a default",
                        name.span,
                    ));
                }
                return None;
            }
            params.push(Param {
                name: self.text(name).to_owned(),
                annotation,
                default,
                span: self.span_from(start),
            });
            if self.expect(TokenKind::Comma).is_none() {
                break;
            }
        }
        Some(params)
    }

    /// block: NEWLINE INDENT statements DEDENT | simple_stmts
    pub(in crate::parser) fn parse_block(&mut self) -> Option<Vec<Stmt>> {
        self.memoize(RuleId::Block, |p| {
            let start = p.mark();
            if p.expect(TokenKind::Newline).is_some() {
                if p.expect(TokenKind::Indent).is_none() {
                    if p.call_invalid_rules && p.ok() {
                        return p.raise_indentation_error("expected an indented block");
                    }
                    p.reset(start);
                    return None;
                }
                let body = p.parse_statements();
                if !p.ok() {
                    return None;
                }
                if p.expect(TokenKind::Dedent).is_none() {
                    p.reset(start);
                    return None;
                }
                return Some(body);
            }
            p.parse_simple_stmts()
        })
    }
}

/// Shapes the grammar accepts as assignment targets.
fn is_assign_target(expr: &Expr) -> bool {
    match &expr.kind {
        ExprKind::Name { .. } | ExprKind::Attribute { .. } | ExprKind::Subscript { .. } => true,
        ExprKind::Tuple { elts } | ExprKind::List { elts } => elts.iter().all(is_assign_target),
        _ => false,
    }
}
