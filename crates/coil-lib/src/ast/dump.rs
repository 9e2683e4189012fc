//! Indented tree rendering, used by snapshot tests and the CLI.

use std::fmt::Write;

use super::{
    BoolOpKind, CmpOp, Constant, Expr, ExprKind, Keyword, Mod, Operator, Param, Stmt, StmtKind,
    UnaryOpKind,
};

impl Mod {
    pub fn dump(&self) -> String {
        let mut w = Writer::default();
        match self {
            Mod::Module { body } => {
                w.line("Module");
                w.stmts(body, 1);
            }
            Mod::Interactive { body } => {
                w.line("Interactive");
                w.stmts(body, 1);
            }
            Mod::Expression { body } => {
                w.line("Expression");
                w.expr(body, 1);
            }
        }
        w.out
    }
}

#[derive(Default)]
struct Writer {
    out: String,
}

impl Writer {
    fn line(&mut self, text: &str) {
        self.out.push_str(text);
        self.out.push('\n');
    }

    fn indented(&mut self, depth: usize, text: &str) {
        for _ in 0..depth {
            self.out.push_str("  ");
        }
        self.line(text);
    }

    fn stmts(&mut self, body: &[Stmt], depth: usize) {
        for stmt in body {
            self.stmt(stmt, depth);
        }
    }

    fn stmt(&mut self, stmt: &Stmt, depth: usize) {
        match &stmt.kind {
            StmtKind::FunctionDef {
                name,
                params,
                returns,
                body,
            } => {
                self.indented(depth, &format!("FunctionDef '{name}'"));
                if !params.is_empty() {
                    self.indented(depth + 1, "params:");
                    for param in params {
                        self.param(param, depth + 2);
                    }
                }
                if let Some(returns) = returns {
                    self.indented(depth + 1, "returns:");
                    self.expr(returns, depth + 2);
                }
                self.indented(depth + 1, "body:");
                self.stmts(body, depth + 2);
            }
            StmtKind::Return { value } => {
                self.indented(depth, "Return");
                if let Some(value) = value {
                    self.expr(value, depth + 1);
                }
            }
            StmtKind::Assign { targets, value } => {
                self.indented(depth, "Assign");
                self.indented(depth + 1, "targets:");
                for target in targets {
                    self.expr(target, depth + 2);
                }
                self.indented(depth + 1, "value:");
                self.expr(value, depth + 2);
            }
            StmtKind::TypeAlias { name, value } => {
                self.indented(depth, "TypeAlias");
                self.indented(depth + 1, "name:");
                self.expr(name, depth + 2);
                self.indented(depth + 1, "value:");
                self.expr(value, depth + 2);
            }
            StmtKind::For {
                target,
                iter,
                body,
                orelse,
            } => {
                self.indented(depth, "For");
                self.indented(depth + 1, "target:");
                self.expr(target, depth + 2);
                self.indented(depth + 1, "iter:");
                self.expr(iter, depth + 2);
                self.indented(depth + 1, "body:");
                self.stmts(body, depth + 2);
                if !orelse.is_empty() {
                    self.indented(depth + 1, "else:");
                    self.stmts(orelse, depth + 2);
                }
            }
            StmtKind::While { test, body, orelse } => {
                self.indented(depth, "While");
                self.indented(depth + 1, "test:");
                self.expr(test, depth + 2);
                self.indented(depth + 1, "body:");
                self.stmts(body, depth + 2);
                if !orelse.is_empty() {
                    self.indented(depth + 1, "else:");
                    self.stmts(orelse, depth + 2);
                }
            }
            StmtKind::If { test, body, orelse } => {
                self.indented(depth, "If");
                self.indented(depth + 1, "test:");
                self.expr(test, depth + 2);
                self.indented(depth + 1, "body:");
                self.stmts(body, depth + 2);
                if !orelse.is_empty() {
                    self.indented(depth + 1, "else:");
                    self.stmts(orelse, depth + 2);
                }
            }
            StmtKind::Expr { value } => {
                self.indented(depth, "Expr");
                self.expr(value, depth + 1);
            }
            StmtKind::Pass => self.indented(depth, "Pass"),
            StmtKind::Break => self.indented(depth, "Break"),
            StmtKind::Continue => self.indented(depth, "Continue"),
        }
    }

    fn param(&mut self, param: &Param, depth: usize) {
        self.indented(depth, &format!("Param '{}'", param.name));
        if let Some(annotation) = &param.annotation {
            self.indented(depth + 1, "annotation:");
            self.expr(annotation, depth + 2);
        }
        if let Some(default) = &param.default {
            self.indented(depth + 1, "default:");
            self.expr(default, depth + 2);
        }
    }

    fn expr(&mut self, expr: &Expr, depth: usize) {
        match &expr.kind {
            ExprKind::BoolOp { op, values } => {
                self.indented(depth, &format!("BoolOp {}", bool_op(*op)));
                for value in values {
                    self.expr(value, depth + 1);
                }
            }
            ExprKind::NamedExpr { target, value } => {
                self.indented(depth, "NamedExpr");
                self.expr(target, depth + 1);
                self.expr(value, depth + 1);
            }
            ExprKind::BinOp { left, op, right } => {
                self.indented(depth, &format!("BinOp {}", operator(*op)));
                self.expr(left, depth + 1);
                self.expr(right, depth + 1);
            }
            ExprKind::UnaryOp { op, operand } => {
                self.indented(depth, &format!("UnaryOp {}", unary_op(*op)));
                self.expr(operand, depth + 1);
            }
            ExprKind::Compare {
                left,
                ops,
                comparators,
            } => {
                let mut header = String::from("Compare");
                for op in ops {
                    let _ = write!(header, " {}", cmp_op(*op));
                }
                self.indented(depth, &header);
                self.expr(left, depth + 1);
                for comparator in comparators {
                    self.expr(comparator, depth + 1);
                }
            }
            ExprKind::Call {
                func,
                args,
                keywords,
            } => {
                self.indented(depth, "Call");
                self.indented(depth + 1, "func:");
                self.expr(func, depth + 2);
                if !args.is_empty() {
                    self.indented(depth + 1, "args:");
                    for arg in args {
                        self.expr(arg, depth + 2);
                    }
                }
                if !keywords.is_empty() {
                    self.indented(depth + 1, "keywords:");
                    for keyword in keywords {
                        self.keyword(keyword, depth + 2);
                    }
                }
            }
            ExprKind::Attribute { value, attr } => {
                self.indented(depth, &format!("Attribute '{attr}'"));
                self.expr(value, depth + 1);
            }
            ExprKind::Subscript { value, slice } => {
                self.indented(depth, "Subscript");
                self.expr(value, depth + 1);
                self.expr(slice, depth + 1);
            }
            ExprKind::Name { id } => self.indented(depth, &format!("Name '{id}'")),
            ExprKind::Constant { value } => self.indented(depth, &constant(value)),
            ExprKind::Tuple { elts } => {
                self.indented(depth, "Tuple");
                for elt in elts {
                    self.expr(elt, depth + 1);
                }
            }
            ExprKind::List { elts } => {
                self.indented(depth, "List");
                for elt in elts {
                    self.expr(elt, depth + 1);
                }
            }
        }
    }

    fn keyword(&mut self, keyword: &Keyword, depth: usize) {
        self.indented(depth, &format!("Keyword '{}'", keyword.arg));
        self.expr(&keyword.value, depth + 1);
    }
}

fn constant(value: &Constant) -> String {
    match value {
        Constant::None => "Constant None".into(),
        Constant::True => "Constant True".into(),
        Constant::False => "Constant False".into(),
        Constant::Ellipsis => "Constant Ellipsis".into(),
        Constant::Int(v) => format!("Constant {v}"),
        Constant::BigInt(digits) => format!("Constant BigInt '{digits}'"),
        Constant::Float(v) => format!("Constant {v:?}"),
        Constant::Complex(v) => format!("Constant {v:?}j"),
        Constant::Str(s) => format!("Constant {s:?}"),
    }
}

fn bool_op(op: BoolOpKind) -> &'static str {
    match op {
        BoolOpKind::And => "And",
        BoolOpKind::Or => "Or",
    }
}

fn operator(op: Operator) -> &'static str {
    match op {
        Operator::Add => "Add",
        Operator::Sub => "Sub",
        Operator::Mult => "Mult",
        Operator::MatMult => "MatMult",
        Operator::Div => "Div",
        Operator::FloorDiv => "FloorDiv",
        Operator::Mod => "Mod",
        Operator::Pow => "Pow",
        Operator::LShift => "LShift",
        Operator::RShift => "RShift",
        Operator::BitOr => "BitOr",
        Operator::BitXor => "BitXor",
        Operator::BitAnd => "BitAnd",
    }
}

fn unary_op(op: UnaryOpKind) -> &'static str {
    match op {
        UnaryOpKind::UAdd => "UAdd",
        UnaryOpKind::USub => "USub",
        UnaryOpKind::Invert => "Invert",
        UnaryOpKind::Not => "Not",
    }
}

fn cmp_op(op: CmpOp) -> &'static str {
    match op {
        CmpOp::Eq => "Eq",
        CmpOp::NotEq => "NotEq",
        CmpOp::Lt => "Lt",
        CmpOp::LtE => "LtE",
        CmpOp::Gt => "Gt",
        CmpOp::GtE => "GtE",
        CmpOp::Is => "Is",
        CmpOp::IsNot => "IsNot",
        CmpOp::In => "In",
        CmpOp::NotIn => "NotIn",
    }
}
