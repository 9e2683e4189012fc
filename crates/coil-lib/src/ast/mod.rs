//! Abstract syntax tree in CPython's shape.
//!
//! Every node carries its source [`Span`]. The tree is plain data: the parser
//! is the only producer, and consumers either serialize it (all nodes derive
//! `serde::Serialize`) or render it with [`Mod::dump`].

pub mod dump;


use crate::span::Span;

/// Top-level parse result, one variant per input mode.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub enum Mod {
    /// A whole source file.
    Module { body: Vec<Stmt> },
    /// A single interactive statement.
    Interactive { body: Vec<Stmt> },
    /// A lone expression, as for `eval`.
    Expression { body: Box<Expr> },
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Stmt {
    pub kind: StmtKind,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub enum StmtKind {
    FunctionDef {
        name: String,
        params: Vec<Param>,
        returns: Option<Box<Expr>>,
        body: Vec<Stmt>,
    },
    Return {
        value: Option<Box<Expr>>,
    },
    Assign {
        targets: Vec<Expr>,
        value: Box<Expr>,
    },
    TypeAlias {
        name: Box<Expr>,
        value: Box<Expr>,
    },
    For {
        target: Box<Expr>,
        iter: Box<Expr>,
        body: Vec<Stmt>,
        orelse: Vec<Stmt>,
    },
    While {
        test: Box<Expr>,
        body: Vec<Stmt>,
        orelse: Vec<Stmt>,
    },
    If {
        test: Box<Expr>,
        body: Vec<Stmt>,
        orelse: Vec<Stmt>,
    },
    Expr {
        value: Box<Expr>,
    },
    Pass,
    Break,
    Continue,
}

/// A plain function parameter: `name`, `name: ann`, `name=default`.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Param {
    pub name: String,
    pub annotation: Option<Box<Expr>>,
    pub default: Option<Box<Expr>>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub enum ExprKind {
    BoolOp {
        op: BoolOpKind,
        values: Vec<Expr>,
    },
    /// The walrus operator, `target := value`.
    NamedExpr {
        target: Box<Expr>,
        value: Box<Expr>,
    },
    BinOp {
        left: Box<Expr>,
        op: Operator,
        right: Box<Expr>,
    },
    UnaryOp {
        op: UnaryOpKind,
        operand: Box<Expr>,
    },
    /// Chained comparison: `left ops[0] comparators[0] ops[1] ...`.
    Compare {
        left: Box<Expr>,
        ops: Vec<CmpOp>,
        comparators: Vec<Expr>,
    },
    Call {
        func: Box<Expr>,
        args: Vec<Expr>,
        keywords: Vec<Keyword>,
    },
    Attribute {
        value: Box<Expr>,
        attr: String,
    },
    Subscript {
        value: Box<Expr>,
        slice: Box<Expr>,
    },
    Name {
        id: String,
    },
    Constant {
        value: Constant,
    },
    Tuple {
        elts: Vec<Expr>,
    },
    List {
        elts: Vec<Expr>,
    },
}

/// A keyword argument in a call, `name=value`.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Keyword {
    pub arg: String,
    pub value: Box<Expr>,
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum BoolOpKind {
    And,
    Or,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum Operator {
    Add,
    Sub,
    Mult,
    MatMult,
    Div,
    FloorDiv,
    Mod,
    Pow,
    LShift,
    RShift,
    BitOr,
    BitXor,
    BitAnd,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum UnaryOpKind {
    UAdd,
    USub,
    Invert,
    Not,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum CmpOp {
    Eq,
    NotEq,
    Lt,
    LtE,
    Gt,
    GtE,
    Is,
    IsNot,
    In,
    NotIn,
}

/// Literal values. Integers that fit keep `i64`; anything wider falls back to
/// the digit string so no precision is silently lost.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub enum Constant {
    None,
    True,
    False,
    Ellipsis,
    Int(i64),
    BigInt(String),
    Float(f64),
    Complex(f64),
    Str(String),
}

impl Expr {
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// How an expression reads in a `cannot assign to ...` message.
    pub fn assign_target_name(&self) -> &'static str {
        match &self.kind {
            ExprKind::BoolOp { op: BoolOpKind::And, .. } => "expression",
            ExprKind::BoolOp { op: BoolOpKind::Or, .. } => "expression",
            ExprKind::NamedExpr { .. } => "named expression",
            ExprKind::BinOp { .. } | ExprKind::UnaryOp { .. } => "expression",
            ExprKind::Compare { .. } => "comparison",
            ExprKind::Call { .. } => "function call",
            ExprKind::Constant { value } => match value {
                Constant::None => "None",
                Constant::True => "True",
                Constant::False => "False",
                Constant::Ellipsis => "ellipsis",
                _ => "literal",
            },
            ExprKind::Attribute { .. }
            | ExprKind::Subscript { .. }
            | ExprKind::Name { .. }
            | ExprKind::Tuple { .. }
            | ExprKind::List { .. } => "target",
        }
    }
}

impl Stmt {
    pub fn new(kind: StmtKind, span: Span) -> Self {
        Self { kind, span }
    }
}

/// Decodes a numeric literal. Underscore separators must already have passed
/// the version gate; they are stripped here.
pub fn decode_number(text: &str) -> Constant {
    let digits: String = text.chars().filter(|&c| c != '_').collect();

    if let Some(imag) = digits.strip_suffix(['j', 'J']) {
        let value = imag.parse::<f64>().unwrap_or(f64::INFINITY);
        return Constant::Complex(value);
    }

    let lower = digits.to_ascii_lowercase();
    let radix = match lower.get(..2) {
        Some("0b") => Some(2),
        Some("0o") => Some(8),
        Some("0x") => Some(16),
        _ => None,
    };
    if let Some(radix) = radix {
        return match i64::from_str_radix(&lower[2..], radix) {
            Ok(value) => Constant::Int(value),
            Err(_) => Constant::BigInt(digits),
        };
    }

    if lower.contains(['.', 'e']) {
        let value = lower.parse::<f64>().unwrap_or(f64::INFINITY);
        return Constant::Float(value);
    }

    match digits.parse::<i64>() {
        Ok(value) => Constant::Int(value),
        Err(_) => Constant::BigInt(digits),
    }
}

/// Decodes a string literal: strips prefix letters and quotes, and processes
/// backslash escapes unless the literal is raw.
pub fn decode_string(text: &str) -> String {
    let prefix_len = text
        .find(['"', '\''])
        .expect("string literal always contains a quote");
    let prefix = &text[..prefix_len];
    let raw = prefix.contains(['r', 'R']);
    let rest = &text[prefix_len..];

    let quote = &rest[..1];
    let triple = rest.len() >= 6 && rest.starts_with(&quote.repeat(3));
    let q = if triple { 3 } else { 1 };
    let body = &rest[q..rest.len() - q];

    if raw {
        return body.to_owned();
    }

    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some('0') => out.push('\0'),
            Some('\\') => out.push('\\'),
            Some('\'') => out.push('\''),
            Some('"') => out.push('"'),
            // Escaped newline disappears.
            Some('\n') => {}
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}
