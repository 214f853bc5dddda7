/// Binary arithmetic operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
}

impl std::fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Mod => "%",
        };
        write!(f, "{}", symbol)
    }
}

/// Expression tree produced by the parser.
///
/// Each variant documents the instructions the compiler emits for it.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    // ───────────────────────────── Literals ─────────────────────────────
    /// Numeric literal, with any leading `-` already applied.
    ///
    /// Emits: `PushValue(n)`
    Number(f64),

    // ───────────────────────────── Variables ────────────────────────────
    /// Read of a variable.
    ///
    /// Emits: `PushSlot(name) Load`
    Variable(String),

    /// Assignment `name = value`.
    ///
    /// Emits: `PushSlot(name) <value> Store`
    Assign { name: String, value: Box<Expr> },

    // ───────────────────────────── Arithmetic ───────────────────────────
    /// A single binary operation. The grammar never chains these without
    /// parentheses.
    ///
    /// Emits: `<lhs> <rhs> Add|Sub|Mul|Div|Mod`
    Binary {
        op: BinaryOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
}

impl Expr {
    pub fn binary(op: BinaryOp, lhs: Expr, rhs: Expr) -> Self {
        Expr::Binary {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }

    pub fn assign(name: impl Into<String>, value: Expr) -> Self {
        Expr::Assign {
            name: name.into(),
            value: Box::new(value),
        }
    }
}

impl std::fmt::Display for Expr {
    /// Formats the expression back into surface syntax, fully parenthesising
    /// nested binary operations.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expr::Number(n) => write!(f, "{}", n),
            Expr::Variable(name) => write!(f, "{}", name),
            Expr::Assign { name, value } => write!(f, "{} = {}", name, value),
            Expr::Binary { op, lhs, rhs } => {
                write_operand(f, lhs)?;
                write!(f, " {} ", op)?;
                write_operand(f, rhs)
            }
        }
    }
}

fn write_operand(f: &mut std::fmt::Formatter<'_>, expr: &Expr) -> std::fmt::Result {
    match expr {
        Expr::Binary { .. } | Expr::Assign { .. } => write!(f, "({})", expr),
        _ => write!(f, "{}", expr),
    }
}

/// One semicolon-terminated statement.
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    pub expr: Expr,
}

impl std::fmt::Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{};", self.expr)
    }
}
