use tracing::debug;

use crate::{
    bytecode::{Op, ProgramBc},
    lang::{node::Expr, program::Program},
};

/// Lowers an AST to a flat instruction stream.
///
/// Every well-formed AST has a translation, so compilation cannot fail.
pub struct Compiler {
    /// Output instruction stream
    ops: Vec<Op>,
}

impl Default for Compiler {
    fn default() -> Self {
        Self::new()
    }
}

impl Compiler {
    pub fn new() -> Self {
        Self { ops: Vec::new() }
    }

    pub fn compile_program(mut self, program: &Program) -> ProgramBc {
        for statement in &program.statements {
            self.compile_expr(&statement.expr);
        }

        debug!(ops = self.ops.len(), "compiled program");
        ProgramBc::new(self.ops)
    }

    fn compile_expr(&mut self, expr: &Expr) {
        match expr {
            Expr::Number(n) => self.ops.push(Op::PushValue(*n)),

            Expr::Variable(name) => {
                self.ops.push(Op::PushSlot(name.clone()));
                self.ops.push(Op::Load);
            }

            // The target slot goes under the value; Store pops both.
            Expr::Assign { name, value } => {
                self.ops.push(Op::PushSlot(name.clone()));
                self.compile_expr(value);
                self.ops.push(Op::Store);
            }

            Expr::Binary { op, lhs, rhs } => {
                self.compile_expr(lhs);
                self.compile_expr(rhs);
                self.ops.push(Op::from(*op));
            }
        }
    }
}
