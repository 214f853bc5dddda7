use serde::{Deserialize, Serialize};

use crate::lang::node::BinaryOp;

// =============================================================================
// OP - Bytecode instructions
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Op {
    // literals
    /// ( -- n )
    PushValue(f64),

    // variables
    /// ( -- slot ). The name is resolved to a slot by the VM at run time.
    PushSlot(String),
    /// ( slot -- value )
    Load,
    /// ( slot value -- )
    Store,

    // arithmetic
    Add,
    Sub,
    Mul,
    Div,
    Mod,
}

impl Op {
    /// Opcode mnemonic used by the disassembler and in error messages.
    pub fn mnemonic(&self) -> &'static str {
        match self {
            Op::PushValue(_) => "PUSHV",
            Op::PushSlot(_) => "PUSHS",
            Op::Load => "LOAD",
            Op::Store => "STORE",
            Op::Add => "ADD",
            Op::Sub => "SUB",
            Op::Mul => "MUL",
            Op::Div => "DIV",
            Op::Mod => "MOD",
        }
    }
}

impl From<BinaryOp> for Op {
    fn from(op: BinaryOp) -> Self {
        match op {
            BinaryOp::Add => Op::Add,
            BinaryOp::Sub => Op::Sub,
            BinaryOp::Mul => Op::Mul,
            BinaryOp::Div => Op::Div,
            BinaryOp::Mod => Op::Mod,
        }
    }
}

impl std::fmt::Display for Op {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Op::PushValue(n) => write!(f, "{:<6} {}", self.mnemonic(), n),
            Op::PushSlot(name) => write!(f, "{:<6} &{}", self.mnemonic(), name),
            _ => write!(f, "{}", self.mnemonic()),
        }
    }
}
