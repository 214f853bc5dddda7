use thiserror::Error;

use crate::bytecode::stack_check::StackCheckError;

/// Errors raised while executing a compiled program.
///
/// Every error aborts the run; there is no partial result.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RuntimeError {
    /// Program rejected by the static stack check before execution.
    #[error(transparent)]
    StackCheck(#[from] StackCheckError),

    #[error("runtime error: stack underflow in {op}")]
    StackUnderflow { op: &'static str },

    /// A slot was found where a number was required, or the reverse.
    #[error("runtime error: type error in {op}: expected {expected}, got {got}")]
    TypeMismatch {
        op: &'static str,
        expected: &'static str,
        got: &'static str,
    },

    /// `Load` from a variable that has never been assigned.
    #[error("runtime error: variable '{name}' read before assignment")]
    UndefinedSlotRead { name: String },

    #[error("runtime error: division by zero")]
    DivisionByZero,

    #[error("runtime error: modulo by zero")]
    ModuloByZero,

    #[error("runtime error: execution step limit exceeded ({0})")]
    StepLimitExceeded(usize),

    #[error("runtime error: stack size limit exceeded ({0})")]
    StackLimitExceeded(usize),
}
