pub mod compile;
pub mod disasm;
pub mod ir;
pub mod op;
pub mod stack_check;

pub use ir::{BytecodeError, ProgramBc};
pub use op::Op;
