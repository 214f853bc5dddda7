use thiserror::Error;

use crate::bytecode::Op;

#[derive(Debug, Clone, PartialEq, Error)]
#[error("stack-check error: stack underflow at ip={ip}, op={op}, needed {needed} items, had {height}")]
pub struct StackCheckError {
    pub ip: usize,
    pub op: String,
    pub needed: usize,
    pub height: usize,
}

/// Returns (pops, pushes) for an op.
///
/// Every instruction has a fixed effect, so a linear scan is exact.
pub fn effect(op: &Op) -> (usize, usize) {
    use Op::*;
    match op {
        PushValue(_) | PushSlot(_) => (0, 1),
        Load => (1, 1),
        Store => (2, 0),
        Add | Sub | Mul | Div | Mod => (2, 1),
    }
}

/// Checks that no instruction can underflow the operand stack.
///
/// Returns the stack height left after the last instruction.
pub fn check_ops(ops: &[Op]) -> Result<usize, StackCheckError> {
    let mut height = 0usize;

    for (ip, op) in ops.iter().enumerate() {
        let (pops, pushes) = effect(op);
        if height < pops {
            return Err(StackCheckError {
                ip,
                op: op.mnemonic().to_string(),
                needed: pops,
                height,
            });
        }
        height = height - pops + pushes;
    }

    Ok(height)
}

/// Largest stack height reached while running `ops`.
///
/// Assumes `ops` already passed [`check_ops`].
pub fn max_depth(ops: &[Op]) -> usize {
    let mut height = 0usize;
    let mut max = 0usize;
    for op in ops {
        let (pops, pushes) = effect(op);
        height = height.saturating_sub(pops) + pushes;
        max = max.max(height);
    }
    max
}
