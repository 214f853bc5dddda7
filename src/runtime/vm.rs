use tracing::{debug, trace};

use crate::bytecode::stack_check::{check_ops, max_depth};
use crate::bytecode::{Op, ProgramBc};
use crate::runtime::runtime_error::RuntimeError;
use crate::runtime::symbols::{MemoryStore, SymbolTable};

/// A value on the operand stack.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operand {
    /// Slot index pushed by `PushSlot`, consumed by `Load`/`Store`.
    Slot(usize),
    Number(f64),
}

impl Operand {
    pub fn type_name(&self) -> &'static str {
        match self {
            Operand::Slot(_) => "slot",
            Operand::Number(_) => "number",
        }
    }
}

#[derive(Debug, Clone)]
pub struct VmConfig {
    pub max_steps: Option<usize>,
    pub max_stack_size: usize,
}

impl Default for VmConfig {
    fn default() -> Self {
        VmConfig {
            max_steps: None,
            max_stack_size: 10_000,
        }
    }
}

/// Stack machine executing a [`ProgramBc`].
///
/// The symbol table and memory store outlive a single [`Vm::run`], so
/// variables assigned in one run are visible to the next. The operand stack
/// and the last-store record start empty on every run.
pub struct Vm {
    stack: Vec<Operand>,
    symbols: SymbolTable,
    memory: MemoryStore,
    last_store: Option<f64>,
    // Safety limits
    config: VmConfig,
    steps: usize,
}

impl Default for Vm {
    fn default() -> Self {
        Self::new()
    }
}

impl Vm {
    pub fn new() -> Self {
        Self::with_config(VmConfig::default())
    }

    pub fn with_config(config: VmConfig) -> Self {
        Self {
            stack: Vec::new(),
            symbols: SymbolTable::new(),
            memory: MemoryStore::new(),
            last_store: None,
            config,
            steps: 0,
        }
    }

    pub fn stack(&self) -> &[Operand] {
        &self.stack
    }

    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    pub fn memory(&self) -> &MemoryStore {
        &self.memory
    }

    /// Current value of a variable, if it has been assigned.
    pub fn variable(&self, name: &str) -> Option<f64> {
        self.symbols
            .lookup(name)
            .and_then(|slot| self.memory.load(slot))
    }

    pub fn reset_execution_state(&mut self) {
        self.stack.clear();
        self.last_store = None;
        self.steps = 0;
    }

    /// Forgets all variables as well as the execution state.
    pub fn reset(&mut self) {
        self.reset_execution_state();
        self.symbols.clear();
        self.memory.clear();
    }

    /// Runs `prog` and returns its result.
    ///
    /// The result is the value written by the last `Store`, if any ran;
    /// otherwise the value on top of the operand stack. `None` means the
    /// program stored nothing and left nothing (an empty program).
    ///
    /// A failed run leaves the variables as they were before it started.
    pub fn run(&mut self, prog: &ProgramBc) -> Result<Option<f64>, RuntimeError> {
        self.reset_execution_state();

        check_ops(&prog.ops)?;
        let depth = max_depth(&prog.ops);
        if depth > self.config.max_stack_size {
            return Err(RuntimeError::StackLimitExceeded(self.config.max_stack_size));
        }

        let symbols = self.symbols.clone();
        let memory = self.memory.clone();
        let result = match self.exec_ops(&prog.ops).and_then(|()| self.result()) {
            Ok(result) => result,
            Err(e) => {
                self.symbols = symbols;
                self.memory = memory;
                return Err(e);
            }
        };
        debug!(
            steps = self.steps,
            variables = self.symbols.len(),
            leftover = self.stack.len(),
            ?result,
            "run complete"
        );
        Ok(result)
    }

    fn result(&self) -> Result<Option<f64>, RuntimeError> {
        if let Some(value) = self.last_store {
            return Ok(Some(value));
        }
        match self.stack.last() {
            None => Ok(None),
            Some(Operand::Number(n)) => Ok(Some(*n)),
            Some(other) => Err(RuntimeError::TypeMismatch {
                op: "result",
                expected: "number",
                got: other.type_name(),
            }),
        }
    }

    // Execution

    fn check_limits(&mut self) -> Result<(), RuntimeError> {
        self.steps += 1;

        if let Some(max) = self.config.max_steps
            && self.steps > max
        {
            return Err(RuntimeError::StepLimitExceeded(max));
        }

        if self.stack.len() > self.config.max_stack_size {
            return Err(RuntimeError::StackLimitExceeded(self.config.max_stack_size));
        }

        Ok(())
    }

    fn exec_ops(&mut self, ops: &[Op]) -> Result<(), RuntimeError> {
        for (ip, op) in ops.iter().enumerate() {
            self.check_limits()?;
            trace!(ip, op = %op, depth = self.stack.len(), "exec");

            match op {
                Op::PushValue(n) => self.push(Operand::Number(*n)),

                Op::PushSlot(name) => {
                    let slot = self.symbols.resolve(name);
                    self.push(Operand::Slot(slot));
                }

                Op::Load => {
                    let slot = self.pop_slot("LOAD")?;
                    let value = self.memory.load(slot).ok_or_else(|| {
                        RuntimeError::UndefinedSlotRead {
                            name: self.symbols.name(slot).unwrap_or("?").to_string(),
                        }
                    })?;
                    self.push(Operand::Number(value));
                }

                // value was pushed after the slot, so it comes off first
                Op::Store => {
                    let value = self.pop_number("STORE")?;
                    let slot = self.pop_slot("STORE")?;
                    self.memory.store(slot, value);
                    self.last_store = Some(value);
                }

                Op::Add => self.binary("ADD", |a, b| Ok(a + b))?,
                Op::Sub => self.binary("SUB", |a, b| Ok(a - b))?,
                Op::Mul => self.binary("MUL", |a, b| Ok(a * b))?,
                Op::Div => self.binary("DIV", |a, b| {
                    if b == 0.0 {
                        Err(RuntimeError::DivisionByZero)
                    } else {
                        Ok(a / b)
                    }
                })?,
                Op::Mod => self.binary("MOD", |a, b| {
                    if b == 0.0 {
                        Err(RuntimeError::ModuloByZero)
                    } else {
                        Ok(a % b)
                    }
                })?,
            }
        }

        Ok(())
    }

    /// Pops right then left, pushes `f(left, right)`.
    fn binary(
        &mut self,
        op: &'static str,
        f: impl FnOnce(f64, f64) -> Result<f64, RuntimeError>,
    ) -> Result<(), RuntimeError> {
        let b = self.pop_number(op)?;
        let a = self.pop_number(op)?;
        self.push(Operand::Number(f(a, b)?));
        Ok(())
    }

    // Stack operations

    fn push(&mut self, value: Operand) {
        self.stack.push(value);
    }

    fn pop(&mut self, op: &'static str) -> Result<Operand, RuntimeError> {
        self.stack.pop().ok_or(RuntimeError::StackUnderflow { op })
    }

    fn pop_number(&mut self, op: &'static str) -> Result<f64, RuntimeError> {
        match self.pop(op)? {
            Operand::Number(n) => Ok(n),
            other => Err(RuntimeError::TypeMismatch {
                op,
                expected: "number",
                got: other.type_name(),
            }),
        }
    }

    fn pop_slot(&mut self, op: &'static str) -> Result<usize, RuntimeError> {
        match self.pop(op)? {
            Operand::Slot(slot) => Ok(slot),
            other => Err(RuntimeError::TypeMismatch {
                op,
                expected: "slot",
                got: other.type_name(),
            }),
        }
    }
}
