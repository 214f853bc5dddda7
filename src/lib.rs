//! # Tally
//!
//! Evaluates semicolon-terminated arithmetic and assignment statements such as
//! `hp=10; damage=5; hp/damage+(1.25*2);`.
//!
//! The pipeline is lexer → recursive-descent parser (AST) → compiler (flat
//! instruction stream) → stack VM. Each stage is usable on its own; the
//! functions below chain them.

pub mod bytecode;
pub mod error;
pub mod frontend;
pub mod lang;
pub mod logging;
pub mod runtime;

pub use error::{Error, Result};

use crate::bytecode::ProgramBc;
use crate::bytecode::compile::Compiler;
use crate::frontend::{lexer::Lexer, parser::Parser, stream::TokenStream};
use crate::lang::program::Program;
use crate::runtime::vm::Vm;

/// Tokenizes and parses `source`.
pub fn parse(source: &str) -> Result<Program> {
    let tokens = Lexer::new(source).tokenize()?;
    let mut parser = Parser::from_stream(TokenStream::from(tokens));
    Ok(parser.parse()?)
}

/// Parses and compiles `source` to an instruction stream.
pub fn compile(source: &str) -> Result<ProgramBc> {
    let program = parse(source)?;
    Ok(Compiler::new().compile_program(&program))
}

/// Evaluates `source` on a fresh VM.
///
/// Returns `None` only for a program with no statements.
pub fn evaluate(source: &str) -> Result<Option<f64>> {
    evaluate_with(&mut Vm::new(), source)
}

/// Evaluates `source` on `vm`, keeping whatever variables it already holds.
pub fn evaluate_with(vm: &mut Vm, source: &str) -> Result<Option<f64>> {
    let program = compile(source)?;
    Ok(vm.run(&program)?)
}
