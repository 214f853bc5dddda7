//! Crate-level error type.
//!
//! Each pipeline stage has its own error; this enum lets callers that drive
//! the whole pipeline propagate any of them with `?`.

use thiserror::Error;

use crate::bytecode::BytecodeError;
use crate::frontend::lexer::LexerError;
use crate::frontend::parser_error::ParserError;
use crate::runtime::runtime_error::RuntimeError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("lexer error: {0}")]
    Lex(#[from] LexerError),

    #[error(transparent)]
    Parse(#[from] ParserError),

    #[error(transparent)]
    Runtime(#[from] RuntimeError),

    #[error(transparent)]
    Bytecode(#[from] BytecodeError),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
