use thiserror::Error;

use crate::frontend::token::Token;

/// A parsing error.
///
/// Carries the token the parser was looking at and a description of what the
/// grammar rule needed there (`;`, `)`, `<factor>`, ...). There is no source
/// position; the offending token text is the only locator.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("parse error: found '{found}', expected '{expected}'")]
pub struct ParserError {
    pub found: Token,
    pub expected: &'static str,
}

impl ParserError {
    pub fn new(found: Token, expected: &'static str) -> Self {
        Self { found, expected }
    }
}
