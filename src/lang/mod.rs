//! # Tally Abstract Syntax Tree
//!
//! The AST is produced by the parser and consumed by the bytecode compiler.
//! It mirrors the grammar one-to-one: a program is a list of statements, each
//! statement wraps a single expression.

pub mod node;
pub mod program;
