pub mod runtime_error;
pub mod symbols;
pub mod vm;
