pub mod lexer;
pub mod parser;
pub mod parser_error;
pub mod stream;
pub mod token;
pub mod token_dumper;
