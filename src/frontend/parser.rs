use tracing::debug;

use crate::frontend::parser_error::ParserError;
use crate::frontend::stream::TokenStream;
use crate::frontend::token::Token;
use crate::lang::node::{BinaryOp, Expr, Statement};
use crate::lang::program::Program;

/// Recursive-descent parser.
///
/// Grammar:
///
/// ```text
/// Block      := Statement*                       (until end of input)
/// Statement  := Expression ';'
/// Expression := Identifier '=' Expression
///             | Term ( ('+' | '-') Term )?
/// Term       := Factor ( ('*' | '/' | '%') Factor )?
/// Factor     := '(' Expression ')'
///             | Identifier
///             | '-'? Number
/// ```
///
/// Each level takes at most one operator. `1 + 2 + 3` stops after `1 + 2` and
/// the statement rule then fails on the second `+`; parentheses are the only
/// way to combine more than two operands.
pub struct Parser {
    stream: TokenStream,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self::from_stream(TokenStream::new(tokens))
    }

    pub fn from_stream(stream: TokenStream) -> Self {
        Parser { stream }
    }

    fn current(&self) -> &Token {
        self.stream.current()
    }

    fn error(&self, expected: &'static str) -> ParserError {
        ParserError::new(self.current().clone(), expected)
    }

    fn expect(&mut self, token: Token, expected: &'static str) -> Result<(), ParserError> {
        if *self.current() != token {
            return Err(self.error(expected));
        }
        self.stream.advance();
        Ok(())
    }

    /// Parses statements until end of input. The first error aborts the
    /// whole parse.
    pub fn parse(&mut self) -> Result<Program, ParserError> {
        let mut statements = Vec::new();

        while !self.stream.is_at_end() {
            statements.push(self.parse_statement()?);
        }

        debug!(statements = statements.len(), "parsed program");
        Ok(Program::new(statements))
    }

    fn parse_statement(&mut self) -> Result<Statement, ParserError> {
        let expr = self.parse_expression()?;
        self.expect(Token::Semicolon, ";")?;
        Ok(Statement { expr })
    }

    /// Assignment is recognised only by the immediate `Identifier '='`
    /// pattern, found with one token of lookahead.
    fn parse_expression(&mut self) -> Result<Expr, ParserError> {
        if matches!(self.current(), Token::Identifier(_)) && *self.stream.peek(1) == Token::Equals
        {
            let name = self.parse_identifier()?;
            self.stream.advance(); // consume '='
            let value = self.parse_expression()?;
            return Ok(Expr::assign(name, value));
        }

        let lhs = self.parse_term()?;
        let op = match self.current() {
            Token::Plus => BinaryOp::Add,
            Token::Minus => BinaryOp::Sub,
            _ => return Ok(lhs),
        };
        self.stream.advance();
        let rhs = self.parse_term()?;

        Ok(Expr::binary(op, lhs, rhs))
    }

    fn parse_term(&mut self) -> Result<Expr, ParserError> {
        let lhs = self.parse_factor()?;
        let op = match self.current() {
            Token::Star => BinaryOp::Mul,
            Token::Slash => BinaryOp::Div,
            Token::Percent => BinaryOp::Mod,
            _ => return Ok(lhs),
        };
        self.stream.advance();
        let rhs = self.parse_factor()?;

        Ok(Expr::binary(op, lhs, rhs))
    }

    fn parse_factor(&mut self) -> Result<Expr, ParserError> {
        match self.current() {
            Token::LParen => {
                self.stream.advance();
                let expr = self.parse_expression()?;
                self.expect(Token::RParen, ")")?;
                Ok(expr)
            }
            Token::Identifier(_) => Ok(Expr::Variable(self.parse_identifier()?)),
            Token::Minus | Token::Number(_) => self.parse_value(),
            _ => Err(self.error("<factor>")),
        }
    }

    fn parse_identifier(&mut self) -> Result<String, ParserError> {
        match self.current() {
            Token::Identifier(name) => {
                let name = name.clone();
                self.stream.advance();
                Ok(name)
            }
            _ => Err(self.error("<identifier>")),
        }
    }

    /// `'-'? Number`. The sign binds only to a literal, never to `(` or a
    /// variable.
    fn parse_value(&mut self) -> Result<Expr, ParserError> {
        if !matches!(self.current(), Token::Minus | Token::Number(_)) {
            return Err(self.error("- or <value>"));
        }

        let mut sign = 1.0;
        if *self.current() == Token::Minus {
            sign = -1.0;
            self.stream.advance();
        }

        let n = match self.current() {
            Token::Number(n) => *n,
            _ => return Err(self.error("<value>")),
        };
        self.stream.advance();

        Ok(Expr::Number(sign * n))
    }
}
