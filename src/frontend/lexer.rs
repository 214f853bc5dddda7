use thiserror::Error;
use tracing::debug;

use crate::frontend::token::Token;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LexerError {
    #[error("unrecognized character: '{0}'")]
    UnrecognizedCharacter(char),
}

pub struct Lexer {
    source: Vec<char>,
    pos: usize,
}

impl Lexer {
    pub fn new(source: &str) -> Self {
        Lexer {
            source: source.chars().collect(),
            pos: 0,
        }
    }

    fn current(&self) -> Option<char> {
        self.source.get(self.pos).copied()
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.current();
        if ch.is_some() {
            self.pos += 1;
        }
        ch
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.current() {
            if matches!(ch, ' ' | '\t' | '\n' | '\r' | '\x0C') {
                self.advance();
            } else {
                break;
            }
        }
    }

    /// Reads `digits ('.' digits?)?`.
    ///
    /// Fraction digits are folded into the same accumulator as the whole part
    /// and divided out once at the end: `1.25` is `125 / 100`.
    fn read_number(&mut self) -> Token {
        let mut sum = 0.0_f64;

        while let Some(d) = self.current().and_then(|c| c.to_digit(10)) {
            sum = sum * 10.0 + f64::from(d);
            self.advance();
        }

        if self.current() == Some('.') {
            self.advance();
            let mut pow = 1.0_f64;
            while let Some(d) = self.current().and_then(|c| c.to_digit(10)) {
                sum = sum * 10.0 + f64::from(d);
                pow *= 10.0;
                self.advance();
            }
            sum /= pow;
        }

        Token::Number(sum)
    }

    fn read_identifier(&mut self) -> Token {
        let mut ident = String::new();
        while let Some(ch) = self.current() {
            if ch.is_ascii_alphabetic() {
                ident.push(ch);
                self.advance();
            } else {
                break;
            }
        }
        Token::Identifier(ident)
    }

    /// Tokenizes the whole source in one pass.
    ///
    /// The returned list holds no trailing `EndOfInput`; the token stream
    /// supplies that sentinel on demand.
    pub fn tokenize(&mut self) -> Result<Vec<Token>, LexerError> {
        let mut tokens = Vec::new();

        loop {
            self.skip_whitespace();

            match self.current() {
                None => break,
                Some(ch) if ch.is_ascii_digit() => tokens.push(self.read_number()),
                Some(ch) if ch.is_ascii_alphabetic() => tokens.push(self.read_identifier()),
                Some(ch) => match Token::from_punct(ch) {
                    Some(token) => {
                        self.advance();
                        tokens.push(token);
                    }
                    None => return Err(LexerError::UnrecognizedCharacter(ch)),
                },
            }
        }

        debug!(count = tokens.len(), "tokenized source");
        Ok(tokens)
    }
}

/// Convenience wrapper around [`Lexer::tokenize`].
pub fn tokenize(text: &str) -> Result<Vec<Token>, LexerError> {
    Lexer::new(text).tokenize()
}
