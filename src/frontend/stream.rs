use crate::frontend::token::Token;

static END_OF_INPUT: Token = Token::EndOfInput;

/// Token list plus a forward-only cursor.
///
/// Peeking past the end yields `Token::EndOfInput` instead of failing, so the
/// parser never has to special-case running out of tokens.
#[derive(Debug, Clone)]
pub struct TokenStream {
    tokens: Vec<Token>,
    cursor: usize,
}

impl TokenStream {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, cursor: 0 }
    }

    /// Returns the token `offset` positions ahead of the cursor.
    pub fn peek(&self, offset: usize) -> &Token {
        self.tokens
            .get(self.cursor + offset)
            .unwrap_or(&END_OF_INPUT)
    }

    /// Returns the token under the cursor.
    pub fn current(&self) -> &Token {
        self.peek(0)
    }

    /// Moves the cursor forward by one; a no-op once at the end.
    pub fn advance(&mut self) {
        if self.cursor < self.tokens.len() {
            self.cursor += 1;
        }
    }

    /// True once every token has been consumed.
    pub fn is_at_end(&self) -> bool {
        self.cursor >= self.tokens.len()
    }
}

impl From<Vec<Token>> for TokenStream {
    fn from(tokens: Vec<Token>) -> Self {
        Self::new(tokens)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_peek_with_offset() {
        let stream = TokenStream::new(vec![Token::Identifier("a".into()), Token::Equals]);
        assert_eq!(stream.peek(0), &Token::Identifier("a".into()));
        assert_eq!(stream.peek(1), &Token::Equals);
        assert_eq!(stream.peek(2), &Token::EndOfInput);
        assert_eq!(stream.peek(100), &Token::EndOfInput);
    }

    #[test]
    fn test_advance_stops_at_end() {
        let mut stream = TokenStream::new(vec![Token::Number(1.0), Token::Semicolon]);
        stream.advance();
        assert!(!stream.is_at_end());
        assert_eq!(stream.current(), &Token::Semicolon);

        stream.advance();
        stream.advance();
        stream.advance();
        assert!(stream.is_at_end());
        assert_eq!(stream.current(), &Token::EndOfInput);
        assert_eq!(stream.peek(1), &Token::EndOfInput);
    }

    #[test]
    fn test_empty_stream() {
        let stream = TokenStream::new(Vec::new());
        assert!(stream.is_at_end());
        assert_eq!(stream.current(), &Token::EndOfInput);
    }
}
