/// A lexical token.
///
/// Tokens carry their payload directly: numbers are already folded into an
/// `f64` by the lexer, identifiers keep their literal text.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    // Operators
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Equals,

    // Punctuation
    Semicolon,
    LParen,
    RParen,

    // Literals and names
    Number(f64),
    Identifier(String),

    // Sentinel returned when peeking past the last token
    EndOfInput,
}

/// The payload-free kind of a [`Token`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    EndOfInput,
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Equals,
    Semicolon,
    LParen,
    RParen,
    Number,
    Identifier,
}

impl Token {
    pub fn kind(&self) -> TokenKind {
        match self {
            Token::Plus => TokenKind::Plus,
            Token::Minus => TokenKind::Minus,
            Token::Star => TokenKind::Star,
            Token::Slash => TokenKind::Slash,
            Token::Percent => TokenKind::Percent,
            Token::Equals => TokenKind::Equals,
            Token::Semicolon => TokenKind::Semicolon,
            Token::LParen => TokenKind::LParen,
            Token::RParen => TokenKind::RParen,
            Token::Number(_) => TokenKind::Number,
            Token::Identifier(_) => TokenKind::Identifier,
            Token::EndOfInput => TokenKind::EndOfInput,
        }
    }

    /// Maps a single punctuation character to its token.
    pub fn from_punct(ch: char) -> Option<Token> {
        let token = match ch {
            '+' => Token::Plus,
            '-' => Token::Minus,
            '*' => Token::Star,
            '/' => Token::Slash,
            '%' => Token::Percent,
            '=' => Token::Equals,
            ';' => Token::Semicolon,
            '(' => Token::LParen,
            ')' => Token::RParen,
            _ => return None,
        };
        Some(token)
    }
}

impl std::fmt::Display for Token {
    /// Formats the token as its literal source text.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Plus => write!(f, "+"),
            Token::Minus => write!(f, "-"),
            Token::Star => write!(f, "*"),
            Token::Slash => write!(f, "/"),
            Token::Percent => write!(f, "%"),
            Token::Equals => write!(f, "="),
            Token::Semicolon => write!(f, ";"),
            Token::LParen => write!(f, "("),
            Token::RParen => write!(f, ")"),
            Token::Number(n) => write!(f, "{}", n),
            Token::Identifier(s) => write!(f, "{}", s),
            Token::EndOfInput => write!(f, "end of input"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_literal_text() {
        assert_eq!(Token::Percent.to_string(), "%");
        assert_eq!(Token::Number(1.25).to_string(), "1.25");
        assert_eq!(Token::Number(10.0).to_string(), "10");
        assert_eq!(Token::Identifier("hp".to_string()).to_string(), "hp");
    }

    #[test]
    fn test_from_punct_covers_operator_set() {
        for ch in "+-*/%=;()".chars() {
            let token = Token::from_punct(ch).expect("operator should map");
            assert_eq!(token.to_string(), ch.to_string());
        }
        assert_eq!(Token::from_punct('@'), None);
        assert_eq!(Token::from_punct('.'), None);
    }

    #[test]
    fn test_kind() {
        assert_eq!(Token::Number(3.0).kind(), TokenKind::Number);
        assert_eq!(Token::Identifier("x".into()).kind(), TokenKind::Identifier);
        assert_eq!(Token::EndOfInput.kind(), TokenKind::EndOfInput);
    }
}
