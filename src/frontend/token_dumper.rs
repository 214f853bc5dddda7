use crate::frontend::token::{Token, TokenKind};

pub struct TokenDumper {
    pub color: bool,
}

impl Default for TokenDumper {
    fn default() -> Self {
        Self { color: true }
    }
}

impl TokenDumper {
    // ANSI colors
    const RESET: &'static str = "\x1b[0m";
    const YEL: &'static str = "\x1b[33m";
    const CYN: &'static str = "\x1b[36m";
    const MAG: &'static str = "\x1b[35m";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn no_color(mut self) -> Self {
        self.color = false;
        self
    }

    pub fn dump(&self, tokens: &[Token]) {
        print!("{}", self.render(tokens));
    }

    /// Renders one line per token: index, category, debug form.
    pub fn render(&self, tokens: &[Token]) -> String {
        tokens
            .iter()
            .enumerate()
            .map(|(i, token)| {
                let colr = if self.color { self.color(token) } else { "" };
                let reset = if self.color { Self::RESET } else { "" };
                format!(
                    "[{:02}] {}{:<6} {:?}{}\n",
                    i,
                    colr,
                    self.category(token),
                    token,
                    reset
                )
            })
            .collect()
    }

    fn category(&self, t: &Token) -> &'static str {
        match t.kind() {
            TokenKind::Number => "NUM",
            TokenKind::Identifier => "IDENT",
            TokenKind::LParen | TokenKind::RParen | TokenKind::Semicolon => "PUNCT",
            TokenKind::EndOfInput => "EOF",
            _ => "OP",
        }
    }

    fn color(&self, t: &Token) -> &'static str {
        match t.kind() {
            TokenKind::Number => Self::CYN,
            TokenKind::Identifier => Self::YEL,
            TokenKind::LParen | TokenKind::RParen | TokenKind::Semicolon => Self::RESET,
            TokenKind::EndOfInput => Self::RESET,
            _ => Self::MAG,
        }
    }
}
