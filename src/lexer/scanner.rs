use crate::lexer::{LexerError, Position, Token, TokenKind};
use lazy_static::lazy_static;
use regex::Regex;

/// Anchored pattern for each token kind
fn rule_pattern(kind: TokenKind) -> &'static str {
    match kind {
        TokenKind::Define => r"\Adefine\b",
        TokenKind::End => r"\Aend\b",
        TokenKind::Identifier => r"\A[a-zA-Z]+",
        TokenKind::Integer => r"\A[0-9]+",
        TokenKind::OpenParen => r"\A\(",
        TokenKind::CloseParen => r"\A\)",
        TokenKind::Comma => r"\A,",
    }
}

lazy_static! {
    /// Compiled rules in priority order. The first rule that matches wins.
    static ref RULES: Vec<(TokenKind, Regex)> = TokenKind::ALL
        .iter()
        .map(|&kind| {
            let regex = Regex::new(rule_pattern(kind)).expect("token patterns are valid regexes");
            (kind, regex)
        })
        .collect();
}

/// Kinds in the order the scanner tries them
pub fn rule_order() -> Vec<TokenKind> {
    RULES.iter().map(|(kind, _)| *kind).collect()
}

pub struct Scanner {
    input: String,
    current: usize,
    pos: Position,
    tokens: Vec<Token>,
}

impl Scanner {
    pub fn new(input: String) -> Self {
        Self {
            input,
            current: 0,
            pos: Position::start(),
            tokens: Vec::new(),
        }
    }

    pub fn scan_all(mut self) -> Result<Vec<Token>, LexerError> {
        loop {
            self.skip_whitespace();
            if self.is_at_end() {
                break;
            }

            let token = self.scan_token()?;
            tracing::trace!(kind = %token.kind, lexeme = %token.lexeme, pos = %token.pos, "scanned token");
            self.tokens.push(token);
        }

        tracing::debug!(count = self.tokens.len(), "lexing finished");
        Ok(self.tokens)
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.input.len()
    }

    fn rest(&self) -> &str {
        &self.input[self.current..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.current += ch.len_utf8();
        self.pos.step(ch);
        Some(ch)
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(ch) if ch.is_whitespace()) {
            self.advance();
        }
    }

    fn scan_token(&mut self) -> Result<Token, LexerError> {
        let start_pos = self.pos;
        let start_idx = self.current;

        let matched = RULES.iter().find_map(|(kind, regex)| {
            regex.find(self.rest()).map(|m| (*kind, m.as_str().to_string()))
        });

        let (kind, lexeme) = match matched {
            Some(hit) => hit,
            None => {
                let fragment = self
                    .rest()
                    .split(char::is_whitespace)
                    .next()
                    .unwrap_or_default()
                    .to_string();
                return Err(LexerError::UnrecognizedInput {
                    fragment,
                    pos: start_pos,
                });
            }
        };

        // Tokens never span lines, but go through advance() to keep columns right.
        for _ in lexeme.chars() {
            self.advance();
        }

        Ok(Token::new(kind, lexeme, start_pos, start_idx))
    }
}

// Convenience function for tokenizing input
pub fn tokenize(input: impl Into<String>) -> Result<Vec<Token>, LexerError> {
    Scanner::new(input.into()).scan_all()
}
