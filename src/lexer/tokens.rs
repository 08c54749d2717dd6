use crate::lexer::Position;
use std::fmt;

/// Token kinds.
///
/// Declaration order is the order the scanner tries its rules in: the
/// keywords must come before `Identifier`, which would otherwise swallow them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Define,
    End,
    Identifier,
    Integer,
    OpenParen,  // (
    CloseParen, // )
    Comma,      // ,
}

impl TokenKind {
    /// Every kind, in scanner priority order
    pub const ALL: [TokenKind; 7] = [
        TokenKind::Define,
        TokenKind::End,
        TokenKind::Identifier,
        TokenKind::Integer,
        TokenKind::OpenParen,
        TokenKind::CloseParen,
        TokenKind::Comma,
    ];
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match self {
            TokenKind::Define => "define",
            TokenKind::End => "end",
            TokenKind::Identifier => "identifier",
            TokenKind::Integer => "integer",
            TokenKind::OpenParen => "open-paren",
            TokenKind::CloseParen => "close-paren",
            TokenKind::Comma => "comma",
        };
        write!(f, "{}", s)
    }
}

/// A token with position information
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub pos: Position,
    /// Byte offset of the lexeme in the source text
    pub offset: usize,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: String, pos: Position, offset: usize) -> Self {
        Self {
            kind,
            lexeme,
            pos,
            offset,
        }
    }

    /// Byte offset just past the lexeme
    pub fn end_offset(&self) -> usize {
        self.offset + self.lexeme.len()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} \"{}\"", self.kind, self.lexeme)
    }
}
