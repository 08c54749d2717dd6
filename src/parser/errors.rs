use crate::lexer::{Position, TokenKind};
use thiserror::Error;

/// Parser error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParserError {
    #[error("Expected {expected} but found {found} \"{lexeme}\" at {pos}")]
    ExpectedToken {
        expected: TokenKind,
        found: TokenKind,
        lexeme: String,
        pos: Position,
    },

    #[error("Expected {expected} but reached end of input")]
    UnexpectedEof { expected: TokenKind },

    #[error("Malformed integer literal '{lexeme}' at {pos}")]
    MalformedInteger { lexeme: String, pos: Position },

    #[error("Calls nested deeper than {limit} levels at {pos}")]
    NestingTooDeep { limit: usize, pos: Position },

    #[error("Unexpected {found} \"{lexeme}\" after end of definition at {pos}")]
    TrailingTokens {
        found: TokenKind,
        lexeme: String,
        pos: Position,
    },
}

impl ParserError {
    /// The kind the parser was waiting for, when the failure was a mismatch
    pub fn expected(&self) -> Option<TokenKind> {
        match self {
            ParserError::ExpectedToken { expected, .. } | ParserError::UnexpectedEof { expected } => {
                Some(*expected)
            }
            ParserError::MalformedInteger { .. }
            | ParserError::NestingTooDeep { .. }
            | ParserError::TrailingTokens { .. } => None,
        }
    }
}
