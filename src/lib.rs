//! defc
//!
//! Translates a tiny function-definition language (`define name(a,b) body end`)
//! into JavaScript-style function declarations.

pub mod codegen;
pub mod lexer;
pub mod parser;
pub mod pipeline;

pub use codegen::CodeGenerator;
pub use lexer::{tokenize, LexerError, Position, Token, TokenKind};
pub use parser::{Definition, Expression, Parser, ParserError, MAX_NESTING_DEPTH};
pub use pipeline::{parse_source, translate, TranslateError};
