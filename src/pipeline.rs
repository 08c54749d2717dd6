use thiserror::Error;

use crate::codegen::CodeGenerator;
use crate::lexer::{tokenize, LexerError};
use crate::parser::{Definition, Parser, ParserError};

/// Failure of any stage of a translation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TranslateError {
    #[error("Lexer error: {0}")]
    Lexer(#[from] LexerError),

    #[error("Parser error: {0}")]
    Parser(#[from] ParserError),
}

/// Tokenize and parse a source into its definition tree
pub fn parse_source(source: &str) -> Result<Definition, TranslateError> {
    let tokens = tokenize(source)?;
    let mut parser = Parser::new(tokens);
    Ok(parser.parse_program()?)
}

/// Run the whole pipeline: lex, parse, then generate
pub fn translate(source: &str) -> Result<String, TranslateError> {
    let definition = parse_source(source)?;
    Ok(CodeGenerator::new().generate(&definition))
}
