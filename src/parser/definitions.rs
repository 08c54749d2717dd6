use crate::lexer::TokenKind;
use crate::parser::{Definition, Parser, ParserError};

impl Parser {
    /// Parse a complete source: exactly one definition and nothing after it
    pub fn parse_program(&mut self) -> Result<Definition, ParserError> {
        let definition = self.parse_definition()?;

        if let Some(token) = self.peek() {
            return Err(ParserError::TrailingTokens {
                found: token.kind,
                lexeme: token.lexeme.clone(),
                pos: token.pos,
            });
        }

        tracing::debug!(name = %definition.name, params = definition.params.len(), "parsed definition");
        Ok(definition)
    }

    /// `'define' identifier '(' param-list? ')' expr 'end'`
    pub fn parse_definition(&mut self) -> Result<Definition, ParserError> {
        let pos = self.expect(TokenKind::Define)?.pos;
        let name = self.expect_identifier()?;
        let params = self.parse_params()?;
        let body = self.parse_expression()?;
        self.expect(TokenKind::End)?;

        Ok(Definition {
            name,
            params,
            body,
            pos,
        })
    }

    /// `'(' (identifier (',' identifier)*)? ')'`
    fn parse_params(&mut self) -> Result<Vec<String>, ParserError> {
        self.expect(TokenKind::OpenParen)?;

        let mut params = Vec::new();
        if self.check(TokenKind::Identifier) {
            params.push(self.expect_identifier()?);
            while self.check(TokenKind::Comma) {
                self.expect(TokenKind::Comma)?;
                params.push(self.expect_identifier()?);
            }
        }

        self.expect(TokenKind::CloseParen)?;
        Ok(params)
    }

    /// Whether every token has been consumed
    pub fn is_finished(&self) -> bool {
        self.is_at_end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::{tokenize, Position};
    use crate::parser::Expression;

    fn parse(source: &str) -> Result<Definition, ParserError> {
        Parser::new(tokenize(source).unwrap()).parse_program()
    }

    #[test]
    fn parses_add() {
        let def = parse("define add(a,b) add(a,b) end").unwrap();
        assert_eq!(def.name, "add");
        assert_eq!(def.params, vec!["a", "b"]);
        assert_eq!(
            def.body,
            Expression::call("add", vec![Expression::variable("a"), Expression::variable("b")])
        );
        assert_eq!(def.pos, Position::start());
    }

    #[test]
    fn parses_empty_params_and_integer_body() {
        let def = parse("define zero() 0 end").unwrap();
        assert!(def.params.is_empty());
        assert_eq!(def.body, Expression::integer(0u32));
    }

    #[test]
    fn duplicate_params_are_kept() {
        let def = parse("define f(x,x) x end").unwrap();
        assert_eq!(def.params, vec!["x", "x"]);
    }

    #[test]
    fn missing_close_paren_names_expected_and_actual() {
        let err = parse("define f(x x end").unwrap_err();
        assert_eq!(
            err,
            ParserError::ExpectedToken {
                expected: TokenKind::CloseParen,
                found: TokenKind::Identifier,
                lexeme: "x".to_string(),
                pos: Position::new(1, 12),
            }
        );
    }

    #[test]
    fn missing_end_is_eof_error() {
        assert_eq!(
            parse("define f(x) x").unwrap_err(),
            ParserError::UnexpectedEof {
                expected: TokenKind::End
            }
        );
    }

    #[test]
    fn source_must_start_with_define() {
        assert_eq!(parse("f(x) x end").unwrap_err().expected(), Some(TokenKind::Define));
        assert_eq!(
            parse("").unwrap_err(),
            ParserError::UnexpectedEof {
                expected: TokenKind::Define
            }
        );
    }

    #[test]
    fn body_is_a_single_expression() {
        let err = parse("define f(x) x x end").unwrap_err();
        assert!(matches!(
            err,
            ParserError::ExpectedToken {
                expected: TokenKind::End,
                found: TokenKind::Identifier,
                ..
            }
        ));
    }

    #[test]
    fn tokens_after_end_are_rejected() {
        let err = parse("define f() 1 end define").unwrap_err();
        assert!(matches!(
            err,
            ParserError::TrailingTokens {
                found: TokenKind::Define,
                ..
            }
        ));
    }

    #[test]
    fn parse_definition_alone_leaves_trailing_tokens() {
        let mut parser = Parser::new(tokenize("define f() 1 end 2").unwrap());
        parser.parse_definition().unwrap();
        assert!(!parser.is_finished());
    }
}
