use crate::lexer::{Token, TokenKind};
use crate::parser::{Expression, ParserError};
use num_bigint::BigUint;

/// Deepest call nesting accepted; keeps the recursive passes over the tree
/// within the stack.
pub const MAX_NESTING_DEPTH: usize = 256;

/// Recursive-descent parser over a fixed token sequence.
///
/// Tokens are never removed; `current` is the index of the next unconsumed one.
pub struct Parser {
    tokens: Vec<Token>,
    current: usize,
    depth: usize,
}

impl Parser {
    #[must_use]
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            current: 0,
            depth: 0,
        }
    }

    /// Check if we've consumed every token
    pub(crate) fn is_at_end(&self) -> bool {
        self.current >= self.tokens.len()
    }

    /// Peek at current token without consuming it
    pub(crate) fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.current)
    }

    /// Peek ahead n tokens
    pub(crate) fn peek_ahead(&self, n: usize) -> Option<&Token> {
        self.tokens.get(self.current + n)
    }

    /// Check if current token matches a kind
    pub(crate) fn check(&self, kind: TokenKind) -> bool {
        self.peek().map_or(false, |token| token.kind == kind)
    }

    fn check_ahead(&self, n: usize, kind: TokenKind) -> bool {
        self.peek_ahead(n).map_or(false, |token| token.kind == kind)
    }

    /// Expect a specific token kind and consume it
    pub(crate) fn expect(&mut self, kind: TokenKind) -> Result<&Token, ParserError> {
        let Some(token) = self.tokens.get(self.current) else {
            return Err(ParserError::UnexpectedEof { expected: kind });
        };

        if token.kind != kind {
            return Err(ParserError::ExpectedToken {
                expected: kind,
                found: token.kind,
                lexeme: token.lexeme.clone(),
                pos: token.pos,
            });
        }

        self.current += 1;
        Ok(token)
    }

    /// Expect an identifier and return its text
    pub(crate) fn expect_identifier(&mut self) -> Result<String, ParserError> {
        Ok(self.expect(TokenKind::Identifier)?.lexeme.clone())
    }

    /// Parse an expression
    ///
    /// An identifier directly followed by `(` is a call; any other identifier
    /// is a variable reference.
    pub(crate) fn parse_expression(&mut self) -> Result<Expression, ParserError> {
        if self.check(TokenKind::Integer) {
            self.parse_integer()
        } else if self.check(TokenKind::Identifier) && self.check_ahead(1, TokenKind::OpenParen) {
            self.parse_call()
        } else {
            self.parse_variable()
        }
    }

    fn parse_integer(&mut self) -> Result<Expression, ParserError> {
        let token = self.expect(TokenKind::Integer)?;
        BigUint::parse_bytes(token.lexeme.as_bytes(), 10)
            .map(Expression::Integer)
            .ok_or_else(|| ParserError::MalformedInteger {
                lexeme: token.lexeme.clone(),
                pos: token.pos,
            })
    }

    fn parse_variable(&mut self) -> Result<Expression, ParserError> {
        Ok(Expression::Variable(self.expect_identifier()?))
    }

    fn parse_call(&mut self) -> Result<Expression, ParserError> {
        let token = self.expect(TokenKind::Identifier)?;
        let (callee, pos) = (token.lexeme.clone(), token.pos);

        if self.depth >= MAX_NESTING_DEPTH {
            return Err(ParserError::NestingTooDeep {
                limit: MAX_NESTING_DEPTH,
                pos,
            });
        }

        self.depth += 1;
        let args = self.parse_arguments();
        self.depth -= 1;

        Ok(Expression::Call { callee, args: args? })
    }

    /// `'(' (expr (',' expr)*)? ')'`
    fn parse_arguments(&mut self) -> Result<Vec<Expression>, ParserError> {
        self.expect(TokenKind::OpenParen)?;

        let mut args = Vec::new();
        if !self.check(TokenKind::CloseParen) {
            args.push(self.parse_expression()?);
            while self.check(TokenKind::Comma) {
                self.expect(TokenKind::Comma)?;
                args.push(self.parse_expression()?);
            }
        }

        self.expect(TokenKind::CloseParen)?;
        Ok(args)
    }
}
