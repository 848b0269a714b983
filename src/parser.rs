use crate::ast::{Node, Program, Token, TokenKind};
use crate::error::{CompileError, Result};

/// Recursive-descent parser over a token slice.
///
/// The cursor lives in the parser itself, so each parse owns its position and
/// a partially consumed stream can be inspected through [`Parser::position`].
#[derive(Debug)]
pub struct Parser<'t, 'a> {
    tokens: &'t [Token<'a>],
    pos: usize,
}

impl<'t, 'a> Parser<'t, 'a> {
    pub fn new(tokens: &'t [Token<'a>]) -> Self {
        Self { tokens, pos: 0 }
    }

    /// Parse a whole token stream into a program
    pub fn parse(tokens: &'t [Token<'a>]) -> Result<Program> {
        Self::new(tokens).parse_program()
    }

    /// Index of the next unconsumed token
    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn is_at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// `Program := Expression*`
    pub fn parse_program(&mut self) -> Result<Program> {
        let mut body = Vec::new();
        while !self.is_at_end() {
            body.push(self.parse_expression()?);
        }
        Ok(Program { body })
    }

    /// `Expression := Number | '(' Name Expression* ')'`
    pub fn parse_expression(&mut self) -> Result<Node> {
        match self.bump() {
            Some(Token {
                kind: TokenKind::Number,
                text,
            }) => Ok(Node::number(*text)),
            Some(Token {
                kind: TokenKind::LeftParen,
                ..
            }) => self.parse_call(),
            other => Err(CompileError::unexpected("expression", other.map(|t| t.kind))),
        }
    }

    /// Everything after the opening parenthesis of a call
    fn parse_call(&mut self) -> Result<Node> {
        let name = match self.bump() {
            Some(Token {
                kind: TokenKind::Name,
                text,
            }) => *text,
            other => return Err(CompileError::unexpected("name", other.map(|t| t.kind))),
        };

        let mut params = Vec::new();
        loop {
            match self.peek() {
                Some(TokenKind::RightParen) => {
                    self.pos += 1;
                    break;
                }
                Some(_) => params.push(self.parse_expression()?),
                None => return Err(CompileError::unexpected("')'", None)),
            }
        }

        Ok(Node::call(name, params))
    }

    fn peek(&self) -> Option<TokenKind> {
        self.tokens.get(self.pos).map(|t| t.kind)
    }

    fn bump(&mut self) -> Option<&'t Token<'a>> {
        let token = self.tokens.get(self.pos)?;
        self.pos += 1;
        Some(token)
    }
}
