use std::mem;

use thiserror::Error;

use crate::{
    ast::{Expr, Precedence, Token, TokenKind},
    lexer::Lexer,
};

/// Syntax errors. Every variant carries the offending token text and its
/// position in the source.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unexpected token '{text}' at position {position}")]
    UnexpectedToken { text: String, position: usize },

    #[error("illegal character '{text}' at position {position}")]
    IllegalCharacter { text: String, position: usize },

    #[error("unexpected end of input at position {position}")]
    UnexpectedEnd { position: usize },

    #[error("invalid number '{text}' at position {position}")]
    InvalidNumber { text: String, position: usize },

    #[error(
        "unclosed '(' opened at position {open}: found {} at position {position}",
        found(.text)
    )]
    UnclosedParen {
        text: String,
        position: usize,
        open: usize,
    },

    #[error("unexpected trailing {} at position {position}", found(.text))]
    TrailingInput { text: String, position: usize },
}

fn found(text: &str) -> String {
    if text.is_empty() {
        "end of input".to_string()
    } else {
        format!("'{text}'")
    }
}

impl ParseError {
    /// Character offset of the offending token.
    pub fn position(&self) -> usize {
        match self {
            ParseError::UnexpectedToken { position, .. }
            | ParseError::IllegalCharacter { position, .. }
            | ParseError::UnexpectedEnd { position }
            | ParseError::InvalidNumber { position, .. }
            | ParseError::UnclosedParen { position, .. }
            | ParseError::TrailingInput { position, .. } => *position,
        }
    }

    /// Text of the offending token; empty when the input ended.
    pub fn token(&self) -> &str {
        match self {
            ParseError::UnexpectedToken { text, .. }
            | ParseError::IllegalCharacter { text, .. }
            | ParseError::InvalidNumber { text, .. }
            | ParseError::UnclosedParen { text, .. }
            | ParseError::TrailingInput { text, .. } => text,
            ParseError::UnexpectedEnd { .. } => "",
        }
    }
}

/// Precedence-climbing parser over a two-token window.
///
/// A parser is single use: [`Parser::parse`] consumes it.
pub struct Parser {
    lexer: Lexer,
    current: Token,
    peek: Token,
}

impl Parser {
    pub fn new(mut lexer: Lexer) -> Self {
        let current = lexer.next_token();
        let peek = lexer.next_token();
        Parser {
            lexer,
            current,
            peek,
        }
    }

    fn advance(&mut self) {
        let next = self.lexer.next_token();
        self.current = mem::replace(&mut self.peek, next);
    }

    /// Parse primary expressions: identifiers, literals and parenthesized groups.
    ///
    /// Leaves `current` on the last token of the primary.
    fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        let token = &self.current;
        match token.kind {
            TokenKind::Identifier => Ok(Expr::Identifier(token.text.clone())),
            TokenKind::Number => match token.text.parse::<f64>() {
                Ok(value) if value.is_finite() => Ok(Expr::Number {
                    value,
                    raw: token.text.clone(),
                }),
                _ => Err(ParseError::InvalidNumber {
                    text: token.text.clone(),
                    position: token.position,
                }),
            },
            TokenKind::String => Ok(Expr::String(token.text.clone())),
            TokenKind::LeftParen => {
                let open = token.position;
                self.advance();
                let expr = self.parse_expression(Precedence::Lowest)?;
                if self.peek.kind != TokenKind::RightParen {
                    return Err(ParseError::UnclosedParen {
                        text: self.peek.text.clone(),
                        position: self.peek.position,
                        open,
                    });
                }
                self.advance();
                Ok(expr)
            }
            TokenKind::EndOfInput => Err(ParseError::UnexpectedEnd {
                position: token.position,
            }),
            TokenKind::Illegal => Err(ParseError::IllegalCharacter {
                text: token.text.clone(),
                position: token.position,
            }),
            _ => Err(ParseError::UnexpectedToken {
                text: token.text.clone(),
                position: token.position,
            }),
        }
    }

    /// Folds the operator in `current` into a binary node with `left`.
    fn parse_infix(&mut self, left: Expr) -> Result<Expr, ParseError> {
        let operator = self.current.clone();
        let precedence = operator.kind.precedence();
        self.advance();

        // Same threshold as the operator itself: equal operators group left
        let right = self.parse_expression(precedence)?;

        if operator.kind.is_logical() {
            Ok(Expr::logical(left, operator, right))
        } else {
            Ok(Expr::comparison(left, operator, right))
        }
    }

    fn parse_expression(&mut self, min_precedence: Precedence) -> Result<Expr, ParseError> {
        let mut left = self.parse_primary()?;

        while self.peek.kind.precedence() > min_precedence {
            self.advance();
            left = self.parse_infix(left)?;
        }
        Ok(left)
    }

    /// Parses the whole input. Anything after a complete expression is an error.
    pub fn parse(mut self) -> Result<Expr, ParseError> {
        let expr = self.parse_expression(Precedence::Lowest)?;
        if !self.peek.is_eof() {
            return Err(ParseError::TrailingInput {
                text: self.peek.text.clone(),
                position: self.peek.position,
            });
        }
        Ok(expr)
    }
}
