use std::fmt;

use crate::ast::Precedence;

/// The closed set of token kinds the lexer can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// End of input. Repeats forever once reached.
    EndOfInput,

    /// A character the language has no use for
    ///
    /// # Examples
    /// ```text
    /// !
    /// #
    /// ```
    Illegal,

    // Literals and names
    /// Field name
    ///
    /// Must start with an ASCII letter, followed by letters, digits, or underscores.
    ///
    /// # Examples
    /// ```text
    /// age
    /// country_code
    /// item2
    /// ```
    Identifier,

    /// Unsigned decimal number
    ///
    /// # Examples
    /// ```text
    /// 18
    /// 99.99
    /// ```
    Number,

    /// String literal enclosed in single quotes, taken verbatim
    ///
    /// # Examples
    /// ```text
    /// 'US'
    /// 'New York'
    /// ```
    String,

    // Comparison
    /// Equality operator (`=`)
    Equal,
    /// Inequality operator (`!=`)
    NotEqual,
    /// Greater than (`>`)
    Greater,
    /// Less than (`<`)
    Less,
    /// Greater than or equal (`>=`)
    GreaterOrEqual,
    /// Less than or equal (`<=`)
    LessOrEqual,

    // Logical
    /// Logical AND (upper-case keyword)
    And,
    /// Logical OR (upper-case keyword)
    Or,

    // Delimiters
    /// Left parenthesis for grouping
    LeftParen,
    /// Right parenthesis
    RightParen,
}

impl TokenKind {
    /// Binding strength of this kind when it appears in infix position.
    pub fn precedence(self) -> Precedence {
        if self.is_comparison() {
            Precedence::Compare
        } else if self.is_logical() {
            Precedence::Logical
        } else {
            Precedence::Lowest
        }
    }

    pub fn is_comparison(self) -> bool {
        matches!(
            self,
            TokenKind::Equal
                | TokenKind::NotEqual
                | TokenKind::Greater
                | TokenKind::Less
                | TokenKind::GreaterOrEqual
                | TokenKind::LessOrEqual
        )
    }

    pub fn is_logical(self) -> bool {
        matches!(self, TokenKind::And | TokenKind::Or)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::EndOfInput => "EndOfInput",
            TokenKind::Illegal => "Illegal",
            TokenKind::Identifier => "Identifier",
            TokenKind::Number => "Number",
            TokenKind::String => "String",
            TokenKind::Equal => "Equal",
            TokenKind::NotEqual => "NotEqual",
            TokenKind::Greater => "Greater",
            TokenKind::Less => "Less",
            TokenKind::GreaterOrEqual => "GreaterOrEqual",
            TokenKind::LessOrEqual => "LessOrEqual",
            TokenKind::And => "And",
            TokenKind::Or => "Or",
            TokenKind::LeftParen => "LeftParen",
            TokenKind::RightParen => "RightParen",
        };
        f.pad(name)
    }
}

/// A lexical token.
///
/// `text` is the literal source text of the token, except for strings where
/// it is the content between the quotes. `position` is the character offset
/// of the first character consumed for the token.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub position: usize,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, position: usize) -> Self {
        Token {
            kind,
            text: text.into(),
            position,
        }
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::EndOfInput
    }
}
