use crate::ast::{Token, TokenKind};

/// Turns filter source text into tokens, one at a time.
///
/// The lexer never fails: characters it cannot classify come back as
/// [`TokenKind::Illegal`] tokens and are rejected by the parser. Once the
/// input is exhausted every call returns [`TokenKind::EndOfInput`].
pub struct Lexer {
    input: Vec<char>,
    position: usize,
    finished: bool,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Lexer {
            input: input.chars().collect(),
            position: 0,
            finished: false,
        }
    }

    fn current_char(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn peek_char(&self, offset: usize) -> Option<char> {
        self.input.get(self.position + offset).copied()
    }

    fn advance(&mut self) {
        self.position += 1;
    }

    fn skip_whitespace(&mut self) {
        while let Some(' ' | '\t' | '\n' | '\r') = self.current_char() {
            self.advance();
        }
    }

    fn slice(&self, start: usize) -> String {
        self.input[start..self.position].iter().collect()
    }

    fn read_identifier(&mut self) -> String {
        let start = self.position;
        while let Some(ch) = self.current_char() {
            if ch.is_ascii_alphanumeric() || ch == '_' {
                self.advance();
            } else {
                break;
            }
        }
        self.slice(start)
    }

    fn read_number(&mut self) -> String {
        let start = self.position;
        while self.current_char().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }

        // A dot only belongs to the number when a digit follows it
        if self.current_char() == Some('.')
            && self.peek_char(1).is_some_and(|c| c.is_ascii_digit())
        {
            self.advance();
            while self.current_char().is_some_and(|c| c.is_ascii_digit()) {
                self.advance();
            }
        }
        self.slice(start)
    }

    /// Reads a single-quoted string. An unterminated string runs to the end of input.
    fn read_string(&mut self) -> String {
        self.advance(); // Consume opening quote
        let start = self.position;

        while let Some(ch) = self.current_char() {
            if ch == '\'' {
                let content = self.slice(start);
                self.advance();
                return content;
            }
            self.advance();
        }
        self.slice(start)
    }

    /// Emits a one- or two-character operator depending on whether `=` follows.
    fn operator(&mut self, start: usize, single: TokenKind, with_equal: TokenKind) -> Token {
        if self.peek_char(1) == Some('=') {
            self.advance();
            self.advance();
            Token::new(with_equal, self.slice(start), start)
        } else {
            self.advance();
            Token::new(single, self.slice(start), start)
        }
    }

    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();
        let start = self.position;

        match self.current_char() {
            None => Token::new(TokenKind::EndOfInput, "", start),
            Some('(') => {
                self.advance();
                Token::new(TokenKind::LeftParen, "(", start)
            }
            Some(')') => {
                self.advance();
                Token::new(TokenKind::RightParen, ")", start)
            }
            Some('=') => {
                self.advance();
                Token::new(TokenKind::Equal, "=", start)
            }
            Some('!') => self.operator(start, TokenKind::Illegal, TokenKind::NotEqual),
            Some('>') => self.operator(start, TokenKind::Greater, TokenKind::GreaterOrEqual),
            Some('<') => self.operator(start, TokenKind::Less, TokenKind::LessOrEqual),
            Some('\'') => {
                let content = self.read_string();
                Token::new(TokenKind::String, content, start)
            }
            Some(ch) if ch.is_ascii_alphabetic() => {
                let ident = self.read_identifier();
                let kind = match ident.as_str() {
                    "AND" => TokenKind::And,
                    "OR" => TokenKind::Or,
                    _ => TokenKind::Identifier,
                };
                Token::new(kind, ident, start)
            }
            Some(ch) if ch.is_ascii_digit() => {
                let number = self.read_number();
                Token::new(TokenKind::Number, number, start)
            }
            Some(ch) => {
                self.advance();
                Token::new(TokenKind::Illegal, ch.to_string(), start)
            }
        }
    }
}

/// Yields every token up to and including the first `EndOfInput`.
impl Iterator for Lexer {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }
        let token = self.next_token();
        self.finished = token.is_eof();
        Some(token)
    }
}

/// Lexes `input` completely, ending with a single `EndOfInput` token.
pub fn tokenize(input: &str) -> Vec<Token> {
    Lexer::new(input).collect()
}

#[test]
fn test_keywords() {
    let mut lexer = Lexer::new("AND OR and Or ANDY");
    assert_eq!(lexer.next_token().kind, TokenKind::And);
    assert_eq!(lexer.next_token().kind, TokenKind::Or);
    assert_eq!(lexer.next_token().kind, TokenKind::Identifier);
    assert_eq!(lexer.next_token().kind, TokenKind::Identifier);
    assert_eq!(lexer.next_token(), Token::new(TokenKind::Identifier, "ANDY", 15));
    assert!(lexer.next_token().is_eof());
}

#[test]
fn test_filter() {
    let mut lexer = Lexer::new("(age>=18)");
    assert_eq!(lexer.next_token(), Token::new(TokenKind::LeftParen, "(", 0));
    assert_eq!(lexer.next_token(), Token::new(TokenKind::Identifier, "age", 1));
    assert_eq!(lexer.next_token(), Token::new(TokenKind::GreaterOrEqual, ">=", 4));
    assert_eq!(lexer.next_token(), Token::new(TokenKind::Number, "18", 6));
    assert_eq!(lexer.next_token(), Token::new(TokenKind::RightParen, ")", 8));
    assert_eq!(lexer.next_token(), Token::new(TokenKind::EndOfInput, "", 9));
}
