// tests/lexer_tests.rs

use sift_lang::ast::{Token, TokenKind};
use sift_lang::lexer::{Lexer, tokenize};

fn kinds(input: &str) -> Vec<TokenKind> {
    tokenize(input).into_iter().map(|t| t.kind).collect()
}

// ============================================================================
// Single Character Tokens
// ============================================================================

#[test]
fn test_single_char_tokens() {
    let test_cases = vec![
        ("(", TokenKind::LeftParen),
        (")", TokenKind::RightParen),
        ("=", TokenKind::Equal),
        (">", TokenKind::Greater),
        ("<", TokenKind::Less),
    ];

    for (input, expected) in test_cases {
        let mut lexer = Lexer::new(input);
        let token = lexer.next_token();
        assert_eq!(token, Token::new(expected, input, 0), "Failed for input: {}", input);
        assert!(lexer.next_token().is_eof());
    }
}

// ============================================================================
// Two Character Tokens
// ============================================================================

#[test]
fn test_two_char_tokens() {
    let test_cases = vec![
        ("!=", TokenKind::NotEqual),
        (">=", TokenKind::GreaterOrEqual),
        ("<=", TokenKind::LessOrEqual),
    ];

    for (input, expected) in test_cases {
        let mut lexer = Lexer::new(input);
        assert_eq!(
            lexer.next_token(),
            Token::new(expected, input, 0),
            "Failed for input: {}",
            input
        );
        assert!(lexer.next_token().is_eof());
    }
}

#[test]
fn test_equal_is_never_doubled() {
    assert_eq!(kinds("=="), vec![TokenKind::Equal, TokenKind::Equal, TokenKind::EndOfInput]);
}

#[test]
fn test_lone_bang_is_illegal() {
    let tokens = tokenize("! =");
    assert_eq!(tokens[0], Token::new(TokenKind::Illegal, "!", 0));
    assert_eq!(tokens[1], Token::new(TokenKind::Equal, "=", 2));
}

// ============================================================================
// Identifiers and Keywords
// ============================================================================

#[test]
fn test_identifiers() {
    for input in ["age", "country_code", "item2", "A_b_9"] {
        let tokens = tokenize(input);
        assert_eq!(tokens[0], Token::new(TokenKind::Identifier, input, 0));
        assert!(tokens[1].is_eof());
    }
}

#[test]
fn test_keywords_are_case_sensitive() {
    assert_eq!(
        kinds("AND OR and or And"),
        vec![
            TokenKind::And,
            TokenKind::Or,
            TokenKind::Identifier,
            TokenKind::Identifier,
            TokenKind::Identifier,
            TokenKind::EndOfInput,
        ]
    );
}

#[test]
fn test_identifier_cannot_start_with_underscore() {
    let tokens = tokenize("_id");
    assert_eq!(tokens[0], Token::new(TokenKind::Illegal, "_", 0));
    assert_eq!(tokens[1], Token::new(TokenKind::Identifier, "id", 1));
}

// ============================================================================
// Numbers
// ============================================================================

#[test]
fn test_numbers() {
    for input in ["0", "18", "99.99", "3.0"] {
        let tokens = tokenize(input);
        assert_eq!(tokens[0], Token::new(TokenKind::Number, input, 0));
        assert!(tokens[1].is_eof());
    }
}

#[test]
fn test_trailing_dot_is_not_part_of_number() {
    let tokens = tokenize("12.");
    assert_eq!(tokens[0], Token::new(TokenKind::Number, "12", 0));
    assert_eq!(tokens[1], Token::new(TokenKind::Illegal, ".", 2));
    assert!(tokens[2].is_eof());
}

#[test]
fn test_second_dot_ends_number() {
    let tokens = tokenize("1.2.3");
    assert_eq!(tokens[0], Token::new(TokenKind::Number, "1.2", 0));
    assert_eq!(tokens[1], Token::new(TokenKind::Illegal, ".", 3));
    assert_eq!(tokens[2], Token::new(TokenKind::Number, "3", 4));
}

#[test]
fn test_negative_number_is_two_tokens() {
    let tokens = tokenize("-5");
    assert_eq!(tokens[0], Token::new(TokenKind::Illegal, "-", 0));
    assert_eq!(tokens[1], Token::new(TokenKind::Number, "5", 1));
}

// ============================================================================
// Strings
// ============================================================================

#[test]
fn test_string_content_is_verbatim() {
    let tokens = tokenize(r"'New York \n'");
    assert_eq!(tokens[0], Token::new(TokenKind::String, r"New York \n", 0));
    assert!(tokens[1].is_eof());
}

#[test]
fn test_empty_string() {
    let tokens = tokenize("''");
    assert_eq!(tokens[0], Token::new(TokenKind::String, "", 0));
}

#[test]
fn test_unterminated_string_runs_to_end() {
    let tokens = tokenize("name = 'Jo");
    assert_eq!(tokens[2], Token::new(TokenKind::String, "Jo", 7));
    assert_eq!(tokens[3], Token::new(TokenKind::EndOfInput, "", 10));
}

#[test]
fn test_double_quote_is_illegal() {
    assert_eq!(tokenize("\"US\"")[0], Token::new(TokenKind::Illegal, "\"", 0));
}

// ============================================================================
// Whitespace, Positions and End of Input
// ============================================================================

#[test]
fn test_full_expression() {
    assert_eq!(
        kinds("age >= 18 AND country = 'US'"),
        vec![
            TokenKind::Identifier,
            TokenKind::GreaterOrEqual,
            TokenKind::Number,
            TokenKind::And,
            TokenKind::Identifier,
            TokenKind::Equal,
            TokenKind::String,
            TokenKind::EndOfInput,
        ]
    );
}

#[test]
fn test_positions() {
    let positions: Vec<usize> = tokenize("age >= 18 AND country = 'US'")
        .iter()
        .map(|t| t.position)
        .collect();
    assert_eq!(positions, vec![0, 4, 7, 10, 14, 22, 24, 28]);
}

#[test]
fn test_whitespace_kinds_are_skipped() {
    let tokens = tokenize(" \t\r\nage\n>\t1 ");
    assert_eq!(tokens[0], Token::new(TokenKind::Identifier, "age", 4));
    assert_eq!(tokens[1], Token::new(TokenKind::Greater, ">", 8));
    assert_eq!(tokens[2], Token::new(TokenKind::Number, "1", 10));
    assert!(tokens[3].is_eof());
}

#[test]
fn test_end_of_input_repeats() {
    let mut lexer = Lexer::new("a");
    assert_eq!(lexer.next_token().kind, TokenKind::Identifier);
    for _ in 0..3 {
        assert_eq!(lexer.next_token(), Token::new(TokenKind::EndOfInput, "", 1));
    }
}

#[test]
fn test_iterator_stops_after_single_end_of_input() {
    let tokens: Vec<Token> = Lexer::new("").collect();
    assert_eq!(tokens, vec![Token::new(TokenKind::EndOfInput, "", 0)]);

    let eofs = tokenize("a = 1").iter().filter(|t| t.is_eof()).count();
    assert_eq!(eofs, 1);
}

#[test]
fn test_unknown_characters() {
    for ch in ["#", "&", "|", "$", "é"] {
        let tokens = tokenize(ch);
        assert_eq!(tokens[0], Token::new(TokenKind::Illegal, ch, 0), "Failed for input: {}", ch);
    }
}
