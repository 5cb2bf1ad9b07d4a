pub mod ast;
pub mod cli;
pub mod evaluator;
pub mod lexer;
pub mod parser;
pub mod rules;
pub mod value;

pub use ast::{Expr, Token, TokenKind};
pub use evaluator::{ClauseOutcome, EvalError, EvaluationResult, Evaluator, evaluate, format_clause};
pub use lexer::{Lexer, tokenize};
pub use parser::{ParseError, Parser};
pub use rules::{Rule, RuleError, RuleSet};
pub use value::{Record, Value};

/// Parses a filter expression into a tree.
///
/// # Examples
///
/// ```
/// let expr = sift_lang::parse("age >= 18 AND country = 'US'").unwrap();
/// assert_eq!(expr.to_string(), "age >= 18 AND country = 'US'");
///
/// assert!(sift_lang::parse("age >").is_err());
/// ```
pub fn parse(input: &str) -> Result<Expr, ParseError> {
    Parser::new(Lexer::new(input)).parse()
}
