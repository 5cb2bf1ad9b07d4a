//! Token and tree dumps for debugging expressions

use super::CliError;
use crate::tokenize;

/// One line per token: position, kind and text.
pub fn render_tokens(expression: &str) -> String {
    tokenize(expression)
        .iter()
        .map(|token| format!("{:>4}  {:<14} {}", token.position, token.kind, token.text))
        .map(|line| line.trim_end().to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Canonical rendering of the parsed tree, with explicit grouping.
pub fn render_tree(expression: &str) -> Result<String, CliError> {
    Ok(crate::parse(expression)?.to_string())
}
