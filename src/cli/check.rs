//! Evaluate a filter expression against JSON input

use super::{CliError, record_from_json};
use crate::EvaluationResult;

/// Options for the check command
#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    /// The filter expression to evaluate
    pub expression: String,
    /// JSON object holding the record
    pub input: Option<String>,
    /// Only validate syntax, don't evaluate
    pub syntax_only: bool,
}

/// Result of a check operation
#[derive(Debug)]
pub enum CheckResult {
    /// Syntax validation passed
    SyntaxValid,
    /// Expression evaluated against the record
    Success(EvaluationResult),
}

/// Execute a sift check operation
pub fn execute_check(options: &CheckOptions) -> Result<CheckResult, CliError> {
    let expr = crate::parse(&options.expression)?;
    log::debug!("Parsed expression with {} clause(s)", expr.clause_count());

    if options.syntax_only {
        return Ok(CheckResult::SyntaxValid);
    }

    let json = options.input.as_deref().ok_or(CliError::NoInput)?;
    let record = record_from_json(json)?;

    let result = crate::evaluate(&expr, &record)?;
    Ok(CheckResult::Success(result))
}
