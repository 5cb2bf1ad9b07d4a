//! CLI support for sift-lang
//!
//! Provides programmatic access to the `sift` commands so other tools can
//! embed them without shelling out.

mod check;
mod convert;
mod docs;
mod inspect;
mod rules;

pub use check::{CheckOptions, CheckResult, execute_check};
pub use convert::{record_from_json, result_to_json};
pub use docs::{DocCategory, get_doc_category, get_docs_overview};
pub use inspect::{render_tokens, render_tree};
pub use rules::{RulesOptions, execute_rules};

use std::io;

use thiserror::Error;

use crate::{EvalError, ParseError, RuleError};

/// Errors that can occur during CLI operations
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Evaluation error: {0}")]
    Eval(#[from] EvalError),

    #[error("Rule error: {0}")]
    Rule(#[from] RuleError),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("No input provided. Use --input or pipe JSON to stdin.")]
    NoInput,

    #[error("Unknown category: '{0}'\nRun 'sift docs' to see available categories.")]
    UnknownCategory(String),
}
