//! JSON <-> record conversion utilities

use crate::{EvaluationResult, Record};

/// Parses a JSON object of scalar fields into a record.
pub fn record_from_json(json: &str) -> Result<Record, serde_json::Error> {
    serde_json::from_str(json)
}

/// Converts an evaluation result into its JSON form.
pub fn result_to_json(result: &EvaluationResult) -> Result<serde_json::Value, serde_json::Error> {
    serde_json::to_value(result)
}
