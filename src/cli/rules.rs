//! Evaluate a file of named rules against JSON input

use serde_json::json;

use super::{CliError, record_from_json, result_to_json};
use crate::RuleSet;

/// Options for the rules command
#[derive(Debug, Clone, Default)]
pub struct RulesOptions {
    /// Contents of the rules file (JSON array)
    pub rules: String,
    /// JSON object holding the record
    pub input: Option<String>,
    /// Only evaluate this rule
    pub rule: Option<String>,
}

/// Execute a sift rules operation
///
/// With a single rule selected, errors abort the command. Otherwise every
/// rule is reported, failures included, as an array of objects.
pub fn execute_rules(options: &RulesOptions) -> Result<serde_json::Value, CliError> {
    let rules = RuleSet::from_json(&options.rules)?;
    log::info!("Loaded {} rule(s)", rules.len());

    let json = options.input.as_deref().ok_or(CliError::NoInput)?;
    let record = record_from_json(json)?;

    if let Some(id) = &options.rule {
        let result = rules.evaluate(id, &record)?;
        let mut output = result_to_json(&result)?;
        output["id"] = json!(id);
        return Ok(output);
    }

    let mut outputs = Vec::with_capacity(rules.len());
    for (id, result) in rules.evaluate_all(&record) {
        let output = match result {
            Ok(result) => {
                let mut output = result_to_json(&result)?;
                output["id"] = json!(id);
                output
            }
            Err(e) => json!({ "id": id, "error": e.to_string() }),
        };
        outputs.push(output);
    }
    Ok(serde_json::Value::Array(outputs))
}
