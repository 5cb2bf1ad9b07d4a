//! Named rules with their parsed trees cached.
//!
//! A [`RuleSet`] is the bookkeeping layer that sits in front of the parser and
//! evaluator: it owns rule definitions keyed by id, parses each expression
//! once when it is stored, and evaluates the cached tree on demand. Updating a
//! rule replaces its tree; removing a rule drops it.
//!
//! # Examples
//!
//! ```
//! use sift_lang::{Rule, RuleSet, Value};
//!
//! let mut rules = RuleSet::new();
//! rules.insert(Rule::new("adult", "age >= 18")).unwrap();
//!
//! let record = Value::record([("age", Value::from(30))]);
//! assert!(rules.evaluate("adult", &record).unwrap().overall_result);
//! ```

use std::{collections::BTreeMap, sync::LazyLock};

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    ast::Expr,
    evaluator::{EvalError, EvaluationResult, evaluate},
    parser::ParseError,
    value::Record,
};

static RULE_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9][A-Za-z0-9_.-]*$").expect("rule id pattern compiles")
});

/// A named filter expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    pub id: String,

    /// Optional human-readable label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    pub expression: String,
}

impl Rule {
    pub fn new(id: impl Into<String>, expression: impl Into<String>) -> Self {
        Rule {
            id: id.into(),
            name: None,
            expression: expression.into(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// Errors from rule bookkeeping.
#[derive(Debug, Error)]
pub enum RuleError {
    #[error("rule '{id}' not found")]
    NotFound { id: String },

    #[error("rule '{id}' already exists")]
    Conflict { id: String },

    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    #[error("rule '{id}' has a syntax error: {source}")]
    Syntax { id: String, source: ParseError },

    #[error("rule '{id}' failed to evaluate: {source}")]
    Evaluation { id: String, source: EvalError },

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl RuleError {
    fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }
}

#[derive(Debug, Clone)]
struct Entry {
    rule: Rule,
    expr: Expr,
}

/// Rules keyed by id, iterated in id order.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    entries: BTreeMap<String, Entry>,
}

fn validate_id(id: &str) -> Result<(), RuleError> {
    if RULE_ID.is_match(id) {
        Ok(())
    } else {
        Err(RuleError::invalid(format!(
            "rule id '{id}' must start with a letter or digit and contain only \
             letters, digits, '_', '.' or '-'"
        )))
    }
}

fn compile(id: &str, expression: &str) -> Result<Expr, RuleError> {
    if expression.trim().is_empty() {
        return Err(RuleError::invalid(format!("rule '{id}' has an empty expression")));
    }
    crate::parse(expression).map_err(|source| RuleError::Syntax {
        id: id.to_string(),
        source,
    })
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads rules from a JSON array of `{"id", "name"?, "expression"}` objects.
    pub fn from_json(json: &str) -> Result<Self, RuleError> {
        let rules: Vec<Rule> = serde_json::from_str(json)?;
        let mut set = RuleSet::new();
        for rule in rules {
            set.insert(rule)?;
        }
        Ok(set)
    }

    /// Stores a new rule. Fails if the id is taken or the expression does not parse.
    pub fn insert(&mut self, rule: Rule) -> Result<(), RuleError> {
        validate_id(&rule.id)?;
        if self.entries.contains_key(&rule.id) {
            return Err(RuleError::Conflict { id: rule.id });
        }
        let expr = compile(&rule.id, &rule.expression)?;

        log::debug!("Inserted rule '{}' with {} clause(s)", rule.id, expr.clause_count());
        self.entries.insert(rule.id.clone(), Entry { rule, expr });
        Ok(())
    }

    /// Replaces the expression of an existing rule, re-parsing it.
    ///
    /// On error the previous expression stays in place.
    pub fn update(&mut self, id: &str, expression: impl Into<String>) -> Result<(), RuleError> {
        let expression = expression.into();
        let entry = self
            .entries
            .get_mut(id)
            .ok_or_else(|| RuleError::NotFound { id: id.to_string() })?;
        let expr = compile(id, &expression)?;

        log::debug!("Updated rule '{id}'");
        entry.rule.expression = expression;
        entry.expr = expr;
        Ok(())
    }

    pub fn remove(&mut self, id: &str) -> Result<Rule, RuleError> {
        let entry = self
            .entries
            .remove(id)
            .ok_or_else(|| RuleError::NotFound { id: id.to_string() })?;
        log::debug!("Removed rule '{id}'");
        Ok(entry.rule)
    }

    pub fn get(&self, id: &str) -> Option<&Rule> {
        self.entries.get(id).map(|entry| &entry.rule)
    }

    /// The cached tree of a rule.
    pub fn expression(&self, id: &str) -> Option<&Expr> {
        self.entries.get(id).map(|entry| &entry.expr)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.entries.values().map(|entry| &entry.rule)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn evaluate(&self, id: &str, record: &Record) -> Result<EvaluationResult, RuleError> {
        let entry = self
            .entries
            .get(id)
            .ok_or_else(|| RuleError::NotFound { id: id.to_string() })?;
        evaluate(&entry.expr, record).map_err(|source| RuleError::Evaluation {
            id: id.to_string(),
            source,
        })
    }

    /// Evaluates every rule against `record`, in id order.
    ///
    /// A rule that fails to evaluate does not stop the others.
    pub fn evaluate_all<'a>(
        &'a self,
        record: &Record,
    ) -> Vec<(&'a str, Result<EvaluationResult, RuleError>)> {
        self.entries
            .keys()
            .map(|id| {
                let result = self.evaluate(id, record);
                if let Err(e) = &result {
                    log::warn!("{e}");
                }
                (id.as_str(), result)
            })
            .collect()
    }
}
