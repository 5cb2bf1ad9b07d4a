use serde::Serialize;
use thiserror::Error;

use crate::{
    ast::{Expr, Token, TokenKind},
    value::{Record, Value},
};

/// Outcome of a single comparison clause.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClauseOutcome {
    /// The clause rendered as `<field> <operator> <literal>`
    pub clause_text: String,
    pub result: bool,
}

/// Overall verdict plus one entry per comparison, in left-to-right order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationResult {
    pub overall_result: bool,
    pub clauses: Vec<ClauseOutcome>,
}

/// Errors raised for trees the evaluator cannot give a meaning to.
///
/// Missing fields are not errors; they make their clause false.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("left side of comparison must be an identifier")]
    LeftNotIdentifier,

    #[error("right side of comparison must be a literal")]
    RightNotLiteral,

    #[error("non-numeric comparison: {field} {operator} requires numbers, found {found}")]
    NonNumericComparison {
        field: String,
        operator: String,
        found: &'static str,
    },

    #[error("expression has no top-level boolean operator")]
    NoBooleanOperator,

    #[error("unsupported operator '{operator}'")]
    UnsupportedOperator { operator: String },
}

/// Walks an expression tree against one record.
///
/// The evaluator only owns the clause trace being built; the tree and the
/// record are borrowed and never modified.
pub struct Evaluator<'a> {
    record: &'a Record,
    clauses: Vec<ClauseOutcome>,
}

impl<'a> Evaluator<'a> {
    pub fn new(record: &'a Record) -> Self {
        Evaluator {
            record,
            clauses: Vec::new(),
        }
    }

    /// Evaluates `expr`, consuming the evaluator.
    ///
    /// # Examples
    ///
    /// ```
    /// use sift_lang::{Evaluator, Value};
    ///
    /// let expr = sift_lang::parse("age > 18").unwrap();
    /// let record = Value::record([("age", Value::from(25))]);
    ///
    /// let result = Evaluator::new(&record).evaluate(&expr).unwrap();
    /// assert!(result.overall_result);
    /// assert_eq!(result.clauses[0].clause_text, "age > 18");
    /// ```
    pub fn evaluate(mut self, expr: &Expr) -> Result<EvaluationResult, EvalError> {
        let overall_result = self.eval_expr(expr)?;
        Ok(EvaluationResult {
            overall_result,
            clauses: self.clauses,
        })
    }

    /// Left operands are walked with an explicit stack; recursion only follows
    /// right operands, which nest no deeper than the source's parentheses.
    fn eval_expr(&mut self, expr: &Expr) -> Result<bool, EvalError> {
        let mut pending = Vec::new();
        let mut head = expr;
        while let Expr::Logical {
            left,
            operator,
            right,
        } = head
        {
            pending.push((operator, right));
            head = &**left;
        }

        let mut result = self.eval_clause(head)?;
        // Both sides always run so every clause lands in the trace
        while let Some((operator, right)) = pending.pop() {
            let right = self.eval_expr(right)?;
            result = match operator.kind {
                TokenKind::And => result && right,
                TokenKind::Or => result || right,
                _ => return Err(unsupported(operator)),
            };
        }
        Ok(result)
    }

    fn eval_clause(&mut self, expr: &Expr) -> Result<bool, EvalError> {
        match expr {
            Expr::Comparison {
                left,
                operator,
                right,
            } => {
                let result = self.eval_comparison(left, operator, right)?;
                self.clauses.push(ClauseOutcome {
                    clause_text: format_clause(expr),
                    result,
                });
                Ok(result)
            }
            Expr::Logical { .. } => self.eval_expr(expr),
            Expr::Identifier(_) | Expr::Number { .. } | Expr::String(_) => {
                Err(EvalError::NoBooleanOperator)
            }
        }
    }

    fn eval_comparison(
        &self,
        left: &Expr,
        operator: &Token,
        right: &Expr,
    ) -> Result<bool, EvalError> {
        let Expr::Identifier(field) = left else {
            return Err(EvalError::LeftNotIdentifier);
        };

        let data = match self.record.get(field) {
            Some(value) if !value.is_absent() => value,
            _ => return Ok(false),
        };

        let literal = literal_value(right)?;

        match operator.kind {
            TokenKind::Equal => Ok(data.loose_eq(&literal)),
            TokenKind::NotEqual => Ok(!data.loose_eq(&literal)),
            TokenKind::Greater => order(field, operator, data, &literal, |a, b| a > b),
            TokenKind::Less => order(field, operator, data, &literal, |a, b| a < b),
            TokenKind::GreaterOrEqual => {
                Ok(order(field, operator, data, &literal, |a, b| a > b)? || data.loose_eq(&literal))
            }
            TokenKind::LessOrEqual => {
                Ok(order(field, operator, data, &literal, |a, b| a < b)? || data.loose_eq(&literal))
            }
            _ => Err(unsupported(operator)),
        }
    }
}

fn unsupported(operator: &Token) -> EvalError {
    EvalError::UnsupportedOperator {
        operator: operator.text.clone(),
    }
}

fn literal_value(expr: &Expr) -> Result<Value, EvalError> {
    match expr {
        Expr::Number { value, .. } => Ok(Value::Number(*value)),
        Expr::String(s) => Ok(Value::String(s.clone())),
        _ => Err(EvalError::RightNotLiteral),
    }
}

fn order<F>(
    field: &str,
    operator: &Token,
    data: &Value,
    literal: &Value,
    cmp: F,
) -> Result<bool, EvalError>
where
    F: Fn(f64, f64) -> bool,
{
    match (data.as_number(), literal.as_number()) {
        (Some(a), Some(b)) => Ok(cmp(a, b)),
        (None, _) => Err(non_numeric(field, operator, data)),
        (_, None) => Err(non_numeric(field, operator, literal)),
    }
}

fn non_numeric(field: &str, operator: &Token, offending: &Value) -> EvalError {
    EvalError::NonNumericComparison {
        field: field.to_string(),
        operator: operator.text.clone(),
        found: offending.type_name(),
    }
}

/// Renders a comparison clause as `<identifier> <operator> <value>`.
///
/// Numbers keep their source text and strings are wrapped in single quotes.
pub fn format_clause(comparison: &Expr) -> String {
    comparison.to_string()
}

/// Evaluates `expr` against `record`.
pub fn evaluate(expr: &Expr, record: &Record) -> Result<EvaluationResult, EvalError> {
    Evaluator::new(record).evaluate(expr)
}
