use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A field/value record that expressions are evaluated against.
pub type Record = HashMap<String, Value>;

/// A scalar value stored in a [`Record`].
///
/// Records are flat: only JSON scalars are accepted. `null` is kept so that
/// a field present with a null value can be told apart during
/// deserialization, but evaluation treats it exactly like a missing field.
///
/// # Examples
///
/// ```
/// use sift_lang::Value;
///
/// let record = Value::record([("age", Value::from(25)), ("country", Value::from("US"))]);
/// assert_eq!(record["age"].as_number(), Some(25.0));
/// assert_eq!(record["country"].as_number(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// JSON null
    Null,

    /// JSON boolean (true/false)
    Boolean(bool),

    /// Any JSON number, held as a float
    Number(f64),

    /// UTF-8 string
    String(String),
}

impl Value {
    /// Builds a record from `(field, value)` pairs.
    pub fn record<K, I>(pairs: I) -> Record
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Value)>,
    {
        pairs.into_iter().map(|(k, v)| (k.into(), v)).collect()
    }

    /// Null counts as absent.
    pub fn is_absent(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Numeric view used by ordering comparisons.
    ///
    /// Only finite numbers convert; numeric-looking strings do not.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) if n.is_finite() => Some(*n),
            _ => None,
        }
    }

    /// Equality as used by `=` and `!=`.
    ///
    /// Numbers compare numerically, strings exactly and case-sensitively.
    /// Values of different types are never equal: `'3'` does not equal `3`.
    pub fn loose_eq(&self, other: &Value) -> bool {
        if self == other {
            return true;
        }
        match (self, other) {
            (Value::Number(_), Value::Number(_)) => match (self.as_number(), other.as_number()) {
                (Some(a), Some(b)) => a == b,
                _ => false,
            },
            (Value::String(a), Value::String(b)) => a == b,
            _ => false,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Boolean(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loose_eq() {
        assert!(Value::from(3).loose_eq(&Value::from(3.0)));
        assert!(!Value::from("3").loose_eq(&Value::from(3)));
        assert!(!Value::from("us").loose_eq(&Value::from("US")));
        assert!(!Value::from(true).loose_eq(&Value::from("true")));
    }

    #[test]
    fn test_deserialize_record() {
        let json = r#"{"age": 25, "name": "John", "verified": true, "nick": null}"#;
        let record: Record = serde_json::from_str(json).unwrap();
        assert_eq!(record["age"], Value::Number(25.0));
        assert_eq!(record["name"], Value::String("John".to_string()));
        assert_eq!(record["verified"], Value::Boolean(true));
        assert!(record["nick"].is_absent());
    }

    #[test]
    fn test_nested_values_rejected() {
        let result: Result<Record, _> = serde_json::from_str(r#"{"tags": ["a", "b"]}"#);
        assert!(result.is_err());
    }
}
