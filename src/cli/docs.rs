//! Documentation content for sift CLI

use super::CliError;

/// Available documentation categories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocCategory {
    Syntax,
    Operators,
    Types,
}

impl DocCategory {
    /// Parse category name from string
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "syntax" => Some(Self::Syntax),
            "operators" | "ops" => Some(Self::Operators),
            "types" | "type" => Some(Self::Types),
            _ => None,
        }
    }
}

/// Get the docs overview (category listing)
pub fn get_docs_overview() -> &'static str {
    r#"SIFT DOCUMENTATION

Sift is a boolean filter language for flat JSON records. An expression is one
or more clauses of the form `field OP literal`, joined with AND / OR.

DOCUMENTATION CATEGORIES

  syntax            Fields, literals, grouping and whitespace
  operators         Comparison and logical operators, precedence
  types             Values in records and how comparisons treat them

QUICK REFERENCE

  age >= 18                       Numeric comparison
  country = 'US'                  String equality (single quotes)
  a = 'x' AND b != 'y'            Both clauses must hold
  (a > 1 OR b < 2) AND c = 'z'    Parentheses group

Run 'sift doc <category>' for detailed documentation.
"#
}

/// Get documentation for a specific category
pub fn get_doc_category(name: &str) -> Result<&'static str, CliError> {
    match DocCategory::from_name(name) {
        Some(DocCategory::Syntax) => Ok(SYNTAX_DOC),
        Some(DocCategory::Operators) => Ok(OPERATORS_DOC),
        Some(DocCategory::Types) => Ok(TYPES_DOC),
        None => Err(CliError::UnknownCategory(name.to_string())),
    }
}

const SYNTAX_DOC: &str = r#"SYNTAX - Clauses, Fields and Literals

CLAUSES
  field OP literal
    The field is always on the left, the literal always on the right.

    Example:
      Input:  {"age": 25}
      Expr:   age > 18
      Output: {"overallResult": true, "clauses": [{"clauseText": "age > 18", "result": true}]}

FIELDS
  An ASCII letter followed by letters, digits or underscores.

    Constraints:
      - Field names are case-sensitive
      - No nested paths: `user.name` is not a field

NUMBERS
  Digits with an optional fractional part: 18, 99.99

    Constraints:
      - No sign: -5 is not a number literal
      - `1.` is the number 1 followed by a stray dot

STRINGS
  Single-quoted, taken verbatim: 'US', 'New York'

    Constraints:
      - No escape sequences
      - Double quotes are not string delimiters

GROUPING
  ( expression )
    Parentheses change how clauses combine. They do not appear in the
    clause trace.

WHITESPACE
  Spaces, tabs and newlines between tokens are ignored.
"#;

const OPERATORS_DOC: &str = r#"OPERATORS - Comparison and Logic

COMPARISON
  =     equal
  !=    not equal
  >     greater than        (numbers only)
  <     less than           (numbers only)
  >=    greater or equal    (numbers only, or equal values)
  <=    less or equal       (numbers only, or equal values)

LOGICAL
  AND   both sides hold
  OR    either side holds

  Keywords are upper-case. `and` and `or` are field names.

PRECEDENCE
  Comparisons bind tighter than AND / OR. AND and OR share one level and
  group left to right:

    a = 1 OR b = 2 AND c = 3    is    (a = 1 OR b = 2) AND c = 3

EVALUATION ORDER
  Both sides of AND / OR are always evaluated so every clause appears in the
  trace, in the order it is written.
"#;

const TYPES_DOC: &str = r#"TYPES - Record Values and Comparison Rules

RECORD VALUES
  A record is a JSON object of scalar fields: numbers, strings, booleans or
  null. Arrays and nested objects are rejected.

MISSING FIELDS
  A clause on a missing field, or a field set to null, is false. It never
  raises an error.

    Example:
      Input:  {"name": "John"}
      Expr:   age > 18
      Output: {"overallResult": false, "clauses": [{"clauseText": "age > 18", "result": false}]}

EQUALITY
  Numbers compare numerically: 3 = 3.0.
  Strings compare exactly and case-sensitively.
  Different types are never equal: a field holding "3" does not equal 3.

ORDERING
  >, <, >= and <= require a number on both sides. Comparing a present
  non-numeric field this way is an error, not a false clause.
"#;
