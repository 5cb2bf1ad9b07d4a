//! # Sift Filter Language - Abstract Syntax Tree
//!
//! This module defines the vocabulary shared by the lexer, the parser and the
//! evaluator of the Sift filter language, a small boolean expression language
//! for testing flat field/value records.
//!
//! ## Architecture Overview
//!
//! - **[tokens]** - Lexical tokens produced by the lexer
//! - **[operators]** - Binding strength of the infix operators
//! - **[expressions]** - Expression nodes built by the parser
//!
//! ## Quick Start
//!
//! ```text
//! age >= 18 AND country = 'US'
//! ```
//!
//! This expression holds for records whose `age` is at least 18 and whose
//! `country` is exactly `US`.
//!
//! ## Core Concepts
//!
//! ### Clauses
//!
//! A clause is a single comparison `field OP literal`. The field is always on
//! the left and the literal (a number or a single-quoted string) on the right.
//!
//! ```text
//! price < 99.99
//! status != 'closed'
//! ```
//!
//! ### Combining Clauses
//!
//! Clauses are combined with the upper-case keywords `AND` and `OR`. Both share
//! one precedence level and group left to right; parentheses override the
//! grouping and leave no trace in the tree.
//!
//! ```text
//! (age > 18 OR age < 5) AND country = 'US'
//! ```
//!
//! ### Type System
//!
//! Records hold numbers, strings, booleans or null. Equality compares numbers
//! numerically and strings exactly; ordering operators only accept numbers.
pub mod expressions;
pub mod operators;
pub mod tokens;

pub use expressions::Expr;
pub use operators::Precedence;
pub use tokens::{Token, TokenKind};
