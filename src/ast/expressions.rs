use std::{fmt, mem};

use crate::ast::{Precedence, Token};

/// Abstract Syntax Tree node representing a parsed filter expression.
///
/// Trees are produced by the parser and never mutated afterwards, so a single
/// tree can be evaluated any number of times, from any number of threads.
///
/// Chains such as `a = 1 AND b = 2 AND ...` nest down the left side, one level
/// per operator. Rendering, counting and dropping walk that side with an
/// explicit stack, so chain length is bounded by memory rather than by the
/// thread's stack.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Comparison of a field against a literal
    ///
    /// The parser accepts any operand here; the evaluator rejects a left side
    /// that is not an identifier or a right side that is not a literal.
    ///
    /// # Example
    /// ```text
    /// age >= 18
    /// ```
    Comparison {
        left: Box<Expr>,
        operator: Token,
        right: Box<Expr>,
    },

    /// `AND` / `OR` of two sub-expressions
    ///
    /// # Example
    /// ```text
    /// age >= 18 AND country = 'US'
    /// ```
    Logical {
        left: Box<Expr>,
        operator: Token,
        right: Box<Expr>,
    },

    /// Field name
    Identifier(String),

    /// Number literal
    ///
    /// `raw` keeps the source text so clauses render the way they were written.
    ///
    /// # Example
    /// ```text
    /// 99.99
    /// ```
    Number { value: f64, raw: String },

    /// String literal, quotes stripped
    String(String),
}

impl Expr {
    pub fn comparison(left: Expr, operator: Token, right: Expr) -> Self {
        Expr::Comparison {
            left: Box::new(left),
            operator,
            right: Box::new(right),
        }
    }

    pub fn logical(left: Expr, operator: Token, right: Expr) -> Self {
        Expr::Logical {
            left: Box::new(left),
            operator,
            right: Box::new(right),
        }
    }

    pub fn identifier(name: impl Into<String>) -> Self {
        Expr::Identifier(name.into())
    }

    /// Builds a number literal whose raw text is the shortest rendering of `value`.
    ///
    /// The grammar only has non-negative decimal literals. A negative or
    /// non-finite `value` renders as `-1`, `inf` or `NaN`, which does not parse
    /// back.
    pub fn number(value: f64) -> Self {
        Expr::Number {
            value,
            raw: value.to_string(),
        }
    }

    /// Builds a string literal.
    ///
    /// String literals have no escapes, so a value containing `'` renders as
    /// text that ends the literal early when parsed back.
    pub fn string(value: impl Into<String>) -> Self {
        Expr::String(value.into())
    }

    /// Operands and operator of a binary node.
    fn operands(&self) -> Option<(&Expr, &Token, &Expr)> {
        match self {
            Expr::Comparison {
                left,
                operator,
                right,
            }
            | Expr::Logical {
                left,
                operator,
                right,
            } => Some((&**left, operator, &**right)),
            Expr::Identifier(_) | Expr::Number { .. } | Expr::String(_) => None,
        }
    }

    /// Binding strength of the node's operator; literals and names bind tightest.
    fn binding(&self) -> Option<Precedence> {
        match self {
            Expr::Comparison { .. } => Some(Precedence::Compare),
            Expr::Logical { .. } => Some(Precedence::Logical),
            Expr::Identifier(_) | Expr::Number { .. } | Expr::String(_) => None,
        }
    }

    /// Number of comparison nodes in the tree.
    pub fn clause_count(&self) -> usize {
        let mut count = 0;
        let mut pending = vec![self];
        while let Some(node) = pending.pop() {
            match node {
                Expr::Comparison { .. } => count += 1,
                Expr::Logical { left, right, .. } => {
                    pending.push(left);
                    pending.push(right);
                }
                Expr::Identifier(_) | Expr::Number { .. } | Expr::String(_) => {}
            }
        }
        count
    }

    /// Moves binary children out into `pending`, leaving empty names behind.
    fn detach_children(&mut self, pending: &mut Vec<Expr>) {
        if let Expr::Comparison { left, right, .. } | Expr::Logical { left, right, .. } = self {
            for child in [left, right] {
                if child.binding().is_some() {
                    pending.push(mem::replace(child.as_mut(), Expr::Identifier(String::new())));
                }
            }
        }
    }
}

impl Drop for Expr {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.detach_children(&mut pending);
        while let Some(mut node) = pending.pop() {
            node.detach_children(&mut pending);
        }
    }
}

/// Operators group left, so a left operand of equal binding only needs
/// parentheses when its operator differs from the parent's.
fn grouped(child: &Expr, parent: &Token, right: bool) -> bool {
    match child.operands() {
        Some((_, operator, _)) => {
            let binding = child.binding();
            let parent_binding = Some(parent.kind.precedence());
            binding < parent_binding
                || (binding == parent_binding && (right || operator.kind != parent.kind))
        }
        None => false,
    }
}

fn write_operand(
    f: &mut fmt::Formatter<'_>,
    child: &Expr,
    parent: &Token,
    right: bool,
) -> fmt::Result {
    if grouped(child, parent, right) {
        write!(f, "({child})")
    } else {
        write!(f, "{child}")
    }
}

/// Renders the expression back into source form.
///
/// Nested groups that would otherwise re-parse differently are parenthesized,
/// so for any tree the parser produced, `parse(expr.to_string())` yields a
/// tree of the same shape.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Ungrouped left operands are collected first and written innermost out
        let mut tail = Vec::new();
        let mut head = self;
        while let Some((left, operator, right)) = head.operands() {
            if grouped(left, operator, false) {
                break;
            }
            tail.push((operator, right));
            head = left;
        }

        match head {
            Expr::Comparison {
                left,
                operator,
                right,
            }
            | Expr::Logical {
                left,
                operator,
                right,
            } => {
                write!(f, "({left}) {} ", operator.text)?;
                write_operand(f, right, operator, true)?;
            }
            Expr::Identifier(name) => f.write_str(name)?,
            Expr::Number { raw, .. } => f.write_str(raw)?,
            Expr::String(s) => write!(f, "'{s}'")?,
        }

        for (operator, right) in tail.into_iter().rev() {
            write!(f, " {} ", operator.text)?;
            write_operand(f, right, operator, true)?;
        }
        Ok(())
    }
}
