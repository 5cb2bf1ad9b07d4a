/// Binding strength of infix operators.
///
/// The parser keeps folding operators into the current subtree while the next
/// operator binds tighter than the threshold it was called with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    /// Tokens without an infix role, and the threshold of a whole expression
    Lowest,
    /// `AND`, `OR`
    Logical,
    /// `=`, `!=`, `>`, `<`, `>=`, `<=`
    Compare,
}
