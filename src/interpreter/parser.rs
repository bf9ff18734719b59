/// Parser state, binding powers and the Pratt expression loop.
///
/// Holds the current and lookahead tokens, the accumulated diagnostics and
/// the `parse_expression` driver every other parsing routine builds on.
pub mod core;

/// Prefix parse functions.
///
/// Everything that can start an expression: literals, identifiers, prefix
/// operators, grouping, `if` and function literals.
pub mod prefix;

/// Infix parse functions.
///
/// Binary operators plus the postfix-looking call `f(x)` and index `a[i]`
/// forms, which continue an expression that has already been parsed.
pub mod infix;

/// Statement parsing.
///
/// Implements `let`, `return` and expression statements, and brace-delimited
/// blocks.
pub mod statement;

/// Utility functions for the parser.
///
/// Comma-separated lists shared by array literals, call arguments and
/// function parameters.
pub mod utils;
