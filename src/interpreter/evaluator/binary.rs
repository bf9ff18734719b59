/// Operator dispatch on the types of both operands.
pub mod core;

/// Checked arithmetic and ordering on two integers.
pub mod integer;

/// Equality between two values of the same type.
pub mod comparison;
