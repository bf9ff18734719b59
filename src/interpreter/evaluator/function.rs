/// Built-in collection and string functions: `len`, `push`, `first`, `last`
/// and `rest`.
pub mod builtin;

/// The `puts` function implementation.
///
/// Writes values to standard output.
pub mod print;

/// Function application and the built-in table.
pub mod core;
