/// Numeric conversion helpers.
///
/// Conversions between the language's `i64` integers and the `usize` lengths
/// and indices of Rust collections. Every function returns an `Option` or
/// `Result`, never a silently truncated value.
pub mod num;
