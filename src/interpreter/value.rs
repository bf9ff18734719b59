/// Hash key support.
///
/// Defines the `HashKey` type used to key `Value::Hash`. Only integers,
/// booleans and strings can be turned into a key; every other kind of value is
/// rejected with an `unusable as hash key` error.
pub mod hash_key;

/// The runtime value type.
///
/// Declares the `Value` enum, user-defined function values and the rules for
/// truthiness, type names and the printed (inspect) form of every value.
pub mod core;
