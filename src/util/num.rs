use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Converts a collection length to the language's integer type.
///
/// ## Errors
/// Returns `RuntimeError::IntegerOverflow` if the length does not fit in an
/// `i64`, which can only happen on platforms with pointers wider than 64 bits.
///
/// ## Parameters
/// - `value`: The length to convert.
///
/// ## Returns
/// - `Ok(i64)`: The converted length.
/// - `Err(RuntimeError::IntegerOverflow)`: If the value is too large.
///
/// ## Example
/// ```
/// use yoru::util::num::usize_to_i64_checked;
///
/// assert_eq!(usize_to_i64_checked(42).unwrap(), 42);
/// ```
pub fn usize_to_i64_checked(value: usize) -> EvalResult<i64> {
    i64::try_from(value).map_err(|_| RuntimeError::IntegerOverflow { operation: format!("len {value}") })
}

/// Converts a language integer into a collection index.
///
/// Negative values and values beyond `usize::MAX` have no index and yield
/// `None`, which callers treat as "out of range".
///
/// # Example
/// ```
/// use yoru::util::num::i64_to_index;
///
/// assert_eq!(i64_to_index(2), Some(2));
/// assert_eq!(i64_to_index(-1), None);
/// ```
#[must_use]
pub fn i64_to_index(value: i64) -> Option<usize> {
    usize::try_from(value).ok()
}
