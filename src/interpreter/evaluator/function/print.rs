use crate::interpreter::{evaluator::core::EvalResult, value::core::Value};

/// Prints each argument on its own line and returns `null`.
///
/// Accepts any number of arguments. Values are printed in their inspect
/// form, so strings appear without quotes.
///
/// # Example
/// ```
/// use yoru::interpreter::{evaluator::function::print::puts, value::core::Value};
///
/// // The function prints to stdout, but the doctest
/// // only checks the returned result.
/// let result = puts(&[Value::from("hello"), Value::from(42)]).unwrap();
///
/// assert_eq!(result, Value::Null);
/// ```
pub fn puts(args: &[Value]) -> EvalResult<Value> {
    for arg in args {
        println!("{arg}");
    }
    Ok(Value::Null)
}
