use std::rc::Rc;

use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
    util::num::usize_to_i64_checked,
};

/// Returns the length of a string in bytes or of an array in elements.
///
/// Accepts exactly one argument.
///
/// # Parameters
/// - `args`: Slice containing one argument.
///
/// # Returns
/// `Value::Integer` holding the length.
///
/// # Example
/// ```
/// use yoru::interpreter::{evaluator::function::builtin::len, value::core::Value};
///
/// assert_eq!(len(&[Value::from("hello")]).unwrap(), Value::from(5));
/// assert_eq!(len(&[Value::from(vec![Value::Null])]).unwrap(), Value::from(1));
/// ```
pub fn len(args: &[Value]) -> EvalResult<Value> {
    match &args[0] {
        Value::String(s) => Ok(Value::Integer(usize_to_i64_checked(s.len())?)),
        Value::Array(elements) => Ok(Value::Integer(usize_to_i64_checked(elements.len())?)),
        other => Err(RuntimeError::UnsupportedArgument { function:  "len",
                                                         type_name: other.type_name(), }),
    }
}

/// Returns a new array with the remaining arguments appended.
///
/// The original array is left untouched.
///
/// # Example
/// ```
/// use yoru::interpreter::{evaluator::function::builtin::push, value::core::Value};
///
/// let xs = Value::from(vec![Value::from(1)]);
/// let ys = push(&[xs.clone(), Value::from(2), Value::from(3)]).unwrap();
///
/// assert_eq!(ys.to_string(), "[1, 2, 3]");
/// assert_eq!(xs.to_string(), "[1]");
/// ```
pub fn push(args: &[Value]) -> EvalResult<Value> {
    let elements = expect_array("push", &args[0])?;

    let mut pushed = Vec::with_capacity(elements.len() + args.len() - 1);
    pushed.extend_from_slice(elements);
    pushed.extend_from_slice(&args[1..]);

    Ok(Value::from(pushed))
}

/// Returns the first element of an array, or `null` if it is empty.
pub fn first(args: &[Value]) -> EvalResult<Value> {
    let elements = expect_array("first", &args[0])?;
    Ok(elements.first().cloned().unwrap_or(Value::Null))
}

/// Returns the last element of an array, or `null` if it is empty.
pub fn last(args: &[Value]) -> EvalResult<Value> {
    let elements = expect_array("last", &args[0])?;
    Ok(elements.last().cloned().unwrap_or(Value::Null))
}

/// Returns a new array holding everything but the first element.
///
/// An empty array has no rest, and yields `null`.
///
/// # Example
/// ```
/// use yoru::interpreter::{evaluator::function::builtin::rest, value::core::Value};
///
/// let xs = Value::from(vec![Value::from(1), Value::from(2)]);
///
/// assert_eq!(rest(&[xs]).unwrap().to_string(), "[2]");
/// assert_eq!(rest(&[Value::from(Vec::new())]).unwrap(), Value::Null);
/// ```
pub fn rest(args: &[Value]) -> EvalResult<Value> {
    let elements = expect_array("rest", &args[0])?;
    match elements.split_first() {
        Some((_, tail)) => Ok(Value::from(tail.to_vec())),
        None => Ok(Value::Null),
    }
}

fn expect_array<'a>(function: &'static str, value: &'a Value) -> EvalResult<&'a Rc<Vec<Value>>> {
    match value {
        Value::Array(elements) => Ok(elements),
        other => Err(RuntimeError::ExpectedArrayArgument { function,
                                                           type_name: other.type_name() }),
    }
}
