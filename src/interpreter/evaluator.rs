/// Unwraps an evaluated operand, or leaves the enclosing evaluation with it
/// when it is a `Value::ReturnValue` on its way to the nearest function call.
///
/// Must be used inside a function returning `EvalResult<Value>`.
macro_rules! propagate_return {
    ($value:expr) => {
        match $value {
            returning @ $crate::interpreter::value::core::Value::ReturnValue(_) => {
                return Ok(returning);
            },
            value => value,
        }
    };
}

/// Binary operator evaluation logic.
///
/// Handles integer arithmetic and comparison, string concatenation and
/// equality between values of the same type.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements logical NOT and arithmetic negation.
pub mod unary;

/// Core evaluation logic.
///
/// Contains the `Evaluator`, statement and block execution, control flow and
/// the recursion ceiling.
pub mod core;

/// Array and hash literals and the index operator.
pub mod collection;

/// Function evaluation.
///
/// Handles closures, user-defined and built-in function calls, and argument
/// count checking.
pub mod function;
