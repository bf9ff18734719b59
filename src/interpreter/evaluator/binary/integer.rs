use crate::{
    ast::InfixOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::core::Value,
    },
};

impl Evaluator {
    /// Evaluates a binary operation on two integers.
    ///
    /// Arithmetic is checked: a zero divisor for `/` or `%` is a `division by
    /// zero` error, and a result outside the `i64` range is an `integer
    /// overflow` error. Division truncates toward zero and the remainder
    /// takes the sign of the dividend.
    ///
    /// # Example
    /// ```
    /// use yoru::{
    ///     ast::InfixOperator,
    ///     interpreter::{evaluator::core::Evaluator, value::core::Value},
    /// };
    ///
    /// let v = Evaluator::eval_integer_infix(InfixOperator::Div, -7, 2).unwrap();
    /// assert_eq!(v, Value::Integer(-3));
    ///
    /// let err = Evaluator::eval_integer_infix(InfixOperator::Mod, 1, 0).unwrap_err();
    /// assert_eq!(err.to_string(), "division by zero");
    /// ```
    pub fn eval_integer_infix(operator: InfixOperator, left: i64, right: i64) -> EvalResult<Value> {
        use InfixOperator::{Add, Div, Equal, Greater, Less, Mod, Mul, NotEqual, Sub};

        let checked = match operator {
            Add => left.checked_add(right),
            Sub => left.checked_sub(right),
            Mul => left.checked_mul(right),
            Div | Mod if right == 0 => return Err(RuntimeError::DivisionByZero),
            Div => left.checked_div(right),
            Mod => left.checked_rem(right),
            Less => return Ok(Value::Boolean(left < right)),
            Greater => return Ok(Value::Boolean(left > right)),
            Equal => return Ok(Value::Boolean(left == right)),
            NotEqual => return Ok(Value::Boolean(left != right)),
        };

        checked.map(Value::Integer)
               .ok_or_else(|| RuntimeError::IntegerOverflow { operation: format!("{left} {operator} {right}") })
    }
}
