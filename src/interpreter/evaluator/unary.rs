use crate::{
    ast::PrefixOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::core::Value,
    },
};

impl Evaluator {
    /// Evaluates a prefix operation on an already evaluated operand.
    ///
    /// Supported operators:
    /// - `Not`: negates the operand's truthiness, so `!0` is `false` and
    ///   `!null` is `true`.
    /// - `Negate`: integer negation. Any other operand is an `unknown
    ///   operator` error.
    ///
    /// # Parameters
    /// - `operator`: Prefix operator.
    /// - `operand`: Input value.
    ///
    /// # Returns
    /// The computed `Value` wrapped in `EvalResult`.
    ///
    /// # Example
    /// ```
    /// use yoru::{
    ///     ast::PrefixOperator,
    ///     interpreter::{evaluator::core::Evaluator, value::core::Value},
    /// };
    ///
    /// let v = Evaluator::eval_prefix(PrefixOperator::Negate, &Value::Integer(5)).unwrap();
    /// assert_eq!(v, Value::Integer(-5));
    ///
    /// let v = Evaluator::eval_prefix(PrefixOperator::Not, &Value::Null).unwrap();
    /// assert_eq!(v, Value::Boolean(true));
    ///
    /// let err = Evaluator::eval_prefix(PrefixOperator::Negate, &Value::Boolean(true)).unwrap_err();
    /// assert_eq!(err.to_string(), "unknown operator: -BOOLEAN");
    /// ```
    pub fn eval_prefix(operator: PrefixOperator, operand: &Value) -> EvalResult<Value> {
        match (operator, operand) {
            (PrefixOperator::Not, value) => Ok(Value::Boolean(!value.is_truthy())),
            (PrefixOperator::Negate, Value::Integer(n)) => {
                n.checked_neg()
                 .map(Value::Integer)
                 .ok_or_else(|| RuntimeError::IntegerOverflow { operation: format!("-({n})") })
            },
            (PrefixOperator::Negate, value) => {
                Err(RuntimeError::UnknownPrefixOperator { operator,
                                                          operand: value.type_name() })
            },
        }
    }
}
