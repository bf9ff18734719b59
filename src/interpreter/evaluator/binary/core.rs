use crate::{
    ast::InfixOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::core::Value,
    },
};

impl Evaluator {
    /// Evaluates a binary operation between two values.
    ///
    /// Two integers go to integer arithmetic, two strings support `+`
    /// (concatenation) and equality. Any other pair of operands of the same
    /// type supports only `==` and `!=`. Operands of different types are a
    /// `type mismatch`, even for `==`.
    ///
    /// # Parameters
    /// - `operator`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the evaluated result.
    ///
    /// # Example
    /// ```
    /// use yoru::{
    ///     ast::InfixOperator,
    ///     interpreter::{evaluator::core::Evaluator, value::core::Value},
    /// };
    ///
    /// let sum = Evaluator::eval_infix(InfixOperator::Add, &Value::from(3), &Value::from(4));
    /// assert_eq!(sum.unwrap(), Value::Integer(7));
    ///
    /// let joined = Evaluator::eval_infix(InfixOperator::Add, &Value::from("ab"), &Value::from("c"));
    /// assert_eq!(joined.unwrap(), Value::from("abc"));
    ///
    /// let err = Evaluator::eval_infix(InfixOperator::Add, &Value::from(5), &Value::from(true));
    /// assert_eq!(err.unwrap_err().to_string(), "type mismatch: INTEGER + BOOLEAN");
    /// ```
    pub fn eval_infix(operator: InfixOperator, left: &Value, right: &Value) -> EvalResult<Value> {
        match (left, right) {
            (Value::Integer(a), Value::Integer(b)) => Self::eval_integer_infix(operator, *a, *b),
            (Value::String(a), Value::String(b)) => Self::eval_string_infix(operator, a, b),
            _ if left.type_name() != right.type_name() => {
                Err(RuntimeError::TypeMismatch { left: left.type_name(),
                                                 operator,
                                                 right: right.type_name() })
            },
            _ => Self::eval_equality(operator, left, right),
        }
    }

    fn eval_string_infix(operator: InfixOperator, left: &str, right: &str) -> EvalResult<Value> {
        match operator {
            InfixOperator::Add => Ok(Value::String(format!("{left}{right}"))),
            InfixOperator::Equal => Ok(Value::Boolean(left == right)),
            InfixOperator::NotEqual => Ok(Value::Boolean(left != right)),
            _ => Err(RuntimeError::UnknownInfixOperator { left: "STRING",
                                                          operator,
                                                          right: "STRING" }),
        }
    }
}
