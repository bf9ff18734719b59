use crate::{
    ast::InfixOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::core::Value,
    },
};

impl Evaluator {
    /// Compares two values of the same type with `==` or `!=`.
    ///
    /// Values compare structurally, except functions, which are only equal to
    /// themselves. Every other operator is an `unknown operator` error naming
    /// both operand types.
    pub(crate) fn eval_equality(operator: InfixOperator,
                                left: &Value,
                                right: &Value)
                                -> EvalResult<Value> {
        match operator {
            InfixOperator::Equal => Ok(Value::Boolean(left == right)),
            InfixOperator::NotEqual => Ok(Value::Boolean(left != right)),
            _ => Err(RuntimeError::UnknownInfixOperator { left: left.type_name(),
                                                          operator,
                                                          right: right.type_name() }),
        }
    }
}
