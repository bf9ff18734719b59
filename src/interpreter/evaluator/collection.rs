use std::{collections::HashMap, ops::ControlFlow, rc::Rc};

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::core::{EvalResult, Evaluator},
        value::{core::Value, hash_key::HashKey},
    },
    util::num::i64_to_index,
};

impl Evaluator {
    pub(crate) fn eval_array_literal(&mut self,
                                     elements: &[Expr],
                                     env: &Environment)
                                     -> EvalResult<Value> {
        match self.eval_expressions(elements, env)? {
            ControlFlow::Continue(elements) => Ok(Value::from(elements)),
            ControlFlow::Break(returning) => Ok(returning),
        }
    }

    /// Evaluates a hash literal pair by pair, in source order.
    ///
    /// Each key is checked for hashability before its value is evaluated. A
    /// key appearing twice keeps the later value.
    pub(crate) fn eval_hash_literal(&mut self,
                                    pairs: &[(Expr, Expr)],
                                    env: &Environment)
                                    -> EvalResult<Value> {
        let mut map = HashMap::with_capacity(pairs.len());

        for (key_expr, value_expr) in pairs {
            let key = HashKey::try_from(&propagate_return!(self.eval_expression(key_expr, env)?))?;
            let value = propagate_return!(self.eval_expression(value_expr, env)?);
            map.insert(key, value);
        }

        Ok(Value::Hash(Rc::new(map)))
    }

    /// Evaluates `collection[index]`.
    ///
    /// - Arrays take an integer index. An index outside `0..len` yields
    ///   `null`.
    /// - Hashes take any hashable key. A missing key yields `null`.
    ///
    /// # Errors
    /// - `IndexNotSupported` for any other collection, or a non-integer array
    ///   index.
    /// - `UnusableAsHashKey` for an unhashable hash key.
    ///
    /// # Example
    /// ```
    /// use yoru::interpreter::{evaluator::core::Evaluator, value::core::Value};
    ///
    /// let xs = Value::from(vec![Value::from(1), Value::from(2)]);
    ///
    /// assert_eq!(Evaluator::eval_index(&xs, &Value::from(1)).unwrap(), Value::from(2));
    /// assert_eq!(Evaluator::eval_index(&xs, &Value::from(2)).unwrap(), Value::Null);
    /// assert_eq!(Evaluator::eval_index(&xs, &Value::from(-1)).unwrap(), Value::Null);
    /// ```
    pub fn eval_index(collection: &Value, index: &Value) -> EvalResult<Value> {
        match (collection, index) {
            (Value::Array(elements), Value::Integer(i)) => {
                Ok(i64_to_index(*i).and_then(|i| elements.get(i))
                                   .cloned()
                                   .unwrap_or(Value::Null))
            },
            (Value::Hash(pairs), key) => {
                let key = HashKey::try_from(key)?;
                Ok(pairs.get(&key).cloned().unwrap_or(Value::Null))
            },
            (other, _) => Err(RuntimeError::IndexNotSupported { type_name: other.type_name() }),
        }
    }
}
