use std::{ops::ControlFlow, rc::Rc};

use log::debug;

use crate::{
    ast::{Block, Expr, Program, Statement},
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::function::core::lookup_builtin,
        value::core::{Function, Value},
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure. `?` carries an error out through
/// every enclosing expression, block and call.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Default ceiling on nested expression evaluations.
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Remaining native stack below which evaluation moves to a fresh segment.
const STACK_RED_ZONE: usize = 128 * 1024;
/// Size of each stack segment allocated for deep evaluation.
const STACK_GROW_SIZE: usize = 4 * 1024 * 1024;

/// Walks the syntax tree and computes values.
///
/// The evaluator itself only tracks how deeply evaluation is nested; all
/// bindings live in the [`Environment`] passed in. Running out of depth is
/// reported as a `stack overflow` error instead of crashing the process, and
/// the native stack is grown on demand so any ceiling can actually be
/// reached.
///
/// # Example
/// ```
/// use yoru::interpreter::{
///     environment::Environment, evaluator::core::Evaluator, value::core::Value,
/// };
///
/// let (program, _) = yoru::parse("let add = fn(a, b) { a + b }; add(2, 3)");
/// let value = Evaluator::new().eval_program(&program, &Environment::new());
///
/// assert_eq!(value, Value::Integer(5));
/// ```
#[derive(Debug)]
pub struct Evaluator {
    depth:     usize,
    max_depth: usize,
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl Evaluator {
    /// Creates an evaluator with the default recursion ceiling.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_max_depth(DEFAULT_MAX_DEPTH)
    }

    /// Creates an evaluator that fails once expressions nest deeper than
    /// `max_depth`.
    #[must_use]
    pub const fn with_max_depth(max_depth: usize) -> Self {
        Self { depth: 0,
               max_depth }
    }

    /// Runs a whole program in `env`.
    ///
    /// Statements run in order until one fails or executes a `return`. The
    /// result is the value of the last statement, `null` if that was a `let`
    /// or the program was empty, and `Value::Error` if evaluation failed.
    pub fn eval_program(&mut self, program: &Program, env: &Environment) -> Value {
        debug!("evaluating {} statement(s)", program.statements.len());

        self.depth = 0;
        match self.eval_statements(&program.statements, env) {
            Ok(Some(Value::ReturnValue(value))) => *value,
            Ok(Some(value)) => value,
            Ok(None) => Value::Null,
            Err(error) => {
                debug!("evaluation failed: {error}");
                Value::from(error)
            },
        }
    }

    /// Executes a single statement.
    ///
    /// # Returns
    /// `None` for `let`, which produces no value, otherwise the statement's
    /// value. A `return` yields `Value::ReturnValue`.
    pub fn eval_statement(&mut self,
                          statement: &Statement,
                          env: &Environment)
                          -> EvalResult<Option<Value>> {
        match statement {
            Statement::Let { name, value } => match self.eval_expression(value, env)? {
                returning @ Value::ReturnValue(_) => Ok(Some(returning)),
                value => {
                    env.define(name.as_str(), value);
                    Ok(None)
                },
            },
            Statement::Return { value } => match self.eval_expression(value, env)? {
                returning @ Value::ReturnValue(_) => Ok(Some(returning)),
                value => Ok(Some(Value::ReturnValue(Box::new(value)))),
            },
            Statement::Expression { value } => self.eval_expression(value, env).map(Some),
            Statement::Block(block) => self.eval_block(block, env),
        }
    }

    /// Executes the statements of a block in `env`.
    ///
    /// A block does not open a scope of its own. Execution stops at the first
    /// statement producing a `Value::ReturnValue`, which is passed on still
    /// wrapped so enclosing blocks stop too.
    pub fn eval_block(&mut self, block: &Block, env: &Environment) -> EvalResult<Option<Value>> {
        self.eval_statements(&block.statements, env)
    }

    fn eval_statements(&mut self,
                       statements: &[Statement],
                       env: &Environment)
                       -> EvalResult<Option<Value>> {
        let mut result = None;

        for statement in statements {
            result = self.eval_statement(statement, env)?;
            if matches!(result, Some(Value::ReturnValue(_))) {
                break;
            }
        }

        Ok(result)
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation and the place
    /// the recursion ceiling is enforced.
    ///
    /// A `return` executed inside the expression, e.g. in a branch of an
    /// `if`, comes back as `Value::ReturnValue`; callers composing values
    /// must hand it on unchanged.
    pub fn eval_expression(&mut self, expr: &Expr, env: &Environment) -> EvalResult<Value> {
        if self.depth >= self.max_depth {
            return Err(RuntimeError::StackOverflow { limit: self.max_depth });
        }

        self.depth += 1;
        let result = stacker::maybe_grow(STACK_RED_ZONE, STACK_GROW_SIZE, || {
            self.eval_expression_inner(expr, env)
        });
        self.depth -= 1;

        result
    }

    fn eval_expression_inner(&mut self, expr: &Expr, env: &Environment) -> EvalResult<Value> {
        match expr {
            Expr::Identifier(name) => Self::eval_identifier(name, env),
            Expr::IntegerLiteral(value) => Ok(Value::Integer(*value)),
            Expr::BooleanLiteral(value) => Ok(Value::Boolean(*value)),
            Expr::StringLiteral(value) => Ok(Value::String(value.clone())),
            Expr::ArrayLiteral(elements) => self.eval_array_literal(elements, env),
            Expr::HashLiteral(pairs) => self.eval_hash_literal(pairs, env),
            Expr::Prefix { operator, operand } => {
                let operand = propagate_return!(self.eval_expression(operand, env)?);
                Self::eval_prefix(*operator, &operand)
            },
            Expr::Infix { operator,
                          left,
                          right, } => {
                let left = propagate_return!(self.eval_expression(left, env)?);
                let right = propagate_return!(self.eval_expression(right, env)?);
                Self::eval_infix(*operator, &left, &right)
            },
            Expr::If { condition,
                       consequence,
                       alternative, } => {
                self.eval_if_expression(condition, consequence, alternative.as_ref(), env)
            },
            Expr::FunctionLiteral { parameters, body } => {
                Ok(Value::Function(Rc::new(Function { parameters: Rc::clone(parameters),
                                                      body:       Rc::clone(body),
                                                      env:        env.clone(), })))
            },
            Expr::Call { callee, arguments } => {
                let callee = propagate_return!(self.eval_expression(callee, env)?);
                match self.eval_expressions(arguments, env)? {
                    ControlFlow::Continue(arguments) => self.apply_function(&callee, arguments),
                    ControlFlow::Break(returning) => Ok(returning),
                }
            },
            Expr::Index { collection, index } => {
                let collection = propagate_return!(self.eval_expression(collection, env)?);
                let index = propagate_return!(self.eval_expression(index, env)?);
                Self::eval_index(&collection, &index)
            },
        }
    }

    /// Evaluates expressions left to right, stopping at the first error.
    ///
    /// # Returns
    /// `ControlFlow::Break` with the `Value::ReturnValue` if one of the
    /// expressions executed a `return`, otherwise every value in order.
    pub(crate) fn eval_expressions(&mut self,
                                   exprs: &[Expr],
                                   env: &Environment)
                                   -> EvalResult<ControlFlow<Value, Vec<Value>>> {
        let mut values = Vec::with_capacity(exprs.len());

        for expr in exprs {
            match self.eval_expression(expr, env)? {
                returning @ Value::ReturnValue(_) => return Ok(ControlFlow::Break(returning)),
                value => values.push(value),
            }
        }

        Ok(ControlFlow::Continue(values))
    }

    /// Resolves a name through the environment chain, then the built-ins.
    ///
    /// User bindings shadow built-ins of the same name.
    fn eval_identifier(name: &str, env: &Environment) -> EvalResult<Value> {
        if let Some(value) = env.get(name) {
            return Ok(value);
        }

        lookup_builtin(name).map(Value::Builtin)
                            .ok_or_else(|| RuntimeError::IdentifierNotFound { name: name.to_string() })
    }

    fn eval_if_expression(&mut self,
                          condition: &Expr,
                          consequence: &Block,
                          alternative: Option<&Block>,
                          env: &Environment)
                          -> EvalResult<Value> {
        let condition = propagate_return!(self.eval_expression(condition, env)?);
        let branch = if condition.is_truthy() {
            Some(consequence)
        } else {
            alternative
        };

        match branch {
            Some(block) => Ok(self.eval_block(block, env)?.unwrap_or(Value::Null)),
            None => Ok(Value::Null),
        }
    }
}
