use std::{collections::HashMap, fmt, rc::Rc};

use crate::{
    ast::Block,
    error::RuntimeError,
    interpreter::{
        environment::Environment, evaluator::function::core::Builtin, value::hash_key::HashKey,
    },
};

/// Represents a runtime value in the interpreter.
///
/// Arrays and hashes are immutable once built and share their storage through
/// `Rc`, so cloning a value is cheap.
#[derive(Debug, Clone)]
pub enum Value {
    /// The absence of a value, e.g. the result of an `if` without `else`.
    Null,
    /// A 64-bit signed integer.
    Integer(i64),
    /// A boolean value (`true` or `false`).
    Boolean(bool),
    /// A string of text.
    String(String),
    /// An ordered sequence of values.
    Array(Rc<Vec<Self>>),
    /// A mapping from hashable keys to values.
    Hash(Rc<HashMap<HashKey, Self>>),
    /// A user-defined function together with the environment it closes over.
    Function(Rc<Function>),
    /// A native function from the built-in table.
    Builtin(&'static Builtin),
    /// A value travelling out of a function body through `return`.
    ReturnValue(Box<Self>),
    /// A failed evaluation, as seen from outside the evaluator.
    Error(RuntimeError),
}

/// A closure created by evaluating a function literal.
pub struct Function {
    /// Parameter names in declaration order.
    pub parameters: Rc<[String]>,
    /// The function body, shared with the literal it came from.
    pub body:       Rc<Block>,
    /// The environment that was current when the literal was evaluated.
    pub env:        Environment,
}

impl fmt::Debug for Function {
    // The captured environment may contain this very function.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Function")
         .field("parameters", &self.parameters)
         .field("body", &self.body)
         .finish_non_exhaustive()
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Integer(a), Self::Integer(b)) => a == b,
            (Self::Boolean(a), Self::Boolean(b)) => a == b,
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Array(a), Self::Array(b)) => a == b,
            (Self::Hash(a), Self::Hash(b)) => a == b,
            (Self::Function(a), Self::Function(b)) => Rc::ptr_eq(a, b),
            (Self::Builtin(a), Self::Builtin(b)) => a.name() == b.name(),
            (Self::ReturnValue(a), Self::ReturnValue(b)) => a == b,
            (Self::Error(a), Self::Error(b)) => a == b,
            _ => false,
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<Vec<Self>> for Value {
    fn from(v: Vec<Self>) -> Self {
        Self::Array(Rc::new(v))
    }
}

impl From<RuntimeError> for Value {
    fn from(e: RuntimeError) -> Self {
        Self::Error(e)
    }
}

impl Value {
    /// Returns the upper-case type name used in error messages.
    ///
    /// # Example
    /// ```
    /// use yoru::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::from(5).type_name(), "INTEGER");
    /// assert_eq!(Value::Null.type_name(), "NULL");
    /// ```
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "NULL",
            Self::Integer(_) => "INTEGER",
            Self::Boolean(_) => "BOOLEAN",
            Self::String(_) => "STRING",
            Self::Array(_) => "ARRAY",
            Self::Hash(_) => "HASH",
            Self::Function(_) => "FUNCTION",
            Self::Builtin(_) => "BUILTIN",
            Self::ReturnValue(_) => "RETURN_VALUE",
            Self::Error(_) => "ERROR",
        }
    }

    /// Reports whether the value counts as true in a condition.
    ///
    /// Only `false` and `null` are falsy. In particular `0` and `""` are
    /// truthy.
    #[must_use]
    pub const fn is_truthy(&self) -> bool {
        !matches!(self, Self::Null | Self::Boolean(false))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Integer(i) => write!(f, "{i}"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::String(s) => f.write_str(s),
            Self::Array(elements) => {
                f.write_str("[")?;
                for (i, element) in elements.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{element}")?;
                }
                f.write_str("]")
            },
            Self::Hash(pairs) => {
                let mut sorted: Vec<_> = pairs.iter().collect();
                sorted.sort_by(|(a, _), (b, _)| a.cmp(b));

                f.write_str("{")?;
                for (i, (key, value)) in sorted.into_iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                f.write_str("}")
            },
            Self::Function(function) => {
                write!(f, "fn({})", function.parameters.join(", "))?;
                if function.body.statements.is_empty() {
                    f.write_str(" {}")
                } else {
                    write!(f, " {{ {} }}", function.body)
                }
            },
            Self::Builtin(_) => f.write_str("builtin function"),
            Self::ReturnValue(value) => write!(f, "{value}"),
            Self::Error(error) => write!(f, "ERROR: {error}"),
        }
    }
}
