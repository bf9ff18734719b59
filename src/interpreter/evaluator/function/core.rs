use std::fmt;

use log::trace;

use crate::{
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::{
            core::{EvalResult, Evaluator},
            function::{builtin, print},
        },
        value::core::{Function, Value},
    },
};

/// Type alias for builtin function handlers.
///
/// A builtin receives a slice of evaluated argument values whose count has
/// already been checked against its [`Arity`].
type BuiltinFn = fn(&[Value]) -> EvalResult<Value>;

/// Specifies the allowed number of arguments for a builtin.
///
/// - `Exact(n)` means the builtin must receive exactly `n` arguments.
/// - `AtLeast(n)` means the builtin accepts `n` or more arguments.
/// - `Any` accepts every argument count, including zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// Exactly this many arguments.
    Exact(usize),
    /// This many arguments or more.
    AtLeast(usize),
    /// Any number of arguments.
    Any,
}

impl Arity {
    /// Tests whether the given argument count satisfies this arity constraint.
    ///
    /// Returns `true` if the count is permitted, `false` otherwise.
    #[must_use]
    pub const fn check(self, n: usize) -> bool {
        match self {
            Self::Exact(m) => n == m,
            Self::AtLeast(m) => n >= m,
            Self::Any => true,
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(n) => write!(f, "{n}"),
            Self::AtLeast(n) => write!(f, "at least {n}"),
            Self::Any => f.write_str("any"),
        }
    }
}

/// A native function available to every program.
///
/// Built-ins live in a static table and are reached by name when no user
/// binding shadows them.
#[derive(Debug)]
pub struct Builtin {
    name:  &'static str,
    arity: Arity,
    func:  BuiltinFn,
}

impl Builtin {
    /// The name the built-in is bound to.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// The argument counts the built-in accepts.
    #[must_use]
    pub const fn arity(&self) -> Arity {
        self.arity
    }

    /// Checks the argument count, then runs the native function.
    ///
    /// # Example
    /// ```
    /// use yoru::interpreter::{evaluator::function::core::lookup_builtin, value::core::Value};
    ///
    /// let len = lookup_builtin("len").unwrap();
    ///
    /// assert_eq!(len.call(&[Value::from("four")]).unwrap(), Value::from(4));
    /// assert_eq!(len.call(&[]).unwrap_err().to_string(),
    ///            "wrong number of arguments. got=0, want=1");
    /// ```
    pub fn call(&self, args: &[Value]) -> EvalResult<Value> {
        let arity = self.arity();
        if !arity.check(args.len()) {
            return Err(RuntimeError::ArgumentCountMismatch { got:  args.len(),
                                                             want: arity.to_string(), });
        }

        trace!("calling builtin {} with {} argument(s)", self.name, args.len());
        (self.func)(args)
    }
}

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry provides:
/// - a string name,
/// - an arity specification,
/// - a function pointer implementing the builtin.
///
/// The macro produces:
/// - `BUILTIN_TABLE` (static table for lookup),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        static BUILTIN_TABLE: &[Builtin] = &[
            $(
                Builtin { name: $name, arity: $arity, func: $func },
            )*
        ];
        /// Names of every built-in function.
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "len"   => { arity: Arity::Exact(1),   func: builtin::len },
    "push"  => { arity: Arity::AtLeast(2), func: builtin::push },
    "first" => { arity: Arity::Exact(1),   func: builtin::first },
    "last"  => { arity: Arity::Exact(1),   func: builtin::last },
    "rest"  => { arity: Arity::Exact(1),   func: builtin::rest },
    "puts"  => { arity: Arity::Any,        func: print::puts },
}

/// Finds a built-in function by name.
#[must_use]
pub fn lookup_builtin(name: &str) -> Option<&'static Builtin> {
    BUILTIN_TABLE.iter().find(|b| b.name == name)
}

impl Evaluator {
    /// Calls a function value with already evaluated arguments.
    ///
    /// A user-defined function runs its body in a new scope enclosed by the
    /// scope it captured, with each parameter bound to the argument in the
    /// same position. A `return` inside the body ends the call and its value
    /// becomes the call's value.
    ///
    /// # Errors
    /// - `ArgumentCountMismatch` if the number of arguments is wrong.
    /// - `NotAFunction` if `callee` is not callable.
    /// - Any error raised while running the body.
    pub fn apply_function(&mut self, callee: &Value, args: Vec<Value>) -> EvalResult<Value> {
        match callee {
            Value::Function(function) => self.call_user_defined_function(function, args),
            Value::Builtin(builtin) => builtin.call(&args),
            other => Err(RuntimeError::NotAFunction { type_name: other.type_name() }),
        }
    }

    fn call_user_defined_function(&mut self,
                                  function: &Function,
                                  args: Vec<Value>)
                                  -> EvalResult<Value> {
        if args.len() != function.parameters.len() {
            return Err(RuntimeError::ArgumentCountMismatch { got:  args.len(),
                                                             want: function.parameters
                                                                           .len()
                                                                           .to_string(), });
        }

        trace!("calling fn({}) with {} argument(s)",
               function.parameters.join(", "),
               args.len());

        let env = Environment::new_enclosed(function.env.clone());
        for (name, value) in function.parameters.iter().zip(args) {
            env.define(name.as_str(), value);
        }

        match self.eval_block(&function.body, &env)? {
            Some(Value::ReturnValue(value)) => Ok(*value),
            Some(value) => Ok(value),
            None => Ok(Value::Null),
        }
    }
}
