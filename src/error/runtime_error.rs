use crate::ast::{InfixOperator, PrefixOperator};

/// Represents all errors that can occur during evaluation.
///
/// Type names in messages are the upper-case names returned by
/// [`crate::interpreter::value::core::Value::type_name`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuntimeError {
    /// Tried to use a name bound neither in scope nor as a built-in.
    #[error("identifier not found: {name}")]
    IdentifierNotFound {
        /// The name of the identifier.
        name: String,
    },
    /// A prefix operator was applied to an operand it does not support.
    #[error("unknown operator: {operator}{operand}")]
    UnknownPrefixOperator {
        /// The operator.
        operator: PrefixOperator,
        /// Type name of the operand.
        operand:  &'static str,
    },
    /// An infix operator is not defined for two operands of this type.
    #[error("unknown operator: {left} {operator} {right}")]
    UnknownInfixOperator {
        /// Type name of the left operand.
        left:     &'static str,
        /// The operator.
        operator: InfixOperator,
        /// Type name of the right operand.
        right:    &'static str,
    },
    /// The operands of an infix operator have different types.
    #[error("type mismatch: {left} {operator} {right}")]
    TypeMismatch {
        /// Type name of the left operand.
        left:     &'static str,
        /// The operator.
        operator: InfixOperator,
        /// Type name of the right operand.
        right:    &'static str,
    },
    /// Integer division or remainder with a zero divisor.
    #[error("division by zero")]
    DivisionByZero,
    /// Integer arithmetic left the signed 64-bit range.
    #[error("integer overflow: {operation}")]
    IntegerOverflow {
        /// The failed operation, e.g. `9223372036854775807 + 1`.
        operation: String,
    },
    /// Only strings, integers and booleans can key a hash.
    #[error("unusable as hash key: {type_name}")]
    UnusableAsHashKey {
        /// Type name of the rejected key.
        type_name: &'static str,
    },
    /// The indexed value is not an array or hash, or the index has the wrong
    /// type for it.
    #[error("index operator not supported: {type_name}")]
    IndexNotSupported {
        /// Type name of the indexed value.
        type_name: &'static str,
    },
    /// Tried to call something that is not a function.
    #[error("not a function: {type_name}")]
    NotAFunction {
        /// Type name of the callee.
        type_name: &'static str,
    },
    /// The wrong number of arguments was supplied to a function.
    #[error("wrong number of arguments. got={got}, want={want}")]
    ArgumentCountMismatch {
        /// Number of arguments supplied.
        got:  usize,
        /// Rendering of the accepted arity.
        want: String,
    },
    /// A built-in received an argument of a type it does not handle.
    #[error("argument to `{function}` not supported. got {type_name}")]
    UnsupportedArgument {
        /// Name of the built-in.
        function:  &'static str,
        /// Type name of the offending argument.
        type_name: &'static str,
    },
    /// A built-in needs an array as its first argument.
    #[error("the first argument to `{function}` must be ARRAY. got={type_name}")]
    ExpectedArrayArgument {
        /// Name of the built-in.
        function:  &'static str,
        /// Type name of the offending argument.
        type_name: &'static str,
    },
    /// Nested evaluation went deeper than the configured ceiling.
    #[error("stack overflow: evaluation depth exceeded {limit}")]
    StackOverflow {
        /// The configured ceiling.
        limit: usize,
    },
}
