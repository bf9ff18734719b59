//! # yoru
//!
//! yoru is a small dynamically typed scripting language written in Rust.
//! Source text is tokenized, parsed by a Pratt parser into a syntax tree and
//! run by a tree-walking evaluator. The language has integers, booleans,
//! strings, arrays, hashes and first-class functions with closures.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use log::debug;

pub use crate::error::Error;
use crate::{
    ast::Program,
    error::ParseError,
    interpreter::{
        environment::Environment,
        evaluator::core::Evaluator,
        lexer::Lexer,
        parser::core::Parser,
        value::core::Value,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Program`, `Statement` and `Expr` types that
/// represent the syntactic structure of source code as a tree. The AST is
/// built by the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Renders every node in a canonical, fully parenthesized form that parses
///   back to the same tree.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while parsing or
/// evaluating code. Parse errors are collected as diagnostics; runtime errors
/// stop evaluation and travel up to the caller.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (parser, evaluator).
/// - Attaches line numbers to diagnostics.
/// - Keeps the user-visible message of every error stable.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, value
/// representations, error handling, and all supporting infrastructure to
/// provide a complete runtime for source code evaluation. It exposes the public
/// API for interpreting and executing expressions or programs.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Provides entry points for parsing and evaluating user code.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities for safe numeric conversion and helpers.
///
/// This module provides reusable helpers that are not specific to a single
/// phase of the interpreter.
///
/// # Responsibilities
/// - Safely convert between `i64` and `usize` without silent data loss.
pub mod util;

/// Parses source text into a program.
///
/// Parsing never stops at the first syntax error. Statements that could not
/// be parsed are left out of the program and described in the returned
/// diagnostics.
///
/// # Examples
/// ```
/// let (program, errors) = yoru::parse("let x = 5 * (10 + 4);");
/// assert!(errors.is_empty());
/// assert_eq!(program.to_string(), "let x = (5 * (10 + 4));");
///
/// let (_, errors) = yoru::parse("let x 5;");
/// assert_eq!(errors[0].to_string(), "expected next token to be =, got INT instead");
/// ```
#[must_use]
pub fn parse(source: &str) -> (Program, Vec<ParseError>) {
    Parser::new(Lexer::new(source)).parse_program()
}

/// Evaluates a program in `env` with the default recursion ceiling.
///
/// Runtime errors are returned as `Value::Error`.
///
/// # Examples
/// ```
/// use yoru::interpreter::{environment::Environment, value::core::Value};
///
/// let env = Environment::new();
/// let (program, _) = yoru::parse("let x = 2;");
/// yoru::evaluate(&program, &env);
///
/// let (program, _) = yoru::parse("x * 21");
/// assert_eq!(yoru::evaluate(&program, &env), Value::Integer(42));
/// ```
#[must_use]
pub fn evaluate(program: &Program, env: &Environment) -> Value {
    Evaluator::new().eval_program(program, env)
}

/// Returns the final evaluation result after execution.
///
/// This function parses the provided source string and, if it has no syntax
/// errors, runs it in a fresh environment. The value of the last statement is
/// returned.
///
/// # Errors
/// Returns `Error::Parse` with every diagnostic if parsing fails, in which
/// case nothing is evaluated, or `Error::Runtime` if evaluation fails.
///
/// # Examples
/// ```
/// use yoru::{get_result, interpreter::value::core::Value};
///
/// let value = get_result("let double = fn(x) { x * 2 }; double(21)").unwrap();
/// assert_eq!(value, Value::Integer(42));
///
/// // Example with an intentional error (unknown variable).
/// let err = get_result("let y = x + 1").unwrap_err();
/// assert_eq!(err.to_string(), "identifier not found: x");
/// ```
pub fn get_result(source: &str) -> Result<Value, Error> {
    let (program, errors) = parse(source);
    if !errors.is_empty() {
        debug!("refusing to evaluate: {} diagnostic(s)", errors.len());
        return Err(Error::from(errors));
    }

    match evaluate(&program, &Environment::new()) {
        Value::Error(error) => Err(Error::Runtime(error)),
        value => Ok(value),
    }
}
