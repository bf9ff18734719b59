/// The environment module stores variable bindings.
///
/// An environment is a chain of scopes. Lookups walk outward from the
/// innermost scope, while new bindings always go into the innermost one.
/// Function values hold on to the scope they were created in, which is what
/// makes closures work.
pub mod environment;
/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST, evaluates expressions and statements,
/// applies operators and functions, and produces values. It is the core
/// execution engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Handles bindings, closures, `return` and conditionals.
/// - Reports runtime errors such as division by zero or type mismatches.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream of
/// tokens, each corresponding to meaningful language elements such as numbers,
/// identifiers, operators, delimiters, and keywords. This is the first stage of
/// interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with kind, literal text
///   and source line.
/// - Handles integer and string literals, identifiers, keywords and
///   operators.
/// - Reports malformed input as `ILLEGAL` tokens instead of failing.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser is a Pratt parser: every token kind that can start an
/// expression has a prefix handler, every token kind that can continue one
/// has an infix handler and a binding power. Syntax errors are collected
/// rather than returned one at a time.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (expressions, statements).
/// - Applies operator precedence and left associativity.
/// - Records diagnostics with line numbers and keeps going.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares all the value types used during interpretation and
/// execution: null, integers, booleans, strings, arrays, hashes, functions
/// and built-ins, plus the hash key scheme.
///
/// # Responsibilities
/// - Defines the `Value` enum and all supported value variants.
/// - Provides type names, truthiness and the printed form of values.
/// - Decides which values can key a hash.
pub mod value;
