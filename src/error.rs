/// Parsing errors.
///
/// Defines the diagnostics the parser accumulates while reading a program.
/// Each diagnostic remembers the source line of the token that caused it; the
/// line is kept out of the message text so messages stay stable.
pub mod parse_error;
/// Runtime errors.
///
/// Contains every error that can be raised while evaluating a program, such
/// as unbound identifiers, type mismatches, division by zero or calling a
/// function with the wrong number of arguments.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Everything that can stop [`crate::get_result`] from producing a value.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The program had syntax errors and was not evaluated.
    #[error("{}", render_diagnostics(.0))]
    Parse(Vec<ParseError>),
    /// Evaluation failed.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

impl From<Vec<ParseError>> for Error {
    fn from(errors: Vec<ParseError>) -> Self {
        Self::Parse(errors)
    }
}

fn render_diagnostics(errors: &[ParseError]) -> String {
    errors.iter()
          .map(|error| format!("line {}: {error}", error.line()))
          .collect::<Vec<_>>()
          .join("\n")
}
