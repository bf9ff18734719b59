use crate::interpreter::lexer::TokenKind;

/// Represents all diagnostics the parser can record.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The lookahead token was not the one the grammar requires here.
    #[error("expected next token to be {expected}, got {found} instead")]
    ExpectedToken {
        /// The token kind the grammar required.
        expected: TokenKind,
        /// The token kind actually found.
        found:    TokenKind,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// No expression can start with this token.
    #[error("no prefix parse function for {kind} found")]
    NoPrefixParseFn {
        /// The offending token kind.
        kind: TokenKind,
        /// The source line where the error occurred.
        line: usize,
    },
    /// An integer literal does not fit in a signed 64-bit integer.
    #[error("could not parse {literal:?} as integer")]
    InvalidInteger {
        /// The literal as written.
        literal: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// Expressions are nested deeper than the parser accepts.
    #[error("expression nesting exceeds {limit} levels")]
    NestingTooDeep {
        /// The nesting ceiling.
        limit: usize,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// The scanner could not make sense of the input.
    #[error("illegal token: {message}")]
    IllegalToken {
        /// What the scanner reported.
        message: String,
        /// The source line where the error occurred.
        line:    usize,
    },
}

impl ParseError {
    /// Returns the source line the diagnostic refers to.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::ExpectedToken { line, .. }
            | Self::NoPrefixParseFn { line, .. }
            | Self::InvalidInteger { line, .. }
            | Self::NestingTooDeep { line, .. }
            | Self::IllegalToken { line, .. } => *line,
        }
    }
}
