use log::debug;

use crate::{
    ast::{Expr, Program},
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind, TokenSource},
        parser::{infix::infix_parse_fn, prefix::prefix_parse_fn},
    },
};

/// Deepest expression nesting the parser accepts.
///
/// Covers parentheses, operator chains, collection literals and function
/// bodies alike, so every tree the parser hands out can be printed,
/// evaluated and dropped without exhausting the native stack.
pub const MAX_NESTING_DEPTH: usize = 512;

const STACK_RED_ZONE: usize = 64 * 1024;
const STACK_GROW_SIZE: usize = 1024 * 1024;

/// Handler for a token that starts an expression.
pub type PrefixParseFn<S> = fn(&mut Parser<S>) -> Option<Expr>;
/// Handler for a token that continues an already parsed expression.
pub type InfixParseFn<S> = fn(&mut Parser<S>, Expr) -> Option<Expr>;

/// Binding power of an infix token, lowest first.
///
/// The derived ordering is what the expression loop compares: an operator
/// only takes the expression to its left when it binds tighter than the
/// context the expression is being parsed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    /// Anything else, including tokens that never continue an expression.
    Lowest,
    /// `==` and `!=`
    Equals,
    /// `<` and `>`
    LessGreater,
    /// `+` and `-`
    Sum,
    /// `*`, `/` and `%`
    Product,
    /// Prefix `!` and `-`
    Prefix,
    /// Call `f(x)`
    Call,
    /// Index `a[i]`
    Index,
}

impl From<TokenKind> for Precedence {
    fn from(kind: TokenKind) -> Self {
        match kind {
            TokenKind::Eq | TokenKind::NotEq => Self::Equals,
            TokenKind::Lt | TokenKind::Gt => Self::LessGreater,
            TokenKind::Plus | TokenKind::Minus => Self::Sum,
            TokenKind::Asterisk | TokenKind::Slash | TokenKind::Percent => Self::Product,
            TokenKind::LParen => Self::Call,
            TokenKind::LBracket => Self::Index,
            _ => Self::Lowest,
        }
    }
}

/// A Pratt parser over any [`TokenSource`].
///
/// The parser never stops at the first problem. Each failure is recorded as
/// a [`ParseError`], the statement being parsed is dropped and parsing
/// resumes with the next token.
///
/// # Example
/// ```
/// use yoru::interpreter::{lexer::Lexer, parser::core::Parser};
///
/// let (program, errors) = Parser::new(Lexer::new("let x = 1 + 2 * 3;")).parse_program();
///
/// assert!(errors.is_empty());
/// assert_eq!(program.to_string(), "let x = (1 + (2 * 3));");
/// ```
pub struct Parser<S> {
    pub(super) tokens:  S,
    pub(super) current: Token,
    pub(super) peek:    Token,
    pub(super) errors:  Vec<ParseError>,
    depth:              usize,
}

impl<S: TokenSource> Parser<S> {
    /// Creates a parser and reads the first two tokens.
    pub fn new(mut tokens: S) -> Self {
        let current = tokens.next_token();
        let peek = tokens.next_token();
        Self { tokens,
               current,
               peek,
               errors: Vec::new(),
               depth: 0 }
    }

    /// Parses statements until the end of input.
    ///
    /// # Returns
    /// The program built from every statement that parsed cleanly, together
    /// with the diagnostics recorded along the way in source order.
    pub fn parse_program(mut self) -> (Program, Vec<ParseError>) {
        let mut statements = Vec::new();

        while !self.current_is(TokenKind::Eof) {
            if let Some(statement) = self.parse_statement() {
                statements.push(statement);
            }
            self.next_token();
        }

        debug!("parsed {} statement(s) with {} diagnostic(s)",
               statements.len(),
               self.errors.len());

        (Program { statements }, self.errors)
    }

    /// Parses an expression whose operators all bind tighter than
    /// `precedence`.
    ///
    /// On entry the current token is the first token of the expression; on
    /// return it is the last token that belongs to it.
    ///
    /// Every nested expression and every operator folded into the result
    /// counts towards [`MAX_NESTING_DEPTH`]; crossing it records a
    /// `NestingTooDeep` diagnostic and abandons the expression.
    pub(crate) fn parse_expression(&mut self, precedence: Precedence) -> Option<Expr> {
        let entered = self.depth;
        let expr = stacker::maybe_grow(STACK_RED_ZONE, STACK_GROW_SIZE, || {
            self.parse_nested_expression(precedence)
        });
        self.depth = entered;

        expr
    }

    fn parse_nested_expression(&mut self, precedence: Precedence) -> Option<Expr> {
        self.descend()?;
        let Some(prefix) = prefix_parse_fn(self.current.kind) else {
            self.errors.push(ParseError::NoPrefixParseFn { kind: self.current.kind,
                                                           line: self.current.line, });
            return None;
        };
        let mut left = prefix(self)?;

        while !self.peek_is(TokenKind::Semicolon) && precedence < self.peek_precedence() {
            let Some(infix) = infix_parse_fn(self.peek.kind) else {
                return Some(left);
            };
            self.descend()?;
            self.next_token();
            left = infix(self, left)?;
        }

        Some(left)
    }

    fn descend(&mut self) -> Option<()> {
        if self.depth >= MAX_NESTING_DEPTH {
            self.errors.push(ParseError::NestingTooDeep { limit: MAX_NESTING_DEPTH,
                                                          line:  self.current.line, });
            return None;
        }
        self.depth += 1;
        Some(())
    }

    pub(crate) fn next_token(&mut self) {
        let next = self.tokens.next_token();
        self.current = std::mem::replace(&mut self.peek, next);
    }

    pub(crate) fn current_is(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    pub(crate) fn peek_is(&self, kind: TokenKind) -> bool {
        self.peek.kind == kind
    }

    /// Advances if the lookahead is `kind`.
    ///
    /// Otherwise records an `ExpectedToken` diagnostic and returns `None`,
    /// so callers can abandon the construct with `?`.
    pub(crate) fn expect_peek(&mut self, kind: TokenKind) -> Option<()> {
        if self.peek_is(kind) {
            self.next_token();
            Some(())
        } else {
            self.errors.push(ParseError::ExpectedToken { expected: kind,
                                                         found:    self.peek.kind,
                                                         line:     self.peek.line, });
            None
        }
    }

    pub(crate) fn current_precedence(&self) -> Precedence {
        Precedence::from(self.current.kind)
    }

    fn peek_precedence(&self) -> Precedence {
        Precedence::from(self.peek.kind)
    }
}
