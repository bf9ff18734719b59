use std::rc::Rc;

use crate::{
    ast::{Expr, PrefixOperator},
    error::ParseError,
    interpreter::{
        lexer::{TokenKind, TokenSource},
        parser::core::{Parser, Precedence, PrefixParseFn},
    },
};

/// Looks up the handler for a token that starts an expression.
///
/// # Returns
/// `None` for tokens no expression can start with, which the caller reports
/// as `no prefix parse function for <KIND> found`.
pub fn prefix_parse_fn<S: TokenSource>(kind: TokenKind) -> Option<PrefixParseFn<S>> {
    let handler: PrefixParseFn<S> = match kind {
        TokenKind::Ident => Parser::parse_identifier,
        TokenKind::Int => Parser::parse_integer_literal,
        TokenKind::String => Parser::parse_string_literal,
        TokenKind::True | TokenKind::False => Parser::parse_boolean_literal,
        TokenKind::Bang | TokenKind::Minus => Parser::parse_prefix_expression,
        TokenKind::LParen => Parser::parse_grouped_expression,
        TokenKind::LBracket => Parser::parse_array_literal,
        TokenKind::LBrace => Parser::parse_hash_literal,
        TokenKind::If => Parser::parse_if_expression,
        TokenKind::Function => Parser::parse_function_literal,
        TokenKind::Illegal => Parser::parse_illegal,
        _ => return None,
    };
    Some(handler)
}

impl<S: TokenSource> Parser<S> {
    fn parse_identifier(&mut self) -> Option<Expr> {
        Some(Expr::Identifier(self.current.literal.clone()))
    }

    fn parse_integer_literal(&mut self) -> Option<Expr> {
        if let Ok(value) = self.current.literal.parse::<i64>() {
            Some(Expr::IntegerLiteral(value))
        } else {
            self.errors.push(ParseError::InvalidInteger { literal: self.current.literal.clone(),
                                                          line:    self.current.line, });
            None
        }
    }

    fn parse_string_literal(&mut self) -> Option<Expr> {
        Some(Expr::StringLiteral(self.current.literal.clone()))
    }

    fn parse_boolean_literal(&mut self) -> Option<Expr> {
        Some(Expr::BooleanLiteral(self.current_is(TokenKind::True)))
    }

    /// Parses `!<operand>` or `-<operand>`.
    ///
    /// The operand is parsed at prefix binding power, so `-a * b` groups as
    /// `((-a) * b)` while `-f(x)` negates the call.
    fn parse_prefix_expression(&mut self) -> Option<Expr> {
        let operator = if self.current_is(TokenKind::Bang) {
            PrefixOperator::Not
        } else {
            PrefixOperator::Negate
        };
        self.next_token();
        let operand = self.parse_expression(Precedence::Prefix)?;

        Some(Expr::Prefix { operator,
                            operand: Box::new(operand) })
    }

    fn parse_grouped_expression(&mut self) -> Option<Expr> {
        self.next_token();
        let expr = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(TokenKind::RParen)?;
        Some(expr)
    }

    fn parse_array_literal(&mut self) -> Option<Expr> {
        let elements = self.parse_expression_list(TokenKind::RBracket)?;
        Some(Expr::ArrayLiteral(elements))
    }

    /// Parses `{<key>: <value>, ...}`.
    ///
    /// A trailing comma before the closing brace is rejected, as it is in
    /// array literals and argument lists.
    fn parse_hash_literal(&mut self) -> Option<Expr> {
        let mut pairs = Vec::new();

        while !self.peek_is(TokenKind::RBrace) {
            if !pairs.is_empty() {
                self.expect_peek(TokenKind::Comma)?;
            }
            self.next_token();
            let key = self.parse_expression(Precedence::Lowest)?;
            self.expect_peek(TokenKind::Colon)?;
            self.next_token();
            let value = self.parse_expression(Precedence::Lowest)?;
            pairs.push((key, value));
        }
        self.expect_peek(TokenKind::RBrace)?;

        Some(Expr::HashLiteral(pairs))
    }

    /// Parses `if (<condition>) { ... }` with an optional `else { ... }`.
    ///
    /// The parentheses around the condition and the braces around both
    /// branches are required.
    fn parse_if_expression(&mut self) -> Option<Expr> {
        self.expect_peek(TokenKind::LParen)?;
        self.next_token();
        let condition = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(TokenKind::RParen)?;
        self.expect_peek(TokenKind::LBrace)?;
        let consequence = self.parse_block();

        let alternative = if self.peek_is(TokenKind::Else) {
            self.next_token();
            self.expect_peek(TokenKind::LBrace)?;
            Some(self.parse_block())
        } else {
            None
        };

        Some(Expr::If { condition: Box::new(condition),
                        consequence,
                        alternative })
    }

    /// Parses `fn(<parameters>) { <body> }`.
    fn parse_function_literal(&mut self) -> Option<Expr> {
        self.expect_peek(TokenKind::LParen)?;
        let parameters = self.parse_function_parameters()?;
        self.expect_peek(TokenKind::LBrace)?;
        let body = self.parse_block();

        Some(Expr::FunctionLiteral { parameters: parameters.into(),
                                     body:       Rc::new(body), })
    }

    /// Turns a scanner failure into a diagnostic.
    fn parse_illegal(&mut self) -> Option<Expr> {
        self.errors.push(ParseError::IllegalToken { message: self.current.literal.clone(),
                                                    line:    self.current.line, });
        None
    }
}
