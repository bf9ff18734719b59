use crate::{
    ast::Expr,
    interpreter::{
        lexer::{TokenKind, TokenSource},
        parser::core::{Parser, Precedence},
    },
};

impl<S: TokenSource> Parser<S> {
    /// Parses a comma separated list of expressions closed by `end`.
    ///
    /// On entry the current token is the opening delimiter; on return it is
    /// `end`. An empty list is allowed, a trailing comma is not.
    pub(crate) fn parse_expression_list(&mut self, end: TokenKind) -> Option<Vec<Expr>> {
        let mut list = Vec::new();

        if self.peek_is(end) {
            self.next_token();
            return Some(list);
        }

        self.next_token();
        list.push(self.parse_expression(Precedence::Lowest)?);

        while self.peek_is(TokenKind::Comma) {
            self.next_token();
            self.next_token();
            list.push(self.parse_expression(Precedence::Lowest)?);
        }
        self.expect_peek(end)?;

        Some(list)
    }

    /// Parses the identifiers of a function literal's parameter list.
    ///
    /// On entry the current token is `(`; on return it is `)`.
    pub(crate) fn parse_function_parameters(&mut self) -> Option<Vec<String>> {
        let mut parameters = Vec::new();

        if self.peek_is(TokenKind::RParen) {
            self.next_token();
            return Some(parameters);
        }

        self.expect_peek(TokenKind::Ident)?;
        parameters.push(self.current.literal.clone());

        while self.peek_is(TokenKind::Comma) {
            self.next_token();
            self.expect_peek(TokenKind::Ident)?;
            parameters.push(self.current.literal.clone());
        }
        self.expect_peek(TokenKind::RParen)?;

        Some(parameters)
    }
}
