use crate::{
    ast::{Block, Statement},
    interpreter::{
        lexer::{TokenKind, TokenSource},
        parser::core::{Parser, Precedence},
    },
};

impl<S: TokenSource> Parser<S> {
    /// Parses a single statement starting at the current token.
    ///
    /// Grammar:
    /// ```text
    ///     statement := "let" IDENT "=" expression [";"]
    ///                | "return" expression [";"]
    ///                | expression [";"]
    /// ```
    ///
    /// # Returns
    /// `None` if the statement was malformed; the reason has been recorded.
    pub(crate) fn parse_statement(&mut self) -> Option<Statement> {
        match self.current.kind {
            TokenKind::Let => self.parse_let_statement(),
            TokenKind::Return => self.parse_return_statement(),
            _ => self.parse_expression_statement(),
        }
    }

    fn parse_let_statement(&mut self) -> Option<Statement> {
        self.expect_peek(TokenKind::Ident)?;
        let name = self.current.literal.clone();
        self.expect_peek(TokenKind::Assign)?;
        self.next_token();
        let value = self.parse_expression(Precedence::Lowest)?;
        self.skip_semicolon();

        Some(Statement::Let { name, value })
    }

    fn parse_return_statement(&mut self) -> Option<Statement> {
        self.next_token();
        let value = self.parse_expression(Precedence::Lowest)?;
        self.skip_semicolon();

        Some(Statement::Return { value })
    }

    fn parse_expression_statement(&mut self) -> Option<Statement> {
        let value = self.parse_expression(Precedence::Lowest)?;
        self.skip_semicolon();

        Some(Statement::Expression { value })
    }

    /// Parses statements up to the matching `}`.
    ///
    /// On entry the current token is `{`; on return it is `}`, or the end of
    /// input if the block was never closed. Malformed statements inside the
    /// block are dropped after their diagnostics are recorded.
    pub(crate) fn parse_block(&mut self) -> Block {
        let mut statements = Vec::new();
        self.next_token();

        while !self.current_is(TokenKind::RBrace) && !self.current_is(TokenKind::Eof) {
            if let Some(statement) = self.parse_statement() {
                statements.push(statement);
            }
            self.next_token();
        }

        Block { statements }
    }

    fn skip_semicolon(&mut self) {
        if self.peek_is(TokenKind::Semicolon) {
            self.next_token();
        }
    }
}
