use crate::{
    ast::{Expr, InfixOperator},
    interpreter::{
        lexer::{TokenKind, TokenSource},
        parser::core::{InfixParseFn, Parser, Precedence},
    },
};

/// Looks up the handler for a token that continues an expression.
pub fn infix_parse_fn<S: TokenSource>(kind: TokenKind) -> Option<InfixParseFn<S>> {
    let handler: InfixParseFn<S> = match kind {
        TokenKind::Plus
        | TokenKind::Minus
        | TokenKind::Asterisk
        | TokenKind::Slash
        | TokenKind::Percent
        | TokenKind::Lt
        | TokenKind::Gt
        | TokenKind::Eq
        | TokenKind::NotEq => Parser::parse_infix_expression,
        TokenKind::LParen => Parser::parse_call_expression,
        TokenKind::LBracket => Parser::parse_index_expression,
        _ => return None,
    };
    Some(handler)
}

/// Maps an operator token to its AST operator.
///
/// # Returns
/// `None` if the token is not a binary operator.
const fn token_to_infix_operator(kind: TokenKind) -> Option<InfixOperator> {
    match kind {
        TokenKind::Plus => Some(InfixOperator::Add),
        TokenKind::Minus => Some(InfixOperator::Sub),
        TokenKind::Asterisk => Some(InfixOperator::Mul),
        TokenKind::Slash => Some(InfixOperator::Div),
        TokenKind::Percent => Some(InfixOperator::Mod),
        TokenKind::Lt => Some(InfixOperator::Less),
        TokenKind::Gt => Some(InfixOperator::Greater),
        TokenKind::Eq => Some(InfixOperator::Equal),
        TokenKind::NotEq => Some(InfixOperator::NotEqual),
        _ => None,
    }
}

impl<S: TokenSource> Parser<S> {
    /// Parses the right operand of a binary operator.
    ///
    /// The right side is parsed at the operator's own binding power, which
    /// makes operators of equal precedence associate to the left.
    fn parse_infix_expression(&mut self, left: Expr) -> Option<Expr> {
        let operator = token_to_infix_operator(self.current.kind)?;
        let precedence = self.current_precedence();
        self.next_token();
        let right = self.parse_expression(precedence)?;

        Some(Expr::Infix { operator,
                           left: Box::new(left),
                           right: Box::new(right) })
    }

    fn parse_call_expression(&mut self, callee: Expr) -> Option<Expr> {
        let arguments = self.parse_expression_list(TokenKind::RParen)?;
        Some(Expr::Call { callee: Box::new(callee),
                          arguments })
    }

    fn parse_index_expression(&mut self, collection: Expr) -> Option<Expr> {
        self.next_token();
        let index = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(TokenKind::RBracket)?;

        Some(Expr::Index { collection: Box::new(collection),
                           index:      Box::new(index), })
    }
}
