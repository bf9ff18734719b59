use yoru::interpreter::lexer::{Lexer, Token, TokenKind, TokenSource};

fn tokens(source: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token();
        if token.kind == TokenKind::Eof {
            return tokens;
        }
        tokens.push(token);
    }
}

fn kinds(source: &str) -> Vec<TokenKind> {
    tokens(source).into_iter().map(|t| t.kind).collect()
}

#[test]
fn operators_and_delimiters() {
    use TokenKind::*;

    assert_eq!(kinds("=+-!*/%<>==!=,:;(){}[]"),
               [Assign, Plus, Minus, Bang, Asterisk, Slash, Percent, Lt, Gt, Eq, NotEq, Comma,
                Colon, Semicolon, LParen, RParen, LBrace, RBrace, LBracket, RBracket]);
}

#[test]
fn keywords_and_identifiers() {
    use TokenKind::*;

    assert_eq!(kinds("fn let true false if else return letter _x fnord"),
               [Function, Let, True, False, If, Else, Return, Ident, Ident, Ident]);

    let toks = tokens("new_adder");
    assert_eq!(toks[0].literal, "new_adder");
}

#[test]
fn identifiers_do_not_contain_digits() {
    let toks = tokens("x1");
    assert_eq!(toks.iter().map(|t| t.kind).collect::<Vec<_>>(),
               [TokenKind::Ident, TokenKind::Int]);
    assert_eq!(toks[0].literal, "x");
    assert_eq!(toks[1].literal, "1");
}

#[test]
fn full_statement() {
    let toks = tokens("let five = 5;");
    let pairs: Vec<(TokenKind, &str)> = toks.iter().map(|t| (t.kind, t.literal.as_str())).collect();

    assert_eq!(pairs,
               [(TokenKind::Let, "let"),
                (TokenKind::Ident, "five"),
                (TokenKind::Assign, "="),
                (TokenKind::Int, "5"),
                (TokenKind::Semicolon, ";")]);
}

#[test]
fn string_literals_are_unescaped() {
    let toks = tokens(r#""hello world" "a\"b" "tab\there\n" "back\\slash" "\q""#);
    let literals: Vec<&str> = toks.iter().map(|t| t.literal.as_str()).collect();

    assert!(toks.iter().all(|t| t.kind == TokenKind::String));
    assert_eq!(literals,
               ["hello world", "a\"b", "tab\there\n", "back\\slash", "q"]);
}

#[test]
fn empty_string_literal() {
    let toks = tokens(r#""""#);
    assert_eq!(toks, [Token::new(TokenKind::String, "", 1)]);
}

#[test]
fn unterminated_string_is_illegal() {
    let toks = tokens(r#"let s = "abc"#);
    let last = toks.last().unwrap();

    assert_eq!(last.kind, TokenKind::Illegal);
    assert_eq!(last.literal, "string literal not terminated");
}

#[test]
fn unknown_character_is_illegal() {
    let toks = tokens("1 @ 2");

    assert_eq!(toks[1].kind, TokenKind::Illegal);
    assert_eq!(toks[1].literal, "@");
    assert_eq!(toks[2], Token::new(TokenKind::Int, "2", 1));
}

#[test]
fn comments_are_skipped() {
    assert_eq!(kinds("1 // the rest is ignored ) ]\n2"),
               [TokenKind::Int, TokenKind::Int]);
}

#[test]
fn lines_are_tracked() {
    let toks = tokens("let a = 1;\n\nlet b = \"two\nlines\";\nb");
    let lines: Vec<usize> = toks.iter().map(|t| t.line).collect();

    assert_eq!(lines, [1, 1, 1, 1, 1, 3, 3, 3, 3, 4, 5]);
}

#[test]
fn eof_repeats_forever() {
    let mut lexer = Lexer::new("x");

    assert_eq!(lexer.next_token().kind, TokenKind::Ident);
    for _ in 0..3 {
        assert_eq!(lexer.next_token().kind, TokenKind::Eof);
    }
}

#[test]
fn token_kinds_display_their_diagnostic_names() {
    assert_eq!(TokenKind::Int.to_string(), "INT");
    assert_eq!(TokenKind::Ident.to_string(), "IDENT");
    assert_eq!(TokenKind::Eof.to_string(), "EOF");
    assert_eq!(TokenKind::Function.to_string(), "FUNCTION");
    assert_eq!(TokenKind::Assign.to_string(), "=");
    assert_eq!(TokenKind::NotEq.to_string(), "!=");
}
