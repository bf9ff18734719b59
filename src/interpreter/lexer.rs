use std::fmt;

use logos::Logos;

/// The closed set of token kinds the parser understands.
///
/// The `Display` form of each kind is the name used in diagnostics, e.g.
/// `expected next token to be =, got INT instead`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A scan failure. The token literal describes what went wrong.
    Illegal,
    /// End of input. Returned forever once the source is exhausted.
    Eof,
    /// Identifier such as `x` or `new_adder`.
    Ident,
    /// Integer literal such as `42`.
    Int,
    /// String literal. The token literal holds the unescaped contents.
    String,
    /// `=`
    Assign,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `!`
    Bang,
    /// `*`
    Asterisk,
    /// `/`
    Slash,
    /// `%`
    Percent,
    /// `<`
    Lt,
    /// `>`
    Gt,
    /// `==`
    Eq,
    /// `!=`
    NotEq,
    /// `,`
    Comma,
    /// `:`
    Colon,
    /// `;`
    Semicolon,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `[`
    LBracket,
    /// `]`
    RBracket,
    /// `fn`
    Function,
    /// `let`
    Let,
    /// `true`
    True,
    /// `false`
    False,
    /// `if`
    If,
    /// `else`
    Else,
    /// `return`
    Return,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Illegal => "ILLEGAL",
            Self::Eof => "EOF",
            Self::Ident => "IDENT",
            Self::Int => "INT",
            Self::String => "STRING",
            Self::Assign => "=",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Bang => "!",
            Self::Asterisk => "*",
            Self::Slash => "/",
            Self::Percent => "%",
            Self::Lt => "<",
            Self::Gt => ">",
            Self::Eq => "==",
            Self::NotEq => "!=",
            Self::Comma => ",",
            Self::Colon => ":",
            Self::Semicolon => ";",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::LBrace => "{",
            Self::RBrace => "}",
            Self::LBracket => "[",
            Self::RBracket => "]",
            Self::Function => "FUNCTION",
            Self::Let => "LET",
            Self::True => "TRUE",
            Self::False => "FALSE",
            Self::If => "IF",
            Self::Else => "ELSE",
            Self::Return => "RETURN",
        };
        f.write_str(name)
    }
}

/// A single token handed from the lexer to the parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// What kind of token this is.
    pub kind:    TokenKind,
    /// The source text of the token. For strings this is the unescaped
    /// contents, for illegal tokens a description of the scan failure.
    pub literal: String,
    /// The source line the token starts on (1-based).
    pub line:    usize,
}

impl Token {
    /// Creates a token from its parts.
    #[must_use]
    pub fn new(kind: TokenKind, literal: impl Into<String>, line: usize) -> Self {
        Self { kind,
               literal: literal.into(),
               line }
    }
}

/// Anything that can feed tokens to the parser one at a time.
///
/// Implementations must keep returning an [`TokenKind::Eof`] token once the
/// input is exhausted.
pub trait TokenSource {
    /// Produces the next token.
    fn next_token(&mut self) -> Token;
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for diagnostics.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// Raw scanner output. Only the kinds the scanner can actually produce live
/// here; whitespace, newlines and comments are skipped.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(extras = LexerExtras)]
#[logos(skip r"[ \t\r\f]+")]
enum Lexeme {
    #[regex(r"[a-zA-Z_]+")]
    Ident,
    #[regex(r"[0-9]+")]
    Int,
    #[regex(r#""([^"\\]|\\(.|\n))*"?"#, string_is_terminated)]
    String,
    #[token("=")]
    Assign,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("!")]
    Bang,
    #[token("*")]
    Asterisk,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,
    #[token("==")]
    Eq,
    #[token("!=")]
    NotEq,
    #[token(",")]
    Comma,
    #[token(":")]
    Colon,
    #[token(";")]
    Semicolon,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("fn")]
    Function,
    #[token("let")]
    Let,
    #[token("true")]
    True,
    #[token("false")]
    False,
    #[token("if")]
    If,
    #[token("else")]
    Else,
    #[token("return")]
    Return,
    #[regex(r"//[^\n]*", logos::skip)]
    Comment,
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
}

impl Lexeme {
    const fn kind(self) -> TokenKind {
        match self {
            Self::Ident => TokenKind::Ident,
            Self::Int => TokenKind::Int,
            Self::String => TokenKind::String,
            Self::Assign => TokenKind::Assign,
            Self::Plus => TokenKind::Plus,
            Self::Minus => TokenKind::Minus,
            Self::Bang => TokenKind::Bang,
            Self::Asterisk => TokenKind::Asterisk,
            Self::Slash => TokenKind::Slash,
            Self::Percent => TokenKind::Percent,
            Self::Lt => TokenKind::Lt,
            Self::Gt => TokenKind::Gt,
            Self::Eq => TokenKind::Eq,
            Self::NotEq => TokenKind::NotEq,
            Self::Comma => TokenKind::Comma,
            Self::Colon => TokenKind::Colon,
            Self::Semicolon => TokenKind::Semicolon,
            Self::LParen => TokenKind::LParen,
            Self::RParen => TokenKind::RParen,
            Self::LBrace => TokenKind::LBrace,
            Self::RBrace => TokenKind::RBrace,
            Self::LBracket => TokenKind::LBracket,
            Self::RBracket => TokenKind::RBracket,
            Self::Function => TokenKind::Function,
            Self::Let => TokenKind::Let,
            Self::True => TokenKind::True,
            Self::False => TokenKind::False,
            Self::If => TokenKind::If,
            Self::Else => TokenKind::Else,
            Self::Return => TokenKind::Return,
            // Both are skipped by the scanner and never reach the parser.
            Self::Comment | Self::NewLine => TokenKind::Illegal,
        }
    }
}

/// Checks that a scanned string literal ends with an unescaped quote and
/// accounts for any newlines embedded in it.
///
/// Returning `false` turns the whole slice into a scan error, which the
/// [`Lexer`] reports as an illegal token.
fn string_is_terminated(lex: &mut logos::Lexer<Lexeme>) -> bool {
    let slice = lex.slice();
    lex.extras.line += slice.matches('\n').count();

    let body = &slice[1..];
    let mut escaped = false;
    for (i, ch) in body.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match ch {
            '\\' => escaped = true,
            '"' => return i + 1 == body.len(),
            _ => {},
        }
    }
    false
}

/// Resolves escape sequences in the body of a terminated string literal.
///
/// `\n`, `\r`, `\t` and `\\` have their usual meaning; any other escaped
/// character stands for itself, which is how `\"` embeds a quote.
fn unescape(slice: &str) -> String {
    let body = &slice[1..slice.len() - 1];
    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars();

    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some(other) => out.push(other),
            None => {},
        }
    }
    out
}

/// The scanner turning source text into a stream of [`Token`]s.
///
/// # Example
/// ```
/// use yoru::interpreter::lexer::{Lexer, TokenKind, TokenSource};
///
/// let mut lexer = Lexer::new("let x = 5;");
/// let kinds: Vec<TokenKind> = std::iter::from_fn(|| {
///                                 let token = lexer.next_token();
///                                 (token.kind != TokenKind::Eof).then_some(token.kind)
///                             }).collect();
///
/// assert_eq!(kinds,
///            [TokenKind::Let, TokenKind::Ident, TokenKind::Assign, TokenKind::Int,
///             TokenKind::Semicolon]);
/// ```
pub struct Lexer<'a> {
    inner: logos::Lexer<'a, Lexeme>,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer over `source`, starting at line 1.
    #[must_use]
    pub fn new(source: &'a str) -> Self {
        Self { inner: Lexeme::lexer_with_extras(source, LexerExtras { line: 1 }) }
    }
}

impl TokenSource for Lexer<'_> {
    fn next_token(&mut self) -> Token {
        let Some(scanned) = self.inner.next() else {
            return Token::new(TokenKind::Eof, "", self.inner.extras.line);
        };

        let slice = self.inner.slice();
        let line = self.inner.extras.line - slice.matches('\n').count();

        match scanned {
            Ok(Lexeme::String) => Token::new(TokenKind::String, unescape(slice), line),
            Ok(lexeme) => Token::new(lexeme.kind(), slice, line),
            Err(()) if slice.starts_with('"') => {
                Token::new(TokenKind::Illegal, "string literal not terminated", line)
            },
            Err(()) => Token::new(TokenKind::Illegal, slice, line),
        }
    }
}

impl TokenSource for std::vec::IntoIter<Token> {
    fn next_token(&mut self) -> Token {
        self.next()
            .unwrap_or_else(|| Token::new(TokenKind::Eof, "", 0))
    }
}
