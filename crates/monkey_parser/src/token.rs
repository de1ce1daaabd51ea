use std::fmt;

use crate::span::Span;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Illegal,
    Eof,

    // Identifiers & Literals
    Ident,
    Int,
    String,

    // Operators
    Assign,
    Plus,
    Minus,
    Bang,
    Asterisk,
    Slash,

    LessThan,
    GreaterThan,
    EqualEqual,
    BangEqual,

    // Delimiters
    Comma,
    Semicolon,

    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,

    // Keywords
    Function,
    Let,
    True,
    False,
    If,
    Else,
    Return,
}

impl TokenKind {
    /// Get the TokenKind for the given keyword, if valid.
    pub fn lookup_keyword(s: &str) -> Option<TokenKind> {
        use TokenKind::*;

        match s {
            "fn" => Some(Function),
            "let" => Some(Let),
            "true" => Some(True),
            "false" => Some(False),
            "if" => Some(If),
            "else" => Some(Else),
            "return" => Some(Return),
            _ => None,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use TokenKind::*;

        let s = match self {
            Illegal => "ILLEGAL",
            Eof => "EOF",

            Ident => "IDENT",
            Int => "INT",
            String => "STRING",

            Assign => "=",
            Plus => "+",
            Minus => "-",
            Bang => "!",
            Asterisk => "*",
            Slash => "/",

            LessThan => "<",
            GreaterThan => ">",
            EqualEqual => "==",
            BangEqual => "!=",

            Comma => ",",
            Semicolon => ";",

            LeftParen => "(",
            RightParen => ")",
            LeftBrace => "{",
            RightBrace => "}",

            Function => "FUNCTION",
            Let => "LET",
            True => "TRUE",
            False => "FALSE",
            If => "IF",
            Else => "ELSE",
            Return => "RETURN",
        };

        write!(f, "{}", s)
    }
}

#[derive(Debug, PartialEq, Clone)]
pub struct Token {
    pub kind: TokenKind,
    /// Source text of the token (digits for INT, contents for STRING)
    pub literal: String,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, literal: impl Into<String>, span: Span) -> Token {
        Token {
            kind,
            literal: literal.into(),
            span,
        }
    }

    pub fn eof(span: Span) -> Token {
        Token::new(TokenKind::Eof, "", span)
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Eof => write!(f, "EOF"),
            TokenKind::String => write!(f, "\"{}\"", self.literal),
            _ => write!(f, "{}", self.literal),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::span::Span;
    use crate::token::{Token, TokenKind};

    #[test]
    fn keyword_lookup() {
        assert_eq!(TokenKind::lookup_keyword("fn"), Some(TokenKind::Function));
        assert_eq!(TokenKind::lookup_keyword("return"), Some(TokenKind::Return));
        assert_eq!(TokenKind::lookup_keyword("func"), None);
        assert_eq!(TokenKind::lookup_keyword("nil"), None);
    }

    #[test]
    fn kind_formatting() {
        assert_eq!(TokenKind::Ident.to_string(), "IDENT");
        assert_eq!(TokenKind::BangEqual.to_string(), "!=");
        assert_eq!(TokenKind::LeftBrace.to_string(), "{");
        assert_eq!(TokenKind::Function.to_string(), "FUNCTION");
    }

    #[test]
    fn token_formatting() {
        let span = Span::empty();
        assert_eq!(Token::new(TokenKind::String, "hi", span).to_string(), "\"hi\"");
        assert_eq!(Token::new(TokenKind::Int, "42", span).to_string(), "42");
        assert_eq!(Token::eof(span).to_string(), "EOF");
    }
}
