use std::iter::{FusedIterator, Peekable};
use std::str::Chars;

use crate::span::{BytePos, Span};
use crate::token::{Token, TokenKind};

/// Tokenize the whole source, up to and including the single EOF token.
pub fn tokenize(source: &str) -> Vec<Token> {
    Lexer::new(source).collect()
}

pub struct Lexer<'a> {
    input_iter: Peekable<Chars<'a>>,
    current_position: BytePos,
    /// Set once the EOF token has been handed out through `Iterator`
    emitted_eof: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Lexer<'a> {
        Lexer {
            input_iter: input.chars().peekable(),
            current_position: BytePos::new(0),
            emitted_eof: false,
        }
    }

    /// Consume the next character from the list.
    fn read_char(&mut self) -> Option<char> {
        let next = self.input_iter.next();
        if let Some(c) = next {
            self.current_position = self.current_position.shift(c);
        }
        next
    }

    /// Get the next character from the list without consuming it.
    fn peek_char(&mut self) -> Option<&char> {
        self.input_iter.peek()
    }

    /// Consume whitespace until a non-whitespace character is found.
    fn skip_whitespace(&mut self) {
        while let Some(&c) = self.peek_char() {
            if is_whitespace(c) {
                self.read_char();
            } else {
                break;
            }
        }
    }

    /// Read everything up to the closing quote. The opening quote is already consumed.
    ///
    /// Reaching the end of input first produces an ILLEGAL token holding the
    /// opening quote and everything after it.
    fn read_string(&mut self) -> (TokenKind, String) {
        let mut s = String::new();

        loop {
            match self.read_char() {
                Some('"') => return (TokenKind::String, s),
                Some(ch) => s.push(ch),
                None => return (TokenKind::Illegal, format!("\"{}", s)),
            }
        }
    }

    /// Read the current and following digits as an integer literal.
    /// The value itself is parsed later by the parser.
    fn read_number(&mut self, first: char) -> (TokenKind, String) {
        let mut s = String::new();
        s.push(first);

        while let Some(&ch) = self.peek_char() {
            if is_digit(ch) {
                s.push(ch);
                self.read_char();
            } else {
                break;
            }
        }

        (TokenKind::Int, s)
    }

    /// Read the current and following characters as an identifier or a keyword (if it exists).
    fn read_identifier_or_keyword(&mut self, first: char) -> (TokenKind, String) {
        let mut identifier = String::new();
        identifier.push(first);

        while let Some(&ch) = self.peek_char() {
            if is_identifier_char(ch) {
                identifier.push(ch);
                self.read_char();
            } else {
                break;
            }
        }

        match TokenKind::lookup_keyword(&identifier) {
            Some(keyword) => (keyword, identifier),
            None => (TokenKind::Ident, identifier),
        }
    }

    /// Read a new token from the characters list.
    ///
    /// Once the input is exhausted every call returns an EOF token.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let initial_position = self.current_position;

        let (kind, literal) = if let Some(c) = self.read_char() {
            match c {
                '=' => match self.peek_char() {
                    Some('=') => {
                        self.read_char();
                        (TokenKind::EqualEqual, "==".to_owned())
                    }
                    _ => (TokenKind::Assign, c.to_string()),
                },
                '!' => match self.peek_char() {
                    Some('=') => {
                        self.read_char();
                        (TokenKind::BangEqual, "!=".to_owned())
                    }
                    _ => (TokenKind::Bang, c.to_string()),
                },
                '+' => (TokenKind::Plus, c.to_string()),
                '-' => (TokenKind::Minus, c.to_string()),
                '*' => (TokenKind::Asterisk, c.to_string()),
                '/' => (TokenKind::Slash, c.to_string()),
                '<' => (TokenKind::LessThan, c.to_string()),
                '>' => (TokenKind::GreaterThan, c.to_string()),

                ',' => (TokenKind::Comma, c.to_string()),
                ';' => (TokenKind::Semicolon, c.to_string()),

                '(' => (TokenKind::LeftParen, c.to_string()),
                ')' => (TokenKind::RightParen, c.to_string()),
                '{' => (TokenKind::LeftBrace, c.to_string()),
                '}' => (TokenKind::RightBrace, c.to_string()),

                '"' => self.read_string(),

                c if is_digit(c) => self.read_number(c),
                c if is_identifier_char(c) => self.read_identifier_or_keyword(c),

                _ => (TokenKind::Illegal, c.to_string()),
            }
        } else {
            (TokenKind::Eof, String::new())
        };

        let span = Span::new(initial_position, self.current_position);

        Token::new(kind, literal, span)
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.emitted_eof {
            return None;
        }

        let token = self.next_token();
        if token.is(TokenKind::Eof) {
            self.emitted_eof = true;
        }
        Some(token)
    }
}

impl FusedIterator for Lexer<'_> {}

fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}

/// Whether or not the given character is a digit
fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Whether or not the given character is valid in an identifier
fn is_identifier_char(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}
