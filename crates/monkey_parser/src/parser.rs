use std::rc::Rc;

use thiserror::Error;
use tracing::{debug, trace};

use crate::ast::{
    BlockStatement, CallExpression, Expression, FunctionLiteral, Identifier, IfExpression,
    InfixExpression, InfixOperator, PrefixExpression, PrefixOperator, Program, Statement,
};
use crate::span::Span;
use crate::token::{Token, TokenKind};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("expected next token to be {expected}, got {got} instead")]
    Expected {
        expected: TokenKind,
        got: TokenKind,
        span: Span,
    },
    #[error("no prefix parse function for {kind} found")]
    NoPrefixParseFn { kind: TokenKind, span: Span },
    #[error("could not parse {literal} as integer")]
    InvalidInteger { literal: String, span: Span },
}

impl ParseError {
    /// Where in the source the offending token sits.
    pub fn span(&self) -> Span {
        match self {
            ParseError::Expected { span, .. }
            | ParseError::NoPrefixParseFn { span, .. }
            | ParseError::InvalidInteger { span, .. } => *span,
        }
    }
}

type ParseResult<T> = Result<T, ParseError>;

/// Binding power of operators, lowest to highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Precedence {
    Lowest,
    Equals,
    LessGreater,
    Sum,
    Product,
    Prefix,
    Call,
}

impl Precedence {
    fn of(kind: TokenKind) -> Precedence {
        match kind {
            TokenKind::EqualEqual | TokenKind::BangEqual => Precedence::Equals,
            TokenKind::LessThan | TokenKind::GreaterThan => Precedence::LessGreater,
            TokenKind::Plus | TokenKind::Minus => Precedence::Sum,
            TokenKind::Asterisk | TokenKind::Slash => Precedence::Product,
            TokenKind::LeftParen => Precedence::Call,
            _ => Precedence::Lowest,
        }
    }
}

/// Parse a whole token stream, returning the program along with every error found.
pub fn parse<I>(tokens: I) -> (Program, Vec<ParseError>)
where
    I: IntoIterator<Item = Token>,
{
    let mut parser = Parser::new(tokens.into_iter());
    let program = parser.parse_program();
    (program, parser.into_errors())
}

pub struct Parser<T: Iterator<Item = Token>> {
    tokens: T,

    current_token: Token,
    peek_token: Token,

    errors: Vec<ParseError>,
}

impl<T: Iterator<Item = Token>> Parser<T> {
    pub fn new(mut tokens: T) -> Parser<T> {
        let cur = next_or_eof(&mut tokens, Span::empty());
        let next = next_or_eof(&mut tokens, cur.span);
        Parser {
            tokens,
            current_token: cur,
            peek_token: next,
            errors: Vec::new(),
        }
    }

    /// Errors recorded so far, in the order they were detected.
    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<ParseError> {
        self.errors
    }

    /// Parse statements until EOF. A statement that fails to parse is recorded
    /// as an error and skipped.
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::new();

        while !self.current_token_is(TokenKind::Eof) {
            match self.parse_statement() {
                Ok(statement) => {
                    trace!(statement = %statement, "parsed statement");
                    program.statements.push(statement)
                }
                Err(error) => {
                    debug!(%error, span = %error.span(), "parse error");
                    self.errors.push(error)
                }
            }
            self.next_token();
        }

        program
    }

    fn parse_statement(&mut self) -> ParseResult<Statement> {
        match self.current_token.kind {
            TokenKind::Let => self.parse_let_statement(),
            TokenKind::Return => self.parse_return_statement(),
            TokenKind::LeftBrace => Ok(Statement::Block(self.parse_block_statement()?)),
            _ => self.parse_expression_statement(),
        }
    }

    fn parse_let_statement(&mut self) -> ParseResult<Statement> {
        let name = self.expect_peek_identifier()?;

        self.expect_peek(TokenKind::Assign)?;
        self.next_token();

        let value = self.parse_expression(Precedence::Lowest)?;
        self.skip_optional_semicolon();

        Ok(Statement::Let { name, value })
    }

    fn parse_return_statement(&mut self) -> ParseResult<Statement> {
        // Consume the `return` token
        self.next_token();

        let value = self.parse_expression(Precedence::Lowest)?;
        self.skip_optional_semicolon();

        Ok(Statement::Return { value })
    }

    fn parse_expression_statement(&mut self) -> ParseResult<Statement> {
        let expression = self.parse_expression(Precedence::Lowest)?;
        self.skip_optional_semicolon();

        Ok(Statement::Expression { expression })
    }

    /// Expects the current token to be `{`; leaves the current token on the closing `}`.
    fn parse_block_statement(&mut self) -> ParseResult<BlockStatement> {
        let mut statements = Vec::new();

        self.next_token();

        while !self.current_token_is(TokenKind::RightBrace) {
            if self.current_token_is(TokenKind::Eof) {
                return Err(ParseError::Expected {
                    expected: TokenKind::RightBrace,
                    got: TokenKind::Eof,
                    span: self.current_token.span,
                });
            }

            statements.push(self.parse_statement()?);
            self.next_token();
        }

        Ok(BlockStatement { statements })
    }

    fn parse_expression(&mut self, precedence: Precedence) -> ParseResult<Expression> {
        let mut left = self.parse_prefix()?;

        while !self.peek_token_is(TokenKind::Semicolon) && precedence < self.peek_precedence() {
            left = match self.peek_token.kind {
                TokenKind::LeftParen => {
                    self.next_token();
                    self.parse_call_expression(left)?
                }
                kind => match InfixOperator::from_token(kind) {
                    Some(operator) => {
                        self.next_token();
                        self.parse_infix_expression(operator, left)?
                    }
                    None => return Ok(left),
                },
            };
        }

        Ok(left)
    }

    /// Dispatch on the current token to the matching prefix parse function.
    fn parse_prefix(&mut self) -> ParseResult<Expression> {
        match self.current_token.kind {
            TokenKind::Ident => Ok(Expression::Identifier(Identifier::from(
                self.current_token.literal.clone(),
            ))),
            TokenKind::Int => self.parse_integer_literal(),
            TokenKind::String => Ok(Expression::String(self.current_token.literal.clone())),
            TokenKind::True | TokenKind::False => Ok(Expression::Boolean(
                self.current_token_is(TokenKind::True),
            )),
            TokenKind::Bang | TokenKind::Minus => self.parse_prefix_expression(),
            TokenKind::LeftParen => self.parse_grouped_expression(),
            TokenKind::If => self.parse_if_expression(),
            TokenKind::Function => self.parse_function_literal(),
            kind => Err(ParseError::NoPrefixParseFn {
                kind,
                span: self.current_token.span,
            }),
        }
    }

    fn parse_integer_literal(&mut self) -> ParseResult<Expression> {
        match self.current_token.literal.parse::<i64>() {
            Ok(value) => Ok(Expression::Integer(value)),
            Err(_) => Err(ParseError::InvalidInteger {
                literal: self.current_token.literal.clone(),
                span: self.current_token.span,
            }),
        }
    }

    fn parse_prefix_expression(&mut self) -> ParseResult<Expression> {
        let operator = match PrefixOperator::from_token(self.current_token.kind) {
            Some(operator) => operator,
            None => {
                return Err(ParseError::NoPrefixParseFn {
                    kind: self.current_token.kind,
                    span: self.current_token.span,
                })
            }
        };

        self.next_token();

        let right = self.parse_expression(Precedence::Prefix)?;

        Ok(Expression::Prefix(Box::new(PrefixExpression {
            operator,
            right,
        })))
    }

    fn parse_infix_expression(
        &mut self,
        operator: InfixOperator,
        left: Expression,
    ) -> ParseResult<Expression> {
        let precedence = self.current_precedence();
        self.next_token();

        let right = self.parse_expression(precedence)?;

        Ok(Expression::Infix(Box::new(InfixExpression {
            left,
            operator,
            right,
        })))
    }

    fn parse_grouped_expression(&mut self) -> ParseResult<Expression> {
        self.next_token();

        let expression = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(TokenKind::RightParen)?;

        Ok(expression)
    }

    fn parse_if_expression(&mut self) -> ParseResult<Expression> {
        self.expect_peek(TokenKind::LeftParen)?;
        self.next_token();

        let condition = self.parse_expression(Precedence::Lowest)?;

        self.expect_peek(TokenKind::RightParen)?;
        self.expect_peek(TokenKind::LeftBrace)?;

        let consequence = self.parse_block_statement()?;

        let alternative = if self.peek_token_is(TokenKind::Else) {
            self.next_token();
            self.expect_peek(TokenKind::LeftBrace)?;
            Some(self.parse_block_statement()?)
        } else {
            None
        };

        Ok(Expression::If(Box::new(IfExpression {
            condition,
            consequence,
            alternative,
        })))
    }

    fn parse_function_literal(&mut self) -> ParseResult<Expression> {
        self.expect_peek(TokenKind::LeftParen)?;

        let parameters = self.parse_function_parameters()?;

        self.expect_peek(TokenKind::LeftBrace)?;

        let body = self.parse_block_statement()?;

        Ok(Expression::Function(Box::new(FunctionLiteral {
            parameters,
            body: Rc::new(body),
        })))
    }

    /// Expects the current token to be `(`; leaves the current token on `)`.
    fn parse_function_parameters(&mut self) -> ParseResult<Vec<Identifier>> {
        let mut parameters = Vec::new();

        if self.peek_token_is(TokenKind::RightParen) {
            self.next_token();
            return Ok(parameters);
        }

        parameters.push(self.expect_peek_identifier()?);

        while self.peek_token_is(TokenKind::Comma) {
            self.next_token();
            parameters.push(self.expect_peek_identifier()?);
        }

        self.expect_peek(TokenKind::RightParen)?;

        Ok(parameters)
    }

    fn parse_call_expression(&mut self, function: Expression) -> ParseResult<Expression> {
        let arguments = self.parse_call_arguments()?;

        Ok(Expression::Call(Box::new(CallExpression {
            function,
            arguments,
        })))
    }

    /// Expects the current token to be `(`; leaves the current token on `)`.
    fn parse_call_arguments(&mut self) -> ParseResult<Vec<Expression>> {
        let mut arguments = Vec::new();

        if self.peek_token_is(TokenKind::RightParen) {
            self.next_token();
            return Ok(arguments);
        }

        self.next_token();
        arguments.push(self.parse_expression(Precedence::Lowest)?);

        while self.peek_token_is(TokenKind::Comma) {
            self.next_token();
            self.next_token();
            arguments.push(self.parse_expression(Precedence::Lowest)?);
        }

        self.expect_peek(TokenKind::RightParen)?;

        Ok(arguments)
    }

    fn next_token(&mut self) {
        let next = next_or_eof(&mut self.tokens, self.peek_token.span);
        self.current_token = std::mem::replace(&mut self.peek_token, next);
    }

    fn skip_optional_semicolon(&mut self) {
        if self.peek_token_is(TokenKind::Semicolon) {
            self.next_token();
        }
    }

    fn current_token_is(&self, kind: TokenKind) -> bool {
        self.current_token.is(kind)
    }

    fn peek_token_is(&self, kind: TokenKind) -> bool {
        self.peek_token.is(kind)
    }

    fn current_precedence(&self) -> Precedence {
        Precedence::of(self.current_token.kind)
    }

    fn peek_precedence(&self) -> Precedence {
        Precedence::of(self.peek_token.kind)
    }

    fn expect_peek(&mut self, kind: TokenKind) -> ParseResult<()> {
        if self.peek_token_is(kind) {
            self.next_token();
            Ok(())
        } else {
            Err(self.peek_error(kind))
        }
    }

    fn expect_peek_identifier(&mut self) -> ParseResult<Identifier> {
        if !self.peek_token_is(TokenKind::Ident) {
            return Err(self.peek_error(TokenKind::Ident));
        }

        self.next_token();
        Ok(Identifier::from(self.current_token.literal.clone()))
    }

    fn peek_error(&self, expected: TokenKind) -> ParseError {
        ParseError::Expected {
            expected,
            got: self.peek_token.kind,
            span: self.peek_token.span,
        }
    }
}

/// Pull the next token, standing in an EOF right after `last` once the source runs dry.
fn next_or_eof<T: Iterator<Item = Token>>(tokens: &mut T, last: Span) -> Token {
    match tokens.next() {
        Some(token) => token,
        None => Token::eof(last.end_point()),
    }
}
