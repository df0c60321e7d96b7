use crate::lexer::token::{Token, TokenType};
use crate::parser::ast::AstNode;
use std::fmt;

/// A parse failure. The first one is final: the caller must abandon the
/// whole compilation unit rather than resynchronize and continue.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    /// The grammar needed one thing and the stream held another.
    /// `found` is the offending lexeme, or None at end of input.
    UnexpectedToken {
        expected: String,
        found: Option<String>,
        line: usize,
    },
    /// End of input arrived while a `{ ... }` body was still open.
    /// `line` is where the block was opened.
    UnterminatedBlock {
        construct: &'static str,
        line: usize,
    },
    /// A `var` declaration's value must start with a number or string
    /// literal; that literal is all the DIM type is inferred from.
    InvalidLiteralInDeclaration {
        found: Option<String>,
        line: usize,
    },
}

impl ParseError {
    pub(crate) fn unexpected(expected: &str, found: Option<&Token>) -> ParseError {
        let (found, line) = describe(found);
        ParseError::UnexpectedToken {
            expected: expected.to_string(),
            found,
            line,
        }
    }

    pub(crate) fn invalid_literal(found: Option<&Token>) -> ParseError {
        let (found, line) = describe(found);
        ParseError::InvalidLiteralInDeclaration { found, line }
    }
}

/// Lexeme and line for an error, with the synthetic Eof token folded into
/// the end-of-input case.
fn describe(token: Option<&Token>) -> (Option<String>, usize) {
    match token {
        Some(tok) if tok.kind != TokenType::Eof => (Some(tok.text.to_string()), tok.line),
        Some(tok) => (None, tok.line),
        None => (None, 0),
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::UnexpectedToken {
                expected,
                found: Some(found),
                line,
            } => write!(f, "expected {}, found '{}' (line {})", expected, found, line),
            ParseError::UnexpectedToken {
                expected,
                found: None,
                ..
            } => write!(f, "expected {}, found end of input", expected),
            ParseError::UnterminatedBlock { construct, line } => write!(
                f,
                "unterminated {} block opened on line {}: reached end of input before '}}'",
                construct, line
            ),
            ParseError::InvalidLiteralInDeclaration {
                found: Some(found),
                line,
            } => write!(
                f,
                "expected a number or string literal in var declaration, found '{}' (line {})",
                found, line
            ),
            ParseError::InvalidLiteralInDeclaration { found: None, .. } => write!(
                f,
                "expected a number or string literal in var declaration, found end of input"
            ),
        }
    }
}

pub type ParseResult<T> = Result<T, ParseError>;

pub struct Parser<'a> {
    tokens: &'a [Token<'a>],
    current: usize,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token<'a>]) -> Self {
        Parser { tokens, current: 0 }
    }

    pub(crate) fn peek(&self) -> Option<&Token<'a>> {
        self.tokens.get(self.current)
    }

    pub(crate) fn advance(&mut self) -> Option<&Token<'a>> {
        let tok = self.tokens.get(self.current);
        if tok.is_some() {
            self.current += 1;
        }
        tok
    }

    pub(crate) fn peek_is(&self, kind: TokenType) -> bool {
        self.peek().map_or(false, |tok| tok.kind == kind)
    }

    /// Consumes the next token when it has the given kind.
    pub(crate) fn consume_if(&mut self, kind: TokenType) -> bool {
        if self.peek_is(kind) {
            self.current += 1;
            true
        } else {
            false
        }
    }

    /// Consumes the next token, requiring the given kind. `expected` names
    /// what the construct needed, e.g. `')' after if condition`.
    pub(crate) fn expect(&mut self, kind: TokenType, expected: &str) -> ParseResult<&Token<'a>> {
        match self.advance() {
            Some(tok) if tok.kind == kind => Ok(tok),
            other => Err(ParseError::unexpected(expected, other)),
        }
    }

    /// True once the cursor sits on the terminal Eof token.
    pub fn at_eof(&self) -> bool {
        self.peek().map_or(true, |tok| tok.kind == TokenType::Eof)
    }

    /// Parses exactly one statement. On success the cursor has moved past
    /// everything consumed; on failure its position is unspecified.
    pub fn parse_statement(&mut self) -> ParseResult<AstNode> {
        match self.peek() {
            Some(tok) => match tok.kind {
                TokenType::If => self.parse_if_stmt(),
                TokenType::Var => self.parse_var_decl(),
                TokenType::While => self.parse_while_stmt(),
                TokenType::Comment => self.parse_comment(),
                TokenType::Exit => self.parse_exit(),
                TokenType::Identifier => self.parse_input_or_assignment(),
                TokenType::Print => self.parse_print(),
                _ => self.parse_expression(),
            },
            None => Err(ParseError::unexpected("a statement", None)),
        }
    }
}
