use crate::lexer::token::TokenType;
use crate::parser::ast::AstNode;
use crate::parser::{ParseError, ParseResult, Parser};

impl<'a> Parser<'a> {
    /// One primary term (number, string or identifier), optionally extended
    /// by an operator into a chain. Chains are right-associative and know no
    /// precedence: `1 + 2 * 3` parses as `1 + (2 * 3)` purely because the
    /// right side is read as a whole expression.
    pub fn parse_expression(&mut self) -> ParseResult<AstNode> {
        let left = match self.peek() {
            Some(tok) => match tok.kind {
                TokenType::Number => {
                    let tok = self.advance().unwrap();
                    AstNode::NumberLiteral(tok.text.to_string())
                }
                TokenType::String => {
                    let tok = self.advance().unwrap();
                    AstNode::StringLiteral(tok.text.to_string())
                }
                TokenType::Identifier => {
                    let tok = self.advance().unwrap();
                    AstNode::Identifier(tok.text.to_string())
                }
                _ => {
                    return Err(ParseError::unexpected(
                        "a number, string or identifier",
                        Some(tok),
                    ))
                }
            },
            None => {
                return Err(ParseError::unexpected(
                    "a number, string or identifier",
                    None,
                ))
            }
        };

        // An operator extends the term into a right-leaning chain
        if self.peek_is(TokenType::Operator) {
            let op = self.advance().unwrap().text.to_string();
            let right = self.parse_expression()?;
            return Ok(AstNode::BinaryOp {
                left: Box::new(left),
                op,
                right: Box::new(right),
            });
        }

        // A statement terminator is eaten here, on the no-operator path, so
        // in a chain only the innermost call sees it
        self.consume_if(TokenType::Semi);

        Ok(left)
    }
}
