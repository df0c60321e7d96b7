use crate::lexer::token::TokenType;
use crate::parser::ast::AstNode;
use crate::parser::{ParseError, ParseResult, Parser};

impl<'a> Parser<'a> {
    /// Syntax:
    ///   - `if (cond) { ... }`
    ///   - `if (cond) { ... } else { ... }`
    pub fn parse_if_stmt(&mut self) -> ParseResult<AstNode> {
        self.expect(TokenType::If, "'if'")?;
        self.expect(TokenType::OpenParen, "'(' after 'if'")?;
        let condition = self.parse_expression()?;
        self.expect(TokenType::CloseParen, "')' after if condition")?;

        let then_body = self.parse_braced_block("if", "'{' after if condition")?;

        // Optional else branch; always a braced block, never `else if`
        let mut else_body = None;
        if self.peek_is(TokenType::Else) {
            self.advance();
            else_body = Some(self.parse_braced_block("else", "'{' after 'else'")?);
        }

        // The whole construct may carry one trailing terminator
        self.consume_if(TokenType::Semi);

        Ok(AstNode::If {
            condition: Box::new(condition),
            then_body,
            else_body,
        })
    }

    /// Syntax: `while (cond) { ... }`
    pub fn parse_while_stmt(&mut self) -> ParseResult<AstNode> {
        self.expect(TokenType::While, "'while'")?;
        self.expect(TokenType::OpenParen, "'(' after 'while'")?;
        let condition = self.parse_expression()?;
        self.expect(TokenType::CloseParen, "')' after while condition")?;

        let body = self.parse_braced_block("while", "'{' after while condition")?;
        self.consume_if(TokenType::Semi);

        Ok(AstNode::While {
            condition: Box::new(condition),
            body,
        })
    }

    /// Syntax: `print expr` or `print expr;`
    pub fn parse_print(&mut self) -> ParseResult<AstNode> {
        self.expect(TokenType::Print, "'print'")?;
        let value = self.parse_expression()?;
        // One more terminator is allowed beyond the one the expression ate
        self.consume_if(TokenType::Semi);
        Ok(AstNode::Print {
            value: Box::new(value),
        })
    }

    /// A comment is a statement of its own so it can come out the other
    /// side as a REM line.
    pub fn parse_comment(&mut self) -> ParseResult<AstNode> {
        let tok = self.expect(TokenType::Comment, "a comment")?;
        Ok(AstNode::Comment(tok.text.to_string()))
    }

    /// Syntax: `exit` or `exit;`
    pub fn parse_exit(&mut self) -> ParseResult<AstNode> {
        self.expect(TokenType::Exit, "'exit'")?;
        self.consume_if(TokenType::Semi);
        Ok(AstNode::Exit)
    }

    /// Both `name = input("prompt")` and `name = expr` start with an
    /// identifier; which one it is only becomes clear after the '='.
    pub fn parse_input_or_assignment(&mut self) -> ParseResult<AstNode> {
        let target = self.parse_expression()?;
        self.expect(TokenType::Eq, "'=' after identifier")?;

        if self.consume_if(TokenType::Input) {
            self.expect(TokenType::OpenParen, "'(' after 'input'")?;
            if !self.peek_is(TokenType::String) {
                return Err(ParseError::unexpected("a string prompt", self.peek()));
            }
            let prompt = self.parse_expression()?;
            self.expect(TokenType::CloseParen, "')' after input prompt")?;
            self.consume_if(TokenType::Semi);

            return Ok(AstNode::Input {
                prompt: Box::new(prompt),
                target: Box::new(target),
            });
        }

        let value = self.parse_expression()?;
        self.consume_if(TokenType::Semi);
        Ok(AstNode::Assignment {
            target: Box::new(target),
            value: Box::new(value),
        })
    }

    /// A `{ stmt* }` body. Statements inside may be separated by optional
    /// semicolons. Hitting end of input with the brace still open is an
    /// UnterminatedBlock naming the construct.
    pub(crate) fn parse_braced_block(
        &mut self,
        construct: &'static str,
        expected_open: &str,
    ) -> ParseResult<Vec<AstNode>> {
        let open_line = self.expect(TokenType::OpenBrace, expected_open)?.line;

        let mut stmts = Vec::new();
        loop {
            match self.peek() {
                Some(tok) if tok.kind == TokenType::CloseBrace => break,
                Some(tok) if tok.kind != TokenType::Eof => {
                    stmts.push(self.parse_statement()?);
                    self.consume_if(TokenType::Semi);
                }
                _ => {
                    return Err(ParseError::UnterminatedBlock {
                        construct,
                        line: open_line,
                    })
                }
            }
        }
        self.advance(); // consume '}'
        Ok(stmts)
    }
}
