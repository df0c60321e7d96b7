use crate::lexer::token::TokenType;
use crate::parser::ast::AstNode;
use crate::parser::{ParseError, ParseResult, Parser};

impl<'a> Parser<'a> {
    /// Syntax: `var name = 42;` / `var name = "text";`
    ///
    /// The '=' is decorative and may be omitted. The declared value must
    /// start with a number or string literal: BASIC wants a type on the DIM
    /// line, and that first literal is the only thing it is inferred from.
    pub fn parse_var_decl(&mut self) -> ParseResult<AstNode> {
        self.expect(TokenType::Var, "'var'")?;

        let name_tok = self.expect(TokenType::Identifier, "an identifier after 'var'")?;
        let name = AstNode::Identifier(name_tok.text.to_string());

        self.consume_if(TokenType::Eq);

        match self.peek() {
            Some(tok) if tok.kind == TokenType::Number || tok.kind == TokenType::String => {}
            other => return Err(ParseError::invalid_literal(other)),
        }
        let value = self.parse_expression()?;

        Ok(AstNode::VarDecl {
            name: Box::new(name),
            value: Box::new(value),
        })
    }
}
