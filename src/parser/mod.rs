pub mod ast;
pub mod declarations;
pub mod expressions;
pub mod parser;
pub mod statements;

pub use ast::AstNode;
pub use parser::{ParseError, ParseResult, Parser};
