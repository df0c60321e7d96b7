// JS-to-BASIC Transpiler Library
// Exports all transpiler modules for testing and external use

pub mod cli;
pub mod codegen;
pub mod compiler;
pub mod diagnostics;
pub mod lexer;
pub mod parser;

// Re-export commonly used types
pub use codegen::generate;
pub use compiler::{compile_project, transpile_source, CompileOptions, CompileResult};
pub use lexer::lexer::lex;
pub use lexer::token::{Token, TokenType};
pub use parser::{AstNode, ParseError, Parser};
