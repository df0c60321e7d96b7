// This file contains the main transpilation pipeline for the bas CLI.
// It lexes the source, then alternates parsing and code generation one
// top-level statement at a time until end of input, and finally writes
// the accumulated GW-BASIC text to a .bas file (or stdout).

use crate::codegen::generate;
use crate::diagnostics::print_parse_error_with_source;
use crate::lexer::lexer::lex;
use crate::parser::{ParseError, Parser};
use std::fs;
use std::path::PathBuf;

/// Options for controlling the transpilation process.
/// These are set by the CLI and control input/output, debug, and run mode.
pub struct CompileOptions {
    /// Path to the user's project or main.js file
    pub input_path: PathBuf,
    /// Name of the output file (no extension)
    pub output_name: String,
    /// Enable developer mode (prints extra debug info)
    pub dev_mode: bool,
    /// Print the token stream after lexing
    pub print_tokens: bool,
    /// Print each statement's AST after parsing
    pub print_ast: bool,
    /// Write the generated BASIC to stdout instead of a file
    pub emit_stdout: bool,
    /// Only check for errors, do not write output
    pub check_only: bool,
}

impl Default for CompileOptions {
    /// Provides default options for transpilation.
    fn default() -> Self {
        Self {
            input_path: PathBuf::from("."),
            output_name: "output".to_string(),
            dev_mode: cfg!(debug_assertions),
            print_tokens: false,
            print_ast: false,
            emit_stdout: false,
            check_only: false,
        }
    }
}

/// Result of a transpilation, including success and error count.
pub struct CompileResult {
    pub success: bool,
    pub error_count: usize,
    /// Path to the generated .bas file (if one was written)
    pub out_path: Option<PathBuf>,
}

/// Transpiles a source string to GW-BASIC text.
///
/// Statements are parsed and rendered one at a time; each statement's tree
/// is dropped before the next one is parsed, and each contributes its text
/// plus one newline to the output. The first parse error aborts the whole
/// unit with no partial output.
pub fn transpile_source(source: &str) -> Result<String, ParseError> {
    transpile_with_dump(source, false, false)
}

fn transpile_with_dump(
    source: &str,
    print_tokens: bool,
    print_ast: bool,
) -> Result<String, ParseError> {
    let tokens = lex(source);
    if print_tokens {
        println!("\n=== TOKENS ===\n{:#?}", tokens);
    }

    let mut parser = Parser::new(&tokens);
    let mut output = String::new();
    while !parser.at_eof() {
        let stmt = parser.parse_statement()?;
        if print_ast {
            println!("\n=== AST ===\n{:#?}", stmt);
        }
        output.push_str(&generate(&stmt, 0));
        output.push('\n');
    }
    Ok(output)
}

/// The main entry point for transpiling a user project.
/// This function orchestrates the entire pipeline:
/// 1. Loads the user's source file
/// 2. Lexes, parses, and generates BASIC text statement by statement
/// 3. Writes the result to `<output_name>.bas` (or stdout)
/// Returns a CompileResult indicating success or error count.
pub fn compile_project(opts: CompileOptions) -> Result<CompileResult, String> {
    // === 1. Find and load main.js ===
    let input_path = if opts.input_path.is_file() {
        opts.input_path.clone()
    } else {
        let main_file = opts.input_path.join("main.js");
        if !main_file.exists() {
            return Err(format!(
                "Error: main.js not found in {}",
                opts.input_path.display()
            ));
        }
        main_file
    };

    // === 2. Read source code ===
    let input = fs::read_to_string(&input_path)
        .map_err(|e| format!("Failed to read {}: {}", input_path.display(), e))?;

    // === 3. Lexing, parsing and code generation ===
    let output = match transpile_with_dump(&input, opts.print_tokens, opts.print_ast) {
        Ok(output) => output,
        Err(e) => {
            print_parse_error_with_source(&e, &input, &input_path.display().to_string());
            if opts.dev_mode {
                println!("\nFound a parse error, skipping output");
            }
            return Ok(CompileResult {
                success: false,
                error_count: 1,
                out_path: None,
            });
        }
    };

    // Only check mode: no output is written
    if opts.check_only {
        return Ok(CompileResult {
            success: true,
            error_count: 0,
            out_path: None,
        });
    }

    if opts.emit_stdout {
        print!("{}", output);
        return Ok(CompileResult {
            success: true,
            error_count: 0,
            out_path: None,
        });
    }

    // === 4. Write the generated BASIC source ===
    let out_file = format!("{}.bas", opts.output_name);
    fs::write(&out_file, &output).map_err(|e| format!("Failed to write {}: {}", out_file, e))?;

    println!("✓ BASIC file created: {}", out_file);

    Ok(CompileResult {
        success: true,
        error_count: 0,
        out_path: Some(PathBuf::from(out_file)),
    })
}
