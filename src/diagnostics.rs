// Centralized diagnostics and error formatting for the transpiler.
// Provides colorized output, per-variant error codes, and source snippet
// rendering with a caret under the offending lexeme.

use crate::parser::ParseError;

/// Color helpers for terminal output (ANSI escape codes).
fn color_bold_red(s: &str) -> String {
    format!("\x1b[1;31m{}\x1b[0m", s)
}
fn color_bold_green(s: &str) -> String {
    format!("\x1b[1;32m{}\x1b[0m", s)
}
fn color_bold_cyan(s: &str) -> String {
    format!("\x1b[1;36m{}\x1b[0m", s)
}
fn color_dim(s: &str) -> String {
    format!("\x1b[2m{}\x1b[0m", s)
}
fn color_gray(s: &str) -> String {
    format!("\x1b[90m{}\x1b[0m", s)
}

/// Stable error code for each parse error variant.
fn error_code(err: &ParseError) -> &'static str {
    match err {
        ParseError::UnexpectedToken { .. } => "error[E2001]",
        ParseError::UnterminatedBlock { .. } => "error[E2002]",
        ParseError::InvalidLiteralInDeclaration { .. } => "error[E2003]",
    }
}

/// Source line the error points at; 0 when no position is known.
fn error_line(err: &ParseError) -> usize {
    match err {
        ParseError::UnexpectedToken { line, .. } => *line,
        ParseError::UnterminatedBlock { line, .. } => *line,
        ParseError::InvalidLiteralInDeclaration { line, .. } => *line,
    }
}

/// The lexeme to highlight on that line, when the error carries one.
/// An unterminated block points back at the `{` that opened it.
fn error_lexeme(err: &ParseError) -> Option<&str> {
    match err {
        ParseError::UnexpectedToken { found, .. } => found.as_deref(),
        ParseError::UnterminatedBlock { .. } => Some("{"),
        ParseError::InvalidLiteralInDeclaration { found, .. } => found.as_deref(),
    }
}

/// Renders a source code snippet with a highlighted caret at the error
/// location. The lexeme is located by searching the reported line.
fn render_source_snippet(source: &str, line: usize, lexeme: Option<&str>) {
    // 1-based line expected; 0 means end of input with no position
    if line == 0 {
        return;
    }
    let src_line = match source.lines().nth(line - 1) {
        Some(l) => l,
        None => return,
    };
    let gutter = format!("{:>4} {} ", line, color_gray("|"));

    let found = lexeme
        .filter(|lex| !lex.is_empty())
        .and_then(|lex| src_line.find(lex).map(|at| (at, lex.len())));
    match found {
        Some((at, len)) => {
            let highlighted = format!(
                "{}{}{}",
                &src_line[..at],
                color_bold_cyan(&src_line[at..at + len]),
                &src_line[at + len..]
            );
            eprintln!("{}{}", gutter, highlighted);
            // gutter is 7 columns wide: 4 digits, space, '|', space
            let caret_col = src_line[..at].chars().count();
            eprintln!("{}{}", " ".repeat(7 + caret_col), color_bold_red("^"));
        }
        None => {
            eprintln!("{}{}", gutter, src_line);
        }
    }
}

/// Colorizes "expected X, found Y" messages for readability.
fn colorize_message(msg: &str) -> String {
    if let Some(exp_idx) = msg.find("expected ") {
        if let Some(found_idx) = msg.find(", found ") {
            let before = &msg[..exp_idx + 9];
            let expected = &msg[exp_idx + 9..found_idx];
            let found = &msg[found_idx + 8..];
            return format!(
                "{}{}, {}{}",
                before,
                color_bold_green(expected.trim()),
                "found ",
                color_bold_red(found.trim())
            );
        }
    }
    msg.to_string()
}

/// Prints a parse error with its code, location, message, and a source
/// snippet with a caret under the offending lexeme.
pub fn print_parse_error_with_source(err: &ParseError, source: &str, filename: &str) {
    let line = error_line(err);
    let loc = format!("{}:{}", filename, line);
    eprintln!("{} {}", color_bold_red(error_code(err)), color_dim(&loc));
    eprintln!("{}", colorize_message(&err.to_string()));
    render_source_snippet(source, line, error_lexeme(err));
    eprintln!();
}
