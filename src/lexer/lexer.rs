use crate::lexer::token::{keyword_kind, Token, TokenType};

/// Scans the whole input in one left-to-right pass.
///
/// Lexing never fails: anything unrecognized becomes an `Unknown` token for
/// the parser to reject, which keeps all error reporting in one place. The
/// returned sequence always ends with exactly one `Eof` token.
pub fn lex(input: &str) -> Vec<Token<'_>> {
    let bytes = input.as_bytes();
    let mut tokens: Vec<Token> = Vec::new();

    let mut i = 0;
    let mut line: usize = 1;
    while i < bytes.len() {
        let c = bytes[i];

        // Whitespace is exactly space, tab and the two line-ending bytes;
        // any other control byte lexes as a token. Line breaks only count
        // here, so a string or comment spanning a newline does not move
        // the counter
        if matches!(c, b' ' | b'\t' | b'\r' | b'\n') {
            if c == b'\n' || c == b'\r' {
                line += 1;
            }
            i += 1;
            continue;
        }

        // Numbers: plain digit runs, no sign, no decimal point
        if c.is_ascii_digit() {
            let start = i;
            while i < bytes.len() && bytes[i].is_ascii_digit() {
                i += 1;
            }
            tokens.push(Token {
                kind: TokenType::Number,
                text: &input[start..i],
                offset: start,
                line,
            });
            continue;
        }

        // Keywords or identifiers
        if c.is_ascii_alphabetic() || c == b'_' {
            let start = i;
            while i < bytes.len() && (bytes[i].is_ascii_alphanumeric() || bytes[i] == b'_') {
                i += 1;
            }
            let word = &input[start..i];
            tokens.push(Token {
                kind: keyword_kind(word).unwrap_or(TokenType::Identifier),
                text: word,
                offset: start,
                line,
            });
            continue;
        }

        // `==` must win over the single `=` branch below
        if c == b'=' && i + 1 < bytes.len() && bytes[i + 1] == b'=' {
            tokens.push(Token {
                kind: TokenType::Operator,
                text: &input[i..i + 2],
                offset: i,
                line,
            });
            i += 2;
            continue;
        }

        // Comments: `//` up to (not including) the line terminator
        if c == b'/' && i + 1 < bytes.len() && bytes[i + 1] == b'/' {
            let start = i;
            i += 2;
            let text_start = i;
            while i < bytes.len() && bytes[i] != b'\n' && bytes[i] != b'\r' {
                i += 1;
            }
            tokens.push(Token {
                kind: TokenType::Comment,
                text: &input[text_start..i],
                offset: start,
                line,
            });
            continue;
        }

        // String literals: no escapes; both quotes are excluded from the
        // token text; an unterminated string runs to end of input
        if c == b'"' {
            let start = i;
            i += 1;
            let text_start = i;
            while i < bytes.len() && bytes[i] != b'"' {
                i += 1;
            }
            let text = &input[text_start..i];
            if i < bytes.len() {
                i += 1; // closing quote
            }
            tokens.push(Token {
                kind: TokenType::String,
                text,
                offset: start,
                line,
            });
            continue;
        }

        // Single-character operators and punctuation
        let kind = match c {
            b'+' | b'-' | b'*' | b'/' | b',' | b'>' | b'<' => Some(TokenType::Operator),
            b'=' => Some(TokenType::Eq),
            b';' => Some(TokenType::Semi),
            b'(' => Some(TokenType::OpenParen),
            b')' => Some(TokenType::CloseParen),
            b'{' => Some(TokenType::OpenBrace),
            b'}' => Some(TokenType::CloseBrace),
            _ => None,
        };
        if let Some(kind) = kind {
            tokens.push(Token {
                kind,
                text: &input[i..i + 1],
                offset: i,
                line,
            });
            i += 1;
            continue;
        }

        // Anything else degrades to one Unknown token per character
        let len = input[i..].chars().next().map_or(1, char::len_utf8);
        tokens.push(Token {
            kind: TokenType::Unknown,
            text: &input[i..i + len],
            offset: i,
            line,
        });
        i += len;
    }

    tokens.push(Token {
        kind: TokenType::Eof,
        text: "",
        offset: input.len(),
        line,
    });
    tokens
}
