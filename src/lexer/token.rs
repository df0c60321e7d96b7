#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TokenType {
    Unknown, // For invalid or unrecognized characters

    // --- Keywords ---
    If,    // if
    Else,  // else
    Print, // print
    Input, // input
    While, // while
    Exit,  // exit
    Var,   // var

    // --- Literals ---
    Number,
    String,

    // --- Identifier ---
    Identifier,

    // --- Operators ---
    Operator, // + - * / , > < ==
    Eq,       // = (assignment, distinct from the == operator)

    // --- Delimiters & Punctuation ---
    OpenParen,  // (
    CloseParen, // )
    OpenBrace,  // {
    CloseBrace, // }
    Semi,       // ;

    // --- Trivia & Terminator ---
    Comment, // // ... (kept as a token so it survives into the output)
    Eof,     // synthetic end-of-input marker, always last
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token<'a> {
    pub kind: TokenType,
    pub text: &'a str,
    pub offset: usize,
    pub line: usize,
}

/// Keyword lookup. Exact, case-sensitive matches only: `If` or `WHILE`
/// are ordinary identifiers.
pub fn keyword_kind(word: &str) -> Option<TokenType> {
    match word {
        "if" => Some(TokenType::If),
        "else" => Some(TokenType::Else),
        "print" => Some(TokenType::Print),
        "input" => Some(TokenType::Input),
        "while" => Some(TokenType::While),
        "exit" => Some(TokenType::Exit),
        "var" => Some(TokenType::Var),
        _ => None,
    }
}
