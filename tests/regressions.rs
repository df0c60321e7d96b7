use js2bas::lexer::lexer::lex;
use js2bas::parser::ParseError;
use js2bas::transpile_source;

#[test]
fn regression_no_token_ceiling_on_large_programs() {
    // early revisions capped the token stream at 4096 entries
    let mut input = String::new();
    for i in 0..4000 {
        input.push_str(&format!("print {}\n", i));
    }
    let tokens = lex(&input);
    assert_eq!(tokens.len(), 4000 * 2 + 1);

    let output = transpile_source(&input).unwrap();
    assert_eq!(output.lines().count(), 4000);
    assert!(output.starts_with("PRINT 0\n"));
    assert!(output.ends_with("PRINT 3999\n"));
}

#[test]
fn regression_crlf_source_parses() {
    let output = transpile_source("var x = 1;\r\nprint x\r\n").unwrap();
    assert_eq!(output, "DIM x AS INTEGER\nPRINT x\n");
}

#[test]
fn regression_crlf_counts_both_line_ending_bytes() {
    // a CRLF pair advances the line counter twice
    match transpile_source("print a\r\nprint ;") {
        Err(ParseError::UnexpectedToken { found, line, .. }) => {
            assert_eq!(found.as_deref(), Some(";"));
            assert_eq!(line, 3);
        }
        other => panic!("Expected UnexpectedToken, got {:?}", other),
    }
}

#[test]
fn regression_unterminated_string_reaches_end_of_input() {
    // the string token runs to end of input and comes out re-quoted
    let output = transpile_source("print \"abc").unwrap();
    assert_eq!(output, "PRINT \"abc\"\n");
}

#[test]
fn regression_unterminated_string_swallows_block_close() {
    // the runaway string eats the `}`, so the block never closes
    match transpile_source("if (a == 1) { print \"oops; }") {
        Err(ParseError::UnterminatedBlock { construct, line }) => {
            assert_eq!(construct, "if");
            assert_eq!(line, 1);
        }
        other => panic!("Expected UnterminatedBlock, got {:?}", other),
    }
}

#[test]
fn regression_empty_else_emits_no_else_line() {
    let output = transpile_source("if (a == 1) { print a; } else { }").unwrap();
    assert_eq!(output, "IF a = 1 THEN\n\tPRINT a\nEND IF\n");
}

#[test]
fn regression_deeply_nested_blocks() {
    let mut input = String::new();
    for _ in 0..64 {
        input.push_str("if (a == 1) { ");
    }
    input.push_str("print a;");
    for _ in 0..64 {
        input.push_str(" }");
    }

    let output = transpile_source(&input).unwrap();
    assert!(output.contains(&format!("\n{}PRINT a\n", "\t".repeat(64))));
    assert_eq!(output.matches("END IF").count(), 64);
}

#[test]
fn regression_statements_without_semicolons() {
    let output = transpile_source("var a = 1\nprint a\nexit").unwrap();
    assert_eq!(output, "DIM a AS INTEGER\nPRINT a\nEND\n");
}

#[test]
fn regression_doubled_semicolons_are_accepted() {
    assert_eq!(transpile_source("x = 5;;").unwrap(), "x = 5\n");
    assert_eq!(transpile_source("print a;;").unwrap(), "PRINT a\n");
}

#[test]
fn regression_number_literals_pass_through() {
    // digit runs are not normalized
    let output = transpile_source("print 007").unwrap();
    assert_eq!(output, "PRINT 007\n");
}

#[test]
fn regression_comma_is_an_ordinary_operator() {
    let output = transpile_source("print a , 1").unwrap();
    assert_eq!(output, "PRINT a , 1\n");
}

#[test]
fn regression_comment_at_end_of_input() {
    let output = transpile_source("print a\n// done").unwrap();
    assert_eq!(output, "PRINT a\nREM  done\n");
}

#[test]
fn regression_late_error_discards_earlier_statements() {
    let result = transpile_source("var a = 1;\nprint a\na = a + 1;\nwhile (a { }");
    assert!(result.is_err());
}

#[test]
fn regression_form_feed_is_rejected_not_skipped() {
    let result = transpile_source("\x0Cprint 1");
    assert!(result.is_err());
}
