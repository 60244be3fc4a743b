//! Edge case tests for cmptok-lex

use crate::{Token, TokenKind, Tokenizer};

fn lex_all(source: &str) -> Vec<Token> {
    Tokenizer::new(source).collect()
}

fn values(source: &str) -> Vec<String> {
    lex_all(source).into_iter().map(|t| t.value).collect()
}

// ==================== EDGE CASES ====================

#[test]
fn test_edge_empty_source() {
    assert!(lex_all("").is_empty());
}

#[test]
fn test_edge_whitespace_only() {
    assert!(lex_all("   \t\n\r\n  ").is_empty());
}

#[test]
fn test_edge_bare_identifier_produces_nothing() {
    assert!(lex_all("foo").is_empty());
    assert!(lex_all("struct Foo bar_baz").is_empty());
}

#[test]
fn test_edge_at_and_backtick_are_skipped() {
    assert!(lex_all("@`").is_empty());
}

#[test]
fn test_edge_non_ascii_is_skipped() {
    assert_eq!(values("é + ü"), vec!["+"]);
}

#[test]
fn test_edge_non_ascii_inside_string_and_comment() {
    assert_eq!(values("\"héllo\" // ünïcode"), vec!["\"héllo\"", "// ünïcode"]);
}

#[test]
fn test_edge_positions_count_bytes() {
    let t = lex_all("é;");
    assert_eq!(t[0].pos, 2);
}

#[test]
fn test_edge_invalid_utf8_bytes() {
    let t: Vec<Token> = Tokenizer::from_bytes(b"\"\xff\xfe\" \x80;").collect();
    assert_eq!(t.len(), 2);
    assert_eq!(t[0].kind, TokenKind::String);
    assert_eq!(t[0].value, "\"\u{FFFD}\u{FFFD}\"");
    assert_eq!(t[1].value, ";");
}

#[test]
fn test_edge_embedded_nul_ends_input() {
    let t: Vec<Token> = Tokenizer::from_bytes(b"1\0 2").collect();
    assert_eq!(t.len(), 1);
    assert_eq!(t[0].value, "1");
}

#[test]
fn test_edge_nul_inside_string_truncates() {
    let t: Vec<Token> = Tokenizer::from_bytes(b"\"ab\0cd\"").collect();
    assert_eq!(t.len(), 1);
    assert_eq!(t[0].value, "\"ab");
    assert!(t[0].truncated);
}

#[test]
fn test_edge_long_token_is_not_wrapped() {
    let body = "x".repeat(5000);
    let source = format!("\"{}\"", body);
    let t = lex_all(&source);
    assert_eq!(t.len(), 1);
    assert_eq!(t[0].value, source);
}

#[test]
fn test_edge_long_block_comment() {
    let source = format!("/*{}*/", "-".repeat(100_000));
    assert_eq!(values(&source), vec![source.clone()]);
}

#[test]
fn test_edge_newline_never_a_token() {
    let t = lex_all("\n\n\n;");
    assert_eq!(t.len(), 1);
    assert_eq!((t[0].line, t[0].pos), (4, 3));
}

#[test]
fn test_edge_crlf_lines() {
    let t = lex_all("a;\r\nb;");
    assert_eq!(t[1].line, 2);
    assert_eq!(t[1].pos, 5);
}

#[test]
fn test_edge_comment_markers_inside_string() {
    assert_eq!(values("\"// not /* a comment\""), vec!["\"// not /* a comment\""]);
}

#[test]
fn test_edge_quote_inside_comment() {
    assert_eq!(values("/* \" */ 1"), vec!["/* \" */", "1"]);
}

#[test]
fn test_edge_slash_at_end() {
    assert_eq!(values("/"), vec!["/"]);
}

#[test]
fn test_edge_dot_at_end() {
    assert_eq!(values("."), vec!["."]);
}

#[test]
fn test_edge_adjacent_strings() {
    assert_eq!(values("\"a\"\"b\""), vec!["\"a\"", "\"b\""]);
}

#[test]
fn test_edge_char_literal_with_escaped_quote() {
    assert_eq!(values("'\\''"), vec!["'", "\\", "'", "'"]);
}

#[test]
fn test_edge_reserved_kinds_never_produced() {
    let source = "#define X(a) ((a) << 1) \\\n  + 'c' // done\nchar *s = \"s\";";
    for token in lex_all(source) {
        assert!(TokenKind::PRODUCED.contains(&token.kind), "{:?}", token);
    }
}

// ==================== PROPERTIES ====================

#[test]
fn test_property_no_panic_and_full_consumption() {
    use proptest::prelude::*;

    proptest!(|(input in "[ -~\t\n]{0,200}")| {
        let mut tokenizer = Tokenizer::new(&input);
        while tokenizer.next_token().is_some() {}
        prop_assert!(tokenizer.is_done());
        prop_assert_eq!(tokenizer.pos() as usize, input.len());
        prop_assert!(tokenizer.next_token().is_none());
    });
}

#[test]
fn test_property_arbitrary_bytes_do_not_panic() {
    use proptest::prelude::*;

    proptest!(|(input in proptest::collection::vec(any::<u8>(), 0..200))| {
        let consumed = input.iter().position(|&b| b == 0).unwrap_or(input.len());
        let mut tokenizer = Tokenizer::from_bytes(&input);
        while tokenizer.next_token().is_some() {}
        prop_assert_eq!(tokenizer.pos() as usize, consumed);
    });
}

#[test]
fn test_property_words_produce_nothing() {
    use proptest::prelude::*;

    proptest!(|(input in "[a-zA-Z_][a-zA-Z_ \t\n]{0,100}")| {
        prop_assert!(lex_all(&input).is_empty());
    });
}

#[test]
fn test_property_plain_strings_roundtrip() {
    use proptest::prelude::*;

    proptest!(|(body in "[^\"\\\\\\x00]{0,100}")| {
        let source = format!("\"{}\"", body);
        let tokens = lex_all(&source);
        prop_assert_eq!(tokens.len(), 1);
        prop_assert_eq!(tokens[0].kind, TokenKind::String);
        prop_assert_eq!(&tokens[0].value, &source);
        prop_assert!(!tokens[0].truncated);
    });
}

#[test]
fn test_property_token_positions_increase() {
    use proptest::prelude::*;

    proptest!(|(input in "[ -~\n]{0,200}")| {
        let tokens = lex_all(&input);
        for pair in tokens.windows(2) {
            prop_assert!(pair[0].pos < pair[1].pos);
            prop_assert!(pair[0].line <= pair[1].line);
        }
    });
}

#[test]
fn test_property_values_are_source_slices() {
    use proptest::prelude::*;

    proptest!(|(input in "[ -~\n]{0,200}")| {
        for token in lex_all(&input) {
            let start = token.pos as usize;
            prop_assert_eq!(&input[start..start + token.value.len()], token.value.as_str());
        }
    });
}
