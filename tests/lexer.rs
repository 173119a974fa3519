//! Lexer edge cases and diagnostics.

use languid::{DiagnosticKind, Lexer, TokenKind, tokenize};

// -----------------------------------------------------------
// Basic lexer behaviour.
// -----------------------------------------------------------

#[test]
fn lex_only_whitespace() {
    let (tokens, diagnostics) = tokenize("   \t ");
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].kind, TokenKind::WhiteSpace);
    assert_eq!(tokens[1].kind, TokenKind::EndOfFile);
    assert_eq!(tokens[1].position, 5);
    assert!(diagnostics.is_empty());
}

#[test]
fn lex_exactly_one_end_of_file() {
    let (tokens, _) = tokenize("(1 + 2) * 3");
    let count = tokens
        .iter()
        .filter(|t| t.kind == TokenKind::EndOfFile)
        .count();
    assert_eq!(count, 1);
    assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::EndOfFile));
}

#[test]
fn lex_positions_are_offsets() {
    let (tokens, _) = tokenize("12 + 345");
    let positions: Vec<_> = tokens.iter().map(|t| t.position).collect();
    assert_eq!(positions, vec![0, 2, 3, 4, 5, 8]);
}

#[test]
fn lex_text_is_exact_slice() {
    let input = "007 *(8)";
    let (tokens, _) = tokenize(input);
    for token in &tokens {
        assert_eq!(&input[token.position..token.position + token.text.len()], token.text);
    }
}

#[test]
fn lex_leading_zeros_keep_text() {
    let (tokens, _) = tokenize("007");
    assert_eq!(tokens[0].text, "007");
    assert_eq!(tokens[0].value, Some(7));
}

#[test]
fn lex_digits_split_from_operators() {
    let (tokens, _) = tokenize("1+23");
    let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Number,
            TokenKind::Plus,
            TokenKind::Number,
            TokenKind::EndOfFile,
        ]
    );
    assert_eq!(tokens[2].value, Some(23));
}

// -----------------------------------------------------------
// Diagnostics.
// -----------------------------------------------------------

#[test]
fn lex_overflow_message_names_digit_run() {
    let (_, diagnostics) = tokenize("1 + 4294967296");
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(
        diagnostics[0].to_string(),
        "The number 4294967296 cannot be represented by a 32-bit integer."
    );
    assert_eq!(diagnostics[0].position, 4);
}

#[test]
fn lex_every_bad_character_reported() {
    let (tokens, diagnostics) = tokenize("a$b");
    assert_eq!(diagnostics.len(), 3);
    assert!(
        tokens[..3]
            .iter()
            .all(|t| t.kind == TokenKind::BadToken)
    );
    assert_eq!(diagnostics[1].kind, DiagnosticKind::BadCharacter('$'));
    assert_eq!(diagnostics[1].to_string(), "ERROR: bad character input: $");
}

#[test]
fn lex_bad_character_does_not_stop_scan() {
    let (tokens, _) = tokenize("1 @ 2");
    assert_eq!(tokens[4].kind, TokenKind::Number);
    assert_eq!(tokens[4].value, Some(2));
}

// -----------------------------------------------------------
// Lazy scanning.
// -----------------------------------------------------------

#[test]
fn lexer_diagnostics_grow_as_scanned() {
    let mut lexer = Lexer::new("@ #");
    assert!(lexer.diagnostics().is_empty());
    lexer.next_token();
    assert_eq!(lexer.diagnostics().len(), 1);
    lexer.next_token();
    lexer.next_token();
    assert_eq!(lexer.diagnostics().len(), 2);
}

#[test]
fn lexer_restarts_from_scratch() {
    let first: Vec<_> = Lexer::new("3 * (4 - 1)").collect();
    let second: Vec<_> = Lexer::new("3 * (4 - 1)").collect();
    assert_eq!(first, second);
}
