#![allow(dead_code)]

use languid::{SyntaxTree, evaluate, format, parse, pretty_print};

/// Parse `input`, asserting it produced no diagnostics.
pub fn parse_valid(input: &str) -> SyntaxTree {
    let tree = parse(input);
    assert!(
        tree.diagnostics.is_empty(),
        "unexpected diagnostics for {input:?}: {:?}",
        tree.diagnostics
    );
    tree
}

/// Parse and evaluate `input`, asserting no diagnostics and success.
pub fn eval(input: &str) -> i32 {
    let tree = parse_valid(input);
    evaluate(&tree.root).unwrap_or_else(|e| panic!("evaluation of {input:?} failed: {e}"))
}

/// Helper: format a parsed tree, parse it back, assert the same shape.
pub fn assert_tree_roundtrip(input: &str) {
    let original = parse_valid(input);
    let formatted = format(&original.root);
    let reparsed = parse(&formatted);

    assert!(
        reparsed.diagnostics.is_empty(),
        "re-parse reported {:?}\n--- formatted ---\n{formatted}",
        reparsed.diagnostics
    );
    assert_eq!(
        pretty_print(&original.root),
        pretty_print(&reparsed.root),
        "tree mismatch\n--- formatted ---\n{formatted}"
    );
}

/// Messages of all diagnostics for `input`.
pub fn messages(input: &str) -> Vec<String> {
    parse(input)
        .diagnostics
        .iter()
        .map(ToString::to_string)
        .collect()
}
