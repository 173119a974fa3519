//! Programmatic tree construction.

use languid::{EvalError, Expression, TokenKind, evaluate, format, parse, pretty_print};

#[test]
fn build_matches_parsed_shape() {
    let built = Expression::number(2).plus(Expression::number(3).times(Expression::number(4)));
    let parsed = parse("2 + 3 * 4");
    assert_eq!(pretty_print(&built), pretty_print(&parsed.root));
}

#[test]
fn build_evaluates() {
    let expr = Expression::number(100)
        .divided_by(Expression::number(7))
        .minus(Expression::number(4));
    assert_eq!(evaluate(&expr), Ok(10));
}

#[test]
fn build_division_by_zero() {
    let expr = Expression::number(1).divided_by(Expression::number(0));
    assert!(matches!(
        evaluate(&expr),
        Err(EvalError::DivisionByZero { .. })
    ));
}

#[test]
fn build_with_non_operator_kind() {
    let expr = Expression::binary(
        Expression::number(1),
        TokenKind::Number,
        Expression::number(2),
    );
    assert!(evaluate(&expr).unwrap_err().is_invalid_state());
    assert_eq!(format(&expr), "1  2");
}

#[test]
fn build_right_nested_keeps_meaning_after_format() {
    let right_nested =
        Expression::number(10).minus(Expression::number(3).minus(Expression::number(2)));
    assert_eq!(evaluate(&right_nested), Ok(9));

    let formatted = format(&right_nested);
    assert_eq!(formatted, "10 - (3 - 2)");
    let reparsed = parse(&formatted);
    assert!(reparsed.diagnostics.is_empty());
    assert_eq!(evaluate(&reparsed.root), Ok(9));
}

#[test]
fn build_explicit_group_is_not_doubled() {
    let grouped = Expression::number(10).minus(Expression::grouped(
        Expression::number(3).minus(Expression::number(2)),
    ));
    assert_eq!(format(&grouped), "10 - (3 - 2)");
}

#[test]
fn build_looser_left_operand_keeps_meaning() {
    let expr = Expression::number(8)
        .minus(Expression::number(2))
        .divided_by(Expression::number(3));
    assert_eq!(evaluate(&expr), Ok(2));
    let reparsed = parse(&format(&expr));
    assert_eq!(evaluate(&reparsed.root), Ok(2));
}
