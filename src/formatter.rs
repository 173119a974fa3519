//! Text renderings of expression trees.
//!
//! `format` reconstructs canonical source text; `pretty_print` draws the
//! node hierarchy with kinds and literal values.

use std::fmt::Write as _;

use crate::ast::{Expression, SyntaxNode};
use crate::token::Token;

/// Reconstruct source text for an expression.
///
/// Binary operators are surrounded by single spaces and groups keep
/// their parentheses. A binary operand that binds looser than its
/// parent, or a right operand that binds equally, is parenthesized, so
/// parsing the output yields a tree that evaluates the same; for trees
/// that came from `parse` the shape is also unchanged. Placeholder
/// tokens render as nothing.
#[must_use]
pub fn format(expr: &Expression) -> String {
    let mut out = String::new();
    format_expression(&mut out, expr);
    out
}

fn format_expression(out: &mut String, expr: &Expression) {
    match expr {
        Expression::Number { token } => out.push_str(&token.text),
        Expression::Binary {
            left,
            operator,
            right,
        } => {
            let precedence = operator.kind.precedence();
            format_operand(out, left, precedence, false);
            out.push(' ');
            out.push_str(&operator.text);
            out.push(' ');
            format_operand(out, right, precedence, true);
        }
        Expression::Grouped { open, inner, close } => {
            out.push_str(&open.text);
            format_expression(out, inner);
            out.push_str(&close.text);
        }
    }
}

fn format_operand(out: &mut String, operand: &Expression, parent: u8, is_right: bool) {
    let needs_group = match operand {
        Expression::Binary { operator, .. } => {
            let own = operator.kind.precedence();
            own < parent || (is_right && own == parent)
        }
        Expression::Number { .. } | Expression::Grouped { .. } => false,
    };

    if needs_group {
        out.push('(');
        format_expression(out, operand);
        out.push(')');
    } else {
        format_expression(out, operand);
    }
}

/// Render a node and its descendants, one per line.
///
/// Each line is the node kind, followed by the literal value for
/// number tokens. Children are indented four spaces deeper than their
/// parent. Positions are not shown, so two trees print the same iff
/// they have the same shape, kinds, and values.
#[must_use]
pub fn pretty_print<'a>(node: impl Into<SyntaxNode<'a>>) -> String {
    let mut out = String::new();
    print_node(&mut out, node.into(), 0);
    out
}

fn print_node(out: &mut String, node: SyntaxNode<'_>, depth: usize) {
    let _ = write!(out, "{}{}", "    ".repeat(depth), node.kind());
    if let SyntaxNode::Token(Token {
        value: Some(value), ..
    }) = node
    {
        let _ = write!(out, " {value}");
    }
    out.push('\n');

    for child in node.children() {
        print_node(out, child, depth + 1);
    }
}
