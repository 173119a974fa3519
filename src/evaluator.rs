//! Tree-walking evaluation of parsed expressions.
//!
//! Operands are evaluated left to right before their operator. The
//! first failure aborts the walk.

use crate::ast::Expression;
use crate::token::TokenKind;

/// Failure while evaluating an expression tree.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EvalError {
    /// Right operand of `/` evaluated to zero.
    #[error("division by zero at position {position}")]
    DivisionByZero { position: usize },
    /// The tree has a shape the parser never produces for valid input.
    #[error("invalid state: {0}")]
    InvalidState(String),
}

impl EvalError {
    /// True for failures caused by a malformed tree rather than by the
    /// input's arithmetic.
    #[must_use]
    pub const fn is_invalid_state(&self) -> bool {
        matches!(self, Self::InvalidState(_))
    }
}

/// Evaluate an expression tree to an `i32`.
///
/// The caller is expected to check `SyntaxTree::diagnostics` first;
/// a tree with pending diagnostics may hold numbers without values.
/// Arithmetic wraps on overflow.
///
/// # Errors
///
/// Returns `EvalError::DivisionByZero` when a divisor is zero and
/// `EvalError::InvalidState` for number tokens without a value or
/// binary nodes whose operator is not `+ - * /`.
pub fn evaluate(expr: &Expression) -> Result<i32, EvalError> {
    match expr {
        Expression::Number { token } => token.value.ok_or_else(|| {
            EvalError::InvalidState(format!(
                "missing value for number expression \"{}\" at position {}",
                token.text, token.position
            ))
        }),
        Expression::Binary {
            left,
            operator,
            right,
        } => {
            let lhs = evaluate(left)?;
            let rhs = evaluate(right)?;
            match operator.kind {
                TokenKind::Plus => Ok(lhs.wrapping_add(rhs)),
                TokenKind::Minus => Ok(lhs.wrapping_sub(rhs)),
                TokenKind::Star => Ok(lhs.wrapping_mul(rhs)),
                TokenKind::Slash if rhs == 0 => Err(EvalError::DivisionByZero {
                    position: operator.position,
                }),
                TokenKind::Slash => Ok(lhs.wrapping_div(rhs)),
                other => Err(EvalError::InvalidState(format!(
                    "unexpected binary operator <{other}>"
                ))),
            }
        }
        Expression::Grouped { inner, .. } => evaluate(inner),
    }
}
