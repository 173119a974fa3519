use crate::ast::Expression;
use crate::token::{Token, TokenKind};

impl Expression {
    /// Integer literal. The token's text is the decimal rendering of
    /// `value`; negative values have no source form.
    #[must_use]
    pub fn number(value: i32) -> Self {
        Self::Number {
            token: Token::new(TokenKind::Number, 0, value.to_string(), Some(value)),
        }
    }

    /// Binary node with a synthesized operator token.
    ///
    /// `operator` should be one of the four binary operator kinds;
    /// anything else evaluates to `EvalError::InvalidState`.
    #[must_use]
    pub fn binary(left: Self, operator: TokenKind, right: Self) -> Self {
        Self::Binary {
            left: Box::new(left),
            operator: Token::new(operator, 0, operator.symbol().unwrap_or_default(), None),
            right: Box::new(right),
        }
    }

    /// Wrap in parentheses.
    #[must_use]
    pub fn grouped(inner: Self) -> Self {
        Self::Grouped {
            open: Token::new(TokenKind::GroupOpen, 0, "(", None),
            inner: Box::new(inner),
            close: Token::new(TokenKind::GroupClose, 0, ")", None),
        }
    }

    /// `self + rhs`
    #[must_use]
    pub fn plus(self, rhs: Self) -> Self {
        Self::binary(self, TokenKind::Plus, rhs)
    }

    /// `self - rhs`
    #[must_use]
    pub fn minus(self, rhs: Self) -> Self {
        Self::binary(self, TokenKind::Minus, rhs)
    }

    /// `self * rhs`
    #[must_use]
    pub fn times(self, rhs: Self) -> Self {
        Self::binary(self, TokenKind::Star, rhs)
    }

    /// `self / rhs`
    #[must_use]
    pub fn divided_by(self, rhs: Self) -> Self {
        Self::binary(self, TokenKind::Slash, rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluator::evaluate;

    #[test]
    fn number_token_text_matches_value() {
        let Expression::Number { token } = Expression::number(17) else {
            panic!("expected number");
        };
        assert_eq!(token.text, "17");
        assert_eq!(token.value, Some(17));
    }

    #[test]
    fn chained_operators_nest_leftward() {
        let expr = Expression::number(10)
            .minus(Expression::number(3))
            .minus(Expression::number(2));
        assert_eq!(evaluate(&expr), Ok(5));
    }

    #[test]
    fn grouped_is_transparent() {
        let expr = Expression::grouped(Expression::number(2).plus(Expression::number(3)))
            .times(Expression::number(4));
        assert_eq!(evaluate(&expr), Ok(20));
    }
}
