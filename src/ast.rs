use std::fmt;

use crate::diagnostic::Diagnostic;
use crate::token::{Token, TokenKind};

/// Parsed arithmetic expression. Each node owns its children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    /// Integer literal.
    Number { token: Token },
    /// `left <op> right` with `op` one of `+ - * /`.
    Binary {
        left: Box<Self>,
        operator: Token,
        right: Box<Self>,
    },
    /// Parenthesized expression. Evaluates to `inner`.
    Grouped {
        open: Token,
        inner: Box<Self>,
        close: Token,
    },
}

/// Result of parsing one line.
///
/// When `diagnostics` is non-empty, `root` is a best-effort tree that
/// may contain placeholder tokens and must not be evaluated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxTree {
    pub root: Expression,
    pub end_of_file: Token,
    pub diagnostics: Vec<Diagnostic>,
}

impl SyntaxTree {
    /// True when the lexer and parser reported nothing.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Kind of any node in the tree, tokens included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SyntaxKind {
    Token(TokenKind),
    NumberExpression,
    BinaryExpression,
    GroupedExpression,
}

impl fmt::Display for SyntaxKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Token(kind) => write!(f, "{kind}"),
            Self::NumberExpression => f.write_str("NumberExpression"),
            Self::BinaryExpression => f.write_str("BinaryExpression"),
            Self::GroupedExpression => f.write_str("GroupedExpression"),
        }
    }
}

/// Borrowed view of a tree node for generic traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyntaxNode<'a> {
    Token(&'a Token),
    Expression(&'a Expression),
}

impl SyntaxNode<'_> {
    #[must_use]
    pub const fn kind(self) -> SyntaxKind {
        match self {
            Self::Token(token) => SyntaxKind::Token(token.kind),
            Self::Expression(expr) => expr.kind(),
        }
    }

    /// Children in source order. Tokens have none.
    #[must_use]
    pub fn children(self) -> Vec<Self> {
        match self {
            Self::Token(_) => Vec::new(),
            Self::Expression(expr) => expr.children(),
        }
    }
}

impl<'a> From<&'a Expression> for SyntaxNode<'a> {
    fn from(expr: &'a Expression) -> Self {
        Self::Expression(expr)
    }
}

impl<'a> From<&'a Token> for SyntaxNode<'a> {
    fn from(token: &'a Token) -> Self {
        Self::Token(token)
    }
}

impl Expression {
    #[must_use]
    pub const fn kind(&self) -> SyntaxKind {
        match self {
            Self::Number { .. } => SyntaxKind::NumberExpression,
            Self::Binary { .. } => SyntaxKind::BinaryExpression,
            Self::Grouped { .. } => SyntaxKind::GroupedExpression,
        }
    }

    /// Children in source order.
    #[must_use]
    pub fn children(&self) -> Vec<SyntaxNode<'_>> {
        match self {
            Self::Number { token } => vec![SyntaxNode::Token(token)],
            Self::Binary {
                left,
                operator,
                right,
            } => vec![
                SyntaxNode::Expression(left),
                SyntaxNode::Token(operator),
                SyntaxNode::Expression(right),
            ],
            Self::Grouped { open, inner, close } => vec![
                SyntaxNode::Token(open),
                SyntaxNode::Expression(inner),
                SyntaxNode::Token(close),
            ],
        }
    }

    /// Byte offset of the first token of this expression.
    #[must_use]
    pub fn position(&self) -> usize {
        match self {
            Self::Number { token } => token.position,
            Self::Binary { left, .. } => left.position(),
            Self::Grouped { open, .. } => open.position,
        }
    }
}
