use std::fmt;

use crate::token::TokenKind;

/// Classifies a recoverable input defect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// Digit run that does not fit in an `i32`.
    NumberOutOfRange { text: String },
    /// Character that cannot start any token.
    BadCharacter(char),
    /// Parser expected one kind of token and found another.
    UnexpectedToken {
        found: TokenKind,
        expected: TokenKind,
    },
    /// Expression tree would be deeper than `limit` levels.
    TooDeep { limit: usize },
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NumberOutOfRange { text } => {
                write!(
                    f,
                    "The number {text} cannot be represented by a 32-bit integer."
                )
            }
            Self::BadCharacter(ch) => {
                write!(f, "ERROR: bad character input: {ch}")
            }
            Self::UnexpectedToken { found, expected } => {
                write!(
                    f,
                    "ERROR: Unexpected token: <{found}>, expected: <{expected}>"
                )
            }
            Self::TooDeep { limit } => {
                write!(f, "ERROR: Expression nests deeper than {limit} levels")
            }
        }
    }
}

/// A diagnostic reported by the lexer or the parser.
///
/// Diagnostics are collected, never raised: scanning and parsing always
/// run to the end of the input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}")]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    /// Byte offset in the source line.
    pub position: usize,
}

impl Diagnostic {
    #[must_use]
    pub const fn new(kind: DiagnosticKind, position: usize) -> Self {
        Self { kind, position }
    }
}

/// Join diagnostic messages, one per line.
#[must_use]
pub fn join(diagnostics: &[Diagnostic]) -> String {
    diagnostics
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}
