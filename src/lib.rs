//! Scanner, parser, and evaluator for integer arithmetic.
//!
//! A line of text is scanned into tokens, parsed into an expression
//! tree that honors operator precedence, and evaluated to an `i32`.
//! Supported syntax: decimal integers, `+ - * /`, and parentheses.
//!
//! # Quick start
//!
//! ## Evaluate a line
//!
//! ```
//! assert_eq!(languid::evaluate_str("2 + 3 * 4").unwrap(), 14);
//! assert_eq!(languid::evaluate_str("(2 + 3) * 4").unwrap(), 20);
//! ```
//!
//! ## Inspect the tree before evaluating
//!
//! ```
//! use languid::{evaluate, format, parse};
//!
//! let tree = parse("10 - 3 - 2");
//! assert!(tree.diagnostics.is_empty());
//! assert_eq!(format(&tree.root), "10 - 3 - 2");
//! assert_eq!(evaluate(&tree.root).unwrap(), 5);
//! ```
//!
//! ## Malformed input
//!
//! ```
//! let tree = languid::parse("(1 + 2");
//! assert_eq!(
//!     tree.diagnostics[0].to_string(),
//!     "ERROR: Unexpected token: <EndOfFileToken>, expected: <GroupCloseToken>"
//! );
//! ```

#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions
)]

pub mod ast;
pub mod builder;
pub mod diagnostic;
pub mod evaluator;
pub mod formatter;
pub mod lexer;
pub mod parser;
pub mod token;

pub use ast::{Expression, SyntaxKind, SyntaxNode, SyntaxTree};
pub use diagnostic::{Diagnostic, DiagnosticKind};
pub use evaluator::{EvalError, evaluate};
pub use formatter::{format, pretty_print};
pub use lexer::{Lexer, tokenize};
pub use parser::{MAX_DEPTH, TokenStream, parse};
pub use token::{Token, TokenKind};

/// Unified error type covering both malformed input and evaluation
/// failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The line produced diagnostics and was not evaluated.
    #[error("{}", diagnostic::join(.0))]
    Syntax(Vec<Diagnostic>),
    /// Evaluation failed.
    #[error("{0}")]
    Eval(#[from] EvalError),
}

impl From<Vec<Diagnostic>> for Error {
    fn from(diagnostics: Vec<Diagnostic>) -> Self {
        Self::Syntax(diagnostics)
    }
}

/// Parse and evaluate a line in one step.
///
/// The tree is only evaluated when parsing reported no diagnostics.
pub fn evaluate_str(input: &str) -> Result<i32, Error> {
    let tree = parse(input);
    if !tree.is_valid() {
        return Err(Error::Syntax(tree.diagnostics));
    }
    Ok(evaluate(&tree.root)?)
}
