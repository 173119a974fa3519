use crate::ast::{Expression, SyntaxTree};
use crate::diagnostic::{Diagnostic, DiagnosticKind};
use crate::lexer::Lexer;
use crate::token::{Token, TokenKind};

/// Parse one source line into a `SyntaxTree`.
///
/// Never fails: malformed input is reported through
/// `SyntaxTree::diagnostics` and the returned tree is filled with
/// placeholder tokens where expected tokens were missing.
#[must_use]
pub fn parse(input: &str) -> SyntaxTree {
    let (stream, diagnostics) = TokenStream::scan(input);
    Parser::new(stream, diagnostics).parse()
}

/// Materialized token sequence consumed by the parser.
///
/// Whitespace and bad tokens are dropped. The last token is always
/// `EndOfFile`, and peeking past the end returns it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenStream {
    tokens: Vec<Token>,
}

impl TokenStream {
    /// Run the lexer to completion over `input`.
    #[must_use]
    pub fn scan(input: &str) -> (Self, Vec<Diagnostic>) {
        let mut lexer = Lexer::new(input);
        let stream = Self::from_tokens(lexer.by_ref());
        (stream, lexer.into_diagnostics())
    }

    /// Build a stream from raw lexer output.
    ///
    /// Tokens after the first `EndOfFile` are ignored. A missing
    /// terminator is appended.
    #[must_use]
    pub fn from_tokens(tokens: impl IntoIterator<Item = Token>) -> Self {
        let mut kept = Vec::new();
        let mut end = 0;
        for token in tokens {
            end = token.position + token.text.len();
            match token.kind {
                TokenKind::BadToken | TokenKind::WhiteSpace => {}
                TokenKind::EndOfFile => {
                    kept.push(token);
                    return Self { tokens: kept };
                }
                _ => kept.push(token),
            }
        }
        kept.push(Token::new(TokenKind::EndOfFile, end, "", None));
        Self { tokens: kept }
    }

    /// Token at `index`, clamped to the trailing `EndOfFile`.
    #[must_use]
    pub fn peek(&self, index: usize) -> &Token {
        let last = self.tokens.len() - 1;
        &self.tokens[index.min(last)]
    }

    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }
}

/// Deepest expression tree the parser builds.
///
/// Each binary node and each group adds one level, so a chain of
/// `+` operators counts as deep as the same number of nested groups.
/// Input past the limit is reported and the rest of the line skipped.
pub const MAX_DEPTH: usize = 256;

struct Parser {
    stream: TokenStream,
    pos: usize,
    diagnostics: Vec<Diagnostic>,
    /// Groups currently open.
    nesting: usize,
    /// Set once `MAX_DEPTH` was exceeded; later mismatches are not
    /// reported.
    abandoned: bool,
}

impl Parser {
    const fn new(stream: TokenStream, diagnostics: Vec<Diagnostic>) -> Self {
        Self {
            stream,
            pos: 0,
            diagnostics,
            nesting: 0,
            abandoned: false,
        }
    }

    fn parse(mut self) -> SyntaxTree {
        let (root, _) = self.parse_expression();
        let end_of_file = self.match_token(TokenKind::EndOfFile);
        SyntaxTree {
            root,
            end_of_file,
            diagnostics: self.diagnostics,
        }
    }

    // Grammar functions return the expression with its tree height.

    fn parse_expression(&mut self) -> (Expression, usize) {
        self.parse_term()
    }

    fn parse_term(&mut self) -> (Expression, usize) {
        let (mut left, mut height) = self.parse_factor();
        while matches!(self.current().kind, TokenKind::Plus | TokenKind::Minus) {
            let operator = self.next_token();
            let (right, right_height) = self.parse_factor();
            (left, height) = self.limit(
                Expression::Binary {
                    left: Box::new(left),
                    operator,
                    right: Box::new(right),
                },
                height.max(right_height) + 1,
            );
        }
        (left, height)
    }

    fn parse_factor(&mut self) -> (Expression, usize) {
        let (mut left, mut height) = self.parse_primary();
        while matches!(self.current().kind, TokenKind::Star | TokenKind::Slash) {
            let operator = self.next_token();
            let (right, right_height) = self.parse_primary();
            (left, height) = self.limit(
                Expression::Binary {
                    left: Box::new(left),
                    operator,
                    right: Box::new(right),
                },
                height.max(right_height) + 1,
            );
        }
        (left, height)
    }

    fn parse_primary(&mut self) -> (Expression, usize) {
        if self.current().kind == TokenKind::GroupOpen {
            if self.nesting >= MAX_DEPTH {
                let position = self.current().position;
                return self.abandon(position);
            }

            let open = self.next_token();
            self.nesting += 1;
            let (inner, height) = self.parse_expression();
            self.nesting -= 1;
            let close = self.match_token(TokenKind::GroupClose);
            return self.limit(
                Expression::Grouped {
                    open,
                    inner: Box::new(inner),
                    close,
                },
                height + 1,
            );
        }

        let token = self.match_token(TokenKind::Number);
        (Expression::Number { token }, 1)
    }

    fn limit(&mut self, expr: Expression, height: usize) -> (Expression, usize) {
        if height > MAX_DEPTH {
            self.abandon(expr.position())
        } else {
            (expr, height)
        }
    }

    /// Report the depth limit once, skip to `EndOfFile`, and stand in a
    /// placeholder number for the unparsed remainder.
    fn abandon(&mut self, position: usize) -> (Expression, usize) {
        if !self.abandoned {
            self.diagnostics.push(Diagnostic::new(
                DiagnosticKind::TooDeep { limit: MAX_DEPTH },
                position,
            ));
            self.abandoned = true;
        }
        self.pos = self.stream.tokens().len() - 1;
        let token = Token::missing(TokenKind::Number, position);
        (Expression::Number { token }, 1)
    }

    fn peek(&self, offset: usize) -> &Token {
        self.stream.peek(self.pos + offset)
    }

    fn current(&self) -> &Token {
        self.peek(0)
    }

    fn next_token(&mut self) -> Token {
        let token = self.current().clone();
        self.pos += 1;
        token
    }

    /// Consume a token of `kind`, or report and synthesize one.
    fn match_token(&mut self, kind: TokenKind) -> Token {
        let (found, position) = {
            let current = self.current();
            (current.kind, current.position)
        };
        if found == kind {
            return self.next_token();
        }

        if !self.abandoned {
            self.diagnostics.push(Diagnostic::new(
                DiagnosticKind::UnexpectedToken {
                    found,
                    expected: kind,
                },
                position,
            ));
        }
        Token::missing(kind, position)
    }
}
