use crate::diagnostic::{Diagnostic, DiagnosticKind};
use crate::token::{Token, TokenKind};

/// Scan a source line into its full token sequence.
///
/// The result includes whitespace and bad tokens and always ends with
/// exactly one `EndOfFile` token. Diagnostics for overflowing numbers
/// and unrecognized characters are returned alongside the tokens.
#[must_use]
pub fn tokenize(input: &str) -> (Vec<Token>, Vec<Diagnostic>) {
    let mut lexer = Lexer::new(input);
    let tokens = lexer.by_ref().collect();
    (tokens, lexer.into_diagnostics())
}

/// On-demand scanner over one source line.
///
/// `next_token` can be called past the end; it keeps returning
/// `EndOfFile`. As an iterator the lexer stops after the first
/// `EndOfFile`.
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    input: &'a str,
    pos: usize,
    diagnostics: Vec<Diagnostic>,
    finished: bool,
}

impl<'a> Lexer<'a> {
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            diagnostics: Vec::new(),
            finished: false,
        }
    }

    /// Diagnostics accumulated so far.
    #[must_use]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    #[must_use]
    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }

    /// Scan the token starting at the cursor and advance past it.
    pub fn next_token(&mut self) -> Token {
        let Some(ch) = self.peek() else {
            return Token::new(TokenKind::EndOfFile, self.input.len(), "", None);
        };

        if ch.is_ascii_digit() {
            return self.read_number();
        }

        if ch.is_whitespace() {
            let start = self.pos;
            self.advance_while(char::is_whitespace);
            return Token::new(TokenKind::WhiteSpace, start, &self.input[start..self.pos], None);
        }

        let kind = match ch {
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '*' => TokenKind::Star,
            '/' => TokenKind::Slash,
            '(' => TokenKind::GroupOpen,
            ')' => TokenKind::GroupClose,
            _ => {
                self.diagnostics
                    .push(Diagnostic::new(DiagnosticKind::BadCharacter(ch), self.pos));
                TokenKind::BadToken
            }
        };

        let start = self.pos;
        self.pos += ch.len_utf8();
        Token::new(kind, start, &self.input[start..self.pos], None)
    }

    fn read_number(&mut self) -> Token {
        let start = self.pos;
        self.advance_while(|c| c.is_ascii_digit());
        let text = &self.input[start..self.pos];

        let value = text.parse::<i32>().ok();
        if value.is_none() {
            self.diagnostics.push(Diagnostic::new(
                DiagnosticKind::NumberOutOfRange {
                    text: text.to_string(),
                },
                start,
            ));
        }

        Token::new(TokenKind::Number, start, text, value)
    }

    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn advance_while(&mut self, pred: impl Fn(char) -> bool) {
        while let Some(c) = self.peek() {
            if !pred(c) {
                break;
            }
            self.pos += c.len_utf8();
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }
        let token = self.next_token();
        if token.kind == TokenKind::EndOfFile {
            self.finished = true;
        }
        Some(token)
    }
}
