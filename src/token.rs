use std::fmt;

/// Token kinds produced by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Character that cannot start any token.
    BadToken,
    /// Run of whitespace. Never reaches the parser.
    WhiteSpace,
    /// Run of decimal digits.
    Number,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `(`
    GroupOpen,
    /// `)`
    GroupClose,
    /// End of input sentinel.
    EndOfFile,
}

impl TokenKind {
    /// Source text of a single-character token kind.
    #[must_use]
    pub const fn symbol(self) -> Option<&'static str> {
        match self {
            Self::Plus => Some("+"),
            Self::Minus => Some("-"),
            Self::Star => Some("*"),
            Self::Slash => Some("/"),
            Self::GroupOpen => Some("("),
            Self::GroupClose => Some(")"),
            Self::BadToken | Self::WhiteSpace | Self::Number | Self::EndOfFile => None,
        }
    }

    /// Binding strength of a binary operator: `*` and `/` bind tighter
    /// than `+` and `-`. Zero for every other kind.
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Star | Self::Slash => 2,
            Self::Plus | Self::Minus => 1,
            _ => 0,
        }
    }

    /// Whether this kind is one of the four binary operators.
    #[must_use]
    pub const fn is_binary_operator(self) -> bool {
        matches!(self, Self::Plus | Self::Minus | Self::Star | Self::Slash)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::BadToken => "BadToken",
            Self::WhiteSpace => "WhiteSpaceToken",
            Self::Number => "NumberToken",
            Self::Plus => "PlusToken",
            Self::Minus => "MinusToken",
            Self::Star => "StarToken",
            Self::Slash => "SlashToken",
            Self::GroupOpen => "GroupOpenToken",
            Self::GroupClose => "GroupCloseToken",
            Self::EndOfFile => "EndOfFileToken",
        };
        f.write_str(name)
    }
}

/// A single token with its kind, source offset, text, and literal value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// Byte offset of the first character in the source line.
    pub position: usize,
    pub text: String,
    /// Parsed integer for `Number` tokens that fit in 32 bits.
    pub value: Option<i32>,
}

impl Token {
    #[must_use]
    pub fn new(
        kind: TokenKind,
        position: usize,
        text: impl Into<String>,
        value: Option<i32>,
    ) -> Self {
        Self {
            kind,
            position,
            text: text.into(),
            value,
        }
    }

    /// Placeholder inserted by the parser where `kind` was expected but
    /// something else was found.
    #[must_use]
    pub const fn missing(kind: TokenKind, position: usize) -> Self {
        Self {
            kind,
            position,
            text: String::new(),
            value: None,
        }
    }

    /// True for placeholders and the end-of-file sentinel.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}
