//! Token definitions.
//!
//! Kind codes are stable integers; consumers that store or compare token
//! streams across processes rely on them.

use std::fmt;

use cmptok_util::Position;

/// Classification of a token.
///
/// Only [`LineComment`](TokenKind::LineComment),
/// [`BlockComment`](TokenKind::BlockComment), [`String`](TokenKind::String),
/// [`Const`](TokenKind::Const) and [`Operator`](TokenKind::Operator) are ever
/// produced. The remaining kinds are reserved: identifiers, newlines and
/// preprocessor bodies are skipped by the tokenizer, not classified.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum TokenKind {
    /// Reserved.
    Preprocessor = 1,
    /// `/* ... */`
    BlockComment = 2,
    /// `// ...` up to, not including, the newline.
    LineComment = 3,
    /// Reserved.
    Char = 4,
    /// `"..."` including the quotes.
    String = 5,
    /// Reserved.
    Identifier = 6,
    /// Numeric constant: a run of digits, letters and dots.
    Const = 7,
    /// Punctuation or operator, one to three characters.
    Operator = 8,
    /// Reserved.
    Continuation = 9,
    /// Reserved.
    Newline = 10,
    /// Reserved.
    Unknown = 11,
}

impl TokenKind {
    /// Every kind, in code order.
    pub const ALL: [TokenKind; 11] = [
        TokenKind::Preprocessor,
        TokenKind::BlockComment,
        TokenKind::LineComment,
        TokenKind::Char,
        TokenKind::String,
        TokenKind::Identifier,
        TokenKind::Const,
        TokenKind::Operator,
        TokenKind::Continuation,
        TokenKind::Newline,
        TokenKind::Unknown,
    ];

    /// The kinds the tokenizer can actually produce.
    pub const PRODUCED: [TokenKind; 5] = [
        TokenKind::BlockComment,
        TokenKind::LineComment,
        TokenKind::String,
        TokenKind::Const,
        TokenKind::Operator,
    ];

    /// Integer code of this kind.
    #[inline]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Looks up a kind by its integer code.
    pub fn from_code(code: u8) -> Option<TokenKind> {
        Self::ALL.iter().copied().find(|kind| kind.code() == code)
    }

    /// Upper-snake name, e.g. `BLOCK_COMMENT`.
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::Preprocessor => "PREPROCESSOR",
            TokenKind::BlockComment => "BLOCK_COMMENT",
            TokenKind::LineComment => "LINE_COMMENT",
            TokenKind::Char => "CHAR",
            TokenKind::String => "STRING",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Const => "CONST",
            TokenKind::Operator => "OPERATOR",
            TokenKind::Continuation => "CONTINUATION",
            TokenKind::Newline => "NEWLINE",
            TokenKind::Unknown => "UNKNOWN",
        }
    }

    /// Looks up a kind by name, ignoring ASCII case.
    ///
    /// ```
    /// use cmptok_lex::TokenKind;
    ///
    /// assert_eq!(TokenKind::from_name("line_comment"), Some(TokenKind::LineComment));
    /// assert_eq!(TokenKind::from_name("bogus"), None);
    /// ```
    pub fn from_name(name: &str) -> Option<TokenKind> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One classified span of source text.
///
/// The value is owned and stays valid independently of the tokenizer that
/// produced it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    /// Token classification.
    pub kind: TokenKind,
    /// Line of the first character (1-based).
    pub line: u32,
    /// Running position of the first character (0-based, never reset per line).
    pub pos: u32,
    /// Raw text, delimiters included.
    pub value: String,
    /// Set when a string literal or block comment hit end of input before
    /// its closing delimiter.
    pub truncated: bool,
}

impl Token {
    /// Creates a complete (non-truncated) token.
    pub fn new(kind: TokenKind, line: u32, pos: u32, value: impl Into<String>) -> Self {
        Self {
            kind,
            line,
            pos,
            value: value.into(),
            truncated: false,
        }
    }

    /// Location of the first character.
    pub fn position(&self) -> Position {
        Position::new(self.line, self.pos)
    }

    /// The token as `(code, (line, pos), value)`.
    pub fn into_tuple(self) -> (u8, (u32, u32), String) {
        (self.kind.code(), (self.line, self.pos), self.value)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{} {} {:?}", self.line, self.pos, self.kind, self.value)
    }
}
