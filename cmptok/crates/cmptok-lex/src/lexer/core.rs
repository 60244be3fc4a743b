//! Core tokenizer implementation.
//!
//! This module contains the [`Tokenizer`] struct and the dispatcher that
//! picks one reader per token.

use cmptok_util::{DiagnosticCode, Handler};
use tracing::{debug, trace};

use crate::accumulator::Accumulator;
use crate::classify::{is_digit, is_punctuation_start};
use crate::cursor::{CharStream, TERMINATOR};
use crate::token::{Token, TokenKind};

/// Tokenizer for C/C++-like source text.
///
/// Pull tokens one at a time with [`next_token`](Tokenizer::next_token), or
/// use the [`Iterator`] implementation. Once the input is exhausted the
/// tokenizer keeps returning `None`; it cannot be rewound.
///
/// ```
/// use cmptok_lex::{Tokenizer, TokenKind};
///
/// let mut tokenizer = Tokenizer::new("x += 0x10; // bump");
///
/// let op = tokenizer.next_token().unwrap();
/// assert_eq!((op.kind, op.value.as_str()), (TokenKind::Operator, "+="));
///
/// let num = tokenizer.next_token().unwrap();
/// assert_eq!((num.kind, num.value.as_str()), (TokenKind::Const, "0x10"));
/// ```
#[derive(Debug)]
pub struct Tokenizer<'a> {
    /// Character stream over the source.
    pub(crate) stream: CharStream<'a>,

    /// Text of the token being read.
    pub(crate) acc: Accumulator,

    /// Receives a warning for every truncated token, if attached.
    handler: Option<&'a Handler>,

    /// Line where the current token starts.
    token_line: u32,

    /// Running position where the current token starts.
    token_pos: u32,
}

impl<'a> Tokenizer<'a> {
    /// Creates a tokenizer over UTF-8 source text.
    pub fn new(source: &'a str) -> Self {
        Self::from_bytes(source.as_bytes())
    }

    /// Creates a tokenizer over raw bytes.
    pub fn from_bytes(source: &'a [u8]) -> Self {
        Self::from_option(Some(source))
    }

    /// Creates a tokenizer over an optional buffer. `None` yields no tokens.
    pub fn from_option(source: Option<&'a [u8]>) -> Self {
        Self {
            stream: CharStream::new(source),
            acc: Accumulator::new(),
            handler: None,
            token_line: 1,
            token_pos: 0,
        }
    }

    /// Attaches a diagnostic handler.
    ///
    /// Truncated string literals and block comments are then also reported
    /// as warnings.
    pub fn with_handler(mut self, handler: &'a Handler) -> Self {
        self.handler = Some(handler);
        self
    }

    /// Returns the next token, or `None` at end of input.
    ///
    /// Spaces and tabs are skipped. Bytes that start no token (letters,
    /// underscores, newlines, non-ASCII) are skipped one at a time.
    pub fn next_token(&mut self) -> Option<Token> {
        loop {
            let (cur, next) = self.stream.pair();
            let token = match cur {
                TERMINATOR => return None,
                b' ' | b'\t' => {
                    self.stream.advance();
                    continue;
                },
                b'/' if next == b'/' => self.read_line_comment(),
                b'/' if next == b'*' => self.read_block_comment(),
                b'"' => self.read_string(),
                c if is_digit(c) || (c == b'.' && is_digit(next)) => self.read_numeric(),
                c if is_punctuation_start(c) => self.read_operator(),
                _ => {
                    self.stream.advance();
                    continue;
                },
            };

            trace!(kind = %token.kind, line = token.line, pos = token.pos, "token");
            return Some(token);
        }
    }

    /// Records where the token about to be read starts.
    pub(crate) fn mark_start(&mut self) {
        self.token_line = self.stream.line();
        self.token_pos = self.stream.pos();
    }

    /// Wraps up the accumulated text as a complete token.
    pub(crate) fn finish(&mut self, kind: TokenKind) -> Token {
        Token::new(kind, self.token_line, self.token_pos, self.acc.finish())
    }

    /// Wraps up the accumulated text as a token cut short by end of input.
    pub(crate) fn finish_truncated(
        &mut self,
        kind: TokenKind,
        code: DiagnosticCode,
        message: &str,
    ) -> Token {
        let mut token = self.finish(kind);
        token.truncated = true;

        debug!(kind = %kind, line = token.line, pos = token.pos, "{}", message);
        if let Some(handler) = self.handler {
            handler
                .build_warning(token.position(), message)
                .code(code)
                .note(format!("{} bytes kept up to end of input", token.value.len()))
                .emit(handler);
        }

        token
    }

    /// Line of the next unread character (1-based).
    pub fn line(&self) -> u32 {
        self.stream.line()
    }

    /// Running position of the next unread character.
    ///
    /// After the last token this is the number of characters consumed.
    pub fn pos(&self) -> u32 {
        self.stream.pos()
    }

    /// True once the input is exhausted.
    pub fn is_done(&self) -> bool {
        self.stream.is_done()
    }
}
