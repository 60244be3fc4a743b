//! String literal reading.
//!
//! The literal is kept verbatim: quotes and escape sequences stay in the
//! value exactly as written.

use cmptok_util::diagnostic::W_UNTERMINATED_STRING;

use crate::token::{Token, TokenKind};
use crate::Tokenizer;

impl<'a> Tokenizer<'a> {
    /// Reads a double-quoted string literal.
    ///
    /// A `"` counts as a delimiter only when it is preceded by an even
    /// number of consecutive backslashes: in `\"` the quote is escaped, in
    /// `\\"` the backslash is. The first delimiter opens the literal and the
    /// second closes it.
    pub(crate) fn read_string(&mut self) -> Token {
        self.mark_start();

        let mut started = false;
        let mut backslashes = 0usize;

        while let Some((cur, _)) = self.stream.iterate() {
            self.acc.push(cur);

            if cur == b'"' && backslashes % 2 == 0 {
                if started {
                    return self.finish(TokenKind::String);
                }
                started = true;
            }

            if cur == b'\\' {
                backslashes += 1;
            } else {
                backslashes = 0;
            }
        }

        self.finish_truncated(
            TokenKind::String,
            W_UNTERMINATED_STRING,
            "unterminated string literal",
        )
    }
}
