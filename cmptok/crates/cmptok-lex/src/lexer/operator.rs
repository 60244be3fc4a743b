//! Operator and punctuation reading.

use crate::classify::{can_double, can_precede_assign};
use crate::token::{Token, TokenKind};
use crate::Tokenizer;

impl<'a> Tokenizer<'a> {
    /// Reads one punctuation character and at most one extension.
    ///
    /// Extensions, first match wins:
    ///
    /// 1. Shifts `<<` `>>`, plus a trailing `=` (`<<=` `>>=`)
    /// 2. Doubling `++ -- && || ::`, or an assignment suffix
    ///    (`+= -= *= /= %= &= |= ^= >= <= == !=`)
    /// 3. Member access `->`
    ///
    /// `...` is not recognized; it reads as three `.` tokens.
    pub(crate) fn read_operator(&mut self) -> Token {
        self.mark_start();

        let Some((cur, next)) = self.stream.iterate() else {
            return self.finish(TokenKind::Operator);
        };
        self.acc.push(cur);

        if (cur == b'<' || cur == b'>') && cur == next {
            self.take_one();
            if self.stream.current() == b'=' {
                self.take_one();
            }
        } else if (can_double(cur) && cur == next) || (can_precede_assign(cur) && next == b'=') {
            self.take_one();
        } else if cur == b'-' && next == b'>' {
            self.take_one();
        }

        self.finish(TokenKind::Operator)
    }

    /// Moves the current character into the token.
    fn take_one(&mut self) {
        if let Some((cur, _)) = self.stream.iterate() {
            self.acc.push(cur);
        }
    }
}
