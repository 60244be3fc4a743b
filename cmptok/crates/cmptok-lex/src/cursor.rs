//! Character stream for traversing source text.
//!
//! [`CharStream`] walks a byte buffer with a two-byte window: the current
//! byte and one byte of lookahead. It tracks the line and running position
//! of the current byte and never moves backwards.
//!
//! The buffer is treated as a NUL-terminated character string: the stream
//! ends at the end of the slice or at the first `0` byte, whichever comes
//! first.

/// Terminator byte reported once the stream is exhausted.
pub const TERMINATOR: u8 = 0;

/// A forward-only cursor over a byte buffer.
///
/// # Example
///
/// ```
/// use cmptok_lex::cursor::CharStream;
///
/// let mut stream = CharStream::new(Some(b"ab"));
/// assert_eq!(stream.pair(), (b'a', b'b'));
/// stream.advance();
/// assert_eq!(stream.pair(), (b'b', 0));
/// stream.advance();
/// assert!(stream.is_done());
/// ```
#[derive(Clone, Debug)]
pub struct CharStream<'a> {
    /// The source bytes.
    raw: &'a [u8],

    /// Index of the byte that becomes `next` on the following advance.
    fetch: usize,

    /// Current byte.
    cur: u8,

    /// One byte of lookahead.
    next: u8,

    /// Line of `cur` (1-based).
    line: u32,

    /// Running position of `cur` (0-based).
    pos: u32,

    /// Set exactly when `cur` is the terminator.
    done: bool,
}

impl<'a> CharStream<'a> {
    /// Creates a stream over `raw`.
    ///
    /// `None`, an empty buffer, or a buffer starting with NUL all produce a
    /// stream that is already exhausted.
    pub fn new(raw: Option<&'a [u8]>) -> Self {
        let raw = raw.unwrap_or_default();
        let cur = byte_at(raw, 0);
        let next = if cur == TERMINATOR {
            TERMINATOR
        } else {
            byte_at(raw, 1)
        };

        Self {
            raw,
            fetch: 2,
            cur,
            next,
            line: 1,
            pos: 0,
            done: cur == TERMINATOR,
        }
    }

    /// Moves the window forward by one byte.
    ///
    /// The line counter is bumped when the byte being left behind is a
    /// newline. Does nothing once the stream is exhausted. Both counters
    /// saturate at `u32::MAX` on inputs larger than 4 GiB.
    pub fn advance(&mut self) {
        if self.done {
            return;
        }

        if self.cur == b'\n' {
            self.line = self.line.saturating_add(1);
        }
        self.pos = self.pos.saturating_add(1);
        self.cur = self.next;

        if self.cur == TERMINATOR {
            self.done = true;
            self.next = TERMINATOR;
        } else {
            self.next = byte_at(self.raw, self.fetch);
            self.fetch += 1;
        }
    }

    /// Returns `(cur, next)` and then advances.
    ///
    /// Returns `None` without moving when the current byte is the
    /// terminator.
    ///
    /// ```
    /// use cmptok_lex::cursor::CharStream;
    ///
    /// let mut stream = CharStream::new(Some(b"x"));
    /// assert_eq!(stream.iterate(), Some((b'x', 0)));
    /// assert_eq!(stream.iterate(), None);
    /// ```
    pub fn iterate(&mut self) -> Option<(u8, u8)> {
        if self.cur == TERMINATOR {
            return None;
        }
        let pair = self.pair();
        self.advance();
        Some(pair)
    }

    /// Current byte and lookahead, without consuming anything.
    #[inline]
    pub fn pair(&self) -> (u8, u8) {
        (self.cur, self.next)
    }

    /// Current byte.
    #[inline]
    pub fn current(&self) -> u8 {
        self.cur
    }

    /// Lookahead byte.
    #[inline]
    pub fn peek(&self) -> u8 {
        self.next
    }

    /// Line of the current byte (1-based).
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Running position of the current byte (0-based).
    ///
    /// Once the stream is exhausted this equals the number of bytes
    /// consumed.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// True once the current byte is the terminator.
    #[inline]
    pub fn is_done(&self) -> bool {
        self.done
    }
}

#[inline]
fn byte_at(raw: &[u8], index: usize) -> u8 {
    raw.get(index).copied().unwrap_or(TERMINATOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_stream() {
        let stream = CharStream::new(Some(b"int x;"));
        assert_eq!(stream.pair(), (b'i', b'n'));
        assert_eq!(stream.line(), 1);
        assert_eq!(stream.pos(), 0);
        assert!(!stream.is_done());
    }

    #[test]
    fn test_absent_and_empty_are_done() {
        assert!(CharStream::new(None).is_done());
        assert!(CharStream::new(Some(b"")).is_done());
        assert!(CharStream::new(Some(b"\0abc")).is_done());
        assert_eq!(CharStream::new(None).pair(), (TERMINATOR, TERMINATOR));
    }

    #[test]
    fn test_single_byte() {
        let mut stream = CharStream::new(Some(b";"));
        assert_eq!(stream.pair(), (b';', TERMINATOR));
        stream.advance();
        assert!(stream.is_done());
        assert_eq!(stream.pos(), 1);
    }

    #[test]
    fn test_advance_after_done_is_noop() {
        let mut stream = CharStream::new(Some(b"a"));
        stream.advance();
        stream.advance();
        stream.advance();
        assert!(stream.is_done());
        assert_eq!(stream.pos(), 1);
        assert_eq!(stream.pair(), (TERMINATOR, TERMINATOR));
    }

    #[test]
    fn test_line_increments_when_leaving_newline() {
        let mut stream = CharStream::new(Some(b"a\nb"));
        stream.advance();
        assert_eq!(stream.current(), b'\n');
        assert_eq!(stream.line(), 1);
        stream.advance();
        assert_eq!(stream.current(), b'b');
        assert_eq!(stream.line(), 2);
        assert_eq!(stream.pos(), 2);
    }

    #[test]
    fn test_trailing_newline_counts_on_exhaustion() {
        let mut stream = CharStream::new(Some(b"\n"));
        stream.advance();
        assert!(stream.is_done());
        assert_eq!(stream.line(), 2);
    }

    #[test]
    fn test_embedded_nul_terminates() {
        let mut stream = CharStream::new(Some(b"ab\0cd"));
        assert_eq!(stream.iterate(), Some((b'a', b'b')));
        assert_eq!(stream.iterate(), Some((b'b', TERMINATOR)));
        assert_eq!(stream.iterate(), None);
        assert!(stream.is_done());
        assert_eq!(stream.pos(), 2);
    }

    #[test]
    fn test_iterate_consumes_everything() {
        let source = b"a+b\n";
        let mut stream = CharStream::new(Some(source));
        let mut seen = Vec::new();
        while let Some((cur, _)) = stream.iterate() {
            seen.push(cur);
        }
        assert_eq!(seen, source.to_vec());
        assert_eq!(stream.pos() as usize, source.len());
    }

    #[test]
    fn test_counters_saturate() {
        let mut stream = CharStream::new(Some(b"\n\nab"));
        stream.line = u32::MAX;
        stream.pos = u32::MAX - 1;
        stream.advance();
        assert_eq!(stream.line(), u32::MAX);
        assert_eq!(stream.pos(), u32::MAX);
        stream.advance();
        stream.advance();
        assert_eq!(stream.current(), b'b');
        assert_eq!(stream.line(), u32::MAX);
        assert_eq!(stream.pos(), u32::MAX);
    }

    #[test]
    fn test_peek_does_not_mutate() {
        let stream = CharStream::new(Some(b"xy"));
        let before = (stream.pair(), stream.line(), stream.pos());
        let _ = stream.peek();
        let _ = stream.current();
        assert_eq!(before, (stream.pair(), stream.line(), stream.pos()));
    }
}
