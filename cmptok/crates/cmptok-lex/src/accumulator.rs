//! Token text accumulation.

/// Collects the raw bytes of the token being read.
///
/// The buffer grows as needed, so a token of any length is kept intact.
/// [`finish`](Accumulator::finish) hands the text out as an owned `String`
/// and leaves the accumulator empty for the next token.
#[derive(Debug, Default)]
pub struct Accumulator {
    buf: Vec<u8>,
}

impl Accumulator {
    /// Creates an empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one byte.
    #[inline]
    pub fn push(&mut self, c: u8) {
        self.buf.push(c);
    }

    /// Number of bytes collected so far.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// True when nothing has been collected.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Takes the collected text, leaving the accumulator empty.
    ///
    /// Bytes that are not valid UTF-8 are replaced with U+FFFD.
    pub fn finish(&mut self) -> String {
        let bytes = std::mem::take(&mut self.buf);
        match String::from_utf8(bytes) {
            Ok(text) => text,
            Err(err) => String::from_utf8_lossy(err.as_bytes()).into_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finish_resets() {
        let mut acc = Accumulator::new();
        for c in b"<<=" {
            acc.push(*c);
        }
        assert_eq!(acc.len(), 3);
        assert_eq!(acc.finish(), "<<=");
        assert!(acc.is_empty());
        assert_eq!(acc.finish(), "");
    }

    #[test]
    fn test_grows_past_any_fixed_capacity() {
        let mut acc = Accumulator::new();
        for _ in 0..10_000 {
            acc.push(b'x');
        }
        assert_eq!(acc.finish(), "x".repeat(10_000));
    }

    #[test]
    fn test_finished_values_are_independent() {
        let mut acc = Accumulator::new();
        acc.push(b'a');
        let first = acc.finish();
        acc.push(b'b');
        let second = acc.finish();
        assert_eq!(first, "a");
        assert_eq!(second, "b");
    }

    #[test]
    fn test_invalid_utf8_is_lossy() {
        let mut acc = Accumulator::new();
        acc.push(b'"');
        acc.push(0xff);
        acc.push(b'"');
        assert_eq!(acc.finish(), "\"\u{FFFD}\"");
    }

    #[test]
    fn test_multibyte_utf8_survives() {
        let mut acc = Accumulator::new();
        for c in "\"é\"".bytes() {
            acc.push(c);
        }
        assert_eq!(acc.finish(), "\"é\"");
    }
}
