//! Source positions.
//!
//! A [`Position`] pairs a 1-based line number with a 0-based running
//! character position. The running position counts every character consumed
//! from the start of the buffer and is never reset at a line break.

use std::fmt;

/// Location of a token in its source buffer.
///
/// # Examples
///
/// ```
/// use cmptok_util::Position;
///
/// let pos = Position::new(2, 17);
/// assert_eq!(pos.line, 2);
/// assert_eq!(pos.pos, 17);
/// assert_eq!(pos.to_string(), "2:17");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    /// Line number (1-based).
    pub line: u32,
    /// Running character position (0-based, not reset per line).
    pub pos: u32,
}

impl Position {
    /// Position of the first character of a buffer.
    pub const START: Position = Position { line: 1, pos: 0 };

    /// Creates a new position.
    #[inline]
    pub const fn new(line: u32, pos: u32) -> Self {
        Self { line, pos }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::START
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.pos)
    }
}
