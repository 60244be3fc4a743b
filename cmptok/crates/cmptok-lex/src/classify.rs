//! Byte classes used by the tokenizer.
//!
//! All predicates work on single bytes. Anything outside ASCII is simply
//! not a member of any class.

/// Checks if a byte is an ASCII decimal digit.
///
/// ```
/// use cmptok_lex::classify::is_digit;
///
/// assert!(is_digit(b'0'));
/// assert!(is_digit(b'9'));
/// assert!(!is_digit(b'a'));
/// ```
#[inline]
pub const fn is_digit(c: u8) -> bool {
    c.is_ascii_digit()
}

/// Checks if a byte is an ASCII letter or digit.
///
/// The underscore is deliberately excluded.
///
/// ```
/// use cmptok_lex::classify::is_alphanumeric;
///
/// assert!(is_alphanumeric(b'f'));
/// assert!(is_alphanumeric(b'Z'));
/// assert!(is_alphanumeric(b'7'));
/// assert!(!is_alphanumeric(b'_'));
/// assert!(!is_alphanumeric(0xC3));
/// ```
#[inline]
pub const fn is_alphanumeric(c: u8) -> bool {
    c.is_ascii_alphanumeric()
}

/// Checks if a byte may start a punctuation token.
///
/// The class is every printable ASCII byte that is not a letter, digit or
/// underscore: `!` through `/`, `:` through `?`, `[` through `^`, and `{`
/// through `~`. Note that it includes `"`, `'`, `$`, `#` and `.`, and
/// excludes `@`, `_` and the backtick.
///
/// ```
/// use cmptok_lex::classify::is_punctuation_start;
///
/// assert!(is_punctuation_start(b'+'));
/// assert!(is_punctuation_start(b'#'));
/// assert!(is_punctuation_start(b'~'));
/// assert!(!is_punctuation_start(b'@'));
/// assert!(!is_punctuation_start(b'_'));
/// ```
#[inline]
pub const fn is_punctuation_start(c: u8) -> bool {
    matches!(c, b'!'..=b'/' | b':'..=b'?' | b'['..=b'^' | b'{'..=b'~')
}

/// Checks if a punctuation byte forms a two-character operator when repeated
/// (`++ -- && || ::`).
///
/// `=` is not in this set; `==` is formed through
/// [`can_precede_assign`].
#[inline]
pub const fn can_double(c: u8) -> bool {
    matches!(c, b'+' | b'-' | b'&' | b'|' | b':')
}

/// Checks if a punctuation byte followed by `=` forms a two-character
/// operator (`+= == != <= >=` and friends).
#[inline]
pub const fn can_precede_assign(c: u8) -> bool {
    matches!(
        c,
        b'+' | b'-' | b'*' | b'/' | b'%' | b'&' | b'|' | b'^' | b'>' | b'<' | b'=' | b'!'
    )
}
