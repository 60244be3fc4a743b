//! Diagnostic codes for categorizing tokenizer warnings.
//!
//! # Examples
//!
//! ```
//! use cmptok_util::diagnostic::DiagnosticCode;
//!
//! let code = DiagnosticCode::W0101;
//! assert_eq!(code.prefix(), "W");
//! assert_eq!(code.number(), 101);
//! assert_eq!(code.as_str(), "W0101");
//! ```

use std::fmt;

/// A unique code identifying a diagnostic message
///
/// Codes follow the format `{prefix}{number}` where `prefix` is "E" for
/// errors or "W" for warnings and `number` is padded to four digits.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiagnosticCode {
    /// The prefix (e.g., "E" for error, "W" for warning)
    pub prefix: &'static str,
    /// The numeric identifier
    pub number: u32,
}

impl DiagnosticCode {
    /// Create a new diagnostic code
    ///
    /// ```
    /// use cmptok_util::diagnostic::DiagnosticCode;
    ///
    /// let code = DiagnosticCode::new("E", 1001);
    /// assert_eq!(code.as_str(), "E1001");
    /// ```
    #[inline]
    pub const fn new(prefix: &'static str, number: u32) -> Self {
        Self { prefix, number }
    }

    /// Get the prefix
    #[inline]
    pub const fn prefix(&self) -> &'static str {
        self.prefix
    }

    /// Get the numeric identifier
    #[inline]
    pub const fn number(&self) -> u32 {
        self.number
    }

    /// Get the full code string (e.g., "W0101")
    pub fn as_str(&self) -> String {
        format!("{}{:04}", self.prefix, self.number)
    }

    // =========================================================================
    // TOKENIZER WARNINGS (W0100-W0199)
    // =========================================================================

    /// W0101: String literal reached end of input before its closing quote
    pub const W0101: Self = Self::new("W", 101);
    /// W0102: Block comment reached end of input before its closing `*/`
    pub const W0102: Self = Self::new("W", 102);
}

/// Alias for [`DiagnosticCode::W0101`].
pub const W_UNTERMINATED_STRING: DiagnosticCode = DiagnosticCode::W0101;
/// Alias for [`DiagnosticCode::W0102`].
pub const W_UNTERMINATED_BLOCK_COMMENT: DiagnosticCode = DiagnosticCode::W0102;

impl fmt::Debug for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DiagnosticCode({})", self.as_str())
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:04}", self.prefix, self.number)
    }
}
