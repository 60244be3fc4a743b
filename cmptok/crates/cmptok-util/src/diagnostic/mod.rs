//! Diagnostic module - Warning and error reporting infrastructure.
//!
//! Diagnostics are collected by a [`Handler`]. The tokenizer borrows a
//! handler when the caller wants to hear about recovered input; the CLI
//! drains it after each file and prints what it found.
//!
//! ```
//! use cmptok_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Handler};
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::warning("unterminated string literal")
//!     .code(DiagnosticCode::W0101)
//!     .emit(&handler);
//!
//! for diag in handler.diagnostics() {
//!     eprintln!("{}", diag);
//! }
//! ```

mod builder;
mod codes;

pub use builder::DiagnosticBuilder;
pub use codes::{DiagnosticCode, W_UNTERMINATED_BLOCK_COMMENT, W_UNTERMINATED_STRING};

use crate::Position;
use std::cell::RefCell;
use std::fmt;

/// Diagnostic severity level
///
/// ```
/// use cmptok_util::diagnostic::Level;
///
/// assert_eq!(format!("{}", Level::Error), "error");
/// assert_eq!(format!("{}", Level::Warning), "warning");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// An error; the consumer should treat the input as rejected
    Error,
    /// A warning; the input was processed with recovery
    Warning,
    /// Additional information about a diagnostic
    Note,
    /// A suggestion for fixing an issue
    Help,
}

impl Level {
    /// Returns true for [`Level::Error`].
    pub fn is_error(&self) -> bool {
        matches!(self, Level::Error)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Error => write!(f, "error"),
            Level::Warning => write!(f, "warning"),
            Level::Note => write!(f, "note"),
            Level::Help => write!(f, "help"),
        }
    }
}

/// A diagnostic message with severity and location
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Diagnostic severity level
    pub level: Level,
    /// Main diagnostic message
    pub message: String,
    /// Source location
    pub position: Position,
    /// Optional diagnostic code
    pub code: Option<DiagnosticCode>,
    /// Additional notes for context
    pub notes: Vec<String>,
    /// Help suggestions for fixing the issue
    pub helps: Vec<String>,
}

impl Diagnostic {
    /// Create a new diagnostic
    pub fn new(level: Level, message: impl Into<String>, position: Position) -> Self {
        Self {
            level,
            message: message.into(),
            position,
            code: None,
            notes: Vec::new(),
            helps: Vec::new(),
        }
    }

    /// Create an error diagnostic
    pub fn error(message: impl Into<String>, position: Position) -> Self {
        Self::new(Level::Error, message, position)
    }

    /// Create a warning diagnostic
    pub fn warning(message: impl Into<String>, position: Position) -> Self {
        Self::new(Level::Warning, message, position)
    }
}

/// Renders as `warning[W0101]: message (at 3:41)`, followed by one indented
/// line per note and help.
impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "{}[{}]: ", self.level, code)?,
            None => write!(f, "{}: ", self.level)?,
        }
        write!(f, "{} (at {})", self.message, self.position)?;
        for note in &self.notes {
            write!(f, "\n  = note: {}", note)?;
        }
        for help in &self.helps {
            write!(f, "\n  = help: {}", help)?;
        }
        Ok(())
    }
}

/// Diagnostic handler for collecting and reporting diagnostics
///
/// Emission goes through `&self` so one handler can be shared by several
/// borrowers within a single thread.
///
/// ```
/// use cmptok_util::diagnostic::{Diagnostic, Handler};
/// use cmptok_util::Position;
///
/// let handler = Handler::new();
/// handler.emit_diagnostic(Diagnostic::error("bad input", Position::START));
/// assert!(handler.has_errors());
/// ```
#[derive(Debug, Default)]
pub struct Handler {
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl Handler {
    /// Create a new handler
    pub fn new() -> Self {
        Self {
            diagnostics: RefCell::new(Vec::new()),
        }
    }

    /// Emit a pre-built diagnostic
    pub fn emit_diagnostic(&self, diagnostic: Diagnostic) {
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    /// Create a diagnostic builder for a warning at `position`
    pub fn build_warning(
        &self,
        position: Position,
        message: impl Into<String>,
    ) -> DiagnosticBuilder {
        DiagnosticBuilder::warning(message).position(position)
    }

    /// Check if any errors have been reported
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .borrow()
            .iter()
            .any(|d| d.level == Level::Error)
    }

    /// Get the number of errors
    pub fn error_count(&self) -> usize {
        self.count_level(Level::Error)
    }

    /// Get the number of warnings
    pub fn warning_count(&self) -> usize {
        self.count_level(Level::Warning)
    }

    fn count_level(&self, level: Level) -> usize {
        self.diagnostics
            .borrow()
            .iter()
            .filter(|d| d.level == level)
            .count()
    }

    /// Get all diagnostics
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }

    /// Remove and return all diagnostics
    pub fn take(&self) -> Vec<Diagnostic> {
        self.diagnostics.take()
    }

    /// Clear all diagnostics
    pub fn clear(&self) {
        self.diagnostics.borrow_mut().clear();
    }
}
