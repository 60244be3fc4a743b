//! Fluent construction of diagnostics.

use super::{Diagnostic, DiagnosticCode, Handler, Level};
use crate::Position;

/// Builder for constructing diagnostics with a fluent API
///
/// # Examples
///
/// ```
/// use cmptok_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Level};
/// use cmptok_util::Position;
///
/// let diag = DiagnosticBuilder::warning("unterminated block comment")
///     .code(DiagnosticCode::W0102)
///     .position(Position::new(4, 80))
///     .note("comment text runs to end of input")
///     .build();
///
/// assert_eq!(diag.level, Level::Warning);
/// assert_eq!(diag.notes.len(), 1);
/// ```
#[derive(Debug)]
pub struct DiagnosticBuilder {
    level: Level,
    message: String,
    position: Position,
    code: Option<DiagnosticCode>,
    notes: Vec<String>,
    helps: Vec<String>,
}

impl DiagnosticBuilder {
    /// Create a new diagnostic builder
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            position: Position::START,
            code: None,
            notes: Vec::new(),
            helps: Vec::new(),
        }
    }

    /// Create an error builder
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Level::Error, message)
    }

    /// Create a warning builder
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Level::Warning, message)
    }

    /// Set the diagnostic code
    pub fn code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Set the source position
    pub fn position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    /// Add a note to the diagnostic
    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Add a help suggestion to the diagnostic
    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.helps.push(help.into());
        self
    }

    /// Build the diagnostic
    pub fn build(self) -> Diagnostic {
        Diagnostic {
            level: self.level,
            message: self.message,
            position: self.position,
            code: self.code,
            notes: self.notes,
            helps: self.helps,
        }
    }

    /// Build and emit the diagnostic to the given handler
    ///
    /// ```
    /// use cmptok_util::diagnostic::{DiagnosticBuilder, Handler};
    ///
    /// let handler = Handler::new();
    /// DiagnosticBuilder::error("something went wrong").emit(&handler);
    ///
    /// assert!(handler.has_errors());
    /// ```
    pub fn emit(self, handler: &Handler) {
        handler.emit_diagnostic(self.build());
    }
}
