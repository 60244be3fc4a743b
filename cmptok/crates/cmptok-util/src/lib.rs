//! cmptok-util - Shared diagnostics and source positions
//!
//! This crate holds the small set of types every cmptok crate agrees on:
//!
//! - [`Position`] - a `(line, pos)` pair locating a token in its source
//! - [`diagnostic`] - warnings and errors collected by a [`Handler`]
//!
//! The tokenizer itself never fails. Recoverable oddities in the input (an
//! unterminated string literal, an unclosed block comment) are reported as
//! warning diagnostics when the caller attaches a [`Handler`].
//!
//! # Example
//!
//! ```
//! use cmptok_util::{DiagnosticBuilder, DiagnosticCode, Handler, Position};
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::warning("unterminated string literal")
//!     .code(DiagnosticCode::W0101)
//!     .position(Position::new(3, 41))
//!     .emit(&handler);
//!
//! assert_eq!(handler.warning_count(), 1);
//! assert!(!handler.has_errors());
//! ```

#![warn(missing_docs)]

pub mod diagnostic;
pub mod position;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, Level};
pub use position::Position;
