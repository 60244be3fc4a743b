//! Error handling module for the cmpt CLI.
//!
//! The tokenizer itself never fails; everything here comes from the
//! surface around it: reading inputs, loading configuration, writing output.

use thiserror::Error;

/// Main error type for the cmpt CLI application.
#[derive(Error, Debug)]
pub enum CmptError {
    /// Configuration could not be loaded or is invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// An input file could not be read.
    #[error("File operation failed: {0}")]
    FileOperation(String),

    /// A command-line or configuration value is not acceptable.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The command ran but its outcome counts as a failure.
    #[error("Command execution failed: {0}")]
    CommandExecution(String),

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using CmptError.
pub type Result<T> = std::result::Result<T, CmptError>;
