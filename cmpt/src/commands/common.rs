//! Common types and utilities for cmpt commands.

use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use cmptok_lex::TokenKind;

use crate::error::{CmptError, Result};

/// Path that stands for standard input.
pub const STDIN_PATH: &str = "-";

// ============================================================================
// Output Format
// ============================================================================

/// How command results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// One human-readable line per item.
    Text,
    /// Pretty-printed JSON.
    Json,
}

impl FromStr for OutputFormat {
    type Err = CmptError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(CmptError::Validation(format!(
                "{}: {}",
                error_messages::UNKNOWN_FORMAT,
                s
            ))),
        }
    }
}

// ============================================================================
// Inputs
// ============================================================================

/// One source buffer to tokenize.
#[derive(Debug, Clone)]
pub struct SourceInput {
    /// Name used in output and diagnostics.
    pub name: String,
    /// Raw contents.
    pub bytes: Vec<u8>,
}

/// Validates the list of input paths.
///
/// `-` may only appear on its own.
pub fn validate_inputs<P: AsRef<Path>>(inputs: &[P]) -> Result<()> {
    if inputs.is_empty() {
        return Err(CmptError::Validation(
            error_messages::NO_INPUT_FILES.to_string(),
        ));
    }
    if inputs.len() > 1 && inputs.iter().any(|p| is_stdin(p.as_ref())) {
        return Err(CmptError::Validation(
            error_messages::STDIN_NOT_ALONE.to_string(),
        ));
    }
    Ok(())
}

/// Reads one input, from standard input when the path is `-`.
///
/// Contents are read as bytes; no encoding is assumed.
pub fn read_source(path: &Path) -> Result<SourceInput> {
    if is_stdin(path) {
        let mut bytes = Vec::new();
        std::io::stdin().lock().read_to_end(&mut bytes)?;
        return Ok(SourceInput {
            name: "<stdin>".to_string(),
            bytes,
        });
    }

    if !path.is_file() {
        return Err(CmptError::FileOperation(format!(
            "{}: {}",
            error_messages::INPUT_PATH_NOT_FILE,
            path.display()
        )));
    }

    let bytes = std::fs::read(path)
        .map_err(|e| CmptError::FileOperation(format!("{}: {}", path.display(), e)))?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "read input");

    Ok(SourceInput {
        name: path.display().to_string(),
        bytes,
    })
}

fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == STDIN_PATH
}

// ============================================================================
// Kind Filter
// ============================================================================

/// Resolves kind names (case-insensitive) into a filter.
///
/// An empty list keeps every kind.
pub fn parse_kinds(names: &[String]) -> Result<Vec<TokenKind>> {
    names
        .iter()
        .map(|name| {
            TokenKind::from_name(name).ok_or_else(|| {
                CmptError::Validation(format!("{}: {}", error_messages::UNKNOWN_KIND, name))
            })
        })
        .collect()
}

/// True if `kind` passes the filter.
pub fn kind_selected(filter: &[TokenKind], kind: TokenKind) -> bool {
    filter.is_empty() || filter.contains(&kind)
}

// ============================================================================
// Error Messages
// ============================================================================

/// Standard error message templates.
pub mod error_messages {
    /// No input files were given.
    pub const NO_INPUT_FILES: &str = "No input files specified";

    /// `-` was mixed with other inputs.
    pub const STDIN_NOT_ALONE: &str = "'-' (stdin) must be the only input";

    /// Input path is missing or not a regular file.
    pub const INPUT_PATH_NOT_FILE: &str = "Input path is not a file";

    /// Unknown `--format` value.
    pub const UNKNOWN_FORMAT: &str = "Unknown format";

    /// Unknown `--kind` value.
    pub const UNKNOWN_KIND: &str = "Unknown token kind";
}
