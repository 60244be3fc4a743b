//! cmptok-lex - Tokenizer for C/C++-like source text
//!
//! This crate turns a source buffer into a lazy sequence of classified
//! tokens, each tagged with the line and running position of its first
//! character. It is meant for tools that compare or analyze source text,
//! such as fuzzy-matching decompiled code against the source it came from,
//! and is not a compiler front end.
//!
//! # Example Usage
//!
//! ```
//! use cmptok_lex::{Tokenizer, TokenKind};
//!
//! let source = "if (x->len >= 10) /* big */ return 0;";
//! let tokens: Vec<_> = Tokenizer::new(source).collect();
//!
//! let values: Vec<&str> = tokens.iter().map(|t| t.value.as_str()).collect();
//! assert_eq!(values, ["(", "->", ">=", "10", ")", "/* big */", "0", ";"]);
//! assert_eq!(tokens[5].kind, TokenKind::BlockComment);
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token and token kind definitions
//! - [`lexer`] - The tokenizer and its per-family readers
//! - [`cursor`] - Byte stream with one byte of lookahead
//! - [`accumulator`] - Growable buffer for token text
//! - [`classify`] - ASCII byte classes
//! - [`binding`] - Iterator adapters
//!
//! # What Is a Token
//!
//! | Kind | Example |
//! |------|---------|
//! | `LINE_COMMENT` | `// note` (newline excluded) |
//! | `BLOCK_COMMENT` | `/* note */` |
//! | `STRING` | `"a \"quoted\" word"` |
//! | `CONST` | `42`, `0x1F`, `3.14f`, `.5` |
//! | `OPERATOR` | `+`, `<<=`, `->`, `::`, `{` |
//!
//! Identifiers, keywords, newlines and the bodies of preprocessor
//! directives produce no tokens; their characters are skipped. Character
//! literals are not special: `'x'` yields two `'` operators.
//!
//! # Unterminated Input
//!
//! A string literal or block comment that runs into the end of input is
//! still returned, with [`Token::truncated`] set. Attach a
//! [`Handler`](cmptok_util::Handler) with [`Tokenizer::with_handler`] to
//! also receive a warning diagnostic for each one.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod accumulator;
pub mod binding;
pub mod classify;
pub mod cursor;
pub mod lexer;
pub mod token;

#[cfg(test)]
mod edge_cases;

// Re-export main types for convenience
pub use binding::{tokenize, TokenTuple, Tuples};
pub use cursor::CharStream;
pub use lexer::Tokenizer;
pub use token::{Token, TokenKind};
