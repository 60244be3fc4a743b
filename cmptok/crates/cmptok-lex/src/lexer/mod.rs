//! Tokenizer module.
//!
//! The tokenizer is split into one file per token family:
//! - `core` - Tokenizer struct and dispatch
//! - `comment` - Line and block comments
//! - `string` - Double-quoted string literals
//! - `number` - Numeric constants
//! - `operator` - Operators and punctuation

mod comment;
mod core;
mod number;
mod operator;
mod string;

pub use self::core::Tokenizer;
