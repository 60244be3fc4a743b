//! Command modules for the cmpt CLI.
//!
//! Each subcommand lives in its own file and implements
//! [`traits::Command`].

pub mod common;
pub mod traits;

pub mod lex;
pub mod stats;

pub use lex::{run_lex, LexArgs};
pub use stats::{run_stats, StatsArgs};
