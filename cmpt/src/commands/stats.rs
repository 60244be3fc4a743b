//! Stats command implementation.
//!
//! Summarizes each input's token stream: how many tokens of each kind, how
//! many were truncated and how many characters the tokenizer consumed.

use std::io::Write;
use std::path::PathBuf;

use cmptok_lex::{TokenKind, Tokenizer};
use indexmap::IndexMap;
use serde::Serialize;

use crate::commands::common::{read_source, validate_inputs, OutputFormat};
use crate::commands::traits::Command;
use crate::config::Config;
use crate::error::Result;

/// Arguments for the stats command.
#[derive(Debug, Clone, Default)]
pub struct StatsArgs {
    /// Enable verbose output.
    pub verbose: bool,
    /// Input files, or a single `-` for stdin.
    pub input: Vec<PathBuf>,
    /// Output format; falls back to the configuration.
    pub format: Option<String>,
}

/// Token statistics for one input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileStats {
    /// Input name.
    pub file: String,
    /// Tokens per kind name, in a fixed order. Kinds that never occur are
    /// listed with zero.
    pub by_kind: IndexMap<&'static str, usize>,
    /// Total number of tokens.
    pub total: usize,
    /// Tokens cut short by end of input.
    pub truncated: usize,
    /// Characters consumed up to the end of input.
    pub consumed: u32,
}

impl FileStats {
    /// Tokenizes `bytes` and counts the result.
    pub fn from_source(file: String, bytes: &[u8]) -> Self {
        let mut by_kind: IndexMap<&'static str, usize> = TokenKind::PRODUCED
            .iter()
            .map(|kind| (kind.name(), 0))
            .collect();
        let mut total = 0;
        let mut truncated = 0;

        let mut tokenizer = Tokenizer::from_bytes(bytes);
        for token in tokenizer.by_ref() {
            *by_kind.entry(token.kind.name()).or_insert(0) += 1;
            total += 1;
            if token.truncated {
                truncated += 1;
            }
        }

        Self {
            file,
            by_kind,
            total,
            truncated,
            consumed: tokenizer.pos(),
        }
    }
}

/// Stats command handler.
pub struct StatsCommand {
    args: StatsArgs,
    format: OutputFormat,
}

impl Command for StatsCommand {
    type Args = StatsArgs;
    type Output = Vec<FileStats>;

    fn new(args: StatsArgs, config: Config) -> Result<Self> {
        validate_inputs(&args.input)?;
        let format = args
            .format
            .as_deref()
            .unwrap_or(&config.lex.format)
            .parse::<OutputFormat>()?;
        Ok(Self { args, format })
    }

    fn collect(&self) -> Result<Vec<FileStats>> {
        self.args
            .input
            .iter()
            .map(|path| {
                let input = read_source(path)?;
                Ok(FileStats::from_source(input.name, &input.bytes))
            })
            .collect()
    }

    fn render(&self, stats: &Vec<FileStats>, out: &mut dyn Write) -> Result<()> {
        match self.format {
            OutputFormat::Text => {
                for file in stats {
                    writeln!(out, "{}", file.file)?;
                    for (kind, count) in &file.by_kind {
                        writeln!(out, "  {:<14} {}", kind, count)?;
                    }
                    writeln!(out, "  {:<14} {}", "total", file.total)?;
                    writeln!(out, "  {:<14} {}", "truncated", file.truncated)?;
                    writeln!(out, "  {:<14} {}", "consumed", file.consumed)?;
                }
            }
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut *out, stats)?;
                writeln!(out)?;
            }
        }
        Ok(())
    }

    fn name() -> &'static str {
        "stats"
    }
}

/// Run the stats command.
pub fn run_stats(args: StatsArgs, config: Config) -> Result<()> {
    let verbose = args.verbose;
    let command = StatsCommand::new(args, config)?;
    let stats = command.execute()?;

    if verbose {
        let total: usize = stats.iter().map(|s| s.total).sum();
        eprintln!("{} token(s) from {} input(s)", total, stats.len());
    }
    Ok(())
}
