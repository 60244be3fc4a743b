//! Command trait shared by the cmpt subcommands.

use std::io::Write;

use crate::config::Config;
use crate::error::Result;

/// A subcommand that tokenizes its inputs and prints a report.
///
/// Collecting and rendering are separate steps so that the report can be
/// written to any sink, not only standard output.
pub trait Command: Sized {
    /// Arguments taken from the command line.
    type Args;

    /// Result of tokenizing every input.
    type Output;

    /// Create a command from its arguments and the loaded configuration.
    fn new(args: Self::Args, config: Config) -> Result<Self>;

    /// Tokenize all inputs.
    fn collect(&self) -> Result<Self::Output>;

    /// Print `output` to `out` in the selected format.
    fn render(&self, output: &Self::Output, out: &mut dyn Write) -> Result<()>;

    /// Get the command name.
    fn name() -> &'static str;

    /// Collect, then print to standard output.
    fn execute(&self) -> Result<Self::Output> {
        tracing::debug!(command = Self::name(), "running");
        let output = self.collect()?;
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        self.render(&output, &mut out)?;
        out.flush()?;
        Ok(output)
    }
}
