//! cmpt - command-line front end for the cmptok tokenizer.
//!
//! Prints the token stream of C/C++-like source files, or a per-kind
//! summary of it. Arguments are parsed with clap and dispatched to the
//! command handlers in [`commands`].

mod commands;
mod config;
mod error;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{run_lex, run_stats, LexArgs, StatsArgs};
use config::Config;
use error::{CmptError, Result};

/// cmpt - tokenize C/C++-like source for comparison
#[derive(Parser, Debug)]
#[command(name = "cmpt")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Tokenize C/C++-like source for comparison", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "CMPT_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "CMPT_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "CMPT_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the cmpt CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the tokens of each input
    ///
    /// One line per token, `line:pos KIND "value"`, or a JSON array with
    /// one entry per input.
    Lex(LexCommand),

    /// Count tokens by kind
    ///
    /// Also reports truncated tokens and the number of characters consumed.
    Stats(StatsCommand),
}

/// Arguments for the lex subcommand.
#[derive(Parser, Debug)]
struct LexCommand {
    /// Input files; `-` reads standard input
    #[arg(required = true)]
    input: Vec<PathBuf>,

    /// Output format (text, json)
    #[arg(short = 'F', long)]
    format: Option<String>,

    /// Only print tokens of this kind (repeatable)
    #[arg(short, long = "kind")]
    kinds: Vec<String>,

    /// Exit with an error if any token was cut short by end of input
    #[arg(long)]
    strict: bool,
}

/// Arguments for the stats subcommand.
#[derive(Parser, Debug)]
struct StatsCommand {
    /// Input files; `-` reads standard input
    #[arg(required = true)]
    input: Vec<PathBuf>,

    /// Output format (text, json)
    #[arg(short = 'F', long)]
    format: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logging comes up before the config file is read, so its level follows
    // the command line and `RUST_LOG` only.
    init_logging(cli.verbose, cli.no_color)?;

    let config = load_config(cli.config.as_deref())?;
    let verbose = cli.verbose || config.verbose;

    execute_command(cli.command, verbose, config)
}

/// Initialize the logging system.
///
/// Logs go to stderr so that stdout carries only command output. `RUST_LOG`
/// overrides the level picked from `verbose`.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| CmptError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&std::path::Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Execute the selected command.
fn execute_command(command: Commands, verbose: bool, config: Config) -> Result<()> {
    match command {
        Commands::Lex(args) => run_lex(
            LexArgs {
                verbose,
                input: args.input,
                format: args.format,
                kinds: args.kinds,
                strict: args.strict,
            },
            config,
        ),
        Commands::Stats(args) => run_stats(
            StatsArgs {
                verbose,
                input: args.input,
                format: args.format,
            },
            config,
        ),
    }
}
