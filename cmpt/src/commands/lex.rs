//! Lex command implementation.
//!
//! Prints the token stream of each input, as text lines or JSON.

use std::io::Write;
use std::path::PathBuf;

use cmptok_lex::{Token, TokenKind, Tokenizer};
use cmptok_util::{Diagnostic, Handler};
use serde::Serialize;

use crate::commands::common::{
    kind_selected, parse_kinds, read_source, validate_inputs, OutputFormat,
};
use crate::commands::traits::Command;
use crate::config::Config;
use crate::error::{CmptError, Result};

/// Arguments for the lex command.
#[derive(Debug, Clone, Default)]
pub struct LexArgs {
    /// Enable verbose output.
    pub verbose: bool,
    /// Input files, or a single `-` for stdin.
    pub input: Vec<PathBuf>,
    /// Output format; falls back to the configuration.
    pub format: Option<String>,
    /// Kind names to keep; falls back to the configuration.
    pub kinds: Vec<String>,
    /// Fail on truncated tokens.
    pub strict: bool,
}

/// A token as printed in JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenRecord {
    /// Kind name, e.g. `OPERATOR`.
    pub kind: &'static str,
    /// Integer kind code.
    pub code: u8,
    /// Line of the first character.
    pub line: u32,
    /// Running position of the first character.
    pub pos: u32,
    /// Verbatim token text.
    pub value: String,
    /// Cut short by end of input.
    pub truncated: bool,
}

impl From<Token> for TokenRecord {
    fn from(token: Token) -> Self {
        Self {
            kind: token.kind.name(),
            code: token.kind.code(),
            line: token.line,
            pos: token.pos,
            value: token.value,
            truncated: token.truncated,
        }
    }
}

/// Tokens of one input.
#[derive(Debug, Clone, Serialize)]
pub struct FileTokens {
    /// Input name.
    pub file: String,
    /// Tokens that passed the kind filter.
    pub tokens: Vec<TokenRecord>,
    /// Warnings raised while tokenizing.
    #[serde(skip)]
    pub diagnostics: Vec<Diagnostic>,
}

/// Lex command handler.
pub struct LexCommand {
    args: LexArgs,
    format: OutputFormat,
    kinds: Vec<TokenKind>,
    strict: bool,
}

impl LexCommand {
    /// Tokenize a buffer, keeping the tokens that pass the kind filter.
    fn lex_one(&self, name: String, bytes: &[u8]) -> FileTokens {
        let handler = Handler::new();
        let tokens = Tokenizer::from_bytes(bytes)
            .with_handler(&handler)
            .filter(|token| kind_selected(&self.kinds, token.kind))
            .map(TokenRecord::from)
            .collect();

        FileTokens {
            file: name,
            tokens,
            diagnostics: handler.take(),
        }
    }

    fn render_text(&self, files: &[FileTokens], out: &mut dyn Write) -> Result<()> {
        let with_headers = files.len() > 1;
        for file in files {
            if with_headers {
                writeln!(out, "==> {} <==", file.file)?;
            }
            for token in &file.tokens {
                writeln!(out, "{}:{} {} {:?}", token.line, token.pos, token.kind, token.value)?;
            }
        }
        Ok(())
    }
}

impl Command for LexCommand {
    type Args = LexArgs;
    type Output = Vec<FileTokens>;

    fn new(args: LexArgs, config: Config) -> Result<Self> {
        validate_inputs(&args.input)?;

        let format = args
            .format
            .as_deref()
            .unwrap_or(&config.lex.format)
            .parse::<OutputFormat>()?;
        let kinds = if args.kinds.is_empty() {
            parse_kinds(&config.lex.kinds)?
        } else {
            parse_kinds(&args.kinds)?
        };
        let strict = args.strict || config.lex.strict;

        Ok(Self {
            args,
            format,
            kinds,
            strict,
        })
    }

    fn collect(&self) -> Result<Vec<FileTokens>> {
        self.args
            .input
            .iter()
            .map(|path| {
                let input = read_source(path)?;
                Ok(self.lex_one(input.name, &input.bytes))
            })
            .collect()
    }

    fn render(&self, files: &Vec<FileTokens>, out: &mut dyn Write) -> Result<()> {
        match self.format {
            OutputFormat::Text => self.render_text(files, out),
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut *out, files)?;
                writeln!(out)?;
                Ok(())
            }
        }
    }

    fn name() -> &'static str {
        "lex"
    }
}

/// Run the lex command.
///
/// Warnings for truncated tokens go to stderr. In strict mode any truncated
/// token, filtered out or not, makes the command fail after printing.
pub fn run_lex(args: LexArgs, config: Config) -> Result<()> {
    let verbose = args.verbose;
    let command = LexCommand::new(args, config)?;
    let files = command.execute()?;

    let mut truncated = 0;
    for file in &files {
        for diagnostic in &file.diagnostics {
            eprintln!("{}: {}", file.file, diagnostic);
        }
        truncated += file.diagnostics.len();
    }

    if verbose {
        let total: usize = files.iter().map(|f| f.tokens.len()).sum();
        eprintln!("{} token(s) from {} input(s)", total, files.len());
    }

    if command.strict && truncated > 0 {
        return Err(CmptError::CommandExecution(format!(
            "{} truncated token(s) in strict mode",
            truncated
        )));
    }
    Ok(())
}
