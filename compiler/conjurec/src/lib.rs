//! Library side of the `conjurec` command.
//!
//! Kept separate from `main.rs` so the whole command can be driven from
//! tests with in-memory readers and writers.

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Once;

use clap::{Parser, ValueEnum};
use conjure_parse::{ParserConfig, TypeCounter, TypeDescriptor, TypeParser, DEFAULT_MAX_DEPTH};
use thiserror::Error;
use tracing::{debug, info_span};

/// Check Conjure type expressions and print their canonical form.
#[derive(Parser, Debug)]
#[command(name = "conjurec", version)]
#[command(about = "Check Conjure type expressions", long_about = None)]
pub struct Cli {
    /// Type expressions to parse. Read one per line from stdin if omitted.
    pub exprs: Vec<String>,

    /// Read expressions from a file, one per line
    #[arg(long, short = 'f', value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// How to print parsed types
    #[arg(long, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    /// Maximum nesting of composite types
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    pub max_depth: usize,

    /// Allow whitespace around each expression
    #[arg(long)]
    pub trim: bool,

    /// Print how often each construct was parsed
    #[arg(long)]
    pub stats: bool,

    /// Render log output as an indented tree
    #[arg(long)]
    pub trace_tree: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Canonical type expression
    Text,
    /// Rust debug rendering of the descriptor tree
    Debug,
    /// One JSON document per line
    Json,
}

/// Failures outside of type expressions themselves.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("failed to read {}: {source}", path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read standard input: {0}")]
    ReadStdin(#[source] io::Error),

    #[error("failed to write output: {0}")]
    Write(#[from] io::Error),

    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Outcome counts for one invocation.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    pub parsed: usize,
    pub failed: usize,
}

static TRACING_INIT: Once = Once::new();

/// Install the log subscriber if `CONJURE_LOG` or `RUST_LOG` is set.
///
/// Safe to call more than once; only the first call has an effect.
pub fn init_tracing(tree: bool) {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let Some(directives) = ["CONJURE_LOG", "RUST_LOG"]
            .into_iter()
            .find_map(|var| std::env::var(var).ok())
        else {
            return;
        };
        let filter = EnvFilter::new(directives);

        if tree {
            tracing_subscriber::registry()
                .with(
                    tracing_tree::HierarchicalLayer::new(2)
                        .with_targets(true)
                        .with_indent_lines(true),
                )
                .with(filter)
                .init();
        } else {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_level(true)
                        .with_writer(io::stderr),
                )
                .with(filter)
                .init();
        }
    });
}

/// Parse every expression selected by `cli`.
///
/// Parsed types go to `out` in the chosen format; diagnostics go to `err`.
/// Returns an error only for I/O and encoding problems, never for a
/// malformed expression.
pub fn run(
    cli: &Cli,
    stdin: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<Summary, CliError> {
    let exprs = collect_inputs(cli, stdin)?;

    let counter = TypeCounter::new();
    let config = ParserConfig::default()
        .with_max_depth(cli.max_depth)
        .with_trim(cli.trim);
    let parser = TypeParser::new().with_config(config).with_observer(&counter);

    let mut summary = Summary::default();
    for (index, expr) in exprs.iter().enumerate() {
        let _span = info_span!("expr", index).entered();
        match parser.parse(expr) {
            Ok(ty) => {
                summary.parsed += 1;
                print_type(&ty, cli.format, out)?;
            }
            Err(error) => {
                summary.failed += 1;
                debug!(code = %error.code(), "rejected");
                err.write_all(error.render().as_bytes())?;
            }
        }
    }

    if cli.stats {
        print_stats(&counter, out)?;
    }
    Ok(summary)
}

/// Command-line expressions and `--file` lines, in that order; stdin only
/// when neither was given.
fn collect_inputs(cli: &Cli, stdin: &mut dyn BufRead) -> Result<Vec<String>, CliError> {
    let mut exprs = cli.exprs.clone();

    if let Some(path) = &cli.file {
        let text = fs::read_to_string(path).map_err(|source| CliError::ReadFile {
            path: path.clone(),
            source,
        })?;
        exprs.extend(non_blank_lines(&text));
    }

    if cli.exprs.is_empty() && cli.file.is_none() {
        let mut text = String::new();
        stdin
            .read_to_string(&mut text)
            .map_err(CliError::ReadStdin)?;
        exprs.extend(non_blank_lines(&text));
    }

    Ok(exprs)
}

fn non_blank_lines(text: &str) -> impl Iterator<Item = String> + '_ {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .map(str::to_owned)
}

fn print_type(ty: &TypeDescriptor, format: Format, out: &mut dyn Write) -> Result<(), CliError> {
    match format {
        Format::Text => writeln!(out, "{ty}")?,
        Format::Debug => writeln!(out, "{ty:#?}")?,
        Format::Json => writeln!(out, "{}", serde_json::to_string(ty)?)?,
    }
    Ok(())
}

fn print_stats(counter: &TypeCounter, out: &mut dyn Write) -> Result<(), CliError> {
    for (kind, count) in counter.snapshot() {
        writeln!(out, "{:>18}  {count}", kind.name())?;
    }
    writeln!(out, "{:>18}  {}", "total", counter.total())?;
    Ok(())
}
