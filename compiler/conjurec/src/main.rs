//! Conjure type expression checker.
//!
//! Parses each expression given on the command line, in `--file`, or on
//! standard input, and prints its canonical form.

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use conjurec::{init_tracing, run, Cli};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.trace_tree);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let stderr = io::stderr();
    let mut out = stdout.lock();
    let mut err = stderr.lock();

    match run(&cli, &mut stdin.lock(), &mut out, &mut err) {
        Ok(summary) if summary.failed == 0 => ExitCode::SUCCESS,
        Ok(_) => ExitCode::from(1),
        Err(error) => {
            let _ = writeln!(err, "error: {error}");
            ExitCode::from(2)
        }
    }
}
