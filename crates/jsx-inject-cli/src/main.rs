//! CLI entrypoint for the jsx-inject tool.
//!
//! The binary delegates to [`jsx_inject_cli::run`], which parses
//! arguments, discovers target files, and drives the wrap engine.

use std::io::{self, StderrLock, StdoutLock};
use std::process::ExitCode;

fn main() -> ExitCode {
    let mut stdout: StdoutLock<'_> = io::stdout().lock();
    let mut stderr: StderrLock<'_> = io::stderr().lock();
    jsx_inject_cli::run(std::env::args_os(), &mut stdout, &mut stderr)
}
