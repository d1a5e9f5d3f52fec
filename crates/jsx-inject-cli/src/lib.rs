//! Command-line runtime for the jsx-inject tool.
//!
//! The runtime owns argument parsing, config-file loading, glob-based
//! target discovery, and run-summary output; the wrap engine itself
//! lives in `jsx-inject-core`. The interface is designed to be
//! exercised both from the binary entrypoint and from tests where the
//! IO streams can be substituted.

use std::ffi::OsString;
use std::io::Write;
use std::process::ExitCode;

use anyhow::{Context, bail};
use camino::Utf8Path;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use jsx_inject_core::WrapRequest;

mod cli;
mod config;
mod discover;
mod output;
mod resolve;

use cli::Cli;

/// Runs the CLI using the provided arguments and IO handles.
#[must_use]
pub fn run<I, W, E>(args: I, stdout: &mut W, stderr: &mut E) -> ExitCode
where
    I: IntoIterator<Item = OsString>,
    W: Write,
    E: Write,
{
    init_logging();

    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(error) => {
            let rendered = error.render();
            if error.use_stderr() {
                let _ = write!(stderr, "{rendered}");
                return ExitCode::from(2);
            }
            // Help and version output belong on stdout.
            let _ = write!(stdout, "{rendered}");
            return ExitCode::SUCCESS;
        }
    };

    match execute(&cli, stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            let _ = writeln!(stderr, "error: {error:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn execute<W: Write>(cli: &Cli, stdout: &mut W) -> anyhow::Result<()> {
    if let Some(config_path) = cli.config.as_deref() {
        return run_config_mode(config_path, stdout);
    }
    run_flag_mode(cli, stdout)
}

/// One run driven entirely by command-line flags; the wrapper file and
/// the emitted import path are given separately.
fn run_flag_mode<W: Write>(cli: &Cli, stdout: &mut W) -> anyhow::Result<()> {
    let input = cli.input.as_deref().context("--input is required")?;
    let import_path = cli
        .import_path
        .clone()
        .context("--import-path is required")?;

    if !resolve::has_source_extension(input) {
        bail!("{input} must be a file path ending with .js, .jsx, .ts, or .tsx");
    }
    let wrapper = resolve::expand_tilde(input);
    if !wrapper.is_file() {
        bail!("{wrapper} is invalid input file path");
    }

    let targets = discover::discover_targets(&cli.target, cli.exclude.as_deref())?;
    let request = WrapRequest {
        import_file_path: wrapper,
        import_path,
        targets,
        target_component: cli.target_component.clone(),
        props: cli.props.clone(),
    };
    let report = jsx_inject_core::run(&request)?;
    output::print_report(stdout, &report)?;
    Ok(())
}

/// Sequential runs driven by a JSON config file; each entry's import
/// path doubles as the wrapper-file locator, probed with source
/// extensions.
fn run_config_mode<W: Write>(path: &Utf8Path, stdout: &mut W) -> anyhow::Result<()> {
    let entries = config::load_entries(path)?;
    for entry in &entries {
        let wrapper = resolve::resolve_wrapper_file(&entry.import_path)?;
        let targets = discover::discover_targets(&entry.target, entry.exclude.as_deref())?;
        let request = WrapRequest {
            import_file_path: wrapper,
            import_path: entry.import_path.clone(),
            targets,
            target_component: entry.target_component.clone(),
            props: entry.props.clone(),
        };
        let report = jsx_inject_core::run(&request)?;
        output::print_report(stdout, &report)?;
    }
    Ok(())
}
