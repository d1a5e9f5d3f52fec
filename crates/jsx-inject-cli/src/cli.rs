//! CLI argument definitions for the jsx-inject tool.

use camino::Utf8PathBuf;
use clap::Parser;

/// Command-line interface for wrapping JSX-returning components.
#[derive(Parser, Debug)]
#[command(
    name = "jsx-inject",
    version,
    about = "Wrap the JSX returned by exported components with a wrapper component"
)]
pub(crate) struct Cli {
    /// Path to the wrapper component's source file.
    #[arg(short, long, required_unless_present = "config")]
    pub(crate) input: Option<String>,

    /// Glob pattern selecting target files; repeatable.
    #[arg(short, long, required_unless_present = "config")]
    pub(crate) target: Vec<String>,

    /// Glob pattern excluded from the targets.
    #[arg(short, long)]
    pub(crate) exclude: Option<String>,

    /// Import path to emit in generated import statements; may be an
    /// alias that differs from the wrapper's filesystem path.
    #[arg(long, required_unless_present = "config")]
    pub(crate) import_path: Option<String>,

    /// Tag name to wrap wherever it appears in the render tree; omit to
    /// wrap each returned root element instead.
    #[arg(short = 'c', long)]
    pub(crate) target_component: Option<String>,

    /// Literal props text inserted verbatim inside the opening wrapper
    /// tag.
    #[arg(short, long)]
    pub(crate) props: Option<String>,

    /// JSON config file holding an array of run entries; replaces the
    /// other flags.
    #[arg(
        short = 'f',
        long,
        conflicts_with_all = ["input", "target", "exclude", "import_path", "target_component", "props"]
    )]
    pub(crate) config: Option<Utf8PathBuf>,
}
