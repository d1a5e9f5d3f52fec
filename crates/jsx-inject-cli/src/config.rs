//! JSON config-file mode.
//!
//! A config file holds a JSON array; each entry describes one wrap run
//! and the entries execute sequentially. Field names are camelCase to
//! match the file format the tool has always consumed.

use anyhow::{Context, bail};
use camino::Utf8Path;
use serde::Deserialize;

/// One run entry from a config file.
#[derive(Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ConfigEntry {
    /// Import path emitted in generated imports; also probed on disk to
    /// find the wrapper's source file.
    pub(crate) import_path: String,
    /// Target glob patterns.
    pub(crate) target: Vec<String>,
    /// Optional glob excluded from the targets.
    #[serde(default)]
    pub(crate) exclude: Option<String>,
    /// Tag name to wrap; absent selects root mode.
    #[serde(default)]
    pub(crate) target_component: Option<String>,
    /// Literal props text for the opening wrapper tag.
    #[serde(default)]
    pub(crate) props: Option<String>,
}

/// Loads and validates the run entries from a config file.
///
/// # Errors
///
/// Fails when the file cannot be read, is not a JSON array of entries,
/// or contains no entries.
pub(crate) fn load_entries(path: &Utf8Path) -> anyhow::Result<Vec<ConfigEntry>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {path}"))?;
    let entries: Vec<ConfigEntry> = serde_json::from_str(&text)
        .with_context(|| format!("invalid config file structure in {path}"))?;
    if entries.is_empty() {
        bail!("config file {path} contains no entries");
    }
    Ok(entries)
}
