//! Path resolution helpers: `~/` expansion and wrapper-file probing.

use anyhow::bail;
use camino::{Utf8Path, Utf8PathBuf};

/// Extensions probed when a config entry's import path omits one, most
/// specific first.
const PROBE_EXTENSIONS: &[&str] = &["tsx", "ts", "jsx", "js"];

/// Expands a leading `~/` to the user's home directory.
///
/// Paths without the prefix, and systems where the home directory is
/// unknown or not UTF-8, pass through unchanged.
pub(crate) fn expand_tilde(path: &str) -> Utf8PathBuf {
    let Some(rest) = path.strip_prefix("~/") else {
        return Utf8PathBuf::from(path);
    };
    let Some(home) = dirs::home_dir().and_then(|dir| Utf8PathBuf::from_path_buf(dir).ok()) else {
        return Utf8PathBuf::from(path);
    };
    home.join(rest)
}

/// Resolves a config entry's import path to the wrapper's source file.
///
/// The path is tried as written first, then with each of `.tsx`, `.ts`,
/// `.jsx`, and `.js` appended. Relative paths resolve against the
/// current working directory.
///
/// # Errors
///
/// Fails when no probe finds a file, mirroring the fatal
/// import-file-not-found behaviour of the wrap run itself.
pub(crate) fn resolve_wrapper_file(import_path: &str) -> anyhow::Result<Utf8PathBuf> {
    let base = expand_tilde(import_path);
    if base.is_file() {
        return Ok(base);
    }
    for extension in PROBE_EXTENSIONS {
        let candidate = Utf8PathBuf::from(format!("{base}.{extension}"));
        if candidate.is_file() {
            return Ok(candidate);
        }
    }
    bail!("import file not found for {import_path}");
}

/// Returns whether `path` carries one of the source extensions the tool
/// accepts as a wrapper input.
pub(crate) fn has_source_extension(path: &str) -> bool {
    Utf8Path::new(path)
        .extension()
        .is_some_and(|ext| PROBE_EXTENSIONS.contains(&ext))
}
