//! Glob-based target discovery.
//!
//! Include patterns minus an optional exclude pattern, walked
//! sequentially. Hidden files are visited and ignore files are not
//! consulted; the patterns alone decide what qualifies.

use anyhow::{Context, bail};
use camino::{Utf8Path, Utf8PathBuf};
use globset::{Glob, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;
use tracing::debug;

use crate::resolve::expand_tilde;

/// Expands the include patterns into a sorted, deduplicated list of
/// target file paths.
///
/// # Errors
///
/// Fails on a malformed glob, on a walk error, or when no file matches
/// any pattern.
pub(crate) fn discover_targets(
    patterns: &[String],
    exclude: Option<&str>,
) -> anyhow::Result<Vec<Utf8PathBuf>> {
    let expanded: Vec<Utf8PathBuf> = patterns.iter().map(|p| expand_tilde(p)).collect();
    let include = build_glob_set(&expanded)?;
    let exclude = exclude
        .filter(|pattern| !pattern.is_empty())
        .map(|pattern| {
            Glob::new(expand_tilde(pattern).as_str())
                .with_context(|| format!("invalid exclude pattern {pattern}"))
                .map(|glob| glob.compile_matcher())
        })
        .transpose()?;

    let mut matches = Vec::new();
    for pattern in &expanded {
        let base = glob_base(pattern);
        let walker = WalkBuilder::new(&base).standard_filters(false).build();
        for entry in walker {
            let entry = entry.with_context(|| format!("failed to walk {base}"))?;
            if !entry.file_type().is_some_and(|kind| kind.is_file()) {
                continue;
            }
            let Some(path) = Utf8Path::from_path(entry.path()) else {
                debug!(path = %entry.path().display(), "skipping non-UTF-8 path");
                continue;
            };
            let candidate = path.as_str().strip_prefix("./").unwrap_or(path.as_str());
            if !include.is_match(candidate) {
                continue;
            }
            if exclude
                .as_ref()
                .is_some_and(|matcher| matcher.is_match(candidate))
            {
                continue;
            }
            matches.push(Utf8PathBuf::from(candidate));
        }
    }

    matches.sort();
    matches.dedup();
    if matches.is_empty() {
        bail!("{} is not found", patterns.join(", "));
    }
    debug!(targets = matches.len(), "resolved target globs");
    Ok(matches)
}

fn build_glob_set(patterns: &[Utf8PathBuf]) -> anyhow::Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = Glob::new(pattern.as_str())
            .with_context(|| format!("invalid target pattern {pattern}"))?;
        builder.add(glob);
    }
    builder.build().context("failed to compile target patterns")
}

/// The longest literal prefix of a glob pattern, used as the walk root.
fn glob_base(pattern: &Utf8Path) -> Utf8PathBuf {
    let mut base = Utf8PathBuf::new();
    for component in pattern.components() {
        let text = component.as_str();
        if text.contains(['*', '?', '[', '{']) {
            break;
        }
        base.push(text);
    }
    if base.as_str().is_empty() {
        Utf8PathBuf::from(".")
    } else {
        base
    }
}
