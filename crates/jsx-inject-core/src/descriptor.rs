//! Import descriptor resolution.
//!
//! Inspects the wrapper component's source file and derives the canonical
//! way to import it: default or named, and under which binding name.

use std::fs;

use camino::Utf8Path;
use tracing::{debug, warn};

use jsx_inject_syntax::{Parser, exported_declarations};

use crate::error::WrapError;

/// How the wrapper component must be imported into a target file.
///
/// Exactly one descriptor exists per wrap run; it is immutable once
/// resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportDescriptor {
    /// The import path to emit in generated import statements. This is
    /// the caller-supplied path (possibly an alias), not the wrapper's
    /// filesystem path.
    pub module_path: String,
    /// The identifier under which the wrapper is imported.
    pub binding_name: String,
    /// Whether the binding is a default import.
    pub is_default: bool,
}

/// Resolves the wrapper file's importable identity.
///
/// A default export is preferred; otherwise the first named export in
/// enumeration order is taken. Multiple named exports are not an error:
/// first-seen order is the deterministic tie-break.
///
/// # Errors
///
/// * [`WrapError::ImportFileNotFound`] when the wrapper file cannot be
///   read.
/// * [`WrapError::NoExportsFound`] when it exports nothing importable.
pub fn resolve_descriptor(
    parser: &mut Parser,
    import_file_path: &Utf8Path,
    import_path: &str,
) -> Result<ImportDescriptor, WrapError> {
    let source = fs::read_to_string(import_file_path)
        .map_err(|e| WrapError::import_file_not_found(import_file_path, e))?;
    let tree = parser.parse(source)?;

    let exports = exported_declarations(&tree);
    if exports.is_empty() {
        return Err(WrapError::no_exports_found(import_file_path));
    }

    let descriptor = if let Some(default) = exports.iter().find(|d| d.is_default) {
        // An anonymous default export falls back to the export symbol's
        // own name, which produces an unusable binding.
        let binding_name = default.name.clone().unwrap_or_else(|| {
            warn!(
                path = %import_file_path,
                "wrapper's default export is anonymous; falling back to binding name \"default\""
            );
            "default".to_owned()
        });
        ImportDescriptor {
            module_path: import_path.to_owned(),
            binding_name,
            is_default: true,
        }
    } else {
        let named = exports
            .iter()
            .find_map(|d| d.name.clone())
            .ok_or_else(|| WrapError::no_exports_found(import_file_path))?;
        ImportDescriptor {
            module_path: import_path.to_owned(),
            binding_name: named,
            is_default: false,
        }
    };

    debug!(
        binding = %descriptor.binding_name,
        default = descriptor.is_default,
        module = %descriptor.module_path,
        "resolved wrapper import"
    );

    Ok(descriptor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn wrapper_file(source: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".tsx")
            .tempfile()
            .expect("temp file");
        file.write_all(source.as_bytes()).expect("write");
        file
    }

    fn resolve(source: &str) -> Result<ImportDescriptor, WrapError> {
        let file = wrapper_file(source);
        let path = Utf8Path::from_path(file.path()).expect("utf-8 path").to_owned();
        let mut parser = Parser::new().expect("parser init");
        resolve_descriptor(&mut parser, &path, "~/wrapper")
    }

    #[test]
    fn default_export_wins_over_named() {
        let descriptor = resolve(
            "export const Other = 1;\nexport default function Theme() { return <div />; }\n",
        )
        .expect("descriptor");

        assert_eq!(descriptor.binding_name, "Theme");
        assert!(descriptor.is_default);
        assert_eq!(descriptor.module_path, "~/wrapper");
    }

    #[test]
    fn first_named_export_chosen_without_default() {
        let descriptor = resolve(
            "export function Wrap() { return <div />; }\nexport function Later() { return <div />; }\n",
        )
        .expect("descriptor");

        assert_eq!(descriptor.binding_name, "Wrap");
        assert!(!descriptor.is_default);
    }

    #[test]
    fn anonymous_default_falls_back_to_default_binding() {
        let descriptor = resolve("export default function () { return <div />; }\n")
            .expect("descriptor");

        assert_eq!(descriptor.binding_name, "default");
        assert!(descriptor.is_default);
    }

    #[test]
    fn no_exports_is_an_error() {
        let result = resolve("const hidden = 1;\n");
        assert!(matches!(result, Err(WrapError::NoExportsFound { .. })));
    }

    #[test]
    fn missing_file_is_an_error() {
        let mut parser = Parser::new().expect("parser init");
        let result = resolve_descriptor(
            &mut parser,
            Utf8Path::new("/nonexistent/wrapper.tsx"),
            "~/wrapper",
        );
        assert!(matches!(result, Err(WrapError::ImportFileNotFound { .. })));
        assert!(result.is_err_and(|e| e.is_fatal()));
    }
}
