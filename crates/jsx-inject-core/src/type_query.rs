//! Return-type inspection capability.
//!
//! The locator decides whether an exported declaration is a component by
//! asking a [`TypeQuery`] for its return type. The engine depends only on
//! this interface, not on any type-system internals, so richer
//! implementations (a language service, a checker) can slot in without
//! touching the wrap logic.

use thiserror::Error;

use jsx_inject_syntax::ExportedDeclaration;

/// Type texts recognised as JSX element types.
const JSX_ELEMENT_TYPES: &[&str] = &[
    "JSX.Element",
    "React.JSX.Element",
    "ReactElement",
    "React.ReactElement",
];

/// A failed return-type inspection.
///
/// Inspection failures are declaration-granular: the locator logs them
/// and skips the declaration without aborting the batch.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("return-type inspection failed: {message}")]
pub struct TypeQueryError {
    message: String,
}

impl TypeQueryError {
    /// Creates a new inspection failure.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Capability for inspecting a declaration's return type.
pub trait TypeQuery {
    /// Returns the declared (or inferred, for richer implementations)
    /// return type of a declaration, if it has one.
    ///
    /// # Errors
    ///
    /// Returns an error when inspection fails; the caller skips the
    /// declaration and continues.
    fn declared_return_type(
        &self,
        decl: &ExportedDeclaration,
    ) -> Result<Option<String>, TypeQueryError>;

    /// Returns whether a type's text denotes a JSX element type.
    fn is_jsx_element_type(&self, type_text: &str) -> bool;
}

/// The built-in [`TypeQuery`]: reads the declared return-type annotation
/// collected at parse time. It has no checker, so unannotated components
/// are not recognised.
#[derive(Debug, Default, Clone, Copy)]
pub struct AnnotationTypeQuery;

impl TypeQuery for AnnotationTypeQuery {
    fn declared_return_type(
        &self,
        decl: &ExportedDeclaration,
    ) -> Result<Option<String>, TypeQueryError> {
        Ok(decl.return_type.clone())
    }

    fn is_jsx_element_type(&self, type_text: &str) -> bool {
        JSX_ELEMENT_TYPES.contains(&type_text.trim())
    }
}
