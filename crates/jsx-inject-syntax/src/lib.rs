//! Tree-sitter powered TSX parsing for the jsx-inject toolchain.
//!
//! This crate is the parsing collaborator of the wrap engine. It provides:
//!
//! - **Parsing** via [`Parser`], producing a [`SourceTree`] per file
//! - **Deferred edits** via the [`SourceTree`] span arena: tracked spans
//!   survive earlier splices where possible and are "forgotten" when an
//!   overlapping splice invalidates them
//! - **Export enumeration** via [`exported_declarations`], with each
//!   export's binding name, default-ness, and declared return type
//! - **Return-site extraction** via [`return_expressions`]
//! - **JSX classification** via [`element_at`] and [`descendant_elements`]
//! - **Import views** via [`import_declarations`] and
//!   [`import_insertion_offset`]
//!
//! # Example
//!
//! ```no_run
//! use jsx_inject_syntax::{Parser, element_at, exported_declarations, return_expressions};
//!
//! let mut parser = Parser::new()?;
//! let tree = parser.parse("export function App(): JSX.Element { return <div />; }")?;
//!
//! for decl in exported_declarations(&tree) {
//!     for ret in return_expressions(&tree, &decl) {
//!         if let Some(element) = element_at(&tree, &ret.range) {
//!             let _ = element.tag;
//!         }
//!     }
//! }
//! # Ok::<(), jsx_inject_syntax::SyntaxError>(())
//! ```

mod error;
mod exports;
mod imports;
mod jsx;
mod parser;
mod strings;
mod tree;
mod walk;

pub use error::SyntaxError;
pub use exports::{ExportedDeclaration, ReturnExpression, exported_declarations, return_expressions};
pub use imports::{ImportDeclaration, import_declarations, import_insertion_offset};
pub use jsx::{JsxElement, JsxKind, descendant_elements, element_at};
pub use parser::Parser;
pub use strings::{StringLiteral, string_literals};
pub use tree::{SourceTree, SpanId, SyntaxErrorInfo};
