//! Tree-sitter parsing wrapper for TSX source files.
//!
//! This module provides a high-level interface for parsing TSX source code
//! using Tree-sitter. The parser is error-tolerant: a parse produces a
//! [`SourceTree`] even when the source contains syntax errors, and callers
//! can inspect those errors through [`SourceTree::errors`].

use crate::error::SyntaxError;
use crate::tree::SourceTree;

/// Tree-sitter parser configured for the TSX dialect.
///
/// TSX is a superset of TypeScript, so plain `.ts` sources parse as well.
/// Create one parser and reuse it across files; parsing is stateless
/// between calls.
pub struct Parser {
    inner: tree_sitter::Parser,
}

impl Parser {
    /// Creates a new TSX parser.
    ///
    /// # Errors
    ///
    /// Returns an error if the Tree-sitter parser cannot be initialised
    /// with the TSX grammar.
    pub fn new() -> Result<Self, SyntaxError> {
        let mut inner = tree_sitter::Parser::new();
        inner
            .set_language(&tree_sitter_typescript::LANGUAGE_TSX.into())
            .map_err(|e| SyntaxError::parser_init(e.to_string()))?;

        Ok(Self { inner })
    }

    /// Parses source text into a [`SourceTree`].
    ///
    /// Tree-sitter is error-tolerant, so this returns a tree even if the
    /// source contains syntax errors. Use [`SourceTree::has_errors`] to
    /// check for them.
    ///
    /// # Errors
    ///
    /// Returns an error if the parser fails to produce a syntax tree at
    /// all, which typically indicates a parser configuration issue.
    pub fn parse(&mut self, source: impl Into<String>) -> Result<SourceTree, SyntaxError> {
        let source = source.into();
        let tree = self
            .inner
            .parse(&source, None)
            .ok_or_else(|| SyntaxError::parse("parsing failed"))?;

        Ok(SourceTree::new(source, tree))
    }
}
