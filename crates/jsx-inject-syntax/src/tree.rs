//! Parsed source files with a span arena for deferred edits.
//!
//! A [`SourceTree`] owns a file's text together with the Tree-sitter tree
//! produced from it, plus an arena of tracked spans. Spans are stable
//! handles into the text: a [`replace_span`](SourceTree::replace_span)
//! splice invalidates the replaced span and every span nested inside the
//! replaced range ("forgotten" spans), shifts spans located after it, and
//! grows spans that enclose it. A forgotten span must never be spliced
//! again; [`is_forgotten`](SourceTree::is_forgotten) guards for that.
//!
//! Query methods describe the text as originally parsed. Splices do not
//! reparse, so all tree queries for a file must happen before its first
//! splice.

use std::ops::Range;

use crate::error::SyntaxError;

/// Stable handle to a tracked span in a [`SourceTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpanId(u32);

#[derive(Debug)]
struct SpanEntry {
    start: usize,
    end: usize,
    alive: bool,
}

/// A parsed source file: text, syntax tree, and tracked spans.
pub struct SourceTree {
    text: String,
    tree: tree_sitter::Tree,
    spans: Vec<SpanEntry>,
}

impl SourceTree {
    pub(crate) const fn new(text: String, tree: tree_sitter::Tree) -> Self {
        Self {
            text,
            tree,
            spans: Vec::new(),
        }
    }

    /// Returns the current full text of the file, including any splices
    /// applied so far.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the root node of the syntax tree as parsed.
    pub(crate) fn root(&self) -> tree_sitter::Node<'_> {
        self.tree.root_node()
    }

    /// Returns the parsed text of a node.
    pub(crate) fn node_text(&self, node: tree_sitter::Node<'_>) -> &str {
        self.text.get(node.byte_range()).unwrap_or_default()
    }

    /// Returns whether the parse produced any ERROR or MISSING nodes.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        has_error_nodes(self.tree.root_node())
    }

    /// Collects all syntax errors found during parsing.
    #[must_use]
    pub fn errors(&self) -> Vec<SyntaxErrorInfo> {
        let mut errors = Vec::new();
        collect_error_nodes(self.tree.root_node(), &mut errors);
        errors
    }

    /// Registers a byte range as a tracked span and returns its handle.
    pub fn track(&mut self, range: Range<usize>) -> SpanId {
        let id = u32::try_from(self.spans.len()).unwrap_or(u32::MAX);
        self.spans.push(SpanEntry {
            start: range.start,
            end: range.end,
            alive: true,
        });
        SpanId(id)
    }

    /// Returns whether a span has been invalidated by an earlier splice.
    #[must_use]
    pub fn is_forgotten(&self, id: SpanId) -> bool {
        self.entry(id).is_none_or(|s| !s.alive)
    }

    /// Returns the current byte range of a live span.
    #[must_use]
    pub fn span_range(&self, id: SpanId) -> Option<Range<usize>> {
        self.entry(id)
            .filter(|s| s.alive)
            .map(|s| s.start..s.end)
    }

    /// Returns the current text of a live span.
    #[must_use]
    pub fn span_text(&self, id: SpanId) -> Option<&str> {
        self.span_range(id).and_then(|r| self.text.get(r))
    }

    /// Replaces a live span's text.
    ///
    /// The replaced span and every span nested inside the replaced range
    /// are forgotten. Spans after the range are shifted; spans enclosing
    /// the range grow or shrink with it.
    ///
    /// # Errors
    ///
    /// Returns [`SyntaxError::ForgottenSpan`] if the span was already
    /// invalidated, or [`SyntaxError::RangeNotOnCharBoundary`] if its
    /// range no longer falls on UTF-8 boundaries.
    pub fn replace_span(&mut self, id: SpanId, replacement: &str) -> Result<(), SyntaxError> {
        let index = usize::try_from(id.0).unwrap_or(usize::MAX);
        let Some(entry) = self.spans.get(index).filter(|s| s.alive) else {
            return Err(SyntaxError::ForgottenSpan);
        };
        let (start, end) = (entry.start, entry.end);

        if !self.text.is_char_boundary(start) || !self.text.is_char_boundary(end) {
            return Err(SyntaxError::RangeNotOnCharBoundary { start, end });
        }

        let old_len = end - start;
        let new_len = replacement.len();
        self.text.replace_range(start..end, replacement);

        for (i, span) in self.spans.iter_mut().enumerate() {
            if !span.alive {
                continue;
            }
            if i == index || (span.start >= start && span.end <= end) {
                // The replaced span itself, or a span nested in the
                // replaced range: forgotten.
                span.alive = false;
            } else if span.start >= end {
                span.start = span.start - old_len + new_len;
                span.end = span.end - old_len + new_len;
            } else if span.end <= start {
                // Entirely before the splice: unaffected.
            } else if span.start <= start && span.end >= end {
                span.end = span.end - old_len + new_len;
            } else {
                // Partial overlap; the span no longer maps to a node.
                span.alive = false;
            }
        }

        Ok(())
    }

    /// Inserts text at a byte offset, shifting tracked spans accordingly.
    ///
    /// Spans starting at or after the offset move right; spans containing
    /// the offset grow. No span is forgotten by an insertion.
    ///
    /// # Errors
    ///
    /// Returns [`SyntaxError::RangeNotOnCharBoundary`] if the offset is
    /// not a UTF-8 boundary.
    pub fn insert_text(&mut self, offset: usize, text: &str) -> Result<(), SyntaxError> {
        if !self.text.is_char_boundary(offset) {
            return Err(SyntaxError::RangeNotOnCharBoundary {
                start: offset,
                end: offset,
            });
        }

        self.text.insert_str(offset, text);
        let len = text.len();

        for span in &mut self.spans {
            if !span.alive {
                continue;
            }
            if span.start >= offset {
                span.start += len;
                span.end += len;
            } else if span.end > offset {
                span.end += len;
            }
        }

        Ok(())
    }

    fn entry(&self, id: SpanId) -> Option<&SpanEntry> {
        self.spans.get(usize::try_from(id.0).unwrap_or(usize::MAX))
    }
}

/// Information about a syntax error found during parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxErrorInfo {
    /// Byte range of the error in the source.
    pub byte_range: Range<usize>,
    /// Line number (one-based) where the error starts.
    pub line: u32,
    /// Column number (one-based) where the error starts.
    pub column: u32,
    /// Human-readable description of the error.
    pub message: String,
}

impl SyntaxErrorInfo {
    fn from_node(node: tree_sitter::Node<'_>) -> Self {
        let start = node.start_position();
        let message = if node.is_missing() {
            format!("missing {}", node.kind())
        } else {
            "syntax error".to_owned()
        };

        Self {
            byte_range: node.byte_range(),
            line: u32::try_from(start.row).unwrap_or(u32::MAX).saturating_add(1),
            column: u32::try_from(start.column)
                .unwrap_or(u32::MAX)
                .saturating_add(1),
            message,
        }
    }
}

fn has_error_nodes(node: tree_sitter::Node<'_>) -> bool {
    if node.is_error() || node.is_missing() {
        return true;
    }

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if has_error_nodes(child) {
            return true;
        }
    }

    false
}

fn collect_error_nodes(node: tree_sitter::Node<'_>, errors: &mut Vec<SyntaxErrorInfo>) {
    if node.is_error() || node.is_missing() {
        errors.push(SyntaxErrorInfo::from_node(node));
    }

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        collect_error_nodes(child, errors);
    }
}
