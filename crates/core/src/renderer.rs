//! Tree rendering
//!
//! Sorting the path set by code point recovers tree order: an entry is a
//! proper prefix of each of its descendants, so it always sorts before them.

use crate::config::DEFAULT_INDENT_WIDTH;
use crate::models::{Delimiter, PathSet, TreeLine};

/// Printed before a raw dump
pub const RAW_DUMP_NOTICE: &str =
    "Cannot display a tree for this document: tree structure could not be inferred. Raw dump of collected paths:";

/// Lays out and formats collected paths
#[derive(Debug, Clone)]
pub struct TreeRenderer {
    indent_unit: String,
}

impl Default for TreeRenderer {
    fn default() -> Self {
        Self::new(" ".repeat(DEFAULT_INDENT_WIDTH))
    }
}

impl TreeRenderer {
    pub fn new(indent_unit: impl Into<String>) -> Self {
        Self {
            indent_unit: indent_unit.into(),
        }
    }

    /// Sorted entries with their depth and own label
    pub fn layout(&self, paths: &PathSet, delimiter: Delimiter) -> Vec<TreeLine> {
        let delim = delimiter.as_char();
        paths
            .sorted()
            .into_iter()
            .map(|entry| TreeLine {
                depth: entry.matches(delim).count(),
                label: last_segment(entry, delim).to_string(),
                path: entry.to_string(),
            })
            .collect()
    }

    /// Indented display lines, one per entry
    pub fn render(&self, paths: &PathSet, delimiter: Delimiter) -> Vec<String> {
        self.layout(paths, delimiter)
            .iter()
            .map(|line| line.display(&self.indent_unit))
            .collect()
    }

    /// Notice followed by every entry unmodified, in collection order
    pub fn render_raw(&self, paths: &PathSet) -> Vec<String> {
        std::iter::once(RAW_DUMP_NOTICE.to_string())
            .chain(paths.entries().iter().cloned())
            .collect()
    }
}

/// Text after the last occurrence of `delim`
fn last_segment(entry: &str, delim: char) -> &str {
    match entry.rfind(delim) {
        Some(idx) => &entry[idx + delim.len_utf8()..],
        None => entry,
    }
}
