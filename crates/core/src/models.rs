//! Data models for XML ancestry trees
//!
//! This module defines the core data structures used throughout the xmltree tool,
//! including the element arena, collected path sets, delimiters, and rendered
//! tree reports.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::PathBuf;

/// Index of a node inside a [`Document`] arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

/// A single element: its (possibly namespace-expanded) tag and ordered children
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    /// Tag name, `{uri}local` when the element is namespaced
    pub tag: String,

    /// Child elements in document order
    pub children: Vec<NodeId>,
}

/// Parsed element tree stored as an arena
///
/// Nodes are only ever appended, and a child is always created after its
/// parent, so the structure cannot contain cycles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    nodes: Vec<Node>,
}

impl Document {
    /// Create a document holding only a root element
    pub fn new(root_tag: impl Into<String>) -> Self {
        Self {
            nodes: vec![Node {
                tag: root_tag.into(),
                children: Vec::new(),
            }],
        }
    }

    /// Id of the root element
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Append a child element under `parent` and return its id
    ///
    /// # Panics
    ///
    /// Panics if `parent` does not belong to this document.
    pub fn add_child(&mut self, parent: NodeId, tag: impl Into<String>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            tag: tag.into(),
            children: Vec::new(),
        });
        self.nodes[parent.0].children.push(id);
        id
    }

    /// Look up a node by id
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    /// Total number of elements, root included
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// A document always has a root, so this is never true
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Unique path entries in the order they were first produced
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathSet {
    entries: Vec<String>,
    seen: HashSet<String>,
    merged: usize,
}

impl PathSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a path; returns `false` (and counts a merge) when it already exists
    pub fn insert(&mut self, path: String) -> bool {
        if self.seen.contains(&path) {
            self.merged += 1;
            return false;
        }
        self.seen.insert(path.clone());
        self.entries.push(path);
        true
    }

    pub fn contains(&self, path: &str) -> bool {
        self.seen.contains(path)
    }

    /// Entries in collection order
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// First entry produced (the root's path)
    pub fn first(&self) -> Option<&str> {
        self.entries.first().map(String::as_str)
    }

    /// Entries sorted by code point
    pub fn sorted(&self) -> Vec<&str> {
        let mut sorted: Vec<&str> = self.entries.iter().map(String::as_str).collect();
        sorted.sort_unstable();
        sorted
    }

    /// Number of duplicate paths that collapsed into an existing entry
    pub fn merged(&self) -> usize {
        self.merged
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Character that separates the levels of a rendered path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Delimiter {
    /// Closing brace of a `{uri}local` namespaced tag
    Brace,
    /// Plain separator
    Dot,
}

impl Delimiter {
    pub fn as_char(self) -> char {
        match self {
            Delimiter::Brace => '}',
            Delimiter::Dot => '.',
        }
    }
}

/// One rendered tree entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeLine {
    /// Number of delimiter occurrences in the path
    pub depth: usize,

    /// Text after the last delimiter
    pub label: String,

    /// Full path entry
    pub path: String,
}

impl TreeLine {
    /// Indented display text for this line
    pub fn display(&self, indent_unit: &str) -> String {
        format!("{}{}", indent_unit.repeat(self.depth), self.label)
    }
}

/// Result of rendering a path set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum RenderOutcome {
    /// A delimiter was found and the paths were laid out as a tree
    Tree {
        delimiter: Delimiter,
        lines: Vec<TreeLine>,
    },
    /// No delimiter could be identified; entries are dumped as collected
    Raw { entries: Vec<String> },
}

impl RenderOutcome {
    pub fn is_raw(&self) -> bool {
        matches!(self, RenderOutcome::Raw { .. })
    }
}

/// Counters describing one rendered document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeStats {
    /// Elements in the parsed document
    pub total_nodes: usize,

    /// Distinct path entries
    pub unique_paths: usize,

    /// Same-named siblings that collapsed into one entry
    pub merged_paths: usize,

    /// Deepest rendered line (0 for a raw dump)
    pub max_depth: usize,
}

/// Render metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderMetadata {
    /// Time spent collecting and rendering, in milliseconds
    pub render_duration_ms: u64,

    /// RFC 3339 timestamp
    pub timestamp: String,

    /// Version of the tool
    pub tool_version: String,
}

/// Everything produced for one input document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreeReport {
    /// Input file
    pub input: PathBuf,

    /// Rendered tree or raw dump
    pub outcome: RenderOutcome,

    /// Display lines: indented labels, or the raw-dump notice and entries
    pub rendered: Vec<String>,

    pub stats: TreeStats,

    pub metadata: RenderMetadata,
}
