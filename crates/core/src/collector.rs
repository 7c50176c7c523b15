//! Path collection
//!
//! Walks a document in pre-order and records one path entry per element:
//! the parent's entry, the placeholder, then the element's own tag.
//! Siblings that produce an identical entry collapse into one.

use crate::config::DEFAULT_PLACEHOLDER;
use crate::models::{Document, PathSet};
use tracing::debug;

/// Collects ancestor paths from a document
#[derive(Debug, Clone, Copy)]
pub struct PathCollector {
    placeholder: char,
}

impl Default for PathCollector {
    fn default() -> Self {
        Self {
            placeholder: DEFAULT_PLACEHOLDER,
        }
    }
}

impl PathCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different joining character (builder pattern)
    pub fn with_placeholder(mut self, placeholder: char) -> Self {
        self.placeholder = placeholder;
        self
    }

    /// Collect one path per element, root first
    pub fn collect(&self, document: &Document) -> PathSet {
        let mut paths = PathSet::new();

        // (node, parent path); children are pushed reversed so they pop in order
        let mut stack = vec![(document.root(), String::new())];
        while let Some((id, parent_path)) = stack.pop() {
            let node = document.node(id);
            let mut path = parent_path;
            path.push(self.placeholder);
            path.push_str(&node.tag);

            for child in node.children.iter().rev() {
                stack.push((*child, path.clone()));
            }

            if !paths.insert(path) {
                debug!(tag = %node.tag, "merged sibling with identical path");
            }
        }

        debug!(
            unique = paths.len(),
            merged = paths.merged(),
            "collected paths"
        );
        paths
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_root_path_has_leading_placeholder() {
        let doc = Document::new("a");
        let paths = PathCollector::new().collect(&doc);
        assert_eq!(paths.entries(), &[".a"]);
    }

    #[test]
    fn test_same_named_siblings_merge() {
        let mut doc = Document::new("a");
        let root = doc.root();
        doc.add_child(root, "b");
        doc.add_child(root, "b");

        let paths = PathCollector::new().collect(&doc);
        assert_eq!(paths.entries(), &[".a", ".a.b"]);
        assert_eq!(paths.merged(), 1);
    }

    #[test]
    fn test_merged_siblings_keep_all_descendants() {
        // <a><b><c/></b><b><d/></b></a>
        let mut doc = Document::new("a");
        let root = doc.root();
        let b1 = doc.add_child(root, "b");
        doc.add_child(b1, "c");
        let b2 = doc.add_child(root, "b");
        doc.add_child(b2, "d");

        let paths = PathCollector::new().collect(&doc);
        assert_eq!(paths.entries(), &[".a", ".a.b", ".a.b.c", ".a.b.d"]);
    }

    #[test]
    fn test_pre_order_collection() {
        let mut doc = Document::new("r");
        let root = doc.root();
        let z = doc.add_child(root, "z");
        doc.add_child(z, "y");
        doc.add_child(root, "a");

        let paths = PathCollector::new().collect(&doc);
        assert_eq!(paths.entries(), &[".r", ".r.z", ".r.z.y", ".r.a"]);
    }

    #[test]
    fn test_every_child_extends_parent_by_one_segment() {
        let mut doc = Document::new("root");
        let root = doc.root();
        let x = doc.add_child(root, "x");
        let y = doc.add_child(x, "y");
        doc.add_child(y, "z");
        doc.add_child(root, "w");

        let paths = PathCollector::new().collect(&doc);
        for entry in paths.entries().iter().skip(1) {
            let cut = entry.rfind('.').unwrap();
            let parent = &entry[..cut];
            assert!(paths.contains(parent), "{entry} has no parent entry");
        }
    }

    #[test]
    fn test_custom_placeholder() {
        let mut doc = Document::new("a");
        let root = doc.root();
        doc.add_child(root, "b");

        let paths = PathCollector::new().with_placeholder('|').collect(&doc);
        assert_eq!(paths.entries(), &["|a", "|a|b"]);
    }

    #[test]
    fn test_deep_chain_without_recursion() {
        let mut doc = Document::new("n");
        let mut parent = doc.root();
        for _ in 0..2_000 {
            parent = doc.add_child(parent, "n");
        }

        let paths = PathCollector::new().collect(&doc);
        assert_eq!(paths.len(), 2_001);
    }
}
