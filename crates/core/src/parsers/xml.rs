//! XML parser backed by roxmltree
//!
//! Namespaced element names are expanded to Clark notation (`{uri}local`),
//! which is what puts a closing brace inside collected paths.

use super::{DocumentParser, ParseError};
use crate::models::{Document, NodeId};
use roxmltree::ParsingOptions;
use tracing::debug;

/// XML parser producing element-only documents
#[derive(Debug, Clone, Copy)]
pub struct XmlParser {
    allow_dtd: bool,
}

impl Default for XmlParser {
    fn default() -> Self {
        Self::new()
    }
}

impl XmlParser {
    /// Create a parser that accepts DOCTYPE declarations
    pub fn new() -> Self {
        Self { allow_dtd: true }
    }

    /// Set DTD handling (builder pattern)
    pub fn with_dtd(mut self, allow: bool) -> Self {
        self.allow_dtd = allow;
        self
    }
}

/// Expanded tag name of an element
fn expanded_tag(node: roxmltree::Node<'_, '_>) -> String {
    let name = node.tag_name();
    match name.namespace() {
        Some(uri) => format!("{{{}}}{}", uri, name.name()),
        None => name.name().to_string(),
    }
}

impl DocumentParser for XmlParser {
    fn parse(&self, source: &str) -> Result<Document, ParseError> {
        let mut options = ParsingOptions::default();
        options.allow_dtd = self.allow_dtd;

        let xml = roxmltree::Document::parse_with_options(source, options)
            .map_err(|e| ParseError::Syntax(e.to_string()))?;

        let root = xml.root_element();
        let mut doc = Document::new(expanded_tag(root));

        // Explicit stack keeps deep documents off the call stack
        let mut stack: Vec<(roxmltree::Node<'_, '_>, NodeId)> = vec![(root, doc.root())];
        while let Some((xml_node, id)) = stack.pop() {
            for child in xml_node.children().filter(|n| n.is_element()) {
                let child_id = doc.add_child(id, expanded_tag(child));
                stack.push((child, child_id));
            }
        }

        debug!(elements = doc.len(), "parsed XML document");
        Ok(doc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn child_tags(doc: &Document, id: NodeId) -> Vec<String> {
        doc.node(id)
            .children
            .iter()
            .map(|c| doc.node(*c).tag.clone())
            .collect()
    }

    #[test]
    fn test_parse_plain_elements() {
        let doc = XmlParser::new()
            .parse("<a><b><d/></b><c>text</c><!-- note --></a>")
            .unwrap();

        assert_eq!(doc.node(doc.root()).tag, "a");
        assert_eq!(child_tags(&doc, doc.root()), vec!["b", "c"]);
        assert_eq!(doc.len(), 4);
    }

    #[test]
    fn test_children_keep_document_order() {
        let doc = XmlParser::new().parse("<r><z/><a/><m/></r>").unwrap();
        assert_eq!(child_tags(&doc, doc.root()), vec!["z", "a", "m"]);
    }

    #[test]
    fn test_namespaces_are_expanded() {
        let doc = XmlParser::new()
            .parse(r#"<x:a xmlns:x="urn:u"><x:b/><c/></x:a>"#)
            .unwrap();

        assert_eq!(doc.node(doc.root()).tag, "{urn:u}a");
        assert_eq!(child_tags(&doc, doc.root()), vec!["{urn:u}b", "c"]);
    }

    #[test]
    fn test_default_namespace_applies_to_children() {
        let doc = XmlParser::new()
            .parse(r#"<a xmlns="http://example.com/ns"><b/></a>"#)
            .unwrap();

        assert_eq!(
            child_tags(&doc, doc.root()),
            vec!["{http://example.com/ns}b"]
        );
    }

    #[test]
    fn test_doctype_accepted_by_default() {
        let source = "<?xml version=\"1.0\"?>\n<!DOCTYPE a>\n<a><b/></a>";
        assert!(XmlParser::new().parse(source).is_ok());
        assert!(XmlParser::new().with_dtd(false).parse(source).is_err());
    }

    #[test]
    fn test_malformed_input_rejected() {
        assert!(matches!(
            XmlParser::new().parse("<a><b></a>"),
            Err(ParseError::Syntax(_))
        ));
        assert!(matches!(
            XmlParser::new().parse(""),
            Err(ParseError::Syntax(_))
        ));
    }

    #[test]
    fn test_deep_nesting_does_not_recurse() {
        let depth = 200;
        let source = format!("{}{}", "<n>".repeat(depth), "</n>".repeat(depth));
        let doc = XmlParser::new().parse(&source).unwrap();
        assert_eq!(doc.len(), depth);
    }
}
