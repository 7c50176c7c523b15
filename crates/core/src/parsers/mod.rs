//! Parsers module for document loading
//!
//! This module wraps the structured-document parser behind a small trait so
//! the tree pipeline only ever sees an element arena.

mod encoding;
mod xml;

pub use encoding::decode_document;
pub use xml::XmlParser;

use crate::models::Document;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Document loading errors
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse document: {0}")]
    Syntax(String),
}

/// Trait for structured-document parsers
pub trait DocumentParser {
    /// Parse source text into an element tree
    fn parse(&self, source: &str) -> Result<Document, ParseError>;
}

/// Read a file, decode it per its BOM or XML declaration, and parse it
pub fn load_document(path: &Path, parser: &dyn DocumentParser) -> Result<Document, ParseError> {
    let bytes = fs::read(path).map_err(|source| ParseError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let source = decode_document(&bytes)?;
    parser.parse(&source)
}
