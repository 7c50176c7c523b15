//! mta_xmltree_core - Core library for XML ancestry trees
//!
//! This crate turns a parsed XML document into a human-readable tree that
//! shows how each element relates to the others.
//!
//! # Pipeline
//!
//! - **Collection**: every element becomes one path entry, its ancestor tags
//!   joined by a placeholder. Same-named siblings produce the same entry and
//!   collapse into one.
//! - **Delimiter sniffing**: namespaced tags (`{uri}local`) carry their own
//!   closing brace, so the brace is used as the level separator whenever the
//!   root entry contains one; otherwise the plain `.` is used.
//! - **Rendering**: entries are sorted, indented by delimiter count, and
//!   shown by their last segment. When no delimiter can be found, the
//!   entries are dumped as collected.
//! - **Output Formats**: plain text, ANSI-colored text, JSON, and YAML.
//!
//! # Example
//!
//! ```rust,no_run
//! use mta_xmltree_core::{format_output, render_file, OutputFormat, RenderConfig};
//! use std::path::PathBuf;
//!
//! let config = RenderConfig::new(PathBuf::from("catalog.xml"));
//! let report = render_file(&config).unwrap();
//!
//! let text = format_output(&report, OutputFormat::Text).unwrap();
//! println!("{}", text);
//! ```

pub mod collector;
pub mod config;
pub mod engine;
pub mod models;
pub mod output;
pub mod parsers;
pub mod renderer;
pub mod resolver;

// Re-exports for convenience
pub use collector::PathCollector;
pub use config::{ConfigError, RenderConfig};
pub use engine::{build_tree, render_file, TreeError};
pub use models::{
    Delimiter, Document, Node, NodeId, PathSet, RenderMetadata, RenderOutcome, TreeLine,
    TreeReport, TreeStats,
};
pub use output::{format_output, header_line, FormatError, OutputFormat};
pub use parsers::{decode_document, load_document, DocumentParser, ParseError, XmlParser};
pub use renderer::{TreeRenderer, RAW_DUMP_NOTICE};
pub use resolver::{resolve, AmbiguousStructure};
