//! Tree engine module
//!
//! This module runs the full pipeline for one document: load, collect,
//! resolve the delimiter, and render either a tree or a raw dump.

use crate::collector::PathCollector;
use crate::config::{ConfigError, RenderConfig};
use crate::models::{Document, RenderMetadata, RenderOutcome, TreeReport, TreeStats};
use crate::parsers::{load_document, ParseError, XmlParser};
use crate::renderer::TreeRenderer;
use crate::resolver::resolve;
use std::time::Instant;
use thiserror::Error;
use tracing::{debug, warn};

/// Engine errors
#[derive(Error, Debug)]
pub enum TreeError {
    #[error("Parse error: {0}")]
    ParseError(#[from] ParseError),

    #[error("Config error: {0}")]
    ConfigError(#[from] ConfigError),
}

/// Build the report for an already-parsed document
pub fn build_tree(document: &Document, config: &RenderConfig) -> TreeReport {
    let start = Instant::now();

    let paths = PathCollector::new()
        .with_placeholder(config.placeholder)
        .collect(document);
    let renderer = TreeRenderer::new(config.indent_unit());

    let (outcome, rendered) = match resolve(&paths) {
        Ok(delimiter) => (
            RenderOutcome::Tree {
                delimiter,
                lines: renderer.layout(&paths, delimiter),
            },
            renderer.render(&paths, delimiter),
        ),
        Err(ambiguous) => {
            warn!(sample = %ambiguous.sample, "falling back to raw dump");
            (
                RenderOutcome::Raw {
                    entries: paths.entries().to_vec(),
                },
                renderer.render_raw(&paths),
            )
        }
    };

    let max_depth = match &outcome {
        RenderOutcome::Tree { lines, .. } => lines.iter().map(|l| l.depth).max().unwrap_or(0),
        RenderOutcome::Raw { .. } => 0,
    };

    let stats = TreeStats {
        total_nodes: document.len(),
        unique_paths: paths.len(),
        merged_paths: paths.merged(),
        max_depth,
    };

    let metadata = RenderMetadata {
        render_duration_ms: start.elapsed().as_millis() as u64,
        timestamp: chrono::Utc::now().to_rfc3339(),
        tool_version: env!("CARGO_PKG_VERSION").to_string(),
    };

    TreeReport {
        input: config.input.clone(),
        outcome,
        rendered,
        stats,
        metadata,
    }
}

/// Load the configured input and build its report
pub fn render_file(config: &RenderConfig) -> Result<TreeReport, TreeError> {
    config.validate()?;

    debug!(input = %config.input.display(), "loading document");
    let document = load_document(&config.input, &XmlParser::new())?;

    Ok(build_tree(&document, config))
}
