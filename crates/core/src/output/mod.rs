//! Output formatting module
//!
//! This module provides formatters for plain text, ANSI, JSON, and YAML
//! output of a tree report.

pub mod ansi;
mod json;
mod text;
mod yaml;

pub use ansi::format_ansi;
pub use json::format_json;
pub use text::{format_text, header_line};
pub use yaml::format_yaml;

use crate::models::TreeReport;
use thiserror::Error;

/// Output format errors
#[derive(Error, Debug)]
pub enum FormatError {
    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("YAML serialization error: {0}")]
    YamlError(#[from] serde_yaml::Error),
}

/// Available output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Indented plain text
    #[default]
    Text,
    /// ANSI colored text
    Ansi,
    /// JSON format
    Json,
    /// YAML format
    Yaml,
}

/// Format a report in the specified format
pub fn format_output(data: &TreeReport, format: OutputFormat) -> Result<String, FormatError> {
    match format {
        OutputFormat::Text => Ok(format_text(data)),
        OutputFormat::Ansi => Ok(format_ansi(data)),
        OutputFormat::Json => format_json(data),
        OutputFormat::Yaml => format_yaml(data),
    }
}
