//! Configuration module for the tree renderer
//!
//! This module provides the configuration value threaded through the
//! collection and rendering pipeline.

use std::path::PathBuf;
use thiserror::Error;

/// Spaces per tree level
pub const DEFAULT_INDENT_WIDTH: usize = 3;

/// Placeholder joining path segments during collection
pub const DEFAULT_PLACEHOLDER: char = '.';

/// Configuration errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Indent width must be at least 1")]
    InvalidIndent,
}

/// Configuration for rendering one document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// XML file to render
    pub input: PathBuf,

    /// Spaces per tree level
    pub indent_width: usize,

    /// Character joining ancestor tags while collecting paths
    pub placeholder: char,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::new(),
            indent_width: DEFAULT_INDENT_WIDTH,
            placeholder: DEFAULT_PLACEHOLDER,
        }
    }
}

impl RenderConfig {
    /// Create new config for an input file
    pub fn new(input: PathBuf) -> Self {
        Self {
            input,
            ..Default::default()
        }
    }

    /// Set indent width (builder pattern)
    pub fn with_indent_width(mut self, width: usize) -> Self {
        self.indent_width = width;
        self
    }

    /// Set collection placeholder (builder pattern)
    pub fn with_placeholder(mut self, placeholder: char) -> Self {
        self.placeholder = placeholder;
        self
    }

    /// Reject settings that cannot produce a readable tree
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.indent_width == 0 {
            return Err(ConfigError::InvalidIndent);
        }
        Ok(())
    }

    /// One level of indentation
    pub fn indent_unit(&self) -> String {
        " ".repeat(self.indent_width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder() {
        let config = RenderConfig::new(PathBuf::from("doc.xml"))
            .with_indent_width(2)
            .with_placeholder('/');

        assert_eq!(config.input, PathBuf::from("doc.xml"));
        assert_eq!(config.indent_unit(), "  ");
        assert_eq!(config.placeholder, '/');
    }

    #[test]
    fn test_default_indent_and_placeholder() {
        let config = RenderConfig::default();
        assert_eq!(config.indent_unit(), "   ");
        assert_eq!(config.placeholder, '.');
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_indent_rejected() {
        let config = RenderConfig::default().with_indent_width(0);
        assert_eq!(config.validate(), Err(ConfigError::InvalidIndent));
    }
}
