//! YAML output formatter

use crate::models::TreeReport;
use crate::output::FormatError;

/// Format a report as YAML
pub fn format_yaml(data: &TreeReport) -> Result<String, FormatError> {
    serde_yaml::to_string(data).map_err(FormatError::from)
}
