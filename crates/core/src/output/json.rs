//! JSON output formatter

use crate::models::TreeReport;
use crate::output::FormatError;

/// Format a report as pretty-printed JSON
pub fn format_json(data: &TreeReport) -> Result<String, FormatError> {
    serde_json::to_string_pretty(data).map_err(FormatError::from)
}
