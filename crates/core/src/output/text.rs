//! Plain text output formatter

use crate::models::TreeReport;
use std::path::Path;

/// Line announcing the document being printed
pub fn header_line(input: &Path) -> String {
    format!("Printing XML: {}", input.display())
}

/// Format a report as the header followed by its rendered lines
pub fn format_text(data: &TreeReport) -> String {
    let mut lines = vec![header_line(&data.input)];
    lines.extend(data.rendered.iter().cloned());
    lines.join("\n")
}
