//! ANSI colored output formatter
//!
//! This module provides colorful terminal output for rendered trees.

use crate::models::{RenderOutcome, TreeReport};
use crate::output::text::header_line;
use colored::{Color, Colorize};

/// Label colors, cycled by depth
const DEPTH_COLORS: [Color; 6] = [
    Color::BrightWhite,
    Color::BrightCyan,
    Color::BrightYellow,
    Color::BrightGreen,
    Color::BrightMagenta,
    Color::BrightBlue,
];

fn depth_color(depth: usize) -> Color {
    DEPTH_COLORS[depth % DEPTH_COLORS.len()]
}

/// Split a leading `{uri}` off a label
fn split_namespace(label: &str) -> (Option<&str>, &str) {
    if label.starts_with('{') {
        if let Some(end) = label.find('}') {
            return (Some(&label[..=end]), &label[end + 1..]);
        }
    }
    (None, label)
}

/// Format a report as ANSI colored text
pub fn format_ansi(data: &TreeReport) -> String {
    let mut output = String::new();

    output.push_str(&format!("{}\n", header_line(&data.input).bold()));

    match &data.outcome {
        RenderOutcome::Tree { lines, .. } => {
            for (line, text) in lines.iter().zip(&data.rendered) {
                let indent = text.strip_suffix(line.label.as_str()).unwrap_or("");
                let (namespace, local) = split_namespace(&line.label);
                output.push_str(indent);
                if let Some(namespace) = namespace {
                    output.push_str(&namespace.dimmed().to_string());
                }
                output.push_str(&format!("{}\n", local.color(depth_color(line.depth))));
            }
        }
        RenderOutcome::Raw { .. } => {
            if let Some((notice, entries)) = data.rendered.split_first() {
                output.push_str(&format!("{}\n", notice.yellow()));
                for entry in entries {
                    output.push_str(entry);
                    output.push('\n');
                }
            }
        }
    }

    // Footer
    let mut footer = format!(
        "{} elements, {} unique paths",
        data.stats.total_nodes, data.stats.unique_paths
    );
    if data.stats.merged_paths > 0 {
        footer.push_str(&format!(
            ", {} merged same-named siblings",
            data.stats.merged_paths
        ));
    }
    output.push_str(&format!("\n{}\n", footer.dimmed()));

    output
}
