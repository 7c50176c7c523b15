//! mta-xmltree CLI
//!
//! Takes an XML file and prints a simple tree showing how each element
//! relates to the others.

mod logging;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use mta_xmltree_core::config::DEFAULT_INDENT_WIDTH;
use mta_xmltree_core::{format_output, render_file, OutputFormat, RenderConfig};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::debug;

/// Print the element hierarchy of an XML document
#[derive(Parser)]
#[command(name = "mta-xmltree")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Take an XML file and print out a simple tree to show how each element relates to others")]
#[command(long_about = r#"
mta-xmltree: XML Ancestry Trees

Every element is recorded together with all of its ancestors, the records
are sorted, and each one is printed indented by its depth. Namespaced
documents are supported: levels are split on the closing brace of the
expanded {uri}name tag. Same-named siblings are shown once.

When no level separator can be found, the collected paths are dumped as-is.

Output formats:
  - text (default) - Indented plain text
  - ansi - Colorful terminal output
  - json - Structured JSON for programmatic use
  - yaml - Human-readable YAML format

Examples:
  mta-xmltree --xml catalog.xml               # Print the tree
  mta-xmltree --xml catalog.xml --indent 2    # Two spaces per level
  mta-xmltree --xml catalog.xml --format json # Structured output
"#)]
pub struct Args {
    /// Path to the XML file
    #[arg(long, value_name = "PATH")]
    pub xml: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormatArg::Text)]
    pub format: OutputFormatArg,

    /// Spaces per tree level
    #[arg(long, default_value_t = DEFAULT_INDENT_WIDTH)]
    pub indent: usize,

    /// Disable colors in ansi output
    #[arg(long)]
    pub no_color: bool,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long)]
    pub verbose: bool,
}

/// Output format argument
#[derive(ValueEnum, Clone, Debug)]
pub enum OutputFormatArg {
    Text,
    Ansi,
    Json,
    Yaml,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Text => OutputFormat::Text,
            OutputFormatArg::Ansi => OutputFormat::Ansi,
            OutputFormatArg::Json => OutputFormat::Json,
            OutputFormatArg::Yaml => OutputFormat::Yaml,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.verbose);

    run(&args)
}

fn run(args: &Args) -> Result<()> {
    let config = RenderConfig::new(args.xml.clone()).with_indent_width(args.indent);

    let report = render_file(&config)
        .with_context(|| format!("Failed to render {}", args.xml.display()))?;

    debug!(
        nodes = report.stats.total_nodes,
        paths = report.stats.unique_paths,
        merged = report.stats.merged_paths,
        raw = report.outcome.is_raw(),
        "rendered document"
    );

    let format: OutputFormat = args.format.clone().into();
    if format == OutputFormat::Ansi {
        colored::control::set_override(!args.no_color);
    }

    let output = format_output(&report, format)?;
    write_output(&output)
}

fn write_output(output: &str) -> Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();

    match writeln!(handle, "{}", output) {
        Ok(_) => {}
        Err(err) if should_ignore_pipe_error(&err) => return Ok(()),
        Err(err) => return Err(err).context("Failed to write output"),
    }

    match handle.flush() {
        Ok(_) => Ok(()),
        Err(err) if should_ignore_pipe_error(&err) => Ok(()),
        Err(err) => Err(err).context("Failed to flush stdout"),
    }
}

fn should_ignore_pipe_error(err: &io::Error) -> bool {
    matches!(
        err.kind(),
        io::ErrorKind::BrokenPipe | io::ErrorKind::WouldBlock
    )
}
