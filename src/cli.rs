use crate::errors::{CountLinesError, Result};
use crate::output::OutputFormat;
use crate::parse::resolver;
use crate::walk;
use clap::Parser;
use std::ffi::OsString;
use std::path::Path;

#[derive(Debug, Parser)]
#[command(
    name = "count-lines",
    version,
    about = "Count the lines of a module and every file it relatively imports"
)]
pub struct Cli {
    /// Entry file to start from
    #[arg(value_name = "ENTRY_FILE")]
    pub entry: Option<OsString>,

    /// Output format
    #[arg(long, default_value = "text")]
    pub format: OutputFormat,
}

/// Walk from the entry file and print the report to stdout.
pub fn run(cli: &Cli) -> Result<()> {
    let entry = cli
        .entry
        .as_deref()
        .filter(|p| !p.is_empty())
        .map(Path::new)
        .ok_or(CountLinesError::MissingEntry)?;
    let cwd = std::env::current_dir()?;
    let entry = resolver::absolutize(&cwd, entry);

    let report = walk::count_reachable(&entry);
    tracing::info!(
        entry = %report.entry.display(),
        files = report.files_visited,
        unresolved = report.unresolved_imports,
        total = report.total_lines,
        "walk complete"
    );

    let mut stdout = std::io::stdout().lock();
    match cli.format {
        OutputFormat::Text => crate::output::text::write_text(&mut stdout, &report)?,
        OutputFormat::Json => crate::output::json::write_json(&mut stdout, &report)?,
        OutputFormat::Dot => crate::output::dot::write_dot(&mut stdout, &report.graph)?,
    }

    Ok(())
}
