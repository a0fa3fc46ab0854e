use crate::errors::Result;
use crate::walk::WalkReport;
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Serialize)]
pub struct CountOutput<'a> {
    pub entry: &'a PathBuf,
    pub discovered: &'a [PathBuf],
    pub files_visited: usize,
    pub unresolved_imports: usize,
    pub total_lines: usize,
}

impl<'a> From<&'a WalkReport> for CountOutput<'a> {
    fn from(report: &'a WalkReport) -> Self {
        Self {
            entry: &report.entry,
            discovered: &report.discovered,
            files_visited: report.files_visited,
            unresolved_imports: report.unresolved_imports,
            total_lines: report.total_lines,
        }
    }
}

/// Write the walk report as pretty-printed JSON.
pub fn write_json<W: Write>(writer: &mut W, report: &WalkReport) -> Result<()> {
    serde_json::to_writer_pretty(&mut *writer, &CountOutput::from(report))?;
    writeln!(writer)?;
    Ok(())
}
