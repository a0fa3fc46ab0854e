use crate::errors::Result;
use crate::walk::WalkReport;
use std::io::Write;

/// Write the discovery log followed by the total line count.
pub fn write_text<W: Write>(writer: &mut W, report: &WalkReport) -> Result<()> {
    for path in &report.discovered {
        writeln!(writer, "{}", path.display())?;
    }
    writeln!(writer, "{}", report.total_lines)?;
    Ok(())
}
