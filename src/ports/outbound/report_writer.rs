use crate::shared::Result;
use crate::tracking::domain::Report;
use std::path::PathBuf;

/// ReportWriter port for rendering a vulnerability report to an artifact
///
/// This port abstracts the output format (xlsx workbook, JSON document).
pub trait ReportWriter {
    /// Renders `report` and returns the path of the written file
    ///
    /// # Errors
    /// Returns an error if rendering fails or the file cannot be written
    fn write(&self, report: &Report) -> Result<PathBuf>;
}
