use crate::adapters::outbound::json::JsonReportWriter;
use crate::adapters::outbound::spreadsheet::XlsxReportWriter;
use crate::application::dto::ReportFormat;
use crate::ports::outbound::ReportWriter;
use std::path::PathBuf;

/// Factory for creating report writers
///
/// Keeps the selection of the output adapter out of the use case, which
/// only sees the ReportWriter port.
pub struct WriterFactory;

impl WriterFactory {
    /// Creates a writer for `format` that places its file in `output_dir`
    ///
    /// # Examples
    /// ```
    /// use dtrack_tools::application::dto::ReportFormat;
    /// use dtrack_tools::application::factories::WriterFactory;
    ///
    /// let writer = WriterFactory::create(ReportFormat::Xlsx, ".".into());
    /// ```
    pub fn create(format: ReportFormat, output_dir: PathBuf) -> Box<dyn ReportWriter> {
        match format {
            ReportFormat::Xlsx => Box::new(XlsxReportWriter::new(output_dir)),
            ReportFormat::Json => Box::new(JsonReportWriter::new(output_dir)),
        }
    }
}
