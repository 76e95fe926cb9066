/// Output format of the vulnerability report
///
/// Both the action arguments and the writer factory need to understand it,
/// so it lives in the application layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    /// Spreadsheet workbook (default)
    #[default]
    Xlsx,
    /// Pretty-printed JSON document
    Json,
}

impl std::str::FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "xlsx" | "excel" => Ok(ReportFormat::Xlsx),
            "json" => Ok(ReportFormat::Json),
            _ => Err(format!(
                "Invalid report writer: {}. Please specify 'xlsx' or 'json'",
                s
            )),
        }
    }
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportFormat::Xlsx => write!(f, "xlsx"),
            ReportFormat::Json => write!(f, "json"),
        }
    }
}
