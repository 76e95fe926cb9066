use crate::ports::outbound::ReportWriter;
use crate::shared::error::DtrackError;
use crate::shared::security::validate_output_path;
use crate::shared::Result;
use crate::tracking::domain::Report;
use anyhow::Context;
use std::fs;
use std::path::PathBuf;
use tracing::info;

/// JsonReportWriter adapter serializing the report aggregate as pretty JSON
pub struct JsonReportWriter {
    output_dir: PathBuf,
}

impl JsonReportWriter {
    pub const EXTENSION: &'static str = "json";

    pub fn new(output_dir: PathBuf) -> Self {
        Self { output_dir }
    }
}

impl ReportWriter for JsonReportWriter {
    fn write(&self, report: &Report) -> Result<PathBuf> {
        let path = self.output_dir.join(report.file_name(Self::EXTENSION));
        validate_output_path(&path)?;

        info!("Writing to {}...", path.display());
        let content =
            serde_json::to_string_pretty(report).context("Failed to serialize report to JSON")?;

        fs::write(&path, content).map_err(|e| DtrackError::FileWriteError {
            path: path.clone(),
            details: e.to_string(),
        })?;
        info!("...ready.");

        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracking::domain::{Component, Project, ReportedProject};
    use tempfile::TempDir;

    #[test]
    fn test_write_json_report() {
        let dir = TempDir::new().unwrap();
        let writer = JsonReportWriter::new(dir.path().to_path_buf());

        let mut report = Report::new("REL-1");
        report.push(ReportedProject::from_project(
            &Project::new("shop", Some("1.0.0")),
            vec![Component::new("serde", "1.0.0").with_purl("pkg:cargo/serde@1.0.0")],
        ));

        let path = writer.write(&report).unwrap();
        assert!(path.to_string_lossy().ends_with(".json"));

        let written: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written["releaseTag"], "REL-1");
        assert_eq!(written["projects"][0]["name"], "shop");
        assert_eq!(written["projects"][0]["inheritedRiskScore"], 0.0);
        assert_eq!(
            written["projects"][0]["dependencies"][0]["purl"],
            "pkg:cargo/serde@1.0.0"
        );
        assert!(written["projects"][0]["dependencies"][0]
            .get("resolvedLicense")
            .is_none());
    }

    #[test]
    fn test_write_json_into_missing_directory_fails() {
        let writer = JsonReportWriter::new(PathBuf::from("/nonexistent/reports"));
        assert!(writer.write(&Report::new("REL-1")).is_err());
    }
}
