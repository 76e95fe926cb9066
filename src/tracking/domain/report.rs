use super::{Component, Project};
use chrono::{DateTime, Local};
use serde::Serialize;

/// Prefix of every report artifact file name
pub const REPORT_FILE_PREFIX: &str = "Vulnerability-Report";

/// Timestamp layout embedded in report file names (DDMMYYYY_HHMMSS)
pub const REPORT_TIMESTAMP_FORMAT: &str = "%d%m%Y_%H%M%S";

/// One project row of a vulnerability report together with its dependencies.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportedProject {
    pub name: String,
    pub version: Option<String>,
    pub vulnerabilities: u64,
    pub vulnerable_components: u64,
    pub components: u64,
    pub inherited_risk_score: f64,
    pub dependencies: Vec<Component>,
}

impl ReportedProject {
    /// Copies name, version and the embedded metrics of `project`.
    /// Missing metrics are reported as zero.
    pub fn from_project(project: &Project, dependencies: Vec<Component>) -> Self {
        let metrics = project.metrics.clone().unwrap_or_default();
        Self {
            name: project.name.clone(),
            version: project.version.clone(),
            vulnerabilities: metrics.vulnerabilities,
            vulnerable_components: metrics.vulnerable_components,
            components: metrics.components,
            inherited_risk_score: metrics.inherited_risk_score,
            dependencies,
        }
    }
}

/// Vulnerability report for one release tag.
///
/// Projects keep the order in which the platform listed them.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub release_tag: String,
    pub created_at: DateTime<Local>,
    pub projects: Vec<ReportedProject>,
}

impl Report {
    pub fn new(release_tag: impl Into<String>) -> Self {
        Self::created_at(release_tag, Local::now())
    }

    pub fn created_at(release_tag: impl Into<String>, created_at: DateTime<Local>) -> Self {
        Self {
            release_tag: release_tag.into(),
            created_at,
            projects: Vec::new(),
        }
    }

    pub fn push(&mut self, project: ReportedProject) {
        self.projects.push(project);
    }

    /// Artifact file name, e.g. `Vulnerability-Report_REL-1-16102026_141500.xlsx`.
    ///
    /// Path separators in the tag are replaced so the file always lands in
    /// the chosen output directory.
    pub fn file_name(&self, extension: &str) -> String {
        let tag = self.release_tag.replace(['/', '\\'], "_");
        format!(
            "{}_{}-{}.{}",
            REPORT_FILE_PREFIX,
            tag,
            self.created_at.format(REPORT_TIMESTAMP_FORMAT),
            extension
        )
    }
}
