use crate::ports::outbound::{ProjectRepository, ReportWriter};
use crate::shared::Result;
use crate::tracking::domain::{Report, ReportedProject};
use anyhow::Context;
use std::path::PathBuf;
use tracing::{info, warn};

/// CreateVulnerabilityReportUseCase - builds and writes the report of a release
///
/// All projects carrying the release tag are collected together with their
/// metrics and dependencies. The report is only handed to the writer once
/// every project has been gathered; a failure on any project aborts the run
/// without writing anything.
pub struct CreateVulnerabilityReportUseCase {
    release_tag: String,
    writer: Box<dyn ReportWriter>,
}

impl CreateVulnerabilityReportUseCase {
    /// # Arguments
    /// * `release_tag` - Tag identifying the projects of one release
    /// * `writer` - Output format the finished report is written with
    pub fn new(release_tag: impl Into<String>, writer: Box<dyn ReportWriter>) -> Self {
        Self {
            release_tag: release_tag.into(),
            writer,
        }
    }

    pub fn release_tag(&self) -> &str {
        &self.release_tag
    }

    /// Collects the report aggregate without writing it
    pub fn build_report<R: ProjectRepository + ?Sized>(&self, repository: &R) -> Result<Report> {
        let projects = repository
            .list_projects_by_tag(&self.release_tag)
            .with_context(|| format!("Failed to list projects tagged {}", self.release_tag))?;
        info!("{} project(s) tagged {}", projects.len(), self.release_tag);

        let mut report = Report::new(self.release_tag.clone());
        for project in &projects {
            if project.metrics.is_none() {
                warn!("Project {} has no metrics, reporting zeros", project);
            }
            let dependencies = repository
                .list_dependencies(project)
                .with_context(|| format!("Failed to collect dependencies of {}", project))?;
            report.push(ReportedProject::from_project(project, dependencies));
        }

        Ok(report)
    }

    /// Builds the report and writes it
    ///
    /// # Returns
    /// Path of the written report file
    pub fn execute<R: ProjectRepository + ?Sized>(&self, repository: &R) -> Result<PathBuf> {
        let report = self.build_report(repository)?;
        self.writer.write(&report)
    }
}
