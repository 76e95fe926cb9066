use crate::ports::outbound::ProjectRepository;
use crate::shared::Result;
use crate::tracking::domain::Project;
use crate::tracking::policies::{BranchClassifier, BranchDecision};
use tracing::{info, warn};

/// Counters of one cleanup run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanupSummary {
    /// Projects deleted (in dry-run mode: projects that would have been deleted)
    pub deleted: usize,
    /// Deletions the platform refused or that could not be sent
    pub failed: usize,
    /// Projects kept because they are unversioned, filtered out or long-lived
    pub retained: usize,
    /// Projects kept because their version matches no known scheme
    pub unknown: usize,
}

impl CleanupSummary {
    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }
}

/// CleanupBranchesUseCase - deletes projects of short-lived branches
///
/// Every listed project is classified; short-lived ones are deleted one by
/// one. A failed deletion is logged and the run goes on with the next
/// project.
pub struct CleanupBranchesUseCase {
    classifier: BranchClassifier,
    dry_run: bool,
}

impl CleanupBranchesUseCase {
    pub fn new(classifier: BranchClassifier, dry_run: bool) -> Self {
        Self {
            classifier,
            dry_run,
        }
    }

    /// Runs the cleanup against `repository`
    ///
    /// # Errors
    /// Returns an error only if the project listing fails; deletion
    /// failures are counted in the summary instead
    pub fn execute<R: ProjectRepository + ?Sized>(&self, repository: &R) -> Result<CleanupSummary> {
        let projects = repository.list_projects()?;
        info!("{} project(s) to inspect", projects.len());

        let mut summary = CleanupSummary::default();
        for project in &projects {
            let decision = self
                .classifier
                .classify(&project.name, project.version.as_deref());

            match decision {
                BranchDecision::RetainUnversioned => {
                    info!("Skipping {}: no version recorded", project);
                    summary.retained += 1;
                }
                BranchDecision::RetainFiltered => {
                    info!("Skipping {}: name does not match the project filter", project);
                    summary.retained += 1;
                }
                BranchDecision::RetainLongLived => {
                    info!("Skipping long-living branch {}", project);
                    summary.retained += 1;
                }
                BranchDecision::RetainUnknown => {
                    warn!(
                        "Skipping {}: version matches no known branch scheme, please review",
                        project
                    );
                    summary.unknown += 1;
                }
                BranchDecision::Delete => self.delete(repository, project, &mut summary),
            }
        }

        info!(
            "Cleanup finished: {} deleted, {} failed, {} retained, {} unrecognized",
            summary.deleted, summary.failed, summary.retained, summary.unknown
        );
        Ok(summary)
    }

    fn delete<R: ProjectRepository + ?Sized>(
        &self,
        repository: &R,
        project: &Project,
        summary: &mut CleanupSummary,
    ) {
        if self.dry_run {
            info!("Would delete short-living branch {} (dry run)", project);
            summary.deleted += 1;
            return;
        }

        match repository.delete_project(project) {
            Ok(true) => summary.deleted += 1,
            Ok(false) => {
                warn!("Unable to delete {}", project);
                summary.failed += 1;
            }
            Err(e) => {
                warn!("Unable to delete {}: {:#}", project, e);
                summary.failed += 1;
            }
        }
    }
}
