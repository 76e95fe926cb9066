use super::WriterFactory;
use crate::application::dto::{CleanupArguments, ReportArguments};
use crate::application::use_cases::{
    CleanupBranchesUseCase, CleanupSummary, CreateVulnerabilityReportUseCase,
};
use crate::ports::outbound::ProjectRepository;
use crate::shared::error::{DtrackError, ExitCode};
use crate::shared::Result;
use crate::tracking::policies::{
    BranchClassifier, DEFAULT_LONG_LIVED_VERSIONS, DEFAULT_SHORT_LIVED_VERSIONS,
};
use clap::Parser;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// The closed set of actions the tool can run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    CleanGitflowBranches,
    CreateVulnerabilityReport,
}

impl ActionKind {
    pub const ALL: [ActionKind; 2] = [
        ActionKind::CleanGitflowBranches,
        ActionKind::CreateVulnerabilityReport,
    ];

    /// Identifier the action is selected by on the command line
    pub fn identifier(self) -> &'static str {
        match self {
            ActionKind::CleanGitflowBranches => "clean-gitflow-short-living-branch-versions",
            ActionKind::CreateVulnerabilityReport => "create-vulnerability-report",
        }
    }

    /// Short alternative identifier
    pub fn alias(self) -> &'static str {
        match self {
            ActionKind::CleanGitflowBranches => "cleanup",
            ActionKind::CreateVulnerabilityReport => "report",
        }
    }
}

impl FromStr for ActionKind {
    type Err = DtrackError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.identifier() == s || kind.alias() == s)
            .ok_or_else(|| {
                let supported: Vec<_> = Self::ALL.iter().map(|k| k.identifier()).collect();
                DtrackError::configuration(format!(
                    "Unknown action '{}'. Supported actions: {}",
                    s,
                    supported.join(", ")
                ))
            })
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

/// Configured defaults the actions fall back to when their arguments
/// leave a setting open
#[derive(Debug, Clone, Default)]
pub struct ActionSettings {
    pub long_lived_versions: Option<Vec<String>>,
    pub short_lived_versions: Option<Vec<String>>,
    pub output_dir: Option<PathBuf>,
}

/// A fully configured action, ready to run against a repository
pub enum Action {
    CleanGitflowBranches(CleanupBranchesUseCase),
    CreateVulnerabilityReport(CreateVulnerabilityReportUseCase),
}

/// Result of a successful action run
#[derive(Debug, Clone, PartialEq)]
pub enum ActionOutcome {
    Cleanup(CleanupSummary),
    Report(PathBuf),
}

impl ActionOutcome {
    pub fn exit_code(&self) -> ExitCode {
        match self {
            ActionOutcome::Cleanup(summary) if summary.has_failures() => {
                ExitCode::PartialFailure
            }
            _ => ExitCode::Success,
        }
    }
}

impl Action {
    pub fn kind(&self) -> ActionKind {
        match self {
            Action::CleanGitflowBranches(_) => ActionKind::CleanGitflowBranches,
            Action::CreateVulnerabilityReport(_) => ActionKind::CreateVulnerabilityReport,
        }
    }

    pub fn execute<R: ProjectRepository + ?Sized>(&self, repository: &R) -> Result<ActionOutcome> {
        match self {
            Action::CleanGitflowBranches(use_case) => {
                use_case.execute(repository).map(ActionOutcome::Cleanup)
            }
            Action::CreateVulnerabilityReport(use_case) => {
                use_case.execute(repository).map(ActionOutcome::Report)
            }
        }
    }
}

/// Factory turning an action identifier and its arguments into an Action
///
/// All argument and pattern validation happens here, so a misconfigured
/// action fails before any request is sent.
pub struct ActionFactory;

impl ActionFactory {
    /// # Arguments
    /// * `kind` - Which action to configure
    /// * `arguments` - Remaining command-line words after the action identifier
    /// * `settings` - Defaults from the configuration file
    ///
    /// # Errors
    /// Returns a configuration error for unknown or missing arguments and
    /// for patterns that do not compile
    pub fn create(
        kind: ActionKind,
        arguments: &[String],
        settings: &ActionSettings,
    ) -> Result<Action> {
        let argv = std::iter::once(kind.identifier()).chain(arguments.iter().map(String::as_str));

        match kind {
            ActionKind::CleanGitflowBranches => {
                let args = CleanupArguments::try_parse_from(argv)
                    .map_err(|e| DtrackError::configuration(e.to_string()))?;
                let classifier = Self::classifier(&args.project_filter, settings)?;
                Ok(Action::CleanGitflowBranches(CleanupBranchesUseCase::new(
                    classifier,
                    args.dry_run,
                )))
            }
            ActionKind::CreateVulnerabilityReport => {
                let args = ReportArguments::try_parse_from(argv)
                    .map_err(|e| DtrackError::configuration(e.to_string()))?;
                if args.tag.trim().is_empty() {
                    return Err(DtrackError::configuration("--tag must not be empty").into());
                }
                let output_dir = args
                    .output_dir
                    .or_else(|| settings.output_dir.clone())
                    .unwrap_or_else(|| PathBuf::from("."));
                let writer = WriterFactory::create(args.writer, output_dir);
                Ok(Action::CreateVulnerabilityReport(
                    CreateVulnerabilityReportUseCase::new(args.tag, writer),
                ))
            }
        }
    }

    fn classifier(project_filter: &str, settings: &ActionSettings) -> Result<BranchClassifier> {
        let long_lived = settings
            .long_lived_versions
            .clone()
            .unwrap_or_else(|| owned(DEFAULT_LONG_LIVED_VERSIONS));
        let short_lived = settings
            .short_lived_versions
            .clone()
            .unwrap_or_else(|| owned(DEFAULT_SHORT_LIVED_VERSIONS));

        BranchClassifier::new(project_filter, &long_lived, &short_lived)
    }
}

fn owned(patterns: &[&str]) -> Vec<String> {
    patterns.iter().map(|p| p.to_string()).collect()
}
