use super::ReportFormat;
use crate::tracking::policies::MATCH_ANY;
use clap::Parser;
use std::path::PathBuf;

/// Arguments of the short-lived branch cleanup, parsed from the words
/// following the action identifier
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
pub struct CleanupArguments {
    /// Regular expression a project name must fully match to be considered
    #[arg(long = "project-filter", value_name = "REGEX", default_value = MATCH_ANY)]
    pub project_filter: String,

    /// Log the projects that would be deleted without deleting them
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments of the vulnerability report, parsed from the words following
/// the action identifier
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
pub struct ReportArguments {
    /// Release tag selecting the projects to report on
    #[arg(long, value_name = "TAG")]
    pub tag: String,

    /// Report format: xlsx or json
    #[arg(long, value_name = "FORMAT", default_value = "xlsx")]
    pub writer: ReportFormat,

    /// Directory the report file is written to (defaults to the configured
    /// output directory, then the current directory)
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,
}
