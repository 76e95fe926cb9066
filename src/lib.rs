//! dtrack-tools - housekeeping and reporting for Dependency-Track
//!
//! This library removes the projects of short-lived gitflow branches from a
//! Dependency-Track server and builds vulnerability reports for all projects
//! of a release tag.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`tracking`): Projects, components, reports and the branch classification policy
//! - **Application Layer** (`application`): Use cases, the action and writer factories
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Dependency-Track REST client, xlsx and JSON writers
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use dtrack_tools::prelude::*;
//! use std::time::Duration;
//!
//! # fn main() -> Result<()> {
//! let client = DependencyTrackClient::new(
//!     "https://dtrack.example.com",
//!     "odt_secret",
//!     Duration::from_secs(30),
//! )?;
//! let repository = DependencyTrackRepository::new(client);
//!
//! let classifier = BranchClassifier::with_default_patterns(".*")?;
//! let summary = CleanupBranchesUseCase::new(classifier, true).execute(&repository)?;
//! println!("{} project(s) would be deleted", summary.deleted);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod ports;
pub mod shared;
pub mod tracking;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::json::JsonReportWriter;
    pub use crate::adapters::outbound::network::{
        DependencyTrackClient, DependencyTrackRepository,
    };
    pub use crate::adapters::outbound::spreadsheet::XlsxReportWriter;
    pub use crate::application::dto::{CleanupArguments, ReportArguments, ReportFormat};
    pub use crate::application::factories::{
        Action, ActionFactory, ActionKind, ActionOutcome, ActionSettings, WriterFactory,
    };
    pub use crate::application::use_cases::{
        CleanupBranchesUseCase, CleanupSummary, CreateVulnerabilityReportUseCase,
    };
    pub use crate::ports::outbound::{ProjectRepository, RemoteClient, ReportWriter};
    pub use crate::shared::error::{DtrackError, ExitCode};
    pub use crate::shared::Result;
    pub use crate::tracking::domain::{
        Component, Project, ProjectMetrics, Report, ReportedProject, ResolvedLicense,
    };
    pub use crate::tracking::policies::{BranchClassifier, BranchDecision};
}
