/// Use cases module containing application business logic orchestration
mod cleanup_branches;
mod create_vulnerability_report;

pub use cleanup_branches::{CleanupBranchesUseCase, CleanupSummary};
pub use create_vulnerability_report::CreateVulnerabilityReportUseCase;
