/// Data Transfer Objects for application layer
///
/// Action arguments and report formats are shared between the CLI
/// (inbound side) and the factories wiring outbound adapters.
mod action_arguments;
mod report_format;

pub use action_arguments::{CleanupArguments, ReportArguments};
pub use report_format::ReportFormat;
