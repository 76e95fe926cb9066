pub mod component;
pub mod project;
pub mod report;

pub use component::{Component, ResolvedLicense};
pub use project::{Project, ProjectMetrics};
pub use report::{Report, ReportedProject};
