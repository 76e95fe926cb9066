/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (REST API, file system).
pub mod project_repository;
pub mod remote_client;
pub mod report_writer;

pub use project_repository::ProjectRepository;
pub use remote_client::{RemoteClient, PAGE_SIZE};
pub use report_writer::ReportWriter;
