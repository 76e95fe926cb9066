/// Mock implementations for testing
mod mock_project_repository;
mod mock_remote_client;
mod mock_report_writer;

pub use mock_project_repository::MockProjectRepository;
pub use mock_remote_client::MockRemoteClient;
pub use mock_report_writer::MockReportWriter;
