use dtrack_tools::prelude::*;
use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

/// Mock ReportWriter for testing
///
/// Clones share the captured report, so a test can keep one handle and give
/// the other to the use case.
#[derive(Clone, Default)]
pub struct MockReportWriter {
    written: Rc<RefCell<Vec<Report>>>,
}

impl MockReportWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn written(&self) -> Vec<Report> {
        self.written.borrow().clone()
    }
}

impl ReportWriter for MockReportWriter {
    fn write(&self, report: &Report) -> Result<PathBuf> {
        self.written.borrow_mut().push(report.clone());
        Ok(PathBuf::from(report.file_name("mock")))
    }
}
