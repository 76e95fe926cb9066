use dtrack_tools::prelude::*;
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};

/// Mock ProjectRepository for testing
///
/// Deletions remove the project from the listing, so a second run sees the
/// state the first one left behind.
pub struct MockProjectRepository {
    projects: RefCell<Vec<Project>>,
    dependencies: HashMap<String, Vec<Component>>,
    refused: HashSet<String>,
    pub deleted: RefCell<Vec<String>>,
}

impl MockProjectRepository {
    pub fn new(projects: Vec<Project>) -> Self {
        Self {
            projects: RefCell::new(projects),
            dependencies: HashMap::new(),
            refused: HashSet::new(),
            deleted: RefCell::new(Vec::new()),
        }
    }

    /// Registers the dependencies returned for the project labelled `name:version`
    pub fn with_dependencies(mut self, label: &str, dependencies: Vec<Component>) -> Self {
        self.dependencies.insert(label.to_string(), dependencies);
        self
    }

    /// Makes the platform refuse to delete the project labelled `name:version`
    pub fn refusing(mut self, label: &str) -> Self {
        self.refused.insert(label.to_string());
        self
    }

    pub fn remaining(&self) -> Vec<String> {
        self.projects.borrow().iter().map(|p| p.to_string()).collect()
    }
}

impl ProjectRepository for MockProjectRepository {
    fn list_projects(&self) -> Result<Vec<Project>> {
        Ok(self.projects.borrow().clone())
    }

    fn list_projects_by_tag(&self, _tag: &str) -> Result<Vec<Project>> {
        Ok(self.projects.borrow().clone())
    }

    fn delete_project(&self, project: &Project) -> Result<bool> {
        let label = project.to_string();
        if self.refused.contains(&label) {
            return Ok(false);
        }
        self.projects.borrow_mut().retain(|p| p.to_string() != label);
        self.deleted.borrow_mut().push(label);
        Ok(true)
    }

    fn list_dependencies(&self, project: &Project) -> Result<Vec<Component>> {
        Ok(self
            .dependencies
            .get(&project.to_string())
            .cloned()
            .unwrap_or_default())
    }
}
