use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// A project record as listed by Dependency-Track.
///
/// Only the fields the actions need are modelled; every other key of the
/// platform's project JSON is dropped during deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Absent only for degenerate records; such a project cannot be deleted
    /// or queried for dependencies.
    #[serde(default)]
    pub uuid: Option<Uuid>,
    pub name: String,
    /// Branch or release version. `None` means no version was recorded.
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub metrics: Option<ProjectMetrics>,
}

/// Metrics the platform embeds in project listings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectMetrics {
    #[serde(default)]
    pub vulnerabilities: u64,
    #[serde(default)]
    pub vulnerable_components: u64,
    #[serde(default)]
    pub components: u64,
    #[serde(default)]
    pub inherited_risk_score: f64,
}

impl Project {
    pub fn new(name: impl Into<String>, version: Option<&str>) -> Self {
        Self {
            uuid: None,
            name: name.into(),
            version: version.map(str::to_string),
            metrics: None,
        }
    }

    pub fn with_uuid(mut self, uuid: Uuid) -> Self {
        self.uuid = Some(uuid);
        self
    }

    pub fn with_metrics(mut self, metrics: ProjectMetrics) -> Self {
        self.metrics = Some(metrics);
        self
    }
}

impl fmt::Display for Project {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.version {
            Some(version) => write!(f, "{}:{}", self.name, version),
            None => write!(f, "{}", self.name),
        }
    }
}
