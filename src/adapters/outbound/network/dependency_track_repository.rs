use crate::ports::outbound::{ProjectRepository, RemoteClient};
use crate::shared::error::DtrackError;
use crate::shared::Result;
use crate::tracking::domain::{Component, Project};
use anyhow::Context;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, info, warn};

/// DependencyTrackRepository adapter implementing the ProjectRepository port
///
/// Maps the repository operations onto the `/project` and
/// `/component/project` endpoints of the wrapped RemoteClient.
pub struct DependencyTrackRepository<C> {
    client: C,
}

impl<C: RemoteClient> DependencyTrackRepository<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &C {
        &self.client
    }
}

impl<C: RemoteClient> ProjectRepository for DependencyTrackRepository<C> {
    fn list_projects(&self) -> Result<Vec<Project>> {
        info!("Getting list of projects");
        let records = self.client.fetch_all("/project", &[])?;
        decode_records(records, "project")
    }

    fn list_projects_by_tag(&self, tag: &str) -> Result<Vec<Project>> {
        info!("Getting list of projects with tag {}", tag);

        // this endpoint is not paginated by the platform
        let path = format!("/project/tag/{}", urlencoding::encode(tag));
        match self.client.fetch(&path, &[])? {
            Value::Array(records) => decode_records(records, "project"),
            other => Err(DtrackError::InvalidResponse {
                url: path,
                details: format!("expected a JSON array, got: {}", other),
            }
            .into()),
        }
    }

    fn delete_project(&self, project: &Project) -> Result<bool> {
        let Some(uuid) = project.uuid else {
            warn!("Project {} has no identifier and cannot be deleted", project);
            return Ok(false);
        };

        info!("Deleting project {}", project);
        self.client.delete(&format!("/project/{}", uuid))
    }

    fn list_dependencies(&self, project: &Project) -> Result<Vec<Component>> {
        let uuid = project.uuid.ok_or_else(|| DtrackError::MissingIdentifier {
            project: project.to_string(),
        })?;

        info!("Getting list of project dependencies for {}", project);
        let records = self
            .client
            .fetch_all(&format!("/component/project/{}", uuid), &[])?;

        records
            .into_iter()
            .map(unwrap_dependency)
            .map(|record| {
                serde_json::from_value::<Component>(record)
                    .map(Component::normalize_license)
                    .context("Failed to decode component record")
            })
            .collect()
    }
}

/// Accepts both listing shapes: a component object, or the legacy
/// dependency record `{ "component": {...}, "project": {...} }`.
fn unwrap_dependency(record: Value) -> Value {
    match record {
        Value::Object(mut map) if map.get("component").is_some_and(Value::is_object) => {
            debug!("Unwrapping legacy dependency record");
            map.remove("component").unwrap_or(Value::Null)
        }
        other => other,
    }
}

fn decode_records<T: DeserializeOwned>(records: Vec<Value>, kind: &str) -> Result<Vec<T>> {
    records
        .into_iter()
        .enumerate()
        .map(|(i, record)| {
            serde_json::from_value(record)
                .with_context(|| format!("Failed to decode {} record #{}", kind, i + 1))
        })
        .collect()
}
