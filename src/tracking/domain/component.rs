use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// A dependency component of a project.
///
/// Every field is optional: component records coming out of different
/// analyzers carry different subsets, and the report renders gaps rather
/// than rejecting the record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Component {
    #[serde(default)]
    pub uuid: Option<Uuid>,
    #[serde(default)]
    pub purl: Option<String>,
    #[serde(default)]
    pub classifier: Option<String>,
    #[serde(default)]
    pub sha256: Option<String>,
    #[serde(default)]
    pub license: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default, skip_serializing)]
    pub resolved_license: Option<ResolvedLicense>,
}

/// License resolved by the platform against its license catalogue.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedLicense {
    #[serde(default)]
    pub license_id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

impl Component {
    pub fn new(name: &str, version: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            version: Some(version.to_string()),
            ..Self::default()
        }
    }

    pub fn with_purl(mut self, purl: &str) -> Self {
        self.purl = Some(purl.to_string());
        self
    }

    pub fn with_license(mut self, license: &str) -> Self {
        self.license = Some(license.to_string());
        self
    }

    /// Fills `license` from the resolved license when no declared one exists.
    ///
    /// Priority: declared license, resolved SPDX id, resolved license name.
    pub fn normalize_license(mut self) -> Self {
        let resolved = self.resolved_license.take();
        self.license = self
            .license
            .filter(|l| !l.trim().is_empty())
            .or_else(|| {
                resolved.and_then(|r| {
                    r.license_id
                        .filter(|l| !l.is_empty())
                        .or_else(|| r.name.filter(|l| !l.is_empty()))
                })
            });
        self
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.purl, &self.name, &self.version) {
            (Some(purl), _, _) => write!(f, "{}", purl),
            (None, Some(name), Some(version)) => write!(f, "{}@{}", name, version),
            (None, Some(name), None) => write!(f, "{}", name),
            (None, None, _) => write!(f, "<unnamed component>"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_component() {
        let json = r#"{
            "uuid": "0d7a4d1e-1c7a-4d53-9a43-6a8bb1c71a5e",
            "group": "org.apache.logging.log4j",
            "name": "log4j-core",
            "version": "2.14.1",
            "classifier": "LIBRARY",
            "sha256": "ade7402a",
            "purl": "pkg:maven/org.apache.logging.log4j/log4j-core@2.14.1",
            "license": "Apache-2.0"
        }"#;

        let component: Component = serde_json::from_str(json).unwrap();
        assert_eq!(component.name.as_deref(), Some("log4j-core"));
        assert_eq!(component.version.as_deref(), Some("2.14.1"));
        assert_eq!(component.classifier.as_deref(), Some("LIBRARY"));
        assert_eq!(component.sha256.as_deref(), Some("ade7402a"));
        assert_eq!(component.license.as_deref(), Some("Apache-2.0"));
        assert_eq!(
            component.purl.as_deref(),
            Some("pkg:maven/org.apache.logging.log4j/log4j-core@2.14.1")
        );
    }

    #[test]
    fn test_normalize_keeps_declared_license() {
        let component: Component = serde_json::from_str(
            r#"{"license": "MIT", "resolvedLicense": {"licenseId": "Apache-2.0"}}"#,
        )
        .unwrap();
        assert_eq!(component.normalize_license().license.as_deref(), Some("MIT"));
    }

    #[test]
    fn test_normalize_falls_back_to_resolved_license_id() {
        let component: Component = serde_json::from_str(
            r#"{"resolvedLicense": {"licenseId": "Apache-2.0", "name": "Apache License 2.0"}}"#,
        )
        .unwrap();
        let normalized = component.normalize_license();
        assert_eq!(normalized.license.as_deref(), Some("Apache-2.0"));
        assert!(normalized.resolved_license.is_none());
    }

    #[test]
    fn test_normalize_falls_back_to_resolved_license_name() {
        let component: Component =
            serde_json::from_str(r#"{"license": "", "resolvedLicense": {"name": "Custom EULA"}}"#)
                .unwrap();
        assert_eq!(
            component.normalize_license().license.as_deref(),
            Some("Custom EULA")
        );
    }

    #[test]
    fn test_normalize_without_any_license() {
        let component = Component::new("a", "1").normalize_license();
        assert!(component.license.is_none());
    }

    #[test]
    fn test_display_prefers_purl() {
        let component = Component::new("serde", "1.0.0").with_purl("pkg:cargo/serde@1.0.0");
        assert_eq!(component.to_string(), "pkg:cargo/serde@1.0.0");
        assert_eq!(Component::new("serde", "1.0.0").to_string(), "serde@1.0.0");
    }
}
