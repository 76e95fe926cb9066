//! Configuration file support for dtrack-tools.
//!
//! Provides YAML-based configuration through `dtrack-tools.config.yml` files,
//! including data structures, file loading, validation, and the merge of
//! connection settings with the command line.

use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, warn};

use crate::adapters::outbound::network::DependencyTrackClient;
use crate::application::factories::ActionSettings;
use crate::shared::error::DtrackError;
use crate::shared::security::{validate_regular_file, MAX_CONFIG_FILE_SIZE};
use crate::shared::Result;
use crate::tracking::policies::branch_classifier::compile_full_match;

pub const CONFIG_FILENAME: &str = "dtrack-tools.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub url: Option<String>,
    pub api_key: Option<String>,
    pub timeout_secs: Option<u64>,
    pub long_lived_versions: Option<Vec<String>>,
    pub short_lived_versions: Option<Vec<String>>,
    pub output_dir: Option<PathBuf>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// Defaults the actions fall back to.
    pub fn action_settings(&self) -> ActionSettings {
        ActionSettings {
            long_lived_versions: self.long_lived_versions.clone(),
            short_lived_versions: self.short_lived_versions.clone(),
            output_dir: self.output_dir.clone(),
        }
    }
}

/// Where and how to reach the Dependency-Track API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionSettings {
    pub url: String,
    pub api_key: String,
    pub timeout: Duration,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    validate_regular_file(path, "config file", MAX_CONFIG_FILE_SIZE).map_err(|e| {
        DtrackError::configuration(format!(
            "Failed to read config file: {}\n{}",
            path.display(),
            e
        ))
    })?;

    let content = std::fs::read_to_string(path).map_err(|e| {
        DtrackError::configuration(format!(
            "Failed to read config file: {}\n{}",
            path.display(),
            e
        ))
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).map_err(|e| {
        DtrackError::configuration(format!(
            "Failed to parse config file: {}\n{}\nEnsure the file contains valid YAML syntax.",
            path.display(),
            e
        ))
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);
    debug!("Loaded configuration from {}", path.display());

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if config.timeout_secs == Some(0) {
        return Err(DtrackError::configuration(
            "Invalid config: timeout_secs must be greater than 0",
        )
        .into());
    }

    if let Some(url) = &config.url {
        if url.trim().is_empty() {
            return Err(
                DtrackError::configuration("Invalid config: url must not be empty").into(),
            );
        }
    }

    let pattern_lists = [
        ("long_lived_versions", &config.long_lived_versions),
        ("short_lived_versions", &config.short_lived_versions),
    ];
    for (field, patterns) in pattern_lists {
        for (i, pattern) in patterns.iter().flatten().enumerate() {
            compile_full_match(pattern, &format!("{}[{}]", field, i))?;
        }
    }

    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        warn!("Unknown config field '{}' will be ignored", key);
    }
}

/// Merges the connection settings.
///
/// Command-line values (which already include the `DTRACK_URL` and
/// `DTRACK_API_KEY` environment variables) take precedence over the config
/// file. The timeout falls back to 30 seconds.
///
/// # Errors
/// Returns a configuration error if the URL or the API key is missing.
pub fn resolve_connection(
    url: Option<&str>,
    api_key: Option<&str>,
    timeout_secs: Option<u64>,
    config: &ConfigFile,
) -> Result<ConnectionSettings> {
    let url = url
        .or(config.url.as_deref())
        .filter(|u| !u.trim().is_empty())
        .ok_or_else(|| {
            DtrackError::configuration(
                "No Dependency-Track URL given. Use --url, DTRACK_URL or the 'url' config field",
            )
        })?;

    let api_key = api_key
        .or(config.api_key.as_deref())
        .filter(|k| !k.trim().is_empty())
        .ok_or_else(|| {
            DtrackError::configuration(
                "No API key given. Use --api-key, DTRACK_API_KEY or the 'api_key' config field",
            )
        })?;

    let timeout_secs = timeout_secs
        .or(config.timeout_secs)
        .unwrap_or(DependencyTrackClient::DEFAULT_TIMEOUT_SECONDS);
    if timeout_secs == 0 {
        return Err(DtrackError::configuration("--timeout must be greater than 0").into());
    }

    Ok(ConnectionSettings {
        url: url.to_string(),
        api_key: api_key.to_string(),
        timeout: Duration::from_secs(timeout_secs),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn is_configuration_error(err: &anyhow::Error) -> bool {
        matches!(
            err.downcast_ref::<DtrackError>(),
            Some(DtrackError::Configuration { .. })
        )
    }

    fn write_config(dir: &TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("config.yml");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_valid_config() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            r#"
url: https://dtrack.example.com
api_key: odt_secret
timeout_secs: 60
long_lived_versions:
  - main
  - 'release-\d+'
short_lived_versions:
  - 'feature-.+'
output_dir: /tmp/reports
"#,
        );

        let config = load_config_from_path(&path).unwrap();
        assert_eq!(config.url.as_deref(), Some("https://dtrack.example.com"));
        assert_eq!(config.api_key.as_deref(), Some("odt_secret"));
        assert_eq!(config.timeout_secs, Some(60));
        assert_eq!(
            config.long_lived_versions.as_deref(),
            Some(&["main".to_string(), r"release-\d+".to_string()][..])
        );
        assert_eq!(config.output_dir, Some(PathBuf::from("/tmp/reports")));
        assert!(config.unknown_fields.is_empty());

        let settings = config.action_settings();
        assert_eq!(
            settings.short_lived_versions,
            Some(vec!["feature-.+".to_string()])
        );
    }

    #[test]
    fn test_discover_config_found() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "timeout_secs: 5\n").unwrap();

        let config = discover_config(dir.path()).unwrap().unwrap();
        assert_eq!(config.timeout_secs, Some(5));
    }

    #[test]
    fn test_discover_config_not_found() {
        let dir = TempDir::new().unwrap();
        assert!(discover_config(dir.path()).unwrap().is_none());
    }

    #[test]
    fn test_load_config_missing_file() {
        let err = load_config_from_path(Path::new("/nonexistent/config.yml")).unwrap_err();
        assert!(is_configuration_error(&err));
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_load_config_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "invalid: yaml: [[[broken");

        let err = load_config_from_path(&path).unwrap_err();
        assert!(is_configuration_error(&err));
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_invalid_pattern_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "short_lived_versions:\n  - 'PR-('\n");

        let err = load_config_from_path(&path).unwrap_err();
        assert!(is_configuration_error(&err));
        assert!(err.to_string().contains("short_lived_versions[0]"));
    }

    #[test]
    fn test_zero_timeout_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "timeout_secs: 0\n");

        let err = load_config_from_path(&path).unwrap_err();
        assert!(err.to_string().contains("timeout_secs"));
    }

    #[test]
    fn test_unknown_fields_are_kept_for_warning() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "url: http://localhost:8081\nproxy: true\nretries: 3\n");

        let config = load_config_from_path(&path).unwrap();
        assert_eq!(config.unknown_fields.len(), 2);
        assert!(config.unknown_fields.contains_key("proxy"));
        assert!(config.unknown_fields.contains_key("retries"));
    }

    #[test]
    fn test_resolve_connection_prefers_command_line() {
        let config = ConfigFile {
            url: Some("http://from-file:8081".to_string()),
            api_key: Some("file-key".to_string()),
            timeout_secs: Some(10),
            ..ConfigFile::default()
        };

        let settings =
            resolve_connection(Some("http://from-cli:8081"), None, Some(45), &config).unwrap();
        assert_eq!(settings.url, "http://from-cli:8081");
        assert_eq!(settings.api_key, "file-key");
        assert_eq!(settings.timeout, Duration::from_secs(45));
    }

    #[test]
    fn test_resolve_connection_default_timeout() {
        let settings =
            resolve_connection(Some("http://x"), Some("key"), None, &ConfigFile::default())
                .unwrap();
        assert_eq!(settings.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_resolve_connection_requires_url_and_key() {
        let config = ConfigFile::default();

        let err = resolve_connection(None, Some("key"), None, &config).unwrap_err();
        assert!(is_configuration_error(&err));
        assert!(err.to_string().contains("URL"));

        let err = resolve_connection(Some("http://x"), Some("  "), None, &config).unwrap_err();
        assert!(is_configuration_error(&err));
        assert!(err.to_string().contains("API key"));
    }

    #[test]
    fn test_resolve_connection_rejects_zero_timeout() {
        let err = resolve_connection(Some("http://x"), Some("key"), Some(0), &ConfigFile::default())
            .unwrap_err();
        assert!(is_configuration_error(&err));
    }
}
