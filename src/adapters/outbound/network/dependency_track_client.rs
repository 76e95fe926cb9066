use crate::ports::outbound::RemoteClient;
use crate::shared::error::DtrackError;
use crate::shared::Result;
use anyhow::Context;
use reqwest::blocking::{Client, Response};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// Blocking HTTP client for the Dependency-Track REST API
///
/// Every request carries `Content-Type: application/json` and the
/// `X-Api-Key` header, and is bounded by the configured timeout.
///
/// # Security
/// - The API key header is marked sensitive so it never shows up in debug output
/// - Does not retry failed requests; the caller decides whether to go on
pub struct DependencyTrackClient {
    client: Client,
    api_url: String,
}

impl DependencyTrackClient {
    const API_PATH: &'static str = "/api/v1";
    const API_KEY_HEADER: &'static str = "x-api-key";
    pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

    /// Creates a client for the server at `base_url` (without `/api/v1`)
    ///
    /// # Errors
    /// Returns a configuration error if the URL is not http(s) or the API
    /// key cannot be sent as a header value
    pub fn new(base_url: &str, api_key: &str, timeout: Duration) -> Result<Self> {
        let base_url = base_url.trim().trim_end_matches('/');
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(DtrackError::configuration(format!(
                "Dependency-Track URL must start with http:// or https://, got '{}'",
                base_url
            ))
            .into());
        }

        let mut api_key_value = HeaderValue::from_str(api_key).map_err(|_| {
            DtrackError::configuration("API key contains characters not allowed in an HTTP header")
        })?;
        api_key_value.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(HeaderName::from_static(Self::API_KEY_HEADER), api_key_value);

        let user_agent = format!("dtrack-tools/{}", env!("CARGO_PKG_VERSION"));
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .default_headers(headers)
            .build()
            .context("Failed to create HTTP client")?;

        let api_url = format!("{}{}", base_url, Self::API_PATH);
        debug!("Using Dependency-Track API at {}", api_url);

        Ok(Self { client, api_url })
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    fn url(&self, path: &str, query: &[(String, String)]) -> String {
        let mut url = format!("{}{}", self.api_url, path);
        if !query.is_empty() {
            let pairs: Vec<String> = query
                .iter()
                .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
                .collect();
            url.push('?');
            url.push_str(&pairs.join("&"));
        }
        url
    }

    /// Turns a non-success status into `DtrackError::Api`
    fn ensure_success(response: Response, url: &str) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().unwrap_or_default();
        Err(DtrackError::Api {
            status: status.as_u16(),
            url: url.to_string(),
            body,
        }
        .into())
    }
}

impl RemoteClient for DependencyTrackClient {
    fn fetch(&self, path: &str, query: &[(String, String)]) -> Result<Value> {
        let url = self.url(path, query);
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .with_context(|| format!("GET {} failed", url))?;
        let response = Self::ensure_success(response, &url)?;

        response.json::<Value>().map_err(|e| {
            DtrackError::InvalidResponse {
                url,
                details: e.to_string(),
            }
            .into()
        })
    }

    fn delete(&self, path: &str) -> Result<bool> {
        let url = self.url(path, &[]);
        debug!("DELETE {}", url);

        let response = self
            .client
            .delete(&url)
            .send()
            .with_context(|| format!("DELETE {} failed", url))?;

        let status = response.status();
        if !status.is_success() {
            debug!(
                "DELETE {} answered {}: {}",
                url,
                status.as_u16(),
                response.text().unwrap_or_default()
            );
        }
        Ok(status.is_success())
    }
}
