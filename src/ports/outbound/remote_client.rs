use crate::shared::Result;
use serde_json::Value;

/// Number of records requested per page
pub const PAGE_SIZE: usize = 100;

/// RemoteClient port for the tracking platform's REST interface
///
/// Paths are relative to the API root (e.g. `/project`). Implementations
/// attach authentication, enforce a timeout, and turn every non-success
/// status into a `DtrackError::Api`. Nothing is retried.
pub trait RemoteClient {
    /// Issues a GET and returns the decoded JSON body
    ///
    /// # Errors
    /// Returns an error if the request fails, the status is not a success
    /// or the body is not JSON
    fn fetch(&self, path: &str, query: &[(String, String)]) -> Result<Value>;

    /// Issues a DELETE
    ///
    /// # Returns
    /// Whether the platform answered with a success status. A rejected
    /// deletion is `Ok(false)`, not an error.
    ///
    /// # Errors
    /// Returns an error only if no response was received at all
    fn delete(&self, path: &str) -> Result<bool>;

    /// Fetches every page of a paginated listing
    ///
    /// Requests pages 1, 2, ... with `pageSize`/`pageNumber` appended to
    /// `query_base` and stops at the first page without records. Records
    /// keep the order in which the pages returned them.
    ///
    /// # Errors
    /// Fails on the first page that fails; nothing collected so far is returned
    fn fetch_all(&self, path: &str, query_base: &[(String, String)]) -> Result<Vec<Value>> {
        let mut records = Vec::new();

        for page_number in 1.. {
            let mut query = query_base.to_vec();
            query.push(("pageSize".to_string(), PAGE_SIZE.to_string()));
            query.push(("pageNumber".to_string(), page_number.to_string()));

            let page = match self.fetch(path, &query)? {
                Value::Array(page) => page,
                other => anyhow::bail!(
                    "Expected a JSON array from {} (page {}), got: {}",
                    path,
                    page_number,
                    other
                ),
            };

            if page.is_empty() {
                break;
            }
            records.extend(page);
        }

        Ok(records)
    }
}
