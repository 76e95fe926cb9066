use dtrack_tools::prelude::*;
use serde_json::{json, Value};
use std::cell::RefCell;
use std::collections::HashMap;

/// Mock RemoteClient for testing
///
/// Serves one canned body per path. Paginated requests get the body on the
/// first page and an empty array afterwards.
#[derive(Default)]
pub struct MockRemoteClient {
    bodies: HashMap<String, Value>,
    pub requests: RefCell<Vec<String>>,
    pub refuse_deletes: bool,
}

impl MockRemoteClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_body(mut self, path: &str, body: Value) -> Self {
        self.bodies.insert(path.to_string(), body);
        self
    }
}

impl RemoteClient for MockRemoteClient {
    fn fetch(&self, path: &str, query: &[(String, String)]) -> Result<Value> {
        self.requests.borrow_mut().push(format!("GET {}", path));

        let later_page = query.iter().any(|(k, v)| k == "pageNumber" && v != "1");
        if later_page {
            return Ok(json!([]));
        }

        match self.bodies.get(path) {
            Some(body) => Ok(body.clone()),
            None => Err(DtrackError::Api {
                status: 404,
                url: path.to_string(),
                body: "The project could not be found.".to_string(),
            }
            .into()),
        }
    }

    fn delete(&self, path: &str) -> Result<bool> {
        self.requests.borrow_mut().push(format!("DELETE {}", path));
        Ok(!self.refuse_deletes)
    }
}
