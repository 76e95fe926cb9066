use std::io::{BufRead, BufReader, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

/// One canned answer of the fake server
#[derive(Clone)]
pub struct Route {
    method: &'static str,
    path: String,
    status: u16,
    body: String,
}

impl Route {
    /// GET under `/api/v1`; paginated requests past the first page get `[]`
    pub fn get(path: &str, body: serde_json::Value) -> Self {
        Self {
            method: "GET",
            path: format!("/api/v1{}", path),
            status: 200,
            body: body.to_string(),
        }
    }

    /// DELETE under `/api/v1` answered with `status`
    pub fn delete(path: &str, status: u16) -> Self {
        Self {
            method: "DELETE",
            path: format!("/api/v1{}", path),
            status,
            body: String::new(),
        }
    }
}

/// Loopback stand-in for a Dependency-Track server
///
/// Every connection carries one request and is closed after the answer.
/// Requests without an API key are rejected with 401, unknown routes get 404.
pub struct FakeDependencyTrack {
    pub base_url: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl FakeDependencyTrack {
    pub fn start(routes: Vec<Route>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        let requests = Arc::new(Mutex::new(Vec::new()));
        let seen = Arc::clone(&requests);

        thread::spawn(move || {
            for stream in listener.incoming() {
                let Ok(stream) = stream else { continue };
                if let Some(request_line) = handle_connection(stream, &routes) {
                    seen.lock().unwrap().push(request_line);
                }
            }
        });

        Self { base_url, requests }
    }

    /// Request lines seen so far, e.g. `DELETE /api/v1/project/<uuid>`
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

fn handle_connection(mut stream: TcpStream, routes: &[Route]) -> Option<String> {
    stream.set_read_timeout(Some(Duration::from_secs(10))).ok()?;
    let mut reader = BufReader::new(stream.try_clone().ok()?);

    let mut request_line = String::new();
    reader.read_line(&mut request_line).ok()?;
    let mut has_api_key = false;
    loop {
        let mut header = String::new();
        if reader.read_line(&mut header).ok()? == 0 || header == "\r\n" {
            break;
        }
        if header.to_lowercase().starts_with("x-api-key:") {
            has_api_key = true;
        }
    }

    let parts: Vec<&str> = request_line.split_whitespace().collect();
    if parts.len() < 2 {
        return None;
    }
    let method = parts[0];
    let (path, query) = parts[1].split_once('?').unwrap_or((parts[1], ""));
    let later_page = query
        .split('&')
        .any(|pair| pair.starts_with("pageNumber=") && pair != "pageNumber=1");

    let (status, body) = if !has_api_key {
        (401, String::new())
    } else if method == "GET" && later_page {
        (200, "[]".to_string())
    } else {
        routes
            .iter()
            .find(|r| r.method == method && r.path == path)
            .map(|r| (r.status, r.body.clone()))
            .unwrap_or((404, String::new()))
    };

    let response = format!(
        "HTTP/1.1 {} Fake\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        body.len(),
        body
    );
    stream.write_all(response.as_bytes()).ok()?;
    stream.flush().ok()?;

    Some(format!("{} {}", method, path))
}
