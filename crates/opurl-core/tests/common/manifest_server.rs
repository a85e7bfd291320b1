//! Minimal HTTP/1.1 server for integration tests.
//!
//! Answers every request with one fixed status line and body, and records the
//! request lines it saw.

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

pub struct ManifestServer {
    pub url: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl ManifestServer {
    /// Request lines received so far (e.g. "GET /check HTTP/1.1").
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

/// Serves `body` with `200 OK`.
pub fn start(body: &str) -> ManifestServer {
    start_with_status("200 OK", body)
}

/// Serves `body` with the given status (e.g. "500 Internal Server Error").
/// The server runs until the process exits.
pub fn start_with_status(status: &'static str, body: &str) -> ManifestServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let body = Arc::new(body.to_string());
    let requests = Arc::new(Mutex::new(Vec::new()));
    let seen = Arc::clone(&requests);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let body = Arc::clone(&body);
            let seen = Arc::clone(&seen);
            thread::spawn(move || handle(stream, status, &body, &seen));
        }
    });
    ManifestServer {
        url: format!("http://127.0.0.1:{}/check/1/13.0.0/OPM4/en/400600", port),
        requests,
    }
}

/// A URL on a local port with nothing listening.
pub fn unreachable_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}/check", port)
}

fn handle(mut stream: TcpStream, status: &str, body: &str, seen: &Mutex<Vec<String>>) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) | Err(_) => return,
        Ok(n) => n,
    };
    if let Ok(request) = std::str::from_utf8(&buf[..n]) {
        if let Some(line) = request.lines().next() {
            seen.lock().unwrap().push(line.trim().to_string());
        }
    }
    let response = format!(
        "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        body.len(),
        body
    );
    let _ = stream.write_all(response.as_bytes());
}
