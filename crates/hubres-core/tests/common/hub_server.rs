//! Minimal HTTP/1.1 server standing in for the hub in integration tests.
//!
//! Answers every GET with one fixed status and body, records request paths,
//! and can stall before answering to exercise cancellation.

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct HubServerOptions {
    pub status: u16,
    pub body: Vec<u8>,
    /// Sleep this long before writing the response.
    pub delay: Option<Duration>,
}

impl HubServerOptions {
    pub fn ok(body: &str) -> Self {
        Self {
            status: 200,
            body: body.as_bytes().to_vec(),
            delay: None,
        }
    }

    pub fn status(status: u16, body: &str) -> Self {
        Self {
            status,
            body: body.as_bytes().to_vec(),
            delay: None,
        }
    }
}

/// Handle to a running server. The server runs until the process exits.
#[derive(Clone)]
pub struct HubServer {
    /// Base URL without trailing slash, e.g. "http://127.0.0.1:12345".
    pub base: String,
    paths: Arc<Mutex<Vec<String>>>,
}

impl HubServer {
    /// Template with four `%s` slots rooted at this server.
    pub fn template(&self) -> String {
        format!("{}/v1/resource/%s/%s/%s/%s/yaml", self.base)
    }

    /// Request paths seen so far, in arrival order.
    pub fn paths(&self) -> Vec<String> {
        self.paths.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.paths.lock().unwrap().len()
    }
}

pub fn start(opts: HubServerOptions) -> HubServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let paths = Arc::new(Mutex::new(Vec::new()));
    let opts = Arc::new(opts);
    let seen = Arc::clone(&paths);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let opts = Arc::clone(&opts);
            let seen = Arc::clone(&seen);
            thread::spawn(move || handle(stream, &opts, &seen));
        }
    });
    HubServer {
        base: format!("http://127.0.0.1:{}", port),
        paths,
    }
}

fn handle(mut stream: TcpStream, opts: &HubServerOptions, seen: &Mutex<Vec<String>>) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) | Err(_) => return,
        Ok(n) => n,
    };
    let request = String::from_utf8_lossy(&buf[..n]);
    let path = request
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .unwrap_or("")
        .to_string();
    seen.lock().unwrap().push(path);

    if let Some(delay) = opts.delay {
        thread::sleep(delay);
    }

    let header = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        opts.status,
        reason(opts.status),
        opts.body.len()
    );
    let _ = stream.write_all(header.as_bytes());
    let _ = stream.write_all(&opts.body);
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "Status",
    }
}
