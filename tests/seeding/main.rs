//! Seeding Test Suite
//!
//! End-to-end tests for the docseed facade: seed files are loaded from
//! disk, encoded and written through either the in-memory writer or a
//! local HTTP listener.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test seeding
//!
//! # HTTP tests only
//! cargo test --test seeding http::
//! ```

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::thread;

use docseed::{MemoryWriter, Seeder, WriteMode};
use tempfile::TempDir;

// Test modules
pub mod dataset;
pub mod encode;
pub mod http;
pub mod upload;

// =============================================================================
// SHARED TEST UTILITIES
// =============================================================================

/// Demo dataset shipped with the repository
pub fn classroom_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("data/classroom.toml")
}

/// Write `contents` to `name` inside a fresh temp dir
pub fn write_seed(name: &str, contents: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join(name);
    std::fs::write(&path, contents).expect("Failed to write seed file");
    (dir, path)
}

/// Seeder backed by an in-memory store the test can inspect
pub fn memory_seeder(mode: WriteMode) -> (Seeder, Arc<MemoryWriter>) {
    let store = Arc::new(MemoryWriter::new());
    let seeder = Seeder::builder()
        .writer(Box::new(Arc::clone(&store)))
        .write_mode(mode)
        .build()
        .expect("Failed to build seeder");
    (seeder, store)
}

/// Small two-collection dataset
pub const SMALL_SEED: &str = r#"
[[collections]]
name = "usuarios"
digest_fields = ["contrasena_hash"]

[collections.documents."1042"]
nombre = "Mario López"
tipo = "docente"
contrasena_hash = "mario123"
horario = [5, 6]
activo = true

[collections.documents."2033"]
nombre = "Laura Gómez"
tipo = "administrativo"
contrasena_hash = "laura123"
activo = true

[[collections]]
name = "salones"

[collections.documents.MONITOR]
nombre = "Laboratorio IoT (Monitor)"
capacidad = 20
horario = [5, 6]
"#;

/// One request as seen by [`RecordingServer`]
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub method: String,
    pub path: String,
    pub body: String,
}

/// Local HTTP listener answering a fixed number of requests
///
/// Each request gets the next `(status, body)` from `responses`.
pub struct RecordingServer {
    pub base_url: String,
    handle: thread::JoinHandle<Vec<CapturedRequest>>,
}

impl RecordingServer {
    pub fn start(responses: Vec<(u16, &'static str)>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind");
        let addr = listener.local_addr().unwrap();

        let handle = thread::spawn(move || {
            let mut captured = Vec::new();
            for (status, body) in responses {
                let (mut stream, _) = listener.accept().unwrap();
                captured.push(read_request(&mut stream));
                let response = format!(
                    "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status,
                    if status == 200 { "OK" } else { "Error" },
                    body.len(),
                    body
                );
                stream.write_all(response.as_bytes()).unwrap();
            }
            captured
        });

        Self {
            base_url: format!("http://{}/v1/projects/demo/databases/(default)/documents", addr),
            handle,
        }
    }

    /// Wait for every expected request and return them in arrival order
    pub fn finish(self) -> Vec<CapturedRequest> {
        self.handle.join().expect("server thread panicked")
    }
}

fn read_request(stream: &mut TcpStream) -> CapturedRequest {
    let mut raw = Vec::new();
    let mut buf = [0u8; 4096];
    let header_end = loop {
        let n = stream.read(&mut buf).unwrap();
        assert!(n > 0, "connection closed before headers were complete");
        raw.extend_from_slice(&buf[..n]);
        if let Some(pos) = raw.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos;
        }
    };

    let head = String::from_utf8_lossy(&raw[..header_end]).into_owned();
    let content_length = head
        .lines()
        .find_map(|l| {
            let (name, value) = l.split_once(':')?;
            name.eq_ignore_ascii_case("content-length")
                .then(|| value.trim().parse::<usize>().ok())
                .flatten()
        })
        .unwrap_or(0);
    while raw.len() < header_end + 4 + content_length {
        let n = stream.read(&mut buf).unwrap();
        assert!(n > 0, "connection closed before body was complete");
        raw.extend_from_slice(&buf[..n]);
    }

    let mut request_line = head.lines().next().unwrap_or_default().split(' ');
    CapturedRequest {
        method: request_line.next().unwrap_or_default().to_string(),
        path: request_line.next().unwrap_or_default().to_string(),
        body: String::from_utf8_lossy(&raw[header_end + 4..header_end + 4 + content_length])
            .into_owned(),
    }
}

/// Base URL on a port nothing listens on
pub fn unreachable_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/documents", addr)
}
