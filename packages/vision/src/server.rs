//! Disposable HTTP server for fixture pages
//!
//! Serves one HTML document to one request, then shuts down. Used to load
//! static layouts into the browser without touching the filesystem.

use crate::{Result, VisionError};
use std::net::TcpListener;
use std::thread;
use std::time::Duration;
use tiny_http::{Header, Response, Server};
use tracing::warn;

/// Server that answers a single request with a fixed HTML document
pub struct FixtureServer {
    server: Server,
    port: u16,
    html: String,
}

impl FixtureServer {
    /// Bind to a random local port
    pub fn new(html: String) -> Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0")?;
        let port = listener.local_addr()?.port();

        let server = Server::from_listener(listener, None)
            .map_err(|e| VisionError::Browser(e.to_string()))?;

        Ok(Self { server, port, html })
    }

    pub fn url(&self) -> String {
        format!("http://127.0.0.1:{}", self.port)
    }

    /// Answer at most one request, giving up after `timeout`
    pub fn serve_once(&self, timeout: Duration) -> Result<()> {
        if let Some(request) = self.server.recv_timeout(timeout)? {
            let header = Header::from_bytes(&b"Content-Type"[..], &b"text/html; charset=UTF-8"[..])
                .map_err(|_| VisionError::Browser("invalid content type header".to_string()))?;
            let response = Response::from_string(self.html.as_str()).with_header(header);
            request.respond(response)?;
        }
        Ok(())
    }
}

/// Start a fixture server on a background thread and return its URL
pub fn start_fixture_server(html: String) -> Result<(String, thread::JoinHandle<()>)> {
    let server = FixtureServer::new(html)?;
    let url = server.url();

    let handle = thread::spawn(move || {
        if let Err(e) = server.serve_once(Duration::from_secs(30)) {
            warn!(error = %e, "Fixture server failed");
        }
    });

    Ok((url, handle))
}
