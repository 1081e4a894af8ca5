//! Access log format module
//!
//! One line per request in the compact developer format:
//! `GET /index.html 200 0.412 ms - 1024`

use std::time::Duration;

/// Access log entry containing the request/response summary
#[derive(Debug, Clone)]
pub struct AccessLogEntry {
    /// HTTP method (GET, POST, etc.)
    pub method: String,
    /// Request URI path as received
    pub path: String,
    /// Response status code
    pub status: u16,
    /// Response body size in bytes, if known
    pub body_bytes: Option<u64>,
    /// Time spent producing the response
    pub elapsed: Duration,
}

impl AccessLogEntry {
    pub fn new(method: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            path: path.into(),
            status: 200,
            body_bytes: None,
            elapsed: Duration::ZERO,
        }
    }

    #[must_use]
    pub const fn with_status(mut self, status: u16) -> Self {
        self.status = status;
        self
    }

    #[must_use]
    pub const fn with_body_bytes(mut self, body_bytes: Option<u64>) -> Self {
        self.body_bytes = body_bytes;
        self
    }

    #[must_use]
    pub const fn with_elapsed(mut self, elapsed: Duration) -> Self {
        self.elapsed = elapsed;
        self
    }

    /// `:method :url :status :response-time ms - :content-length`
    pub fn format_dev(&self) -> String {
        let millis = self.elapsed.as_secs_f64() * 1000.0;
        let size = self
            .body_bytes
            .map_or_else(|| "-".to_string(), |b| b.to_string());
        format!(
            "{} {} {} {millis:.3} ms - {size}",
            self.method, self.path, self.status
        )
    }
}
