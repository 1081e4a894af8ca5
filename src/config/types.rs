// Configuration types module
// Defines all configuration-related data structures

use serde::Deserialize;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub http: HttpConfig,
    pub performance: PerformanceConfig,
}

/// Server configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Directory request paths are resolved against.
    /// Falls back to the directory holding the executable.
    #[serde(default)]
    pub root: Option<String>,
    #[serde(default)]
    pub workers: Option<usize>,
}

/// Logging configuration
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    /// `tracing` filter directive; `RUST_LOG` takes precedence
    pub level: String,
    pub access_log: bool,
}

/// HTTP behaviour configuration
#[derive(Debug, Deserialize, Clone)]
pub struct HttpConfig {
    /// Reject request paths with parent, root or prefix components
    pub strict_paths: bool,
    /// Append the read diagnostic to the 404 body
    pub expose_error_details: bool,
}

/// Performance configuration
#[derive(Debug, Deserialize, Clone)]
pub struct PerformanceConfig {
    pub keep_alive: bool,
    #[serde(default)]
    pub max_connections: Option<u64>,
    /// Seconds; unset means connections are never timed out
    #[serde(default)]
    pub connection_timeout: Option<u64>,
    /// Seconds to wait for open connections to finish after shutdown
    pub shutdown_grace: u64,
}
