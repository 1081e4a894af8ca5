//! Logger module
//!
//! Thin named helpers over `tracing` so call sites read the same everywhere:
//! - Server lifecycle logging
//! - Access logging
//! - File read failures, warnings and errors

mod format;

pub use format::AccessLogEntry;

use std::net::SocketAddr;
use std::path::Path;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;
use crate::error::{FileError, FileErrorKind};

/// Install the global subscriber
///
/// `RUST_LOG` wins over `logging.level`. Returns false if a subscriber was
/// already installed.
pub fn init(config: &LoggingConfig) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(filter)
        .try_init()
        .is_ok()
}

pub fn log_server_start(addr: &SocketAddr, root: &Path) {
    tracing::info!("Server running at Port:{}/", addr.port());
    tracing::debug!(%addr, root = %root.display(), "serving files");
}

pub fn log_access(entry: &AccessLogEntry) {
    tracing::info!(target: "access", "{}", entry.format_dev());
}

/// Log a failed read; the diagnostic stays server-side unless configured otherwise
pub fn log_file_error(err: &FileError) {
    let path = err.path.display();
    match err.kind {
        // Missing files are routine 404s
        FileErrorKind::NotFound => tracing::debug!(%path, "{}", err.message),
        FileErrorKind::PermissionDenied => tracing::warn!(%path, "{}", err.message),
        FileErrorKind::Other => tracing::error!(%path, "{}", err.message),
    }
}

pub fn log_connection_accepted(peer_addr: &SocketAddr) {
    tracing::trace!(%peer_addr, "connection accepted");
}

pub fn log_connection_error(err: &impl std::fmt::Display) {
    tracing::debug!("Failed to serve connection: {err}");
}

pub fn log_error(message: &str) {
    tracing::error!("{message}");
}

pub fn log_warning(message: &str) {
    tracing::warn!("{message}");
}

pub fn log_shutdown(active_connections: usize) {
    tracing::info!(active_connections, "shutdown requested, no longer accepting connections");
}

pub fn log_drain_complete() {
    tracing::info!("all connections closed");
}
