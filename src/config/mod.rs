// Configuration module entry point
// Loads layered configuration and holds the shared per-server state

mod state;
mod types;

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

// Re-export public types
pub use state::AppState;
pub use types::{Config, HttpConfig, LoggingConfig, PerformanceConfig, ServerConfig};

/// Config file consulted when no path is given on the command line
pub const DEFAULT_CONFIG_FILE: &str = "nosniff";

/// Port used when neither the config nor `PORT` provides one
pub const DEFAULT_PORT: u16 = 3000;

/// Seconds to wait for open connections after a shutdown signal
pub const DEFAULT_SHUTDOWN_GRACE_SECS: u32 = 5;

impl Config {
    /// Load configuration from the given file path (without extension),
    /// honouring the process's `PORT` variable
    pub fn load_from(config_path: &str) -> std::result::Result<Self, config::ConfigError> {
        Self::load_with_port(config_path, std::env::var("PORT").ok())
    }

    /// Load configuration with an explicit `PORT` value
    ///
    /// Sources, lowest precedence first: defaults, config file,
    /// `NOSNIFF_*` environment variables, then `port`.
    pub fn load_with_port(
        config_path: &str,
        port: Option<String>,
    ) -> std::result::Result<Self, config::ConfigError> {
        let port = port.filter(|p| !p.trim().is_empty());

        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(
                config::Environment::with_prefix("NOSNIFF")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", i64::from(DEFAULT_PORT))?
            .set_default("logging.level", "info")?
            .set_default("logging.access_log", false)?
            .set_default("http.strict_paths", true)?
            .set_default("http.expose_error_details", false)?
            .set_default("performance.keep_alive", true)?
            .set_default(
                "performance.shutdown_grace",
                i64::from(DEFAULT_SHUTDOWN_GRACE_SECS),
            )?
            .set_override_option("server.port", port)?
            .build()?;

        settings.try_deserialize()
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| Error::Address(format!("{}:{}: {e}", self.server.host, self.server.port)))
    }

    /// Directory that request paths are resolved against
    pub fn resolve_root(&self) -> Result<PathBuf> {
        if let Some(root) = &self.server.root {
            return Ok(PathBuf::from(root));
        }

        let exe = std::env::current_exe()?;
        exe.parent().map(Path::to_path_buf).ok_or_else(|| {
            Error::Root(format!(
                "executable '{}' has no parent directory",
                exe.display()
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NO_FILE: &str = "does-not-exist/nosniff-test";

    #[test]
    fn test_defaults() {
        let cfg = Config::load_with_port(NO_FILE, None).unwrap();
        assert_eq!(cfg.server.port, DEFAULT_PORT);
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert!(cfg.server.root.is_none());
        assert!(cfg.http.strict_paths);
        assert!(!cfg.http.expose_error_details);
        assert!(!cfg.logging.access_log);
        assert!(cfg.performance.connection_timeout.is_none());
        assert_eq!(
            cfg.performance.shutdown_grace,
            u64::from(DEFAULT_SHUTDOWN_GRACE_SECS)
        );
    }

    #[test]
    fn test_env_source() {
        // Only this test reads logging.level, so setting it cannot race others
        std::env::set_var("NOSNIFF_LOGGING__LEVEL", "nosniff_static=trace");
        let cfg = Config::load_with_port(NO_FILE, None);
        std::env::remove_var("NOSNIFF_LOGGING__LEVEL");

        assert_eq!(cfg.unwrap().logging.level, "nosniff_static=trace");
    }

    #[test]
    fn test_port_override() {
        let cfg = Config::load_with_port(NO_FILE, Some("8080".to_string())).unwrap();
        assert_eq!(cfg.server.port, 8080);
        assert_eq!(cfg.socket_addr().unwrap().port(), 8080);
    }

    #[test]
    fn test_empty_port_uses_default() {
        let cfg = Config::load_with_port(NO_FILE, Some(String::new())).unwrap();
        assert_eq!(cfg.server.port, DEFAULT_PORT);
    }

    #[test]
    fn test_invalid_port_is_error() {
        assert!(Config::load_with_port(NO_FILE, Some("not-a-port".to_string())).is_err());
    }

    #[test]
    fn test_file_source() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("server.toml");
        std::fs::write(
            &file,
            "[server]\nport = 9000\nroot = \"/srv/www\"\n\n[http]\nexpose_error_details = true\n",
        )
        .unwrap();
        let stem = dir.path().join("server");

        let cfg = Config::load_with_port(stem.to_str().unwrap(), None).unwrap();
        assert_eq!(cfg.server.port, 9000);
        assert!(cfg.http.expose_error_details);
        assert_eq!(cfg.resolve_root().unwrap(), PathBuf::from("/srv/www"));

        // PORT beats the file
        let cfg = Config::load_with_port(stem.to_str().unwrap(), Some("8081".into())).unwrap();
        assert_eq!(cfg.server.port, 8081);
    }

    #[test]
    fn test_root_defaults_to_executable_dir() {
        let cfg = Config::load_with_port(NO_FILE, None).unwrap();
        let exe = std::env::current_exe().unwrap();
        assert_eq!(cfg.resolve_root().unwrap(), exe.parent().unwrap());
    }

    #[test]
    fn test_invalid_host() {
        let mut cfg = Config::load_with_port(NO_FILE, None).unwrap();
        cfg.server.host = "not a host".to_string();
        assert!(matches!(cfg.socket_addr(), Err(Error::Address(_))));
    }
}
