//! Error types
//!
//! `Error` covers startup failures (config, bind, root resolution).
//! `FileError` is the per-request read failure; it never escapes the request
//! handler and is always turned into a 404 response.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type for startup operations
pub type Result<T> = std::result::Result<T, Error>;

/// Startup error
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration could not be loaded or deserialized
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Socket or runtime I/O failure
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Host/port pair does not form a socket address
    #[error("Invalid address: {0}")]
    Address(String),

    /// Server root could not be determined
    #[error("Server root error: {0}")]
    Root(String),
}

/// Classification of a failed file read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileErrorKind {
    NotFound,
    PermissionDenied,
    Other,
}

impl From<io::ErrorKind> for FileErrorKind {
    fn from(kind: io::ErrorKind) -> Self {
        match kind {
            io::ErrorKind::NotFound => Self::NotFound,
            io::ErrorKind::PermissionDenied => Self::PermissionDenied,
            _ => Self::Other,
        }
    }
}

/// A failed attempt to read a resolved target
#[derive(Error, Debug)]
#[error("{message}")]
pub struct FileError {
    pub kind: FileErrorKind,
    pub path: PathBuf,
    /// Diagnostic text, e.g. `No such file or directory (os error 2), open '/srv/x'`
    pub message: String,
}

impl FileError {
    pub fn from_io(err: &io::Error, path: &Path) -> Self {
        Self {
            kind: err.kind().into(),
            path: path.to_path_buf(),
            message: format!("{err}, open '{}'", path.display()),
        }
    }

    /// Request path escapes the server root
    pub fn rejected(url_path: &str, path: &Path) -> Self {
        Self {
            kind: FileErrorKind::PermissionDenied,
            path: path.to_path_buf(),
            message: format!("path '{url_path}' escapes server root"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_mapping() {
        assert_eq!(
            FileErrorKind::from(io::ErrorKind::NotFound),
            FileErrorKind::NotFound
        );
        assert_eq!(
            FileErrorKind::from(io::ErrorKind::PermissionDenied),
            FileErrorKind::PermissionDenied
        );
        assert_eq!(
            FileErrorKind::from(io::ErrorKind::InvalidData),
            FileErrorKind::Other
        );
    }

    #[test]
    fn test_message_names_path() {
        let io_err = io::Error::from(io::ErrorKind::NotFound);
        let err = FileError::from_io(&io_err, Path::new("/srv/missing.txt"));
        assert_eq!(err.kind, FileErrorKind::NotFound);
        assert!(err.message.ends_with(", open '/srv/missing.txt'"));
        assert_eq!(err.to_string(), err.message);
    }
}
