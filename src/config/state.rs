// Application state module
// Immutable state shared by every request handler

use std::path::PathBuf;
use std::sync::Arc;

use super::types::Config;
use crate::http::mime::{GuessTable, MimeLookup};

/// State built once at startup and handed to handlers by reference
pub struct AppState {
    pub config: Config,
    /// Server root that request paths are joined onto
    pub root: PathBuf,
    pub mime: Arc<dyn MimeLookup>,
}

impl AppState {
    /// Create state backed by the default `mime_guess` table
    pub fn new(config: Config, root: PathBuf) -> Self {
        Self::with_mime(config, root, Arc::new(GuessTable))
    }

    pub fn with_mime(config: Config, root: PathBuf, mime: Arc<dyn MimeLookup>) -> Self {
        Self { config, root, mime }
    }
}
