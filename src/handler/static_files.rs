//! Static file serving module
//!
//! Resolves a request path against the server root, reads the file and
//! builds the 200 or 404 response.

use std::path::{Component, Path, PathBuf};

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use tokio::fs;

use crate::config::AppState;
use crate::error::FileError;
use crate::http::{self, mime, mime::MimeLookup};
use crate::logger;

/// Filesystem location and inferred type derived from one request path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTarget {
    pub filesystem_path: PathBuf,
    pub mime_type: Option<String>,
}

/// `/` and `/home` both mean `/index.html`
pub fn apply_alias(url_path: &str) -> &str {
    match url_path {
        "/" | "/home" => "/index.html",
        other => other,
    }
}

/// Derive the target for `url_path`
///
/// The aliased path is appended to `root` as-is; no normalization happens
/// here.
pub fn resolve_target(url_path: &str, root: &Path, table: &dyn MimeLookup) -> ResolvedTarget {
    let path = apply_alias(url_path);
    ResolvedTarget {
        filesystem_path: root.join(path.trim_start_matches('/')),
        mime_type: mime::content_type_for(path, table),
    }
}

/// True when the aliased path only descends below the root
pub fn is_contained(url_path: &str) -> bool {
    Path::new(apply_alias(url_path).trim_start_matches('/'))
        .components()
        .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
}

/// Read the whole target file
pub async fn read_target(target: &ResolvedTarget) -> Result<Bytes, FileError> {
    fs::read(&target.filesystem_path)
        .await
        .map(Bytes::from)
        .map_err(|e| FileError::from_io(&e, &target.filesystem_path))
}

/// Answer one request path
pub async fn serve(url_path: &str, state: &AppState) -> Response<Full<Bytes>> {
    let target = resolve_target(url_path, &state.root, state.mime.as_ref());

    let result = if state.config.http.strict_paths && !is_contained(url_path) {
        Err(FileError::rejected(url_path, &target.filesystem_path))
    } else {
        read_target(&target).await
    };

    match result {
        Ok(data) => http::build_file_response(data, target.mime_type.as_deref()),
        Err(err) => {
            logger::log_file_error(&err);
            let detail = state
                .config
                .http
                .expose_error_details
                .then_some(err.message.as_str());
            http::build_404_response(detail)
        }
    }
}
