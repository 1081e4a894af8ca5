//! Request dispatch module
//!
//! Entry point for HTTP request processing. Every method is accepted and only
//! the URI path is inspected.

use std::convert::Infallible;
use std::sync::Arc;
use std::time::Instant;

use http_body_util::Full;
use hyper::body::{Body as _, Bytes};
use hyper::http::uri::PathAndQuery;
use hyper::{Request, Response, Uri};

use crate::config::AppState;
use crate::handler::static_files;
use crate::logger::{self, AccessLogEntry};

/// Main entry point for HTTP request handling
pub async fn handle_request<B>(
    req: Request<B>,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let started = Instant::now();
    // The body is never read
    let (parts, _) = req.into_parts();
    let path = parts.uri.path();

    let response = static_files::serve(path, &state).await;

    if state.config.logging.access_log {
        let entry = AccessLogEntry::new(parts.method.as_str(), request_target(&parts.uri))
            .with_status(response.status().as_u16())
            .with_body_bytes(response.body().size_hint().exact())
            .with_elapsed(started.elapsed());
        logger::log_access(&entry);
    }

    Ok(response)
}

/// Path plus query, as logged in the access line
fn request_target(uri: &Uri) -> &str {
    uri.path_and_query().map_or_else(|| uri.path(), PathAndQuery::as_str)
}
