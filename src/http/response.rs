//! HTTP response building module
//!
//! Builders for the two outcomes a request can have: the file (200) or
//! not found (404).

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::header::{CONTENT_TYPE, X_CONTENT_TYPE_OPTIONS};
use hyper::{Response, StatusCode};

/// Prefix of every 404 body
pub const NOT_FOUND_BODY: &str = "ERROR: 404 - File Not Found!";

/// Build 200 response carrying the file bytes
///
/// `Content-Type` is only set when a type was inferred.
pub fn build_file_response(data: Bytes, content_type: Option<&str>) -> Response<Full<Bytes>> {
    let mut builder = Response::builder()
        .status(StatusCode::OK)
        .header(X_CONTENT_TYPE_OPTIONS, "nosniff");

    if let Some(content_type) = content_type {
        builder = builder.header(CONTENT_TYPE, content_type);
    }

    builder.body(Full::new(data)).unwrap_or_else(|e| {
        log_build_error("200", &e);
        Response::new(Full::new(Bytes::new()))
    })
}

/// Build 404 Not Found response, optionally followed by a diagnostic
pub fn build_404_response(detail: Option<&str>) -> Response<Full<Bytes>> {
    let body = match detail {
        Some(detail) => format!("{NOT_FOUND_BODY}{detail}"),
        None => NOT_FOUND_BODY.to_string(),
    };

    Response::builder()
        .status(StatusCode::NOT_FOUND)
        .header(CONTENT_TYPE, "text/plain; charset=utf-8")
        .body(Full::new(Bytes::from(body)))
        .unwrap_or_else(|e| {
            log_build_error("404", &e);
            let mut resp = Response::new(Full::new(Bytes::from(NOT_FOUND_BODY)));
            *resp.status_mut() = StatusCode::NOT_FOUND;
            resp
        })
}

/// Log response build error
fn log_build_error(status: &str, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_of(resp: Response<Full<Bytes>>) -> Bytes {
        resp.into_body().collect().await.unwrap().to_bytes()
    }

    #[tokio::test]
    async fn test_file_response_headers() {
        let resp = build_file_response(Bytes::from_static(b"<h1>Hi</h1>"), Some("text/html"));
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers()[X_CONTENT_TYPE_OPTIONS], "nosniff");
        assert_eq!(resp.headers()[CONTENT_TYPE], "text/html");
        assert_eq!(body_of(resp).await, "<h1>Hi</h1>");
    }

    #[test]
    fn test_file_response_without_type() {
        let resp = build_file_response(Bytes::from_static(b"raw"), None);
        assert_eq!(resp.status(), StatusCode::OK);
        assert!(resp.headers().get(CONTENT_TYPE).is_none());
        assert_eq!(resp.headers()[X_CONTENT_TYPE_OPTIONS], "nosniff");
    }

    #[tokio::test]
    async fn test_404_body() {
        let resp = build_404_response(None);
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_of(resp).await, NOT_FOUND_BODY);

        let resp = build_404_response(Some("gone"));
        assert_eq!(body_of(resp).await, "ERROR: 404 - File Not Found!gone");
    }
}
