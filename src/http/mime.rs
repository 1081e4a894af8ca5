//! MIME type detection module
//!
//! Maps a request path's extension to a Content-Type. A miss is not an
//! error: the response is sent without a Content-Type header.

/// Extension to MIME type capability
pub trait MimeLookup: Send + Sync {
    /// Look up the MIME type for `path` by its extension
    fn lookup(&self, path: &str) -> Option<String>;
}

/// Default table backed by `mime_guess`
#[derive(Debug, Clone, Copy, Default)]
pub struct GuessTable;

impl MimeLookup for GuessTable {
    fn lookup(&self, path: &str) -> Option<String> {
        mime_guess::from_path(path)
            .first_raw()
            .map(ToString::to_string)
    }
}

/// Content-Type for an (already aliased) request path
///
/// # Examples
/// ```
/// use nosniff_static::http::mime::{content_type_for, GuessTable};
/// assert_eq!(content_type_for("/index.html", &GuessTable).as_deref(), Some("text/html"));
/// assert_eq!(content_type_for("/README", &GuessTable), None);
/// ```
pub fn content_type_for(url_path: &str, table: &dyn MimeLookup) -> Option<String> {
    let name = url_path.strip_prefix('/').unwrap_or(url_path);
    if name.is_empty() {
        return None;
    }
    table.lookup(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_types() {
        assert_eq!(content_type_for("/index.html", &GuessTable).as_deref(), Some("text/html"));
        assert_eq!(content_type_for("/style.css", &GuessTable).as_deref(), Some("text/css"));
        assert_eq!(content_type_for("/logo.png", &GuessTable).as_deref(), Some("image/png"));
        assert_eq!(
            content_type_for("/data/app.json", &GuessTable).as_deref(),
            Some("application/json")
        );
    }

    #[test]
    fn test_unknown_extension() {
        assert_eq!(content_type_for("/archive.unknownext", &GuessTable), None);
        assert_eq!(content_type_for("/Makefile", &GuessTable), None);
        assert_eq!(content_type_for("/", &GuessTable), None);
        assert_eq!(content_type_for("", &GuessTable), None);
    }

    #[test]
    fn test_custom_table() {
        struct OnlyMarkdown;
        impl MimeLookup for OnlyMarkdown {
            fn lookup(&self, path: &str) -> Option<String> {
                path.ends_with(".md").then(|| "text/markdown".to_string())
            }
        }

        assert_eq!(
            content_type_for("/notes.md", &OnlyMarkdown).as_deref(),
            Some("text/markdown")
        );
        assert_eq!(content_type_for("/index.html", &OnlyMarkdown), None);
    }
}
