//! Request handler module
//!
//! Dispatches every request to the static file responder.

pub mod router;
pub mod static_files;

// Re-export main entry point
pub use router::handle_request;
