//! HTTP protocol layer module
//!
//! MIME lookup and response builders, decoupled from file resolution.

pub mod mime;
pub mod response;

// Re-export commonly used items
pub use response::{build_404_response, build_file_response, NOT_FOUND_BODY};
