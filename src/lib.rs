//! A minimal static file server.
//!
//! Request paths are resolved against a server root; `/` and `/home` map to
//! `/index.html`. Files are answered with `200` and
//! `X-Content-Type-Options: nosniff`, anything unreadable with `404`.

pub mod config;
pub mod error;
pub mod handler;
pub mod http;
pub mod logger;
pub mod server;

pub use error::{Error, Result};
