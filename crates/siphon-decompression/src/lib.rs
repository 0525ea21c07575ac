//! Request decompression stage for the Siphon pipeline
//!
//! Transparently inflates gzip-encoded request bodies before they reach
//! downstream stages:
//! - Token-exact, case-insensitive `Content-Encoding` detection
//! - Full in-memory inflation with a configurable size cap
//! - `Content-Encoding`/`Content-Length` rewritten to match the new body
//! - All unrelated headers passed through untouched
//! - Malformed gzip surfaces as an error instead of a corrupt body

#![forbid(unsafe_code)]
#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]

pub mod config;
pub mod decoder;
pub mod middleware;

pub use config::DecompressionConfig;
pub use decoder::GzipDecoder;
pub use middleware::RequestDecompression;
