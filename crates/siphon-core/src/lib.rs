//! # Siphon Core
//!
//! Core types, traits, and error handling for the Siphon request pipeline.
//!
//! This crate provides the foundational abstractions used by every stage:
//! - The [`Middleware`] trait and [`Next`] continuation
//! - Explicit pipeline composition via [`Pipeline`]
//! - Error types

#![forbid(unsafe_code)]
#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]

pub mod error;
pub mod middleware;

pub use error::{Error, Result};
pub use middleware::{Body, Middleware, Next, Pipeline};

// Re-export commonly used HTTP types
pub use bytes::Bytes;
pub use http::{Method, Request, Response, StatusCode};
