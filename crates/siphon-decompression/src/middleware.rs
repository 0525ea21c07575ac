//! Request decompression middleware implementation

use crate::config::DecompressionConfig;
use crate::decoder::GzipDecoder;
use async_trait::async_trait;
use bytes::Bytes;
use http::{HeaderValue, Request, Response};
use http_body_util::BodyExt;
use siphon_core::middleware::{Body, Middleware, Next};
use siphon_core::{Error, Result};
use std::sync::Arc;
use tracing::{debug, warn};

/// Pipeline stage that inflates gzip-encoded request bodies.
///
/// Requests without a `gzip` content-coding pass through untouched. For
/// gzip-encoded requests the body is fully inflated before the rest of the
/// chain runs, `Content-Encoding` is rewritten to `identity`, and
/// `Content-Length` to the inflated byte count. Every other header is
/// forwarded exactly as received. A body that claims gzip but does not
/// decode fails the request; downstream stages never observe it.
#[derive(Debug)]
pub struct RequestDecompression {
    config: Arc<DecompressionConfig>,
}

impl RequestDecompression {
    /// Create the stage with default configuration
    pub fn new() -> Self {
        Self::with_config(DecompressionConfig::default())
    }

    /// Create the stage with custom configuration
    pub fn with_config(config: DecompressionConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}

impl Default for RequestDecompression {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Middleware for RequestDecompression {
    async fn call(&self, req: Request<Body>, next: Next) -> Result<Response<Body>> {
        if !self.config.enabled || !GzipDecoder::is_gzip_encoded(req.headers()) {
            return next.run(req).await;
        }

        let (mut parts, body) = req.into_parts();

        // Consume the original body to completion; it is gone after this.
        let compressed = body
            .collect()
            .await
            .map_err(|e| Error::Internal(format!("Failed to read body: {}", e)))?
            .to_bytes();

        let decoded = match GzipDecoder::decode(&compressed, self.config.max_decompressed_size) {
            Ok(decoded) => decoded,
            Err(e) => {
                warn!(error = %e, "Failed to decompress request body");
                return Err(e);
            }
        };

        debug!(
            compressed_size = compressed.len(),
            decompressed_size = decoded.len(),
            "Request body decompressed"
        );

        // The body is no longer encoded; make the transport metadata agree.
        parts
            .headers
            .insert(http::header::CONTENT_ENCODING, HeaderValue::from_static("identity"));
        parts.headers.insert(
            http::header::CONTENT_LENGTH,
            HeaderValue::from_str(&decoded.len().to_string())
                .map_err(|e| Error::Internal(format!("Invalid content length: {}", e)))?,
        );

        let req = Request::from_parts(parts, Body::from(Bytes::from(decoded)));
        next.run(req).await
    }
}
