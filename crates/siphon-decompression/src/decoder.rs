//! Core gzip decoding functionality

use http::header::CONTENT_ENCODING;
use http::HeaderMap;
use siphon_core::{Error, Result};
use std::io::Read;

/// Decoder for gzip-encoded request bodies
#[derive(Debug)]
pub struct GzipDecoder;

impl GzipDecoder {
    /// Check whether the headers declare a gzip-encoded body.
    ///
    /// Matching is token-exact and case-insensitive across every
    /// `Content-Encoding` value: `gzip`, `GZIP`, and `gzip, identity` all
    /// match, while `supergzip` does not. Values that are not valid UTF-8
    /// are treated as not gzip.
    pub fn is_gzip_encoded(headers: &HeaderMap) -> bool {
        headers
            .get_all(CONTENT_ENCODING)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .flat_map(|value| value.split(','))
            .any(|token| token.trim().eq_ignore_ascii_case("gzip"))
    }

    /// Inflate a complete gzip payload into memory.
    ///
    /// An empty payload decodes to an empty result. Corrupt or truncated
    /// gzip data, or a decoded payload larger than `max_size`, fails with
    /// [`Error::Decompression`].
    pub fn decode(data: &[u8], max_size: usize) -> Result<Vec<u8>> {
        if data.is_empty() {
            return Ok(Vec::new());
        }

        let decoder = flate2::read::GzDecoder::new(data);
        let mut decoded = Vec::new();

        // Read one byte past the cap so an oversized payload is detectable
        // without inflating it fully.
        let limit = (max_size as u64).saturating_add(1);
        decoder
            .take(limit)
            .read_to_end(&mut decoded)
            .map_err(|e| Error::Decompression(format!("invalid gzip body: {e}")))?;

        if decoded.len() > max_size {
            return Err(Error::Decompression(format!(
                "decompressed body exceeds {max_size} bytes"
            )));
        }

        Ok(decoded)
    }
}
