//! Configuration for the request decompression stage

use serde::{Deserialize, Serialize};

/// Request decompression configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecompressionConfig {
    /// Enable decompression
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Maximum decompressed body size in bytes
    /// Default: 64MB
    #[serde(default = "default_max_decompressed_size")]
    pub max_decompressed_size: usize,
}

fn default_enabled() -> bool {
    true
}

fn default_max_decompressed_size() -> usize {
    64 * 1024 * 1024 // 64MB
}

impl Default for DecompressionConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            max_decompressed_size: default_max_decompressed_size(),
        }
    }
}
