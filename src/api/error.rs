//! Fetch failure classification.

use thiserror::Error;

/// A failed GET against the explorer API.
///
/// Every variant is treated the same way by operations: logged and dropped.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Connection refused, DNS failure, timeout, or a broken body stream.
    #[error("Request to '{path}' failed: {source}")]
    Transport {
        path: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-2xx status.
    #[error("Request to '{path}' returned HTTP {status}")]
    Status { path: String, status: u16 },

    /// The body was not valid JSON.
    #[error("Failed to decode response from '{path}': {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

impl FetchError {
    /// Short classification for log fields.
    pub fn error_type(&self) -> &'static str {
        match self {
            FetchError::Transport { .. } => "transport_error",
            FetchError::Status { .. } => "status_error",
            FetchError::Decode { .. } => "decode_error",
        }
    }
}
