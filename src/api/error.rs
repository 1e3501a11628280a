use thiserror::Error;

/// Failures of a single indexer API read.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid API base URL {url}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// The request could not be sent or no complete response came back.
    #[error("request to {path} failed: {source}")]
    Transport {
        path: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{path} answered with HTTP {status}")]
    Status { path: String, status: u16 },

    /// The body is not JSON, or not the JSON shape this client consumes.
    #[error("could not decode response from {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// The payload parsed but carries no entity (e.g. `"block": null`).
    #[error("{what} not found")]
    NotFound { what: String },
}

impl ApiError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
