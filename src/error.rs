//! Error types for the datatops client

use thiserror::Error;

/// Main error type for the datatops client library
#[derive(Error, Debug)]
pub enum Error {
    /// Record serialization error, raised before any network activity
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Network-level failure (DNS, connect, TLS, malformed URL),
    /// forwarded from the transport untouched
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Client construction error
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type alias for the datatops client
pub type Result<T> = std::result::Result<T, Error>;
