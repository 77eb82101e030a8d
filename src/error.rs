//! Error types for ytlens.

use thiserror::Error;

/// Library-level error type for ytlens operations.
#[derive(Error, Debug)]
pub enum YtLensError {
    #[error("Configuration error: {0}")]
    Config(String),

    /// Upstream API rejected the request. Carries the HTTP status and the raw
    /// response body so the error classifier can build its message.
    #[error("YouTube API error {status}: {body}")]
    Api { status: u16, body: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl YtLensError {
    /// HTTP status of the upstream failure, if this is an API error.
    pub fn status(&self) -> Option<u16> {
        match self {
            YtLensError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result type alias for ytlens operations.
pub type Result<T> = std::result::Result<T, YtLensError>;
