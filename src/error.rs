use thiserror::Error;

/// Message shown when a capture fails and the backend supplied no detail.
pub const CAPTURE_FALLBACK_MESSAGE: &str = "Failed to capture order";

#[derive(Error, Debug)]
pub enum StorefrontError {
    /// Network failure or non-success status on a call whose failures carry no detail.
    #[error("Transport error: {0}")]
    Transport(String),
    /// Business-level capture failure (declined, expired, already captured, ...).
    #[error("{0}")]
    Capture(String),
    /// Return URL carried no resume token; nothing was sent to the backend.
    #[error("Missing PayPal order token in URL")]
    MissingToken,
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),
}

impl From<reqwest::Error> for StorefrontError {
    fn from(err: reqwest::Error) -> Self {
        StorefrontError::Transport(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, StorefrontError>;
