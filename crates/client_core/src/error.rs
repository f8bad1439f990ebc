use shared::error::ApiError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("malformed response (HTTP {status}): {source}")]
    Decode {
        status: u16,
        #[source]
        source: serde_json::Error,
    },
    #[error("{0}")]
    Remote(#[from] ApiError),
    #[error("invalid endpoint URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("clipboard unavailable: {0}")]
    Clipboard(String),
    #[error("invalid configuration: {0}")]
    Config(String),
    #[error("backend unavailable: {0}")]
    Unavailable(String),
}

impl ClientError {
    /// True when the endpoint answered but reported the failure itself.
    pub fn is_remote(&self) -> bool {
        matches!(self, ClientError::Remote(_))
    }
}
