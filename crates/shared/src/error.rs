use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_GENERATION_FAILURE: &str = "Failed to generate UI";

/// Failure reported in-band by the generation endpoint (`success: false`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("{message}")]
pub struct ApiError {
    pub message: String,
}

impl ApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn from_reported(message: Option<String>) -> Self {
        match message {
            Some(message) if !message.trim().is_empty() => Self::new(message),
            _ => Self::new(DEFAULT_GENERATION_FAILURE),
        }
    }
}
