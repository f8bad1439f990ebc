use serde::{Deserialize, Serialize};

use crate::{
    domain::{ComponentType, GeneratedArtifact},
    error::ApiError,
};

/// Body of `POST /api/generate-ui`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateUiRequest {
    pub prompt: String,
    pub component_type: ComponentType,
}

impl GenerateUiRequest {
    pub fn new(prompt: impl Into<String>, component_type: ComponentType) -> Self {
        Self {
            prompt: prompt.into(),
            component_type,
        }
    }
}

/// Code fragments as they appear on the wire. Any of them may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedCode {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub css: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub js: Option<String>,
}

impl From<GeneratedCode> for GeneratedArtifact {
    fn from(value: GeneratedCode) -> Self {
        Self {
            markup: value.html.unwrap_or_default(),
            style: value.css.unwrap_or_default(),
            script: value.js.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateUiResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<GeneratedCode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl GenerateUiResponse {
    /// Splits the payload into an artifact or the failure it reports.
    ///
    /// A successful payload without `code` yields an empty artifact.
    pub fn into_result(self) -> Result<GeneratedArtifact, ApiError> {
        if self.success {
            Ok(self.code.unwrap_or_default().into())
        } else {
            Err(ApiError::from_reported(self.error))
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub groq_api_configured: bool,
}

impl HealthResponse {
    pub fn is_healthy(&self) -> bool {
        self.status.eq_ignore_ascii_case("healthy")
    }
}
