use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use shared::{
    domain::GeneratedArtifact,
    protocol::{GenerateUiRequest, GenerateUiResponse, HealthResponse},
};
use tracing::{info, warn};
use url::Url;

use crate::{config::ClientSettings, error::ClientError};

/// Remote collaborator that turns a prompt into code fragments.
#[async_trait]
pub trait GenerationBackend: Send + Sync {
    async fn generate(&self, request: &GenerateUiRequest)
        -> Result<GeneratedArtifact, ClientError>;
    async fn health(&self) -> Result<HealthResponse, ClientError>;
}

pub struct GenerationClient {
    http: Client,
    generate_url: Url,
    health_url: Url,
}

impl GenerationClient {
    pub fn new(settings: &ClientSettings) -> Result<Self, ClientError> {
        let mut builder = Client::builder();
        if let Some(secs) = settings.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        Ok(Self {
            http: builder.build()?,
            generate_url: settings.endpoint(&settings.generate_path)?,
            health_url: settings.endpoint(&settings.health_path)?,
        })
    }

    pub fn generate_url(&self) -> &Url {
        &self.generate_url
    }
}

#[async_trait]
impl GenerationBackend for GenerationClient {
    async fn generate(
        &self,
        request: &GenerateUiRequest,
    ) -> Result<GeneratedArtifact, ClientError> {
        info!(
            url = %self.generate_url,
            component_type = %request.component_type,
            prompt_len = request.prompt.len(),
            "requesting ui generation"
        );
        let res = self
            .http
            .post(self.generate_url.clone())
            .json(request)
            .send()
            .await?;

        // Failures arrive as JSON bodies with non-2xx statuses, so the body is
        // decoded regardless of status.
        let status = res.status();
        let body = res.bytes().await?;
        let payload: GenerateUiResponse = serde_json::from_slice(&body).map_err(|source| {
            ClientError::Decode {
                status: status.as_u16(),
                source,
            }
        })?;

        match payload.into_result() {
            Ok(artifact) => {
                info!(
                    status = status.as_u16(),
                    markup_len = artifact.markup.len(),
                    style_len = artifact.style.len(),
                    script_len = artifact.script.len(),
                    "ui generation succeeded"
                );
                Ok(artifact)
            }
            Err(err) => {
                warn!(status = status.as_u16(), error = %err, "ui generation reported failure");
                Err(err.into())
            }
        }
    }

    async fn health(&self) -> Result<HealthResponse, ClientError> {
        let res = self
            .http
            .get(self.health_url.clone())
            .send()
            .await?
            .error_for_status()?;
        Ok(res.json().await?)
    }
}

#[cfg(test)]
#[path = "tests/client_tests.rs"]
mod tests;
