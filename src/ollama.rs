// Client for the local Ollama server.
// Handlers only see the ModelBackend trait. OllamaClient is the
// reqwest implementation used by the binary.

use async_trait::async_trait;
use std::time::Duration;
use crate::error::UpstreamError;
use crate::models::{
    GenerateOptions, GenerateRequest, GenerateResponse, HealthReport, TagsResponse,
    VersionResponse,
};

// Models that are listed first when installed, in this order
pub const RECOMMENDED_MODELS: [&str; 4] = [
    "llama3:8b",
    "phi3:mini",
    "mistral:7b-instruct-v0.2",
    "gemma:7b-instruct",
];

// Put installed recommended models first, then everything else in the order
// the server returned it.
pub fn order_models(names: Vec<String>) -> Vec<String> {
    let mut ordered: Vec<String> = RECOMMENDED_MODELS
        .iter()
        .filter(|rec| names.iter().any(|n| n == *rec))
        .map(|rec| rec.to_string())
        .collect();
    ordered.extend(
        names
            .into_iter()
            .filter(|n| !RECOMMENDED_MODELS.contains(&n.as_str())),
    );
    ordered
}

#[async_trait]
pub trait ModelBackend: Send + Sync {
    // Single non-streaming completion, returns the `response` text
    async fn generate(
        &self,
        model: &str,
        prompt: &str,
        options: GenerateOptions,
    ) -> Result<String, UpstreamError>;

    // Installed model names as the server reports them
    async fn model_names(&self) -> Result<Vec<String>, UpstreamError>;

    async fn version(&self) -> Result<String, UpstreamError>;

    async fn list_models(&self) -> Result<Vec<String>, UpstreamError> {
        Ok(order_models(self.model_names().await?))
    }

    // Never fails, any error becomes an unhealthy report
    async fn health(&self) -> HealthReport {
        match self.version().await {
            Ok(version) => HealthReport::available(version),
            Err(e) => {
                tracing::warn!(error = %e, "Ollama health check failed");
                HealthReport::unavailable()
            }
        }
    }
}

// Per-endpoint request timeouts
#[derive(Debug, Clone, Copy)]
pub struct Timeouts {
    pub generate: Duration,
    pub list: Duration,
    pub health: Duration,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self {
            generate: Duration::from_secs(10),
            list: Duration::from_secs(5),
            health: Duration::from_secs(2),
        }
    }
}

pub struct OllamaClient {
    client: reqwest::Client,
    base_url: String,
    timeouts: Timeouts,
}

impl OllamaClient {
    pub fn new(client: reqwest::Client, base_url: String) -> Self {
        Self {
            client,
            base_url,
            timeouts: Timeouts::default(),
        }
    }

    pub fn with_timeouts(mut self, timeouts: Timeouts) -> Self {
        self.timeouts = timeouts;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // Turns transport errors and non-2xx statuses into UpstreamError
    async fn checked(
        &self,
        request: reqwest::RequestBuilder,
        endpoint: &str,
    ) -> Result<reqwest::Response, UpstreamError> {
        let res = request.send().await.map_err(|e| {
            tracing::error!(endpoint, error = %e, "Error calling Ollama");
            UpstreamError::Unreachable(e.to_string())
        })?;

        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            tracing::error!(endpoint, status = status.as_u16(), body = %body, "Ollama API error");
            return Err(UpstreamError::BadStatus {
                status: status.as_u16(),
                body,
            });
        }
        Ok(res)
    }
}

#[async_trait]
impl ModelBackend for OllamaClient {
    async fn generate(
        &self,
        model: &str,
        prompt: &str,
        options: GenerateOptions,
    ) -> Result<String, UpstreamError> {
        let body = GenerateRequest {
            model: model.to_string(),
            prompt: prompt.to_string(),
            stream: false,
            options,
        };
        let request = self
            .client
            .post(format!("{}/api/generate", self.base_url))
            .timeout(self.timeouts.generate)
            .json(&body);

        let res = self.checked(request, "/api/generate").await?;
        let parsed = res
            .json::<GenerateResponse>()
            .await
            .map_err(|e| UpstreamError::InvalidBody(e.to_string()))?;
        Ok(parsed.response)
    }

    async fn model_names(&self) -> Result<Vec<String>, UpstreamError> {
        let request = self
            .client
            .get(format!("{}/api/tags", self.base_url))
            .timeout(self.timeouts.list);

        let res = self.checked(request, "/api/tags").await?;
        let tags = res
            .json::<TagsResponse>()
            .await
            .map_err(|e| UpstreamError::InvalidBody(e.to_string()))?;
        Ok(tags.models.into_iter().map(|m| m.name).collect())
    }

    async fn version(&self) -> Result<String, UpstreamError> {
        let request = self
            .client
            .get(format!("{}/api/version", self.base_url))
            .timeout(self.timeouts.health);

        let res = self.checked(request, "/api/version").await?;
        let version = res
            .json::<VersionResponse>()
            .await
            .map_err(|e| UpstreamError::InvalidBody(e.to_string()))?;
        Ok(version.version)
    }
}
