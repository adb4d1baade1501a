// Ollama client - local model fallback for running without a hosted API key

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::llm::{non_empty, transport_error, LlmClient, LlmError};

#[derive(Debug, Clone)]
pub struct OllamaClient {
    client: Client,
    base_url: String,
    model: String,
    timeout: Duration,
}

#[derive(Serialize)]
struct OllamaRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

#[derive(Deserialize)]
struct OllamaResponse {
    response: String,
}

impl OllamaClient {
    pub fn new(base_url: impl Into<String>, model: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            model: model.into(),
            timeout,
        }
    }

    async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        let url = format!("{}/api/generate", self.base_url);

        let request = OllamaRequest {
            model: &self.model,
            prompt,
            stream: false,
        };

        let response = self
            .client
            .post(&url)
            .timeout(self.timeout)
            .json(&request)
            .send()
            .await
            .map_err(transport_error)?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(LlmError::ApiError(error_text));
        }

        let result: OllamaResponse = response.json().await.map_err(transport_error)?;
        non_empty(result.response)
    }
}

#[async_trait]
impl LlmClient for OllamaClient {
    async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        self.generate(prompt).await
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn provider(&self) -> &str {
        "ollama"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = OllamaClient::new("http://localhost:11434", "qwen3:8b", Duration::from_secs(20));
        assert_eq!(client.model(), "qwen3:8b");
        assert_eq!(client.provider(), "ollama");
    }
}
