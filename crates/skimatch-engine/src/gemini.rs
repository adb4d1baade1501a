// Google Generative Language API client

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::llm::{non_empty, transport_error, LlmClient, LlmError};

#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    model: String,
    timeout: Duration,
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Serialize)]
struct GenerationConfig {
    temperature: f32,
    #[serde(rename = "maxOutputTokens")]
    max_output_tokens: u32,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

impl GeminiClient {
    const BASE_URL: &'static str = "https://generativelanguage.googleapis.com/v1beta/models";

    pub fn new(api_key: impl Into<String>, model: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            model: model.into(),
            timeout,
        }
    }

    /// Create from env GEMINI_API_KEY
    pub fn from_env(model: impl Into<String>, timeout: Duration) -> Result<Self, LlmError> {
        let api_key = std::env::var("GEMINI_API_KEY").map_err(|_| LlmError::MissingApiKey)?;
        Ok(Self::new(api_key, model, timeout))
    }

    async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        let url = format!("{}/{}:generateContent", Self::BASE_URL, self.model);

        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
            generation_config: GenerationConfig {
                temperature: 0.7,
                max_output_tokens: 512,
            },
        };

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .timeout(self.timeout)
            .json(&request)
            .send()
            .await
            .map_err(transport_error)?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(LlmError::ApiError(error_text));
        }

        let result: GenerateResponse = response.json().await.map_err(transport_error)?;
        let text = result
            .candidates
            .into_iter()
            .next()
            .map(|c| {
                c.content
                    .parts
                    .into_iter()
                    .map(|p| p.text)
                    .collect::<Vec<_>>()
                    .join("")
            })
            .ok_or(LlmError::EmptyCompletion)?;

        non_empty(text)
    }
}

#[async_trait]
impl LlmClient for GeminiClient {
    async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        self.generate(prompt).await
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn provider(&self) -> &str {
        "gemini"
    }
}
