// Suggestion engine
// Orchestrates: keyword extraction (advisory) -> lexical retrieval ->
// explanation fan-out -> ordered assembly

use std::sync::Arc;
use std::time::Duration;

use futures::stream::{FuturesUnordered, StreamExt};
use serde::{Deserialize, Serialize};
use skimatch_core::{CatalogSource, Resort, Retriever, Suggestion, DEFAULT_LIMIT};
use thiserror::Error;
use tracing::{info, warn};

use crate::gemini::GeminiClient;
use crate::keywords;
use crate::llm::{LlmClient, LlmError};
use crate::ollama::OllamaClient;
use crate::spark::{spark_prompt, SparkRequest, TripSpark};

#[derive(Error, Debug)]
pub enum SuggestError {
    #[error("query must be a non-empty string")]
    InvalidQuery,

    #[error("explanation generation failed for {resort}: {source}")]
    Explanation {
        resort: String,
        #[source]
        source: LlmError,
    },

    #[error("spark generation failed: {0}")]
    Spark(#[from] LlmError),
}

/// LLM provider selection
#[derive(Debug, Clone, Default)]
pub enum LlmProvider {
    #[default]
    Gemini,
    Ollama,
}

// engine configuration - injected at construction, no process-wide globals
#[derive(Debug, Clone)]
pub struct SuggestConfig {
    pub provider: LlmProvider,
    pub gemini_model: String,
    pub ollama_url: String,
    pub ollama_model: String,
    pub max_suggestions: usize,
    pub request_timeout: Duration,
}

impl Default for SuggestConfig {
    fn default() -> Self {
        Self {
            provider: LlmProvider::Gemini,
            gemini_model: "gemini-1.5-flash".to_string(),
            ollama_url: "http://localhost:11434".to_string(),
            ollama_model: "qwen3:8b".to_string(),
            max_suggestions: DEFAULT_LIMIT,
            request_timeout: Duration::from_secs(20),
        }
    }
}

impl SuggestConfig {
    /// Config for the hosted Gemini provider
    pub fn with_gemini() -> Self {
        Self {
            provider: LlmProvider::Gemini,
            ..Default::default()
        }
    }

    /// Config for a local Ollama provider
    pub fn with_ollama() -> Self {
        Self {
            provider: LlmProvider::Ollama,
            ..Default::default()
        }
    }
}

/// Suggestion pipeline result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestResponse {
    pub suggestions: Vec<Suggestion>,

    /// Advisory only: documents what the model read out of the query.
    /// Retrieval ran on the raw query, not on this list.
    pub extracted_keywords: Vec<String>,

    pub provider: String,
}

// main suggestion engine
pub struct SuggestEngine {
    config: SuggestConfig,
    client: Arc<dyn LlmClient>,
    retriever: Retriever,
}

impl SuggestEngine {
    pub fn new(config: SuggestConfig, catalog: Arc<dyn CatalogSource>) -> Result<Self, LlmError> {
        let client: Arc<dyn LlmClient> = match &config.provider {
            LlmProvider::Gemini => Arc::new(GeminiClient::from_env(
                &config.gemini_model,
                config.request_timeout,
            )?),
            LlmProvider::Ollama => Arc::new(OllamaClient::new(
                &config.ollama_url,
                &config.ollama_model,
                config.request_timeout,
            )),
        };
        Ok(Self::with_client(config, catalog, client))
    }

    /// Build with an explicit client (tests, custom providers).
    pub fn with_client(
        config: SuggestConfig,
        catalog: Arc<dyn CatalogSource>,
        client: Arc<dyn LlmClient>,
    ) -> Self {
        Self {
            config,
            client,
            retriever: Retriever::new(catalog),
        }
    }

    pub fn provider(&self) -> &str {
        self.client.provider()
    }

    /// The full resort catalog, in catalog order.
    pub fn catalog(&self) -> &[Resort] {
        self.retriever.catalog()
    }

    /// Process a free-text preference query into ranked, explained
    /// suggestions. Zero matches is a valid empty result; any single
    /// explanation failure fails the whole request.
    pub async fn suggest(&self, query: &str) -> Result<SuggestResponse, SuggestError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(SuggestError::InvalidQuery);
        }

        // Step 1: advisory keyword extraction. Failure skips the stage;
        // retrieval proceeds with the raw query either way.
        let extracted_keywords = match self.client.complete(&keywords::extraction_prompt(query)).await
        {
            Ok(reply) => keywords::parse_keyword_list(&reply),
            Err(e) => {
                warn!(error = %e, "keyword extraction failed, continuing with raw query");
                Vec::new()
            }
        };
        info!(query = %query, keywords = ?extracted_keywords, "query analyzed");

        // Step 2: lexical retrieval on the raw query
        let resorts = self.retriever.retrieve(query, self.config.max_suggestions);
        if resorts.is_empty() {
            info!(query = %query, "no catalog matches");
            return Ok(SuggestResponse {
                suggestions: Vec::new(),
                extracted_keywords,
                provider: self.client.provider().to_string(),
            });
        }

        // Step 3: explanation fan-out, keyed by retrieval index. Completions
        // land in index slots so output order matches retrieval order no
        // matter which call finishes first. First failure drops the rest.
        let mut pending: FuturesUnordered<_> = resorts
            .iter()
            .enumerate()
            .map(|(idx, resort)| {
                let prompt = self.explain_prompt(query, resort);
                let name = resort.name.clone();
                let client = &self.client;
                async move { (idx, name, client.complete(&prompt).await) }
            })
            .collect();

        let mut slots: Vec<Option<String>> = vec![None; resorts.len()];
        while let Some((idx, name, result)) = pending.next().await {
            match result {
                Ok(text) => slots[idx] = Some(text),
                Err(source) => {
                    return Err(SuggestError::Explanation {
                        resort: name,
                        source,
                    })
                }
            }
        }
        drop(pending);

        // Step 4: assembly in retrieval order
        let mut suggestions = Vec::with_capacity(resorts.len());
        for (resort, slot) in resorts.into_iter().zip(slots) {
            match slot {
                Some(why_it_fits) => suggestions.push(Suggestion { resort, why_it_fits }),
                // unreachable: the fan-out either fills every slot or errors
                None => {
                    return Err(SuggestError::Explanation {
                        resort: resort.name,
                        source: LlmError::EmptyCompletion,
                    })
                }
            }
        }

        info!(
            suggestions = suggestions.len(),
            provider = %self.client.provider(),
            "suggest complete"
        );

        Ok(SuggestResponse {
            suggestions,
            extracted_keywords,
            provider: self.client.provider().to_string(),
        })
    }

    /// One-shot creative text for a single resort. No catalog or retriever
    /// involvement; failures propagate to the caller.
    pub async fn spark_trip(&self, req: &SparkRequest) -> Result<TripSpark, SuggestError> {
        let spark = self.client.complete(&spark_prompt(req)).await?;
        info!(resort_id = %req.resort_id, "trip spark generated");
        Ok(TripSpark { spark })
    }

    fn explain_prompt(&self, query: &str, resort: &Resort) -> String {
        format!(
            r#"Based on the user's ski preferences: "{query}"

And this resort information:
- Name: {name}
- Location: {region}
- Description: {description}
- Keywords: {keywords}

Write a concise 1-2 sentence explanation of why this resort matches their preferences.
Focus on the specific aspects that align with what they're looking for.
Be specific and personalized, not generic."#,
            query = query,
            name = resort.name,
            region = resort.region,
            description = resort.description,
            keywords = resort.keywords.join(", "),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skimatch_core::StaticCatalog;

    #[test]
    fn test_default_config() {
        let config = SuggestConfig::default();
        assert_eq!(config.max_suggestions, 3);
        assert!(matches!(config.provider, LlmProvider::Gemini));
    }

    #[test]
    fn test_explain_prompt_embeds_query_and_resort() {
        struct NoopClient;

        #[async_trait::async_trait]
        impl LlmClient for NoopClient {
            async fn complete(&self, _prompt: &str) -> Result<String, LlmError> {
                Ok("ok".to_string())
            }
            fn model(&self) -> &str {
                "noop"
            }
            fn provider(&self) -> &str {
                "noop"
            }
        }

        let engine = SuggestEngine::with_client(
            SuggestConfig::default(),
            Arc::new(StaticCatalog::builtin()),
            Arc::new(NoopClient),
        );

        let resort = engine.catalog()[0].clone();
        let prompt = engine.explain_prompt("luxury powder trip", &resort);
        assert!(prompt.contains(r#"preferences: "luxury powder trip""#));
        assert!(prompt.contains("- Name: Whistler Blackcomb"));
        assert!(prompt.contains("- Keywords: expert_terrain, luxury, village_atmosphere, large_resort"));
    }
}
