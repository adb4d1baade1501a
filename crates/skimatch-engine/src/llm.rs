// LLM collaborator seam
// Every provider goes through this trait so the pipeline can be exercised
// without network access.

use async_trait::async_trait;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LlmError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("model call timed out")]
    Timeout,

    #[error("model API error: {0}")]
    ApiError(String),

    #[error("model returned an empty completion")]
    EmptyCompletion,

    #[error("missing API key")]
    MissingApiKey,
}

/// Opaque text-completion service.
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Complete a prompt. Never returns blank text - an empty or
    /// whitespace-only completion is an error.
    async fn complete(&self, prompt: &str) -> Result<String, LlmError>;

    fn model(&self) -> &str;

    fn provider(&self) -> &str;
}

/// Map a transport error, folding timeouts into their own kind so callers
/// can tell a slow model from an unreachable one.
pub(crate) fn transport_error(err: reqwest::Error) -> LlmError {
    if err.is_timeout() {
        LlmError::Timeout
    } else {
        LlmError::RequestFailed(err)
    }
}

/// Reject blank completions.
pub(crate) fn non_empty(text: String) -> Result<String, LlmError> {
    if text.trim().is_empty() {
        Err(LlmError::EmptyCompletion)
    } else {
        Ok(text)
    }
}
