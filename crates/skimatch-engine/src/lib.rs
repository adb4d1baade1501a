// Skimatch suggestion engine - query understanding, retrieval and
// explanation generation for resort recommendations

pub mod engine;
pub mod gemini;
pub mod keywords;
pub mod llm;
pub mod ollama;
pub mod spark;

pub use engine::{LlmProvider, SuggestConfig, SuggestEngine, SuggestError, SuggestResponse};
pub use gemini::GeminiClient;
pub use llm::{LlmClient, LlmError};
pub use ollama::OllamaClient;
pub use spark::{SparkRequest, TripSpark};
