use serde::Deserialize;

#[derive(Deserialize)]
pub struct SuggestRequest {
    pub query: String,
}

// the spark request body is skimatch_engine::SparkRequest, deserialized
// directly by the handler
