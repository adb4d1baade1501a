use axum::{Json, http::StatusCode};
use serde::Serialize;
use skimatch_core::Suggestion;

/// JSON error response
#[derive(Serialize)]
pub struct ApiError {
    pub error: String,
    pub code: u16,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> (StatusCode, Json<Self>) {
        (
            status,
            Json(Self {
                error: message.into(),
                code: status.as_u16(),
            }),
        )
    }

    pub fn bad_request(message: impl Into<String>) -> (StatusCode, Json<Self>) {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    /// Upstream model collaborator failed
    pub fn bad_gateway(message: impl Into<String>) -> (StatusCode, Json<Self>) {
        Self::new(StatusCode::BAD_GATEWAY, message)
    }
}

#[derive(Serialize)]
pub struct SuggestApiResponse {
    pub suggestions: Vec<Suggestion>,
    pub extracted_keywords: Vec<String>,
    pub provider: String,
    pub response_time_ms: u128,
}

#[derive(Serialize)]
pub struct SparkApiResponse {
    pub spark: String,
    pub resort_id: String,
    pub response_time_ms: u128,
}
