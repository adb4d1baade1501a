use axum::{
    Json,
    extract::State,
    http::StatusCode,
};
use std::sync::Arc;
use std::time::Instant;
use tracing::info;

use skimatch_engine::SuggestError;

use crate::models::{ApiError, SuggestApiResponse, SuggestRequest};
use crate::state::AppState;

/// Suggest Endpoint - POST /api/suggest
pub async fn suggest_resorts(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SuggestRequest>,
) -> Result<Json<SuggestApiResponse>, (StatusCode, Json<ApiError>)> {
    let start = Instant::now();
    info!(query = %req.query, "SUGGEST request");

    if req.query.trim().is_empty() {
        return Err(ApiError::bad_request("query must be a non-empty string"));
    }

    let response = state.engine.suggest(&req.query).await.map_err(map_error)?;

    let elapsed = start.elapsed().as_millis();
    info!(
        suggestions = response.suggestions.len(),
        provider = %response.provider,
        time_ms = elapsed,
        "SUGGEST complete"
    );

    Ok(Json(SuggestApiResponse {
        suggestions: response.suggestions,
        extracted_keywords: response.extracted_keywords,
        provider: response.provider,
        response_time_ms: elapsed,
    }))
}

// validation failures map to 400, collaborator failures to 502; zero
// matches is a plain 200 with an empty list
fn map_error(err: SuggestError) -> (StatusCode, Json<ApiError>) {
    match err {
        SuggestError::InvalidQuery => ApiError::bad_request(err.to_string()),
        SuggestError::Explanation { .. } | SuggestError::Spark(_) => {
            ApiError::bad_gateway(err.to_string())
        }
    }
}
