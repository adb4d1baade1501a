use axum::{
    Json,
    extract::State,
    http::StatusCode,
};
use std::sync::Arc;
use std::time::Instant;
use tracing::info;

use skimatch_engine::SparkRequest;

use crate::models::{ApiError, SparkApiResponse};
use crate::state::AppState;

/// Trip Spark Endpoint - POST /api/spark
pub async fn generate_trip_spark(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SparkRequest>,
) -> Result<Json<SparkApiResponse>, (StatusCode, Json<ApiError>)> {
    let start = Instant::now();
    info!(resort_id = %req.resort_id, resort = %req.resort_name, "SPARK request");

    // resort_keywords may be empty, everything else is required
    let required = [
        ("resort_id", &req.resort_id),
        ("resort_name", &req.resort_name),
        ("resort_location", &req.resort_location),
        ("resort_description", &req.resort_description),
    ];
    for (field, value) in required {
        if value.trim().is_empty() {
            return Err(ApiError::bad_request(format!("{} must be a non-empty string", field)));
        }
    }

    let spark = state
        .engine
        .spark_trip(&req)
        .await
        .map_err(|e| ApiError::bad_gateway(e.to_string()))?;

    let elapsed = start.elapsed().as_millis();
    info!(resort_id = %req.resort_id, time_ms = elapsed, "SPARK complete");

    Ok(Json(SparkApiResponse {
        spark: spark.spark,
        resort_id: req.resort_id,
        response_time_ms: elapsed,
    }))
}
