use axum::{Json, extract::State};
use std::sync::Arc;
use tracing::info;

use skimatch_core::Resort;

use crate::state::AppState;

/// Catalog Endpoint - GET /api/resorts
/// Read-only listing of the full catalog, in catalog order.
pub async fn list_resorts(State(state): State<Arc<AppState>>) -> Json<Vec<Resort>> {
    let resorts = state.engine.catalog().to_vec();
    info!(count = resorts.len(), "Catalog listed");
    Json(resorts)
}
