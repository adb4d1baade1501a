mod handlers;
mod middleware;
mod models;
mod state;

use axum::{
    Router,
    middleware as axum_middleware,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::info;

use skimatch_core::{CatalogSource, StaticCatalog};
use skimatch_engine::{SuggestConfig, SuggestEngine};

use crate::handlers::{generate_trip_spark, list_resorts, suggest_resorts};
use crate::middleware::require_api_key;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file
    dotenvy::dotenv().ok();

    //logging setup
    tracing_subscriber::fmt::init();

    // Catalog - static today, swappable behind CatalogSource
    let catalog = Arc::new(StaticCatalog::builtin());
    info!(resorts = catalog.all().len(), "Catalog loaded");

    // Suggestion engine - provider from env, Gemini by default
    let config = match std::env::var("SKIMATCH_LLM_PROVIDER").as_deref() {
        Ok("ollama") => SuggestConfig::with_ollama(),
        _ => SuggestConfig::with_gemini(),
    };
    info!(provider = ?config.provider, "Setting up suggestion engine...");
    let engine = SuggestEngine::new(config, catalog)?;
    info!("Suggestion engine ready!");

    let state = Arc::new(AppState { engine });

    //routes - protected routes with API key
    let protected_routes = Router::new()
        .route("/api/suggest", post(suggest_resorts))
        .route("/api/spark", post(generate_trip_spark))
        .route("/api/resorts", get(list_resorts))
        .layer(axum_middleware::from_fn(require_api_key));

    // Health endpoint without auth
    let app = Router::new()
        .route("/health", get(|| async { "ok" }))
        .merge(protected_routes)
        .layer(CorsLayer::permissive())
        .with_state(state);

    if std::env::var("SKIMATCH_API_KEY").ok().filter(|k| !k.is_empty()).is_some() {
        info!("API key authentication ENABLED");
    } else {
        info!("API key authentication DISABLED (set SKIMATCH_API_KEY to enable)");
    }

    // Server start
    let addr = "0.0.0.0:8080";
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
