//! CarbonIQ - Rust/Axum Backend
//!
//! Estimation and scoring engine for the household footprint
//! calculator. The React frontend handles all presentation; the carbon
//! API and LLM recommendation collaborators are optional and fall back
//! to the offline engine on any failure.

use std::time::Duration;

use axum::{extract::State, response::Json, routing::get, Router};
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cache;
mod demo;
pub mod engine;
pub mod remote;

use cache::AppCache;
use engine::factors::{EmissionFactors, ScoringConfig};
use remote::{CarbonClient, RecommendClient};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub cache: AppCache,
    pub factors: EmissionFactors,
    pub scoring: ScoringConfig,
    pub carbon: CarbonClient,
    pub recommend: RecommendClient,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "carboniq_web=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // One shared HTTP client; the timeout is the whole budget for a
    // remote attempt, there are no retries.
    let timeout_secs = std::env::var("REMOTE_TIMEOUT_SECS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(8);
    let http = reqwest::Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .build()?;

    let carbon = CarbonClient::from_env(http.clone());
    let recommend = RecommendClient::from_env(http);
    tracing::info!(
        "remote collaborators: carbon_api={}, recommendation_api={}",
        carbon.is_configured(),
        recommend.is_configured()
    );

    let state = AppState {
        cache: AppCache::new(),
        factors: EmissionFactors::default(),
        scoring: ScoringConfig::default(),
        carbon,
        recommend,
    };

    // Build router
    let app = Router::new()
        // Health check and cache stats
        .route("/health", get(health_check))
        .route("/health/cache", get(cache_stats))
        // Offline engine endpoints
        .nest("/api/footprint", engine::router())
        // Remote-with-fallback endpoints
        .nest("/api", remote::router())
        // State and middleware
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Health check endpoint
async fn health_check(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "rust-backend",
        "carbon_api": state.carbon.is_configured(),
        "recommendation_api": state.recommend.is_configured(),
    }))
}

/// Cache statistics endpoint
async fn cache_stats(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(state.cache.stats())
}
