//! HTTP route handlers for the offline footprint engine.

use axum::{
    extract::State,
    response::Json,
    routing::{get, post},
    Router,
};

use crate::AppState;

use super::models::{ActivityInput, EmissionsBreakdown, ScoreResult, Source};
use super::{estimator, scorer};
use crate::demo;

/// Create the footprint engine router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/estimate", post(estimate))
        .route("/score", post(score))
        .route("/demo", get(demo_result))
}

/// Health check for the footprint engine.
async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "service": "footprint-engine",
        "version": "0.1.0",
        "factors": "EPA 2024 / DEFRA 2024 / IPCC AR6"
    }))
}

/// Estimate weekly emissions from reported activity, offline only.
async fn estimate(
    State(state): State<AppState>,
    Json(input): Json<ActivityInput>,
) -> Json<EmissionsBreakdown> {
    Json(estimator::estimate(&input, &state.factors))
}

/// Grade a breakdown against US benchmarks, offline only.
async fn score(
    State(state): State<AppState>,
    Json(breakdown): Json<EmissionsBreakdown>,
) -> Json<ScoreResult> {
    Json(scorer::score(&breakdown, &state.scoring))
}

/// Preloaded demo account, for the "Try Demo" flow.
async fn demo_result(State(state): State<AppState>) -> Json<serde_json::Value> {
    let inputs = demo::demo_inputs();
    let mut breakdown = estimator::estimate(&inputs, &state.factors);
    breakdown.source = Source::Demo;
    let mut result = scorer::score(&breakdown, &state.scoring);
    result.source = Source::Demo;

    Json(serde_json::json!({
        "inputs": inputs,
        "carbon": breakdown,
        "recommendations": result,
    }))
}
