//! HTTP route handlers for the remote-with-fallback endpoints.

use axum::{extract::State, response::Json, routing::post, Router};

use crate::cache::AppCache;
use crate::engine::models::{ActivityInput, EmissionsBreakdown, ScoreResult};
use crate::AppState;

/// Create the remote collaborator router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/carbon", post(carbon))
        .route("/recommend", post(recommend))
}

/// Estimate emissions, preferring the carbon API per category.
///
/// Results are cached by input hash so repeated submissions of the
/// same week do not re-bill the remote API.
async fn carbon(
    State(state): State<AppState>,
    Json(input): Json<ActivityInput>,
) -> Json<EmissionsBreakdown> {
    let key = AppCache::input_key(&input);
    let breakdown = state
        .cache
        .estimates
        .get_with(key, async {
            state.carbon.estimate(&input, &state.factors).await
        })
        .await;
    Json(breakdown)
}

/// Recommendation request, mirroring the frontend payload: one object
/// carrying both the breakdown fields and the original activity.
#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendRequest {
    #[serde(default)]
    pub carbon_data: serde_json::Value,
}

/// Generate recommendations, preferring the LLM.
async fn recommend(
    State(state): State<AppState>,
    Json(request): Json<RecommendRequest>,
) -> Json<ScoreResult> {
    let breakdown: EmissionsBreakdown =
        serde_json::from_value(request.carbon_data.clone()).unwrap_or_default();
    let input: ActivityInput = serde_json::from_value(request.carbon_data).unwrap_or_default();
    Json(
        state
            .recommend
            .recommend(&breakdown, &input, &state.scoring)
            .await,
    )
}
