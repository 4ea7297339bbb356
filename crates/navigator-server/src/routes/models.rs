use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use serde::Deserialize;

use navigator_llm::compare::{COMPARISON_SYSTEM_PROMPT, ModelComparison, compare_models};
use navigator_llm::groq::KNOWN_MODELS;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CompareRequest {
    pub prompt: String,
    #[serde(default)]
    pub system_prompt: Option<String>,
}

/// Run one prompt against every known model.
pub async fn compare(
    State(state): State<AppState>,
    Json(req): Json<CompareRequest>,
) -> Result<Json<Vec<ModelComparison>>, ApiError> {
    if req.prompt.trim().is_empty() {
        return Err(ApiError::BadRequest("prompt must not be empty".to_string()));
    }

    let comparer = Arc::clone(&state.comparer);
    let results = tokio::task::spawn_blocking(move || {
        let system = req
            .system_prompt
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(COMPARISON_SYSTEM_PROMPT);
        compare_models(comparer.as_ref(), &KNOWN_MODELS, &req.prompt, Some(system))
    })
    .await?;

    Ok(Json(results))
}
