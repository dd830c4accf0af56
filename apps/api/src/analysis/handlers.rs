//! Axum route handler for the analysis endpoint.

use axum::{extract::State, Json};
use serde::Deserialize;
use tracing::{debug, info};

use crate::analysis::extractor::{extract, Analysis};
use crate::analysis::mode::Mode;
use crate::analysis::prompt_builder::build_prompt;
use crate::errors::AppError;
use crate::groq_client::complete_with_fallback;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    pub job_title: Option<String>,
    pub job_description: Option<String>,
    pub mode: Option<String>,
}

/// POST /api/analyze
///
/// Full pipeline: credential check → prompt build → candidate-fallback
/// completion → mode-specific extraction. Degenerate model output never
/// surfaces as an error; the extractor substitutes a well-formed fallback.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<Analysis>, AppError> {
    let groq = state.groq.as_ref().ok_or_else(|| {
        AppError::Configuration("GROQ_API_KEY is not set in environment variables.".to_string())
    })?;

    let mode = Mode::from_request(request.mode.as_deref());
    info!(mode = mode.as_str(), "Handling analysis request");

    let (messages, params) = build_prompt(
        mode,
        request.job_title.as_deref(),
        request.job_description.as_deref(),
    );
    let candidates = state.config.candidate_models();

    let outcome = complete_with_fallback(groq, &messages, params, &candidates)
        .await
        .map_err(|e| {
            if e.is_decommissioned() {
                AppError::ModelDecommissioned(e.to_string())
            } else {
                AppError::Completion(e.to_string())
            }
        })?;

    debug!(
        mode = mode.as_str(),
        model = %outcome.model,
        "Model response: {}",
        outcome.text
    );

    Ok(Json(extract(
        mode,
        &outcome.text,
        request.job_description.as_deref(),
    )))
}
