use axum::{extract::State, Json};
use serde::Deserialize;

use crate::enrich::{fit_score, FitAssessment};
use crate::errors::AppError;
use crate::state::AppState;

/// Feedback examples folded into each enrichment prompt.
const EXAMPLES_PER_POLARITY: i64 = 3;

#[derive(Deserialize)]
pub struct EnrichRequest {
    pub cv_text: String,
    pub job_text: String,
}

/// POST /api/v1/enrich
///
/// Per-job, on-demand re-scoring. Failure here is scoped to this request;
/// the bulk ranking pipeline is unaffected.
pub async fn handle_enrich(
    State(state): State<AppState>,
    Json(req): Json<EnrichRequest>,
) -> Result<Json<FitAssessment>, AppError> {
    if req.cv_text.trim().is_empty() || req.job_text.trim().is_empty() {
        return Err(AppError::Validation(
            "cv_text and job_text must not be empty".to_string(),
        ));
    }

    let llm = state.llm.as_ref().ok_or_else(|| {
        AppError::MissingCredential("ANTHROPIC_API_KEY is not configured".to_string())
    })?;

    let (liked, disliked) = state.feedback.recent_examples(EXAMPLES_PER_POLARITY).await?;

    let assessment = fit_score(&req.cv_text, &req.job_text, &liked, &disliked, llm)
        .await
        .map_err(|e| AppError::Llm(format!("fit scoring failed: {e}")))?;

    Ok(Json(assessment))
}
