use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::feedback::store::JudgedJob;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct FeedbackRequest {
    pub job: JudgedJob,
    /// +1 relevant, −1 not relevant.
    pub feedback: i64,
}

#[derive(Deserialize)]
pub struct ExamplesQuery {
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_limit() -> i64 {
    3
}

#[derive(Serialize)]
pub struct FeedbackExamplesResponse {
    pub liked: Vec<String>,
    pub disliked: Vec<String>,
}

/// POST /api/v1/feedback
pub async fn handle_record_feedback(
    State(state): State<AppState>,
    Json(req): Json<FeedbackRequest>,
) -> Result<StatusCode, AppError> {
    if req.feedback != 1 && req.feedback != -1 {
        return Err(AppError::Validation(
            "feedback must be +1 or -1".to_string(),
        ));
    }

    state.feedback.record(&req.job, req.feedback).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/feedback/examples
pub async fn handle_feedback_examples(
    State(state): State<AppState>,
    Query(params): Query<ExamplesQuery>,
) -> Result<Json<FeedbackExamplesResponse>, AppError> {
    let (liked, disliked) = state.feedback.recent_examples(params.limit).await?;
    Ok(Json(FeedbackExamplesResponse { liked, disliked }))
}
