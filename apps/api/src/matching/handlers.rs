use axum::{
    extract::State,
    http::header,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::matching::rank::{matches_to_csv, sort_matches};
use crate::matching::scorer::ScoredMatch;
use crate::sources::{collect_jobs, SourceReport};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct MatchRequest {
    pub cv_text: String,
    #[serde(default = "default_keywords")]
    pub keywords: String,
    #[serde(default = "default_countries")]
    pub countries: Vec<String>,
}

fn default_keywords() -> String {
    "HR Director OR Head of HR".to_string()
}

fn default_countries() -> Vec<String> {
    vec![
        "Germany".to_string(),
        "Netherlands".to_string(),
        "UK".to_string(),
    ]
}

#[derive(Serialize)]
pub struct MatchResponse {
    /// Ranked matches, best first. Empty when nothing cleared the
    /// similarity threshold — a legitimate "no matches" outcome, not an error.
    pub matches: Vec<ScoredMatch>,
    pub sources: Vec<SourceReport>,
    pub total_fetched: usize,
}

#[derive(Deserialize)]
pub struct ExportRequest {
    pub matches: Vec<ScoredMatch>,
}

/// POST /api/v1/matches
///
/// One full pipeline run: fetch → normalize → filter → score → rank.
pub async fn handle_matches(
    State(state): State<AppState>,
    Json(req): Json<MatchRequest>,
) -> Result<Json<MatchResponse>, AppError> {
    if req.cv_text.trim().is_empty() {
        return Err(AppError::Validation("cv_text must not be empty".to_string()));
    }

    let outcome = collect_jobs(&state.http, &req.keywords, &req.countries).await;

    // Encoding is CPU-bound — spawn_blocking keeps the async executor free.
    let scorer = state.scorer.clone();
    let cv_text = req.cv_text.clone();
    let candidates = outcome.jobs;
    let matches = tokio::task::spawn_blocking(move || scorer.compute_matches(&cv_text, &candidates))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed in scoring: {e}")))?
        .map_err(|e| AppError::Scoring(e.to_string()))?;

    let matches = sort_matches(matches);
    info!(
        total_fetched = outcome.total_fetched,
        matched = matches.len(),
        "Match pipeline completed"
    );

    Ok(Json(MatchResponse {
        matches,
        sources: outcome.reports,
        total_fetched: outcome.total_fetched,
    }))
}

/// POST /api/v1/matches/export
///
/// Serializes a ranked match list to a downloadable CSV.
pub async fn handle_export(
    Json(req): Json<ExportRequest>,
) -> Result<impl IntoResponse, AppError> {
    let matches = sort_matches(req.matches);
    let bytes = matches_to_csv(&matches)?;

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"job_matches.csv\"",
            ),
        ],
        bytes,
    ))
}
