pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::enrich;
use crate::extract;
use crate::feedback;
use crate::matching;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Résumé extraction
        .route("/api/v1/resume/extract", post(extract::handle_extract))
        // Match pipeline
        .route("/api/v1/matches", post(matching::handlers::handle_matches))
        .route(
            "/api/v1/matches/export",
            post(matching::handlers::handle_export),
        )
        // Feedback log
        .route(
            "/api/v1/feedback",
            post(feedback::handlers::handle_record_feedback),
        )
        .route(
            "/api/v1/feedback/examples",
            get(feedback::handlers::handle_feedback_examples),
        )
        // Per-job LLM enrichment
        .route("/api/v1/enrich", post(enrich::handlers::handle_enrich))
        .with_state(state)
}
