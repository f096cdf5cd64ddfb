use std::sync::Arc;

use crate::config::Config;
use crate::feedback::store::FeedbackStore;
use crate::llm_client::LlmClient;
use crate::matching::scorer::SemanticScorer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// HTTP client shared by all job-source fetchers.
    pub http: reqwest::Client,
    /// Embedding scorer, constructed once at startup. `embed` takes `&self`,
    /// so concurrent pipeline invocations share this handle safely.
    pub scorer: Arc<SemanticScorer>,
    pub feedback: FeedbackStore,
    /// Present only when ANTHROPIC_API_KEY is configured; the enrichment
    /// endpoint surfaces the missing credential per request.
    pub llm: Option<LlmClient>,
    pub config: Config,
}
