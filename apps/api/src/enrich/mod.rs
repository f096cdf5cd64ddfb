//! Preference-Aware Re-Scorer — per-job LLM fit assessment that folds in
//! accumulated like/dislike history.
//!
//! Invoked on demand for a single job, never as part of the bulk pipeline.
//! A malformed model response degrades to a scoreless assessment; it never
//! errors past this module.

pub mod handlers;
pub mod prompts;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::llm_client::{strip_json_fences, LlmClient, LlmError};
use crate::text::truncate_chars;

use self::prompts::{DEFAULT_PREFERENCE_BLOCK, FIT_PROMPT_TEMPLATE, FIT_SYSTEM};

/// CV and job excerpts are capped before prompting.
const MAX_EXCERPT_CHARS: usize = 5000;
/// On parse failure the raw response is truncated into the summary.
const MAX_RAW_SUMMARY_CHARS: usize = 400;

/// Structured fit assessment. `score` is `None` when the model response
/// could not be parsed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FitAssessment {
    pub score: Option<f64>,
    pub summary: String,
    pub strengths: Vec<String>,
    pub gaps: Vec<String>,
}

/// Preference-aware fit score for one CV/job pair.
///
/// Transport and API errors propagate (the caller owns this single
/// enrichment request); response-shape problems degrade locally.
pub async fn fit_score(
    cv_text: &str,
    job_text: &str,
    liked: &[String],
    disliked: &[String],
    llm: &LlmClient,
) -> Result<FitAssessment, LlmError> {
    let prompt = FIT_PROMPT_TEMPLATE
        .replace("{cv_text}", &truncate_chars(cv_text, MAX_EXCERPT_CHARS))
        .replace("{job_text}", &truncate_chars(job_text, MAX_EXCERPT_CHARS))
        .replace("{preference_block}", &build_preference_block(liked, disliked));

    let response = llm.call(&prompt, FIT_SYSTEM).await?;
    let raw = response.text().unwrap_or_default();
    Ok(parse_assessment(raw))
}

/// Renders the liked/disliked example lists into the prompt's preference
/// section, substituting the default preference statement when the feedback
/// log is still empty.
pub(crate) fn build_preference_block(liked: &[String], disliked: &[String]) -> String {
    let mut block = String::new();

    if !liked.is_empty() {
        block.push_str("Jobs the user LIKED:\n");
        for example in liked {
            block.push_str("- ");
            block.push_str(example);
            block.push('\n');
        }
        block.push('\n');
    }
    if !disliked.is_empty() {
        block.push_str("Jobs the user DISLIKED:\n");
        for example in disliked {
            block.push_str("- ");
            block.push_str(example);
            block.push('\n');
        }
        block.push('\n');
    }

    if block.is_empty() {
        DEFAULT_PREFERENCE_BLOCK.to_string()
    } else {
        block
    }
}

/// Best-effort parse of the model response. Anything that is not the
/// expected JSON shape becomes a degraded assessment carrying a prefix of
/// the raw text.
pub(crate) fn parse_assessment(raw: &str) -> FitAssessment {
    let text = strip_json_fences(raw);
    match serde_json::from_str::<FitAssessment>(text) {
        Ok(assessment) => assessment,
        Err(e) => {
            warn!("Fit assessment response was not valid JSON ({e}); degrading");
            FitAssessment {
                score: None,
                summary: truncate_chars(raw, MAX_RAW_SUMMARY_CHARS),
                strengths: Vec::new(),
                gaps: Vec::new(),
            }
        }
    }
}
