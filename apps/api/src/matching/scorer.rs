//! Embedding similarity scorer — CV vs job-description semantic matching.
//!
//! `SemanticScorer` owns the sentence-embedding model handle. It is
//! constructed exactly once at startup (model load is expensive) and injected
//! through `AppState` as `Arc<SemanticScorer>`; `embed` takes `&self`, so
//! concurrent pipeline invocations may score in parallel against the same
//! handle. Encoding is CPU-bound — handlers run `compute_matches` via
//! `tokio::task::spawn_blocking`.

use anyhow::{anyhow, Context, Result};
use fastembed::{EmbeddingModel, InitOptions, TextEmbedding};
use serde::{Deserialize, Serialize};

use crate::matching::record::JobRecord;
use crate::text::make_snippet;

/// Model paired with the similarity floor below. The two are calibrated
/// together; changing one requires revisiting the other.
pub const EMBEDDING_MODEL_NAME: &str = "all-MiniLM-L6-v2";

/// Minimum cosine similarity for a job to survive scoring. Inclusive.
pub const SIMILARITY_THRESHOLD: f32 = 0.35;

const SNIPPET_MAX_CHARS: usize = 320;

/// A job that passed the similarity threshold, ready for ranking and export.
/// Field order is the export column order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredMatch {
    pub title: String,
    pub company: String,
    pub source: String,
    pub location: String,
    pub url: String,
    /// Cosine similarity × 100, rounded to 2 decimals. Not clamped — a
    /// negative similarity stays negative.
    pub score: f64,
    pub snippet: String,
}

/// Sentence-embedding scorer. See module docs for the ownership model.
pub struct SemanticScorer {
    model: TextEmbedding,
}

impl SemanticScorer {
    /// Loads the embedding model. Fatal on failure — there is no fallback
    /// scorer, so callers abort startup when this errors.
    pub fn new() -> Result<Self> {
        let model = TextEmbedding::try_new(
            InitOptions::new(EmbeddingModel::AllMiniLML6V2).with_show_download_progress(false),
        )
        .context("failed to load sentence embedding model")?;
        Ok(Self { model })
    }

    fn embed(&self, text: &str) -> Result<Vec<f32>> {
        let mut vectors = self
            .model
            .embed(vec![text], None)
            .context("embedding encode failed")?;
        vectors
            .pop()
            .ok_or_else(|| anyhow!("embedding model returned no vector"))
    }

    /// Scores every job against the CV text. One CV embedding, one embedding
    /// per job. Jobs below the threshold are dropped; output keeps insertion
    /// order (ranking is the assembler's job).
    pub fn compute_matches(&self, cv_text: &str, jobs: &[JobRecord]) -> Result<Vec<ScoredMatch>> {
        let cv_embedding = self.embed(cv_text)?;

        let mut results = Vec::new();
        for job in jobs {
            let Some(text) = embedding_text(job) else {
                continue;
            };

            let job_embedding = self.embed(text)?;
            let similarity = cosine_similarity(&cv_embedding, &job_embedding);

            if !passes_threshold(similarity) {
                continue;
            }

            results.push(ScoredMatch {
                title: job.title.clone(),
                company: job.company.clone(),
                source: job.source.clone(),
                location: job.location.clone(),
                url: job.url.clone(),
                score: scale_score(similarity),
                snippet: make_snippet(text, SNIPPET_MAX_CHARS),
            });
        }

        Ok(results)
    }
}

/// Text a job is embedded on: description, else title, else nothing (skip).
pub(crate) fn embedding_text(job: &JobRecord) -> Option<&str> {
    if !job.description.trim().is_empty() {
        Some(&job.description)
    } else if !job.title.trim().is_empty() {
        Some(&job.title)
    } else {
        None
    }
}

/// Inclusive threshold gate: a similarity exactly at the floor survives.
pub(crate) fn passes_threshold(similarity: f32) -> bool {
    similarity >= SIMILARITY_THRESHOLD
}

/// Maps cosine similarity in [−1, 1] to a percentage rounded to 2 decimals.
pub(crate) fn scale_score(similarity: f32) -> f64 {
    (f64::from(similarity) * 100.0 * 100.0).round() / 100.0
}

/// Plain cosine similarity. Zero-magnitude vectors score 0.0.
pub(crate) fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    let dot: f32 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|y| y * y).sum::<f32>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a * norm_b)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job(title: &str, description: &str) -> JobRecord {
        JobRecord {
            source: "test".to_string(),
            title: title.to_string(),
            company: String::new(),
            location: String::new(),
            url: String::new(),
            description: description.to_string(),
        }
    }

    #[test]
    fn test_cosine_identical_vectors() {
        let v = vec![0.3, 0.5, 0.2];
        assert!((cosine_similarity(&v, &v) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_cosine_orthogonal_vectors() {
        let a = vec![1.0, 0.0];
        let b = vec![0.0, 1.0];
        assert!(cosine_similarity(&a, &b).abs() < 1e-6);
    }

    #[test]
    fn test_cosine_opposite_vectors_is_negative_one() {
        let a = vec![1.0, 0.0];
        let b = vec![-1.0, 0.0];
        assert!((cosine_similarity(&a, &b) + 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_cosine_zero_vector_scores_zero() {
        let a = vec![0.0, 0.0];
        let b = vec![1.0, 1.0];
        assert_eq!(cosine_similarity(&a, &b), 0.0);
    }

    #[test]
    fn test_scale_score_rounds_to_two_decimals() {
        assert_eq!(scale_score(0.345_67), 34.57);
        assert_eq!(scale_score(1.0), 100.0);
    }

    #[test]
    fn test_scale_score_preserves_negative_similarity() {
        assert_eq!(scale_score(-0.25), -25.0);
    }

    #[test]
    fn test_embedding_text_prefers_description() {
        let j = job("HR Director", "Owns the people strategy");
        assert_eq!(embedding_text(&j), Some("Owns the people strategy"));
    }

    #[test]
    fn test_embedding_text_falls_back_to_title() {
        let j = job("HR Director", "  ");
        assert_eq!(embedding_text(&j), Some("HR Director"));
    }

    #[test]
    fn test_embedding_text_skips_fully_blank_job() {
        let j = job("", "");
        assert_eq!(embedding_text(&j), None);
    }

    #[test]
    fn test_threshold_boundary_is_inclusive() {
        assert!(passes_threshold(SIMILARITY_THRESHOLD));
        assert!(passes_threshold(SIMILARITY_THRESHOLD + 0.1));
        assert!(!passes_threshold(SIMILARITY_THRESHOLD - 0.01));
    }
}
