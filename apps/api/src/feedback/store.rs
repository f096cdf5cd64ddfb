//! Append-only feedback log.
//!
//! One row per user judgment. CRITICAL: never UPDATE or merge rows —
//! repeated feedback on the same job appends again, and consumers that need
//! "latest judgment per job" reduce over the fingerprint themselves.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use tracing::debug;

/// Display-shaped job record at the moment of judgment, including the
/// embedding score shown to the user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JudgedJob {
    pub title: String,
    pub company: String,
    pub source: String,
    pub location: String,
    pub url: String,
    pub score: f64,
}

impl JudgedJob {
    /// Stable fingerprint for correlating feedback across sessions:
    /// URL when present, else title + company.
    pub fn fingerprint(&self) -> String {
        if !self.url.is_empty() {
            return self.url.clone();
        }
        format!("{}::{}", self.title, self.company)
    }
}

/// Handle to the feedback table. Writes are serialized by the pool; a read
/// during an in-flight write sees either the pre- or post-write state.
#[derive(Clone)]
pub struct FeedbackStore {
    pool: SqlitePool,
}

impl FeedbackStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Appends one judgment row (+1 relevant, −1 not relevant). The INSERT
    /// is durable before this returns; errors propagate to the caller.
    pub async fn record(&self, job: &JudgedJob, feedback: i64) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            INSERT INTO feedback
                (job_title, company, source, location, url, emb_score, feedback, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&job.title)
        .bind(&job.company)
        .bind(&job.source)
        .bind(&job.location)
        .bind(&job.url)
        .bind(job.score)
        .bind(feedback)
        .bind(Utc::now().to_rfc3339())
        .execute(&self.pool)
        .await?;

        debug!(
            fingerprint = %job.fingerprint(),
            feedback,
            "Recorded feedback"
        );
        Ok(())
    }

    /// Up to `limit` most recent judgments of the given polarity, newest
    /// first, projected to `"{title} ({source})"`.
    pub async fn recent(&self, polarity: i64, limit: i64) -> Result<Vec<String>, sqlx::Error> {
        let rows: Vec<(String, String)> = sqlx::query_as(
            r#"
            SELECT job_title, source
            FROM feedback
            WHERE feedback = ?
            ORDER BY created_at DESC, id DESC
            LIMIT ?
            "#,
        )
        .bind(polarity)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|(title, source)| format!("{title} ({source})"))
            .collect())
    }

    /// Convenience: `(liked, disliked)` example lists, each capped at
    /// `limit_per_polarity`.
    pub async fn recent_examples(
        &self,
        limit_per_polarity: i64,
    ) -> Result<(Vec<String>, Vec<String>), sqlx::Error> {
        let liked = self.recent(1, limit_per_polarity).await?;
        let disliked = self.recent(-1, limit_per_polarity).await?;
        Ok((liked, disliked))
    }
}
