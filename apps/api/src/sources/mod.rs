//! Job-source fetchers and the collector that aggregates them.
//!
//! Each source converts its own wire shape into canonical `JobRecord`s at
//! its boundary and returns an explicit `Result` — the collector turns every
//! outcome into a `SourceReport` so failures are observable instead of
//! silently producing empty lists. A failed source never aborts the run.

pub mod arbeitnow;
pub mod englishjobs;
pub mod rss;

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;
use tracing::{info, warn};

use crate::matching::filter::filter_relevant;
use crate::matching::record::JobRecord;

use arbeitnow::ArbeitnowSource;
use englishjobs::EnglishJobsSource;
use rss::RssSource;

/// Countries the Arbeitnow board covers.
const ARBEITNOW_COUNTRIES: &[&str] = &["Germany", "Netherlands", "Spain", "Portugal"];

const REED_RSS_URL: &str = "https://www.reed.co.uk/rss/jobs?keywords=HR+Leadership&location=London";

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected status: {0}")]
    Status(u16),

    #[error("feed parse error: {0}")]
    Feed(#[from] feed_rs::parser::ParseFeedError),
}

/// A single job source. Implementations own their query parameters; the
/// shared HTTP client is passed per fetch.
#[async_trait]
pub trait JobSource: Send + Sync {
    fn name(&self) -> &str;
    async fn fetch(&self, client: &reqwest::Client) -> Result<Vec<JobRecord>, SourceError>;
}

/// Per-fetch outcome, returned to the caller alongside the jobs.
#[derive(Debug, Clone, Serialize)]
pub struct SourceReport {
    pub source: String,
    pub fetched: usize,
    pub error: Option<String>,
}

pub struct CollectOutcome {
    /// HR-relevant jobs, in fetch order.
    pub jobs: Vec<JobRecord>,
    pub reports: Vec<SourceReport>,
    /// Count before relevance filtering.
    pub total_fetched: usize,
}

/// Builds the source set for the requested countries and keywords,
/// mirroring each board's coverage.
pub fn build_sources(keywords: &str, countries: &[String]) -> Vec<Box<dyn JobSource>> {
    let kw = keywords.replace(' ', "+");
    let mut sources: Vec<Box<dyn JobSource>> = Vec::new();

    for country in countries {
        if ARBEITNOW_COUNTRIES.contains(&country.as_str()) {
            sources.push(Box::new(ArbeitnowSource::new(kw.clone(), country.clone())));
        }
    }

    if countries.iter().any(|c| c == "UK" || c == "United Kingdom") {
        sources.push(Box::new(RssSource::new("reed", REED_RSS_URL.to_string())));
    }

    for country in countries {
        sources.push(Box::new(RssSource::new(
            "indeed",
            format!("https://www.indeed.com/rss?q={kw}&l={country}"),
        )));
    }

    for country in countries {
        let cc: String = country.chars().take(2).collect::<String>().to_uppercase();
        sources.push(Box::new(RssSource::new(
            "eures",
            format!("https://ec.europa.eu/eures/public/rss?keywords=HR&country={cc}"),
        )));
    }

    if countries.iter().any(|c| c == "Germany") {
        sources.push(Box::new(EnglishJobsSource::new("HR".to_string())));
    }

    sources
}

/// Fetches every source in turn, records per-source outcomes, and applies
/// the HR relevance filter to the combined list.
pub async fn collect_jobs(
    client: &reqwest::Client,
    keywords: &str,
    countries: &[String],
) -> CollectOutcome {
    let sources = build_sources(keywords, countries);

    let mut jobs = Vec::new();
    let mut reports = Vec::new();

    for source in &sources {
        match source.fetch(client).await {
            Ok(batch) => {
                info!(source = source.name(), fetched = batch.len(), "Source fetch succeeded");
                reports.push(SourceReport {
                    source: source.name().to_string(),
                    fetched: batch.len(),
                    error: None,
                });
                jobs.extend(batch);
            }
            Err(e) => {
                warn!(source = source.name(), error = %e, "Source fetch failed; skipping");
                reports.push(SourceReport {
                    source: source.name().to_string(),
                    fetched: 0,
                    error: Some(e.to_string()),
                });
            }
        }
    }

    let total_fetched = jobs.len();
    let jobs = filter_relevant(jobs);
    info!(total_fetched, retained = jobs.len(), "Collected and filtered jobs");

    CollectOutcome {
        jobs,
        reports,
        total_fetched,
    }
}
