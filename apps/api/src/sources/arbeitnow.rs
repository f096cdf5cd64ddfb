//! Arbeitnow job-board API (https://www.arbeitnow.com/api/job-board-api).

use async_trait::async_trait;
use serde::Deserialize;

use crate::matching::record::{JobRecord, RawJobPayload};
use crate::sources::{JobSource, SourceError};

const API_URL: &str = "https://www.arbeitnow.com/api/job-board-api";

pub struct ArbeitnowSource {
    keywords: String,
    location: String,
}

impl ArbeitnowSource {
    pub fn new(keywords: String, location: String) -> Self {
        Self { keywords, location }
    }
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    #[serde(default)]
    data: Vec<ApiJob>,
}

#[derive(Debug, Deserialize)]
struct ApiJob {
    title: Option<String>,
    company: Option<String>,
    location: Option<String>,
    url: Option<String>,
    description: Option<String>,
}

impl From<ApiJob> for RawJobPayload {
    fn from(job: ApiJob) -> Self {
        RawJobPayload {
            title: job.title,
            company: job.company,
            location: job.location,
            url: job.url,
            description: job.description,
        }
    }
}

#[async_trait]
impl JobSource for ArbeitnowSource {
    fn name(&self) -> &str {
        "arbeitnow"
    }

    async fn fetch(&self, client: &reqwest::Client) -> Result<Vec<JobRecord>, SourceError> {
        let response = client
            .get(API_URL)
            .query(&[("keywords", &self.keywords), ("location", &self.location)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status(status.as_u16()));
        }

        let body: ApiResponse = response.json().await?;

        Ok(body
            .data
            .into_iter()
            .map(|job| RawJobPayload::from(job).normalize("arbeitnow"))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_deserializes_with_missing_fields() {
        let json = r#"{
            "data": [
                {"title": "HR Director", "url": "https://arbeitnow.com/view/1"},
                {"title": "People Ops Lead", "company": "Acme", "location": "Berlin",
                 "url": "https://arbeitnow.com/view/2", "description": "People operations"}
            ]
        }"#;
        let body: ApiResponse = serde_json::from_str(json).unwrap();
        assert_eq!(body.data.len(), 2);

        let first = RawJobPayload::from(body.data.into_iter().next().unwrap()).normalize("arbeitnow");
        assert_eq!(first.title, "HR Director");
        assert_eq!(first.company, "");
        assert_eq!(first.source, "arbeitnow");
    }

    #[test]
    fn test_response_without_data_key_is_empty() {
        let body: ApiResponse = serde_json::from_str("{}").unwrap();
        assert!(body.data.is_empty());
    }
}
