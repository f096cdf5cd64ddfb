//! Canonical job record and the normalizer that produces it.
//!
//! Every fetcher converts its source-specific wire shape into a
//! `RawJobPayload` and normalizes it here. Nothing downstream of the source
//! boundary ever sees a source-specific shape or a missing field.

use serde::{Deserialize, Serialize};

/// Canonical job posting. All fields are always present; upstream gaps are
/// coerced to empty strings at normalization time. Immutable after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobRecord {
    pub source: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub url: String,
    pub description: String,
}

/// Loosely-shaped job payload as produced by a fetcher. Field presence varies
/// by source; normalization fills every gap.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawJobPayload {
    pub title: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub url: Option<String>,
    pub description: Option<String>,
}

impl RawJobPayload {
    /// Converts into a `JobRecord`, coercing every missing field to `""`.
    pub fn normalize(self, source: &str) -> JobRecord {
        JobRecord {
            source: source.to_string(),
            title: self.title.unwrap_or_default(),
            company: self.company.unwrap_or_default(),
            location: self.location.unwrap_or_default(),
            url: self.url.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_fills_all_missing_fields() {
        let record = RawJobPayload::default().normalize("indeed");
        assert_eq!(record.source, "indeed");
        assert_eq!(record.title, "");
        assert_eq!(record.company, "");
        assert_eq!(record.location, "");
        assert_eq!(record.url, "");
        assert_eq!(record.description, "");
    }

    #[test]
    fn test_normalize_passes_present_fields_through() {
        let payload = RawJobPayload {
            title: Some("Head of HR".to_string()),
            company: Some("Acme GmbH".to_string()),
            location: Some("Berlin".to_string()),
            url: Some("https://example.com/job/1".to_string()),
            description: Some("People leadership role".to_string()),
        };
        let record = payload.normalize("arbeitnow");
        assert_eq!(record.source, "arbeitnow");
        assert_eq!(record.title, "Head of HR");
        assert_eq!(record.company, "Acme GmbH");
        assert_eq!(record.location, "Berlin");
        assert_eq!(record.url, "https://example.com/job/1");
        assert_eq!(record.description, "People leadership role");
    }

    #[test]
    fn test_normalize_partial_payload() {
        let payload = RawJobPayload {
            title: Some("HR Director".to_string()),
            url: Some("https://example.com/job/2".to_string()),
            ..Default::default()
        };
        let record = payload.normalize("reed");
        assert_eq!(record.title, "HR Director");
        assert_eq!(record.company, "");
        assert_eq!(record.description, "");
    }
}
