//! Generic RSS/Atom job feed fetcher, used for Reed, Indeed, and EURES.

use async_trait::async_trait;
use feed_rs::model::Feed;

use crate::matching::record::{JobRecord, RawJobPayload};
use crate::sources::{JobSource, SourceError};

/// Upper bound on entries taken from a single feed.
const MAX_ENTRIES: usize = 40;

pub struct RssSource {
    name: &'static str,
    url: String,
}

impl RssSource {
    pub fn new(name: &'static str, url: String) -> Self {
        Self { name, url }
    }
}

#[async_trait]
impl JobSource for RssSource {
    fn name(&self) -> &str {
        self.name
    }

    async fn fetch(&self, client: &reqwest::Client) -> Result<Vec<JobRecord>, SourceError> {
        let response = client.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        let feed = feed_rs::parser::parse(&body[..])?;

        Ok(feed_to_records(feed, self.name))
    }
}

fn feed_to_records(feed: Feed, source: &str) -> Vec<JobRecord> {
    feed.entries
        .into_iter()
        .take(MAX_ENTRIES)
        .map(|entry| {
            let payload = RawJobPayload {
                title: entry.title.as_ref().map(|t| t.content.clone()),
                company: entry
                    .authors
                    .first()
                    .map(|p| p.name.clone())
                    .filter(|n| !n.is_empty())
                    .or_else(|| Some("Unknown".to_string())),
                location: None,
                url: entry.links.first().map(|l| l.href.clone()),
                description: entry.summary.as_ref().map(|t| t.content.clone()),
            };
            payload.normalize(source)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const FEED_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0">
  <channel>
    <title>Jobs</title>
    <item>
      <title>Head of HR</title>
      <author>Acme Ltd</author>
      <link>https://example.com/jobs/1</link>
      <description>Senior HR leadership role in London</description>
    </item>
    <item>
      <title>HRBP</title>
      <link>https://example.com/jobs/2</link>
    </item>
  </channel>
</rss>"#;

    #[test]
    fn test_feed_entries_map_to_records() {
        let feed = feed_rs::parser::parse(FEED_XML.as_bytes()).unwrap();
        let records = feed_to_records(feed, "reed");

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].source, "reed");
        assert_eq!(records[0].title, "Head of HR");
        assert_eq!(records[0].url, "https://example.com/jobs/1");
        assert_eq!(records[0].description, "Senior HR leadership role in London");
        assert_eq!(records[0].location, "");
    }

    #[test]
    fn test_missing_author_falls_back_to_unknown() {
        let feed = feed_rs::parser::parse(FEED_XML.as_bytes()).unwrap();
        let records = feed_to_records(feed, "reed");
        assert_eq!(records[1].company, "Unknown");
        assert_eq!(records[1].description, "");
    }

    #[test]
    fn test_entries_are_capped() {
        let mut xml = String::from(
            r#"<?xml version="1.0" encoding="UTF-8"?><rss version="2.0"><channel><title>Jobs</title>"#,
        );
        for i in 0..60 {
            xml.push_str(&format!(
                "<item><title>Job {i}</title><link>https://example.com/{i}</link></item>"
            ));
        }
        xml.push_str("</channel></rss>");

        let feed = feed_rs::parser::parse(xml.as_bytes()).unwrap();
        assert_eq!(feed_to_records(feed, "indeed").len(), MAX_ENTRIES);
    }
}
