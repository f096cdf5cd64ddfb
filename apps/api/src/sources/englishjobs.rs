//! englishjobs.de scraper. Polite: one listing page, capped card count,
//! fixed delay after each fetch.

use std::time::Duration;

use async_trait::async_trait;
use scraper::{Html, Selector};

use crate::matching::record::{JobRecord, RawJobPayload};
use crate::sources::{JobSource, SourceError};

const MAX_CARDS: usize = 10;
const CRAWL_DELAY: Duration = Duration::from_secs(5);

pub struct EnglishJobsSource {
    keyword: String,
}

impl EnglishJobsSource {
    pub fn new(keyword: String) -> Self {
        Self { keyword }
    }
}

#[async_trait]
impl JobSource for EnglishJobsSource {
    fn name(&self) -> &str {
        "englishjobs.de"
    }

    async fn fetch(&self, client: &reqwest::Client) -> Result<Vec<JobRecord>, SourceError> {
        let url = format!("https://englishjobs.de/jobs/{}", self.keyword.to_lowercase());

        let response = client
            .get(&url)
            .header(reqwest::header::USER_AGENT, "Mozilla/5.0")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status(status.as_u16()));
        }

        let html = response.text().await?;
        let records = parse_listing(&html);

        // Crawl delay toward the scraped site.
        tokio::time::sleep(CRAWL_DELAY).await;

        Ok(records)
    }
}

/// Parses the listing page. Kept synchronous: `Html` is not `Send` and must
/// not live across an await point.
fn parse_listing(html: &str) -> Vec<JobRecord> {
    let document = Html::parse_document(html);
    let card_selector = Selector::parse("div.job-item").expect("card selector is valid");
    let title_selector = Selector::parse("h3").expect("title selector is valid");
    let link_selector = Selector::parse("a").expect("link selector is valid");

    document
        .select(&card_selector)
        .take(MAX_CARDS)
        .map(|card| {
            let title = card
                .select(&title_selector)
                .next()
                .map(|h| h.text().collect::<String>().trim().to_string())
                .filter(|t| !t.is_empty());
            let url = card
                .select(&link_selector)
                .next()
                .and_then(|a| a.value().attr("href"))
                .map(|href| href.to_string());

            let payload = RawJobPayload {
                title: title.or_else(|| Some("HR Job".to_string())),
                company: Some("N/A".to_string()),
                location: Some("Germany".to_string()),
                url,
                description: Some("HR / leadership role".to_string()),
            };
            payload.normalize("englishjobs.de")
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const LISTING_HTML: &str = r#"
        <html><body>
          <div class="job-item">
            <h3> Head of HR </h3>
            <a href="/job/head-of-hr">view</a>
          </div>
          <div class="job-item">
            <a href="/job/untitled">view</a>
          </div>
          <div class="other">ignored</div>
        </body></html>
    "#;

    #[test]
    fn test_parse_listing_extracts_title_and_link() {
        let records = parse_listing(LISTING_HTML);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].title, "Head of HR");
        assert_eq!(records[0].url, "/job/head-of-hr");
        assert_eq!(records[0].location, "Germany");
        assert_eq!(records[0].source, "englishjobs.de");
    }

    #[test]
    fn test_missing_title_falls_back() {
        let records = parse_listing(LISTING_HTML);
        assert_eq!(records[1].title, "HR Job");
    }

    #[test]
    fn test_cards_are_capped() {
        let mut html = String::from("<html><body>");
        for i in 0..15 {
            html.push_str(&format!(
                r#"<div class="job-item"><h3>Job {i}</h3><a href="/job/{i}">v</a></div>"#
            ));
        }
        html.push_str("</body></html>");
        assert_eq!(parse_listing(&html).len(), MAX_CARDS);
    }

    #[test]
    fn test_empty_page_yields_no_records() {
        assert!(parse_listing("<html><body></body></html>").is_empty());
    }
}
