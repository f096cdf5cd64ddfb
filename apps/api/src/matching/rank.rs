//! Ranking assembler — ordering and tabular export of scored matches.

use anyhow::{anyhow, Result};

use crate::matching::scorer::ScoredMatch;

/// Stable sort by score descending; equal scores keep their original
/// relative order. Pure function of its input.
pub fn sort_matches(mut matches: Vec<ScoredMatch>) -> Vec<ScoredMatch> {
    matches.sort_by(|a, b| b.score.total_cmp(&a.score));
    matches
}

/// Serializes matches to UTF-8 CSV bytes with a header row, columns in
/// `ScoredMatch` field order. Empty input produces empty bytes.
pub fn matches_to_csv(matches: &[ScoredMatch]) -> Result<Vec<u8>> {
    if matches.is_empty() {
        return Ok(Vec::new());
    }

    let mut writer = csv::Writer::from_writer(Vec::new());
    for m in matches {
        writer.serialize(m)?;
    }
    writer
        .into_inner()
        .map_err(|e| anyhow!("flushing CSV writer failed: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scored(title: &str, score: f64) -> ScoredMatch {
        ScoredMatch {
            title: title.to_string(),
            company: "Acme".to_string(),
            source: "test".to_string(),
            location: "Berlin".to_string(),
            url: format!("https://example.com/{title}"),
            score,
            snippet: "snippet".to_string(),
        }
    }

    #[test]
    fn test_sort_is_descending() {
        let sorted = sort_matches(vec![scored("a", 41.2), scored("b", 87.5), scored("c", 55.0)]);
        let scores: Vec<f64> = sorted.iter().map(|m| m.score).collect();
        assert_eq!(scores, vec![87.5, 55.0, 41.2]);
    }

    #[test]
    fn test_sort_is_stable_on_ties() {
        let sorted = sort_matches(vec![
            scored("first", 60.0),
            scored("second", 60.0),
            scored("third", 80.0),
        ]);
        let titles: Vec<&str> = sorted.iter().map(|m| m.title.as_str()).collect();
        assert_eq!(titles, vec!["third", "first", "second"]);
    }

    #[test]
    fn test_sort_handles_negative_scores() {
        let sorted = sort_matches(vec![scored("neg", -12.0), scored("pos", 40.0)]);
        assert_eq!(sorted[0].title, "pos");
        assert_eq!(sorted[1].title, "neg");
    }

    #[test]
    fn test_csv_header_and_column_order() {
        let bytes = matches_to_csv(&[scored("HR Director", 72.41)]).unwrap();
        let csv = String::from_utf8(bytes).unwrap();
        let mut lines = csv.lines();
        assert_eq!(
            lines.next().unwrap(),
            "title,company,source,location,url,score,snippet"
        );
        let row = lines.next().unwrap();
        assert!(row.starts_with("HR Director,Acme,test,Berlin,"));
        assert!(row.contains("72.41"));
    }

    #[test]
    fn test_csv_empty_input_is_empty_bytes() {
        assert!(matches_to_csv(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_csv_quotes_fields_with_commas() {
        let mut m = scored("Head of HR, EMEA", 65.0);
        m.company = "Acme, Inc".to_string();
        let csv = String::from_utf8(matches_to_csv(&[m]).unwrap()).unwrap();
        assert!(csv.contains("\"Head of HR, EMEA\""));
        assert!(csv.contains("\"Acme, Inc\""));
    }
}
