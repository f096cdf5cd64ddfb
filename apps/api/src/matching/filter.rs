//! HR relevance filter — coarse keyword gate applied before embedding cost.

use crate::matching::record::JobRecord;

/// Keyword fragments that mark a posting as HR-domain. Substring match over
/// the lowercased title + description.
pub const HR_KEYWORDS: &[&str] = &[
    "hr",
    "human resources",
    "people",
    "talent",
    "shared services",
    "people operations",
    "people ops",
    "hr director",
    "head of hr",
    "hrbp",
    "people director",
    "cpo",
    "chief people officer",
];

/// True when at least one HR keyword fragment appears in the record's
/// title or description (case-insensitive).
pub fn is_relevant(job: &JobRecord) -> bool {
    let haystack = format!("{} {}", job.title, job.description).to_lowercase();
    HR_KEYWORDS.iter().any(|kw| haystack.contains(kw))
}

/// Retains only HR-relevant records, preserving input order.
pub fn filter_relevant(jobs: Vec<JobRecord>) -> Vec<JobRecord> {
    jobs.into_iter().filter(is_relevant).collect()
}
